mod error;
mod layout;
mod menu_item;
mod noise;
mod remove_excess_whitespace;
mod static_selector;
mod text_from_selection;
mod weekday;
mod weekly_menu;

pub use error::Error;
pub use layout::Layout;
pub use remove_excess_whitespace::remove_excess_whitespace;
pub use weekly_menu::{daily_pages, weekly_menu, DayPage};
