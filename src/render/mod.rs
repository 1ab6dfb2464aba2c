//! Presentation of a [`WeeklyMenu`](crate::menu::WeeklyMenu). Both renderers
//! are pure: the same menu always renders to the same bytes.

mod chat;
mod document;

pub use chat::{chat_message, NO_MENU};
pub use document::document;
