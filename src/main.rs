#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod fetch;
mod job;
mod menu;
mod notify;
mod parse;
mod render;

use std::{env, process::ExitCode, time::Instant};

use crate::config::Config;

pub use error::{Error, Result};

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filters = env::var("RUST_LOG").unwrap_or_else(|_| "cafe_menu=info".to_string());
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            let e = Error::from(e);
            log::error!("{e}");
            return e.exit_code();
        }
    };
    log::debug!("{config:?}");

    let start = Instant::now();
    match job::run(&config, chrono::Utc::now()).await {
        Ok(report) => {
            if !report.document_saved {
                log::warn!("Menu delivered, but the page was not saved");
            }
            log::info!(
                "Posted {} items to the webhook in {:?}",
                report.items,
                start.elapsed()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            e.exit_code()
        }
    }
}
