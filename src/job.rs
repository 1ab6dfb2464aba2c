use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{instrument, Level};

use crate::config::{Config, Source};
use crate::fetch::{self, make_client};
use crate::menu::{self, WeeklyMenu};
use crate::{notify, parse, render};

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub items: usize,
    pub document_saved: bool,
}

/// One end-to-end run: fetch the week, render it, save the page and post the
/// message. Only saving the page is allowed to fail without failing the run.
#[instrument(skip_all, fields(label = %config.location_label), level = Level::INFO)]
pub async fn run(config: &Config, now: DateTime<Utc>) -> crate::Result<Report> {
    let client = make_client(config.timeout)?;
    let menu = match &config.source {
        Source::Page { url, layout } => {
            log::info!("Fetching weekly menu from {url}");
            let html = fetch::page(&client, url).await?;
            parse::weekly_menu(
                &html,
                *layout,
                &config.location_label,
                now,
                Some(url.clone()),
            )?
        }
        Source::Cafe(cafe) => {
            let pages = fetch::week_pages(&client, cafe, menu::week_of(now.date_naive())).await?;
            parse::daily_pages(&pages, &config.location_label, now)?
        }
    };
    log::info!(
        "Found {} items for the week of {}",
        menu.item_count(),
        menu.week_of()
    );
    trace_menu(&menu);

    let message = render::chat_message(&menu);
    let document = render::document(&menu);
    let document_saved = save_document(&config.output_path, &document).await;
    notify::post(&client, &config.webhook_url, &message).await?;

    Ok(Report {
        items: menu.item_count(),
        document_saved,
    })
}

fn trace_menu(menu: &WeeklyMenu) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    match serde_json::to_string_pretty(menu) {
        Ok(json) => log::trace!("Extracted menu:\n{json}"),
        Err(e) => log::trace!("Could not serialize menu: {e}"),
    }
}

async fn save_document(path: &Path, document: &str) -> bool {
    match tokio::fs::write(path, document).await {
        Ok(()) => {
            log::info!("Saved menu page to {}", path.display());
            true
        }
        Err(e) => {
            log::warn!("Could not save menu page to {}: {e}", path.display());
            false
        }
    }
}
