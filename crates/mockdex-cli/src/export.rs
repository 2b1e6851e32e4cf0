//! The export run: read candidate links, fetch and extract each interview
//! page sequentially, write the combined CSV.
//!
//! Per-page failures are logged and skipped rather than propagated so a
//! single bad page does not abort the full run. The only fatal precondition
//! is an empty link set after filtering — that aborts before any network
//! activity, since no output would be produced.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;

use mockdex_core::record::COLUMNS;
use mockdex_core::{AppConfig, InterviewRecord};
use mockdex_scraper::{extract_record, filter_links, PageClient, ScrapeError};

pub(crate) async fn run_export(
    config: &AppConfig,
    links_override: Option<PathBuf>,
    output_override: Option<PathBuf>,
) -> anyhow::Result<()> {
    let links_path = links_override.unwrap_or_else(|| config.links_path.clone());
    let output_path = output_override.unwrap_or_else(|| config.output_path.clone());

    let candidates = read_links(&links_path)
        .with_context(|| format!("failed to read links from {}", links_path.display()))?;
    let links = filter_links(&candidates);
    if links.is_empty() {
        return Err(ScrapeError::NoLinks.into());
    }

    let client = PageClient::new(config.request_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build page client: {e}"))?;

    let total = links.len();
    let mut rows: Vec<InterviewRecord> = Vec::with_capacity(total);

    for (idx, url) in links.iter().enumerate() {
        tracing::info!(position = idx + 1, total, url = %url, "processing interview page");

        let html = match client.fetch_page(url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(url = %url, error = %e, "fetch failed — skipping page");
                continue;
            }
        };

        rows.push(extract_record(&html, url));

        // Fixed pause after each successful fetch, respecting the remote
        // service's request rate.
        if config.inter_request_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(config.inter_request_delay_ms)).await;
        }
    }

    write_records(&output_path, &rows)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    tracing::info!(
        rows = rows.len(),
        path = %output_path.display(),
        "wrote interview table"
    );

    Ok(())
}

/// Reads candidate URLs from a CSV file: first field of each row, blanks
/// skipped, extra columns ignored.
pub(crate) fn read_links(path: &Path) -> anyhow::Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut links = Vec::new();
    for result in reader.records() {
        let record = result?;
        if let Some(first) = record.get(0) {
            let first = first.trim();
            if !first.is_empty() {
                links.push(first.to_string());
            }
        }
    }
    Ok(links)
}

/// Writes the header and all rows. The header is written explicitly so an
/// output file exists with the full 16-column schema even when every page
/// was skipped.
pub(crate) fn write_records(path: &Path, rows: &[InterviewRecord]) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
