//! Fetch a single web page and pull out its title, h1-h3 headings and links.

pub mod config;
pub mod error;
pub mod extractor;
pub mod io;
pub mod lifecycle;
pub mod views;

use anyhow::Context;
use url::Url;

use crate::error::Result;
use crate::extractor::{ExtractionResult, PageExtractor};

/// Fetch `url`, then extract from the parsed document.
pub async fn scan(url: &Url) -> Result<ExtractionResult> {
    let document = io::http_client::fetch_html_from_url(url).await?;
    Ok(PageExtractor::extract(&document))
}

/// Scan `url` and write the report to `out`.
///
/// Nothing is written unless the fetch succeeds.
pub async fn run<W: std::io::Write>(url: &Url, out: &mut W) -> anyhow::Result<()> {
    let result = scan(url).await.context("Error fetching HTML")?;
    views::report::render(&result, out).context("Failed to write report")?;
    Ok(())
}
