use reqwest::{Client, StatusCode};
use scraper::Html;
use url::Url;

use crate::error::{FetchError, Result};

/// Fetch `url` with a single GET and parse the body as an HTML document.
///
/// Only a 200 response is accepted. The body is read whole before parsing,
/// which consumes the response and releases the connection on every path.
pub async fn fetch_html_from_url(url: &Url) -> Result<Html> {
    tracing::info!("Fetching HTML from URL: {}", url);
    let client = Client::builder().build().map_err(FetchError::Transport)?;

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(FetchError::Transport)?;

    let status = response.status();
    tracing::debug!("Received status {} from {}", status, url);
    if status != StatusCode::OK {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await.map_err(FetchError::Parse)?;
    let document = Html::parse_document(&body);

    // html5ever recovers from malformed markup; its complaints are informational
    if !document.errors.is_empty() {
        tracing::debug!("Parser recovered from {} markup errors", document.errors.len());
        for err in &document.errors {
            tracing::debug!("{}", err);
        }
    }

    Ok(document)
}
