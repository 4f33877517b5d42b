use thiserror::Error;

const BASE_URL: &str = "https://pda.leo.org";

/// A failed page fetch, tagged so the driver can map each kind to its own
/// exit code.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Build the results-page URL for a source language and query.
///
/// `language_name` is the full name from the language table (e.g.
/// "englisch"); the target side is always German. The query is interpolated
/// verbatim; reqwest's URL parsing handles encoding when the request is
/// issued.
pub fn build_url(language_name: &str, query: &str) -> String {
    format!("{BASE_URL}/{language_name}-deutsch/{query}")
}

/// Fetch one results page.
///
/// Exactly one GET, no retry, no explicit timeout. A non-success status is
/// reported as [`FetchError::Status`] without reading the body.
pub async fn fetch_page(url: &str) -> Result<String, FetchError> {
    tracing::debug!(url = %url, "fetching results page");

    let client = reqwest::Client::builder()
        .user_agent(concat!("leodict/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(url).send().await.map_err(|err| {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Transport(err)
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            url: url.to_string(),
        });
    }

    let text = response.text().await?;
    tracing::debug!(bytes = text.len(), "received results page");
    Ok(text)
}
