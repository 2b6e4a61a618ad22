//! Browser-side file retrieval for the preview pipeline.

use gloo_net::http::Request;
use nexus_core::preview::FetchError;

/// Fetch a template source file as text. Non-2xx responses become
/// [`FetchError::Http`] with the status line in the message.
pub async fn fetch_text(path: String) -> Result<String, FetchError> {
    let response = Request::get(&path).send().await.map_err(|err| FetchError::Network {
        path: path.clone(),
        reason: err.to_string(),
    })?;

    if !response.ok() {
        return Err(FetchError::Http {
            path,
            status: format!("{} {}", response.status(), response.status_text()),
        });
    }

    response.text().await.map_err(|err| FetchError::Network {
        path,
        reason: err.to_string(),
    })
}
