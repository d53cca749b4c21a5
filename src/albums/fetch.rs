// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the photo list and to thumbnails.
//!
//! One `GET` returns the whole list as a JSON array; albums are formed on
//! the client. There is no retry and no timeout beyond reqwest's defaults.

use crate::domain::PhotoRecord;
use crate::error::{HttpError, Result};

const USER_AGENT: &str = concat!("IcedAlbums/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by all requests of the application.
pub fn build_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| HttpError::Transport(e.to_string()))?;
    Ok(client)
}

/// Fetches and decodes the photo list at `endpoint`.
pub async fn fetch_photos(client: reqwest::Client, endpoint: String) -> Result<Vec<PhotoRecord>> {
    tracing::debug!(%endpoint, "fetching photo list");
    let body = get_bytes(&client, &endpoint).await?;
    let records = serde_json::from_slice(&body)?;
    Ok(records)
}

/// Downloads the raw bytes of a thumbnail image.
pub async fn fetch_thumbnail(client: reqwest::Client, url: String) -> Result<Vec<u8>> {
    get_bytes(&client, &url).await
}

async fn get_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| HttpError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(HttpError::Status(status.as_u16()).into());
    }

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}
