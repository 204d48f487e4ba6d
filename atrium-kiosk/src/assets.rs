//! Asset fetching: one terminal completion per resource, no retries.
//!
//! A failed fetch is reported exactly like a successful one as far as the
//! readiness gate is concerned; the page stops waiting either way. Videos
//! are availability-checked (fetched and discarded), never decoded.

use std::time::Duration;

use iced::Task;
use iced::widget::image;
use reqwest::Client;

use atrium_model::{AssetDescriptor, AssetId, AssetKind};

use crate::message::Message;

/// Shared HTTP client with connection pooling for asset fetches.
pub fn build_client() -> Client {
    Client::builder()
        .pool_max_idle_per_host(10)
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
}

/// What a successful fetch hands back to the update loop.
#[derive(Debug, Clone)]
pub enum FetchedPayload {
    Image(image::Handle),
    /// Availability confirmed; the bytes were discarded.
    Video,
}

/// The single error kind of the preload pipeline.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("http {status} fetching {url}")]
    Http { status: u16, url: String },
    #[error("network error: {0}")]
    Network(String),
}

/// Fetch raw bytes from a URL.
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, anyhow::Error> {
    log::info!("Fetching asset from URL: {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoaderError::Network(e.to_string()))?;

    if !response.status().is_success() {
        log::warn!("Failed to fetch asset: {} - {}", url, response.status());
        return Err(LoaderError::Http {
            status: response.status().as_u16(),
            url: url.to_string(),
        }
        .into());
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| LoaderError::Network(e.to_string()))?;
    Ok(bytes.to_vec())
}

async fn fetch_payload(
    client: &Client,
    base: &str,
    descriptor: &AssetDescriptor,
) -> Result<FetchedPayload, anyhow::Error> {
    let url = descriptor.resolve_url(base)?;
    let bytes = fetch_bytes(client, &url).await?;

    match descriptor.kind {
        AssetKind::Image => Ok(FetchedPayload::Image(image::Handle::from_bytes(bytes))),
        AssetKind::Video => Ok(FetchedPayload::Video),
    }
}

/// Fetch one asset and return it with its identity; the error is stringified
/// so the result can cross the message boundary.
pub async fn fetch_asset(
    client: Client,
    base: String,
    descriptor: AssetDescriptor,
) -> (AssetId, Result<FetchedPayload, String>) {
    let id = descriptor.id.clone();
    let result = fetch_payload(&client, &base, &descriptor)
        .await
        .map_err(|e| e.to_string());
    (id, result)
}

/// Task wrapper around [`fetch_asset`], stamped with the issuing epoch so
/// stale completions can be dropped after navigation.
pub fn load_task(
    client: &Client,
    base: &str,
    descriptor: AssetDescriptor,
    epoch: u64,
) -> Task<Message> {
    Task::perform(
        fetch_asset(client.clone(), base.to_string(), descriptor),
        move |(id, result)| Message::AssetFetched { epoch, id, result },
    )
}

/// One-shot delayed message, used for gate deadlines, overlay holds and the
/// landing dwell. The sleep is created inside the future so building the
/// task never touches the timer driver.
pub fn delay_task(delay: Duration, message: Message) -> Task<Message> {
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |_| message.clone(),
    )
}
