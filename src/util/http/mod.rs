use std::time::Instant;

use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;
use reqwest::{Client, Url};

use crate::logging;

pub mod element;
#[cfg(test)]
pub(crate) mod test_server;

/// A singleton instance of the reqwest client.
static CLIENT: OnceCell<Client> = OnceCell::new();

/// Returns the reqwest client singleton instance or creates one if it doesn't exist.
///
/// The client keeps reqwest's defaults: no timeout, no retry, no custom
/// headers, and the standard redirect policy.
fn get_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        // reqwest 使用 rustls-no-provider，建立 client 前需先安裝加密實作
        let _ = rustls::crypto::ring::default_provider().install_default();

        Client::builder()
            .build()
            .map_err(|e| anyhow!("Failed to create reqwest client: {:?}", e))
    })
}

/// Performs a single HTTP GET request and returns the response as text.
///
/// # Arguments
///
/// * `url`: The URL to send the GET request to.
///
/// # Returns
///
/// * `Result<String>`: The response text, or an error if the URL is invalid, the
///   request fails, the status is not 2xx, or the body cannot be read.
pub async fn get(url: &str) -> Result<String> {
    let url = Url::parse(url)
        .map_err(|why| anyhow!("Failed to parse url '{}' because {:?}", url, why))?;
    let visit_log = format!("GET:{}", url);
    let client = get_client()?;
    let start = Instant::now();
    let res = client.get(url).send().await;
    let elapsed = start.elapsed().as_millis();

    let response = match res {
        Ok(response) => {
            logging::info_file_async(format!(
                "{} {} {} ms",
                visit_log,
                response.status(),
                elapsed
            ));
            response
        }
        Err(why) => {
            logging::error_file_async(format!(
                "{} failed because {:?}. {} ms",
                visit_log, why, elapsed
            ));
            return Err(anyhow!("Failed to send request {} because {:?}", visit_log, why));
        }
    };

    response
        .error_for_status()
        .map_err(|why| anyhow!("Unexpected response status of {}: {:?}", visit_log, why))?
        .text()
        .await
        .map_err(|e| anyhow!("Error parsing response text: {:?}", e))
}
