//! HTTP client wrapper - fetches IBGE locality lists and formats failures

use std::time::{Duration, Instant};

use crate::messages::NetworkResponse;
use crate::models::{City, FetchKind, Uf};

/// Create an HTTP client with the configured timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// `GET {base}/estados`
pub fn states_url(base_url: &str) -> String {
    format!("{}/estados", base_url.trim_end_matches('/'))
}

/// `GET {base}/estados/{sigla}/municipios`
pub fn cities_url(base_url: &str, uf: &str) -> String {
    format!(
        "{}/estados/{}/municipios",
        base_url.trim_end_matches('/'),
        uf
    )
}

/// Fetch the full list of federative units
pub async fn fetch_states(
    client: &reqwest::Client,
    base_url: &str,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let result = get_json::<Vec<Uf>>(client, &states_url(base_url)).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(ufs) => NetworkResponse::States {
            id: request_id,
            ufs,
            time_ms: elapsed,
        },
        Err(message) => NetworkResponse::Error {
            id: request_id,
            kind: FetchKind::States,
            message,
            time_ms: elapsed,
        },
    }
}

/// Fetch the municipalities of one federative unit
pub async fn fetch_cities(
    client: &reqwest::Client,
    base_url: &str,
    uf: &str,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let result = get_json::<Vec<City>>(client, &cities_url(base_url, uf)).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(cities) => NetworkResponse::Cities {
            id: request_id,
            cities,
            time_ms: elapsed,
        },
        Err(message) => NetworkResponse::Error {
            id: request_id,
            kind: FetchKind::Cities,
            message,
            time_ms: elapsed,
        },
    }
}

/// Issue a GET and decode the JSON body. A payload that does not match the
/// expected shape is reported the same way a transport failure is.
async fn get_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, String> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(describe_error)?;
    let body = response.text().await.map_err(describe_error)?;
    serde_json::from_str(&body).map_err(|e| format!("Malformed response: {}", e))
}

fn describe_error(e: reqwest::Error) -> String {
    if e.is_timeout() {
        String::from("Request timed out")
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_status() {
        format!("Server returned {}", e.status().map(|s| s.as_u16()).unwrap_or(0))
    } else {
        format!("Request failed: {}", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_url() {
        assert_eq!(
            states_url("https://servicodados.ibge.gov.br/api/v1/localidades"),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados"
        );
    }

    #[test]
    fn test_cities_url_strips_trailing_slash() {
        assert_eq!(
            cities_url("https://example.com/api/", "SP"),
            "https://example.com/api/estados/SP/municipios"
        );
    }
}
