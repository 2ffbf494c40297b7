//! Streaming HTTP retrieval of remote images.

use futures_util::StreamExt;

use crate::error::SourceError;

/// Cap on the capacity reserved up front from a `Content-Length` header.
const MAX_PREALLOC: usize = 16 * 1024 * 1024;

/// Download `url` into memory, streaming the body.
///
/// Any transport failure or non-success status is a [`SourceError::Network`].
/// No retries; the client's default timeouts apply.
pub(crate) async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, SourceError> {
    let network = |message: String| SourceError::Network {
        url: url.to_string(),
        message,
    };

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| network(format!("request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(network(format!("HTTP {status}")));
    }

    let reserve = response
        .content_length()
        .map(|len| (len as usize).min(MAX_PREALLOC))
        .unwrap_or(0);
    let mut body = Vec::with_capacity(reserve);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| network(format!("error reading body: {e}")))?;
        body.extend_from_slice(&chunk);
    }

    tracing::debug!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/photo.jpg")
            .with_status(200)
            .with_body(vec![1u8, 2, 3, 4, 5])
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let body = fetch_bytes(&client, &format!("{}/photo.jpg", server.url()))
            .await
            .unwrap();

        assert_eq!(body, vec![1, 2, 3, 4, 5]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_network_error() {
        let mut server = mockito::Server::new_async().await;
        for status in [403, 404, 500] {
            let path = format!("/gone-{status}.jpg");
            let _mock = server
                .mock("GET", path.as_str())
                .with_status(status)
                .create_async()
                .await;

            let client = reqwest::Client::new();
            let err = fetch_bytes(&client, &format!("{}{path}", server.url()))
                .await
                .unwrap_err();

            match err {
                SourceError::Network { message, .. } => {
                    assert!(message.contains(&status.to_string()), "{message}")
                }
                other => panic!("expected network error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_network_error() {
        let client = reqwest::Client::new();
        let err = fetch_bytes(&client, "not a url").await.unwrap_err();
        assert!(matches!(err, SourceError::Network { .. }));
    }
}
