use std::time::Duration;

use chrono::Local;
use reqwest::Client;

use super::prelude::*;

/// Upper bound for a single ping, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the HTTP client shared by every ping.
pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

/// GET `url` once and record what happened. Never fails: transport errors become
/// a `PingOutcome::Failure`.
pub async fn ping_url(client: &Client, url: &str) -> PingAttempt {
    let timestamp = Local::now();

    let outcome = match fetch(client, url).await {
        Ok((status, body)) => PingOutcome::response(status, &body),
        Err(e) => PingOutcome::Failure(e),
    };

    PingAttempt {
        url: url.to_string(),
        timestamp,
        outcome,
    }
}

async fn fetch(client: &Client, url: &str) -> Result<(u16, String), PingError> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok((status, body))
}

#[cfg(test)]
pub mod test {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `status`/`body` to every request and count the requests.
    pub async fn serve(status: &'static str, body: &'static str) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                counter.fetch_add(1, Ordering::SeqCst);
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        (format!("http://{addr}/health"), hits)
    }

    /// A URL on a port nobody listens on.
    pub async fn refused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        drop(listener);
        format!("http://{addr}/health")
    }

    #[tokio::test]
    async fn test_ping_ok() {
        let (url, hits) = serve("200 OK", "OK").await;
        let client = build_client().expect("Failed to create client");

        let attempt = ping_url(&client, &url).await;

        assert_eq!(attempt.url, url);
        match attempt.outcome {
            PingOutcome::Response { status, body } => {
                assert_eq!(status, 200);
                assert_eq!(body, "OK");
            }
            PingOutcome::Failure(e) => panic!("Unexpected failure: {e}"),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_server_error_is_a_response() {
        let (url, _) = serve("500 Internal Server Error", "down").await;
        let client = build_client().expect("Failed to create client");

        let attempt = ping_url(&client, &url).await;

        assert_eq!(attempt.outcome.to_string(), "500 - down");
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_failure() {
        let url = refused_url().await;
        let client = build_client().expect("Failed to create client");

        let attempt = ping_url(&client, &url).await;

        match attempt.outcome {
            PingOutcome::Failure(e) => assert!(!e.to_string().is_empty()),
            PingOutcome::Response { status, .. } => panic!("Unexpected response: {status}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_failure() {
        let client = build_client().expect("Failed to create client");

        let attempt = ping_url(&client, "not a url").await;

        assert!(matches!(attempt.outcome, PingOutcome::Failure(_)));
        assert_eq!(attempt.url, "not a url");
    }
}
