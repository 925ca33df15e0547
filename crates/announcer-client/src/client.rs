//! HTTP client for the SkyDNS registry.

use announcer_core::{AnnounceError, Result};
use reqwest::Client as HttpClient;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Fixed key prefix under which announcements are stored.
const SERVICE_KEY_PREFIX: [&str; 3] = ["skydns", "local", "skydns"];

/// Registration request body, serialized as `{"host":"<ip>"}`.
#[derive(Debug, Serialize)]
struct HostRecord<'a> {
    host: &'a str,
}

/// Client for announcing a host to a SkyDNS etcd registry.
///
/// One client per invocation; it carries no state between calls beyond the
/// parsed base URL and the underlying connection handle.
#[derive(Debug)]
pub struct RegistryClient {
    http: HttpClient,
    base_url: Url,
}

impl RegistryClient {
    /// Create a client for the given registry base address.
    ///
    /// The HTTP client keeps its default configuration: no request timeout,
    /// no TLS tuning, no pool tuning. A hung registry blocks the single
    /// announce call until the OS gives up on the connection.
    pub fn new(registry_address: &str) -> Result<Self> {
        let base_url = Url::parse(registry_address)
            .map_err(|e| AnnounceError::InvalidRegistryUrl(format!("{registry_address}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AnnounceError::InvalidRegistryUrl(format!(
                "{registry_address}: not a base URL"
            )));
        }

        Ok(Self {
            http: HttpClient::new(),
            base_url,
        })
    }

    /// Announce `ip` under the service-discovery key for `hostname`.
    ///
    /// Issues exactly one PUT; the registry creates or overwrites the record
    /// under the computed key. Only a 200 response counts as success — any
    /// other status, 2xx included, is a rejection.
    pub async fn announce(&self, ip: &str, hostname: &str) -> Result<()> {
        let url = self.announce_url(hostname)?;
        debug!(url = %url, ip = %ip, "PUT announcement");

        let response = self
            .http
            .put(url)
            .json(&HostRecord { host: ip })
            .send()
            .await
            .map_err(|e| AnnounceError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(AnnounceError::AnnounceFailed {
                status: status.as_u16(),
            }),
        }
    }

    /// Build `{base}/skydns/local/skydns/{hostname}`, with `hostname`
    /// appended as a single escaped path segment.
    fn announce_url(&self, hostname: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AnnounceError::InvalidRegistryUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(SERVICE_KEY_PREFIX)
            .push(hostname);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_announce_url_shape() {
        let client = RegistryClient::new("http://etcd:2379").unwrap();
        let url = client.announce_url("pod-1").unwrap();
        assert_eq!(url.as_str(), "http://etcd:2379/skydns/local/skydns/pod-1");
    }

    #[test]
    fn test_announce_url_trailing_slash_base() {
        let client = RegistryClient::new("http://etcd:2379/").unwrap();
        let url = client.announce_url("pod-1").unwrap();
        assert_eq!(url.as_str(), "http://etcd:2379/skydns/local/skydns/pod-1");
    }

    #[test]
    fn test_hostname_escaped_as_single_segment() {
        let client = RegistryClient::new("http://etcd:2379").unwrap();
        let url = client.announce_url("pods/evil").unwrap();
        assert_eq!(
            url.as_str(),
            "http://etcd:2379/skydns/local/skydns/pods%2Fevil"
        );
    }

    #[test]
    fn test_rejects_malformed_registry_address() {
        let err = RegistryClient::new("not a url").unwrap_err();
        assert!(matches!(err, AnnounceError::InvalidRegistryUrl(_)));

        let err = RegistryClient::new("mailto:etcd@example.com").unwrap_err();
        assert!(matches!(err, AnnounceError::InvalidRegistryUrl(_)));
    }

    #[test]
    fn test_host_record_wire_shape() {
        let body = serde_json::to_string(&HostRecord { host: "10.0.0.5" }).unwrap();
        assert_eq!(body, r#"{"host":"10.0.0.5"}"#);
    }

    #[tokio::test]
    async fn test_announce_puts_record_under_service_key() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/skydns/local/skydns/pod-1"))
            .and(body_json(json!({"host": "10.0.0.5"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = RegistryClient::new(&server.uri()).unwrap();
        client.announce("10.0.0.5", "pod-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_non_200_is_rejected_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = RegistryClient::new(&server.uri()).unwrap();
        let err = client.announce("10.0.0.5", "pod-1").await.unwrap_err();
        assert!(matches!(err, AnnounceError::AnnounceFailed { status: 500 }));
    }

    #[tokio::test]
    async fn test_other_2xx_is_still_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = RegistryClient::new(&server.uri()).unwrap();
        let err = client.announce("10.0.0.5", "pod-1").await.unwrap_err();
        assert_eq!(err.status_code(), Some(201));
    }

    #[tokio::test]
    async fn test_repeat_announce_sends_identical_requests() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/skydns/local/skydns/pod-1"))
            .and(body_json(json!({"host": "10.0.0.5"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(2)
            .mount(&server)
            .await;

        let client = RegistryClient::new(&server.uri()).unwrap();
        client.announce("10.0.0.5", "pod-1").await.unwrap();
        client.announce("10.0.0.5", "pod-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_dead_endpoint_is_a_transport_error() {
        // Bind to grab a free port, then drop the listener so nothing is
        // listening when the client connects.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = RegistryClient::new(&format!("http://{addr}")).unwrap();
        let err = client.announce("10.0.0.5", "pod-1").await.unwrap_err();
        assert!(matches!(err, AnnounceError::Transport(_)));
    }
}
