use reqwest::blocking::{Client, Request, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{HubApiError, Result};

/// Authenticated JSON transport shared by every resource client.
///
/// Every request goes to `base_url + path` with `Content-Type: application/json`
/// and `Authorization: Bearer <credential>`. Only a `200 OK` response counts as
/// success; every other status, other 2xx codes included, is returned as
/// [`HubApiError::Status`] carrying the raw body.
#[derive(Debug, Clone)]
pub struct Transport {
    config: ClientConfig,
    http: Client,
}

impl Transport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(HubApiError::RequestBuild)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the full URL for a given endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url())
    }

    pub(crate) fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request> {
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.config.credential()));
        if let Some(body) = body {
            builder = builder.body(body);
        }
        builder.build().map_err(HubApiError::RequestBuild)
    }

    /// Send a request and reject anything but `200 OK`.
    fn execute(&self, request: Request) -> Result<Response> {
        tracing::debug!(method = %request.method(), url = %request.url(), "sending hub request");
        let response = self.http.execute(request)?;
        let status = response.status();
        tracing::debug!(%status, "hub response received");

        if status != StatusCode::OK {
            // The status is the error; a body that fails to read just stays empty.
            let body = response.bytes().map(|b| b.to_vec()).unwrap_or_default();
            return Err(HubApiError::Status { status, body });
        }
        Ok(response)
    }

    fn send_json<P>(&self, method: Method, path: &str, payload: &P) -> Result<Response>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload).map_err(HubApiError::Serialize)?;
        let request = self.build_request(method, path, Some(body))?;
        self.execute(request)
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response.bytes()?;
        serde_json::from_slice(&bytes).map_err(HubApiError::Decode)
    }

    // ---- verbs -------------------------------------------------------------

    /// Send a GET request and decode the body into `T`. GET never carries a body.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.build_request(Method::GET, path, None)?;
        Self::decode(self.execute(request)?)
    }

    /// Send a POST request with a JSON payload and decode the body into `T`.
    pub fn post<P, T>(&self, path: &str, payload: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Self::decode(self.send_json(Method::POST, path, payload)?)
    }

    /// Send a PUT request with a JSON payload and decode the body into `T`.
    pub fn put<P, T>(&self, path: &str, payload: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Self::decode(self.send_json(Method::PUT, path, payload)?)
    }

    /// Send a DELETE request. The hub expects the payload as a JSON body.
    pub fn delete<P, T>(&self, path: &str, payload: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Self::decode(self.send_json(Method::DELETE, path, payload)?)
    }

    // ---- verbs whose response body is not decoded --------------------------

    pub fn get_discard(&self, path: &str) -> Result<()> {
        let request = self.build_request(Method::GET, path, None)?;
        self.execute(request).map(drop)
    }

    pub fn post_discard<P: Serialize + ?Sized>(&self, path: &str, payload: &P) -> Result<()> {
        self.send_json(Method::POST, path, payload).map(drop)
    }

    pub fn put_discard<P: Serialize + ?Sized>(&self, path: &str, payload: &P) -> Result<()> {
        self.send_json(Method::PUT, path, payload).map(drop)
    }

    pub fn delete_discard<P: Serialize + ?Sized>(&self, path: &str, payload: &P) -> Result<()> {
        self.send_json(Method::DELETE, path, payload).map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigOption, DEFAULT_BASE_URL};

    fn transport() -> Transport {
        Transport::new(ClientConfig::resolve("apiKey", []).unwrap()).unwrap()
    }

    #[test]
    fn test_build_request_sets_url_and_headers() {
        let req = transport()
            .build_request(Method::GET, "/hello", None)
            .unwrap();
        assert_eq!(req.url().as_str(), format!("{DEFAULT_BASE_URL}/hello"));
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(req.headers()[AUTHORIZATION], "Bearer apiKey");
        assert!(req.body().is_none());
    }

    #[test]
    fn test_build_request_attaches_body() {
        let req = transport()
            .build_request(Method::DELETE, "/repos/delete", Some(b"{\"a\":1}".to_vec()))
            .unwrap();
        assert_eq!(*req.method(), Method::DELETE);
        let body = req.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, b"{\"a\":1}");
    }

    #[test]
    fn test_build_request_rejects_bad_url() {
        let config =
            ClientConfig::resolve("apiKey", [ConfigOption::base_url("not a url")]).unwrap();
        let err = Transport::new(config)
            .unwrap()
            .build_request(Method::GET, "/models", None)
            .unwrap_err();
        assert!(matches!(err, HubApiError::RequestBuild(_)), "{err:?}");
    }

    #[test]
    fn test_build_request_rejects_bad_header_value() {
        let config = ClientConfig::resolve("line\nbreak", []).unwrap();
        let err = Transport::new(config)
            .unwrap()
            .build_request(Method::GET, "/models", None)
            .unwrap_err();
        assert!(matches!(err, HubApiError::RequestBuild(_)), "{err:?}");
    }

    #[test]
    fn test_transport_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Transport>();
    }
}
