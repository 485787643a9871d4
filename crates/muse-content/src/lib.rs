//! Content source client for the Muse storefront.
//!
//! Products, reviews, and page copy live in a headless CMS. This crate
//! provides the HTTP plumbing to reach it, the [`ContentSource`] seam the rest
//! of the storefront depends on, a DatoCMS implementation of that seam, and
//! views that compose a source with the pure catalogue and fit logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use muse_content::{CatalogueView, DatoCmsClient, DatoCmsConfig};
//!
//! let cms = DatoCmsClient::new(DatoCmsConfig::from_env())?;
//! let view = CatalogueView::load(&cms).await;
//!
//! let spec = view.default_spec().clone().with_search("kebaya");
//! for product in view.query(&spec) {
//!     println!("{}", product.name);
//! }
//! ```

mod catalogue;
mod datocms;
mod error;
mod fit_page;
mod request;
mod response;
mod source;

pub use catalogue::CatalogueView;
pub use datocms::{DatoCmsClient, DatoCmsConfig, DEFAULT_ENDPOINT, DEFAULT_ENVIRONMENT};
pub use error::{ContentFetchError, FetchError};
pub use fit_page::{FitOutcome, FitPage};
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use source::{CheckFitPage, ContentSource, DefaultFit, ProductFit};

/// HTTP client for making outbound requests.
///
/// A thin wrapper around a shared `reqwest` client that adds default
/// headers and buffers every response in full.
#[derive(Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    default_headers: Vec<(String, String)>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            default_headers: Vec::new(),
        }
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let mut builder = RequestBuilder::new(method, url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            http: self.http.clone(),
            builder,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    http: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Inspect the request as built so far.
    pub fn request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and return the buffered response.
    pub async fn send(self) -> Result<Response, FetchError> {
        let RequestBuilder {
            method,
            url,
            headers,
            body,
        } = self.builder;

        let mut request = self.http.request(method.to_reqwest(), &url);
        for (key, value) in &headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        tracing::debug!(method = method.as_str(), %url, "outbound request");
        let response = request.send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CatalogueView, ContentFetchError, ContentSource, DatoCmsClient, DatoCmsConfig,
        FetchClient, FetchError, FitOutcome, FitPage, Method, Response,
    };
}
