//! The transport handle used for server-side template rendering
//!
//! A [`Transport`] layers group/version/path/content-type scoping on top of
//! an externally supplied, already-authenticated [`kube::Client`]. It speaks
//! JSON only; the client's own configuration governs timeouts and TLS.

use http::HeaderValue;
use http::header::{ACCEPT, USER_AGENT};
use kube::api::PostParams;
use kube::core::Request;
use serde_json::Value;

use crate::error::{Result, TemplateError};
use crate::options::ApiOptions;

/// The only content type the installed serializer understands.
const SUPPORTED_MIMETYPE: &str = "application/json";

/// User-agent supplied when the underlying request carries none.
const DEFAULT_USER_AGENT: &str = concat!("shiftkit/", env!("CARGO_PKG_VERSION"));

/// A client bound to one API group/version/path, used to issue the remote
/// render request.
#[derive(Clone)]
pub struct Transport {
    client: kube::Client,
    base_path: String,
    resource: String,
}

impl Transport {
    /// Validate `opts` and bind `client` to the endpoint they describe.
    ///
    /// Fails with [`TemplateError::TransportConfig`] when the MIME type is
    /// anything but `application/json`, or when the group/version/path
    /// combination cannot form a request path.
    pub fn bind(client: kube::Client, opts: &ApiOptions) -> Result<Self> {
        if opts.mimetype != SUPPORTED_MIMETYPE {
            return Err(TemplateError::config(format!(
                "unsupported content type '{}': only '{}' is supported",
                opts.mimetype, SUPPORTED_MIMETYPE
            )));
        }
        if opts.group.is_empty() || opts.version.is_empty() {
            return Err(TemplateError::config(
                "api group and version must not be empty",
            ));
        }
        if !opts.path.starts_with('/') {
            return Err(TemplateError::config(format!(
                "api path '{}' must start with '/'",
                opts.path
            )));
        }
        if opts.resource.is_empty() {
            return Err(TemplateError::config("api resource must not be empty"));
        }

        let base_path = format!(
            "{}/{}/{}",
            opts.path.trim_end_matches('/'),
            opts.group,
            opts.version
        );

        Ok(Self {
            client,
            base_path,
            resource: opts.resource.clone(),
        })
    }

    /// Issue a creation-style request to the bound resource under
    /// `namespace`, returning the response body as a generic JSON document.
    pub async fn create(&self, namespace: &str, body: Vec<u8>) -> Result<Value> {
        if namespace.is_empty() {
            return Err(TemplateError::config("namespace must not be empty"));
        }

        let url_path = format!("{}/namespaces/{}/{}", self.base_path, namespace, self.resource);
        tracing::debug!(%url_path, "posting template for server-side processing");

        let mut request = Request::new(url_path)
            .create(&PostParams::default(), body)
            .map_err(|e| TemplateError::config(e.to_string()))?;

        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static(SUPPORTED_MIMETYPE));
        if !headers.contains_key(USER_AGENT) {
            headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        }

        self.client
            .request::<Value>(request)
            .await
            .map_err(TemplateError::Transport)
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_path", &self.base_path)
            .field("resource", &self.resource)
            .finish_non_exhaustive()
    }
}
