//! Transport configuration for the template API

/// Immutable description of the API endpoint a [`Transport`](crate::Transport)
/// is bound to: group, version, path prefix, content MIME type, and resource
/// name.
///
/// The default targets the OpenShift template API
/// (`/apis/template.openshift.io/v1`, `processedtemplates`, JSON).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiOptions {
    /// API group, e.g. `template.openshift.io`.
    pub group: String,
    /// API version within the group.
    pub version: String,
    /// Request path prefix, e.g. `/apis`.
    pub path: String,
    /// MIME type used for both the accept and content-type headers.
    pub mimetype: String,
    /// Resource name the render request is posted to.
    pub resource: String,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            group: "template.openshift.io".to_string(),
            version: "v1".to_string(),
            path: "/apis".to_string(),
            mimetype: "application/json".to_string(),
            resource: "processedtemplates".to_string(),
        }
    }
}
