//! The closed set of resource kinds this library can decode
//!
//! Instead of resolving a decoder behind a trait object at runtime, every
//! supported kind is a variant of [`Resource`]. Adding a kind means adding a
//! variant and extending the owning group decoder, and the compiler points at
//! every match that needs updating.

use k8s_openapi::Resource as ResourceType;
use k8s_openapi::api::core::v1::{ConfigMap, Pod, Secret, Service};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::openshift::{
    Build, BuildConfig, DeploymentConfig, ImageStream, RoleBinding, Route, Template,
};

/// A decoded Kubernetes or OpenShift object.
///
/// `Clone` produces a deep copy: the clone shares no state with the original.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    ConfigMap(ConfigMap),
    Pod(Pod),
    Secret(Secret),
    Service(Service),
    Build(Build),
    BuildConfig(BuildConfig),
    DeploymentConfig(DeploymentConfig),
    ImageStream(ImageStream),
    RoleBinding(RoleBinding),
    Route(Route),
    Template(Box<Template>),
}

impl Resource {
    /// The object's kind, e.g. `Pod` or `Route`.
    pub fn kind(&self) -> &str {
        match self {
            Resource::ConfigMap(_) => ConfigMap::KIND,
            Resource::Pod(_) => Pod::KIND,
            Resource::Secret(_) => Secret::KIND,
            Resource::Service(_) => Service::KIND,
            Resource::Build(b) => &b.types.kind,
            Resource::BuildConfig(bc) => &bc.types.kind,
            Resource::DeploymentConfig(dc) => &dc.types.kind,
            Resource::ImageStream(is) => &is.types.kind,
            Resource::RoleBinding(rb) => &rb.types.kind,
            Resource::Route(r) => &r.types.kind,
            Resource::Template(t) => &t.types.kind,
        }
    }

    /// The object's `apiVersion`, e.g. `v1` or `route.openshift.io/v1`.
    pub fn api_version(&self) -> &str {
        match self {
            Resource::ConfigMap(_) => ConfigMap::API_VERSION,
            Resource::Pod(_) => Pod::API_VERSION,
            Resource::Secret(_) => Secret::API_VERSION,
            Resource::Service(_) => Service::API_VERSION,
            Resource::Build(b) => &b.types.api_version,
            Resource::BuildConfig(bc) => &bc.types.api_version,
            Resource::DeploymentConfig(dc) => &dc.types.api_version,
            Resource::ImageStream(is) => &is.types.api_version,
            Resource::RoleBinding(rb) => &rb.types.api_version,
            Resource::Route(r) => &r.types.api_version,
            Resource::Template(t) => &t.types.api_version,
        }
    }

    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            Resource::ConfigMap(cm) => &cm.metadata,
            Resource::Pod(p) => &p.metadata,
            Resource::Secret(s) => &s.metadata,
            Resource::Service(s) => &s.metadata,
            Resource::Build(b) => &b.metadata,
            Resource::BuildConfig(bc) => &bc.metadata,
            Resource::DeploymentConfig(dc) => &dc.metadata,
            Resource::ImageStream(is) => &is.metadata,
            Resource::RoleBinding(rb) => &rb.metadata,
            Resource::Route(r) => &r.metadata,
            Resource::Template(t) => &t.metadata,
        }
    }

    /// The object's `metadata.name`, when set.
    pub fn name(&self) -> Option<&str> {
        self.metadata().name.as_deref()
    }

    /// Re-serialize to the generic key-value document form.
    ///
    /// Any object produced by the loader can be fed back through
    /// [`Scheme::decode`](crate::scheme::Scheme::decode) without information
    /// loss for the fields its schema knows about.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| {
            crate::error::CoreError::decode(
                format!("{}/{}", self.api_version(), self.kind()),
                e.to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_api_version_for_core_kinds() {
        let pod = Resource::Pod(Pod::default());
        assert_eq!(pod.kind(), "Pod");
        assert_eq!(pod.api_version(), "v1");
    }

    #[test]
    fn test_name_reads_object_meta() {
        let mut service = Service::default();
        service.metadata.name = Some("web".to_string());
        let resource = Resource::Service(service);
        assert_eq!(resource.name(), Some("web"));
    }
}
