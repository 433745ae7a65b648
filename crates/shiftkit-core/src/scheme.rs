//! Immutable decoding scheme
//!
//! The scheme maps `apiVersion` strings to group decoders. It is built once
//! by the caller, is read-only afterwards, and is passed by reference (or
//! `Arc`) to every component that needs type dispatch. There is no hidden
//! process-wide registry.

use std::collections::{BTreeSet, HashMap};

use kube::core::TypeMeta;
use serde_json::Value;

use crate::error::{CoreError, Result};
use crate::groups;
use crate::resource::Resource;

/// Decodes a generic document whose `apiVersion` belongs to one API group.
///
/// The decoder matches the document's kind exhaustively and fails with
/// [`CoreError::Decode`] for a kind it does not know.
pub type DecodeFn = fn(&TypeMeta, &Value) -> Result<Resource>;

/// Registers one or more group decoders into a [`SchemeBuilder`].
pub type Installer = fn(&mut SchemeBuilder);

/// Builder for [`Scheme`].
#[derive(Debug, Default)]
pub struct SchemeBuilder {
    decoders: HashMap<String, DecodeFn>,
    groups: BTreeSet<String>,
}

impl SchemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a decoder to an `apiVersion` such as `route.openshift.io/v1`.
    /// The core group registers under plain `v1`.
    pub fn register(&mut self, api_version: &str, decode: DecodeFn) -> &mut Self {
        let group = match api_version.rsplit_once('/') {
            Some((group, _version)) => group,
            None => "",
        };
        self.groups.insert(group.to_string());
        self.decoders.insert(api_version.to_string(), decode);
        self
    }

    /// Run each installer against this builder.
    pub fn install(mut self, installers: &[Installer]) -> Self {
        for install in installers {
            install(&mut self);
        }
        self
    }

    pub fn build(self) -> Scheme {
        Scheme {
            decoders: self.decoders,
            groups: self.groups,
        }
    }
}

/// The lookup table binding group/version to concrete decode logic.
#[derive(Debug)]
pub struct Scheme {
    decoders: HashMap<String, DecodeFn>,
    groups: BTreeSet<String>,
}

impl Scheme {
    /// A scheme with every group this library supports: the Kubernetes core
    /// group plus the apps, authorization, build, image, route, and template
    /// OpenShift groups.
    pub fn openshift() -> Self {
        SchemeBuilder::new().install(groups::ALL).build()
    }

    /// The decoder for an `apiVersion`, or [`CoreError::UnknownType`] when no
    /// binding exists for that group/version.
    pub fn decoder_for(&self, api_version: &str) -> Result<DecodeFn> {
        self.decoders
            .get(api_version)
            .copied()
            .ok_or_else(|| CoreError::UnknownType {
                group_version: api_version.to_string(),
            })
    }

    /// Whether any version of `group` is registered. The core group is the
    /// empty string.
    pub fn is_group_registered(&self, group: &str) -> bool {
        self.groups.contains(group)
    }

    /// Decode a generic key-value document into a typed [`Resource`].
    pub fn decode(&self, value: &Value) -> Result<Resource> {
        let types = type_meta_of(value)?;
        let decode = self.decoder_for(&types.api_version)?;
        decode(&types, value)
    }
}

/// Extract the document's apiVersion/kind pair, failing with
/// [`CoreError::MissingTypeMeta`] when either is absent or empty.
fn type_meta_of(value: &Value) -> Result<TypeMeta> {
    let api_version = value
        .get("apiVersion")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let kind = value.get("kind").and_then(Value::as_str).unwrap_or_default();

    if api_version.is_empty() || kind.is_empty() {
        return Err(CoreError::MissingTypeMeta);
    }

    Ok(TypeMeta {
        api_version: api_version.to_string(),
        kind: kind.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_openshift_scheme_registers_all_groups() {
        let scheme = Scheme::openshift();

        for group in [
            "",
            "apps.openshift.io",
            "authorization.openshift.io",
            "build.openshift.io",
            "image.openshift.io",
            "route.openshift.io",
            "template.openshift.io",
        ] {
            assert!(
                scheme.is_group_registered(group),
                "group '{group}' not registered"
            );
        }
    }

    #[test]
    fn test_decoder_for_unknown_group_version() {
        let scheme = Scheme::openshift();
        let err = scheme.decoder_for("monitoring.coreos.com/v1").unwrap_err();
        assert!(matches!(err, CoreError::UnknownType { .. }));
    }

    #[test]
    fn test_decode_requires_type_metadata() {
        let scheme = Scheme::openshift();

        let missing_kind = json!({"apiVersion": "v1", "metadata": {"name": "x"}});
        assert!(matches!(
            scheme.decode(&missing_kind),
            Err(CoreError::MissingTypeMeta)
        ));

        let empty_api_version = json!({"apiVersion": "", "kind": "Pod"});
        assert!(matches!(
            scheme.decode(&empty_api_version),
            Err(CoreError::MissingTypeMeta)
        ));
    }

    #[test]
    fn test_decode_dispatches_on_group_version() {
        let scheme = Scheme::openshift();
        let pod = json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {"name": "example"}
        });

        let resource = scheme.decode(&pod).unwrap();
        assert_eq!(resource.kind(), "Pod");
        assert_eq!(resource.name(), Some("example"));
    }

    #[test]
    fn test_decode_rejects_unregistered_kind_in_known_group() {
        let scheme = Scheme::openshift();
        let bogus = json!({
            "apiVersion": "route.openshift.io/v1",
            "kind": "RouteList",
            "metadata": {"name": "example"}
        });

        let err = scheme.decode(&bogus).unwrap_err();
        assert!(matches!(err, CoreError::Decode { .. }));
    }
}
