//! Loading Kubernetes and OpenShift manifests into typed objects
//!
//! Manifests enter as raw YAML or JSON bytes, are pivoted to the canonical
//! JSON document form, and are dispatched through a [`Scheme`] to produce a
//! typed [`Resource`].

use std::path::Path;

use serde_json::Value;

use crate::error::{CoreError, Result};
use crate::resource::Resource;
use crate::scheme::Scheme;

/// Whether a filename should be treated as YAML. Anything else is assumed to
/// be JSON.
pub fn is_yaml(filename: &str) -> bool {
    filename.ends_with(".yaml") || filename.ends_with("yaml")
}

/// Convert YAML bytes to their JSON encoding.
pub fn yaml_to_json(raw: &[u8]) -> Result<Vec<u8>> {
    let value: Value = serde_yaml::from_slice(raw)
        .map_err(|e| CoreError::malformed(format!("invalid YAML: {e}")))?;
    serde_json::to_vec(&value).map_err(|e| CoreError::malformed(e.to_string()))
}

/// Convert `raw` to JSON when `filename` looks like YAML; return the bytes
/// unchanged otherwise.
pub fn json_if_yaml(raw: &[u8], filename: &str) -> Result<Vec<u8>> {
    if is_yaml(filename) {
        yaml_to_json(raw)
    } else {
        Ok(raw.to_vec())
    }
}

/// Decode raw manifest bytes into a typed [`Resource`].
///
/// With `yaml` set the bytes are converted to JSON first. Dispatch follows
/// the document's apiVersion/kind pair through `scheme`.
pub fn from_bytes(scheme: &Scheme, raw: &[u8], yaml: bool) -> Result<Resource> {
    let json;
    let raw = if yaml {
        json = yaml_to_json(raw)?;
        json.as_slice()
    } else {
        raw
    };

    let value: Value = serde_json::from_slice(raw)
        .map_err(|e| CoreError::malformed(format!("invalid JSON: {e}")))?;

    scheme.decode(&value)
}

/// Read a manifest file and decode it. The YAML hint is inferred from the
/// filename suffix.
pub fn from_file(scheme: &Scheme, path: impl AsRef<Path>) -> Result<Resource> {
    let path = path.as_ref();
    let raw = std::fs::read(path)?;
    let yaml = is_yaml(&path.to_string_lossy());
    tracing::debug!(path = %path.display(), yaml, "loading manifest");
    from_bytes(scheme, &raw, yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const POD_JSON: &str = r#"{
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {"name": "example-pod"},
        "spec": {"containers": [{"name": "main", "image": "busybox"}]}
    }"#;

    const POD_YAML: &str = "\
apiVersion: v1
kind: Pod
metadata:
  name: example-pod
spec:
  containers:
    - name: main
      image: busybox
";

    const ROUTE_JSON: &str = r#"{
        "apiVersion": "route.openshift.io/v1",
        "kind": "Route",
        "metadata": {"name": "example-route"},
        "spec": {"host": "example.apps.local", "to": {"kind": "Service", "name": "web"}}
    }"#;

    const TEMPLATE_JSON: &str = r#"{
        "apiVersion": "template.openshift.io/v1",
        "kind": "Template",
        "metadata": {"name": "example-template"},
        "parameters": [{"name": "APP_NAME", "value": "web"}],
        "objects": []
    }"#;

    fn scheme() -> Scheme {
        Scheme::openshift()
    }

    #[test]
    fn test_json_if_yaml_converts_yaml_named_input() {
        let json = json_if_yaml(POD_YAML.as_bytes(), "pod.yaml").unwrap();
        let value: Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["kind"], "Pod");
        assert_eq!(value["spec"]["containers"][0]["image"], "busybox");
    }

    #[test]
    fn test_json_if_yaml_passes_other_suffixes_through_unchanged() {
        for filename in ["pod.json", "pod.yml", "pod"] {
            let out = json_if_yaml(POD_JSON.as_bytes(), filename).unwrap();
            assert_eq!(out, POD_JSON.as_bytes());
        }
    }

    #[test]
    fn test_json_if_yaml_rejects_invalid_yaml() {
        let err = json_if_yaml(b"key: [1, 2", "broken.yaml").unwrap_err();
        assert!(matches!(err, CoreError::MalformedInput { .. }));
    }

    #[test]
    fn test_from_bytes_loads_pod_from_json_and_yaml() {
        let scheme = scheme();

        let from_json = from_bytes(&scheme, POD_JSON.as_bytes(), false).unwrap();
        assert_eq!(from_json.kind(), "Pod");
        assert_eq!(from_json.name(), Some("example-pod"));

        let from_yaml = from_bytes(&scheme, POD_YAML.as_bytes(), true).unwrap();
        assert_eq!(from_json, from_yaml);
    }

    #[test]
    fn test_from_bytes_loads_openshift_route() {
        let resource = from_bytes(&scheme(), ROUTE_JSON.as_bytes(), false).unwrap();
        assert_eq!(resource.kind(), "Route");
        assert_eq!(resource.api_version(), "route.openshift.io/v1");
    }

    #[test]
    fn test_from_bytes_rejects_unregistered_group_version() {
        let manifest = r#"{"apiVersion": "batch/v1", "kind": "Job", "metadata": {"name": "j"}}"#;
        let err = from_bytes(&scheme(), manifest.as_bytes(), false).unwrap_err();
        assert!(matches!(err, CoreError::UnknownType { .. }));
    }

    #[test]
    fn test_from_bytes_rejects_invalid_json() {
        let err = from_bytes(&scheme(), b"{not json", false).unwrap_err();
        assert!(matches!(err, CoreError::MalformedInput { .. }));
    }

    #[test]
    fn test_from_bytes_rejects_missing_type_metadata() {
        let err = from_bytes(&scheme(), br#"{"metadata": {"name": "x"}}"#, false).unwrap_err();
        assert!(matches!(err, CoreError::MissingTypeMeta));
    }

    #[test]
    fn test_from_file_infers_yaml_from_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pod.yaml");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(POD_YAML.as_bytes())
            .unwrap();

        let resource = from_file(&scheme(), &path).unwrap();
        assert_eq!(resource.kind(), "Pod");
    }

    #[test]
    fn test_from_file_missing_path_fails_with_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = from_file(&scheme(), dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_loaded_resource_roundtrips_through_generic_form() {
        let scheme = scheme();
        let resource = from_bytes(&scheme, TEMPLATE_JSON.as_bytes(), false).unwrap();

        let value = resource.to_value().unwrap();
        let reloaded = scheme.decode(&value).unwrap();

        assert_eq!(reloaded, resource);
    }
}
