//! Typed OpenShift API objects
//!
//! k8s-openapi only ships the upstream Kubernetes groups, so the OpenShift
//! kinds supported by the [`Scheme`](crate::scheme::Scheme) are maintained
//! here. Each object carries a flattened `TypeMeta`, standard `ObjectMeta`,
//! and a loosely typed JSON body for the parts the loader never inspects.

use std::collections::{BTreeMap, HashMap};

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;
use kube::core::TypeMeta;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn is_false(v: &bool) -> bool {
    !*v
}

/// A `template.openshift.io/v1` Template: a parameterized bundle of resource
/// definitions rendered server-side into concrete objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(flatten)]
    pub types: TypeMeta,

    #[serde(default)]
    pub metadata: ObjectMeta,

    /// Ordered parameter list. Names are unique within a template.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    /// Embedded resource documents. After server-side processing every
    /// parameter reference inside these is substituted.
    #[serde(default)]
    pub objects: Vec<RawExtension>,

    /// Labels the server applies to every object produced from the template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    /// Instructions displayed after the template is instantiated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Template {
    pub const API_VERSION: &'static str = "template.openshift.io/v1";
    pub const KIND: &'static str = "Template";

    /// Replace the value of every parameter whose name is a key in
    /// `overrides`. Parameters with no matching key keep their existing
    /// value (default or empty); order and identity are preserved.
    pub fn fill_parameters(&mut self, overrides: &HashMap<String, String>) {
        for param in &mut self.parameters {
            if let Some(value) = overrides.get(&param.name) {
                param.value = Some(value.clone());
            }
        }
    }

    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// A single template parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Generator name used by the server when no value is supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate: Option<String>,

    /// Input to the generator named in `generate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
}

/// An `apps.openshift.io/v1` DeploymentConfig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub spec: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub status: Value,
}

/// An `authorization.openshift.io/v1` RoleBinding. The binding body
/// (roleRef, subjects, userNames, groupNames) is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBinding {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(flatten)]
    pub binding: BTreeMap<String, Value>,
}

/// A `build.openshift.io/v1` Build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub spec: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub status: Value,
}

/// A `build.openshift.io/v1` BuildConfig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub spec: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub status: Value,
}

/// An `image.openshift.io/v1` ImageStream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStream {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub spec: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub status: Value,
}

/// A `route.openshift.io/v1` Route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub spec: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub status: Value,
}
