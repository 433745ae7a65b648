//! Decoder installers for the supported API groups
//!
//! One module per API group, each exposing an `install` function that binds
//! the group's decoder into a [`SchemeBuilder`]. [`ALL`] is the full set a
//! default scheme registers.

use kube::core::TypeMeta;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{CoreError, Result};
use crate::resource::Resource;
use crate::scheme::{Installer, SchemeBuilder};

/// Installers for every group this library supports.
pub const ALL: &[Installer] = &[
    core_v1::install,
    apps::install,
    authorization::install,
    build::install,
    image::install,
    route::install,
    template::install,
];

fn gvk_label(types: &TypeMeta) -> String {
    format!("{}/{}", types.api_version, types.kind)
}

fn decode_as<T: DeserializeOwned>(types: &TypeMeta, value: &Value) -> Result<T> {
    serde_json::from_value(value.clone())
        .map_err(|e| CoreError::decode(gvk_label(types), e.to_string()))
}

fn unregistered_kind(types: &TypeMeta) -> CoreError {
    CoreError::decode(
        gvk_label(types),
        format!(
            "kind '{}' is not registered under '{}'",
            types.kind, types.api_version
        ),
    )
}

/// The Kubernetes core group, `v1`.
pub mod core_v1 {
    use super::*;
    use k8s_openapi::api::core::v1::{ConfigMap, Pod, Secret, Service};

    pub const GROUP_VERSION: &str = "v1";

    pub fn install(builder: &mut SchemeBuilder) {
        builder.register(GROUP_VERSION, decode);
    }

    fn decode(types: &TypeMeta, value: &Value) -> Result<Resource> {
        match types.kind.as_str() {
            "ConfigMap" => Ok(Resource::ConfigMap(decode_as::<ConfigMap>(types, value)?)),
            "Pod" => Ok(Resource::Pod(decode_as::<Pod>(types, value)?)),
            "Secret" => Ok(Resource::Secret(decode_as::<Secret>(types, value)?)),
            "Service" => Ok(Resource::Service(decode_as::<Service>(types, value)?)),
            _ => Err(unregistered_kind(types)),
        }
    }
}

/// `apps.openshift.io/v1`.
pub mod apps {
    use super::*;
    use crate::openshift::DeploymentConfig;

    pub const GROUP_VERSION: &str = "apps.openshift.io/v1";

    pub fn install(builder: &mut SchemeBuilder) {
        builder.register(GROUP_VERSION, decode);
    }

    fn decode(types: &TypeMeta, value: &Value) -> Result<Resource> {
        match types.kind.as_str() {
            "DeploymentConfig" => Ok(Resource::DeploymentConfig(decode_as::<DeploymentConfig>(
                types, value,
            )?)),
            _ => Err(unregistered_kind(types)),
        }
    }
}

/// `authorization.openshift.io/v1`.
pub mod authorization {
    use super::*;
    use crate::openshift::RoleBinding;

    pub const GROUP_VERSION: &str = "authorization.openshift.io/v1";

    pub fn install(builder: &mut SchemeBuilder) {
        builder.register(GROUP_VERSION, decode);
    }

    fn decode(types: &TypeMeta, value: &Value) -> Result<Resource> {
        match types.kind.as_str() {
            "RoleBinding" => Ok(Resource::RoleBinding(decode_as::<RoleBinding>(
                types, value,
            )?)),
            _ => Err(unregistered_kind(types)),
        }
    }
}

/// `build.openshift.io/v1`.
pub mod build {
    use super::*;
    use crate::openshift::{Build, BuildConfig};

    pub const GROUP_VERSION: &str = "build.openshift.io/v1";

    pub fn install(builder: &mut SchemeBuilder) {
        builder.register(GROUP_VERSION, decode);
    }

    fn decode(types: &TypeMeta, value: &Value) -> Result<Resource> {
        match types.kind.as_str() {
            "Build" => Ok(Resource::Build(decode_as::<Build>(types, value)?)),
            "BuildConfig" => Ok(Resource::BuildConfig(decode_as::<BuildConfig>(
                types, value,
            )?)),
            _ => Err(unregistered_kind(types)),
        }
    }
}

/// `image.openshift.io/v1`.
pub mod image {
    use super::*;
    use crate::openshift::ImageStream;

    pub const GROUP_VERSION: &str = "image.openshift.io/v1";

    pub fn install(builder: &mut SchemeBuilder) {
        builder.register(GROUP_VERSION, decode);
    }

    fn decode(types: &TypeMeta, value: &Value) -> Result<Resource> {
        match types.kind.as_str() {
            "ImageStream" => Ok(Resource::ImageStream(decode_as::<ImageStream>(
                types, value,
            )?)),
            _ => Err(unregistered_kind(types)),
        }
    }
}

/// `route.openshift.io/v1`.
pub mod route {
    use super::*;
    use crate::openshift::Route;

    pub const GROUP_VERSION: &str = "route.openshift.io/v1";

    pub fn install(builder: &mut SchemeBuilder) {
        builder.register(GROUP_VERSION, decode);
    }

    fn decode(types: &TypeMeta, value: &Value) -> Result<Resource> {
        match types.kind.as_str() {
            "Route" => Ok(Resource::Route(decode_as::<Route>(types, value)?)),
            _ => Err(unregistered_kind(types)),
        }
    }
}

/// `template.openshift.io/v1`.
pub mod template {
    use super::*;
    use crate::openshift::Template;

    pub const GROUP_VERSION: &str = "template.openshift.io/v1";

    pub fn install(builder: &mut SchemeBuilder) {
        builder.register(GROUP_VERSION, decode);
    }

    fn decode(types: &TypeMeta, value: &Value) -> Result<Resource> {
        match types.kind.as_str() {
            "Template" => Ok(Resource::Template(Box::new(decode_as::<Template>(
                types, value,
            )?))),
            _ => Err(unregistered_kind(types)),
        }
    }
}
