//! Shiftkit Core - typed resources and manifest loading for OpenShift-aware operators
//!
//! This crate provides the foundational pieces used throughout shiftkit:
//! - `Resource`: the closed set of Kubernetes/OpenShift kinds this library decodes
//! - `Scheme`: an immutable, caller-constructed group/version decoder table
//! - `loader`: YAML/JSON manifest loading into typed objects
//! - `openshift`: hand-maintained OpenShift API types, including `Template`

pub mod error;
pub mod groups;
pub mod loader;
pub mod openshift;
pub mod resource;
pub mod scheme;

pub use error::{CoreError, Result};
pub use openshift::{Parameter, Template};
pub use resource::Resource;
pub use scheme::{DecodeFn, Installer, Scheme, SchemeBuilder};
