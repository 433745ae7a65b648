//! Shiftkit Template - OpenShift Template processing
//!
//! This crate turns an OpenShift `Template` manifest into concrete, typed
//! resource objects:
//! - **Transport binding**: scope an authenticated `kube::Client` to the
//!   template API (group/version/path/content-type), with validation
//! - **Parameter substitution**: client-side fill of named parameters
//! - **Server-side rendering**: a single POST to `processedtemplates`
//! - **Object expansion**: decode every rendered object through a
//!   [`Scheme`](shiftkit_core::Scheme)
//! - **Filter/copy**: retrieve deep-copied subsets of the result

pub mod engine;
pub mod error;
pub mod options;
pub mod transport;

pub use engine::{ProcessedTemplate, TemplateClient, no_filter};
pub use error::{Result, TemplateError};
pub use options::ApiOptions;
pub use transport::Transport;
