//! Template processing pipeline
//!
//! A [`TemplateClient`] is constructed from raw template bytes and a bound
//! transport, and is consumed by [`TemplateClient::process`], which fills
//! parameters, posts the template for server-side rendering, and decodes the
//! resolved object list into a [`ProcessedTemplate`] snapshot. Re-rendering
//! requires constructing a fresh client.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use shiftkit_core::{Resource, Scheme, Template, loader};

use crate::error::{Result, TemplateError};
use crate::options::ApiOptions;
use crate::transport::Transport;

/// Filter predicate that accepts every object.
pub fn no_filter(_obj: &Resource) -> bool {
    true
}

/// A template bound to a transport, ready to be processed exactly once.
pub struct TemplateClient {
    client: kube::Client,
    scheme: Arc<Scheme>,
    transport: Transport,
    template: Template,
    raw: Vec<u8>,
}

impl TemplateClient {
    /// Construct from raw JSON template bytes, bound to the default
    /// OpenShift template API endpoint.
    pub fn new(client: kube::Client, scheme: Arc<Scheme>, raw: &[u8]) -> Result<Self> {
        Self::with_options(client, scheme, raw, &ApiOptions::default())
    }

    /// Construct from raw JSON template bytes with a caller-supplied
    /// transport configuration.
    pub fn with_options(
        client: kube::Client,
        scheme: Arc<Scheme>,
        raw: &[u8],
        opts: &ApiOptions,
    ) -> Result<Self> {
        let resource = loader::from_bytes(&scheme, raw, false)?;
        Self::from_resource(client, scheme, resource, raw.to_vec(), opts)
    }

    /// Construct from a template manifest file (YAML or JSON, inferred from
    /// the filename suffix), bound to the default endpoint.
    pub fn from_file(
        client: kube::Client,
        scheme: Arc<Scheme>,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(shiftkit_core::CoreError::from)?;
        let resource = loader::from_bytes(&scheme, &raw, loader::is_yaml(&path.to_string_lossy()))?;
        Self::from_resource(client, scheme, resource, raw, &ApiOptions::default())
    }

    fn from_resource(
        client: kube::Client,
        scheme: Arc<Scheme>,
        resource: Resource,
        raw: Vec<u8>,
        opts: &ApiOptions,
    ) -> Result<Self> {
        let template = match resource {
            Resource::Template(template) => *template,
            other => {
                return Err(TemplateError::NotATemplate {
                    kind: other.kind().to_string(),
                });
            }
        };

        let transport = Transport::bind(client.clone(), opts)?;

        Ok(Self {
            client,
            scheme,
            transport,
            template,
            raw,
        })
    }

    /// The decoded template as constructed, before processing.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The raw bytes this client was constructed from.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Rebind the transport to a different endpoint configuration.
    pub fn rebind(&mut self, opts: &ApiOptions) -> Result<()> {
        self.transport = Transport::bind(self.client.clone(), opts)?;
        Ok(())
    }

    /// Render the template into concrete objects.
    ///
    /// Fills every parameter whose name appears in `overrides` (others keep
    /// their existing value), posts the template to the bound
    /// `processedtemplates` endpoint under `namespace`, decodes the response
    /// as a template, and expands each embedded object through the scheme.
    ///
    /// Processing is all-or-nothing: if any embedded object fails to decode,
    /// the whole call fails and no object list is produced.
    pub async fn process(
        mut self,
        overrides: &HashMap<String, String>,
        namespace: &str,
    ) -> Result<ProcessedTemplate> {
        self.template.fill_parameters(overrides);

        let body = serde_json::to_vec(&self.template)?;
        let response = self.transport.create(namespace, body).await?;

        let template = match self.scheme.decode(&response)? {
            Resource::Template(template) => *template,
            other => {
                return Err(TemplateError::NotATemplate {
                    kind: other.kind().to_string(),
                });
            }
        };

        let mut objects = Vec::with_capacity(template.objects.len());
        for raw_object in &template.objects {
            objects.push(self.scheme.decode(&raw_object.0)?);
        }

        tracing::debug!(
            template = template.metadata.name.as_deref().unwrap_or("unnamed"),
            objects = objects.len(),
            "processed template"
        );

        Ok(ProcessedTemplate { template, objects })
    }
}

impl std::fmt::Debug for TemplateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateClient")
            .field("template", &self.template.metadata.name)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

/// The immutable result of a successful render: the resolved template and
/// its decoded objects.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedTemplate {
    template: Template,
    objects: Vec<Resource>,
}

impl ProcessedTemplate {
    /// The fully resolved template returned by the server.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The decoded objects, in template order.
    pub fn objects(&self) -> &[Resource] {
        &self.objects
    }

    /// Deep copies of every object accepted by `filter`, in original order.
    ///
    /// Rejected objects are skipped; mutating a returned copy never affects
    /// this snapshot.
    pub fn get_objects<F>(&self, filter: F) -> Vec<Resource>
    where
        F: FnMut(&Resource) -> bool,
    {
        let mut out = Vec::new();
        self.copy_objects(filter, &mut out);
        out
    }

    /// Like [`get_objects`](Self::get_objects), appending into a
    /// caller-supplied vector.
    pub fn copy_objects<F>(&self, mut filter: F, out: &mut Vec<Resource>)
    where
        F: FnMut(&Resource) -> bool,
    {
        for obj in &self.objects {
            if filter(obj) {
                out.push(obj.clone());
            }
        }
    }

    /// Consume the snapshot, yielding the object list.
    pub fn into_objects(self) -> Vec<Resource> {
        self.objects
    }
}
