use std::path::PathBuf;

use log::{debug, error, info, warn};

use crate::error::MergeError;
use crate::generator::proxy_to_clash;
use crate::models::{ConfigTree, RefreshPolicy};
use crate::parser::{normalize_with, ParseSettings};
use crate::utils::{file_get_async, is_link, web_get_async, HttpOptions};

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Fetched over HTTP(S)
    Url(String),
    /// Read from the local filesystem
    File(PathBuf),
    /// Supplied directly by the caller
    Inline(String),
}

impl ContentSource {
    /// `http://` and `https://` strings are URLs, anything else a file path
    pub fn from_str(s: &str) -> Self {
        let s = s.trim();
        if is_link(s) {
            ContentSource::Url(s.to_string())
        } else {
            ContentSource::File(PathBuf::from(s))
        }
    }

    /// Retrieve the document text
    pub async fn fetch(&self, options: &HttpOptions) -> Result<String, String> {
        match self {
            ContentSource::Url(url) => web_get_async(url, options).await,
            ContentSource::File(path) => file_get_async(path).await,
            ContentSource::Inline(content) => Ok(content.clone()),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, ContentSource::File(_))
    }

    /// Short description for log lines
    pub fn describe(&self) -> String {
        match self {
            ContentSource::Url(url) => url.clone(),
            ContentSource::File(path) => path.display().to_string(),
            ContentSource::Inline(content) => format!("<inline, {} bytes>", content.len()),
        }
    }
}

/// A fully specified merge run
#[derive(Debug, Clone)]
pub struct MergeRequest {
    /// Node source
    pub source: ContentSource,
    /// Template document
    pub template: ContentSource,
    /// Which template groups receive the new nodes
    pub policy: RefreshPolicy,
    /// Normalizer options
    pub parse_settings: ParseSettings,
    /// Options for URL sources
    pub http_options: HttpOptions,
    /// Whether local file sources may be read
    pub authorized: bool,
}

/// Builder for MergeRequest
#[derive(Debug, Clone, Default)]
pub struct MergeRequestBuilder {
    source: Option<ContentSource>,
    template: Option<ContentSource>,
    policy: RefreshPolicy,
    parse_settings: ParseSettings,
    http_options: HttpOptions,
    authorized: bool,
}

impl MergeRequestBuilder {
    /// Create a new default builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node source
    pub fn source(mut self, source: ContentSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the node source from a URL or path
    pub fn source_from_str(self, source: &str) -> Self {
        self.source(ContentSource::from_str(source))
    }

    /// Set the template
    pub fn template(mut self, template: ContentSource) -> Self {
        self.template = Some(template);
        self
    }

    /// Set the template from a URL or path
    pub fn template_from_str(self, template: &str) -> Self {
        self.template(ContentSource::from_str(template))
    }

    /// Set the refresh policy
    pub fn policy(mut self, policy: RefreshPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set normalizer options
    pub fn parse_settings(mut self, parse_settings: ParseSettings) -> Self {
        self.parse_settings = parse_settings;
        self
    }

    /// Set options for URL sources
    pub fn http_options(mut self, http_options: HttpOptions) -> Self {
        self.http_options = http_options;
        self
    }

    /// Set whether this request may read local files
    pub fn authorized(mut self, authorized: bool) -> Self {
        self.authorized = authorized;
        self
    }

    /// Build the request; both the source and the template are required
    pub fn build(self) -> Result<MergeRequest, String> {
        let source = self.source.ok_or("No node source provided")?;
        let template = self.template.ok_or("No template provided")?;
        Ok(MergeRequest {
            source,
            template,
            policy: self.policy,
            parse_settings: self.parse_settings,
            http_options: self.http_options,
            authorized: self.authorized,
        })
    }
}

/// Result of a successful merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    /// Merged config as YAML text
    pub output: String,
    /// Number of nodes written into the config
    pub node_count: usize,
}

/// Merge already retrieved source and template text
///
/// # Errors
/// * [`MergeError::TemplateUnavailable`] if the template doesn't parse
/// * [`MergeError::EmptyNodeSet`] if the source holds no usable node; the
///   template is not touched in that case
/// * [`MergeError::Serialize`] if the result can't be rendered
pub fn merge_content(
    source_content: &str,
    template_content: &str,
    policy: &RefreshPolicy,
    parse_settings: &ParseSettings,
) -> Result<MergeResult, MergeError> {
    let nodes = normalize_with(source_content, parse_settings);
    if nodes.is_empty() {
        warn!("No nodes found in source, skipping merge");
        return Err(MergeError::EmptyNodeSet);
    }

    let template = ConfigTree::from_str(template_content)?;
    let output = proxy_to_clash(&template, &nodes, policy)?;
    Ok(MergeResult {
        output,
        node_count: nodes.len(),
    })
}

/// Fetch the source and the template concurrently, then merge them
///
/// Local files are only read when the request is authorized; otherwise
/// [`MergeError::Unauthorized`] is returned before anything is fetched.
pub async fn merge_subscription(request: &MergeRequest) -> Result<MergeResult, MergeError> {
    if !request.authorized {
        if let Some(local) = [&request.source, &request.template]
            .into_iter()
            .find(|source| source.is_local())
        {
            warn!("Refusing unauthorized access to {}", local.describe());
            return Err(MergeError::Unauthorized(local.describe()));
        }
    }

    info!(
        "Merging {} into {} with policy {}",
        request.source.describe(),
        request.template.describe(),
        request.policy
    );

    let (source_content, template_content) = tokio::try_join!(
        async {
            request
                .source
                .fetch(&request.http_options)
                .await
                .map_err(MergeError::SourceUnavailable)
        },
        async {
            request
                .template
                .fetch(&request.http_options)
                .await
                .map_err(MergeError::TemplateUnavailable)
        },
    )
    .map_err(|e| {
        error!("{}", e);
        e
    })?;
    debug!(
        "Fetched source ({} bytes) and template ({} bytes)",
        source_content.len(),
        template_content.len()
    );

    merge_content(
        &source_content,
        &template_content,
        &request.policy,
        &request.parse_settings,
    )
}
