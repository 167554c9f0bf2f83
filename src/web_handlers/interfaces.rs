use actix_web::{web, HttpResponse};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use crate::error::MergeError;
use crate::interfaces::{merge_subscription, ContentSource, MergeRequestBuilder};
use crate::models::{AppState, RefreshPolicy};

/// Query parameters (or JSON body) of a merge request
#[derive(Deserialize, Debug, Default, Clone)]
pub struct MergeQuery {
    /// URL or path of the node source
    pub source: Option<String>,
    /// Node source text supplied inline, takes precedence over `source`
    pub source_content: Option<String>,
    /// URL or path of the template
    pub template: Option<String>,
    /// Refresh policy name
    pub policy: Option<String>,
    /// Primary selector group for the placeholder policy
    pub primary_group: Option<String>,
    /// Auto-selection group type for the content-aware policy
    pub auto_group_type: Option<String>,
    /// Access token; required to name local files
    pub token: Option<String>,
}

/// Response envelope; exactly one field is set
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MergeResponse {
    pub fn output(output: String) -> Self {
        MergeResponse {
            output: Some(output),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        MergeResponse {
            output: None,
            error: Some(message.into()),
        }
    }
}

fn error_response(err: &MergeError) -> HttpResponse {
    let body = MergeResponse::error(err.to_string());
    match err {
        MergeError::SourceUnavailable(_) | MergeError::TemplateUnavailable(_) => {
            HttpResponse::BadGateway().json(body)
        }
        MergeError::EmptyNodeSet => HttpResponse::UnprocessableEntity().json(body),
        MergeError::InvalidPolicy(_) => HttpResponse::BadRequest().json(body),
        MergeError::Unauthorized(_) => HttpResponse::Forbidden().json(body),
        MergeError::Serialize(_) => HttpResponse::InternalServerError().json(body),
    }
}

/// Non-empty value of a request field, or the non-empty setting
fn pick(value: Option<&str>, default: &str) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| Some(default.trim()).filter(|d| !d.is_empty()))
        .map(|v| v.to_string())
}

/// Request value as a content source, falling back to the setting.
///
/// The flag is set when the caller itself named a local file; paths taken
/// from the settings are trusted.
fn resolve(value: Option<&str>, default: &str) -> Option<(ContentSource, bool)> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => {
            let source = ContentSource::from_str(value);
            let local = source.is_local();
            Some((source, local))
        }
        None => Some(default.trim())
            .filter(|d| !d.is_empty())
            .map(|d| (ContentSource::from_str(d), false)),
    }
}

async fn run_merge(query: MergeQuery, app_state: &AppState) -> HttpResponse {
    debug!("Received merge request: {:?}", query);
    let global = &app_state.config;

    let (source, source_local) = match query.source_content.filter(|c| !c.trim().is_empty()) {
        Some(content) => (ContentSource::Inline(content), false),
        None => match resolve(query.source.as_deref(), &global.default_source) {
            Some(resolved) => resolved,
            None => {
                return HttpResponse::BadRequest()
                    .json(MergeResponse::error("Missing source parameter"))
            }
        },
    };
    let (template, template_local) =
        match resolve(query.template.as_deref(), &global.default_template) {
            Some(resolved) => resolved,
            None => {
                return HttpResponse::BadRequest()
                    .json(MergeResponse::error("Missing template parameter"))
            }
        };
    let authorized =
        !(source_local || template_local) || global.token_matches(query.token.as_deref());

    let policy = match query.policy.as_deref() {
        Some(name) => {
            let primary_group = pick(query.primary_group.as_deref(), &global.primary_group);
            let auto_group_type = pick(query.auto_group_type.as_deref(), &global.auto_group_type)
                .unwrap_or_else(|| "url-test".to_string());
            match RefreshPolicy::parse(name, primary_group.as_deref(), &auto_group_type) {
                Some(policy) => policy,
                None => return error_response(&MergeError::InvalidPolicy(name.to_string())),
            }
        }
        None => app_state.default_policy(),
    };

    let request = match MergeRequestBuilder::new()
        .source(source)
        .template(template)
        .policy(policy)
        .parse_settings(app_state.parse_settings())
        .http_options(app_state.http_options())
        .authorized(authorized)
        .build()
    {
        Ok(request) => request,
        Err(e) => return HttpResponse::BadRequest().json(MergeResponse::error(e)),
    };

    match merge_subscription(&request).await {
        Ok(result) => HttpResponse::Ok().json(MergeResponse::output(result.output)),
        Err(e) => {
            if e.is_recoverable() {
                warn!("Merge not performed: {}", e);
            } else {
                error!("Merge failed: {}", e);
            }
            error_response(&e)
        }
    }
}

/// Handler for `GET /merge`
pub async fn merge_handler(
    query: web::Query<MergeQuery>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    run_merge(query.into_inner(), &app_state).await
}

/// Handler for `POST /merge` with a JSON body
pub async fn merge_post_handler(
    body: web::Json<MergeQuery>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    run_merge(body.into_inner(), &app_state).await
}

/// Handler for `GET /`
pub async fn index_handler() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "message": "Subscription merger is running"
    }))
}

/// Handler for `GET /health`
pub async fn health_handler() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "healthy" }))
}

/// Register the API endpoints with Actix Web
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_handler))
        .route("/health", web::get().to(health_handler))
        .route("/merge", web::get().to(merge_handler))
        .route("/merge", web::post().to(merge_post_handler));
}
