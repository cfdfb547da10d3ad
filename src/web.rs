//! HTTP surface: page copy, inquiry intake, the team roster, admin edits,
//! chat and translation.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::chat::{chat_with_website, ChatQuery, ChatReply, GREETING};
use crate::content::{ContentRegistry, PageId};
use crate::error::{AppError, AppResult};
use crate::i18n::{Language, LanguageConfig, LanguageRegistry};
use crate::inquiry::FieldErrors;
use crate::response::ActionResponse;
use crate::security::is_admin_request;
use crate::state::AppState;
use crate::team::{self, TeamRoster};
use crate::translation::{translate_website_content, TranslateRequest, TranslateResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/pages", get(list_pages))
        .route("/api/pages/:page", get(get_page))
        .route("/api/languages", get(list_languages))
        .route("/api/inquiries", post(submit_inquiry))
        .route("/api/team", get(get_team))
        .route("/api/admin/team", post(add_team_member))
        .route(
            "/api/admin/team/:id",
            put(update_team_member).delete(delete_team_member),
        )
        .route("/api/chat", get(chat_greeting).post(chat))
        .route("/api/translate", post(translate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "store": state.store.backend_name(),
    }))
}

#[derive(Serialize)]
struct PageSummary {
    page: PageId,
    path: &'static str,
}

async fn list_pages() -> Json<Vec<PageSummary>> {
    Json(
        PageId::ALL
            .into_iter()
            .map(|page| PageSummary {
                page,
                path: page.path(),
            })
            .collect(),
    )
}

async fn get_page(Path(slug): Path<String>) -> AppResult<Json<Value>> {
    let page = PageId::from_slug(&slug).map_err(|e| AppError::NotFound(e.to_string()))?;
    Ok(Json(ContentRegistry::get().page(page).clone()))
}

#[derive(Serialize)]
struct LanguagesResponse {
    canonical: &'static LanguageConfig,
    targets: Vec<&'static LanguageConfig>,
}

async fn list_languages() -> Json<LanguagesResponse> {
    let registry = LanguageRegistry::get();
    Json(LanguagesResponse {
        canonical: registry.canonical(),
        targets: registry.list_targets(),
    })
}

/// Unreadable bodies answer in the same `{success, message}` shape as
/// validation failures.
fn malformed_body(rejection: JsonRejection) -> ActionResponse {
    warn!("Rejected malformed request body: {}", rejection.body_text());
    ActionResponse::invalid(FieldErrors::single(
        "form",
        "Request body must be a JSON object.",
    ))
}

async fn submit_inquiry(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ActionResponse {
    match payload {
        Ok(Json(payload)) => state.submissions.handle_form(&payload).await,
        Err(rejection) => malformed_body(rejection),
    }
}

async fn get_team(State(state): State<AppState>) -> Json<TeamRoster> {
    Json(team::get_team_members(state.store.as_ref()).await)
}

fn require_admin(state: &AppState, headers: &HeaderMap) -> AppResult<()> {
    if is_admin_request(headers, state.config.admin_api_key.as_deref()) {
        Ok(())
    } else {
        warn!("Rejected admin request with missing or invalid API key");
        Err(AppError::Unauthorized)
    }
}

async fn add_team_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<ActionResponse> {
    require_admin(&state, &headers)?;
    Ok(match payload {
        Ok(Json(payload)) => team::add_team_member(state.store.as_ref(), &payload).await,
        Err(rejection) => malformed_body(rejection),
    })
}

async fn update_team_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<ActionResponse> {
    require_admin(&state, &headers)?;
    Ok(match payload {
        Ok(Json(payload)) => team::update_team_member(state.store.as_ref(), &id, &payload).await,
        Err(rejection) => malformed_body(rejection),
    })
}

async fn delete_team_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> AppResult<ActionResponse> {
    require_admin(&state, &headers)?;
    Ok(team::delete_team_member(state.store.as_ref(), &id).await)
}

async fn chat_greeting() -> Json<ChatReply> {
    Json(ChatReply {
        response: GREETING.to_string(),
    })
}

/// Unreadable bodies on the JSON API routes answer in the `{error, code}` shape.
fn bad_body(rejection: JsonRejection) -> AppError {
    warn!("Rejected malformed request body: {}", rejection.body_text());
    AppError::BadRequest("Request body must be a valid JSON object.".to_string())
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatQuery>, JsonRejection>,
) -> AppResult<Json<ChatReply>> {
    let Json(query) = payload.map_err(bad_body)?;
    if query.query.trim().is_empty() {
        return Err(AppError::BadRequest("query must not be empty".to_string()));
    }
    Ok(Json(chat_with_website(&state.completion, &query).await))
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> AppResult<Json<TranslateResponse>> {
    let Json(request) = payload.map_err(bad_body)?;
    if request.text.trim().is_empty() {
        return Err(AppError::BadRequest("text must not be empty".to_string()));
    }
    Language::resolve(&request.target_language)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let response = translate_website_content(state.completion.as_ref(), &request)
        .await
        .map_err(AppError::Upstream)?;
    Ok(Json(response))
}
