//! Audit trail handler.

use axum::Json;
use axum::extract::State;

use carshop_entity::audit::AuditLogEntry;

use crate::dto::request::AuditQuery;
use crate::error::ApiResult;
use crate::extractors::SearchQuery;
use crate::state::AppState;

/// GET /api/audit?limit=N
pub async fn recent_entries(
    State(state): State<AppState>,
    SearchQuery(query): SearchQuery<AuditQuery>,
) -> ApiResult<Json<Vec<AuditLogEntry>>> {
    let entries = state.audit.recent(query.limit).await?;
    Ok(Json(entries))
}
