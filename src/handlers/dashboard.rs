use axum::extract::{Extension, State};
use axum::response::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::models::rows::{MentorRow, SessionRow, StatsRow};
use crate::models::{DashboardStats, RecommendedMentor, UpcomingSession};
use crate::state::AppState;
use crate::supabase::SupabaseError;

/// GET /api/dashboard - Everything the dashboard page renders, in one payload
///
/// Four independent reads run in sequence. Any failure aborts the request
/// with the 500 envelope; a partial payload is never returned.
pub async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    let stats = fetch_stats(&state, &user).await?;
    let learning_paths = fetch_learning_paths(&state, &user).await?;
    let upcoming_sessions = fetch_upcoming_sessions(&state, &user).await?;
    let recommended_mentors = fetch_recommended_mentors(&state, &user).await?;

    Ok(Json(json!({
        "stats": stats,
        "learning_paths": learning_paths,
        "upcoming_sessions": upcoming_sessions,
        "recommended_mentors": recommended_mentors,
        "success": true,
    })))
}

async fn fetch_stats(state: &AppState, user: &AuthUser) -> Result<DashboardStats, ApiError> {
    let rows: Vec<StatsRow> = state
        .supabase
        .from("user_stats")
        .eq("user_id", &user.sub)
        .execute_as()
        .await
        .map_err(|e| downstream("user_stats", user, e))?;

    Ok(DashboardStats::from(rows.into_iter().next()))
}

async fn fetch_learning_paths(
    state: &AppState,
    user: &AuthUser,
) -> Result<Vec<Value>, ApiError> {
    state
        .supabase
        .from("learning_paths")
        .eq("user_id", &user.sub)
        .execute()
        .await
        .map_err(|e| downstream("learning_paths", user, e))
}

async fn fetch_upcoming_sessions(
    state: &AppState,
    user: &AuthUser,
) -> Result<Vec<UpcomingSession>, ApiError> {
    let now = Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S").to_string();
    let rows: Vec<SessionRow> = state
        .supabase
        .from("sessions")
        .select("*, mentor:mentors(name, avatar_url)")
        .eq("mentee_id", &user.sub)
        .gte("session_date", now)
        .order("session_date", true)
        .limit(2)
        .execute_as()
        .await
        .map_err(|e| downstream("sessions", user, e))?;

    rows.into_iter()
        .map(|row| {
            UpcomingSession::try_from(row).map_err(|e| {
                tracing::error!(user_id = %user.sub, error = %e, "session row had an unreadable start time");
                ApiError::internal(e.to_string())
            })
        })
        .collect()
}

async fn fetch_recommended_mentors(
    state: &AppState,
    user: &AuthUser,
) -> Result<Vec<RecommendedMentor>, ApiError> {
    let result = state
        .supabase
        .rpc("get_recommended_mentors", json!({ "user_id": user.sub }))
        .await
        .map_err(|e| downstream("get_recommended_mentors", user, e))?;

    // A set-returning function yields an array; a user with no match can
    // yield null.
    let rows: Vec<MentorRow> = if result.is_null() {
        Vec::new()
    } else {
        serde_json::from_value(result).map_err(|e| {
            tracing::error!(user_id = %user.sub, error = %e, "recommendation payload did not decode");
            ApiError::internal(e.to_string())
        })?
    };

    Ok(rows.into_iter().map(RecommendedMentor::from).collect())
}

/// Log a failed upstream call with enough context to diagnose it later, then
/// surface the generic 500 envelope.
fn downstream(operation: &str, user: &AuthUser, err: SupabaseError) -> ApiError {
    tracing::error!(operation, user_id = %user.sub, error = %err, "dashboard query failed");
    ApiError::internal(err.to_string())
}
