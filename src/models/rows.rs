//! Raw rows as the data service returns them. Every field that can be absent
//! is optional here; defaults are applied when mapping to response shapes.

use serde::Deserialize;
use serde_json::Value;

/// Aggregate counters kept per user by the reporting pipeline.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StatsRow {
    #[serde(default)]
    pub learning_hours: Option<f64>,
    #[serde(default)]
    pub completed_sessions: Option<i64>,
    #[serde(default)]
    pub skills_in_progress: Option<i64>,
    #[serde(default)]
    pub network_growth: Option<i64>,
}

/// Mentor fields embedded into a session row via the `mentor:mentors(...)`
/// select.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SessionMentor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// One scheduled mentorship session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRow {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    /// Start time, ISO 8601 without zone (the store keeps naive UTC).
    pub session_date: String,
    /// Length in minutes.
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub mentor: Option<SessionMentor>,
}

/// One mentor as returned by the recommendation function.
#[derive(Debug, Clone, Deserialize)]
pub struct MentorRow {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<i64>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
