//! Response shapes for the dashboard payload. Field names follow the
//! frontend's card props (camelCase where it expects camelCase), and every
//! absent source field resolves to a documented default instead of an error.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use super::rows::{MentorRow, SessionRow, StatsRow};

/// Dashboard counters; absent source fields resolve to zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub learning_hours: f64,
    pub completed_sessions: i64,
    pub skills_in_progress: i64,
    pub network_growth: i64,
}

impl From<Option<StatsRow>> for DashboardStats {
    fn from(row: Option<StatsRow>) -> Self {
        let row = row.unwrap_or_default();
        Self {
            learning_hours: row.learning_hours.unwrap_or(0.0),
            completed_sessions: row.completed_sessions.unwrap_or(0),
            skills_in_progress: row.skills_in_progress.unwrap_or(0),
            network_growth: row.network_growth.unwrap_or(0),
        }
    }
}

/// One upcoming session, formatted for the session card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "mentorName")]
    pub mentor_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// 12-hour clock with AM/PM suffix, e.g. `02:30 PM`.
    pub time: String,
    /// Minutes with a `" min"` suffix, e.g. `45 min`.
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl TryFrom<SessionRow> for UpcomingSession {
    type Error = chrono::ParseError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        let start = parse_session_date(&row.session_date)?;
        let mentor = row.mentor.unwrap_or_default();
        Ok(Self {
            id: row.id,
            title: row.title,
            mentor_name: mentor.name.unwrap_or_else(|| "Mentor".to_string()),
            date: start.format("%Y-%m-%d").to_string(),
            time: start.format("%I:%M %p").to_string(),
            duration: format!("{} min", row.duration.unwrap_or(0)),
            avatar: mentor.avatar_url,
        })
    }
}

/// Session timestamps arrive without a zone; accept an RFC 3339 suffix too
/// and normalize to UTC.
fn parse_session_date(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    raw.parse::<NaiveDateTime>()
        .or_else(|_| chrono::DateTime::parse_from_rfc3339(raw).map(|dt| dt.naive_utc()))
}

/// One recommended mentor, formatted for the mentor card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedMentor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub rating: f64,
    pub reviews: i64,
    pub skills: Vec<String>,
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: f64,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<MentorRow> for RecommendedMentor {
    fn from(row: MentorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            title: row.title,
            rating: row.rating.unwrap_or(4.5),
            reviews: row.reviews.unwrap_or(0),
            skills: row.skills.unwrap_or_default(),
            hourly_rate: row.hourly_rate.unwrap_or(50.0),
            image_url: row.avatar_url,
        }
    }
}
