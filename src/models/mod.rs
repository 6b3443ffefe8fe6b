pub mod dashboard;
pub mod rows;

pub use dashboard::{DashboardStats, RecommendedMentor, UpcomingSession};
