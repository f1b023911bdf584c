//! Mood catalog handler.

use axum::Json;

use aetheribot_types::mood::{Mood, MoodEntry};

/// GET /api/moods
pub async fn list_moods() -> Json<Vec<MoodEntry>> {
    Json(Mood::ALL.into_iter().map(MoodEntry::from).collect())
}
