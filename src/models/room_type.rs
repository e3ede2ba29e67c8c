use serde::{Deserialize, Serialize};

/// A category of room: nightly rate and how many guests it sleeps.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct RoomType {
    pub id: i64,
    pub name: String,
    pub price_per_night: f64,
    pub max_guests: i64,
}
