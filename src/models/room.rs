use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Room {
    pub id: i64,
    pub room_type_id: i64,
    pub name: String,
    pub description: String,
}

/// Room row joined with its type, as served on listings and search results.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct RoomWithType {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub room_type_id: i64,
    pub room_type_name: String,
    pub price_per_night: f64,
    pub max_guests: i64,
}

/// Base SELECT producing [`RoomWithType`] rows.
pub const WITH_TYPE_SELECT: &str = "SELECT r.id, r.name, r.description, r.room_type_id, \
     t.name AS room_type_name, t.price_per_night, t.max_guests \
     FROM rooms r JOIN room_types t ON t.id = r.room_type_id";
