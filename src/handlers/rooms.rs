use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::models::booking::Booking;
use crate::models::room::{RoomWithType, WITH_TYPE_SELECT};

#[derive(Deserialize)]
pub struct RoomListParams {
    pub room_filter: Option<String>,
}

pub async fn get_rooms(
    pool: web::Data<SqlitePool>,
    params: web::Query<RoomListParams>,
) -> Result<HttpResponse, ApiError> {
    let RoomListParams { room_filter } = params.into_inner();

    // instr() keeps the filter literal: '%' and '_' match themselves
    let rooms = match room_filter.as_deref().filter(|f| !f.is_empty()) {
        Some(filter) => {
            sqlx::query_as::<_, RoomWithType>(&format!(
                "{} WHERE instr(lower(r.name), lower(?)) > 0 ORDER BY r.name",
                WITH_TYPE_SELECT
            ))
            .bind(filter)
            .fetch_all(pool.get_ref())
            .await?
        }
        None => {
            sqlx::query_as::<_, RoomWithType>(&format!("{} ORDER BY r.name", WITH_TYPE_SELECT))
                .fetch_all(pool.get_ref())
                .await?
        }
    };

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "room_filter": room_filter,
        "count": rooms.len(),
        "rooms": rooms,
    })))
}

pub async fn get_room_details(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let room = sqlx::query_as::<_, RoomWithType>(&format!("{} WHERE r.id = ?", WITH_TYPE_SELECT))
        .bind(id)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Room {} not found", id)))?;

    let today = chrono::Utc::now().naive_utc().date();
    let upcoming_bookings = sqlx::query_as::<_, Booking>(
        r#"
        SELECT * FROM bookings
        WHERE room_id = ?
        AND status = 'confirmed'
        AND check_out > ?
        ORDER BY check_in
        "#,
    )
    .bind(id)
    .bind(today)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "room": room,
        "upcoming_bookings": upcoming_bookings,
    })))
}
