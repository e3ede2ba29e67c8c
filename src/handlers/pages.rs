use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::error::ApiError;

pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "pms",
        "endpoints": [
            "/rooms/",
            "/search/room/",
            "/search/booking/",
            "/bookings/",
            "/dashboard/"
        ]
    }))
}

/// Front-desk summary: inventory, today's movements, current occupancy.
pub async fn dashboard(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let today = chrono::Utc::now().naive_utc().date();

    let total_rooms: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
        .fetch_one(pool.get_ref())
        .await?;

    let total_room_types: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM room_types")
        .fetch_one(pool.get_ref())
        .await?;

    let confirmed_bookings: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE status = 'confirmed'")
            .fetch_one(pool.get_ref())
            .await?;

    let arrivals_today: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM bookings WHERE status = 'confirmed' AND check_in = ?",
    )
    .bind(today)
    .fetch_one(pool.get_ref())
    .await?;

    let departures_today: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM bookings WHERE status = 'confirmed' AND check_out = ?",
    )
    .bind(today)
    .fetch_one(pool.get_ref())
    .await?;

    let occupied_rooms: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(DISTINCT room_id) FROM bookings
        WHERE status = 'confirmed'
        AND check_in <= ?
        AND check_out > ?
        "#,
    )
    .bind(today)
    .bind(today)
    .fetch_one(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "date": today,
        "total_rooms": total_rooms,
        "total_room_types": total_room_types,
        "confirmed_bookings": confirmed_bookings,
        "arrivals_today": arrivals_today,
        "departures_today": departures_today,
        "occupied_rooms": occupied_rooms,
    })))
}
