use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::ApiError;
use crate::models::room::{RoomWithType, WITH_TYPE_SELECT};
use crate::models::room_type::RoomType;

#[derive(Debug, Deserialize, Validate)]
pub struct RoomSearchForm {
    pub checkin: chrono::NaiveDate,
    pub checkout: chrono::NaiveDate,
    #[validate(range(min = 1))]
    pub guests: i64,
}

#[derive(Serialize)]
struct RoomOffer {
    #[serde(flatten)]
    room: RoomWithType,
    nights: i64,
    total_price: f64,
}

/// GET /search/room — the data behind the search form.
pub async fn room_search_form(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let room_types =
        sqlx::query_as::<_, RoomType>("SELECT * FROM room_types ORDER BY price_per_night")
            .fetch_all(pool.get_ref())
            .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "room_types": room_types })))
}

/// POST /search/room — rooms free for the whole stay with enough capacity.
pub async fn search_rooms(
    pool: web::Data<SqlitePool>,
    form: web::Form<RoomSearchForm>,
) -> Result<HttpResponse, ApiError> {
    if let Err(e) = form.validate() {
        return Ok(HttpResponse::BadRequest().json(e));
    }

    if form.checkin >= form.checkout {
        return Err(ApiError::BadRequest(
            "Check-out must be after check-in".to_string(),
        ));
    }

    let rooms = sqlx::query_as::<_, RoomWithType>(&format!(
        r#"
        {} WHERE t.max_guests >= ?
        AND NOT EXISTS (
            SELECT 1 FROM bookings b
            WHERE b.room_id = r.id
            AND b.status = 'confirmed'
            AND b.check_in < ?
            AND b.check_out > ?
        )
        ORDER BY t.price_per_night, r.name
        "#,
        WITH_TYPE_SELECT
    ))
    .bind(form.guests)
    .bind(form.checkout)
    .bind(form.checkin)
    .fetch_all(pool.get_ref())
    .await?;

    let nights = (form.checkout - form.checkin).num_days();
    let offers: Vec<RoomOffer> = rooms
        .into_iter()
        .map(|room| RoomOffer {
            nights,
            total_price: room.price_per_night * nights as f64,
            room,
        })
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "checkin": form.checkin,
        "checkout": form.checkout,
        "guests": form.guests,
        "count": offers.len(),
        "rooms": offers,
    })))
}

#[derive(Deserialize)]
pub struct BookingSearchParams {
    pub filter: Option<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
struct BookingSearchRow {
    id: i64,
    room_id: i64,
    room_name: String,
    guest_name: String,
    email: String,
    check_in: chrono::NaiveDate,
    check_out: chrono::NaiveDate,
    guests_count: i64,
    total_price: f64,
    status: String,
}

/// GET /search/booking — sin filtro redirige a home.
pub async fn search_bookings(
    pool: web::Data<SqlitePool>,
    params: web::Query<BookingSearchParams>,
) -> Result<HttpResponse, ApiError> {
    let filter = match params
        .filter
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
    {
        Some(f) => f,
        None => {
            return Ok(HttpResponse::Found()
                .insert_header((header::LOCATION, "/"))
                .finish())
        }
    };

    let bookings = sqlx::query_as::<_, BookingSearchRow>(
        r#"
        SELECT b.id, b.room_id, r.name AS room_name, b.guest_name, b.email,
               b.check_in, b.check_out, b.guests_count, b.total_price, b.status
        FROM bookings b JOIN rooms r ON r.id = b.room_id
        WHERE instr(lower(b.guest_name), lower(?1)) > 0
           OR instr(lower(b.email), lower(?1)) > 0
        ORDER BY b.check_in
        "#,
    )
    .bind(filter)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "filter": filter,
        "count": bookings.len(),
        "bookings": bookings,
    })))
}
