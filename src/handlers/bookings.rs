use actix_web::{web, HttpResponse};
use sqlx::{Row, SqlitePool};
use validator::Validate;

use crate::error::ApiError;
use crate::models::booking::{Booking, CreateBooking, UpdateBooking};
use crate::models::room::{RoomWithType, WITH_TYPE_SELECT};

pub async fn create_booking(
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateBooking>,
) -> Result<HttpResponse, ApiError> {
    // 1. Validar inputs básicos
    if let Err(e) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(e));
    }

    if body.check_in >= body.check_out {
        return Err(ApiError::BadRequest(
            "Check-out must be after check-in".to_string(),
        ));
    }

    // 2. Transacción de base de datos
    let mut tx = pool.begin().await?;

    // 3. Verificar existencia de la habitación, precio y capacidad
    let room = sqlx::query_as::<_, RoomWithType>(&format!("{} WHERE r.id = ?", WITH_TYPE_SELECT))
        .bind(body.room_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Room {} not found", body.room_id)))?;

    if body.guests_count > room.max_guests {
        return Err(ApiError::BadRequest(format!(
            "Room {} sleeps at most {} guests, {} requested",
            room.name, room.max_guests, body.guests_count
        )));
    }

    // 4. Prevención de overbooking: la habitación debe estar libre todo el rango
    let taken: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM bookings
        WHERE room_id = ?
        AND status = 'confirmed'
        AND check_in < ?
        AND check_out > ?
        "#,
    )
    .bind(body.room_id)
    .bind(body.check_out)
    .bind(body.check_in)
    .fetch_one(&mut *tx)
    .await?;

    if taken > 0 {
        return Err(ApiError::Conflict(format!(
            "Room {} is already booked between {} and {}",
            room.name, body.check_in, body.check_out
        )));
    }

    // 5. Calcular precio total
    let nights = (body.check_out - body.check_in).num_days();
    let total_price = room.price_per_night * nights as f64;

    // 6. Insertar reserva
    let booking_id = sqlx::query(
        r#"
        INSERT INTO bookings (room_id, guest_name, email, check_in, check_out, guests_count, total_price, status)
        VALUES (?, ?, ?, ?, ?, ?, ?, 'confirmed')
        RETURNING id
        "#,
    )
    .bind(body.room_id)
    .bind(&body.guest_name)
    .bind(&body.email)
    .bind(body.check_in)
    .bind(body.check_out)
    .bind(body.guests_count)
    .bind(total_price)
    .fetch_one(&mut *tx)
    .await?
    .get::<i64, _>("id");

    // 7. Commit
    tx.commit().await?;

    log::info!("booking {} created for room {}", booking_id, room.name);

    Ok(HttpResponse::Created().json(serde_json::json!({
        "id": booking_id,
        "status": "confirmed",
        "nights": nights,
        "total_price": total_price,
        "message": "Booking successful"
    })))
}

pub async fn get_booking(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
        .bind(id)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Booking {} not found", id)))?;

    Ok(HttpResponse::Ok().json(booking))
}

pub async fn edit_booking(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<UpdateBooking>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if let Err(e) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(e));
    }

    if body.check_in >= body.check_out {
        return Err(ApiError::BadRequest(
            "Check-out must be after check-in".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Booking {} not found", id)))?;

    if booking.status != "confirmed" {
        return Err(ApiError::BadRequest(
            "Cannot edit a cancelled booking".to_string(),
        ));
    }

    let room = sqlx::query_as::<_, RoomWithType>(&format!("{} WHERE r.id = ?", WITH_TYPE_SELECT))
        .bind(booking.room_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Room {} not found", booking.room_id)))?;

    if body.guests_count > room.max_guests {
        return Err(ApiError::BadRequest(format!(
            "Room {} sleeps at most {} guests, {} requested",
            room.name, room.max_guests, body.guests_count
        )));
    }

    // Solapamiento con otras reservas, excluyendo la propia
    let taken: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM bookings
        WHERE room_id = ?
        AND id != ?
        AND status = 'confirmed'
        AND check_in < ?
        AND check_out > ?
        "#,
    )
    .bind(booking.room_id)
    .bind(id)
    .bind(body.check_out)
    .bind(body.check_in)
    .fetch_one(&mut *tx)
    .await?;

    if taken > 0 {
        return Err(ApiError::Conflict(format!(
            "Room {} is already booked between {} and {}",
            room.name, body.check_in, body.check_out
        )));
    }

    let nights = (body.check_out - body.check_in).num_days();
    let total_price = room.price_per_night * nights as f64;

    sqlx::query(
        "UPDATE bookings SET check_in = ?, check_out = ?, guests_count = ?, total_price = ? WHERE id = ?",
    )
    .bind(body.check_in)
    .bind(body.check_out)
    .bind(body.guests_count)
    .bind(total_price)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    log::info!("booking {} updated", id);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "id": id,
        "status": "confirmed",
        "nights": nights,
        "total_price": total_price,
        "message": "Booking updated"
    })))
}

pub async fn cancel_booking(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let mut tx = pool.begin().await?;

    // Check if booking exists and check-in hasn't passed
    let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Booking {} not found", id)))?;

    if booking.status == "cancelled" {
        return Err(ApiError::BadRequest(
            "Booking is already cancelled".to_string(),
        ));
    }

    let today = chrono::Utc::now().naive_utc().date();
    if booking.check_in <= today {
        return Err(ApiError::BadRequest(
            "Cannot cancel booking after or on check-in date".to_string(),
        ));
    }

    sqlx::query("UPDATE bookings SET status = 'cancelled' WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    log::info!("booking {} cancelled", id);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Booking cancelled successfully",
        "id": id,
        "refund_amount": booking.total_price
    })))
}
