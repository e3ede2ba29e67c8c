use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub room_id: i64,
    pub guest_name: String,
    pub email: String,
    pub check_in: chrono::NaiveDate,
    pub check_out: chrono::NaiveDate,
    pub guests_count: i64,
    pub total_price: f64,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBooking {
    pub room_id: i64,
    pub guest_name: String,
    #[validate(email)]
    pub email: String,
    pub check_in: chrono::NaiveDate,
    pub check_out: chrono::NaiveDate,
    #[validate(range(min = 1))]
    pub guests_count: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBooking {
    pub check_in: chrono::NaiveDate,
    pub check_out: chrono::NaiveDate,
    #[validate(range(min = 1))]
    pub guests_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn payload() -> CreateBooking {
        CreateBooking {
            room_id: 1,
            guest_name: "Ana Torres".to_string(),
            email: "ana@example.com".to_string(),
            check_in: NaiveDate::from_ymd_opt(2030, 9, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2030, 9, 12).unwrap(),
            guests_count: 2,
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut body = payload();
        body.email = "not-an-email".to_string();
        assert!(body.validate().is_err());
    }

    #[test]
    fn zero_guests_is_rejected() {
        let mut body = payload();
        body.guests_count = 0;
        assert!(body.validate().is_err());
    }
}
