//! Table reservations
//!
//! Fire-and-forget: a booking is checked against the constraints of the form
//! itself, packaged with the restaurant and handed back. No availability
//! check is made against other reservations.

use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BookingConfirmation, BookingForm, Restaurant};

use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};

/// Validate `form` and package it for `restaurant`
///
/// `today` is the earliest bookable date.
pub fn package_booking(
    form: &BookingForm,
    restaurant: &Restaurant,
    today: NaiveDate,
) -> AppResult<BookingConfirmation> {
    let date = form.date.ok_or_else(|| required("date"))?;
    let time = form.time.ok_or_else(|| required("time"))?;

    if date < today {
        return Err(AppError::with_message(
            ErrorCode::BookingDateInPast,
            format!("{} is before {}", date, today),
        )
        .with_detail("date", date.to_string()));
    }
    if form.party_size == 0 {
        return Err(AppError::new(ErrorCode::InvalidPartySize));
    }

    validate_required_text(&form.contact_name, "contact_name", MAX_NAME_LEN)?;
    validate_required_text(&form.contact_phone, "contact_phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&form.special_requests, "special_requests", MAX_NOTE_LEN)?;

    let special_requests = Some(form.special_requests.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(BookingConfirmation {
        booking_id: uuid::Uuid::new_v4().to_string(),
        restaurant_id: restaurant.id,
        restaurant_name: restaurant.name.clone(),
        date,
        time,
        party_size: form.party_size,
        contact_name: form.contact_name.trim().to_string(),
        contact_phone: form.contact_phone.trim().to_string(),
        special_requests,
        submitted_at: chrono::Utc::now().timestamp_millis(),
    })
}

fn required(field: &str) -> AppError {
    AppError::with_message(ErrorCode::RequiredField, format!("{field} is required"))
        .with_detail("field", field)
}
