//! Booking Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Reservation form as filled in by the guest
///
/// `Default` is the blank form the page shows after a successful
/// submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub party_size: u32,
    pub contact_name: String,
    pub contact_phone: String,
    #[serde(default)]
    pub special_requests: String,
}

impl BookingForm {
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Packaged reservation returned to the UI shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub booking_id: String,
    pub restaurant_id: i64,
    pub restaurant_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub party_size: u32,
    pub contact_name: String,
    pub contact_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// Millis since epoch
    pub submitted_at: i64,
}

impl BookingConfirmation {
    pub fn message(&self) -> String {
        format!("Table reserved successfully at {}!", self.restaurant_name)
    }
}
