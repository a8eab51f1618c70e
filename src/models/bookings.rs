use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{id_string, search::DATE_FORMAT};

/// Booking form as posted from the room detail page.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    pub room_id: u64,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    #[serde(default = "default_guests")]
    pub guests: u32,
}

pub fn default_guests() -> u32 {
    2
}

/// Body sent to the booking service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub room_id: u64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingCreated {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
}

/// Stay parameters carried from the booking form to checkout in the URL.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub booking_id: Option<String>,
    pub room_id: u64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

impl BookingDraft {
    pub fn checkout_url(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        if let Some(booking_id) = &self.booking_id {
            query.append_pair("bookingId", booking_id);
        }
        query
            .append_pair("roomId", &self.room_id.to_string())
            .append_pair("checkIn", &self.check_in.format(DATE_FORMAT).to_string())
            .append_pair("checkOut", &self.check_out.format(DATE_FORMAT).to_string())
            .append_pair("guests", &self.guests.to_string());
        format!("/checkout?{}", query.finish())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRedirect {
    pub booking_id: String,
    pub total_price: i64,
    pub redirect: String,
}
