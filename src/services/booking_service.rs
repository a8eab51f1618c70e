use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::errors::{FrontendError, FrontendResult};
use crate::models::bookings::{BookingDraft, BookingRedirect, CreateBookingRequest};
use crate::models::payment::{CustomerInfo, PaymentMethod, PaymentRequest};
use crate::models::room::Room;
use crate::services::pricing_service::{PricingService, Quote};
use crate::services::upstream::interface::{BookingOperations, PaymentOperations};

pub const MISSING_DATES: &str = "Vui lòng chọn ngày nhận phòng và trả phòng";
pub const BOOKING_FAILED: &str = "Có lỗi xảy ra khi đặt phòng. Vui lòng thử lại sau.";
pub const PAYMENT_FAILED: &str = "Thanh toán thất bại. Vui lòng thử lại.";

pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(
                r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
            )
            .expect("email pattern is valid")
        })
        .is_match(email.trim())
}

pub fn validate_guests(room: &Room, guests: u32) -> FrontendResult<()> {
    if guests == 0 || guests > room.max_guests {
        return Err(FrontendError::validation(format!(
            "Số khách phải từ 1 đến {}",
            room.max_guests
        )));
    }
    Ok(())
}

/// Builds the booking service request. The total is always recomputed
/// from the room's nightly rate.
pub fn booking_request(
    room: &Room,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    guests: u32,
) -> FrontendResult<(CreateBookingRequest, Quote)> {
    let (check_in, check_out) = match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => (check_in, check_out),
        _ => return Err(FrontendError::validation(MISSING_DATES)),
    };
    validate_guests(room, guests)?;

    let quote = PricingService::quote_stay(room.price, Some(check_in), Some(check_out));
    let request = CreateBookingRequest {
        room_id: room.id,
        check_in,
        check_out,
        guests,
        total_price: quote.total,
    };
    Ok((request, quote))
}

pub async fn create_booking(
    bookings: &dyn BookingOperations,
    room: &Room,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    guests: u32,
) -> FrontendResult<BookingRedirect> {
    let (request, quote) = booking_request(room, check_in, check_out, guests)?;
    let created = bookings.create_booking(&request).await?;

    log::info!(
        "Booking {} created for room {} ({} nights, total {})",
        created.id,
        room.id,
        quote.nights,
        quote.total
    );

    let draft = BookingDraft {
        booking_id: Some(created.id.clone()),
        room_id: room.id,
        check_in: request.check_in,
        check_out: request.check_out,
        guests,
    };

    Ok(BookingRedirect {
        booking_id: created.id,
        total_price: quote.total,
        redirect: draft.checkout_url(),
    })
}

pub fn validate_customer(customer: &CustomerInfo) -> FrontendResult<()> {
    if customer.first_name.trim().is_empty() || customer.last_name.trim().is_empty() {
        return Err(FrontendError::validation("Vui lòng nhập họ và tên"));
    }
    if !is_valid_email(&customer.email) {
        return Err(FrontendError::validation("Email không hợp lệ"));
    }
    if customer.phone.trim().is_empty() {
        return Err(FrontendError::validation("Vui lòng nhập số điện thoại"));
    }
    Ok(())
}

/// Charges the booking and returns the confirmation page URL.
pub async fn pay(
    payments: &dyn PaymentOperations,
    booking_id: &str,
    quote: &Quote,
    method: PaymentMethod,
    customer: &CustomerInfo,
) -> FrontendResult<String> {
    if booking_id.trim().is_empty() {
        return Err(FrontendError::validation("Thiếu mã đặt phòng"));
    }
    validate_customer(customer)?;

    let request = PaymentRequest {
        booking_id: booking_id.to_string(),
        amount: quote.total,
        payment_method: method,
        customer_info: customer.clone(),
    };
    let created = payments.create_payment(&request).await?;

    log::info!("Payment {} recorded for booking {}", created.id, booking_id);

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("bookingId", booking_id)
        .append_pair("paymentId", &created.id);
    Ok(format!("/booking-confirmation?{}", query.finish()))
}
