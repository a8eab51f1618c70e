use actix_web::{web, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::AppConfig;
use crate::errors::FrontendError;
use crate::models::bookings::BookingInput;
use crate::models::payment::{CustomerInfo, PaymentMethod};
use crate::models::room::{Room, RoomSummary};
use crate::models::search::{parse_date, DATE_FORMAT};
use crate::services::booking_service::{self, BOOKING_FAILED, PAYMENT_FAILED};
use crate::services::catalog_service::CatalogService;
use crate::services::pricing_service::{PricingService, Quote};
use crate::services::upstream::Upstreams;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuery {
    pub booking_id: Option<String>,
    pub room_id: u64,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    #[serde(default)]
    pub customer_info: CustomerInfo,
    #[serde(default)]
    pub special_requests: String,
    #[serde(default = "default_save_info")]
    pub save_info: bool,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

fn default_save_info() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    #[serde(default)]
    pub booking_id: String,
    pub room_id: u64,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<u32>,
    #[serde(flatten)]
    pub form: CheckoutForm,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutView {
    pub booking_id: Option<String>,
    pub room: Option<RoomSummary>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: u32,
    pub quote: Option<Quote>,
    pub form: CheckoutForm,
    pub submitting: bool,
    pub error: Option<String>,
    pub degraded: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationQuery {
    pub booking_id: Option<String>,
    pub payment_id: Option<String>,
}

fn catalog<'a>(upstreams: &'a Upstreams, config: &AppConfig) -> CatalogService<'a> {
    CatalogService::new(
        upstreams.rooms.as_ref(),
        upstreams.reviews.as_ref(),
        config.offline_fallback,
    )
}

/*
    /api/bookings (POST)

    Prices from the live catalog only. Any failure, including the room
    lookup, answers with the submitted form.
*/
pub async fn create(
    input: web::Json<BookingInput>,
    upstreams: web::Data<Upstreams>,
) -> HttpResponse {
    let input = input.into_inner();

    let result = match upstreams.rooms.get_room(input.room_id).await {
        Ok(room) => {
            booking_service::create_booking(
                upstreams.bookings.as_ref(),
                &room,
                input.check_in,
                input.check_out,
                input.guests,
            )
            .await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(redirect) => HttpResponse::Created().json(redirect),
        Err(err) => {
            log::error!("Booking for room {} failed: {}", input.room_id, err);
            HttpResponse::build(err.status_code()).json(json!({
                "error": err.user_message(BOOKING_FAILED),
                "form": input,
            }))
        }
    }
}

/*
    /api/checkout?bookingId=&roomId=&checkIn=&checkOut=&guests=
*/
pub async fn summary(
    query: web::Query<CheckoutQuery>,
    upstreams: web::Data<Upstreams>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, FrontendError> {
    let query = query.into_inner();
    let room = catalog(&upstreams, &config).room(query.room_id).await?;

    let quote = PricingService::quote_stay(
        room.data.price,
        query.check_in.as_deref().and_then(parse_date),
        query.check_out.as_deref().and_then(parse_date),
    );

    Ok(HttpResponse::Ok().json(CheckoutView {
        booking_id: query.booking_id,
        room: Some(RoomSummary::from(&room.data)),
        check_in: query.check_in,
        check_out: query.check_out,
        guests: query.guests.unwrap_or(1),
        quote: Some(quote),
        form: CheckoutForm {
            save_info: true,
            ..Default::default()
        },
        submitting: false,
        error: None,
        degraded: room.degraded,
    }))
}

fn stay_quote(room: &Room, input: &CheckoutInput) -> Quote {
    PricingService::quote_stay(
        room.price,
        input.check_in.as_deref().and_then(parse_date),
        input.check_out.as_deref().and_then(parse_date),
    )
}

// Checkout view for a failed payment: the submitted form, the error and
// whatever of the room we managed to load.
fn checkout_failed(input: CheckoutInput, room: Option<&Room>, err: FrontendError) -> HttpResponse {
    log::error!("Checkout for booking {:?} failed: {}", input.booking_id, err);

    HttpResponse::build(err.status_code()).json(CheckoutView {
        quote: room.map(|room| stay_quote(room, &input)),
        room: room.map(RoomSummary::from),
        booking_id: Some(input.booking_id),
        check_in: input.check_in,
        check_out: input.check_out,
        guests: input.guests.unwrap_or(1),
        form: input.form,
        submitting: false,
        error: Some(err.user_message(PAYMENT_FAILED)),
        degraded: false,
    })
}

/*
    /api/checkout (POST)

    The amount is priced from the live catalog only. On failure the
    checkout view is returned with the submitted form so the page can
    show the error and re-enable the submit button.
*/
pub async fn pay(input: web::Json<CheckoutInput>, upstreams: web::Data<Upstreams>) -> HttpResponse {
    let input = input.into_inner();

    let room = match upstreams.rooms.get_room(input.room_id).await {
        Ok(room) => room,
        Err(err) => return checkout_failed(input, None, err),
    };
    let quote = stay_quote(&room, &input);

    let result = booking_service::pay(
        upstreams.payments.as_ref(),
        &input.booking_id,
        &quote,
        input.form.payment_method,
        &input.form.customer_info,
    )
    .await;

    match result {
        Ok(redirect) => HttpResponse::Ok().json(json!({ "redirect": redirect })),
        Err(err) => checkout_failed(input, Some(&room), err),
    }
}

/*
    /api/booking-confirmation?bookingId=&paymentId=
*/
pub async fn confirmation(query: web::Query<ConfirmationQuery>) -> HttpResponse {
    let query = query.into_inner();

    match query.booking_id.filter(|id| !id.trim().is_empty()) {
        Some(booking_id) => HttpResponse::Ok().json(json!({
            "bookingId": booking_id,
            "paymentId": query.payment_id,
            "confirmedOn": chrono::Local::now().date_naive().format(DATE_FORMAT).to_string(),
        })),
        None => FrontendError::NotFound("Booking".to_string()).error_response(),
    }
}
