use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::errors::FrontendError;
use crate::models::bookings::default_guests;
use crate::models::review::Review;
use crate::models::room::{Room, RoomSummary};
use crate::models::search::{parse_date, SearchCriteria};
use crate::services::booking_service::validate_guests;
use crate::services::catalog_service::CatalogService;
use crate::services::pricing_service::{PricingService, Quote};
use crate::services::search_service;
use crate::services::upstream::Upstreams;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomListView {
    pub criteria: SearchCriteria,
    pub count: usize,
    pub rooms: Vec<Room>,
    pub degraded: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailView {
    pub room: Room,
    pub amenity_labels: Vec<&'static str>,
    pub reviews: Vec<Review>,
    pub quote: Quote,
    pub degraded: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuery {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteView {
    pub room: RoomSummary,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: u32,
    pub quote: Quote,
}

fn catalog<'a>(upstreams: &'a Upstreams, config: &AppConfig) -> CatalogService<'a> {
    CatalogService::new(
        upstreams.rooms.as_ref(),
        upstreams.reviews.as_ref(),
        config.offline_fallback,
    )
}

/*
    /api/rooms?location=&minPrice=&maxPrice=&amenities=&sort=
*/
pub async fn list(
    req: HttpRequest,
    upstreams: web::Data<Upstreams>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, FrontendError> {
    let criteria = SearchCriteria::from_query(req.query_string());
    let loaded = catalog(&upstreams, &config).rooms(&criteria).await?;

    let rooms = search_service::search_rooms(&loaded.data, &criteria);

    Ok(HttpResponse::Ok().json(RoomListView {
        criteria,
        count: rooms.len(),
        rooms,
        degraded: loaded.degraded,
    }))
}

/*
    /api/rooms/featured
*/
pub async fn featured(
    upstreams: web::Data<Upstreams>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, FrontendError> {
    let loaded = catalog(&upstreams, &config)
        .rooms(&SearchCriteria::default())
        .await?;

    let rooms = search_service::featured_rooms(&loaded.data);

    Ok(HttpResponse::Ok().json(RoomListView {
        criteria: SearchCriteria::default(),
        count: rooms.len(),
        rooms,
        degraded: loaded.degraded,
    }))
}

/*
    /api/rooms/{id}
*/
pub async fn detail(
    path: web::Path<u64>,
    upstreams: web::Data<Upstreams>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, FrontendError> {
    let id = path.into_inner();
    let catalog = catalog(&upstreams, &config);

    let room = catalog.room(id).await?;
    // Reviews are secondary on this page; an outage without fallback shows none.
    let (reviews, reviews_degraded) = match catalog.reviews(id).await {
        Ok(reviews) => (reviews.data, reviews.degraded),
        Err(err) => {
            log::warn!("Room {} shown without reviews: {}", id, err);
            (Vec::new(), true)
        }
    };

    Ok(HttpResponse::Ok().json(RoomDetailView {
        amenity_labels: room.data.amenities.iter().map(|a| a.label()).collect(),
        quote: PricingService::quote(room.data.price, 1),
        degraded: room.degraded || reviews_degraded,
        room: room.data,
        reviews,
    }))
}

/*
    /api/rooms/{id}/quote?checkIn=&checkOut=&guests=
*/
pub async fn quote(
    path: web::Path<u64>,
    query: web::Query<StayQuery>,
    upstreams: web::Data<Upstreams>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, FrontendError> {
    let id = path.into_inner();
    let query = query.into_inner();
    let room = catalog(&upstreams, &config).room(id).await?.data;

    let guests = query.guests.unwrap_or_else(default_guests);
    validate_guests(&room, guests)?;

    let check_in = query.check_in.as_deref().and_then(parse_date);
    let check_out = query.check_out.as_deref().and_then(parse_date);

    Ok(HttpResponse::Ok().json(QuoteView {
        room: RoomSummary::from(&room),
        check_in: query.check_in,
        check_out: query.check_out,
        guests,
        quote: PricingService::quote_stay(room.price, check_in, check_out),
    }))
}
