#![allow(dead_code)]

use actix_web::{web, App};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

use hotel_booking_web::config::AppConfig;
use hotel_booking_web::errors::{FrontendError, FrontendResult};
use hotel_booking_web::middleware::session::Session;
use hotel_booking_web::models::bookings::{BookingCreated, CreateBookingRequest};
use hotel_booking_web::models::payment::{PaymentCreated, PaymentRequest};
use hotel_booking_web::models::review::{CreateReviewRequest, Review};
use hotel_booking_web::models::room::Room;
use hotel_booking_web::models::search::SearchCriteria;
use hotel_booking_web::models::user::{LoginInput, RegisterRequest, TokenResponse, UserProfile};
use hotel_booking_web::routes;
use hotel_booking_web::services::sample_data;
use hotel_booking_web::services::upstream::interface::{
    BookingOperations, PaymentOperations, ReviewOperations, RoomCatalog, UserOperations,
};
use hotel_booking_web::services::upstream::Upstreams;

pub const TEST_TOKEN: &str = "test-session-token";

fn down(service: &'static str) -> FrontendError {
    FrontendError::network(service, "connection refused")
}

/// In-memory stand-in for every collaborator. Each service is either
/// healthy or down, and calls that write are recorded.
#[derive(Default)]
pub struct FakeUpstream {
    pub rooms_down: bool,
    pub reviews_down: bool,
    pub bookings_down: bool,
    pub payments_down: bool,
    pub reject_login: bool,
    pub booking_requests: Mutex<Vec<CreateBookingRequest>>,
    pub payment_requests: Mutex<Vec<PaymentRequest>>,
    pub review_requests: Mutex<Vec<CreateReviewRequest>>,
    pub register_requests: Mutex<Vec<RegisterRequest>>,
}

#[async_trait]
impl RoomCatalog for FakeUpstream {
    async fn search_rooms(&self, _criteria: &SearchCriteria) -> FrontendResult<Vec<Room>> {
        if self.rooms_down {
            return Err(down("room catalog"));
        }
        // Only the two cheapest rooms are "live" so tests can tell them
        // apart from the sample fallback.
        Ok(sample_data::rooms()
            .into_iter()
            .filter(|room| room.price < 1_000_000)
            .collect())
    }

    async fn get_room(&self, id: u64) -> FrontendResult<Room> {
        if self.rooms_down {
            return Err(down("room catalog"));
        }
        sample_data::room(id).ok_or_else(|| FrontendError::NotFound(format!("Room {}", id)))
    }
}

#[async_trait]
impl BookingOperations for FakeUpstream {
    async fn create_booking(
        &self,
        booking: &CreateBookingRequest,
    ) -> FrontendResult<BookingCreated> {
        self.booking_requests.lock().unwrap().push(booking.clone());
        if self.bookings_down {
            return Err(down("booking"));
        }
        Ok(BookingCreated {
            id: "B1001".to_string(),
        })
    }
}

#[async_trait]
impl PaymentOperations for FakeUpstream {
    async fn create_payment(&self, payment: &PaymentRequest) -> FrontendResult<PaymentCreated> {
        self.payment_requests.lock().unwrap().push(payment.clone());
        if self.payments_down {
            return Err(FrontendError::Upstream {
                service: "payment",
                status: 500,
                message: None,
            });
        }
        Ok(PaymentCreated {
            id: "P2002".to_string(),
        })
    }
}

#[async_trait]
impl UserOperations for FakeUpstream {
    async fn login(&self, _credentials: &LoginInput) -> FrontendResult<TokenResponse> {
        if self.reject_login {
            return Err(FrontendError::Upstream {
                service: "user",
                status: 401,
                message: Some("Email hoặc mật khẩu không đúng".to_string()),
            });
        }
        Ok(TokenResponse {
            token: TEST_TOKEN.to_string(),
        })
    }

    async fn register(&self, account: &RegisterRequest) -> FrontendResult<TokenResponse> {
        self.register_requests.lock().unwrap().push(account.clone());
        Ok(TokenResponse {
            token: TEST_TOKEN.to_string(),
        })
    }

    async fn profile(&self, session: &Session) -> FrontendResult<UserProfile> {
        if session.token() != TEST_TOKEN {
            return Err(FrontendError::Unauthorized);
        }
        Ok(UserProfile {
            first_name: "An".to_string(),
            last_name: "Nguyễn".to_string(),
            email: Some("an@example.com".to_string()),
        })
    }
}

#[async_trait]
impl ReviewOperations for FakeUpstream {
    async fn list_reviews(&self, room_id: u64) -> FrontendResult<Vec<Review>> {
        if self.reviews_down {
            return Err(down("review"));
        }
        Ok(sample_data::reviews_for(room_id))
    }

    async fn create_review(
        &self,
        _session: &Session,
        review: &CreateReviewRequest,
    ) -> FrontendResult<Review> {
        self.review_requests.lock().unwrap().push(review.clone());
        if self.reviews_down {
            return Err(down("review"));
        }
        Ok(Review {
            id: "500".to_string(),
            room_id: review.room_id,
            name: "An Nguyễn".to_string(),
            avatar: None,
            rating: review.rating,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            comment: review.comment.clone(),
        })
    }
}

pub struct TestApp {
    pub upstream: Arc<FakeUpstream>,
    pub config: AppConfig,
}

impl TestApp {
    pub fn new(upstream: FakeUpstream) -> Self {
        Self {
            upstream: Arc::new(upstream),
            config: AppConfig::default(),
        }
    }

    pub fn without_fallback(mut self) -> Self {
        self.config.offline_fallback = false;
        self
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let upstreams = Upstreams {
            rooms: self.upstream.clone(),
            bookings: self.upstream.clone(),
            payments: self.upstream.clone(),
            users: self.upstream.clone(),
            reviews: self.upstream.clone(),
        };

        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(upstreams))
            .configure(routes::configure)
    }
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", TEST_TOKEN))
}
