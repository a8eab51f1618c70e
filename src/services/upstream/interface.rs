use async_trait::async_trait;

use crate::errors::FrontendResult;
use crate::middleware::session::Session;
use crate::models::bookings::{BookingCreated, CreateBookingRequest};
use crate::models::payment::{PaymentCreated, PaymentRequest};
use crate::models::review::{CreateReviewRequest, Review};
use crate::models::room::Room;
use crate::models::search::SearchCriteria;
use crate::models::user::{LoginInput, RegisterRequest, TokenResponse, UserProfile};

#[async_trait]
pub trait RoomCatalog: Send + Sync {
    async fn search_rooms(&self, criteria: &SearchCriteria) -> FrontendResult<Vec<Room>>;
    async fn get_room(&self, id: u64) -> FrontendResult<Room>;
}

#[async_trait]
pub trait BookingOperations: Send + Sync {
    async fn create_booking(&self, booking: &CreateBookingRequest)
        -> FrontendResult<BookingCreated>;
}

#[async_trait]
pub trait PaymentOperations: Send + Sync {
    async fn create_payment(&self, payment: &PaymentRequest) -> FrontendResult<PaymentCreated>;
}

#[async_trait]
pub trait UserOperations: Send + Sync {
    async fn login(&self, credentials: &LoginInput) -> FrontendResult<TokenResponse>;
    async fn register(&self, account: &RegisterRequest) -> FrontendResult<TokenResponse>;
    async fn profile(&self, session: &Session) -> FrontendResult<UserProfile>;
}

#[async_trait]
pub trait ReviewOperations: Send + Sync {
    async fn list_reviews(&self, room_id: u64) -> FrontendResult<Vec<Review>>;
    async fn create_review(
        &self,
        session: &Session,
        review: &CreateReviewRequest,
    ) -> FrontendResult<Review>;
}
