use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::{AppConfig, ServiceUrls};
use crate::errors::{FrontendError, FrontendResult};
use crate::middleware::session::Session;
use crate::models::bookings::{BookingCreated, CreateBookingRequest};
use crate::models::payment::{PaymentCreated, PaymentRequest};
use crate::models::review::{CreateReviewRequest, Review};
use crate::models::room::Room;
use crate::models::search::SearchCriteria;
use crate::models::user::{LoginInput, RegisterRequest, TokenResponse, UpstreamMessage, UserProfile};

use super::interface::{
    BookingOperations, PaymentOperations, ReviewOperations, RoomCatalog, UserOperations,
};

const ROOMS: &str = "room catalog";
const BOOKINGS: &str = "booking";
const PAYMENTS: &str = "payment";
const USERS: &str = "user";
const REVIEWS: &str = "review";

/// reqwest-backed client for every REST collaborator. One connection pool
/// is shared by all of them and every call carries the configured timeout.
#[derive(Clone)]
pub struct HttpUpstream {
    client: Client,
    urls: ServiceUrls,
}

impl HttpUpstream {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            urls: config.services.clone(),
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        service: &'static str,
        request: RequestBuilder,
    ) -> FrontendResult<T> {
        let response = request.send().await.map_err(|err| {
            log::error!("{} request could not complete: {}", service, err);
            FrontendError::network(service, err)
        })?;

        let response = check_status(service, response).await?;

        response.json::<T>().await.map_err(|err| {
            log::error!("Failed to decode {} response: {}", service, err);
            FrontendError::network(service, err)
        })
    }
}

async fn check_status(service: &'static str, response: Response) -> FrontendResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<UpstreamMessage>()
        .await
        .ok()
        .and_then(|body| body.message);

    log::warn!("{} returned status {}: {:?}", service, status, message);

    Err(FrontendError::Upstream {
        service,
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl RoomCatalog for HttpUpstream {
    async fn search_rooms(&self, criteria: &SearchCriteria) -> FrontendResult<Vec<Room>> {
        let url = format!("{}/api/rooms/search", self.urls.rooms);
        let request = self.client.get(&url).query(&criteria.to_query_pairs());
        self.send(ROOMS, request).await
    }

    async fn get_room(&self, id: u64) -> FrontendResult<Room> {
        let url = format!("{}/api/rooms/{}", self.urls.rooms, id);
        match self.send(ROOMS, self.client.get(&url)).await {
            Err(FrontendError::Upstream { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(FrontendError::NotFound(format!("Room {}", id)))
            }
            other => other,
        }
    }
}

#[async_trait]
impl BookingOperations for HttpUpstream {
    async fn create_booking(
        &self,
        booking: &CreateBookingRequest,
    ) -> FrontendResult<BookingCreated> {
        let url = format!("{}/api/bookings", self.urls.bookings);
        self.send(BOOKINGS, self.client.post(&url).json(booking)).await
    }
}

#[async_trait]
impl PaymentOperations for HttpUpstream {
    async fn create_payment(&self, payment: &PaymentRequest) -> FrontendResult<PaymentCreated> {
        let url = format!("{}/api/payments", self.urls.payments);
        self.send(PAYMENTS, self.client.post(&url).json(payment)).await
    }
}

#[async_trait]
impl UserOperations for HttpUpstream {
    async fn login(&self, credentials: &LoginInput) -> FrontendResult<TokenResponse> {
        let url = format!("{}/api/auth/login", self.urls.users);
        self.send(USERS, self.client.post(&url).json(credentials)).await
    }

    async fn register(&self, account: &RegisterRequest) -> FrontendResult<TokenResponse> {
        let url = format!("{}/api/auth/register", self.urls.users);
        self.send(USERS, self.client.post(&url).json(account)).await
    }

    async fn profile(&self, session: &Session) -> FrontendResult<UserProfile> {
        let url = format!("{}/api/users/profile", self.urls.users);
        let request = self.client.get(&url).bearer_auth(session.token());
        match self.send(USERS, request).await {
            Err(FrontendError::Upstream { status, .. })
                if status == StatusCode::UNAUTHORIZED.as_u16() =>
            {
                Err(FrontendError::Unauthorized)
            }
            other => other,
        }
    }
}

#[async_trait]
impl ReviewOperations for HttpUpstream {
    async fn list_reviews(&self, room_id: u64) -> FrontendResult<Vec<Review>> {
        let url = format!("{}/api/reviews/{}", self.urls.reviews, room_id);
        self.send(REVIEWS, self.client.get(&url)).await
    }

    async fn create_review(
        &self,
        session: &Session,
        review: &CreateReviewRequest,
    ) -> FrontendResult<Review> {
        let url = format!("{}/api/reviews/create", self.urls.reviews);
        let request = self
            .client
            .post(&url)
            .bearer_auth(session.token())
            .json(review);
        self.send(REVIEWS, request).await
    }
}
