pub mod http;
pub mod interface;

use std::sync::Arc;

use interface::{BookingOperations, PaymentOperations, ReviewOperations, RoomCatalog, UserOperations};

/// The collaborators a request handler may call, shared through `web::Data`.
#[derive(Clone)]
pub struct Upstreams {
    pub rooms: Arc<dyn RoomCatalog>,
    pub bookings: Arc<dyn BookingOperations>,
    pub payments: Arc<dyn PaymentOperations>,
    pub users: Arc<dyn UserOperations>,
    pub reviews: Arc<dyn ReviewOperations>,
}

impl Upstreams {
    pub fn from_http(client: http::HttpUpstream) -> Self {
        let client = Arc::new(client);
        Upstreams {
            rooms: client.clone(),
            bookings: client.clone(),
            payments: client.clone(),
            users: client.clone(),
            reviews: client,
        }
    }
}
