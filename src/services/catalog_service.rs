use serde::Serialize;

use crate::errors::{FrontendError, FrontendResult};
use crate::models::review::Review;
use crate::models::room::Room;
use crate::models::search::SearchCriteria;
use crate::services::sample_data;
use crate::services::upstream::interface::{ReviewOperations, RoomCatalog};

/// Data for a read view, flagged when it came from the bundled sample
/// catalog instead of the collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct Loaded<T> {
    pub data: T,
    pub degraded: bool,
}

impl<T> Loaded<T> {
    fn live(data: T) -> Self {
        Loaded {
            data,
            degraded: false,
        }
    }

    fn fallback(data: T) -> Self {
        Loaded {
            data,
            degraded: true,
        }
    }
}

/// Read-path loader. Network failures degrade to sample data when
/// `offline_fallback` is on and propagate otherwise.
pub struct CatalogService<'a> {
    rooms: &'a dyn RoomCatalog,
    reviews: &'a dyn ReviewOperations,
    offline_fallback: bool,
}

impl<'a> CatalogService<'a> {
    pub fn new(
        rooms: &'a dyn RoomCatalog,
        reviews: &'a dyn ReviewOperations,
        offline_fallback: bool,
    ) -> Self {
        CatalogService {
            rooms,
            reviews,
            offline_fallback,
        }
    }

    pub async fn rooms(&self, criteria: &SearchCriteria) -> FrontendResult<Loaded<Vec<Room>>> {
        match self.rooms.search_rooms(criteria).await {
            Ok(rooms) => Ok(Loaded::live(rooms)),
            Err(err) if self.can_degrade(&err) => {
                log::warn!("Using sample rooms: {}", err);
                Ok(Loaded::fallback(sample_data::rooms()))
            }
            Err(err) => Err(err),
        }
    }

    pub async fn room(&self, id: u64) -> FrontendResult<Loaded<Room>> {
        match self.rooms.get_room(id).await {
            Ok(room) => Ok(Loaded::live(room)),
            Err(err) if self.can_degrade(&err) => {
                log::warn!("Using sample room {}: {}", id, err);
                sample_data::room(id)
                    .map(Loaded::fallback)
                    .ok_or_else(|| FrontendError::NotFound(format!("Room {}", id)))
            }
            Err(err) => Err(err),
        }
    }

    pub async fn reviews(&self, room_id: u64) -> FrontendResult<Loaded<Vec<Review>>> {
        match self.reviews.list_reviews(room_id).await {
            Ok(reviews) => Ok(Loaded::live(reviews)),
            Err(err) if self.can_degrade(&err) => {
                log::warn!("Using sample reviews for room {}: {}", room_id, err);
                Ok(Loaded::fallback(sample_data::reviews_for(room_id)))
            }
            Err(err) => Err(err),
        }
    }

    fn can_degrade(&self, err: &FrontendError) -> bool {
        self.offline_fallback && err.is_network()
    }
}
