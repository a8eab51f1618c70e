use actix_web::{http::StatusCode, web, HttpResponse};
use serde::Serialize;

use crate::config::AppConfig;
use crate::errors::FrontendError;
use crate::middleware::session::Session;
use crate::models::review::{Review, ReviewDraft};
use crate::services::catalog_service::CatalogService;
use crate::services::review_service::{ReviewComposer, SubmitOutcome};
use crate::services::upstream::Upstreams;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListView {
    pub room_id: u64,
    pub count: usize,
    pub reviews: Vec<Review>,
    pub degraded: bool,
}

/*
    /api/rooms/{id}/reviews
*/
pub async fn list(
    path: web::Path<u64>,
    upstreams: web::Data<Upstreams>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, FrontendError> {
    let room_id = path.into_inner();
    let loaded = CatalogService::new(
        upstreams.rooms.as_ref(),
        upstreams.reviews.as_ref(),
        config.offline_fallback,
    )
    .reviews(room_id)
    .await?;

    Ok(HttpResponse::Ok().json(ReviewListView {
        room_id,
        count: loaded.data.len(),
        reviews: loaded.data,
        degraded: loaded.degraded,
    }))
}

/*
    /api/rooms/{id}/reviews (POST, signed in)

    Responds with the whole composer: the reconciled list, the draft
    (cleared on success, preserved on failure) and the outcome.
*/
pub async fn create(
    path: web::Path<u64>,
    session: Session,
    input: web::Json<ReviewDraft>,
    upstreams: web::Data<Upstreams>,
    config: web::Data<AppConfig>,
) -> HttpResponse {
    let room_id = path.into_inner();

    let existing = CatalogService::new(
        upstreams.rooms.as_ref(),
        upstreams.reviews.as_ref(),
        config.offline_fallback,
    )
    .reviews(room_id)
    .await
    .map(|loaded| loaded.data)
    .unwrap_or_else(|err| {
        log::warn!("Composing review for room {} without the list: {}", room_id, err);
        Vec::new()
    });

    let mut composer = ReviewComposer::new(room_id, existing).with_draft(input.into_inner());
    composer.submit(upstreams.reviews.as_ref(), &session).await;

    let status = match composer.outcome() {
        Some(SubmitOutcome::Created) => StatusCode::CREATED,
        Some(SubmitOutcome::Rejected(_)) => StatusCode::BAD_REQUEST,
        Some(SubmitOutcome::Failed(_)) => StatusCode::BAD_GATEWAY,
        None => StatusCode::OK,
    };

    HttpResponse::build(status).json(composer)
}
