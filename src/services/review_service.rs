use serde::Serialize;

use crate::errors::{FrontendError, FrontendResult};
use crate::middleware::session::Session;
use crate::models::review::{CreateReviewRequest, Rating, Review, ReviewDraft};
use crate::services::upstream::interface::ReviewOperations;

pub const EMPTY_COMMENT: &str = "Vui lòng nhập nội dung đánh giá";
pub const SUBMIT_FAILED: &str = "Không thể gửi đánh giá. Vui lòng thử lại.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComposerState {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "message")]
pub enum SubmitOutcome {
    Created,
    Rejected(String),
    Failed(String),
}

/// The review list of one room plus its compose box.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewComposer {
    room_id: u64,
    reviews: Vec<Review>,
    draft: ReviewDraft,
    state: ComposerState,
    outcome: Option<SubmitOutcome>,
}

impl ReviewComposer {
    pub fn new(room_id: u64, reviews: Vec<Review>) -> Self {
        ReviewComposer {
            room_id,
            reviews,
            draft: ReviewDraft::default(),
            state: ComposerState::Idle,
            outcome: None,
        }
    }

    pub fn with_draft(mut self, draft: ReviewDraft) -> Self {
        self.draft = draft;
        self
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    pub fn state(&self) -> ComposerState {
        self.state
    }

    pub fn outcome(&self) -> Option<&SubmitOutcome> {
        self.outcome.as_ref()
    }

    /// Idle -> Submitting, guarded by a non-blank comment. Returns the
    /// request to send, or leaves the composer idle.
    pub fn begin_submit(&mut self) -> FrontendResult<CreateReviewRequest> {
        if self.state == ComposerState::Submitting {
            return Err(FrontendError::validation("Review already being submitted"));
        }

        let comment = self.draft.comment.trim();
        if comment.is_empty() {
            self.outcome = Some(SubmitOutcome::Rejected(EMPTY_COMMENT.to_string()));
            return Err(FrontendError::validation(EMPTY_COMMENT));
        }

        self.state = ComposerState::Submitting;
        self.outcome = None;

        Ok(CreateReviewRequest {
            room_id: self.room_id,
            rating: self.draft.rating,
            comment: comment.to_string(),
        })
    }

    /// Submitting -> Idle. A created review replaces any entry with the
    /// same id, otherwise it goes to the front, and the draft is reset.
    /// On failure the draft is kept for another attempt.
    pub fn finish_submit(&mut self, result: FrontendResult<Review>) {
        self.state = ComposerState::Idle;

        match result {
            Ok(review) => {
                self.reconcile(review);
                self.draft = ReviewDraft {
                    comment: String::new(),
                    rating: Rating::default(),
                };
                self.outcome = Some(SubmitOutcome::Created);
            }
            Err(err) => {
                log::warn!("Review for room {} not created: {}", self.room_id, err);
                self.outcome = Some(SubmitOutcome::Failed(err.user_message(SUBMIT_FAILED)));
            }
        }
    }

    pub async fn submit(&mut self, reviews: &dyn ReviewOperations, session: &Session) {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(_) => return,
        };
        let result = reviews.create_review(session, &request).await;
        self.finish_submit(result);
    }

    fn reconcile(&mut self, review: Review) {
        match self.reviews.iter().position(|r| r.id == review.id) {
            Some(index) => self.reviews[index] = review,
            None => self.reviews.insert(0, review),
        }
    }
}
