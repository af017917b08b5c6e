//! Study session flow
//!
//! Wires the pure engine to a [`CardStore`]: load the card's record, validate
//! the rating, run the review transform, persist the new record, append the
//! audit entry. This is the only place UI-supplied rating integers cross into
//! the typed engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::scheduler::{
    cards_by_state, due_cards, review_card, Rating, ReviewOutcome, SchedulerError,
    SchedulerParams, SchedulingState,
};
use crate::store::{CardStore, StoreError};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Submit a review for a card.
///
/// `rating` is the raw 1-4 integer from the study UI; anything else fails
/// with [`SchedulerError::InvalidRating`] before any state is touched.
/// Returns the card's new scheduling record after persisting it and its log
/// entry. Callers must not submit concurrent reviews for the same card.
pub fn submit_review<S: CardStore>(
    store: &mut S,
    params: &SchedulerParams,
    card_id: Uuid,
    rating: i32,
    now: DateTime<Utc>,
) -> Result<SchedulingState, SessionError> {
    let rating = Rating::try_from(rating)?;
    let state = store.get(card_id)?;

    let ReviewOutcome { state, log } = review_card(params, &state, rating, now);

    store.put(&state)?;
    store.append(&log)?;

    Ok(state)
}

/// Aggregate progress counts over a collection of cards
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_cards: usize,
    pub new_cards: usize,
    pub learning_cards: usize,
    pub review_cards: usize,
    pub relearning_cards: usize,
    pub due_cards: usize,
}

/// Compute phase and due counts for a collection of cards
pub fn review_stats(cards: &[SchedulingState], now: DateTime<Utc>) -> ReviewStats {
    let buckets = cards_by_state(cards);
    ReviewStats {
        total_cards: cards.len(),
        new_cards: buckets.new.len(),
        learning_cards: buckets.learning.len(),
        review_cards: buckets.review.len(),
        relearning_cards: buckets.relearning.len(),
        due_cards: due_cards(cards, now).len(),
    }
}
