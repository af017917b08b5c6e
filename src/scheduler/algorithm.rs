//! FSRS-style spaced repetition algorithm
//!
//! The engine models each card with two continuous quantities: *stability*
//! (how many days the memory survives) and *difficulty* (how hard the card
//! intrinsically is, 1-10). A review updates both from the learner's rating
//! and the time elapsed since the previous review, then derives the next
//! interval by solving the forgetting curve for the requested retention.
//!
//! Everything here is pure arithmetic: [`review_card`] computes a new
//! [`SchedulingState`] from the old one without touching the input, performs
//! no I/O, and is deterministic for identical inputs. Degenerate numeric
//! input (zero stability, non-finite intermediates) is clamped to a safe
//! value with a `log::warn!` diagnostic rather than surfaced as an error;
//! losing a learner's review over an arithmetic edge case is never acceptable.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::models::{CardPhase, Rating, ReviewLogEntry, ReviewOutcome, SchedulingState};
use super::params::{
    SchedulerParams, MAX_DIFFICULTY, MIN_DIFFICULTY, MIN_STABILITY,
};

/// Apply a rating to a card's scheduling state.
///
/// Returns the card's next state together with the append-only log entry for
/// this review. The input state is left untouched.
///
/// `now` is the wall-clock time of the review; a `now` earlier than the
/// card's last review is treated as zero elapsed time.
pub fn review_card(
    params: &SchedulerParams,
    state: &SchedulingState,
    rating: Rating,
    now: DateTime<Utc>,
) -> ReviewOutcome {
    let mut next = state.clone();

    if state.phase == CardPhase::New {
        // Initialization path: difficulty and stability come straight from
        // the rating-indexed tables, not from elapsed-time updates.
        next.elapsed_days = 0.0;
        next.difficulty = init_difficulty(params, rating);
        next.stability = init_stability(params, rating);
        next.reps = 1;
    } else {
        next.elapsed_days = elapsed_days(state.last_review, now);
        next.reps = state.reps.saturating_add(1);
        next.difficulty = next_difficulty(params, state.difficulty, rating);

        let stability = if state.stability <= 0.0 {
            log::warn!(
                "card {}: non-positive stability {} entering review, substituting 1",
                state.id,
                state.stability
            );
            1.0
        } else {
            state.stability
        };
        let r = retrievability(next.elapsed_days, stability);

        next.stability = if state.phase == CardPhase::Relearning || rating == Rating::Again {
            next_forget_stability(params, state.id, next.difficulty, state.stability, r)
        } else {
            next_recall_stability(params, state.id, next.difficulty, state.stability, r, rating)
        };
    }

    if rating == Rating::Again {
        next.phase = CardPhase::Relearning;
        next.lapses = state.lapses.saturating_add(1);
    } else {
        next.phase = if state.phase == CardPhase::New {
            CardPhase::Learning
        } else {
            CardPhase::Review
        };
    }

    let interval = next_interval(params, state.id, next.stability);
    next.scheduled_days = interval;
    next.due = Some(now + Duration::days(interval));
    next.last_review = Some(now);

    let log = ReviewLogEntry {
        card_id: next.id,
        rating,
        phase: next.phase,
        due: next.due,
        stability: next.stability,
        difficulty: next.difficulty,
        elapsed_days: next.elapsed_days,
        scheduled_days: next.scheduled_days,
        reviewed_at: now,
    };

    ReviewOutcome { state: next, log }
}

/// Days since the previous review, never negative
fn elapsed_days(last_review: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    match last_review {
        Some(last) => {
            let days = (now - last).num_milliseconds() as f64 / 86_400_000.0;
            days.max(0.0)
        }
        None => 0.0,
    }
}

/// Estimated probability of recall after `elapsed_days` at the given stability
///
/// R(t) = (1 + t/(9S))^-1. Callers must pass a positive stability.
pub fn retrievability(elapsed_days: f64, stability: f64) -> f64 {
    (1.0 + elapsed_days / (9.0 * stability)).powi(-1)
}

/// Initial difficulty for a first rating: w4 - w5 * (grade - 3)
pub fn init_difficulty(params: &SchedulerParams, rating: Rating) -> f64 {
    clamp_difficulty(params.w[4] - params.w[5] * (rating.grade() - 3.0))
}

/// Initial stability for a first rating, indexed by w0..w3
pub fn init_stability(params: &SchedulerParams, rating: Rating) -> f64 {
    params.w[rating as usize - 1].max(MIN_STABILITY)
}

/// Difficulty update with mean reversion toward the Good-rating baseline
///
/// The raw step is -w6 * (grade - 3); reverting toward init_difficulty(Good)
/// with weight w7 keeps repeated extreme ratings from pinning the card at a
/// bound.
pub fn next_difficulty(params: &SchedulerParams, difficulty: f64, rating: Rating) -> f64 {
    let shifted = difficulty - params.w[6] * (rating.grade() - 3.0);
    let baseline = params.w[4]; // init_difficulty(Good)
    clamp_difficulty(params.w[7] * baseline + (1.0 - params.w[7]) * shifted)
}

/// Stability after a successful review (rating Hard/Good/Easy outside relearning)
pub fn next_recall_stability(
    params: &SchedulerParams,
    card_id: Uuid,
    difficulty: f64,
    stability: f64,
    retrievability: f64,
    rating: Rating,
) -> f64 {
    let hard_penalty = if rating == Rating::Hard { params.w[15] } else { 1.0 };
    let easy_bonus = if rating == Rating::Easy { params.w[16] } else { 1.0 };

    let growth = params.w[8].exp()
        * (11.0 - difficulty)
        * stability.powf(-params.w[9])
        * ((params.w[10] * (1.0 - retrievability)).exp() - 1.0)
        * hard_penalty
        * easy_bonus;
    let raw = stability * (1.0 + growth);
    floor_stability(card_id, raw)
}

/// Stability after a lapse (rating Again, or any review of a relearning card)
pub fn next_forget_stability(
    params: &SchedulerParams,
    card_id: Uuid,
    difficulty: f64,
    stability: f64,
    retrievability: f64,
) -> f64 {
    let raw = params.w[11]
        * difficulty.powf(-params.w[12])
        * ((stability + 1.0).powf(params.w[13]) - 1.0)
        * (params.w[14] * (1.0 - retrievability)).exp();
    floor_stability(card_id, raw)
}

/// Next interval in whole days, clamped to [1, maximum_interval]
///
/// Solves the forgetting curve for the requested retention:
/// t = (S / factor) * (retention^(1/decay) - 1). A degenerate parameter set
/// or a non-finite result falls back to one day; NaN or infinity must never
/// reach persisted state.
pub fn next_interval(params: &SchedulerParams, card_id: Uuid, stability: f64) -> i64 {
    if params.interval_factor <= 0.0 || params.interval_decay == 0.0 {
        log::warn!(
            "card {}: degenerate interval parameters (factor {}, decay {}), falling back to 1 day",
            card_id,
            params.interval_factor,
            params.interval_decay
        );
        return 1;
    }

    let raw = stability / params.interval_factor
        * (params.request_retention.powf(1.0 / params.interval_decay) - 1.0);
    if !raw.is_finite() || raw < 0.0 {
        log::warn!(
            "card {}: non-finite or negative interval {} from stability {}, falling back to 1 day",
            card_id,
            raw,
            stability
        );
        return 1;
    }

    (raw.round() as i64).clamp(1, params.maximum_interval)
}

fn clamp_difficulty(value: f64) -> f64 {
    value.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

/// Floor a stability update at MIN_STABILITY, catching non-finite intermediates
fn floor_stability(card_id: Uuid, raw: f64) -> f64 {
    if !raw.is_finite() {
        log::warn!(
            "card {}: non-finite stability update {}, clamping to {}",
            card_id,
            raw,
            MIN_STABILITY
        );
        return MIN_STABILITY;
    }
    raw.max(MIN_STABILITY)
}
