//! Pure queries over collections of scheduling states

use chrono::{DateTime, Utc};

use super::models::{CardPhase, SchedulingState};

/// Cards in each phase, as produced by [`cards_by_state`]
#[derive(Debug, Default)]
pub struct StateBuckets<'a> {
    pub new: Vec<&'a SchedulingState>,
    pub learning: Vec<&'a SchedulingState>,
    pub review: Vec<&'a SchedulingState>,
    pub relearning: Vec<&'a SchedulingState>,
}

/// All cards due at `now`, oldest due date first
///
/// A card with no due date is always due and sorts before dated cards.
pub fn due_cards<'a>(cards: &'a [SchedulingState], now: DateTime<Utc>) -> Vec<&'a SchedulingState> {
    let mut due: Vec<&SchedulingState> = cards.iter().filter(|c| c.is_due(now)).collect();
    due.sort_by_key(|c| c.due);
    due
}

/// Partition a collection of cards into the four phase buckets
pub fn cards_by_state(cards: &[SchedulingState]) -> StateBuckets<'_> {
    let mut buckets = StateBuckets::default();
    for card in cards {
        match card.phase {
            CardPhase::New => buckets.new.push(card),
            CardPhase::Learning => buckets.learning.push(card),
            CardPhase::Review => buckets.review.push(card),
            CardPhase::Relearning => buckets.relearning.push(card),
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn card_due_at(due: Option<DateTime<Utc>>, phase: CardPhase) -> SchedulingState {
        let mut state = SchedulingState::new(Uuid::new_v4(), Utc::now());
        state.due = due;
        state.phase = phase;
        state
    }

    #[test]
    fn test_due_cards_filters_and_sorts() {
        let now = Utc::now();
        let cards = vec![
            card_due_at(Some(now + Duration::days(3)), CardPhase::Review),
            card_due_at(Some(now - Duration::days(2)), CardPhase::Review),
            card_due_at(Some(now), CardPhase::Learning),
            card_due_at(None, CardPhase::New),
        ];

        let due = due_cards(&cards, now);
        assert_eq!(due.len(), 3);
        // Unset due date sorts first, then oldest
        assert!(due[0].due.is_none());
        assert_eq!(due[1].due, Some(now - Duration::days(2)));
        assert_eq!(due[2].due, Some(now));
    }

    #[test]
    fn test_due_cards_is_idempotent() {
        let now = Utc::now();
        let cards = vec![
            card_due_at(Some(now - Duration::days(1)), CardPhase::Review),
            card_due_at(Some(now + Duration::days(1)), CardPhase::Review),
        ];

        let first: Vec<Uuid> = due_cards(&cards, now).iter().map(|c| c.id).collect();
        let second: Vec<Uuid> = due_cards(&cards, now).iter().map(|c| c.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cards_by_state_partitions() {
        let now = Utc::now();
        let cards = vec![
            card_due_at(Some(now), CardPhase::New),
            card_due_at(Some(now), CardPhase::Learning),
            card_due_at(Some(now), CardPhase::Review),
            card_due_at(Some(now), CardPhase::Review),
            card_due_at(Some(now), CardPhase::Relearning),
        ];

        let buckets = cards_by_state(&cards);
        assert_eq!(buckets.new.len(), 1);
        assert_eq!(buckets.learning.len(), 1);
        assert_eq!(buckets.review.len(), 2);
        assert_eq!(buckets.relearning.len(), 1);

        let again = cards_by_state(&cards);
        assert_eq!(
            buckets.review.iter().map(|c| c.id).collect::<Vec<_>>(),
            again.review.iter().map(|c| c.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_empty_collection() {
        let buckets = cards_by_state(&[]);
        assert!(buckets.new.is_empty());
        assert!(due_cards(&[], Utc::now()).is_empty());
    }
}
