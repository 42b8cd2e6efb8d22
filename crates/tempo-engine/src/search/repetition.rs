//! Occurrence counts of positions on the game history plus the search path.

use std::collections::HashMap;

use tempo_core::{Position, PositionKey};

/// Counts how often each position appears on the active path.
///
/// The search observes a position right after making a move and forgets it
/// right after unmaking it, so the counts always describe the game history
/// followed by the moves currently applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepetitionTracker {
    counts: HashMap<PositionKey, u32>,
}

impl RepetitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `position`.
    pub fn observe(&mut self, position: &Position) {
        *self.counts.entry(position.key()).or_insert(0) += 1;
    }

    /// Remove one occurrence of `position`, dropping the key at zero.
    pub fn forget(&mut self, position: &Position) {
        let key = position.key();
        if let Some(count) = self.counts.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&key);
            }
        }
    }

    /// `true` once `position` has occurred three or more times.
    pub fn is_threefold(&self, position: &Position) -> bool {
        self.count(position) >= 3
    }

    pub fn count(&self, position: &Position) -> u32 {
        self.counts.get(&position.key()).copied().unwrap_or(0)
    }

    /// Number of distinct positions tracked.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

#[cfg(test)]
mod tests {
    use tempo_core::Position;

    use super::RepetitionTracker;

    fn play(position: &mut Position, text: &str) {
        let mv = position.parse_move(text).unwrap();
        position.make_move(mv);
    }

    #[test]
    fn observe_and_forget_balance() {
        let position = Position::starting_position();
        let mut tracker = RepetitionTracker::new();
        assert!(tracker.is_empty());

        tracker.observe(&position);
        tracker.observe(&position);
        assert_eq!(tracker.count(&position), 2);
        assert_eq!(tracker.len(), 1);

        tracker.forget(&position);
        assert_eq!(tracker.count(&position), 1);
        tracker.forget(&position);
        assert_eq!(tracker.count(&position), 0);
        assert!(tracker.is_empty());
    }

    #[test]
    fn forgetting_unknown_position_is_a_no_op() {
        let mut tracker = RepetitionTracker::new();
        tracker.forget(&Position::starting_position());
        assert!(tracker.is_empty());
    }

    #[test]
    fn knight_shuffle_reaches_threefold() {
        let mut position = Position::starting_position();
        let mut tracker = RepetitionTracker::new();
        tracker.observe(&position);

        for round in 1..=2 {
            for text in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                play(&mut position, text);
                tracker.observe(&position);
            }
            assert_eq!(tracker.count(&position), round + 1);
        }
        assert!(tracker.is_threefold(&position));

        // Unwinding the last shuffle drops back below three.
        for _ in 0..4 {
            tracker.forget(&position);
            position.unmake_move();
        }
        assert_eq!(tracker.count(&position), 2);
        assert!(!tracker.is_threefold(&position));
    }

    #[test]
    fn clone_is_an_independent_snapshot() {
        let position = Position::starting_position();
        let mut tracker = RepetitionTracker::new();
        tracker.observe(&position);
        let snapshot = tracker.clone();
        tracker.observe(&position);
        assert_ne!(tracker, snapshot);
        tracker = snapshot.clone();
        assert_eq!(tracker, snapshot);
    }
}
