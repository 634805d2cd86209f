//! Best final scores across the sessions of one run
//!
//! Ordered by score, highest first. Equal scores keep the earlier session
//! ahead. A session that ends on zero points is not recorded.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Leaderboard length
pub const MAX_HIGH_SCORES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    /// 1-based session number within the run
    pub session: u32,
}

impl HighScoreEntry {
    /// Leaderboard order: higher score first, then earlier session
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then(self.session.cmp(&other.session))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a finished session. Returns its 1-based rank, or None if it
    /// scored nothing or fell off the end of a full board.
    pub fn record(&mut self, score: u32, session: u32) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let entry = HighScoreEntry { score, session };
        let index = self
            .entries
            .partition_point(|e| e.rank_cmp(&entry) != Ordering::Greater);
        if index >= MAX_HIGH_SCORES {
            return None;
        }
        self.entries.insert(index, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(index + 1)
    }

    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(scores: &[(u32, u32)]) -> Vec<(u32, u32)> {
        let mut hs = HighScores::new();
        for &(score, session) in scores {
            hs.record(score, session);
        }
        hs.entries.iter().map(|e| (e.score, e.session)).collect()
    }

    #[test]
    fn test_zero_score_not_recorded() {
        let mut hs = HighScores::new();
        assert_eq!(hs.record(0, 1), None);
        assert!(hs.best().is_none());
    }

    #[test]
    fn test_ties_keep_earlier_session_first() {
        assert_eq!(
            board(&[(5, 1), (12, 2), (7, 3), (7, 4)]),
            vec![(12, 2), (7, 3), (7, 4), (5, 1)]
        );
        // Sessions filed out of order still sort by session on ties
        assert_eq!(board(&[(7, 4), (7, 3)]), vec![(7, 3), (7, 4)]);
    }

    #[test]
    fn test_rank_returned() {
        let mut hs = HighScores::new();
        assert_eq!(hs.record(5, 1), Some(1));
        assert_eq!(hs.record(12, 2), Some(1));
        assert_eq!(hs.record(5, 3), Some(3));
        assert_eq!(hs.best(), Some(&HighScoreEntry { score: 12, session: 2 }));
    }

    #[test]
    fn test_full_board() {
        let mut hs = HighScores::new();
        for session in 1..=MAX_HIGH_SCORES as u32 {
            hs.record(session * 10, session);
        }
        // Ties the lowest entry but comes from a later session
        assert_eq!(hs.record(10, 50), None);
        assert_eq!(hs.record(55, 51), Some(6));
        assert_eq!(hs.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(hs.entries.last().map(|e| e.score), Some(20));
    }
}
