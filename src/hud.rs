//! HUD values fed by the game loop

use crate::highscores::HighScores;
use crate::ports::HudAdapter;

/// Headless HUD: remembers the last values pushed to it and files final
/// scores on the leaderboard.
#[derive(Debug, Clone, Default)]
pub struct Hud {
    pub score: u32,
    pub lives: u32,
    pub life_bar: u32,
    pub life_bar_max: u32,
    /// Sessions that have ended
    pub games_over: u32,
    pub last_final_score: Option<u32>,
    pub high_scores: HighScores,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn lives_label(&self) -> String {
        format!("Lives: {}", self.lives)
    }
}

impl HudAdapter for Hud {
    fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    fn set_lives(&mut self, lives: u32) {
        self.lives = lives;
    }

    fn set_life_bar(&mut self, value: u32, max: u32) {
        self.life_bar_max = max;
        self.life_bar = value.min(max);
    }

    fn on_game_over(&mut self, final_score: u32) {
        self.games_over += 1;
        self.last_final_score = Some(final_score);
        match self.high_scores.record(final_score, self.games_over) {
            Some(1) => log::info!("Game Over! Final Score: {} (new best)", final_score),
            Some(rank) => log::info!("Game Over! Final Score: {} (rank #{})", final_score, rank),
            None => log::info!("Game Over! Final Score: {}", final_score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let mut hud = Hud::new();
        hud.set_score(12);
        hud.set_lives(2);
        assert_eq!(hud.score_label(), "Score: 12");
        assert_eq!(hud.lives_label(), "Lives: 2");
    }

    #[test]
    fn test_life_bar_clamped() {
        let mut hud = Hud::new();
        hud.set_life_bar(5, 3);
        assert_eq!(hud.life_bar, 3);
        assert_eq!(hud.life_bar_max, 3);
    }

    #[test]
    fn test_game_over_records_score() {
        let mut hud = Hud::new();
        hud.on_game_over(14);
        hud.on_game_over(0);
        assert_eq!(hud.games_over, 2);
        assert_eq!(hud.last_final_score, Some(0));
        assert_eq!(hud.high_scores.best().map(|e| (e.score, e.session)), Some((14, 1)));
        assert_eq!(hud.high_scores.entries.len(), 1);
    }
}
