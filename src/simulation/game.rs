//! Significance Game
//!
//! Generate chi-square scores at random and see how often chance alone
//! crosses the critical value. More degrees of freedom make a "surprising"
//! score harder to reach.
use crate::constants::SCORE_HISTORY_LEN;
use crate::critical::is_significant;
use crate::distribution::{density_curve, CurvePoint};
use crate::sampler::chi_square_variate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// One degree of freedom.
    #[default]
    Simple,
    /// Ten degrees of freedom.
    Complex,
}

impl GameMode {
    pub fn df(&self) -> usize {
        match self {
            GameMode::Simple => 1,
            GameMode::Complex => 10,
        }
    }

    /// Critical value at alpha = 0.05, rounded to two decimals.
    pub fn critical_value(&self) -> f64 {
        match self {
            GameMode::Simple => 3.84,
            GameMode::Complex => 18.31,
        }
    }

    pub fn chart_extent(&self) -> f64 {
        match self {
            GameMode::Simple => 12.0,
            GameMode::Complex => 30.0,
        }
    }

    pub fn density_curve(&self) -> Vec<CurvePoint> {
        density_curve(self.df() as f64, self.chart_extent(), 0.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDraw {
    pub score: f64,
    pub is_significant: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignificanceGame {
    mode: GameMode,
    history: VecDeque<ScoredDraw>,
}

impl SignificanceGame {
    pub fn new(mode: GameMode) -> Self {
        SignificanceGame {
            mode,
            history: VecDeque::with_capacity(SCORE_HISTORY_LEN),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    /// Judge a score against the current mode's critical value.
    pub fn judge(&self, score: f64) -> ScoredDraw {
        ScoredDraw {
            score,
            is_significant: is_significant(score, self.mode.critical_value()),
        }
    }

    /// Draw a random score, remembering only the most recent ones.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ScoredDraw {
        let draw = self.judge(chi_square_variate(rng, self.mode.df()));
        self.history.push_back(draw);
        while self.history.len() > SCORE_HISTORY_LEN {
            self.history.pop_front();
        }
        draw
    }

    /// Recent draws, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ScoredDraw> {
        self.history.iter()
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mode_parameters() {
        assert_eq!(GameMode::Simple.df(), 1);
        assert_eq!(GameMode::Complex.df(), 10);
        assert_eq!(GameMode::default(), GameMode::Simple);
        let curve = GameMode::Simple.density_curve();
        assert!(curve.last().unwrap().x <= 12.0);
        assert!(curve.len() >= 118);
    }

    #[test]
    fn test_judge_manual_score() {
        let game = SignificanceGame::new(GameMode::Simple);
        assert!(game.judge(6.0).is_significant);
        assert!(!game.judge(3.84).is_significant);

        let game = SignificanceGame::new(GameMode::Complex);
        assert!(!game.judge(6.0).is_significant);
        assert!(game.judge(20.0).is_significant);
    }

    #[test]
    fn test_history_keeps_last_five() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = SignificanceGame::new(GameMode::Complex);
        let draws: Vec<ScoredDraw> = (0..8).map(|_| game.generate(&mut rng)).collect();
        let history: Vec<ScoredDraw> = game.history().copied().collect();
        assert_eq!(history.len(), 5);
        assert_eq!(history, draws[3..]);
        for d in &history {
            assert_eq!(d.is_significant, d.score > 18.31);
        }
        game.reset();
        assert_eq!(game.history().count(), 0);
    }

    #[test]
    fn test_chance_rarely_significant() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut game = SignificanceGame::new(GameMode::Simple);
        let hits = (0..4000).filter(|_| game.generate(&mut rng).is_significant).count();
        // About 5% of chance scores land beyond the critical value.
        let rate = hits as f64 / 4000.0;
        assert!((rate - 0.05).abs() < 0.015, "rate = {}", rate);
        game.set_mode(GameMode::Complex);
        assert_eq!(game.mode(), GameMode::Complex);
    }
}
