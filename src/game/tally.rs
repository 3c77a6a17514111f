//! In-process record of rounds played

use super::RoundState;

/// Rounds and wins for the current run, never persisted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayTally {
    pub rounds: u32,
    pub wins: u32,
    pub best_score: Option<u32>,
}

impl PlayTally {
    /// Fold a finished round into the tally
    ///
    /// Rounds still in play are ignored.
    pub fn record(&mut self, state: RoundState) {
        match state {
            RoundState::Playing => return,
            RoundState::Won { score, .. } => {
                self.wins += 1;
                self.best_score = Some(self.best_score.map_or(score, |best| best.max(score)));
            }
            RoundState::Exhausted => {}
        }
        self.rounds += 1;
    }
}
