use crate::*;

/// Solved results of one session: game value, both optimal mixed
/// strategies, and how the pivoting loop ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    value: Utility,
    row: Strategy,
    col: Strategy,
    outcome: Outcome,
}

impl Solution {
    /// Expected payoff to the row player under optimal play.
    pub fn value(&self) -> Utility {
        self.value
    }
    /// Row player (A) mixed strategy.
    pub fn row(&self) -> &Strategy {
        &self.row
    }
    /// Column player (B) mixed strategy.
    pub fn col(&self) -> &Strategy {
        &self.col
    }
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
    pub fn strategy(&self, player: Player) -> &Strategy {
        match player {
            Player::A => &self.row,
            Player::B => &self.col,
        }
    }
}

impl From<Outcome> for Solution {
    fn from(outcome: Outcome) -> Self {
        let tableau = outcome.tableau();
        let value = tableau.value();
        let row = Strategy::row(tableau, value).normalized();
        let col = Strategy::col(tableau, value).normalized();
        log::info!("game value {:.3}, A plays {}, B plays {}", value, row, col);
        Self {
            value,
            row,
            col,
            outcome,
        }
    }
}
