use serde::Deserialize;
use serde::Serialize;

/// A variable of the dual tableau, as it appears in the basis.
///
/// Indices are 0-based; `Display` renders them 1-based (`y_1`, `s_2`).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variable {
    /// Scaled column player weight `y_j = q_j / v`.
    Y(usize),
    /// Slack of the row player's `i`-th constraint.
    S(usize),
}

impl Variable {
    /// Variable owning tableau column `col` in a tableau with `n` column strategies.
    pub fn column(col: usize, n: usize) -> Self {
        if col < n { Self::Y(col) } else { Self::S(col - n) }
    }
    pub fn index(&self) -> usize {
        match self {
            Self::Y(j) | Self::S(j) => *j,
        }
    }
    pub fn is_y(&self) -> bool {
        matches!(self, Self::Y(_))
    }
    pub fn is_slack(&self) -> bool {
        matches!(self, Self::S(_))
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Y(j) => write!(f, "y_{}", j + 1),
            Self::S(i) => write!(f, "s_{}", i + 1),
        }
    }
}
