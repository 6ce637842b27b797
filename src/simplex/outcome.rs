use super::*;

/// How a bounded simplex run ended, with the tableau it ended on.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No negative objective coefficient remains.
    Optimal(Tableau),
    /// The pivot budget ran out after the given number of pivots.
    Capped(Tableau, usize),
    /// The entering column had no positive entry.
    Unbounded(Tableau),
}

impl Outcome {
    pub fn tableau(&self) -> &Tableau {
        match self {
            Self::Optimal(t) | Self::Capped(t, _) | Self::Unbounded(t) => t,
        }
    }
    pub fn is_optimal(&self) -> bool {
        matches!(self, Self::Optimal(_))
    }
    pub fn is_capped(&self) -> bool {
        matches!(self, Self::Capped(..))
    }
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded(_))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optimal(_) => write!(f, "optimal"),
            Self::Capped(_, n) => write!(f, "stopped after {} pivots without reaching optimality", n),
            Self::Unbounded(_) => write!(f, "unbounded, no pivot row in the entering column"),
        }
    }
}
