/// The two sides of a matrix game.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Player {
    /// Row player, maximizing the payoff.
    A,
    /// Column player, minimizing it.
    B,
}

impl Player {
    pub const fn all() -> [Self; 2] {
        [Self::A, Self::B]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
