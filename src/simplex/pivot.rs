/// Location of the pivot element chosen in one simplex iteration.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Pivot {
    /// Leaving row, `0..m`.
    pub row: usize,
    /// Entering column, `0..n+m`.
    pub col: usize,
}

impl From<(usize, usize)> for Pivot {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Pivot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
