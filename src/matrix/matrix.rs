use crate::Arbitrary;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

/// Payoff matrix of a finite two-player zero-sum game.
///
/// Entry `(i, j)` is what the row player (A) receives from the column
/// player (B) when A plays pure strategy `i` and B plays pure strategy `j`.
///
/// The shape contract (`m ≥ 1`, `n ≥ 1`, every row of length `n`) is
/// checked once, at construction. Downstream consumers, the simplex
/// engine included, rely on it without re-validating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Utility>>", into = "Vec<Vec<Utility>>")]
pub struct Matrix {
    payoffs: Vec<Vec<Utility>>,
}

impl Matrix {
    /// Blank `m × n` input grid.
    pub fn zeros(m: usize, n: usize) -> anyhow::Result<Self> {
        Self::try_from(vec![vec![0.; n]; m])
    }
    /// Number of row player strategies.
    pub fn rows(&self) -> usize {
        self.payoffs.len()
    }
    /// Number of column player strategies.
    pub fn cols(&self) -> usize {
        self.payoffs[0].len()
    }
    /// `(m, n)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }
    pub fn payoff(&self, i: usize, j: usize) -> Utility {
        self.payoffs[i][j]
    }
    pub fn row(&self, i: usize) -> &[Utility] {
        &self.payoffs[i]
    }
    pub fn payoffs(&self) -> &[Vec<Utility>] {
        &self.payoffs
    }
}

impl TryFrom<Vec<Vec<Utility>>> for Matrix {
    type Error = anyhow::Error;
    fn try_from(payoffs: Vec<Vec<Utility>>) -> Result<Self, Self::Error> {
        let n = payoffs
            .first()
            .map(|row| row.len())
            .ok_or_else(|| anyhow::anyhow!("payoff matrix has no rows"))?;
        if n == 0 {
            return Err(anyhow::anyhow!("payoff matrix has no columns"));
        }
        if let Some(i) = payoffs.iter().position(|row| row.len() != n) {
            return Err(anyhow::anyhow!(
                "ragged payoff matrix: row {} has {} entries, expected {}",
                i + 1,
                payoffs[i].len(),
                n
            ));
        }
        if let Some(x) = payoffs.iter().flatten().find(|x| !x.is_finite()) {
            return Err(anyhow::anyhow!("non-finite payoff {}", x));
        }
        Ok(Self { payoffs })
    }
}

/// string isomorphism. rows split on `;` or newlines, entries on whitespace or commas
impl TryFrom<&str> for Matrix {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.replace("],", ";")
            .split([';', '\n'])
            .map(|row| row.trim().trim_matches(|c| c == '[' || c == ']'))
            .filter(|row| !row.trim().is_empty())
            .map(|row| {
                row.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|x| !x.is_empty())
                    .map(|x| {
                        x.parse::<Utility>()
                            .map_err(|e| anyhow::anyhow!("invalid payoff {:?}: {}", x, e))
                    })
                    .collect::<anyhow::Result<Vec<Utility>>>()
            })
            .collect::<anyhow::Result<Vec<Vec<Utility>>>>()
            .and_then(Self::try_from)
    }
}

impl From<Matrix> for Vec<Vec<Utility>> {
    fn from(matrix: Matrix) -> Self {
        matrix.payoffs
    }
}

impl Arbitrary for Matrix {
    fn random() -> Self {
        let m = rand::random_range(2..=4);
        let n = rand::random_range(2..=4);
        let payoffs = (0..m)
            .map(|_| (0..n).map(|_| rand::random_range(0..=9) as Utility).collect())
            .collect();
        Self { payoffs }
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.payoffs.iter() {
            let row = row
                .iter()
                .map(|x| format!("{:>6}", x))
                .collect::<Vec<String>>()
                .join(" ");
            writeln!(f, "[{} ]", row)?;
        }
        Ok(())
    }
}
