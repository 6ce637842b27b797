use super::*;
use crate::*;

/// Simplex tableau of the column player's dual program.
///
/// For an `m × n` game the tableau has `m + 1` rows and `n + m + 1` columns:
///
/// - rows `0..m` encode `Σ_j a_ij y_j + s_i = 1`, one per row strategy
/// - row `m` is the objective, maximizing `Σ_j y_j = 1 / v`
/// - columns `0..n` hold the `y_j`, columns `n..n+m` the slacks `s_i`
/// - the last column is the right-hand side
///
/// The basis travels with the cells so that a cloned tableau is a complete,
/// independent snapshot of the simplex state.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    m: usize,
    n: usize,
    cells: Vec<Vec<Utility>>,
    basis: Vec<Variable>,
}

impl Tableau {
    /// Constraint rows.
    pub fn rows(&self) -> usize {
        self.m
    }
    /// Column player strategies.
    pub fn cols(&self) -> usize {
        self.n
    }
    /// Variable columns, excluding the right-hand side.
    pub fn width(&self) -> usize {
        self.n + self.m
    }
    pub fn cells(&self) -> &[Vec<Utility>] {
        &self.cells
    }
    pub fn row(&self, i: usize) -> &[Utility] {
        &self.cells[i]
    }
    pub fn basis(&self) -> &[Variable] {
        &self.basis
    }
    pub fn objective(&self) -> &[Utility] {
        &self.cells[self.m]
    }
    /// Right-hand side of row `i`.
    pub fn rhs(&self, i: usize) -> Utility {
        self.cells[i][self.width()]
    }
    /// Variable owning column `col`.
    pub fn variable(&self, col: usize) -> Variable {
        Variable::column(col, self.n)
    }

    /// Column with the strictly most negative objective coefficient.
    /// Ties go to the lowest index. `None` means the tableau is optimal.
    pub fn entering(&self) -> Option<usize> {
        self.objective()
            .iter()
            .take(self.width())
            .enumerate()
            .fold(None, |best: Option<(usize, Utility)>, (j, &x)| match best {
                Some((_, min)) if x >= min => best,
                _ if x < 0. => Some((j, x)),
                _ => best,
            })
            .map(|(j, _)| j)
    }
    /// Minimum ratio test over rows with a strictly positive entry in `col`.
    /// Ties go to the lowest index. `None` means the program is unbounded.
    pub fn leaving(&self, col: usize) -> Option<usize> {
        (0..self.m)
            .filter(|&i| self.cells[i][col] > 0.)
            .map(|i| (i, self.rhs(i) / self.cells[i][col]))
            .fold(None, |best: Option<(usize, Utility)>, (i, ratio)| match best {
                Some((_, min)) if ratio >= min => best,
                _ => Some((i, ratio)),
            })
            .map(|(i, _)| i)
    }
    /// Next pivot under the most-negative-coefficient rule, if any.
    pub fn choose(&self) -> Option<Result<Pivot, usize>> {
        self.entering()
            .map(|col| self.leaving(col).map(|row| Pivot { row, col }).ok_or(col))
    }
    /// Gauss-Jordan elimination around `pivot`, then basis exchange.
    pub fn pivot(&mut self, pivot: Pivot) {
        let Pivot { row, col } = pivot;
        let element = self.cells[row][col];
        debug_assert!(element > 0., "pivot on non-positive element");
        self.cells[row].iter_mut().for_each(|x| *x /= element);
        let ref normal = self.cells[row].clone();
        self.cells
            .iter_mut()
            .enumerate()
            .filter(|(i, _)| *i != row)
            .for_each(|(_, cells)| {
                let factor = cells[col];
                cells
                    .iter_mut()
                    .zip(normal.iter())
                    .for_each(|(x, p)| *x -= factor * p);
            });
        self.basis[row] = self.variable(col);
    }
    /// No objective coefficient is negative.
    pub fn is_optimal(&self) -> bool {
        self.entering().is_none()
    }
    /// Current objective value `Σ y_j`, read from the objective row's right-hand side.
    pub fn objective_value(&self) -> Utility {
        self.rhs(self.m)
    }
    /// Game value to the row player, `v = 1 / Σ y_j`.
    ///
    /// Falls back to [`FALLBACK_VALUE`] when the objective is not positive,
    /// which happens whenever no pivot could be made.
    pub fn value(&self) -> Utility {
        match self.objective_value() {
            objective if objective <= 0. => FALLBACK_VALUE,
            objective => 1. / objective,
        }
    }
}

impl From<&Matrix> for Tableau {
    fn from(matrix: &Matrix) -> Self {
        let (m, n) = matrix.dimensions();
        let constraints = (0..m).map(|i| {
            let payoffs = matrix.row(i).iter().copied();
            let identity = (0..m).map(move |j| if i == j { 1. } else { 0. });
            payoffs.chain(identity).chain(std::iter::once(1.)).collect()
        });
        let objective = std::iter::repeat_n(-1., n)
            .chain(std::iter::repeat_n(0., m))
            .chain(std::iter::once(0.))
            .collect();
        Self {
            m,
            n,
            cells: constraints.chain(std::iter::once(objective)).collect(),
            basis: (0..m).map(Variable::S).collect(),
        }
    }
}

impl std::fmt::Display for Tableau {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = (0..self.width())
            .map(|j| format!("{:>9}", self.variable(j).to_string()))
            .collect::<String>();
        writeln!(f, "{:<6}{}{:>9}", "basis", header, "RHS")?;
        for (i, cells) in self.cells.iter().enumerate() {
            let label = self
                .basis
                .get(i)
                .map(|v| v.to_string())
                .unwrap_or_else(|| String::from("Z"));
            let cells = cells
                .iter()
                .map(|x| format!("{:>9.3}", x))
                .collect::<String>();
            writeln!(f, "{:<6}{}", label, cells)?;
        }
        Ok(())
    }
}
