use super::*;
use crate::*;

/// Simplex engine for one matrix-solve session.
///
/// Owns everything a stepwise presentation needs: the game, the initial
/// tableau, the history of every pivot, the navigation cursor, and the
/// solved results once computed. All operations run to completion on the
/// calling thread. Wrap the solver in a `Mutex` or hand it to a single owner
/// task before sharing it between threads.
///
/// # Lifecycle
///
/// 1. [`initialize`](Solver::initialize) builds iteration 0 and discards any prior state
/// 2. [`solve`](Solver::solve) pivots to optimality (bounded), records every step, caches the result
/// 3. [`advance`](Solver::advance) / [`retreat`](Solver::retreat) walk the recorded steps
#[derive(Debug, Clone)]
pub struct Solver {
    matrix: Matrix,
    tableau: Tableau,
    history: History,
    limit: usize,
    solution: Option<Solution>,
}

impl Solver {
    pub fn new(matrix: Matrix) -> Self {
        let tableau = Tableau::from(&matrix);
        Self {
            history: History::from(tableau.clone()),
            tableau,
            matrix,
            limit: SIMPLEX_ITERATIONS,
            solution: None,
        }
    }
    /// Overrides the pivot budget of [`SIMPLEX_ITERATIONS`].
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
    /// Rebuilds the initial tableau for `matrix`.
    /// Resets the history to that single tableau, the cursor to 0,
    /// and forgets any cached solution.
    pub fn initialize(&mut self, matrix: Matrix) {
        log::debug!("initializing {}×{} game", matrix.rows(), matrix.cols());
        self.tableau = Tableau::from(&matrix);
        self.history.reset(self.tableau.clone());
        self.matrix = matrix;
        self.solution = None;
    }
    /// Game value and optimal mixed strategies.
    ///
    /// The first call runs the pivoting loop and moves the cursor to the
    /// last recorded step. Later calls return the cached result untouched.
    pub fn solve(&mut self) -> &Solution {
        let solution = match self.solution.take() {
            Some(solution) => solution,
            None => {
                let outcome = self.iterate();
                self.history.seek_last();
                Solution::from(outcome)
            }
        };
        self.solution.insert(solution)
    }
    /// Runs at most `limit` pivots on a working copy of the initial tableau,
    /// appending a snapshot to the history after each one.
    fn iterate(&mut self) -> Outcome {
        let mut tableau = self.tableau.clone();
        for k in 0..self.limit {
            match tableau.choose() {
                None => {
                    log::info!("optimal after {} pivots", k);
                    return Outcome::Optimal(tableau);
                }
                Some(Err(col)) => {
                    log::warn!(
                        "unbounded after {} pivots, {} has no pivot row",
                        k,
                        tableau.variable(col)
                    );
                    return Outcome::Unbounded(tableau);
                }
                Some(Ok(pivot)) => {
                    log::debug!(
                        "pivot {:>2} at {}: {} enters, {} leaves",
                        k + 1,
                        pivot,
                        tableau.variable(pivot.col),
                        tableau.basis()[pivot.row]
                    );
                    tableau.pivot(pivot);
                    self.history.push(Step::from((tableau.clone(), pivot)));
                }
            }
        }
        if tableau.is_optimal() {
            log::info!("optimal after {} pivots", self.limit);
            Outcome::Optimal(tableau)
        } else {
            log::warn!("pivot budget of {} exhausted before optimality", self.limit);
            Outcome::Capped(tableau, self.limit)
        }
    }

    /// Steps the cursor forward. `false` at the last recorded step.
    pub fn advance(&mut self) -> bool {
        self.history.advance()
    }
    /// Steps the cursor back. `false` at iteration 0.
    pub fn retreat(&mut self) -> bool {
        self.history.retreat()
    }
    /// Tableau under the cursor.
    pub fn current(&self) -> &Tableau {
        self.history.current().tableau()
    }
    /// `(cursor, last valid index)`.
    pub fn info(&self) -> (usize, usize) {
        self.history.info()
    }
    /// Basis of the tableau under the cursor.
    pub fn basis(&self) -> &[Variable] {
        self.current().basis()
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
    /// Initial tableau of the current session.
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }
    pub fn limit(&self) -> usize {
        self.limit
    }
    /// Cached solution, if [`solve`](Solver::solve) ran since the last initialization.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }
}

impl From<Matrix> for Solver {
    fn from(matrix: Matrix) -> Self {
        Self::new(matrix)
    }
}
