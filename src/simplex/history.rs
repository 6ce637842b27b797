use super::*;

/// One recorded simplex iteration.
///
/// Each step owns a deep copy of the tableau, so later pivots never
/// disturb what an earlier step shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    tableau: Tableau,
    pivot: Option<Pivot>,
}

impl Step {
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }
    /// Pivot that produced this step. `None` for the initial tableau.
    pub fn pivot(&self) -> Option<Pivot> {
        self.pivot
    }
}

impl From<Tableau> for Step {
    fn from(tableau: Tableau) -> Self {
        Self {
            tableau,
            pivot: None,
        }
    }
}

impl From<(Tableau, Pivot)> for Step {
    fn from((tableau, pivot): (Tableau, Pivot)) -> Self {
        Self {
            tableau,
            pivot: Some(pivot),
        }
    }
}

/// Append-only sequence of simplex steps with a navigation cursor.
///
/// Index 0 is the initial tableau; index `k` follows the `k`-th pivot.
/// The cursor stays within `[0, len - 1]` and moves without recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    steps: Vec<Step>,
    cursor: usize,
}

impl History {
    /// Drops every step and restarts from `initial` with the cursor at 0.
    pub fn reset(&mut self, initial: Tableau) {
        self.steps.clear();
        self.steps.push(Step::from(initial));
        self.cursor = 0;
    }
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }
    /// Moves the cursor forward. `false` at the last step.
    pub fn advance(&mut self) -> bool {
        if self.cursor < self.last() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }
    /// Moves the cursor back. `false` at the initial step.
    pub fn retreat(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }
    /// Moves the cursor to the last step.
    pub fn seek_last(&mut self) {
        self.cursor = self.last();
    }
    pub fn current(&self) -> &Step {
        &self.steps[self.cursor]
    }
    /// `(cursor, last valid index)`.
    pub fn info(&self) -> (usize, usize) {
        (self.cursor, self.last())
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn last(&self) -> usize {
        self.steps.len() - 1
    }
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl From<Tableau> for History {
    fn from(initial: Tableau) -> Self {
        Self {
            steps: vec![Step::from(initial)],
            cursor: 0,
        }
    }
}
