use crate::*;

/// A mixed strategy: one weight per pure strategy.
///
/// Extracted weights are only a probability distribution when the
/// tableau they came from is optimal. See [`Verdict`] for the check.
#[derive(Debug, Clone, PartialEq)]
pub struct Strategy(Vec<Probability>);

impl Strategy {
    /// Row player weights `p_i = v · z_{n+i}`, read from the objective row's slack columns.
    pub fn row(tableau: &Tableau, value: Utility) -> Self {
        let n = tableau.cols();
        let objective = tableau.objective();
        Self((0..tableau.rows()).map(|i| objective[n + i] * value).collect())
    }
    /// Column player weights `q_j = v · y_j`, read from the right-hand side of
    /// each row whose basic variable is some `y_j`. Non-basic `y_j` stay 0.
    pub fn col(tableau: &Tableau, value: Utility) -> Self {
        let mut weights = vec![0.; tableau.cols()];
        tableau
            .basis()
            .iter()
            .enumerate()
            .filter_map(|(i, variable)| match variable {
                Variable::Y(j) => Some((i, *j)),
                Variable::S(_) => None,
            })
            .for_each(|(i, j)| weights[j] = tableau.rhs(i) * value);
        Self(weights)
    }
    /// Rescales to unit mass, rounded to [`STRATEGY_PRECISION`] decimals.
    /// Left untouched when the total mass is not positive.
    pub fn normalized(self) -> Self {
        match self.sum() {
            sum if sum > 0. => Self(self.0.iter().map(|w| Self::round(w / sum)).collect()),
            _ => self,
        }
    }
    fn round(weight: Probability) -> Probability {
        let scale = (10. as Probability).powi(STRATEGY_PRECISION);
        (weight * scale).round() / scale
    }
    pub fn sum(&self) -> Probability {
        self.0.iter().sum()
    }
    pub fn weights(&self) -> &[Probability] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Probability>> for Strategy {
    fn from(weights: Vec<Probability>) -> Self {
        Self(weights)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let weights = self
            .0
            .iter()
            .map(|w| format!("{:.3}", w))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "({})", weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optimal(s: &str) -> Tableau {
        let mut tableau = Tableau::from(&Matrix::try_from(s).unwrap());
        while let Some(Ok(pivot)) = tableau.choose() {
            tableau.pivot(pivot);
        }
        tableau
    }

    #[test]
    fn row_reads_slack_coefficients() {
        let tableau = optimal("2 2; 2 2");
        let p = Strategy::row(&tableau, tableau.value());
        assert_eq!(p.weights(), &[1., 0.]);
    }

    #[test]
    fn col_reads_basic_rows() {
        let tableau = optimal("2 2; 2 2");
        let q = Strategy::col(&tableau, tableau.value());
        assert_eq!(q.weights(), &[1., 0.]);
    }

    #[test]
    fn col_ignores_slack_rows() {
        let tableau = Tableau::from(&Matrix::try_from("3 1; 0 4").unwrap());
        let q = Strategy::col(&tableau, 2.);
        assert_eq!(q.weights(), &[0., 0.]);
    }

    #[test]
    fn normalized_rounds_to_precision() {
        let p = Strategy::from(vec![2., 1.]).normalized();
        assert_eq!(p.weights(), &[0.667, 0.333]);
        let p = Strategy::from(vec![1., 1., 1.]).normalized();
        assert_eq!(p.weights(), &[0.333, 0.333, 0.333]);
    }

    #[test]
    fn normalized_leaves_empty_mass() {
        let p = Strategy::from(vec![0., 0.]).normalized();
        assert_eq!(p.weights(), &[0., 0.]);
        let p = Strategy::from(vec![1., -3.]).normalized();
        assert_eq!(p.weights(), &[1., -3.]);
    }

    #[test]
    fn display() {
        assert_eq!(Strategy::from(vec![0.5, 0.25]).to_string(), "(0.500, 0.250)");
    }
}
