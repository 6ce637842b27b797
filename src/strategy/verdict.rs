use crate::*;

/// A way in which an extracted strategy fails to be a probability distribution.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// Total mass is off by more than [`STRATEGY_TOLERANCE`].
    Sum { player: Player, sum: Probability },
    /// A pure strategy carries negative weight.
    Negative {
        player: Player,
        index: usize,
        weight: Probability,
    },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sum { player, sum } => {
                write!(f, "player {} probabilities sum to {:.3}, not 1", player, sum)
            }
            Self::Negative {
                player,
                index,
                weight,
            } => write!(
                f,
                "player {} assigns negative weight {:.3} to strategy {}",
                player,
                weight,
                index + 1
            ),
        }
    }
}

/// Post-hoc sanity check of a [`Solution`].
///
/// The engine never fails on unbounded or capped runs; it degrades to
/// best-effort numbers. This is where such results get caught.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Verdict(Vec<Violation>);

impl Verdict {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }
    fn check(player: Player, strategy: &Strategy) -> impl Iterator<Item = Violation> {
        let sum = strategy.sum();
        let mass = Some(Violation::Sum { player, sum })
            .filter(|_| (sum - 1.).abs() > STRATEGY_TOLERANCE);
        let negatives = strategy
            .weights()
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, weight)| *weight < 0.)
            .map(move |(index, weight)| Violation::Negative {
                player,
                index,
                weight,
            })
            .collect::<Vec<Violation>>();
        mass.into_iter().chain(negatives)
    }
}

impl From<&Solution> for Verdict {
    fn from(solution: &Solution) -> Self {
        let violations = Player::all()
            .into_iter()
            .flat_map(|player| Self::check(player, solution.strategy(player)))
            .collect::<Vec<Violation>>();
        violations
            .iter()
            .for_each(|violation| log::warn!("{}", violation));
        Self(violations)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            return write!(f, "both strategies are probability distributions");
        }
        let lines = self
            .0
            .iter()
            .map(|violation| violation.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 7×8 game whose pivoting loop is cut off by the iteration cap.
    const CAPPED: &str = "3 2 1 0 1 0 0 3; 3 2 0 3 1 1 0 3; 3 0 1 2 2 1 0 2; \
                          3 3 1 3 2 2 1 2; 1 1 0 0 0 0 0 2; 1 1 0 1 1 3 0 0; \
                          3 2 0 2 3 2 3 3";

    fn verdict(matrix: Matrix) -> Verdict {
        Verdict::from(Solver::from(matrix).solve())
    }

    #[test]
    fn presets_are_valid() {
        for preset in Preset::all() {
            let verdict = verdict(Matrix::from(preset));
            assert!(verdict.is_valid(), "{}: {}", preset, verdict);
        }
    }

    #[test]
    fn saddle_sums_to_one() {
        let ref solution = Solver::from(Matrix::from(Preset::Saddle)).solve().clone();
        assert!((solution.value() - 2.).abs() < 0.01);
        assert!((solution.row().sum() - 1.).abs() <= STRATEGY_TOLERANCE);
        assert!((solution.col().sum() - 1.).abs() <= STRATEGY_TOLERANCE);
        assert!(Verdict::from(solution).is_valid());
    }

    #[test]
    fn capped_run_is_flagged() {
        let mut solver = Solver::from(Matrix::try_from(CAPPED).unwrap());
        let solution = solver.solve().clone();
        assert!(solution.outcome().is_capped());
        let verdict = Verdict::from(&solution);
        assert!(!verdict.is_valid());
        assert!(verdict.violations().iter().any(|v| matches!(
            v,
            Violation::Sum { player: Player::A, sum } if (sum - 1.).abs() > STRATEGY_TOLERANCE
        )));
    }

    #[test]
    fn unbounded_run_is_flagged() {
        let verdict = verdict(Matrix::try_from("-1 -2; -3 -1").unwrap());
        assert_eq!(
            verdict.violations(),
            &[
                Violation::Sum { player: Player::A, sum: 0. },
                Violation::Sum { player: Player::B, sum: 0. },
            ]
        );
    }

    #[test]
    fn negative_weights_are_flagged() {
        let mut verdict = Verdict::default();
        verdict.0.extend(Verdict::check(Player::B, &Strategy::from(vec![1.5, -0.5])));
        assert_eq!(
            verdict.violations(),
            &[Violation::Negative { player: Player::B, index: 1, weight: -0.5 }]
        );
        assert!(verdict.to_string().contains("strategy 2"));
    }

    #[test]
    fn sums_within_tolerance_pass() {
        assert_eq!(Verdict::check(Player::A, &Strategy::from(vec![0.333, 0.333, 0.333])).count(), 0);
        assert_eq!(Verdict::check(Player::A, &Strategy::from(vec![0.5, 0.48])).count(), 1);
    }
}
