use super::Matrix;

/// Example games offered alongside manual matrix entry.
///
/// Every preset has a positive game value, which the dual tableau needs to
/// reach a meaningful optimum without shifting payoffs first.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Preset {
    /// Constant game. One pivot, value 2.
    Saddle,
    /// Value 2, A mixes 2:1.
    Skewed,
    /// Value 5/3, A mixes 2:1, B mixes 1:2.
    Inspection,
    /// Value 5/2, A mixes 1:3, B mixes evenly.
    Mixed,
    /// Rock-paper-scissors shifted up by one. Value 1, uniform play.
    Roshambo,
    /// 2×3. B never plays the first column.
    Coverage,
    /// 3×2. A's safe third row is optimal.
    Dominated,
}

impl Preset {
    pub const fn all() -> [Self; 7] {
        [
            Self::Saddle,
            Self::Skewed,
            Self::Inspection,
            Self::Mixed,
            Self::Roshambo,
            Self::Coverage,
            Self::Dominated,
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Saddle => "saddle",
            Self::Skewed => "skewed",
            Self::Inspection => "inspection",
            Self::Mixed => "mixed",
            Self::Roshambo => "roshambo",
            Self::Coverage => "coverage",
            Self::Dominated => "dominated",
        }
    }
    fn payoffs(&self) -> Vec<Vec<f64>> {
        match self {
            Self::Saddle => vec![vec![2., 2.], vec![2., 2.]],
            Self::Skewed => vec![vec![3., 1.], vec![0., 4.]],
            Self::Inspection => vec![vec![1., 2.], vec![3., 1.]],
            Self::Mixed => vec![vec![4., 1.], vec![2., 3.]],
            Self::Roshambo => vec![vec![1., 2., 0.], vec![0., 1., 2.], vec![2., 0., 1.]],
            Self::Coverage => vec![vec![2., 3., 1.], vec![4., 1., 3.]],
            Self::Dominated => vec![vec![5., 1.], vec![2., 4.], vec![3., 3.]],
        }
    }
}

impl From<Preset> for Matrix {
    fn from(preset: Preset) -> Self {
        Matrix::try_from(preset.payoffs()).expect("presets are rectangular")
    }
}

impl TryFrom<&str> for Preset {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown preset {:?}", s))
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
