use serde::{Deserialize, Serialize};

/// Scoring bucket of a single hole relative to par.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreClass {
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    DoubleOrWorse,
}

impl ScoreClass {
    #[must_use]
    pub fn from_to_par(to_par: i32) -> Self {
        match to_par {
            i32::MIN..=-2 => ScoreClass::EagleOrBetter,
            -1 => ScoreClass::Birdie,
            0 => ScoreClass::Par,
            1 => ScoreClass::Bogey,
            _ => ScoreClass::DoubleOrWorse,
        }
    }
}

impl From<i32> for ScoreClass {
    fn from(value: i32) -> Self {
        Self::from_to_par(value)
    }
}
