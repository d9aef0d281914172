use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const HOLES_PER_ROUND: i32 = 18;
pub const DEFAULT_PAR: i32 = 4;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hole {
    pub number: i32,
    pub par: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Course {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub holes: Vec<Hole>,
}

impl Course {
    #[must_use]
    pub fn par_map(&self) -> ParMap {
        ParMap::from_holes(&self.holes)
    }

    /// Hole numbers in 1..=18 with no par on file. Lookups for these fall back
    /// to par 4, so a non-empty result usually means bad upstream data.
    #[must_use]
    pub fn missing_holes(&self) -> Vec<i32> {
        (1..=HOLES_PER_ROUND)
            .filter(|n| !self.holes.iter().any(|h| h.number == *n))
            .collect()
    }
}

/// Hole number to par lookup. `par_of` is total.
#[derive(Clone, Debug, Default)]
pub struct ParMap {
    pars: HashMap<i32, i32, RandomState>,
}

impl ParMap {
    #[must_use]
    pub fn from_holes(holes: &[Hole]) -> Self {
        let mut pars: HashMap<i32, i32, RandomState> = HashMap::default();
        for hole in holes {
            pars.insert(hole.number, hole.par);
        }
        Self { pars }
    }

    #[must_use]
    pub fn par_of(&self, hole_number: i32) -> i32 {
        if let Some(par) = self.pars.get(&hole_number) {
            *par
        } else {
            tracing::debug!(hole_number, default = DEFAULT_PAR, "no par on file");
            DEFAULT_PAR
        }
    }

    #[must_use]
    pub fn contains(&self, hole_number: i32) -> bool {
        self.pars.contains_key(&hole_number)
    }
}

impl FromIterator<(i32, i32)> for ParMap {
    fn from_iter<T: IntoIterator<Item = (i32, i32)>>(iter: T) -> Self {
        let mut pars: HashMap<i32, i32, RandomState> = HashMap::default();
        pars.extend(iter);
        Self { pars }
    }
}
