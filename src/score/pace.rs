use crate::model::{Group, ParMap};

use super::sequencer::next_hole;

/// Expected minutes to play one hole, PGA-style pace guidance.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaceClock;

impl PaceClock {
    /// Four-balls: par 3 ~12, par 4 ~16, par 5 ~20. Smaller groups move quicker.
    #[must_use]
    pub fn minutes_for(par: i32, group_size: usize) -> u32 {
        if group_size >= 4 {
            match par {
                3 => 12,
                5 => 20,
                _ => 16,
            }
        } else {
            match par {
                3 => 11,
                5 => 18,
                _ => 14,
            }
        }
    }

    /// Minutes the group should take on its next hole, `None` once it has played 18.
    #[must_use]
    pub fn minutes_for_next_hole(group: &Group, par_map: &ParMap) -> Option<u32> {
        next_hole(group).map(|hole| Self::minutes_for(par_map.par_of(hole), group.size()))
    }
}
