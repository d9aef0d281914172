use crate::model::{Group, HOLES_PER_ROUND};

/// Shotgun traversal of the course: `start..=18` then `1..start`.
/// A start outside 1..=18 is treated as 1.
#[must_use]
pub fn hole_sequence(start_hole: i32) -> Vec<i32> {
    let start = if (1..=HOLES_PER_ROUND).contains(&start_hole) {
        start_hole
    } else {
        1
    };
    (start..=HOLES_PER_ROUND).chain(1..start).collect()
}

/// The hole a group plays next, or `None` once it has completed 18.
#[must_use]
pub fn next_hole(group: &Group) -> Option<i32> {
    next_hole_from(group.start_hole, group.holes_completed)
}

#[must_use]
pub fn next_hole_from(start_hole: i32, holes_completed: i32) -> Option<i32> {
    let done = usize::try_from(holes_completed.max(0)).unwrap_or(0);
    hole_sequence(start_hole).get(done).copied()
}

#[must_use]
pub fn group_status(group: &Group) -> String {
    if group.is_finished {
        return "Finished".to_string();
    }
    match next_hole(group) {
        Some(hole) => format!("Playing {hole}"),
        // 18 done but not yet flagged finished by the service
        None => "Finished".to_string(),
    }
}
