//! file: enclosure.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:18:11 Saturday
//! brief: parity ray casting against the tail of a path

use super::{Axis, Cell};

/// Whether `target` lies inside the loop traced by `path[start..]`.
///
/// A ray leaves `target` along `ray` (an axis unit step). Path cells sitting on
/// the ray form runs of consecutive indices; a run counts as one crossing when
/// the cells just before and just after it lie on different sides of the ray
/// line. An odd number of crossings means `target` is enclosed.
///
/// Runs touching either end of `path` have no neighbour on that side and are
/// never counted.
pub fn is_enclosed(path: &[Cell], target: Cell, start: usize, ray: Cell) -> bool {
    crossings(path, target, start, ray) % 2 == 1
}

fn crossings(path: &[Cell], target: Cell, start: usize, ray: Cell) -> usize {
    let orth = if ray.x == 0 { Axis::X } else { Axis::Y };
    let tan = orth.other();

    let mut runs: Vec<(usize, usize)> = Vec::new();
    for (i, cell) in path.iter().enumerate().skip(start) {
        if cell.get(orth) != target.get(orth) {
            continue;
        }
        if (cell.get(tan) - target.get(tan)) * ray.get(tan) <= 0 {
            continue;
        }
        match runs.last_mut() {
            Some(run) if run.1 + 1 == i => run.1 = i,
            _ => runs.push((i, i)),
        }
    }

    runs.into_iter()
        .filter(|&(first, last)| {
            let enter = first.checked_sub(1).and_then(|i| path.get(i));
            let exit = path.get(last + 1);
            match (enter, exit) {
                (Some(enter), Some(exit)) => enter.get(orth) != exit.get(orth),
                _ => false,
            }
        })
        .count()
}
