use log::debug;

use crate::point::Point;

/// Whether an operation changed the active points.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Changed,
    Unchanged,
}

impl Change {
    pub fn changed(self) -> bool {
        self == Change::Changed
    }
}

/// Placed points with undo/redo.
///
/// A point lives either in `active` (placed and not undone) or in
/// `canceled` (undone, available for redo), never in both. Placing a new
/// point discards every canceled point.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct PointHistory {
    active: Vec<Point>,
    canceled: Vec<Point>,
}

impl PointHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History whose active points are `points`, in order, with nothing to redo.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        PointHistory {
            active: points.into_iter().collect(),
            canceled: Vec::new(),
        }
    }

    pub fn place(&mut self, p: Point) -> Change {
        debug!("place {} (dropping {} canceled)", p, self.canceled.len());
        self.active.push(p);
        self.canceled.clear();
        Change::Changed
    }

    pub fn undo(&mut self) -> Change {
        let change = transfer_point(&mut self.active, &mut self.canceled);
        debug!("undo: {:?}", change);
        change
    }

    pub fn redo(&mut self) -> Change {
        let change = transfer_point(&mut self.canceled, &mut self.active);
        debug!("redo: {:?}", change);
        change
    }

    /// Undoes everything as one batch; the caller refreshes once on `Changed`.
    pub fn undo_all(&mut self) -> Change {
        let n = transfer_all(&mut self.active, &mut self.canceled);
        debug!("undo all: {} points", n);
        batch_change(n)
    }

    /// Redoes everything as one batch; the caller refreshes once on `Changed`.
    pub fn redo_all(&mut self) -> Change {
        let n = transfer_all(&mut self.canceled, &mut self.active);
        debug!("redo all: {} points", n);
        batch_change(n)
    }

    pub fn can_undo(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.canceled.is_empty()
    }

    /// Active points, oldest first.
    pub fn active_points(&self) -> &[Point] {
        &self.active
    }
}

fn transfer_point(from: &mut Vec<Point>, to: &mut Vec<Point>) -> Change {
    match from.pop() {
        Some(p) => {
            to.push(p);
            Change::Changed
        }
        None => Change::Unchanged,
    }
}

fn transfer_all(from: &mut Vec<Point>, to: &mut Vec<Point>) -> usize {
    let mut n = 0;
    while transfer_point(from, to).changed() {
        n += 1;
    }
    n
}

fn batch_change(n: usize) -> Change {
    if n > 0 {
        Change::Changed
    } else {
        Change::Unchanged
    }
}
