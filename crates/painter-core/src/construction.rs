//! Interactive free-form polygon construction.

use crate::shapes::Shape;
use kurbo::Point;
use thiserror::Error;

/// Fewest vertices a committed free-form shape may have.
pub const MIN_FREEFORM_POINTS: usize = 3;

/// Rejected construction transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("A shape needs at least {required} points, got {found}")]
    TooFewPoints { required: usize, found: usize },
    #[error("No shape is under construction")]
    NotActive,
}

/// State of a free-form construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Construction {
    /// Not building anything.
    #[default]
    Idle,
    /// Accumulating vertices, one per click.
    Collecting { points: Vec<Point> },
}

impl Construction {
    /// Start a new shape, discarding any points collected so far.
    pub fn begin(&mut self) {
        *self = Construction::Collecting { points: Vec::new() };
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Construction::Collecting { .. })
    }

    /// Points collected so far (empty when idle).
    pub fn points(&self) -> &[Point] {
        match self {
            Construction::Collecting { points } => points,
            Construction::Idle => &[],
        }
    }

    /// Append a vertex. Returns false when idle.
    pub fn push(&mut self, point: Point) -> bool {
        match self {
            Construction::Collecting { points } => {
                points.push(point);
                true
            }
            Construction::Idle => false,
        }
    }

    /// Remove the most recent vertex.
    pub fn pop(&mut self) -> Option<Point> {
        match self {
            Construction::Collecting { points } => points.pop(),
            Construction::Idle => None,
        }
    }

    /// Freeze the collected points into a polygon and return to idle.
    ///
    /// With fewer than [`MIN_FREEFORM_POINTS`] points the commit is
    /// rejected and collection continues.
    pub fn commit(&mut self) -> Result<Shape, ConstructionError> {
        let found = match self {
            Construction::Collecting { points } => points.len(),
            Construction::Idle => return Err(ConstructionError::NotActive),
        };
        if found < MIN_FREEFORM_POINTS {
            return Err(ConstructionError::TooFewPoints {
                required: MIN_FREEFORM_POINTS,
                found,
            });
        }
        match std::mem::take(self) {
            Construction::Collecting { points } => Ok(Shape::polygon(points)),
            Construction::Idle => Err(ConstructionError::NotActive),
        }
    }

    /// Abandon construction. Returns how many points were discarded, or
    /// `None` when nothing was being built.
    pub fn cancel(&mut self) -> Option<usize> {
        match std::mem::take(self) {
            Construction::Collecting { points } => Some(points.len()),
            Construction::Idle => None,
        }
    }
}
