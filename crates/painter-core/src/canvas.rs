//! Canvas: the shape collection and its selection.

use crate::shapes::{Shape, ShapeId};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// What a click that hits no shape does to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Leave the current selection alone.
    #[default]
    KeepOnMiss,
    /// Clear the selection.
    ClearOnMiss,
}

/// An ordered collection of shapes with at most one selected.
///
/// Collection order is drawing order: later shapes are drawn on top and
/// win hit tests.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    shapes: Vec<Shape>,
    selection: Option<ShapeId>,
    /// Behavior of [`Canvas::select_at`] on a miss.
    pub selection_policy: SelectionPolicy,
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new(selection_policy: SelectionPolicy) -> Self {
        Self {
            shapes: Vec::new(),
            selection: None,
            selection_policy,
        }
    }

    /// Add a shape on top of the others.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        self.shapes.push(shape);
        id
    }

    /// Remove a shape. If it was selected, the new first shape becomes
    /// selected, or nothing when the canvas is now empty.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.index_of(id)?;
        let shape = self.shapes.remove(index);
        if self.selection == Some(id) {
            self.selection = self.shapes.first().map(Shape::id);
        }
        Some(shape)
    }

    /// Shapes in drawing order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Position of a shape in drawing order.
    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Select a shape. Ignored if the id is not on the canvas.
    pub fn select(&mut self, id: ShapeId) {
        if self.index_of(id).is_some() {
            self.selection = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection == Some(id)
    }

    /// Id of the selected shape, if it is still on the canvas.
    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selection.filter(|&id| self.index_of(id).is_some())
    }

    pub fn selected(&self) -> Option<&Shape> {
        self.selection.and_then(|id| self.get_shape(id))
    }

    pub fn selected_mut(&mut self) -> Option<&mut Shape> {
        let id = self.selection?;
        self.get_shape_mut(id)
    }

    /// Shapes whose bounding box contains `point`, topmost first.
    pub fn shapes_at_point(&self, point: Point) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .filter(|s| s.hit_test(point))
            .map(Shape::id)
            .collect()
    }

    /// Select the topmost shape under `point`.
    ///
    /// On a miss the selection follows [`Canvas::selection_policy`].
    /// Returns the selection afterwards.
    pub fn select_at(&mut self, point: Point) -> Option<ShapeId> {
        match self.shapes_at_point(point).first() {
            Some(&id) => self.selection = Some(id),
            None => {
                if self.selection_policy == SelectionPolicy::ClearOnMiss {
                    self.selection = None;
                }
            }
        }
        self.selection
    }

    /// Select the next shape in drawing order, wrapping around.
    ///
    /// Starts from the first shape when nothing is selected or the
    /// selected shape is gone.
    pub fn cycle_selection(&mut self) -> Option<ShapeId> {
        if self.shapes.is_empty() {
            self.selection = None;
            return None;
        }
        let next = match self.selection.and_then(|id| self.index_of(id)) {
            Some(index) => (index + 1) % self.shapes.len(),
            None => 0,
        };
        self.selection = Some(self.shapes[next].id());
        self.selection
    }

    /// Remove the selected shape, see [`Canvas::remove_shape`].
    pub fn delete_selected(&mut self) -> Option<Shape> {
        let id = self.selection?;
        self.remove_shape(id)
    }
}
