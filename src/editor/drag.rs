use crate::editor::crop::CropEdge;

/// Hit-test half-extent (frame units) used to pick up a control point.
pub const POINT_HIT_RADIUS: f64 = 8.0;

/// The single active pointer interaction.
///
/// At most one drag is active at a time: `Idle -> Dragging* -> Idle`. Beginning a drag while one is
/// active is declined by [`EditorState`](crate::EditorState).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Moving the control point at this index (path frame coordinates).
    DraggingPoint(usize),
    /// Moving one crop edge (display pixel coordinates).
    DraggingCropEdge(CropEdge),
}

impl DragState {
    /// Return `true` when no drag is active.
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/drag.rs"]
mod tests;
