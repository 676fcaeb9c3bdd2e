//! Pointer math for dragging and resizing a window view.
//!
//! Sessions live in the view, not in [`crate::model::DesktopState`]: a drag only moves the frame
//! locally and reports its final position once.

use crate::model::{WindowPosition, WindowSize, MIN_RESIZE_HEIGHT, MIN_RESIZE_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub pointer_id: i32,
    pub pointer_start: PointerPosition,
    pub origin: WindowPosition,
}

impl DragSession {
    pub fn position_at(&self, pointer: PointerPosition) -> WindowPosition {
        self.origin.offset(
            pointer.x - self.pointer_start.x,
            pointer.y - self.pointer_start.y,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub pointer_id: i32,
    pub pointer_start: PointerPosition,
    pub size_start: WindowSize,
}

impl ResizeSession {
    pub fn size_at(&self, pointer: PointerPosition) -> WindowSize {
        WindowSize::new(
            self.size_start.width + pointer.x - self.pointer_start.x,
            self.size_start.height + pointer.y - self.pointer_start.y,
        )
        .clamped_min(MIN_RESIZE_WIDTH, MIN_RESIZE_HEIGHT)
    }
}
