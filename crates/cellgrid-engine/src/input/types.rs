/// Pointer position in physical (device) pixels, origin top-left, +Y down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer entered the canvas.
    PointerEntered,

    /// Pointer moved while over the canvas.
    PointerMoved(PointerMoveEvent),

    /// Pointer left the canvas.
    PointerLeft,
}
