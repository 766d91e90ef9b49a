//! Tool message types.
//!
//! All toolkit events reaching the mask tool are represented as messages in
//! the Elm architecture style. The surrounding GUI layer is responsible for
//! translating its own pointer/keyboard events into these; the tool stays
//! toolkit-agnostic.

use crate::accumulator::Sign;

/// Messages that can be sent to update the mask tool.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolMessage {
    // Freehand capture
    /// Pointer pressed at image coordinates; starts a freehand stroke
    PointerPressed { x: f32, y: f32 },
    /// Pointer moved while drawing; extends the current stroke
    PointerDragged { x: f32, y: f32 },
    /// Pointer released; closes and records the current stroke
    PointerReleased,

    // Keyboard
    /// Key pressed; resolved through the tool's keybindings
    KeyPressed(char),

    // Direct actions (for toolbars or menus that bypass the keyboard)
    /// Switch the drawing mode
    SetSign(Sign),
    /// Undo the most recently recorded stroke
    Undo,
    /// Discard all recorded strokes
    ClearAll,
}
