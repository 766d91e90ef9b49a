//! Customizable keybindings for the mask tool.
//!
//! The defaults follow the classic lasso-tool shortcuts: `a` resumes
//! additive drawing, `r` cuts holes, `z` undoes the last stroke.

use serde::{Deserialize, Serialize};

/// Actions a key press can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Switch to additive drawing
    AddMode,
    /// Switch to subtractive drawing (cut holes)
    SubtractMode,
    /// Undo the last stroke
    Undo,
    /// Discard all strokes
    Clear,
}

impl ToolAction {
    /// Get the display name for this action.
    pub fn name(&self) -> &'static str {
        match self {
            ToolAction::AddMode => "Add mode",
            ToolAction::SubtractMode => "Subtract mode",
            ToolAction::Undo => "Undo",
            ToolAction::Clear => "Clear",
        }
    }

    /// Get all bindable actions.
    pub fn all() -> &'static [ToolAction] {
        &[
            ToolAction::AddMode,
            ToolAction::SubtractMode,
            ToolAction::Undo,
            ToolAction::Clear,
        ]
    }
}

/// Keybinding configuration for the mask tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Hotkey for additive drawing mode
    pub add_mode: char,
    /// Hotkey for subtractive drawing mode
    pub subtract_mode: char,
    /// Hotkey for undo
    pub undo: char,
    /// Hotkey for clearing all strokes
    pub clear: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            add_mode: 'a',
            subtract_mode: 'r',
            undo: 'z',
            clear: 'c',
        }
    }
}

impl KeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the action bound to a key press, if any.
    pub fn action_for_key(&self, key: char) -> Option<ToolAction> {
        if key == self.add_mode {
            Some(ToolAction::AddMode)
        } else if key == self.subtract_mode {
            Some(ToolAction::SubtractMode)
        } else if key == self.undo {
            Some(ToolAction::Undo)
        } else if key == self.clear {
            Some(ToolAction::Clear)
        } else {
            None
        }
    }

    /// Get the hotkey for a specific action.
    pub fn key_for_action(&self, action: ToolAction) -> char {
        match action {
            ToolAction::AddMode => self.add_mode,
            ToolAction::SubtractMode => self.subtract_mode,
            ToolAction::Undo => self.undo,
            ToolAction::Clear => self.clear,
        }
    }

    /// Set the hotkey for an action.
    pub fn set_key(&mut self, action: ToolAction, key: char) {
        match action {
            ToolAction::AddMode => self.add_mode = key,
            ToolAction::SubtractMode => self.subtract_mode = key,
            ToolAction::Undo => self.undo = key,
            ToolAction::Clear => self.clear = key,
        }
    }

    /// Check if a key is already used by another binding.
    /// Returns the conflicting action's name, if any.
    pub fn key_conflict(&self, key: char, exclude: Option<ToolAction>) -> Option<&'static str> {
        ToolAction::all()
            .iter()
            .find(|&&action| exclude != Some(action) && self.key_for_action(action) == key)
            .map(|action| action.name())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_match_lasso_shortcuts() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.action_for_key('a'), Some(ToolAction::AddMode));
        assert_eq!(bindings.action_for_key('r'), Some(ToolAction::SubtractMode));
        assert_eq!(bindings.action_for_key('z'), Some(ToolAction::Undo));
        assert_eq!(bindings.action_for_key('q'), None);
    }

    #[test]
    fn test_set_key_rebinds_action() {
        let mut bindings = KeyBindings::new();
        bindings.set_key(ToolAction::Undo, 'u');
        assert_eq!(bindings.action_for_key('u'), Some(ToolAction::Undo));
        assert_eq!(bindings.action_for_key('z'), None);
    }

    #[test]
    fn test_key_conflict_detection() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.key_conflict('a', None), Some("Add mode"));
        assert_eq!(bindings.key_conflict('a', Some(ToolAction::AddMode)), None);
        assert_eq!(bindings.key_conflict('x', None), None);
    }
}
