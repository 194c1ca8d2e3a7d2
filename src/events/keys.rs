// Keyboard shortcuts. Pure so host tests can include this file.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlay,
    Next,
    Previous,
    ToggleShuffle,
    CycleTheme,
    TogglePlayer,
    ToggleFullscreen,
    ExitFullscreen,
}

impl KeyAction {
    /// Whether the browser default (page scroll, button activation) must be suppressed.
    pub fn prevents_default(self) -> bool {
        matches!(self, KeyAction::TogglePlay | KeyAction::ToggleFullscreen)
    }
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " => Some(KeyAction::TogglePlay),
        "ArrowRight" => Some(KeyAction::Next),
        "ArrowLeft" => Some(KeyAction::Previous),
        "s" | "S" => Some(KeyAction::ToggleShuffle),
        "t" | "T" => Some(KeyAction::CycleTheme),
        "h" | "H" => Some(KeyAction::TogglePlayer),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        "Escape" => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}

/// Shortcuts stay out of the way while the user types into a form control.
#[inline]
pub fn is_editable_target(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}
