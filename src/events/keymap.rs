/// What a key press asks the scene or page to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleMode,
    ToggleMusic,
    ClearFocus,
    ToggleHint,
    ToggleFullscreen,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " => Some(KeyAction::ToggleMode),
        "m" | "M" => Some(KeyAction::ToggleMusic),
        "Escape" => Some(KeyAction::ClearFocus),
        "h" | "H" => Some(KeyAction::ToggleHint),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        _ => None,
    }
}

/// Keys whose browser default (scrolling, form submit) must be suppressed.
#[inline]
pub fn suppresses_default(action: KeyAction) -> bool {
    matches!(action, KeyAction::ToggleMode | KeyAction::ToggleFullscreen)
}
