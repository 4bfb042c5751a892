use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use feast_core::config::keymap::Keymap;
use feast_core::event::Input;

/// Normalises a key press to the name used in `keymap.toml`.
///
/// Named keys use their title-case name (`"Enter"`, `"Tab"`, `"Esc"`,
/// `"Left"`…), characters are used verbatim, and Ctrl combinations are
/// written `"Ctrl+<char>"`. Keys with no name return `None`.
pub fn key_name(key: &KeyEvent) -> Option<String> {
    let name = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            format!("Ctrl+{}", c.to_ascii_lowercase())
        }
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        _ => return None,
    };
    Some(name)
}

/// Resolves a key press through the keymap. Unmapped keys yield `None`.
pub fn resolve_key(key: &KeyEvent, keymap: &Keymap) -> Option<Input> {
    let name = key_name(key)?;
    keymap.action_for_key(&name).map(Input::Key)
}

/// Translates a terminal event into controller input.
///
/// Key releases and repeats (reported by some terminals) are ignored, as
/// are mouse, focus, and paste events.
pub fn translate(event: &TermEvent, keymap: &Keymap) -> Option<Input> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => resolve_key(key, keymap),
        TermEvent::Resize(width, height) => Some(Input::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}
