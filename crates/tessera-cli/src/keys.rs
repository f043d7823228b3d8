use anyhow::{bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Parse one key name as written in a `--keys` script.
///
/// Accepts arrow and editing key names (`left`, `enter`, `esc`, `space`, ...)
/// and single characters.
pub fn parse_key(name: &str) -> Result<KeyEvent> {
    let trimmed = name.trim();
    let code = match trimmed.to_ascii_lowercase().as_str() {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        _ => {
            let mut chars = trimmed.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => bail!("unknown key {name:?}"),
            }
        }
    };
    Ok(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn parse_script<S: AsRef<str>>(names: &[S]) -> Result<Vec<KeyEvent>> {
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !name.trim().is_empty())
        .map(parse_key)
        .collect()
}
