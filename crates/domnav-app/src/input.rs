//! Line-oriented key script parsing.

use domnav_core::{Direction, KeyEvent, NavigatorConfig};

/// One parsed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Deliver a key press.
    Key(KeyEvent),
    /// Print the current state.
    Show,
    Quit,
    /// Blank line or comment.
    Skip,
}

/// Parse a script line. Direction names map through the configured key
/// codes so the demo exercises the binding table; bare numbers are raw codes.
pub fn parse_line(line: &str, config: &NavigatorConfig) -> Option<ScriptCommand> {
    let token = line.trim();
    if token.is_empty() || token.starts_with('#') {
        return Some(ScriptCommand::Skip);
    }
    match token {
        "show" => return Some(ScriptCommand::Show),
        "quit" | "q" => return Some(ScriptCommand::Quit),
        _ => {},
    }
    if let Ok(code) = token.parse::<u32>() {
        return Some(ScriptCommand::Key(KeyEvent::new(code)));
    }
    let code = match token.parse::<Direction>().ok()? {
        Direction::Left => config.left,
        Direction::Up => config.up,
        Direction::Right => config.right,
        Direction::Down => config.down,
    };
    Some(ScriptCommand::Key(KeyEvent::new(code)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_use_configured_codes() {
        let cfg = NavigatorConfig::default().with_keys(65, 87, 68, 83);
        assert_eq!(
            parse_line("right", &cfg),
            Some(ScriptCommand::Key(KeyEvent::new(68)))
        );
        assert_eq!(
            parse_line("  up ", &cfg),
            Some(ScriptCommand::Key(KeyEvent::new(87)))
        );
    }

    #[test]
    fn numeric_codes_pass_through() {
        let cfg = NavigatorConfig::default();
        assert_eq!(
            parse_line("40", &cfg),
            Some(ScriptCommand::Key(KeyEvent::new(40)))
        );
    }

    #[test]
    fn control_lines() {
        let cfg = NavigatorConfig::default();
        assert_eq!(parse_line("", &cfg), Some(ScriptCommand::Skip));
        assert_eq!(parse_line("# comment", &cfg), Some(ScriptCommand::Skip));
        assert_eq!(parse_line("show", &cfg), Some(ScriptCommand::Show));
        assert_eq!(parse_line("q", &cfg), Some(ScriptCommand::Quit));
        assert_eq!(parse_line("sideways", &cfg), None);
    }
}
