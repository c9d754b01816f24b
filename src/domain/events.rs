#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
}

/// A key press normalized by the event source.
///
/// Printable keys carry the character itself; others use lowercase names
/// such as `"enter"`, `"tab"`, `"backtab"`, `"backspace"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// The printable character, if this is a plain single-character key.
    pub fn printable_char(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }

        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_char_only_for_plain_single_char_keys() {
        assert_eq!(KeyInput::new("a", false).printable_char(), Some('a'));
        assert_eq!(KeyInput::new("ж", false).printable_char(), Some('ж'));
        assert_eq!(KeyInput::new("s", true).printable_char(), None);
        assert_eq!(KeyInput::new("enter", false).printable_char(), None);
    }
}
