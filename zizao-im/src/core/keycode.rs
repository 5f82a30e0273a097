//! Input symbol classification
//!
//! The composer only ever sees already-classified symbols: a lowercase
//! letter, a selection digit, backspace, or a commit trigger. Everything
//! else stays with the host and is never forwarded.

/// A classified input symbol, the only input type the composer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSymbol {
    /// A lowercase letter `a`–`z`, appended to the key sequence
    Letter(char),
    /// A selection digit `1`–`9`, picking from the current candidate list
    Digit(u8),
    /// Remove the last letter of the key sequence
    Backspace,
    /// Commit the current preview (space, enter, or equivalent)
    Commit,
}

impl InputSymbol {
    /// Classify a plain character. Uppercase letters are folded to
    /// lowercase; space and newline act as commit triggers. Returns `None`
    /// for anything the composer should not see.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'a'..='z' => Some(Self::Letter(ch)),
            'A'..='Z' => Some(Self::Letter(ch.to_ascii_lowercase())),
            '1'..='9' => Some(Self::Digit(ch as u8 - b'0')),
            ' ' | '\n' | '\r' => Some(Self::Commit),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            _ => None,
        }
    }

    /// Classify a DOM-style key code name (`KeyA`..`KeyZ`, `Digit1`..
    /// `Digit9`, `Backspace`, `Enter`, `Space`), the names a browser host
    /// delivers.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Backspace" => return Some(Self::Backspace),
            "Enter" | "Space" => return Some(Self::Commit),
            _ => {}
        }
        if let Some(letter) = name.strip_prefix("Key") {
            let mut chars = letter.chars();
            match (chars.next(), chars.next()) {
                (Some(ch @ 'A'..='Z'), None) => {
                    return Some(Self::Letter(ch.to_ascii_lowercase()));
                }
                _ => return None,
            }
        }
        if let Some(digit) = name.strip_prefix("Digit") {
            let mut chars = digit.chars();
            match (chars.next(), chars.next()) {
                (Some(ch @ '1'..='9'), None) => return Some(Self::Digit(ch as u8 - b'0')),
                _ => return None,
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(InputSymbol::from_char('w'), Some(InputSymbol::Letter('w')));
        assert_eq!(InputSymbol::from_char('W'), Some(InputSymbol::Letter('w')));
        assert_eq!(InputSymbol::from_char('3'), Some(InputSymbol::Digit(3)));
        assert_eq!(InputSymbol::from_char(' '), Some(InputSymbol::Commit));
        assert_eq!(InputSymbol::from_char('\n'), Some(InputSymbol::Commit));
        assert_eq!(InputSymbol::from_char('0'), None);
        assert_eq!(InputSymbol::from_char('!'), None);
        assert_eq!(InputSymbol::from_char('漢'), None);
    }

    #[test]
    fn test_from_key_name() {
        assert_eq!(
            InputSymbol::from_key_name("KeyQ"),
            Some(InputSymbol::Letter('q'))
        );
        assert_eq!(
            InputSymbol::from_key_name("Digit9"),
            Some(InputSymbol::Digit(9))
        );
        assert_eq!(
            InputSymbol::from_key_name("Backspace"),
            Some(InputSymbol::Backspace)
        );
        assert_eq!(InputSymbol::from_key_name("Enter"), Some(InputSymbol::Commit));
        assert_eq!(InputSymbol::from_key_name("Space"), Some(InputSymbol::Commit));
        assert_eq!(InputSymbol::from_key_name("Digit0"), None);
        assert_eq!(InputSymbol::from_key_name("KeyAB"), None);
        assert_eq!(InputSymbol::from_key_name("ShiftLeft"), None);
    }
}
