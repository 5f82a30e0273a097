//! Composition result and buffer patch protocol
//!
//! Every composer operation that changes visible state returns a
//! [`CompositionResult`]. The three fields exist so the host can replace
//! the speculative preview atomically: the previous preview may have a
//! different width than the new one (table entries vary in glyph count),
//! so "just the new text" is not enough to splice the buffer correctly.

/// The text delta produced by one composer operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionResult {
    /// The preview as it was before this operation (empty if idle before)
    pub composing_prev: String,
    /// The preview after this operation (empty if now idle or committed)
    pub composing: String,
    /// Finalized text to insert verbatim and leave untouched
    pub commit: String,
}

impl CompositionResult {
    pub(crate) fn new(
        composing_prev: impl Into<String>,
        composing: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            composing_prev: composing_prev.into(),
            composing: composing.into(),
            commit: commit.into(),
        }
    }
}

/// Apply a composition result to a host buffer.
///
/// Given the caret position `caret` (in characters) at the time of the
/// keystroke: the previous preview (`composing_prev` characters directly
/// before the caret) is removed, `composing + commit` is inserted in its
/// place, and the caret lands after the inserted text.
///
/// Returns the patched buffer and the new caret position.
pub fn apply_patch(text: &str, caret: usize, result: &CompositionResult) -> (String, usize) {
    let chars: Vec<char> = text.chars().collect();
    let caret = caret.min(chars.len());
    let prev_len = result.composing_prev.chars().count();
    let start = caret.saturating_sub(prev_len);

    let mut patched: String = chars[..start].iter().collect();
    patched.push_str(&result.composing);
    patched.push_str(&result.commit);
    let new_caret = start + result.composing.chars().count() + result.commit.chars().count();
    patched.extend(&chars[caret..]);

    (patched, new_caret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_insert_preview() {
        let r = CompositionResult::new("", "田", "");
        let (text, caret) = apply_patch("abc", 1, &r);
        assert_eq!(text, "a田bc");
        assert_eq!(caret, 2);
    }

    #[test]
    fn test_patch_replace_preview_of_different_width() {
        // Preview "明白" (2 chars) replaced by "明" (1 char)
        let r = CompositionResult::new("明白", "明", "");
        let (text, caret) = apply_patch("x明白y", 3, &r);
        assert_eq!(text, "x明y");
        assert_eq!(caret, 2);
    }

    #[test]
    fn test_patch_commit_clears_preview() {
        let r = CompositionResult::new("囼", "", "國");
        let (text, caret) = apply_patch("囼", 1, &r);
        assert_eq!(text, "國");
        assert_eq!(caret, 1);
    }

    #[test]
    fn test_patch_reset_erases_preview() {
        let r = CompositionResult::new("田", "", "");
        let (text, caret) = apply_patch("ab田cd", 4, &r);
        assert_eq!(text, "abcd");
        assert_eq!(caret, 2);
    }
}
