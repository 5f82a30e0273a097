//! Ranked candidate list
//!
//! The full priority-ordered candidate list for the current key sequence.
//! Index 0 is the primary (the live preview); the rest are the alternates
//! offered for digit selection.

/// A priority-ordered list of candidate glyph strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedCandidates {
    items: Vec<String>,
}

impl RankedCandidates {
    /// Create a ranked list; the first item becomes the primary.
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// All candidates in rank order, primary first.
    pub fn all(&self) -> &[String] {
        &self.items
    }

    /// The primary (preview) text, empty when there are no candidates.
    pub fn primary(&self) -> &str {
        self.items.first().map(String::as_str).unwrap_or("")
    }

    /// The alternates, excluding the primary.
    pub fn alternates(&self) -> &[String] {
        if self.items.is_empty() {
            &[]
        } else {
            &self.items[1..]
        }
    }

    /// Select by digit key: `1` is the primary, `2` the first alternate.
    /// Out-of-range digits (including 0) select nothing.
    pub fn select_digit(&self, digit: u8) -> Option<&str> {
        if digit == 0 {
            return None;
        }
        self.items.get(digit as usize - 1).map(String::as_str)
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RankedCandidates {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_and_alternates() {
        let ranked: RankedCandidates = ["國", "圀", "囻"].into_iter().collect();
        assert_eq!(ranked.primary(), "國");
        assert_eq!(ranked.alternates(), ["圀", "囻"]);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_empty_list() {
        let ranked = RankedCandidates::default();
        assert_eq!(ranked.primary(), "");
        assert!(ranked.alternates().is_empty());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_select_digit() {
        let ranked: RankedCandidates = ["X", "Y", "Z"].into_iter().collect();
        assert_eq!(ranked.select_digit(1), Some("X"));
        assert_eq!(ranked.select_digit(2), Some("Y"));
        assert_eq!(ranked.select_digit(3), Some("Z"));
        assert_eq!(ranked.select_digit(4), None);
        assert_eq!(ranked.select_digit(0), None);
    }
}
