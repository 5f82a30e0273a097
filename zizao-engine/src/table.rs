use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

/// Errors that can occur while loading a code table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON parse error")]
    Json(#[from] serde_json::Error),

    #[error("invalid table key {0:?}: keys must be non-empty lowercase ASCII letters")]
    InvalidKey(String),
}

type Result<T> = std::result::Result<T, TableError>;

/// Number of fallback candidates offered for an unmatched key sequence.
pub const FALLBACK_LIMIT: usize = 10;

/// Bundled default code table (Cangjie-flavored) embedded from data/table.json.
const BUNDLED_TABLE_JSON: &str = include_str!("../data/table.json");

/// An immutable mapping from key sequences (lowercase Latin letters) to
/// priority-ordered candidate glyph strings.
///
/// Loaded once at startup and never mutated afterwards; lookups are total.
/// An absent key is a normal outcome, not an error.
pub struct CodeTable {
    entries: HashMap<String, Vec<String>>,
}

impl CodeTable {
    /// Build a CodeTable from (key, candidates) pairs.
    ///
    /// Candidate order is preserved per key; the first candidate is the
    /// default pick. Keys are validated to be lowercase ASCII letters.
    pub fn from_entries<K, I>(entries: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Vec<String>)>,
    {
        let mut map = HashMap::new();
        for (key, candidates) in entries {
            let key = key.into();
            validate_key(&key)?;
            map.insert(key, candidates);
        }
        debug!("code table built: {} entries", map.len());
        Ok(CodeTable { entries: map })
    }

    /// Parse a CodeTable from a JSON string.
    ///
    /// The JSON format is an object mapping key sequences to arrays of
    /// candidate strings: `{"w": ["田"], "wirm": ["國"]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a CodeTable from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let entries: HashMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        debug!("code table loaded from {:?}", path.as_ref());
        Self::from_entries(entries)
    }

    /// The bundled default table.
    pub fn bundled() -> Self {
        Self::from_json_str(BUNDLED_TABLE_JSON).expect("bundled table.json must be valid")
    }

    /// Number of key sequences in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the exact candidates for a key sequence.
    ///
    /// Returns the candidates in table order, or an empty slice when the
    /// sequence is absent.
    pub fn exact_match(&self, sequence: &str) -> &[String] {
        self.entries
            .get(sequence)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Search one-letter extensions of an unmatched key sequence.
    ///
    /// Tries `sequence + 'a'` through `sequence + 'z'` in alphabetical
    /// order, concatenating each extension's exact matches in table order,
    /// and stops once `limit` candidates have accumulated. This is a
    /// single-level lookahead: two-letter extensions are never consulted.
    ///
    /// Candidates wider than one display unit are skipped; only single
    /// glyphs make sense as forward-looking suggestions for an incomplete
    /// sequence.
    pub fn fallback_candidates(&self, sequence: &str, limit: usize) -> Vec<String> {
        let mut out = Vec::new();
        let mut extended = String::with_capacity(sequence.len() + 1);
        for letter in 'a'..='z' {
            if out.len() >= limit {
                break;
            }
            extended.clear();
            extended.push_str(sequence);
            extended.push(letter);
            for candidate in self.exact_match(&extended) {
                if candidate.chars().count() != 1 {
                    continue;
                }
                out.push(candidate.clone());
                if out.len() >= limit {
                    break;
                }
            }
        }
        out
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(TableError::InvalidKey(key.to_string()));
    }
    Ok(())
}
