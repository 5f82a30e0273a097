//! Tests for the composer

use std::sync::Arc;

use super::*;
use crate::core::patch::apply_patch;

mod progress;

/// The nested-enclosure progression from the bundled table plus a few
/// sequences exercising fallback and multi-glyph filtering.
fn test_table() -> Arc<CodeTable> {
    let entries = [
        ("w", vec!["田"]),
        ("wi", vec!["囜"]),
        ("wir", vec!["囼"]),
        ("wirm", vec!["國", "圀"]),
        ("a", vec!["日", "曰"]),
        ("ab", vec!["明", "明白"]),
        ("za", vec!["X"]),
        ("zb", vec!["Y"]),
    ];
    let table = CodeTable::from_entries(
        entries
            .into_iter()
            .map(|(k, cs)| (k, cs.into_iter().map(String::from).collect())),
    )
    .unwrap();
    Arc::new(table)
}

fn composer() -> Composer {
    Composer::new(test_table())
}

/// Type every character of `keys` through the composer.
fn type_all(engine: &mut Composer, keys: &str) {
    for ch in keys.chars() {
        engine.type_letter(ch).unwrap();
    }
}
