//! Radical legend for the progress display
//!
//! Maps each Latin letter to the radical glyph printed on its key, so the
//! user can see which structural keys they have pressed so far.

/// Glyph shown for a letter that has no legend entry.
pub const PLACEHOLDER_GLYPH: char = '□';

/// The fixed letter → radical legend, one entry per Latin letter.
const LEGEND: [(char, char); 26] = [
    ('a', '日'),
    ('b', '月'),
    ('c', '金'),
    ('d', '木'),
    ('e', '水'),
    ('f', '火'),
    ('g', '土'),
    ('h', '竹'),
    ('i', '戈'),
    ('j', '十'),
    ('k', '大'),
    ('l', '中'),
    ('m', '一'),
    ('n', '弓'),
    ('o', '人'),
    ('p', '心'),
    ('q', '手'),
    ('r', '口'),
    ('s', '尸'),
    ('t', '廿'),
    ('u', '山'),
    ('v', '女'),
    ('w', '田'),
    ('x', '難'),
    ('y', '卜'),
    ('z', '重'),
];

/// Look up the radical glyph for a letter, if it has one.
pub fn radical(letter: char) -> Option<char> {
    let letter = letter.to_ascii_lowercase();
    LEGEND
        .iter()
        .find(|(key, _)| *key == letter)
        .map(|(_, glyph)| *glyph)
}

/// Render a key sequence through the legend.
///
/// Letters without a legend entry render as [`PLACEHOLDER_GLYPH`] rather
/// than failing; the display must always track the typed sequence.
pub fn render_keys(sequence: &str) -> String {
    sequence
        .chars()
        .map(|ch| radical(ch).unwrap_or(PLACEHOLDER_GLYPH))
        .collect()
}
