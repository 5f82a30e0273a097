pub mod legend;
pub mod table;

pub use legend::{PLACEHOLDER_GLYPH, radical, render_keys};
pub use table::{CodeTable, FALLBACK_LIMIT, TableError};
