//! Parser for the bundled hot-spring table
//!
//! The source is a headerless, positional CSV: two metadata rows followed by
//! one spring per row, with the fields the explorer needs at fixed column
//! positions. Values are noisy ("104 F", "8.1 pH", "N/A"), so parsing is
//! deliberately tolerant at the field level and strict only about the
//! presence of coordinates and a name.
//!
//! ## Architecture
//!
//! - [`loader`] - file reading, header skipping and load statistics
//! - [`record_parser`] - projection of one row onto a [`SpringRecord`](crate::models::SpringRecord)
//! - [`field_parsers`] - numeric extraction and cell helpers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hotspring_explorer::parser::SpringLoader;
//!
//! # fn example() -> hotspring_explorer::Result<()> {
//! let result = SpringLoader::new("data.csv").load()?;
//! println!(
//!     "Loaded {} springs ({} rows dropped)",
//!     result.records.len(),
//!     result.stats.rows_dropped
//! );
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod loader;
pub mod record_parser;

#[cfg(test)]
mod tests;

pub use field_parsers::extract_number;
pub use loader::{LoadResult, SpringLoader, load_records};
pub use record_parser::parse_spring_record;
