//! Shared types for the skipta hyphenation tools.
//!
//! # Architecture
//!
//! - [`breaks`] -- Break points produced by hyphenators and gold-standard break sets
//! - [`hyphenator`] -- The `Hyphenator` trait, hyphenator configuration and naming
//! - [`text`] -- Whitespace-preserving hyphenation of free-form text

pub mod breaks;
pub mod hyphenator;
pub mod text;

pub use breaks::{Alternative, BreakPoint, BreakPositions};
pub use hyphenator::{Hyphenator, HyphenatorConfig, NamedHyphenator};
pub use text::{HyphenationMode, SOFT_HYPHEN, TextOptions, hyphenate_text};
