//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and the markup
//! they are rewritten into.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` `text` `` becomes `<code>text</code>`
//! - **`Strong`**: `**text**` becomes `<strong>text</strong>`
//!
//! The transformer compiles `PATTERN` and emits the tags; presentation layers
//! split on the same tags instead of repeating them.

pub mod code_span;
pub mod strong;

pub use code_span::CodeSpan;
pub use strong::Strong;
