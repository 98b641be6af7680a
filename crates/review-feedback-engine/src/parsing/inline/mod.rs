//! # Inline Transformation
//!
//! Rewrites inline spans inside prose blocks (headings, paragraphs, list
//! items) into markup. Runs after block construction is complete.
//!
//! ## Passes
//!
//! Two independent regex passes, always in this order:
//!
//! 1. **Code spans**: `` `text` `` → `<code>text</code>`
//! 2. **Strong**: `**text**` → `<strong>text</strong>`
//!
//! ## Trust
//!
//! Text outside the spans is not escaped. The output is meant for direct
//! insertion into a render tree, which is only safe for trusted input. See
//! [`crate::parsing::render_untrusted`] for the escaping variant.
//!
//! ## Modules
//!
//! - **`kinds`**: Span types owning delimiters, patterns and tags
//! - **`transform`**: The passes and `transform_block`

pub mod kinds;
pub mod transform;

pub use transform::{transform_block, transform_code_spans, transform_inline, transform_strong};
