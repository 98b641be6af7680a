//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    by its leading syntax (fence, heading, list item, blank, plain)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` state machine groups
//!    contiguous list lines and fenced code lines and emits finished `Block`s
//!
//! ## Modules
//!
//! - **`types`**: The `Block` enum handed to presentation layers
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, ListItem)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Output order follows source line order
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A fence still open at end of input is dropped, not flushed

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::Block;
