pub mod html;
pub mod parsing;
pub mod project;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{render_html, to_html};
pub use parsing::{blocks::Block, parse_blocks, render, render_untrusted};
pub use project::{ProjectError, ProjectFile, UploadFilter, bundle, collect_project_files};
