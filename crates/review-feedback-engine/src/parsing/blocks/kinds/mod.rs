pub mod code_fence;
pub mod heading;
pub mod list_item;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::ListItem;
