pub mod html;
pub mod tree;

pub use html::*;
pub use tree::*;
