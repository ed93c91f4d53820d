pub mod cli;
pub mod node;
pub mod style;

pub use cli::*;
pub use node::*;
pub use style::*;
