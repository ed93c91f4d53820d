pub mod config;
pub mod content;
pub mod export;
pub mod models;
pub mod render;
pub mod styles;

pub use config::*;
pub use content::*;
pub use models::*;
pub use render::*;
