pub mod backends;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod preview;
pub mod scheme;

pub use backends::{render_editor_scheme, render_terminal_scheme};
pub use error::PaletteError;
