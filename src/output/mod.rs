//! Output encoders (PNG, terminal).

mod png;
mod terminal;

pub use png::PngEncoder;
pub use terminal::TerminalEncoder;
