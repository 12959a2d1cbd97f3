// Modules
pub mod config;
pub mod error;
pub mod theme;

pub use config::Config;
pub use error::Error;
pub use theme::{ThemeMode, ThemeSetting};
