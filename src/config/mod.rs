mod loader;

pub use loader::{Config, LayoutConfig, ShellConfig};
