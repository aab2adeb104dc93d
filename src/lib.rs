pub mod clock;
pub mod config;
pub mod error;
pub mod log;
pub mod manifest;
pub mod paths;
pub mod scaffold;
pub mod verify;

// Re-export commonly used types
pub use config::ScaffoldConfig;
pub use error::FilesystemError;
pub use scaffold::{ProjectScaffolder, ScaffoldReport};
