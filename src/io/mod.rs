/// Command-line parsing and the file-level conversion entry point
pub mod cli;
/// Transform constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image decoding and PNG export
pub mod image;
/// Logger initialisation for the binary
pub mod logging;
