//! textveil - post-emit HTML text obfuscation for bundlers
//!
//! After a bundler finishes writing its output, the plugin scans the output
//! directory for HTML files matching configurable glob patterns and rewrites
//! each one in place through an external text-obfuscating encoder. The crate
//! owns option validation, defaulting, and glob expansion; the encoding
//! algorithm and the bundler lifecycle are external collaborators behind the
//! [`HtmlEncoder`] and [`Compiler`]/[`Compilation`] traits.

pub mod bundler;
pub mod encoder;
pub mod glob;
pub mod options;
pub mod plugin;

pub use bundler::{AfterEmitHook, Compilation, Compiler};
pub use encoder::HtmlEncoder;
pub use options::{OptionsError, PluginOptions};
pub use plugin::TextveilPlugin;
