//! External encoder contract
//!
//! The encoder owns all text substitution and font handling; this crate only
//! hands it files. Implementations are constructed once per plugin instance
//! and reused across every build cycle and every file.

use std::path::Path;

use anyhow::Result;

/// A single-file HTML text encoder.
pub trait HtmlEncoder: Sized {
    /// Builds an encoder from the opaque `encoder` options value, which is
    /// passed through from [`PluginOptions`](crate::PluginOptions) verbatim.
    fn from_options(options: &serde_json::Value) -> Result<Self>;

    /// Rewrites the text content of one HTML file, reading `source` and
    /// writing `destination` synchronously. The two may be the same path for
    /// an in-place rewrite. Errors on malformed input or missing resources;
    /// what counts as either is owned by the implementation.
    fn encode_html_file(&self, source: &Path, destination: &Path) -> Result<()>;
}
