//! Plugin options: validation and defaulting
//!
//! Options are supplied once, when the plugin is constructed. The `encoder`
//! field is required and passed through verbatim to the encoder; the three
//! glob fields are optional and filled in from defaults (or from the build's
//! output directory) the first time a build cycle runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pattern applied when `glob_patterns` is unset.
pub const DEFAULT_GLOB_PATTERN: &str = "**/*.html{,.tmpl}";

/// Ignore pattern applied when `glob_ignores` is unset.
pub const DEFAULT_GLOB_IGNORE: &str = "node_modules/**/*";

#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("Plugin options must be provided")]
    MissingOptions,

    #[error("Encoder options (`encoder`) must be provided")]
    MissingEncoderOptions,
}

/// Options for the plugin and the encoder it drives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginOptions {
    /// Glob patterns to match against the output directory
    pub glob_patterns: Option<Vec<String>>,

    /// Directory the patterns are evaluated in (defaults to the bundler's
    /// output directory)
    pub glob_directory: Option<PathBuf>,

    /// Patterns whose matches are excluded from the result
    pub glob_ignores: Option<Vec<String>>,

    /// Opaque options for the encoder, passed through verbatim
    pub encoder: Option<serde_json::Value>,
}

/// Borrowed view of options after normalization, with every glob field
/// guaranteed present.
#[derive(Debug)]
pub struct ResolvedOptions<'a> {
    pub glob_directory: &'a Path,
    pub glob_patterns: &'a [String],
    pub glob_ignores: &'a [String],
}

impl PluginOptions {
    /// Validates a candidate options record at construction time.
    ///
    /// Exactly two failure kinds exist: no record at all, or a record
    /// without encoder options. Anything else is accepted as-is.
    pub fn validate(options: Option<Self>) -> Result<Self, OptionsError> {
        let options = options.ok_or(OptionsError::MissingOptions)?;

        if options.encoder.is_none() {
            return Err(OptionsError::MissingEncoderOptions);
        }

        Ok(options)
    }

    /// The encoder options value, or [`OptionsError::MissingEncoderOptions`]
    /// when the field is unset. Always succeeds on a validated record.
    pub fn encoder_options(&self) -> Result<&serde_json::Value, OptionsError> {
        self.encoder
            .as_ref()
            .ok_or(OptionsError::MissingEncoderOptions)
    }

    /// Fills any unset glob field in place: the directory from the build's
    /// output path, patterns and ignores from the static defaults.
    ///
    /// Fields the caller set are never overwritten, so running this twice
    /// with no intervening changes is a no-op the second time.
    pub fn normalize(&mut self, output_path: &Path) -> ResolvedOptions<'_> {
        let glob_directory = self
            .glob_directory
            .get_or_insert_with(|| output_path.to_path_buf());

        let glob_patterns = self
            .glob_patterns
            .get_or_insert_with(|| vec![DEFAULT_GLOB_PATTERN.to_string()]);

        let glob_ignores = self
            .glob_ignores
            .get_or_insert_with(|| vec![DEFAULT_GLOB_IGNORE.to_string()]);

        ResolvedOptions {
            glob_directory,
            glob_patterns,
            glob_ignores,
        }
    }
}
