//! Plugin driver
//!
//! Construction validates the options and builds the encoder handle;
//! [`TextveilPlugin::apply`] registers the plugin on the compiler's
//! post-emission hook. Each build cycle then normalizes the options against
//! the compilation context, resolves the configured glob patterns, and
//! encodes every resolved file in place, sequentially. The first failing
//! step aborts the cycle; there is no per-file retry or partial-success
//! reporting.

use std::fmt;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::bundler::{AfterEmitHook, Compilation, Compiler};
use crate::encoder::HtmlEncoder;
use crate::glob;
use crate::options::PluginOptions;

/// Post-emit plugin that rewrites emitted HTML files through an encoder.
pub struct TextveilPlugin<E: HtmlEncoder> {
    options: PluginOptions,
    encoder: E,
}

impl<E: HtmlEncoder> TextveilPlugin<E> {
    /// Validates the options and constructs the encoder handle.
    ///
    /// Fails with [`OptionsError::MissingOptions`] when no options are given
    /// at all, with [`OptionsError::MissingEncoderOptions`] when the
    /// `encoder` field is unset, and with the encoder's own error when the
    /// handle cannot be built. No filesystem access happens here.
    pub fn new(options: Option<PluginOptions>) -> Result<Self> {
        let options = PluginOptions::validate(options)?;

        let encoder = E::from_options(options.encoder_options()?)
            .context("Failed to construct the encoder")?;

        Ok(Self { options, encoder })
    }

    /// Registers this plugin as a single after-emit hook on the compiler.
    pub fn apply<C>(self, compiler: &mut C)
    where
        C: Compiler + ?Sized,
        E: 'static,
    {
        compiler.on_after_emit(Box::new(self));
    }
}

impl<E: HtmlEncoder> fmt::Debug for TextveilPlugin<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextveilPlugin")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<E: HtmlEncoder> AfterEmitHook for TextveilPlugin<E> {
    fn run(&mut self, compilation: &dyn Compilation) -> Result<()> {
        let resolved = self.options.normalize(compilation.output_path());

        let files = glob::resolve_all(
            resolved.glob_patterns,
            resolved.glob_directory,
            resolved.glob_ignores,
        )?;

        info!(files = files.len(), "Encoding emitted HTML files");

        for path in &files {
            debug!(path = %path.display(), "Encoding file in place");
            self.encoder
                .encode_html_file(path, path)
                .with_context(|| format!("Failed to encode {}", path.display()))?;
        }

        Ok(())
    }
}
