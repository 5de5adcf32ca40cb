//! Host integration contract
//!
//! The bundler is an external collaborator. These traits are the narrow
//! surface the plugin needs from it: a post-emission hook to register on and
//! a compilation context exposing the output directory.

use std::path::Path;

use anyhow::Result;

/// Context for one build's compilation, available to hooks.
pub trait Compilation {
    /// Directory the bundler wrote its output files to.
    fn output_path(&self) -> &Path;
}

/// A callback fired after output files land on disk.
pub trait AfterEmitHook {
    /// Invoked by the host exactly once per build's post-emission phase.
    ///
    /// Returning `Ok(())` signals completion so the build pipeline may
    /// proceed; an error halts the build with the underlying message.
    fn run(&mut self, compilation: &dyn Compilation) -> Result<()>;
}

/// The bundler-side registration point.
pub trait Compiler {
    /// Registers a hook on the post-emission phase of every build.
    fn on_after_emit(&mut self, hook: Box<dyn AfterEmitHook>);
}
