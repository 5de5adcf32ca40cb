//! Glob resolution over the output directory
//!
//! Patterns use standard glob semantics: `*` does not cross path separators,
//! `**` does, and brace alternation (`*.html{,.tmpl}`) is supported. Matching
//! is evaluated synchronously against the real filesystem, walking the base
//! directory in lexicographic order so results are deterministic.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use tracing::debug;
use walkdir::WalkDir;

fn compile(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .empty_alternates(true)
        .build()
        .with_context(|| format!("Invalid glob pattern: {pattern}"))?;

    Ok(glob.compile_matcher())
}

fn compile_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .empty_alternates(true)
            .build()
            .with_context(|| format!("Invalid ignore pattern: {pattern}"))?;
        builder.add(glob);
    }

    builder.build().context("Failed to compile ignore patterns")
}

/// Returns the absolute paths of all files under `base_dir` that match
/// `pattern` and no entry of `ignores`.
///
/// `base_dir` must be an existing directory. A pattern matching zero files
/// yields an empty result, not an error.
pub fn resolve_one(pattern: &str, base_dir: &Path, ignores: &[String]) -> Result<Vec<PathBuf>> {
    let matcher = compile(pattern)?;
    let ignore_set = compile_set(ignores)?;

    // Canonicalizing also makes every result absolute, even when the caller
    // configured a relative glob directory.
    let base_dir = base_dir.canonicalize().with_context(|| {
        format!("Glob directory is not accessible: {}", base_dir.display())
    })?;
    anyhow::ensure!(
        base_dir.is_dir(),
        "Glob directory is not a directory: {}",
        base_dir.display()
    );

    let mut matches = Vec::new();

    for entry in WalkDir::new(&base_dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk {}", base_dir.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(&base_dir) else {
            continue;
        };

        if matcher.is_match(relative) && !ignore_set.is_match(relative) {
            matches.push(entry.path().to_path_buf());
        }
    }

    debug!(pattern = %pattern, matched = matches.len(), "Resolved glob pattern");

    Ok(matches)
}

/// Resolves every pattern in order, concatenating results while dropping any
/// path already contributed by an earlier pattern.
///
/// Deduplication is cross-pattern only: each batch is filtered against the
/// paths accumulated from strictly earlier patterns, preserving first-seen
/// order. The walk itself never yields a file twice within a single pattern.
pub fn resolve_all(
    patterns: &[String],
    base_dir: &Path,
    ignores: &[String],
) -> Result<Vec<PathBuf>> {
    let mut resolved: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let matches = resolve_one(pattern, base_dir, ignores)?;

        let fresh: Vec<PathBuf> = matches
            .into_iter()
            .filter(|path| !resolved.contains(path))
            .collect();

        resolved.extend(fresh);
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, relative: &str) {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "<html></html>").unwrap();
    }

    #[test]
    fn matches_brace_alternation() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "index.html");
        touch(&dir, "nested/page.html.tmpl");
        touch(&dir, "app.js");

        let paths = resolve_one("**/*.html{,.tmpl}", dir.path(), &[]).unwrap();

        let names: Vec<_> = paths
            .iter()
            .map(|p| p.strip_prefix(dir.path().canonicalize().unwrap()).unwrap())
            .collect();
        assert_eq!(
            names,
            vec![Path::new("index.html"), Path::new("nested/page.html.tmpl")]
        );
        assert!(paths.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn single_star_does_not_cross_separators() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "top.html");
        touch(&dir, "nested/deep.html");

        let paths = resolve_one("*.html", dir.path(), &[]).unwrap();

        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("top.html"));
    }

    #[test]
    fn ignores_exclude_matches() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "keep.html");
        touch(&dir, "skip/ignored.html");

        let ignores = vec!["skip/**/*".to_string()];
        let paths = resolve_one("**/*.html", dir.path(), &ignores).unwrap();

        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("keep.html"));
    }

    #[test]
    fn ignore_patterns_support_empty_alternates() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "page.html");
        touch(&dir, "page.html.tmpl");
        touch(&dir, "keep.html");

        let ignores = vec!["page.html{,.tmpl}".to_string()];
        let paths = resolve_one("**/*.html{,.tmpl}", dir.path(), &ignores).unwrap();

        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("keep.html"));
    }

    #[test]
    fn overlapping_patterns_keep_first_occurrence() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "a.html");
        touch(&dir, "b.html");

        let patterns = vec!["b.html".to_string(), "**/*.html".to_string()];
        let paths = resolve_all(&patterns, dir.path(), &[]).unwrap();

        // b.html stays at the position of its first match
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("b.html"));
        assert!(paths[1].ends_with("a.html"));
    }

    #[test]
    fn zero_matches_is_empty_not_error() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "app.js");

        let paths = resolve_one("**/*.html", dir.path(), &[]).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn missing_base_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = resolve_one("**/*.html", &missing, &[]).unwrap_err();
        assert!(err.to_string().contains("not accessible"));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let dir = TempDir::new().unwrap();

        let err = resolve_one("a{b", dir.path(), &[]).unwrap_err();
        assert!(err.to_string().contains("Invalid glob pattern"));
    }

    #[test]
    fn results_are_in_walk_order() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "z.html");
        touch(&dir, "a.html");
        touch(&dir, "m/inner.html");

        let paths = resolve_one("**/*.html", dir.path(), &[]).unwrap();

        assert!(paths[0].ends_with("a.html"));
        assert!(paths[1].ends_with("m/inner.html"));
        assert!(paths[2].ends_with("z.html"));
    }
}
