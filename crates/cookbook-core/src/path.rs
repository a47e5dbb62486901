//! Mapping of source chapter paths onto published notebook paths.
//!
//! Book chapters live under a source root (`chapters/...`) while the
//! published notebooks live under a publish root (`notebooks/...`) without
//! the `.qmd` / `.ipynb` extension. Only files that actually exist are
//! rewritten; anything else (display captions, typos, generated pages) is
//! passed through untouched.

use std::path::{Component, Path, PathBuf};

/// Replace the first component equal to `old_root` with `new_root` and strip
/// the extension.
///
/// When `new_root` is `None` the path is returned as-is.
pub fn substitute_path(path: &Path, old_root: &str, new_root: Option<&str>) -> PathBuf {
    let Some(new_root) = new_root else {
        return path.to_path_buf();
    };

    let stripped = path.with_extension("");
    let mut replaced = false;
    stripped
        .components()
        .map(|component| match component {
            Component::Normal(name) if !replaced && name == old_root => {
                replaced = true;
                PathBuf::from(new_root)
            }
            other => PathBuf::from(other.as_os_str()),
        })
        .collect()
}

/// Existence check used to decide whether a path gets rewritten.
pub trait PathProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem, resolving relative paths against `base`.
#[derive(Debug, Clone)]
pub struct FsProbe {
    base: PathBuf,
}

impl FsProbe {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        self.base.join(path).exists()
    }
}

impl<F> PathProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Rewrites chapter paths from a source root to a publish root.
pub struct PathRewriter<P = FsProbe> {
    from: String,
    to: String,
    probe: P,
}

impl<P: PathProbe> PathRewriter<P> {
    pub fn new(from: impl Into<String>, to: impl Into<String>, probe: P) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            probe,
        }
    }

    /// The root segment that replaces the source root.
    pub fn publish_root(&self) -> &str {
        &self.to
    }

    /// Rewrite `path` if it exists, otherwise return it unchanged.
    ///
    /// The result always uses `/` as separator.
    pub fn rewrite(&self, path: &str) -> String {
        if !self.probe.exists(Path::new(path)) {
            tracing::debug!("{path} not found, leaving it unrewritten");
            return path.to_string();
        }
        let rewritten = substitute_path(Path::new(path), &self.from, Some(&self.to));
        to_slash(&rewritten)
    }
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
