//! Directory-backed resource table.
//!
//! Layout: `<root>/<type>/<name>.<kind>`. Each immediate subdirectory of the
//! root is a type and each regular file inside it a resource. Entries whose
//! names start with `.` are skipped at both levels.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::{LookupError, Resource, ResourceTable};

/// Failure to load a resource directory.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("resource directory `{}` does not exist", .0.display())]
    MissingRoot(PathBuf),
    #[error("resource path `{}` is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resources loaded from a directory tree at construction time.
#[derive(Clone, Debug, Default)]
pub struct DirectoryResources {
    root: PathBuf,
    types: FxHashMap<String, FxHashMap<String, Resource>>,
}

impl DirectoryResources {
    /// Scan `root` and index every resource below it.
    ///
    /// When two files in one type share a stem, the first in file-name
    /// order wins.
    #[tracing::instrument(level = "debug", skip_all, fields(root = %root.as_ref().display()))]
    pub fn load(root: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(ResourceError::MissingRoot(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(ResourceError::NotADirectory(root.to_path_buf()));
        }

        let mut types = FxHashMap::default();
        for type_dir in sorted_entries(root)? {
            if !type_dir.is_dir() {
                continue;
            }
            let Some(type_name) = visible_name(&type_dir) else {
                continue;
            };

            let mut resources = FxHashMap::default();
            for file in sorted_entries(&type_dir)? {
                if !file.is_file() || visible_name(&file).is_none() {
                    continue;
                }
                let Some(name) = file.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let kind = file
                    .extension()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default()
                    .to_owned();
                if resources.contains_key(name) {
                    warn!(type_name, name, path = %file.display(), "duplicate resource ignored");
                    continue;
                }
                resources.insert(
                    name.to_owned(),
                    Resource {
                        type_name: type_name.to_owned(),
                        name: name.to_owned(),
                        kind,
                        location: file.clone(),
                    },
                );
            }
            debug!(type_name, count = resources.len(), "loaded resource type");
            types.insert(type_name.to_owned(), resources);
        }

        Ok(DirectoryResources {
            root: root.to_path_buf(),
            types,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Type names, sorted.
    pub fn types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Total number of resources across all types.
    pub fn len(&self) -> usize {
        self.types.values().map(|r| r.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceTable for DirectoryResources {
    fn lookup(&self, type_name: &str, name: &str) -> Result<Resource, LookupError> {
        let resources = self
            .types
            .get(type_name)
            .ok_or_else(|| LookupError::UnknownType(type_name.to_owned()))?;
        resources
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::UnknownName {
                type_name: type_name.to_owned(),
                name: name.to_owned(),
            })
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, ResourceError> {
    let io_error = |source| ResourceError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        paths.push(entry.map_err(io_error)?.path());
    }
    paths.sort();
    Ok(paths)
}

/// The file name of `path` unless it is hidden or not UTF-8.
fn visible_name(path: &Path) -> Option<&str> {
    path.file_name()
        .and_then(|s| s.to_str())
        .filter(|name| !name.starts_with('.'))
}
