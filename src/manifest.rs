//! Prebuilt library bundle manifests
//!
//! Each bundle lives at `<root>/<lib>/<os>/<arch>/` and describes itself in a
//! `fltk2go.manifest.json` file. Discovery walks the tree under `root` and
//! groups the bundles by library name.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name every bundle manifest ends with
pub const MANIFEST_FILE_NAME: &str = "fltk2go.manifest.json";

/// Errors raised while discovering bundles
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse manifest {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid manifest path {0:?}: expected <lib>/<os>/<arch>/fltk2go.manifest.json")]
    InvalidPath(PathBuf),
}

/// Contents of one bundle manifest
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub module: String,
    pub fltk_version: String,
    pub target: Target,
    pub build: BuildInfo,
    pub artifacts: Artifacts,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Target {
    pub goos: String,
    /// amd64, arm64, universal, ...
    pub out_arch: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildInfo {
    pub toolchain: String,
    /// RFC 3339 build timestamp
    pub date: String,
    pub git_rev: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artifacts {
    /// Static library file names
    pub libs: Vec<String>,
    pub has_fl_config: bool,
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|source| ManifestError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// One prebuilt bundle of a library
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Library {
    pub os: String,
    pub arch: String,
    pub fltk_version: String,
    pub libraries: Vec<String>,
}

impl From<Manifest> for Library {
    fn from(manifest: Manifest) -> Self {
        Self {
            os: manifest.target.goos,
            arch: manifest.target.out_arch,
            fltk_version: manifest.fltk_version,
            libraries: manifest.artifacts.libs,
        }
    }
}

/// Discover every bundle under `root`, grouped by library name.
///
/// Each group is sorted by (os, arch). A missing root yields an empty map;
/// an unreadable or malformed manifest fails the whole call.
pub fn supported_libraries(root: &Path) -> Result<BTreeMap<String, Vec<Library>>, ManifestError> {
    let mut result: BTreeMap<String, Vec<Library>> = BTreeMap::new();
    if !root.is_dir() {
        crate::log!("Manifest root {:?} not found", root);
        return Ok(result);
    }

    let mut manifests = Vec::new();
    collect_manifests(root, &mut manifests)?;

    for path in manifests {
        let manifest = Manifest::load(&path)?;
        let lib_name = lib_name_from_path(root, &path)?;
        result
            .entry(lib_name)
            .or_default()
            .push(Library::from(manifest));
    }

    for libraries in result.values_mut() {
        libraries.sort_by(|a, b| (&a.os, &a.arch).cmp(&(&b.os, &b.arch)));
    }

    crate::log!("Found {} libraries under {:?}", result.len(), root);
    Ok(result)
}

/// Recursively collect manifest files, in a stable order
fn collect_manifests(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), ManifestError> {
    let mut entries = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_manifests(&path, out)?;
        } else if path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(MANIFEST_FILE_NAME))
        {
            out.push(path);
        }
    }
    Ok(())
}

/// Library name is the first directory below `root`
fn lib_name_from_path(root: &Path, path: &Path) -> Result<String, ManifestError> {
    let invalid = || ManifestError::InvalidPath(path.to_path_buf());
    let relative = path.strip_prefix(root).map_err(|_| invalid())?;

    let segments: Vec<&str> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => segment.to_str(),
            _ => None,
        })
        .collect();

    match segments.as_slice() {
        [lib, _, ..] => Ok((*lib).to_string()),
        _ => Err(invalid()),
    }
}
