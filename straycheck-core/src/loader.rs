//! Forest document loading and discovery.
//!
//! A frontend serializes its parse results as a JSON *forest*: one or
//! more scopes (packages), each carrying its compilation units and,
//! when the frontend ran type resolution, a [`ResolutionTable`]. The
//! loader reads a single document or discovers `*.json` documents under
//! a directory, pruning VCS/build directories and loading files in
//! parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{StraycheckError, StraycheckResult};
use crate::oracle::{ResolutionTable, ResolvedOracle};
use crate::syntax::SourceUnit;

/// Directories to exclude from forest discovery.
const EXCLUDED_DIRS: &[&str] = &[".git", "target", "node_modules"];

/// One analyzed scope: a package's worth of compilation units plus its
/// optional resolution results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopeForest {
    /// Scope (package) name, used in logs and reports.
    pub name: String,
    pub units: Vec<SourceUnit>,
    #[serde(default)]
    pub resolution: Option<ResolutionTable>,
}

impl ScopeForest {
    /// Builds the oracle for this scope, when resolution results were
    /// shipped with it.
    pub fn resolved_oracle(&self) -> Option<ResolvedOracle> {
        self.resolution
            .as_ref()
            .map(|table| ResolvedOracle::from_table(table.clone()))
    }
}

/// A full forest document as produced by a frontend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyntaxForest {
    pub scopes: Vec<ScopeForest>,
}

/// Loads one forest document.
pub fn load_forest(path: &Path) -> StraycheckResult<SyntaxForest> {
    let content = fs::read_to_string(path).map_err(|e| StraycheckError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| StraycheckError::decode(path, e.to_string()))
}

#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

/// Gathers all `*.json` forest files under the root, recursively.
/// Excluded directories are pruned before their subtrees are walked;
/// results are sorted for deterministic processing order.
pub fn gather_forest_files(root: &Path) -> StraycheckResult<Vec<PathBuf>> {
    let excludes: HashSet<&str> = EXCLUDED_DIRS.iter().copied().collect();

    let mut files = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, &excludes))
        .par_bridge()
        .filter_map(|entry| match entry {
            Ok(e) => {
                let path = e.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                    Some(Ok(path.to_path_buf()))
                } else {
                    None
                }
            }
            Err(e) => {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                Some(Err(StraycheckError::Io {
                    path,
                    message: e.to_string(),
                    source: e.into_io_error(),
                }))
            }
        })
        .collect::<StraycheckResult<Vec<_>>>()?;
    files.sort();
    Ok(files)
}

/// Discovers and loads every forest document under a directory, in
/// parallel.
pub fn load_forest_dir(root: &Path) -> StraycheckResult<Vec<SyntaxForest>> {
    let files = gather_forest_files(root)?;
    files
        .par_iter()
        .map(|path| load_forest(path))
        .collect::<StraycheckResult<Vec<_>>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::TypeDescriptor;
    use crate::syntax::{NodeId, SymbolId};
    use crate::testutil::{binding, unit_in, value_decl};
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_dir() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir()
            .join("straycheck_tests")
            .join(format!("{}_{}", timestamp, id));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample_forest() -> SyntaxForest {
        SyntaxForest {
            scopes: vec![ScopeForest {
                name: "pkg".to_string(),
                units: vec![unit_in(
                    "pkg/a.src",
                    vec![value_decl(vec![binding(1, "x", Some(1), 1)], vec![], 1)],
                )],
                resolution: Some(ResolutionTable {
                    types: vec![(NodeId(1), TypeDescriptor::named("T"))],
                    declarations: vec![(NodeId(1), SymbolId(1))],
                }),
            }],
        }
    }

    #[test]
    fn test_load_forest_file() {
        let dir = temp_dir();
        let path = dir.join("forest.json");
        fs::write(&path, serde_json::to_string(&sample_forest()).unwrap()).unwrap();

        let forest = load_forest(&path).unwrap();
        assert_eq!(forest.scopes.len(), 1);
        assert_eq!(forest.scopes[0].name, "pkg");
        assert_eq!(forest.scopes[0].units.len(), 1);
        assert!(forest.scopes[0].resolved_oracle().is_some());
    }

    #[test]
    fn test_load_forest_rejects_malformed_document() {
        let dir = temp_dir();
        let path = dir.join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_forest(&path).unwrap_err();
        assert!(matches!(err, StraycheckError::Decode { .. }));
    }

    #[test]
    fn test_gather_skips_excluded_dirs_and_sorts() {
        let dir = temp_dir();
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::create_dir_all(dir.join("target")).unwrap();
        fs::write(dir.join("b.json"), "{}").unwrap();
        fs::write(dir.join("sub/a.json"), "{}").unwrap();
        fs::write(dir.join("target/skipped.json"), "{}").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();

        let files = gather_forest_files(&dir).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(&dir).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["b.json", "sub/a.json"]);
    }

    #[test]
    fn test_load_forest_dir() {
        let dir = temp_dir();
        fs::write(
            dir.join("one.json"),
            serde_json::to_string(&sample_forest()).unwrap(),
        )
        .unwrap();
        fs::write(
            dir.join("two.json"),
            serde_json::to_string(&SyntaxForest::default()).unwrap(),
        )
        .unwrap();

        let forests = load_forest_dir(&dir).unwrap();
        assert_eq!(forests.len(), 2);
    }
}
