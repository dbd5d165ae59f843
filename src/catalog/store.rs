use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::record::Record;
use crate::core::selection::Selection;
use crate::core::types::{Class, Group, Protocol, UnknownValue};
use crate::parsing::manifest::parse_manifest_file;

/// Environment variable that overrides the bundled manifest directory
pub const ROOT_ENV_VAR: &str = "LIVDET2013_ROOT";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    InvalidArgument(#[from] UnknownValue),

    #[error("Manifest not found: {}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::ResourceNotFound { path, source }
        } else {
            Self::Io { path, source }
        }
    }
}

/// The manifest for one protocol/group/class combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Manifest {
    pub protocol: Protocol,
    pub group: Group,
    pub class: Class,
}

impl Manifest {
    #[must_use]
    pub fn new(protocol: Protocol, group: Group, class: Class) -> Self {
        Self {
            protocol,
            group,
            class,
        }
    }

    /// `<root>/<protocol>/<group>/<class>.txt`
    #[must_use]
    pub fn path(&self, root: &Path) -> PathBuf {
        root.join(self.protocol.as_str())
            .join(self.group.as_str())
            .join(format!("{}.txt", self.class.as_str()))
    }
}

/// Resolve the default manifest directory.
///
/// Uses `LIVDET2013_ROOT` when set and non-empty, otherwise the `data/`
/// directory shipped with the package.
#[must_use]
pub fn default_root_location() -> PathBuf {
    match std::env::var_os(ROOT_ENV_VAR) {
        Some(root) if !root.is_empty() => PathBuf::from(root),
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join("data"),
    }
}

/// Accessor for the LivDet 2013 manifest files
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    /// Bind to the default root location. Performs no I/O.
    ///
    /// The manifests are distributed separately from this crate: queries only
    /// succeed once `LIVDET2013_ROOT` points at a manifest tree or the
    /// package's `data/` directory has been populated.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(default_root_location())
    }

    /// Bind to an explicit manifest directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        debug!("Catalog root: {}", root.display());
        Self { root }
    }

    #[must_use]
    pub fn root_location(&self) -> &Path {
        &self.root
    }

    /// Validate a query and list the manifests it covers, protocols outermost.
    ///
    /// Parameters are checked in protocol, group, class order; the first
    /// invalid value wins. Nothing is read from disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidArgument` for a value outside its enumeration.
    pub fn manifests(
        &self,
        protocols: impl Into<Selection>,
        groups: impl Into<Selection>,
        classes: impl Into<Selection>,
    ) -> Result<Vec<Manifest>, CatalogError> {
        let protocols = protocols.into().resolve::<Protocol>()?;
        let groups = groups.into().resolve::<Group>()?;
        let classes = classes.into().resolve::<Class>()?;

        let mut manifests = Vec::with_capacity(protocols.len() * groups.len() * classes.len());
        for &protocol in &protocols {
            for &group in &groups {
                for &class in &classes {
                    manifests.push(Manifest::new(protocol, group, class));
                }
            }
        }
        Ok(manifests)
    }

    /// Read every record of a single manifest
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ResourceNotFound` if the file is absent, or
    /// `CatalogError::Io` for any other read failure.
    pub fn read_manifest(&self, manifest: &Manifest) -> Result<Vec<Record>, CatalogError> {
        let path = manifest.path(&self.root);
        let records = parse_manifest_file(&path).map_err(|e| CatalogError::from_io(path.clone(), e))?;
        debug!("Read {} records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Return the records for every protocol x group x class combination.
    ///
    /// Empty selections mean the whole enumeration. Records keep manifest
    /// line order and duplicates across manifests are retained. The first
    /// failing manifest aborts the query.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidArgument` before any file is opened if a
    /// value is not recognised, or a manifest read error.
    pub fn query(
        &self,
        protocols: impl Into<Selection>,
        groups: impl Into<Selection>,
        classes: impl Into<Selection>,
    ) -> Result<Vec<Record>, CatalogError> {
        let mut records = Vec::new();
        for manifest in self.manifests(protocols, groups, classes)? {
            records.extend(self.read_manifest(&manifest)?);
        }
        Ok(records)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CLASSES, GROUPS, PROTOCOLS};
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(root: &Path, protocol: &str, group: &str, class: &str, content: &str) {
        let dir = root.join(protocol).join(group);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{class}.txt")), content).unwrap();
    }

    /// Full tree where every manifest holds one line naming itself
    fn full_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        for p in PROTOCOLS {
            for g in GROUPS {
                for c in CLASSES {
                    write_manifest(dir.path(), p, g, c, &format!("{p}/{g}/{c}\n"));
                }
            }
        }
        dir
    }

    fn ids(records: &[Record]) -> Vec<String> {
        records.iter().map(|r| r.identifier.clone()).collect()
    }

    #[test]
    fn test_only_not_found_is_resource_not_found() {
        let path = PathBuf::from("/db/Swipe/test/live.txt");
        let err = CatalogError::from_io(path.clone(), std::io::ErrorKind::NotFound.into());
        assert!(matches!(err, CatalogError::ResourceNotFound { .. }));

        for kind in [
            std::io::ErrorKind::PermissionDenied,
            std::io::ErrorKind::InvalidData,
            std::io::ErrorKind::UnexpectedEof,
        ] {
            let err = CatalogError::from_io(path.clone(), kind.into());
            assert!(matches!(err, CatalogError::Io { .. }), "{kind:?}");
        }
    }

    #[test]
    fn test_manifest_path() {
        let m = Manifest::new(Protocol::Biometrika, Group::Train, Class::Live);
        assert_eq!(
            m.path(Path::new("/db")),
            PathBuf::from("/db/Biometrika/train/live.txt")
        );
    }

    #[test]
    fn test_single_manifest_query() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), "Biometrika", "train", "live", "001_1\n\n002_1\n");

        let catalog = Catalog::with_root(dir.path());
        let records = catalog.query("Biometrika", "train", "live").unwrap();
        assert_eq!(ids(&records), ["001_1", "002_1"]);
    }

    #[test]
    fn test_iteration_order() {
        let dir = full_tree();
        let catalog = Catalog::with_root(dir.path());
        let records = catalog
            .query(["Swipe", "Italdata"], Selection::all(), "spoof")
            .unwrap();
        assert_eq!(
            ids(&records),
            [
                "Swipe/train/spoof",
                "Swipe/test/spoof",
                "Italdata/train/spoof",
                "Italdata/test/spoof",
            ]
        );
    }

    #[test]
    fn test_default_equals_full_enumeration() {
        let dir = full_tree();
        let catalog = Catalog::with_root(dir.path());
        let all = catalog
            .query(Selection::all(), Selection::all(), Selection::all())
            .unwrap();
        let explicit = catalog
            .query(PROTOCOLS, GROUPS, CLASSES)
            .unwrap();
        assert_eq!(all.len(), 16);
        assert_eq!(all, explicit);
    }

    #[test]
    fn test_invalid_group_without_io() {
        let catalog = Catalog::with_root("/nonexistent/livdet2013");
        let err = catalog.query(Selection::all(), "bogus", Selection::all()).unwrap_err();
        match err {
            CatalogError::InvalidArgument(e) => {
                assert_eq!(e.parameter, "group");
                assert_eq!(e.value, "bogus");
                assert!(e.to_string().contains("train, test"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_protocol_checked_before_group() {
        let catalog = Catalog::with_root("/nonexistent");
        let err = catalog.query("Nokia", "bogus", "fake").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(ref e) if e.parameter == "protocol"));

        let err = catalog.query("Swipe", "train", "fake").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(ref e) if e.parameter == "class"));
    }

    #[test]
    fn test_missing_manifest() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), "Swipe", "test", "live", "a\n");
        let catalog = Catalog::with_root(dir.path());

        let err = catalog.query("Swipe", "test", Selection::all()).unwrap_err();
        match err {
            CatalogError::ResourceNotFound { path, .. } => {
                assert!(path.ends_with("Swipe/test/spoof.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_manifests_no_io() {
        let catalog = Catalog::with_root("/nonexistent");
        let manifests = catalog.manifests("CrossMatch", Selection::all(), "live").unwrap();
        assert_eq!(
            manifests,
            vec![
                Manifest::new(Protocol::CrossMatch, Group::Train, Class::Live),
                Manifest::new(Protocol::CrossMatch, Group::Test, Class::Live),
            ]
        );
    }
}
