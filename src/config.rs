use crate::dataset::DatasetError;
use std::env;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "DENTEX_DATA_DIR";
pub const ANNOTATION_FILE_ENV: &str = "DENTEX_ANNOTATION_FILE";

/// Annotation file of the quadrant/enumeration training split, relative to the data directory
pub const DEFAULT_ANNOTATION_FILE: &str = "quadrant_enumeration/train_quadrant_enumeration.json";

/// Where the DENTEX detection data lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DentexConfig {
    pub data_dir: PathBuf,
    pub annotation_file: PathBuf,
}

impl DentexConfig {
    /// Data directory is `$DENTEX_DATA_DIR`, or `$HOME/data/dentex/dentex_detection`.
    /// Annotation file is `$DENTEX_ANNOTATION_FILE` or the training split; relative paths are
    /// taken from the data directory.
    pub fn from_env() -> Result<DentexConfig, DatasetError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<DentexConfig, DatasetError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(
            lookup(DATA_DIR_ENV).map(PathBuf::from),
            lookup(ANNOTATION_FILE_ENV).map(PathBuf::from),
            lookup("HOME").map(PathBuf::from),
        )
    }

    /// Fills in whichever of `data_dir` and `annotation_file` is missing with its default.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        annotation_file: Option<PathBuf>,
        home: Option<PathBuf>,
    ) -> Result<DentexConfig, DatasetError> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => home
                .ok_or(DatasetError::MissingDataDir)?
                .join("data")
                .join("dentex")
                .join("dentex_detection"),
        };
        let annotation_file =
            annotation_file.unwrap_or_else(|| PathBuf::from(DEFAULT_ANNOTATION_FILE));
        Ok(Self::new(data_dir, annotation_file))
    }

    pub fn new<D, A>(data_dir: D, annotation_file: A) -> DentexConfig
    where
        D: Into<PathBuf>,
        A: AsRef<Path>,
    {
        let data_dir = data_dir.into();
        let annotation_file = data_dir.join(annotation_file);
        DentexConfig {
            data_dir,
            annotation_file,
        }
    }
}
