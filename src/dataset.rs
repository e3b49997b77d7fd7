use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod common_structs;
pub mod data_transformers;

/// Extensions the DENTEX x-rays and their derived crops come in
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "bmp"];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path:?} does not contain a valid annotations json")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no image record with file_name {file_name:?}")]
    ImageNotFound { file_name: String },
    #[error("no data directory configured and HOME is not set")]
    MissingDataDir,
}

/// Returns true if `path` is a regular file with an image extension whose header can be decoded.
pub fn is_image<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    let known_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false);
    if !known_extension || !path.is_file() {
        return false;
    }
    image::image_dimensions(path).is_ok()
}
