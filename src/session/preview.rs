use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Scoped preview of the current selection, tied 1:1 to the selected file.
/// The image bytes are materialized under the system temp directory so a
/// display layer can read them; the file is removed on release, and release
/// is guaranteed on drop (supersession or session teardown).
#[derive(Debug)]
pub struct PreviewHandle {
    id: Uuid,
    path: PathBuf,
    released: bool,
}

impl PreviewHandle {
    pub fn create(media_type: &str, bytes: &[u8]) -> Result<Self> {
        let id = Uuid::new_v4();
        let extension = extension_for(media_type);
        let path = std::env::temp_dir().join(format!("glypnet-preview-{id}.{extension}"));

        fs::write(&path, bytes)?;
        debug!("Created preview {} at {}", id, path.display());

        Ok(Self {
            id,
            path,
            released: false,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn release(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            warn!(
                "Failed to remove preview file {}: {}",
                self.path.display(),
                e
            );
        } else {
            debug!("Released preview {}", self.id);
        }
        self.released = true;
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.release();
    }
}

fn extension_for(media_type: &str) -> &str {
    match media_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/tiff" => "tif",
        "image/bmp" => "bmp",
        _ => "img",
    }
}
