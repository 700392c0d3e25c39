use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::error::{AvatarError, AvatarResult};

/// Where the avatar font comes from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSource {
    /// TrueType/OpenType file read on every uncached render.
    Path(PathBuf),
    /// Font bytes already in memory.
    #[serde(skip)]
    Bytes(Arc<[u8]>),
}

impl FontSource {
    /// Font file at `path`.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// In-memory font bytes.
    pub fn bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Read the raw font bytes.
    pub fn read(&self) -> AvatarResult<Vec<u8>> {
        match self {
            Self::Path(p) => read_font_file(p),
            Self::Bytes(b) => Ok(b.to_vec()),
        }
    }
}

fn read_font_file(p: &Path) -> AvatarResult<Vec<u8>> {
    std::fs::read(p).map_err(|e| {
        AvatarError::font_load(format!("failed to read font '{}': {e}", p.display()))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
