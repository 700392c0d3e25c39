use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

use anyhow::Context as _;

use crate::compose::composer::{Avatar, AvatarComposer, ColorOverrides};
use crate::config::AvatarConfig;
use crate::encode::png::ImageEncoder;
use crate::foundation::error::AvatarResult;
use crate::render::backend::TextRenderer;

/// Encode `avatar` and write it to `path`, creating parent directories as needed.
pub fn write_avatar(
    avatar: &Avatar,
    path: impl AsRef<Path>,
    encoder: &dyn ImageEncoder,
) -> AvatarResult<()> {
    let path = path.as_ref();
    let bytes = encoder.encode(&avatar.image)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let file = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    let mut out = BufWriter::new(file);
    out.write_all(&bytes)?;
    out.flush()?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "avatar written");
    Ok(())
}

impl<R: TextRenderer> AvatarComposer<R> {
    /// Compose `raw` and write it to `path` with `encoder`.
    pub fn to_disk(
        &self,
        raw: &str,
        overrides: &ColorOverrides,
        cfg: &AvatarConfig,
        path: impl AsRef<Path>,
        encoder: &dyn ImageEncoder,
    ) -> AvatarResult<Avatar> {
        let avatar = self.compose(raw, overrides, cfg)?;
        write_avatar(&avatar, path, encoder)?;
        Ok(avatar)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/disk.rs"]
mod tests;
