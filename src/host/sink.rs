use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{foundation::error::RingclockResult, render::FrameRGBA};

/// Receives every rendered frame; only the latest one matters.
pub trait FrameSink {
    fn publish(&mut self, frame: &FrameRGBA) -> RingclockResult<()>;
}

/// Writes each frame as a PNG and renames it over `path`, so readers never see a
/// half-written image.
#[derive(Clone, Debug)]
pub struct PngFrameSink {
    path: PathBuf,
    tmp_path: PathBuf,
}

impl PngFrameSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        Self {
            path,
            tmp_path: PathBuf::from(tmp),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSink for PngFrameSink {
    fn publish(&mut self, frame: &FrameRGBA) -> RingclockResult<()> {
        write_png(&self.tmp_path, frame)?;
        std::fs::rename(&self.tmp_path, &self.path).with_context(|| {
            format!(
                "rename '{}' to '{}'",
                self.tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

/// Encode `frame` as straight-alpha RGBA8 PNG, creating parent directories as needed.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> RingclockResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/host/sink.rs"]
mod tests;
