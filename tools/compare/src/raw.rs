//! Raw planar RGB input

use anyhow::{Context, Result};
use planecodec::{planar_rgb_to_channels, Channels, CodecConfig};
use std::path::Path;

/// Load a raw file holding all red samples, then all green, then all blue
pub fn load_channels(path: &Path, config: &CodecConfig) -> Result<Channels> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let size = config.plane_size();

    let channels = planar_rgb_to_channels(&bytes, size, size).with_context(|| {
        format!("{} is not a {}x{} planar RGB file", path.display(), size, size)
    })?;

    log::info!("Loaded {} ({} bytes)", path.display(), bytes.len());
    Ok(channels)
}
