//! Tray icon loading.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use png::Decoder;
use tray_icon::Icon;

const ICON_FILENAME: &str = "tray-icon.png";

/// Load the tray icon from the bundled assets directory.
/// Returns an error when the file is absent or not decodable.
pub fn load_tray_icon() -> Result<Icon> {
    let path = resolve_icon_path()?;
    let data = fs::read(&path)
        .with_context(|| format!("failed to read tray icon {}", path.display()))?;
    let (rgba, width, height) = decode_png_rgba(&data)?;
    Icon::from_rgba(rgba, width, height).map_err(|e| anyhow!("failed to create icon: {e}"))
}

fn resolve_icon_path() -> Result<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(exe_path) = env::current_exe()
        && let Some(parent) = exe_path.parent()
    {
        candidates.push(parent.join("assets").join(ICON_FILENAME));
        // target/debug and target/release builds resolve back to the repo root
        if let Some(root) = parent.parent().and_then(|p| p.parent()) {
            candidates.push(root.join("assets").join(ICON_FILENAME));
        }
    }
    if let Ok(cwd) = env::current_dir() {
        candidates.push(cwd.join("assets").join(ICON_FILENAME));
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.exists())
        .ok_or_else(|| anyhow!("{ICON_FILENAME} not found in the bundled assets directory"))
}

fn decode_png_rgba(png_data: &[u8]) -> Result<(Vec<u8>, u32, u32)> {
    let decoder = Decoder::new(png_data);
    let mut reader = decoder
        .read_info()
        .map_err(|e| anyhow!("failed to read PNG header: {e}"))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| anyhow!("failed to decode PNG: {e}"))?;

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf[..info.buffer_size()].to_vec(),
        png::ColorType::Rgb => {
            let mut rgba = Vec::with_capacity((info.width * info.height * 4) as usize);
            for chunk in buf[..info.buffer_size()].chunks(3) {
                rgba.extend_from_slice(chunk);
                rgba.push(255);
            }
            rgba
        }
        other => return Err(anyhow!("unsupported PNG color type {other:?} for tray icon")),
    };

    Ok((rgba, info.width, info.height))
}
