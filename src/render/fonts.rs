//! Font file loading.
//!
//! The renderer always needs a font. When no custom font is configured the
//! tool probes a short list of well-known system locations.

use crate::error::CloudError;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Read font bytes from an explicit path.
pub fn load(path: &Path) -> Result<Vec<u8>, CloudError> {
    fs::read(path).map_err(|e| CloudError::resource(path, e))
}

/// First default font present on this system, if any.
pub fn find_default() -> Option<PathBuf> {
    DEFAULT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Load a default font, erroring when none of the known locations exist.
pub fn load_default() -> Result<Vec<u8>, CloudError> {
    match find_default() {
        Some(path) => {
            tracing::debug!("Using default font {}", path.display());
            load(&path)
        }
        None => Err(CloudError::Render(
            "No default font found on this system; set use_custom_font and font_path".to_string(),
        )),
    }
}
