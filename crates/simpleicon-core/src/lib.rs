//! SimpleIcon core library: decode `.txt` icon descriptions and render them
//! as ASCII art.
//!
//! An icon file is four `;;`-delimited fields:
//! `<name>;;<version>;;<width>x<height>;;<pixel-data>`. Version 1 stores pixels
//! row-major; version 2 stores them in 8-column bands, each band read for all
//! rows before the next. Decoding is pure and side-effect free; file access is
//! isolated in `source`, and the format conventions live in `format::layout`
//! and `format::reader` so the parser stays small.
//!
//! Invariants:
//! - A decoded `Icon` always has `height` rows of `width` cells, each 0 or 1.
//! - Decoding either succeeds completely or returns an error.
//! - Only `'1'` decodes to a set pixel; every other character decodes to 0.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use simpleicon_core::{load_icon_file, render};
//!
//! let icon = load_icon_file(Path::new("sword.txt"))?;
//! render::render(&icon, &mut std::io::stdout())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod format;
mod icon;
mod load;
pub mod render;
mod source;

pub use format::{DecodeError, DecodeStrategy, decode};
pub use icon::{Icon, PixelGrid};
pub use load::{LoadError, load_icon, load_icon_file};
pub use source::{FileSource, SourceError, TextSource};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Serializable summary of a decoded icon.
///
/// # Examples
/// ```
/// use simpleicon_core::{IconReport, decode};
///
/// let icon = decode("dot;;1;;2x2;;1001")?;
/// let report = IconReport::from_icon(&icon);
/// assert_eq!(report.report_version, simpleicon_core::REPORT_VERSION);
/// assert_eq!(report.set_pixels, 2);
/// assert_eq!(report.rows, vec!["x ".to_string(), " x".to_string()]);
/// # Ok::<(), simpleicon_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconReport {
    /// Report schema version (not the icon file version).
    pub report_version: u32,
    /// Icon name from the header.
    pub name: String,
    /// Icon file format version.
    pub file_version: u32,
    pub width: usize,
    pub height: usize,
    /// Number of pixels set to 1.
    pub set_pixels: usize,
    /// Rendered rows, `x` for set pixels and a space otherwise.
    pub rows: Vec<String>,
}

impl IconReport {
    pub fn from_icon(icon: &Icon) -> Self {
        Self {
            report_version: REPORT_VERSION,
            name: icon.name().to_string(),
            file_version: icon.file_version(),
            width: icon.width(),
            height: icon.height(),
            set_pixels: icon.pixels().count_set(),
            rows: render::pixel_rows(icon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_all_fields() {
        let icon = decode("bar;;2;;3x1;;101").unwrap();
        let report = IconReport::from_icon(&icon);

        let value = serde_json::to_value(&report).expect("report json");
        assert_eq!(value["report_version"], REPORT_VERSION);
        assert_eq!(value["name"], "bar");
        assert_eq!(value["file_version"], 2);
        assert_eq!(value["width"], 3);
        assert_eq!(value["height"], 1);
        assert_eq!(value["set_pixels"], 2);
        assert_eq!(value["rows"][0], "x x");

        let parsed: IconReport = serde_json::from_value(value).expect("report parse");
        assert_eq!(parsed, report);
    }
}
