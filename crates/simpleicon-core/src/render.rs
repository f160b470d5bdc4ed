//! ASCII rendering of decoded icons.
//!
//! Output is one header line followed by one line per pixel row. Set pixels
//! render as `x`, clear pixels as a space; rows carry no trailing padding.

use std::io::{self, Write};

use crate::icon::Icon;

pub const SET_PIXEL: char = 'x';
pub const CLEAR_PIXEL: char = ' ';

/// Header line with name, dimensions and file version.
///
/// # Examples
/// ```
/// use simpleicon_core::{decode, render::header_line};
///
/// let icon = decode("sword;;2;;3x1;;010")?;
/// assert_eq!(header_line(&icon), "sword (3x1) version 2");
/// # Ok::<(), simpleicon_core::DecodeError>(())
/// ```
pub fn header_line(icon: &Icon) -> String {
    format!(
        "{} ({}x{}) version {}",
        icon.name(),
        icon.width(),
        icon.height(),
        icon.file_version()
    )
}

/// Pixel rows as strings of exactly `width` characters.
pub fn pixel_rows(icon: &Icon) -> Vec<String> {
    icon.pixels()
        .rows()
        .map(|row| {
            row.iter()
                .map(|&cell| if cell == 1 { SET_PIXEL } else { CLEAR_PIXEL })
                .collect()
        })
        .collect()
}

/// Header line followed by `height` pixel rows.
pub fn render_lines(icon: &Icon) -> Vec<String> {
    let mut lines = Vec::with_capacity(icon.height() + 1);
    lines.push(header_line(icon));
    lines.extend(pixel_rows(icon));
    lines
}

/// Write the rendered icon to `out`, one newline-terminated line at a time.
pub fn render<W: Write>(icon: &Icon, out: &mut W) -> io::Result<()> {
    for line in render_lines(icon) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{render, render_lines};
    use crate::decode;

    #[test]
    fn render_lines_have_icon_dimensions() {
        let icon = decode("wide;;2;;10x2;;11111111000000000110").unwrap();
        let lines = render_lines(&icon);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "wide (10x2) version 2");
        for row in &lines[1..] {
            assert_eq!(row.chars().count(), 10);
            assert!(row.chars().all(|c| c == 'x' || c == ' '));
        }
        assert_eq!(lines[1], "xxxxxxxx x");
        assert_eq!(lines[2], "        x ");
    }

    #[test]
    fn render_writes_newline_terminated_lines() {
        let icon = decode("dot;;1;;2x2;;1001").unwrap();
        let mut out = Vec::new();
        render(&icon, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "dot (2x2) version 1\nx \n x\n"
        );
    }
}
