use log::debug;

use super::error::DecodeError;
use super::layout;
use super::reader::{HeaderReader, PixelReader};
use crate::icon::{Icon, PixelGrid};

/// Pixel-data layout selected by the header version.
///
/// - `V1`: flat row-major layout.
/// - `V2`: banded layout. Columns are grouped into bands of
///   [`layout::BAND_WIDTH`]; each band is read for all rows before the next
///   band starts. The last band may be narrower than eight columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    V1,
    V2,
}

impl DecodeStrategy {
    pub fn from_version(version: u32) -> Result<Self, DecodeError> {
        match version {
            layout::FLAT_VERSION => Ok(Self::V1),
            layout::BANDED_VERSION => Ok(Self::V2),
            _ => Err(DecodeError::UnknownVersion { version }),
        }
    }

    pub fn version(self) -> u32 {
        match self {
            Self::V1 => layout::FLAT_VERSION,
            Self::V2 => layout::BANDED_VERSION,
        }
    }

    /// Decode `width * height` characters of `data` into a grid.
    ///
    /// # Errors
    /// Returns `InvalidDimensions` or `DimensionsTooLarge` for unusable
    /// dimensions and `InsufficientData` when `data` is too short.
    pub fn decode_pixels(
        self,
        width: usize,
        height: usize,
        data: &str,
    ) -> Result<PixelGrid, DecodeError> {
        let needed = pixel_count(width, height)?;
        let mut reader = PixelReader::new(data);
        reader.require_len(needed)?;

        let cells = match self {
            Self::V1 => decode_flat(width, height, &mut reader)?,
            Self::V2 => decode_banded(width, height, &mut reader)?,
        };

        let surplus = reader.remaining();
        if surplus > 0 {
            debug!(
                "ignoring {surplus} surplus pixel characters after {}",
                reader.consumed()
            );
        }
        Ok(PixelGrid::from_cells(width, height, cells))
    }
}

/// Decode a complete SimpleIcon text.
///
/// Leading and trailing whitespace of the whole text is trimmed once;
/// individual fields are used as-is.
///
/// # Examples
/// ```
/// use simpleicon_core::decode;
///
/// let icon = decode("bar;;2;;3x1;;101\n")?;
/// assert_eq!(icon.file_version(), 2);
/// assert_eq!(icon.pixels().rows().next(), Some(&[1, 0, 1][..]));
/// # Ok::<(), simpleicon_core::DecodeError>(())
/// ```
///
/// # Errors
/// Returns the first `DecodeError` found; no partial icon is produced.
pub fn decode(raw_text: &str) -> Result<Icon, DecodeError> {
    let text = raw_text.trim();
    if text.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let header = HeaderReader::split(text)?;
    let name = header.read_name()?;
    let version = header.read_version()?;
    let (width, height) = header.read_size()?;
    let strategy = DecodeStrategy::from_version(version)?;
    debug!("decoding icon '{name}' v{version} {width}x{height} as {strategy:?}");

    let pixels = strategy.decode_pixels(width, height, header.pixel_data())?;
    Ok(Icon::new(name.to_string(), version, pixels))
}

fn pixel_count(width: usize, height: usize) -> Result<usize, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(DecodeError::DimensionsTooLarge { width, height })
}

fn decode_flat(
    width: usize,
    height: usize,
    reader: &mut PixelReader<'_>,
) -> Result<Vec<u8>, DecodeError> {
    let mut cells = Vec::with_capacity(width * height);
    for _ in 0..width * height {
        cells.push(reader.next_bit()?);
    }
    Ok(cells)
}

fn decode_banded(
    width: usize,
    height: usize,
    reader: &mut PixelReader<'_>,
) -> Result<Vec<u8>, DecodeError> {
    let mut cells = vec![0u8; width * height];
    for band_start in (0..width).step_by(layout::BAND_WIDTH) {
        let band_end = (band_start + layout::BAND_WIDTH).min(width);
        for row in 0..height {
            for col in band_start..band_end {
                cells[row * width + col] = reader.next_bit()?;
            }
        }
    }
    Ok(cells)
}
