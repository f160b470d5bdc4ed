pub const FIELD_DELIMITER: &str = ";;";
pub const SIZE_SEPARATOR: char = 'x';

pub const HEADER_FIELD_COUNT: usize = 4;
pub const NAME_FIELD: usize = 0;
pub const VERSION_FIELD: usize = 1;
pub const SIZE_FIELD: usize = 2;
pub const PIXEL_DATA_FIELD: usize = 3;

pub const FLAT_VERSION: u32 = 1;
pub const BANDED_VERSION: u32 = 2;

/// Columns per band in the version 2 layout.
pub const BAND_WIDTH: usize = 8;

/// The only character that decodes to a set pixel.
pub const PIXEL_SET: char = '1';
