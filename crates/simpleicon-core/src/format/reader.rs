use std::str::Chars;

use super::error::DecodeError;
use super::layout;

/// Map one pixel-data character to a bit.
///
/// Only `'1'` is a set pixel. Every other character, including `'0'`,
/// whitespace and garbage, decodes to 0.
///
/// # Examples
/// ```
/// use simpleicon_core::format::reader::pixel_bit;
///
/// assert_eq!(pixel_bit('1'), 1);
/// assert_eq!(pixel_bit('0'), 0);
/// assert_eq!(pixel_bit('#'), 0);
/// ```
pub fn pixel_bit(value: char) -> u8 {
    if value == layout::PIXEL_SET { 1 } else { 0 }
}

/// The four `;;`-delimited header fields of an icon file.
pub struct HeaderReader<'a> {
    fields: Vec<&'a str>,
}

impl<'a> HeaderReader<'a> {
    pub fn split(text: &'a str) -> Result<Self, DecodeError> {
        let fields: Vec<&'a str> = text.split(layout::FIELD_DELIMITER).collect();
        if fields.len() != layout::HEADER_FIELD_COUNT {
            return Err(DecodeError::MalformedHeader {
                fields: fields.len(),
            });
        }
        Ok(Self { fields })
    }

    pub fn read_name(&self) -> Result<&'a str, DecodeError> {
        let name = self.fields[layout::NAME_FIELD];
        if name.is_empty() {
            return Err(DecodeError::EmptyName);
        }
        Ok(name)
    }

    pub fn read_version(&self) -> Result<u32, DecodeError> {
        let value = self.fields[layout::VERSION_FIELD];
        value.parse::<u32>().map_err(|_| DecodeError::MalformedVersion {
            value: value.to_string(),
        })
    }

    /// Read `<width>x<height>`; fields are not trimmed.
    pub fn read_size(&self) -> Result<(usize, usize), DecodeError> {
        let value = self.fields[layout::SIZE_FIELD];
        let malformed = || DecodeError::MalformedSize {
            value: value.to_string(),
        };
        let mut parts = value.split(layout::SIZE_SEPARATOR);
        let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let width = width.parse::<usize>().map_err(|_| malformed())?;
        let height = height.parse::<usize>().map_err(|_| malformed())?;
        Ok((width, height))
    }

    pub fn pixel_data(&self) -> &'a str {
        self.fields[layout::PIXEL_DATA_FIELD]
    }
}

/// Forward-only cursor over the pixel-data field.
pub struct PixelReader<'a> {
    chars: Chars<'a>,
    consumed: usize,
}

impl<'a> PixelReader<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            chars: data.chars(),
            consumed: 0,
        }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        let actual = self.consumed + self.remaining();
        if actual < needed {
            return Err(DecodeError::InsufficientData { needed, actual });
        }
        Ok(())
    }

    pub fn next_bit(&mut self) -> Result<u8, DecodeError> {
        let value = self.chars.next().ok_or(DecodeError::InsufficientData {
            needed: self.consumed + 1,
            actual: self.consumed,
        })?;
        self.consumed += 1;
        Ok(pixel_bit(value))
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.chars.clone().count()
    }
}
