use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn raster_size_in_bytes(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum RasterBufferError {
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for RasterBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "raster size {} does not match buffer size {}",
                    expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for RasterBufferError {}

pub type RasterData = Vec<u8>;

/// A finished render: `width * height` RGB triples, row-major, origin at
/// the top-left pixel. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    buffer: RasterData,
}

impl RasterBuffer {
    pub fn from_data(
        width: u32,
        height: u32,
        buffer: RasterData,
    ) -> Result<Self, RasterBufferError> {
        let expected_size = raster_size_in_bytes(width, height);

        if expected_size != buffer.len() {
            return Err(RasterBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `None` for coordinates outside the raster.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // an empty raster has no rows, but chunk size must stay non-zero
        let row_size = (self.width as usize * BYTES_PER_PIXEL).max(BYTES_PER_PIXEL);
        self.buffer.chunks_exact(row_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let raster = RasterBuffer::from_data(2, 2, data.clone()).unwrap();

        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.buffer(), data.as_slice());
        assert_eq!(raster.buffer_size(), 12);
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = RasterBuffer::from_data(2, 2, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            RasterBufferError::BoundsMismatch {
                expected_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let result = RasterBuffer::from_data(2, 2, vec![0; 24]);

        assert_eq!(
            result.unwrap_err(),
            RasterBufferError::BoundsMismatch {
                expected_size: 12,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_pixel_reads_row_major() {
        let data: Vec<u8> = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18];
        let raster = RasterBuffer::from_data(3, 2, data).unwrap();

        assert_eq!(raster.pixel(0, 0), Some(Colour { r: 1, g: 2, b: 3 }));
        assert_eq!(raster.pixel(2, 0), Some(Colour { r: 7, g: 8, b: 9 }));
        assert_eq!(raster.pixel(0, 1), Some(Colour { r: 10, g: 11, b: 12 }));
        assert_eq!(raster.pixel(2, 1), Some(Colour { r: 16, g: 17, b: 18 }));
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let raster = RasterBuffer::from_data(2, 2, vec![0; 12]).unwrap();

        assert_eq!(raster.pixel(2, 0), None);
        assert_eq!(raster.pixel(0, 2), None);
    }

    #[test]
    fn test_rows() {
        let data: Vec<u8> = (0..18).collect();
        let raster = RasterBuffer::from_data(3, 2, data).unwrap();
        let rows: Vec<&[u8]> = raster.rows().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[9, 10, 11, 12, 13, 14, 15, 16, 17]);
    }
}
