use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::rasterize::ports::colour_map::ColourMap;
use crate::core::actions::rasterize::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::raster_buffer::{BYTES_PER_PIXEL, RasterBuffer, RasterBufferError};
use std::ops::Range;

/// The pixels of one column band, stored row-major within the band.
#[derive(Debug, PartialEq)]
pub(crate) struct RenderedBand {
    pub columns: Range<u32>,
    pub data: Vec<u8>,
}

/// Renders every pixel in `columns` x `[0, height)`, polling `cancel` at the
/// start of each band row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels
/// within it.
pub(crate) fn render_band<Alg, CMap, C>(
    columns: Range<u32>,
    height: u32,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<RenderedBand, Cancelled>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
    C: CancelToken,
{
    let band_width = columns.len();
    let mut data = Vec::with_capacity(band_width * height as usize * BYTES_PER_PIXEL);

    for y in 0..height {
        for (i, x) in columns.clone().enumerate() {
            if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(Cancelled);
            }

            let Colour { r, g, b } = colour_map.map(algorithm.compute(Point {
                x: x as i32,
                y: y as i32,
            }));

            data.push(r);
            data.push(g);
            data.push(b);
        }
    }

    Ok(RenderedBand { columns, data })
}

/// Copies each band's rows into their column slots of a row-major raster.
pub(crate) fn assemble_bands(
    width: u32,
    height: u32,
    bands: Vec<RenderedBand>,
) -> Result<RasterBuffer, RasterBufferError> {
    let row_bytes = width as usize * BYTES_PER_PIXEL;
    let mut buffer = vec![0; row_bytes * height as usize];

    for band in bands {
        let band_row_bytes = band.columns.len() * BYTES_PER_PIXEL;
        let offset = band.columns.start as usize * BYTES_PER_PIXEL;

        if band_row_bytes == 0 {
            continue;
        }

        for (y, band_row) in band
            .data
            .chunks_exact(band_row_bytes)
            .take(height as usize)
            .enumerate()
        {
            let start = y * row_bytes + offset;
            buffer[start..start + band_row_bytes].copy_from_slice(band_row);
        }
    }

    RasterBuffer::from_data(width, height, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CoordinateAlgorithm;

    impl FractalAlgorithm for CoordinateAlgorithm {
        type Success = (i32, i32);

        fn compute(&self, pixel: Point) -> Self::Success {
            (pixel.x, pixel.y)
        }
    }

    struct CoordinateColours;

    impl ColourMap<(i32, i32)> for CoordinateColours {
        fn map(&self, (x, y): (i32, i32)) -> Colour {
            Colour {
                r: x as u8,
                g: y as u8,
                b: 7,
            }
        }

        fn display_name(&self) -> &str {
            "Coordinates"
        }
    }

    #[test]
    fn test_band_is_row_major_within_columns() {
        let band = render_band(2..4, 2, &CoordinateAlgorithm, &CoordinateColours, &NeverCancel)
            .unwrap();

        assert_eq!(band.columns, 2..4);
        assert_eq!(
            band.data,
            vec![
                2, 0, 7, 3, 0, 7, // row 0
                2, 1, 7, 3, 1, 7, // row 1
            ]
        );
    }

    #[test]
    fn test_assemble_places_bands_in_their_columns() {
        let bands = vec![
            render_band(0..1, 2, &CoordinateAlgorithm, &CoordinateColours, &NeverCancel).unwrap(),
            render_band(1..3, 2, &CoordinateAlgorithm, &CoordinateColours, &NeverCancel).unwrap(),
        ];
        let whole =
            render_band(0..3, 2, &CoordinateAlgorithm, &CoordinateColours, &NeverCancel).unwrap();

        let raster = assemble_bands(3, 2, bands).unwrap();

        assert_eq!(raster.buffer(), whole.data.as_slice());
        assert_eq!(raster.pixel(2, 1), Some(Colour { r: 2, g: 1, b: 7 }));
    }

    #[test]
    fn test_cancelled_before_start_returns_cancelled() {
        let result = render_band(0..4, 4, &CoordinateAlgorithm, &CoordinateColours, &|| true);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_polls_at_each_row_start() {
        let polls = AtomicUsize::new(0);
        let token = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };

        render_band(0..3, 5, &CoordinateAlgorithm, &CoordinateColours, &token).unwrap();

        assert_eq!(polls.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn test_polls_repeatedly_on_wide_rows() {
        let polls = AtomicUsize::new(0);
        let token = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };

        // 3000 columns: polls at 0, 1024 and 2048 on each of 2 rows
        render_band(0..3000, 2, &CoordinateAlgorithm, &CoordinateColours, &token).unwrap();

        assert_eq!(polls.load(Ordering::Relaxed), 6);
    }
}
