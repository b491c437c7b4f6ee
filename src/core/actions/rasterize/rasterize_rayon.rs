use std::num::NonZeroUsize;
use std::panic::{AssertUnwindSafe, catch_unwind};

use log::debug;
use rayon::prelude::*;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::rasterize::ports::colour_map::ColourMap;
use crate::core::actions::rasterize::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::rasterize::render_band::{RenderedBand, assemble_bands, render_band};
use crate::core::actions::render_error::{RenderError, panic_message};
use crate::core::data::raster_buffer::RasterBuffer;
use crate::core::util::partition_columns::partition_columns;

/// Renders the same column bands as
/// [`rasterize_scoped_threads`](super::rasterize_scoped_threads::rasterize_scoped_threads)
/// on rayon's pool, abandoning the render once `cancel` reports true.
///
/// Output is byte-identical to the scoped-thread driver for the same
/// inputs. A panicking band surfaces as [`RenderError::WorkerPanicked`].
pub fn rasterize_rayon_cancelable<Alg, CMap, C>(
    width: u32,
    height: u32,
    workers: NonZeroUsize,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<RasterBuffer, RenderError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
    C: CancelToken,
{
    let bands = partition_columns(width, workers);

    debug!(
        "rasterizing {}x{} across {} rayon bands ({})",
        width,
        height,
        bands.len(),
        colour_map.display_name()
    );

    let rendered = bands
        .into_par_iter()
        .map(|columns| -> Result<RenderedBand, RenderError> {
            let band_columns = columns.clone();

            match catch_unwind(AssertUnwindSafe(|| {
                render_band(band_columns, height, algorithm, colour_map, cancel)
            })) {
                Ok(band) => Ok(band?),
                Err(payload) => Err(RenderError::WorkerPanicked {
                    columns,
                    message: panic_message(&*payload),
                }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(assemble_bands(width, height, rendered)?)
}
