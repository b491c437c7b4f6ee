use std::num::NonZeroUsize;
use std::thread;

use log::{debug, trace};

use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::rasterize::ports::colour_map::ColourMap;
use crate::core::actions::rasterize::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::rasterize::render_band::{RenderedBand, assemble_bands, render_band};
use crate::core::actions::render_error::{RenderError, panic_message};
use crate::core::data::raster_buffer::RasterBuffer;
use crate::core::util::partition_columns::partition_columns;

/// Renders a `width` x `height` raster with one scoped thread per column
/// band. Every thread is joined before the raster is assembled; if any of
/// them panicked the whole render fails and no buffer is returned.
pub fn rasterize_scoped_threads<Alg, CMap>(
    width: u32,
    height: u32,
    workers: NonZeroUsize,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<RasterBuffer, RenderError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let bands = partition_columns(width, workers);

    debug!(
        "rasterizing {}x{} across {} column bands ({})",
        width,
        height,
        bands.len(),
        colour_map.display_name()
    );

    let joined: Vec<Result<RenderedBand, RenderError>> = thread::scope(|scope| {
        let handles: Vec<_> = bands
            .into_iter()
            .map(|columns| {
                let worker_columns = columns.clone();
                let handle = scope.spawn(move || {
                    trace!("band {:?} started", worker_columns);
                    render_band(worker_columns, height, algorithm, colour_map, &NeverCancel)
                });

                (columns, handle)
            })
            .collect();

        // join every handle before looking at results so no panicked
        // thread is left for the scope to re-raise
        handles
            .into_iter()
            .map(|(columns, handle)| match handle.join() {
                Ok(band) => band.map_err(RenderError::from),
                Err(payload) => Err(RenderError::WorkerPanicked {
                    columns,
                    message: panic_message(&*payload),
                }),
            })
            .collect()
    });

    let bands = joined.into_iter().collect::<Result<Vec<_>, _>>()?;

    Ok(assemble_bands(width, height, bands)?)
}
