use crate::controllers::ports::raster_presenter::RasterPresenterPort;
use crate::core::data::raster_buffer::{BYTES_PER_PIXEL, RasterBuffer};
use std::io::Write;

const UPPER_HALF_BLOCK: char = '▀';
const RESET: &str = "\x1b[0m";

/// Draws rasters as 24-bit ANSI colour text. Each character cell holds two
/// pixel rows: the upper half block takes the foreground colour of the top
/// pixel and the background colour of the one below it.
pub struct AnsiTerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> AnsiTerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RasterPresenterPort for AnsiTerminalPresenter<W> {
    fn present(&mut self, raster: &RasterBuffer) -> std::io::Result<()> {
        let mut rows = raster.rows();

        while let Some(top) = rows.next() {
            let bottom = rows.next();

            for (x, pixel) in top.chunks_exact(BYTES_PER_PIXEL).enumerate() {
                write!(self.out, "\x1b[38;2;{};{};{}m", pixel[0], pixel[1], pixel[2])?;

                match bottom {
                    Some(row) => {
                        let below = &row[x * BYTES_PER_PIXEL..(x + 1) * BYTES_PER_PIXEL];
                        write!(self.out, "\x1b[48;2;{};{};{}m", below[0], below[1], below[2])?
                    }
                    // odd height: leave the lower half of the last line blank
                    None => write!(self.out, "\x1b[49m")?,
                }

                write!(self.out, "{}", UPPER_HALF_BLOCK)?;
            }

            writeln!(self.out, "{}", RESET)?;
        }

        self.out.flush()
    }
}
