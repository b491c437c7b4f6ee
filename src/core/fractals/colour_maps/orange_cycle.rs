use crate::core::actions::rasterize::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

const GREEN_STEP_PER_ITERATION: u64 = 7;
const GREEN_CYCLE: u64 = 255;

/// Interior points are black; escaped points run from yellow towards red,
/// wrapping every 255 / 7 iterations.
#[must_use]
pub fn colour_for(iterations: u32, max_iterations: u32) -> Colour {
    if iterations == max_iterations {
        return Colour::BLACK;
    }

    let offset = (iterations as u64 * GREEN_STEP_PER_ITERATION) % GREEN_CYCLE;

    Colour {
        r: 255,
        g: 255 - offset as u8,
        b: 0,
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OrangeCycle {
    max_iterations: u32,
}

impl OrangeCycle {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<u32> for OrangeCycle {
    fn map(&self, iterations: u32) -> Colour {
        colour_for(iterations, self.max_iterations)
    }

    fn display_name(&self) -> &str {
        "Orange Cycle"
    }
}
