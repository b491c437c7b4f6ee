use log::debug;

use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};

/// Where a drag-to-zoom gesture should take the view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomTransform {
    Target(Viewport),
    /// Render `halfway` first, then `target`. The two are independent
    /// requests and must be rendered in that order.
    Animated { halfway: Viewport, target: Viewport },
}

impl ZoomTransform {
    /// The viewport the gesture ends on.
    #[must_use]
    pub fn target(&self) -> Viewport {
        match self {
            Self::Target(target) | Self::Animated { target, .. } => *target,
        }
    }

    /// Viewports to render, in order.
    #[must_use]
    pub fn frames(&self) -> Vec<Viewport> {
        match self {
            Self::Target(target) => vec![*target],
            Self::Animated { halfway, target } => vec![*halfway, *target],
        }
    }
}

/// Builds the viewport selected by dragging from `drag_start` to
/// `drag_end` over `viewport`. Either corner may be the press point.
///
/// Returns `Ok(None)` for a selection with no width or no height, which
/// leaves the view unchanged.
pub fn compute_zoom_viewport(
    viewport: &Viewport,
    drag_start: Point,
    drag_end: Point,
    animated: bool,
) -> Result<Option<ZoomTransform>, ViewportError> {
    let top_left = Point {
        x: drag_start.x.min(drag_end.x),
        y: drag_start.y.min(drag_end.y),
    };
    let bottom_right = Point {
        x: drag_start.x.max(drag_end.x),
        y: drag_start.y.max(drag_end.y),
    };

    if top_left.x == bottom_right.x || top_left.y == bottom_right.y {
        debug!("ignoring empty zoom selection {:?}..{:?}", drag_start, drag_end);
        return Ok(None);
    }

    // screen y grows downwards, so the top edge is the upper imaginary bound
    let upper_left = viewport.pixel_to_complex(top_left);
    let lower_right = viewport.pixel_to_complex(bottom_right);

    let target = viewport.with_bounds(
        upper_left.real,
        lower_right.real,
        lower_right.imag,
        upper_left.imag,
    )?;

    debug!(
        "zoom {:?}..{:?} -> centre {} span {} x {}",
        top_left,
        bottom_right,
        target.center(),
        target.real_span(),
        target.imag_span()
    );

    if !animated {
        return Ok(Some(ZoomTransform::Target(target)));
    }

    let halfway = Viewport::from_bounds(
        viewport.bounds().lerp(&target.bounds(), 0.5),
        viewport.width(),
        viewport.height(),
    )?;

    Ok(Some(ZoomTransform::Animated { halfway, target }))
}
