use crate::controllers::interactive::events::render::RenderEvent;

/// Receives results from the interactive render worker thread.
///
/// Events arrive in increasing generation order. Superseded and cancelled
/// renders produce no event.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
