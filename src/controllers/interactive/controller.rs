use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render_failure::RenderFailure;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::{CancelToken, GenerationToken};
use crate::core::actions::render::{RenderRequest, render_cancelable};
use crate::core::actions::render_error::RenderError;
use crate::core::data::raster_buffer::RasterBuffer;
use log::{trace, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

type RenderFn = fn(&RenderRequest, &GenerationToken<'_>) -> Result<RasterBuffer, RenderError>;

struct Job {
    generation: u64,
    request: Arc<RenderRequest>,
}

/// Guarded by one mutex so the worker can never miss a submission or a
/// close between checking the inbox and waiting on the condvar.
#[derive(Default)]
struct Inbox {
    pending: Option<Job>,
    closed: bool,
}

struct Shared {
    latest_generation: AtomicU64,
    presented_generation: AtomicU64,
    inbox: Mutex<Inbox>,
    wake: Condvar,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    render: RenderFn,
}

impl Shared {
    fn inbox(&self) -> MutexGuard<'_, Inbox> {
        self.inbox.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Blocks until there is work, or returns `None` once closed.
    fn next_job(&self) -> Option<Job> {
        let mut inbox = self.inbox();

        loop {
            if inbox.closed {
                return None;
            }

            if let Some(job) = inbox.pending.take() {
                return Some(job);
            }

            inbox = self.wake.wait(inbox).unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn run(&self, job: Job) {
        let token = GenerationToken::new(&self.latest_generation, job.generation);

        let started = Instant::now();
        let result = (self.render)(&job.request, &token);
        let render_duration = started.elapsed();

        // superseded while rendering, or cancelled outright: nothing to show
        if token.is_cancelled() {
            trace!("dropping superseded generation {}", job.generation);
            return;
        }

        let event = match result {
            Ok(raster) => RenderEvent::Frame(FrameData {
                generation: job.generation,
                raster,
                render_duration,
            }),
            Err(RenderError::Cancelled(_)) => return,
            Err(err) => {
                warn!("render generation {} failed: {}", job.generation, err);
                RenderEvent::Error(RenderFailure {
                    generation: job.generation,
                    message: err.to_string(),
                })
            }
        };

        self.presenter_port.present(event);
        self.presented_generation.store(job.generation, Ordering::Release);
    }
}

/// Renders on a background thread, always working on the newest request.
pub struct InteractiveController {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        Self::with_renderer(presenter_port, |request, token| render_cancelable(request, token))
    }

    fn with_renderer(
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
        render: RenderFn,
    ) -> Self {
        let shared = Arc::new(Shared {
            latest_generation: AtomicU64::new(0),
            presented_generation: AtomicU64::new(0),
            inbox: Mutex::new(Inbox::default()),
            wake: Condvar::new(),
            presenter_port,
            render,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || {
            while let Some(job) = worker_shared.next_job() {
                worker_shared.run(job);
            }
            trace!("interactive render worker stopped");
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Makes `request` the newest work. A render still waiting is replaced
    /// and the one in progress is cancelled. Returns the new generation;
    /// after [`shutdown`](Self::shutdown) the request is ignored.
    pub fn submit_request(&self, request: Arc<RenderRequest>) -> u64 {
        let generation = {
            let mut inbox = self.shared.inbox();
            // numbered under the lock so pending work is always the newest
            let generation = self.shared.latest_generation.fetch_add(1, Ordering::AcqRel) + 1;

            if !inbox.closed {
                inbox.pending = Some(Job {
                    generation,
                    request,
                });
            }

            generation
        };

        trace!("submitted render generation {}", generation);
        self.shared.wake.notify_one();

        generation
    }

    /// Generation of the last frame or error handed to the presenter, or 0.
    #[must_use]
    pub fn last_presented_generation(&self) -> u64 {
        self.shared.presented_generation.load(Ordering::Acquire)
    }

    /// Cancels any render in progress and stops the worker. Idempotent.
    pub fn shutdown(&mut self) {
        {
            let mut inbox = self.shared.inbox();
            inbox.closed = true;
            inbox.pending = None;
            self.shared.latest_generation.fetch_add(1, Ordering::AcqRel);
        }

        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("interactive render worker panicked");
            }
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
