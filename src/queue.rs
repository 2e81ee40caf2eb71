//! Request queue between transports and the animation loop
//!
//! Handlers on other tasks or in interrupts hand untrusted requests to a
//! [`RequestQueue`]. A request is validated before it takes a slot, so it is
//! either queued whole or rejected whole. Only the loop that owns the engine
//! takes requests out.

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::{CommandError, LightRequest, RawRequest};

/// Error returned when a request is not queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The request was malformed
    Invalid(CommandError),
    /// The queue is full; the validated request is handed back
    Full(LightRequest),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(error) => write!(f, "rejected request: {error}"),
            Self::Full(_) => f.write_str("request queue is full"),
        }
    }
}

impl core::error::Error for SubmitError {}

impl From<CommandError> for SubmitError {
    fn from(error: CommandError) -> Self {
        Self::Invalid(error)
    }
}

/// Bounded FIFO of validated requests, usable as a `static`
pub struct RequestQueue<const SIZE: usize> {
    requests: Mutex<RefCell<Deque<LightRequest, SIZE>>>,
}

impl<const SIZE: usize> RequestQueue<SIZE> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            requests: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for transports that feed the queue
    pub const fn submitter(&self) -> Submitter<'_, SIZE> {
        Submitter { queue: self }
    }

    /// Validate `raw` and queue it as one unit.
    ///
    /// Returns the request as it will be applied.
    pub fn submit(&self, raw: &RawRequest<'_>) -> Result<LightRequest, SubmitError> {
        let request = LightRequest::from_raw(raw).inspect_err(|_error| {
            #[cfg(feature = "esp32-log")]
            println!("[RequestQueue.submit] rejected request: {}", _error);
        })?;
        self.push(request)?;
        Ok(request)
    }

    /// Queue an already validated request
    pub fn push(&self, request: LightRequest) -> Result<(), SubmitError> {
        if request.is_empty() {
            return Ok(());
        }
        critical_section::with(|cs| {
            self.requests
                .borrow(cs)
                .borrow_mut()
                .push_back(request)
                .map_err(SubmitError::Full)
        })
    }

    /// Take the oldest queued request
    pub(crate) fn take(&self) -> Option<LightRequest> {
        critical_section::with(|cs| self.requests.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for RequestQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copyable feeding end of a [`RequestQueue`]
#[derive(Clone, Copy)]
pub struct Submitter<'a, const SIZE: usize> {
    queue: &'a RequestQueue<SIZE>,
}

impl<const SIZE: usize> Submitter<'_, SIZE> {
    /// See [`RequestQueue::submit`]
    pub fn submit(&self, raw: &RawRequest<'_>) -> Result<LightRequest, SubmitError> {
        self.queue.submit(raw)
    }

    /// See [`RequestQueue::push`]
    pub fn push(&self, request: LightRequest) -> Result<(), SubmitError> {
        self.queue.push(request)
    }
}
