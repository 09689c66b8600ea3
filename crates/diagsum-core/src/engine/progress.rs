use std::ops::Range;

/// Events emitted while a diagonal-sum run is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// Scanning is about to begin over `partitions` units of work.
    ScanStart { partitions: u64 },
    /// One partition of starting rows has been fully scanned.
    PartitionFinished { worker: usize, rows: Range<usize> },
    ScanFinish,
}

/// Callbacks may fire from worker threads, hence `Send + Sync`.
pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
