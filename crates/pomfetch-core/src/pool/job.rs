//! Fetch jobs, their one-shot result channel, and the tagged outcome.

use crossbeam_channel::{self as channel, Receiver, Sender, TryRecvError};

use crate::fetch::FetcherResult;
use crate::repository::normalize_base;

/// Terminal outcome of a job. Every submitted job yields exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A repository answered 200. The payload may legitimately be empty.
    Found(FetcherResult),
    /// The pinned repository missed, or every repository in the list did.
    NotFound,
}

impl FetchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, FetchOutcome::Found(_))
    }

    pub fn found(self) -> Option<FetcherResult> {
        match self {
            FetchOutcome::Found(r) => Some(r),
            FetchOutcome::NotFound => None,
        }
    }
}

/// Unit of work for the pool: an artifact-relative path, an optional pinned
/// repository, and the sender half of a private one-shot channel.
#[derive(Debug)]
pub struct FetcherJob {
    path: String,
    repo: Option<String>,
    result: Sender<FetchOutcome>,
}

impl FetcherJob {
    /// Creates a job and the handle its submitter waits on.
    ///
    /// An empty `repo` is the same as `None`: walk the whole repository list.
    pub fn new(path: impl Into<String>, repo: Option<&str>) -> (Self, JobHandle) {
        let path = path.into();
        // Capacity 1 so a worker never blocks delivering, even if nobody is waiting yet.
        let (tx, rx) = channel::bounded(1);
        let job = FetcherJob {
            path: path.clone(),
            repo: repo.map(normalize_base).filter(|r| !r.is_empty()),
            result: tx,
        };
        (job, JobHandle { path, result: rx })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Pinned repository, if any.
    pub fn repo(&self) -> Option<&str> {
        self.repo.as_deref()
    }

    /// Sends the outcome. Consumes the job so it can only happen once.
    pub(crate) fn deliver(self, outcome: FetchOutcome) {
        if self.result.send(outcome).is_err() {
            tracing::debug!("job handle for {} dropped before delivery", self.path);
        }
    }
}

/// Receiving end of a job's one-shot result channel.
#[derive(Debug)]
pub struct JobHandle {
    path: String,
    result: Receiver<FetchOutcome>,
}

impl JobHandle {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Blocks until the job's outcome arrives.
    ///
    /// If the job was dropped without delivering (a worker panicked mid-job),
    /// this returns `NotFound` rather than blocking forever.
    pub fn wait(self) -> FetchOutcome {
        match self.result.recv() {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::error!("fetch job for {} ended without a result", self.path);
                FetchOutcome::NotFound
            }
        }
    }

    /// Non-blocking check; `None` while the job is still queued or running.
    /// A job dropped without delivering reads as `NotFound`, same as [`wait`](Self::wait).
    pub fn try_wait(&self) -> Option<FetchOutcome> {
        match self.result.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(FetchOutcome::NotFound),
        }
    }
}
