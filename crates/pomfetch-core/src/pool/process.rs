//! The fallback algorithm run by each worker.

use std::sync::Arc;

use super::job::{FetchOutcome, FetcherJob};
use crate::fetch::{self, FailureReporter, Transport};
use crate::repository::RepositoryList;

/// State shared read-only by all workers.
pub(crate) struct Fetcher {
    pub(crate) repositories: RepositoryList,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) reporter: Arc<dyn FailureReporter>,
}

impl Fetcher {
    /// Runs the job to completion and delivers exactly one outcome.
    pub(crate) fn process(&self, job: FetcherJob) {
        let outcome = self.try_repos(job.path(), job.repo());
        job.deliver(outcome);
    }

    /// Pinned: one attempt, no fallback. Unpinned: walk the list in order and
    /// stop at the first hit.
    pub(crate) fn try_repos(&self, path: &str, pinned: Option<&str>) -> FetchOutcome {
        let found = match pinned {
            Some(repo) => self.try_repo(repo, path),
            None => self
                .repositories
                .iter()
                .find_map(|repo| self.try_repo(repo, path)),
        };
        match found {
            Some(result) => {
                tracing::debug!("fetched {} from {}", path, result.repo);
                FetchOutcome::Found(result)
            }
            None => {
                tracing::info!("no repository has {}", path);
                FetchOutcome::NotFound
            }
        }
    }

    fn try_repo(&self, repo: &str, path: &str) -> Option<fetch::FetcherResult> {
        fetch::try_repo(self.transport.as_ref(), self.reporter.as_ref(), repo, path)
    }
}
