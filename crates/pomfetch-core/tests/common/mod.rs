#![allow(dead_code)]

pub mod mirror_server;

use pomfetch_core::fetch::{FailureReporter, FetchError};
use std::sync::Mutex;

/// Records every absorbed mirror failure as `(repo, message)`.
#[derive(Default)]
pub struct CollectReporter(Mutex<Vec<(String, String)>>);

impl CollectReporter {
    pub fn repos(&self) -> Vec<String> {
        self.0.lock().unwrap().iter().map(|(r, _)| r.clone()).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().iter().map(|(_, m)| m.clone()).collect()
    }
}

impl FailureReporter for CollectReporter {
    fn report(&self, repo: &str, error: &FetchError) {
        self.0
            .lock()
            .unwrap()
            .push((repo.to_string(), format!("Failed to fetch: {}", error)));
    }
}
