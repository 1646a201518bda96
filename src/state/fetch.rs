//! Page-local fetch state with stale-response suppression.
//!
//! DESIGN
//! ======
//! Every fetch takes a ticket from `begin`. Only the newest ticket may
//! `apply` its result, so a slow response for page 1 cannot overwrite page 2
//! after the user has moved on.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::util::task::spawn_task;

#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
    seq: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None, seq: 0 }
    }
}

impl<T> FetchState<T> {
    /// Start a fetch and return its ticket. Earlier tickets become stale.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    /// Store `result` if `seq` is still the newest ticket. Returns whether it was applied.
    pub fn apply(&mut self, seq: u64, result: Result<T, ApiError>) -> bool {
        if seq != self.seq {
            log::debug!("dropping stale response #{seq} (latest #{})", self.seq);
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                self.data = None;
                self.error = Some(err);
            }
        }
        true
    }

    #[must_use]
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.seq
    }
}

/// Begin a fetch on `state` and apply `fut`'s result when it lands, unless a
/// newer fetch started in the meantime.
pub fn load_into<T, F>(state: RwSignal<FetchState<T>>, fut: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    let Some(seq) = state.try_update(FetchState::begin) else {
        return;
    };
    spawn_task(async move {
        let result = fut.await;
        state.update(|s| {
            s.apply(seq, result);
        });
    });
}
