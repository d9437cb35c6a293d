use std::fmt::Display;

use fwdash_types::record::FirmwareRecord;

/// Records held by the dashboard and the progress of loading them.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadState {
    records: Vec<FirmwareRecord>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

/// Identifies the fetch whose result may be applied.
///
/// Obtained from [`LoadState::begin_fetch`], invalidated by [`LoadState::retire`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Discarded,
}

impl LoadState {
    pub fn ready(records: Vec<FirmwareRecord>) -> Self {
        Self {
            records,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    /// Records usable, but something went wrong getting the intended ones.
    pub fn degraded(records: Vec<FirmwareRecord>, error: impl Display) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::ready(records)
        }
    }

    pub fn records(&self) -> &[FirmwareRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        FetchTicket(self.generation)
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// On success the record list is replaced and the error cleared. On failure the
    /// current list stays and the error is set. A retired ticket changes nothing.
    pub fn complete_fetch<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<FirmwareRecord>, E>,
    ) -> Completion {
        if ticket.0 != self.generation {
            return Completion::Discarded;
        }

        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(error) => {
                self.error = Some(error.to_string());
            }
        }
        self.loading = false;
        Completion::Applied
    }

    /// Invalidates every outstanding ticket.
    pub fn retire(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.loading = false;
    }
}
