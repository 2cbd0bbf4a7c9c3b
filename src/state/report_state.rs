//! ReportState - Loading Flag, Pending Run and Published Result

use crate::domain::report::ReportResult;
use crate::error::Result;
use crate::services::ReportTicket;
use crate::state::load_state::LoadState;

/// State for the report pipeline
#[derive(Debug, Clone, Default)]
pub struct ReportState {
    pending: Option<ReportTicket>,
    result: Option<ReportResult>,
    load_state: LoadState,
}

impl ReportState {
    /// True strictly while a report computation is in flight
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&ReportTicket> {
        self.pending.as_ref()
    }

    /// Latest published result
    pub fn result(&self) -> Option<&ReportResult> {
        self.result.as_ref()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Mark a run as in flight
    pub fn begin(&mut self, ticket: ReportTicket) {
        self.pending = Some(ticket);
        self.load_state = LoadState::Loading;
    }

    /// Apply a finished run. Returns false if the run is no longer pending.
    ///
    /// Success replaces the previous result; failure leaves no result.
    pub fn complete(&mut self, ticket: ReportTicket, result: Result<ReportResult>) -> bool {
        if self.pending != Some(ticket) {
            tracing::debug!("Dropping stale report {}", ticket.run_id);
            return false;
        }
        self.pending = None;

        match result {
            Ok(report) => {
                tracing::info!(
                    "Report {} published: {} products",
                    report.run_id,
                    report.source_products.len()
                );
                self.result = Some(report);
                self.load_state = LoadState::Loaded;
            }
            Err(err) => {
                tracing::warn!("Report {} failed: {}", ticket.run_id, err);
                self.result = None;
                self.load_state = LoadState::failed(err);
            }
        }
        true
    }

    /// Drop the in-flight run without publishing. Returns whether one existed.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.pending.take().is_some();
        if cancelled {
            self.load_state = LoadState::Idle;
        }
        cancelled
    }

    /// Drop the in-flight run and the published result
    pub fn clear(&mut self) {
        self.pending = None;
        self.result = None;
        self.load_state = LoadState::Idle;
    }
}
