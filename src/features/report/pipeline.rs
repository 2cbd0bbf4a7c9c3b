//! Report Pipeline
//!
//! Computes a report over the product set captured when the run was
//! triggered. The simulated latency runs as a spawned task that can be
//! aborted; its result is sent back as a `ServiceEvent`.

use chrono::Local;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use crate::domain::category::CategoryId;
use crate::domain::chart::project;
use crate::domain::product::Product;
use crate::domain::report::ReportResult;
use crate::error::{Error, Result};
use crate::services::{ReportTicket, ServiceEvent};

/// Inputs of one report run, captured at invocation
#[derive(Debug, Clone)]
pub struct ReportJob {
    pub ticket: ReportTicket,
    pub category: CategoryId,
    pub products: Vec<Product>,
}

/// Compute the report for a job
pub fn compute(job: ReportJob) -> Result<ReportResult> {
    if let Some(bad) = job.products.iter().find(|p| !p.has_valid_price()) {
        return Err(Error::ReportFailed {
            message: format!("invalid price {} for product {} ({})", bad.price, bad.id, bad.title),
        });
    }

    let chart = project(&job.products);

    Ok(ReportResult {
        run_id: job.ticket.run_id,
        source_category: job.category,
        source_products: job.products,
        chart,
        generated_at: Local::now(),
    })
}

/// Runs report jobs on the tokio runtime, one at a time
#[derive(Debug)]
pub struct ReportPipeline {
    latency: Duration,
    task: Option<AbortHandle>,
}

impl ReportPipeline {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            task: None,
        }
    }

    /// Start a job; any previous task is aborted
    pub fn start(&mut self, job: ReportJob, events: UnboundedSender<ServiceEvent>) {
        self.cancel();

        let latency = self.latency;
        tracing::debug!(
            "Report {} started over {} products",
            job.ticket.run_id,
            job.products.len()
        );

        let handle = tokio::spawn(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }

            let ticket = job.ticket;
            let result = compute(job);
            if events.send(ServiceEvent::ReportFinished { ticket, result }).is_err() {
                tracing::debug!("Report {} finished after dashboard shutdown", ticket.run_id);
            }
        });

        self.task = Some(handle.abort_handle());
    }

    /// Abort the running task, if any. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                let running = !task.is_finished();
                task.abort();
                running
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Generation;
    use tokio::sync::mpsc;

    fn job(products: Vec<Product>) -> ReportJob {
        ReportJob {
            ticket: ReportTicket::new(Generation::default()),
            category: "electronics".into(),
            products,
        }
    }

    #[test]
    fn compute_projects_captured_products() {
        let job = job(vec![
            Product::new(1, "Phone", 500.0),
            Product::new(2, "Laptop", 1200.0),
        ]);
        let run_id = job.ticket.run_id;

        let report = compute(job).expect("report");

        assert_eq!(report.run_id, run_id);
        assert_eq!(report.source_category.as_str(), "electronics");
        assert_eq!(report.source_products.len(), 2);
        assert_eq!(report.chart.series_values, vec![500.0, 1200.0]);
    }

    #[test]
    fn compute_over_empty_set_is_empty_chart() {
        let report = compute(job(Vec::new())).expect("report");
        assert!(report.chart.is_empty());
    }

    #[test]
    fn compute_rejects_invalid_price() {
        let result = compute(job(vec![Product::new(1, "Broken", f64::NAN)]));
        assert!(matches!(result, Err(Error::ReportFailed { .. })));

        let result = compute(job(vec![Product::new(2, "Negative", -1.0)]));
        assert!(matches!(result, Err(Error::ReportFailed { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn start_delivers_result_after_latency() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut pipeline = ReportPipeline::new(Duration::from_secs(3));

        pipeline.start(job(vec![Product::new(1, "Phone", 500.0)]), tx);
        assert!(pipeline.is_running());

        let event = rx.recv().await.expect("report event");
        match event {
            ServiceEvent::ReportFinished { result, .. } => {
                assert_eq!(result.expect("report").source_products.len(), 1);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut pipeline = ReportPipeline::new(Duration::from_secs(3));

        pipeline.start(job(Vec::new()), tx);
        assert!(pipeline.cancel());
        assert!(!pipeline.is_running());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }
}
