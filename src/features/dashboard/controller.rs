//! Dashboard Controller
//!
//! The dashboard task exclusively owns `DashboardState`. Commands from the
//! presentation layer and resolutions from the service layer are
//! multiplexed into it one message at a time; after each message a fresh
//! snapshot is published on a watch channel.
//!
//! ```text
//!  DashboardHandle ──DashboardCommand──┐
//!                                      ▼
//!                              ┌───────────────┐   spawn   ┌───────────────┐
//!                              │ Dashboard task│ ────────▶ │ CatalogSource │
//!                              │(DashboardState)│          │ ReportPipeline│
//!                              └───────────────┘ ◀──────── └───────────────┘
//!                                      │        ServiceEvent
//!                                      ▼
//!                      watch<Arc<DashboardSnapshot>> ──▶ observers
//! ```

use std::sync::Arc;
use tokio::sync::{mpsc, watch};

use crate::domain::category::CategoryId;
use crate::domain::config::ReportConfig;
use crate::domain::product::ProductId;
use crate::error::{Error, Result};
use crate::eventing::command::DashboardCommand;
use crate::features::report::ReportPipeline;
use crate::services::{CatalogSource, ServiceEvent};
use crate::state::dashboard_state::{DashboardState, ProductFetch};
use crate::state::snapshot::DashboardSnapshot;

/// The single owner of dashboard state
pub struct Dashboard {
    state: DashboardState,
    source: Arc<dyn CatalogSource>,
    pipeline: ReportPipeline,
    events_tx: mpsc::UnboundedSender<ServiceEvent>,
    events_rx: mpsc::UnboundedReceiver<ServiceEvent>,
    snapshots: watch::Sender<Arc<DashboardSnapshot>>,
    revision: u64,
}

impl Dashboard {
    /// Spawn the dashboard task on the current tokio runtime.
    ///
    /// The catalog fetch starts immediately.
    pub fn spawn(source: Arc<dyn CatalogSource>, config: &ReportConfig) -> DashboardHandle {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (snapshots, snapshots_rx) = watch::channel(Arc::new(DashboardSnapshot::default()));

        let dashboard = Self {
            state: DashboardState::new(),
            source,
            pipeline: ReportPipeline::new(config.latency()),
            events_tx,
            events_rx,
            snapshots,
            revision: 0,
        };
        tokio::spawn(dashboard.run(commands_rx));

        DashboardHandle {
            commands: commands_tx,
            snapshots: snapshots_rx,
        }
    }

    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<DashboardCommand>) {
        tracing::info!("Dashboard started");
        self.load_catalog();
        self.publish();

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(DashboardCommand::Shutdown) | None => break,
                    Some(command) => self.handle_command(command),
                },
                Some(event) = self.events_rx.recv() => self.handle_event(event),
            }

            self.sync_pipeline();
            self.publish();
        }

        self.pipeline.cancel();
        tracing::info!("Dashboard stopped");
    }

    fn handle_command(&mut self, command: DashboardCommand) {
        tracing::debug!("Command: {}", command.label());

        match command {
            DashboardCommand::SelectCategory(category) => {
                if let Some(fetch) = self.state.select_category(category) {
                    self.fetch_products(fetch);
                }
            }
            DashboardCommand::SelectProducts(ids) => {
                let dropped = self.state.select_products(ids);
                if dropped > 0 {
                    tracing::debug!("Ignored {} product ids outside the loaded set", dropped);
                }
            }
            DashboardCommand::RunReport => match self.state.run_report() {
                Ok(job) => self.pipeline.start(job, self.events_tx.clone()),
                Err(err) => tracing::warn!("Run report ignored: {}", err),
            },
            DashboardCommand::Clear => {
                self.state.clear();
                tracing::info!("Dashboard cleared");
            }
            DashboardCommand::ReloadCatalog => self.load_catalog(),
            DashboardCommand::Shutdown => {}
        }
    }

    fn handle_event(&mut self, event: ServiceEvent) {
        let catalog = matches!(event, ServiceEvent::CatalogLoaded { .. });
        if !self.state.apply(event) {
            tracing::debug!("Stale service event dropped");
            return;
        }

        if catalog {
            if let Some(fetch) = self.state.resume_product_load() {
                self.fetch_products(fetch);
            }
        }
    }

    /// The report task lives exactly as long as the state says a report is loading
    fn sync_pipeline(&mut self) {
        if !self.state.report().is_loading() {
            self.pipeline.cancel();
        }
    }

    fn load_catalog(&mut self) {
        let generation = self.state.begin_catalog_load();
        let source = Arc::clone(&self.source);
        let events = self.events_tx.clone();

        tracing::info!("Loading category catalog");
        tokio::spawn(async move {
            let result = source.fetch_categories().await;
            if events
                .send(ServiceEvent::CatalogLoaded { generation, result })
                .is_err()
            {
                tracing::debug!("Catalog {} loaded after dashboard shutdown", generation);
            }
        });
    }

    fn fetch_products(&mut self, fetch: ProductFetch) {
        let source = Arc::clone(&self.source);
        let events = self.events_tx.clone();

        tracing::info!(
            "Fetching products for {} from {}",
            fetch.category.id,
            fetch.category.source_locator
        );
        tokio::spawn(async move {
            let ProductFetch {
                generation,
                category,
            } = fetch;
            let result = source.fetch_products(&category).await;
            let id = category.id.clone();
            if events
                .send(ServiceEvent::ProductsLoaded {
                    generation,
                    category: category.id,
                    result,
                })
                .is_err()
            {
                tracing::debug!("Products for {} loaded after dashboard shutdown", id);
            }
        });
    }

    fn publish(&mut self) {
        self.revision += 1;
        self.snapshots
            .send_replace(Arc::new(self.state.snapshot(self.revision)));
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("revision", &self.revision)
            .field("pipeline", &self.pipeline)
            .finish()
    }
}

/// Cloneable front end to the dashboard task
#[derive(Clone, Debug)]
pub struct DashboardHandle {
    commands: mpsc::UnboundedSender<DashboardCommand>,
    snapshots: watch::Receiver<Arc<DashboardSnapshot>>,
}

impl DashboardHandle {
    /// Send a raw command
    pub fn send(&self, command: DashboardCommand) -> Result<()> {
        self.commands.send(command).map_err(|e| Error::ChannelSend {
            message: e.to_string(),
        })
    }

    pub fn select_category(&self, category: Option<CategoryId>) -> Result<()> {
        self.send(DashboardCommand::SelectCategory(category))
    }

    pub fn select_products(&self, ids: impl IntoIterator<Item = ProductId>) -> Result<()> {
        self.send(DashboardCommand::SelectProducts(ids.into_iter().collect()))
    }

    pub fn run_report(&self) -> Result<()> {
        self.send(DashboardCommand::RunReport)
    }

    pub fn clear(&self) -> Result<()> {
        self.send(DashboardCommand::Clear)
    }

    pub fn reload_catalog(&self) -> Result<()> {
        self.send(DashboardCommand::ReloadCatalog)
    }

    pub fn shutdown(&self) -> Result<()> {
        self.send(DashboardCommand::Shutdown)
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> Arc<DashboardSnapshot> {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified on every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<Arc<DashboardSnapshot>> {
        self.snapshots.clone()
    }

    /// Wait until a published snapshot satisfies `predicate`.
    ///
    /// Checks the latest snapshot first.
    pub async fn wait_for(
        &self,
        mut predicate: impl FnMut(&DashboardSnapshot) -> bool,
    ) -> Result<Arc<DashboardSnapshot>> {
        let mut rx = self.snapshots.clone();
        let snapshot = rx
            .wait_for(|snapshot| predicate(snapshot))
            .await
            .map_err(|_| Error::ChannelClosed)?;
        Ok(Arc::clone(&snapshot))
    }
}
