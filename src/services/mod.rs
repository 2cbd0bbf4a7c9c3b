//! Service Layer
//!
//! The service layer abstracts the remote category/product source and
//! defines the events that carry asynchronous results back to the dashboard.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               CatalogSource                  │
//! │  ┌──────────────────┐  ┌──────────────────┐  │
//! │  │ HttpCatalogSource│  │  InMemorySource  │  │
//! │  │   (reqwest)      │  │ (fixtures/tests) │  │
//! │  └──────────────────┘  └──────────────────┘  │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼ ServiceEvent (generation-tagged)
//! ┌──────────────────────────────────────────────┐
//! │               Dashboard task                 │
//! │              (DashboardState)                │
//! └──────────────────────────────────────────────┘
//! ```

mod events;
mod http_source;
mod memory_source;
mod source;

pub use events::*;
pub use http_source::*;
pub use memory_source::*;
pub use source::*;
