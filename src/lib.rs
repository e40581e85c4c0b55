//! orgview: organization chart viewer.
//!
//! Loads a hierarchy document (JSON, over HTTP or from disk), materializes
//! it through a pluggable rendering capability, and drives the interaction
//! contract of the chart surface: zoom (a scale transform on the container)
//! and search (substring highlight plus scroll to the first match).

pub mod chart;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod loader;
pub mod session;
pub mod util;
pub mod view;

pub use chart::{ChartConfig, ChartHandle, Renderer, TermRenderer, VisualNode, VisualTree};
pub use config::Settings;
pub use domain::{HierarchyBuilder, HierarchyNode, PersonRecord};
pub use loader::{DocumentSource, HierarchyLoader, LoadError};
pub use session::{Controller, Event, SearchOutcome, StatusSink};
pub use view::ViewState;
