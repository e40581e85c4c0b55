//! Session controller: one load, one render, then interaction events.

use generational_arena::Index;
use tracing::{debug, instrument, warn};

use crate::chart::{ChartConfig, ChartHandle, Renderer};
use crate::loader::{DocumentSource, HierarchyLoader, LoadError};
use crate::view::ViewState;

/// Fixed loading-indicator text.
pub const LOADING_TEXT: &str = "Loading organization chart...";

/// Fixed prefix of the user-visible load failure message.
pub const LOAD_ERROR_PREFIX: &str = "Failed to load organization chart. ";

/// Interaction events, one per user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ZoomIn,
    ZoomOut,
    /// The full content of the search field after a change
    SearchInput(String),
}

/// Progress and failure surface of the load lifecycle.
pub trait StatusSink {
    /// Toggle the loading indicator.
    fn loading(&mut self, visible: bool);

    /// Show the terminal failure message for this load attempt.
    fn load_failed(&mut self, message: &str);
}

/// Outcome of one search input event.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Number of highlighted nodes
    pub matches: usize,
    /// Node scrolled into view: the first match in document order
    pub scrolled_to: Option<Index>,
}

/// Orchestrates the session: data load, chart render, interaction handlers.
///
/// Owns the view state and the retained chart handle; nothing lives in
/// free-floating globals.
pub struct Controller {
    view: ViewState,
    handle: ChartHandle,
}

impl Controller {
    /// Run the startup sequence: the single load, then the single render.
    ///
    /// The indicator is hidden only after the render call, mirroring the
    /// original surface: a panicking renderer unwinds with the indicator
    /// still visible.
    #[instrument(skip_all, fields(source = %source))]
    pub async fn start<R: Renderer>(
        loader: &HierarchyLoader,
        source: &DocumentSource,
        renderer: &R,
        config: &ChartConfig,
        status: &mut dyn StatusSink,
    ) -> Result<Self, LoadError> {
        status.loading(true);
        let root = match loader.load(source).await {
            Ok(root) => root,
            Err(e) => {
                warn!("load failed: {e}");
                status.load_failed(&format!("{LOAD_ERROR_PREFIX}{e}"));
                status.loading(false);
                return Err(e);
            }
        };
        let handle = renderer.render(&root, config);
        status.loading(false);
        debug!(nodes = handle.nodes().node_count(), "chart rendered");
        Ok(Self {
            view: ViewState::new(),
            handle,
        })
    }

    /// Session over an already rendered chart.
    pub fn from_handle(handle: ChartHandle) -> Self {
        Self {
            view: ViewState::new(),
            handle,
        }
    }

    pub fn handle(&self) -> &ChartHandle {
        &self.handle
    }

    pub fn scale(&self) -> f64 {
        self.view.scale()
    }

    /// Dispatch one interaction event.
    pub fn handle_event(&mut self, event: Event) -> Option<SearchOutcome> {
        match event {
            Event::ZoomIn => {
                self.zoom_in();
                None
            }
            Event::ZoomOut => {
                self.zoom_out();
                None
            }
            Event::SearchInput(term) => Some(self.search(&term)),
        }
    }

    /// Zoom in by one step and apply the container transform.
    pub fn zoom_in(&mut self) {
        let scale = self.view.zoom_in();
        self.handle.set_scale(scale);
    }

    /// Zoom out by one step; silently ignored at or below the floor.
    pub fn zoom_out(&mut self) {
        if let Some(scale) = self.view.zoom_out() {
            self.handle.set_scale(scale);
        }
    }

    /// One search input event.
    ///
    /// Case-insensitive substring match over every visual node in document
    /// order: matches are highlighted, everything else (including nameless
    /// nodes) has its highlight cleared. Exactly one scroll request fires,
    /// targeting the first match, or none when nothing matches. The empty
    /// term matches every node.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&mut self, term: &str) -> SearchOutcome {
        let needle = term.to_lowercase();
        let mut first_match = None;
        let mut matches = 0;

        let indices: Vec<_> = self.handle.nodes().iter().map(|(idx, _)| idx).collect();
        for idx in indices {
            let Some(node) = self.handle.nodes_mut().get_node_mut(idx) else {
                continue;
            };
            let hit = node
                .data
                .name
                .as_ref()
                .is_some_and(|name| name.to_lowercase().contains(&needle));
            node.data.highlighted = hit;
            if hit {
                matches += 1;
                if first_match.is_none() {
                    first_match = Some(idx);
                }
            }
        }

        if let Some(idx) = first_match {
            self.handle.scroll_into_view(idx);
        }
        debug!(matches, "search applied");
        SearchOutcome {
            matches,
            scrolled_to: first_match,
        }
    }
}
