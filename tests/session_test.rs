//! Tests for the session controller: load lifecycle, render, events

use std::cell::Cell;
use std::io::Write;
use std::panic::AssertUnwindSafe;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use orgview::chart::{ChartConfig, ChartHandle, Renderer, TermRenderer, VisualTree};
use orgview::config::HttpSettings;
use orgview::domain::HierarchyNode;
use orgview::loader::{DocumentSource, HierarchyLoader, LoadError};
use orgview::session::{Controller, Event, StatusSink, LOAD_ERROR_PREFIX};

const ORG_DOC: &str = r#"{
    "name": "CEO",
    "children": [
        {"name": "CTO", "children": []},
        {"name": "CFO", "children": []}
    ]
}"#;

/// Records the status surface interactions in order.
#[derive(Debug, Default)]
struct RecordingStatus {
    events: Vec<String>,
}

impl StatusSink for RecordingStatus {
    fn loading(&mut self, visible: bool) {
        self.events.push(format!("loading:{}", visible));
    }

    fn load_failed(&mut self, message: &str) {
        self.events.push(format!("error:{}", message));
    }
}

fn doc_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ============================================================
// Startup Lifecycle Tests
// ============================================================

#[tokio::test]
async fn given_valid_document_when_starting_then_indicator_toggles_and_chart_renders() {
    // Arrange
    let file = doc_file(ORG_DOC);
    let loader = HierarchyLoader::new();
    let source = DocumentSource::File(file.path().to_path_buf());
    let mut status = RecordingStatus::default();

    // Act
    let controller = Controller::start(
        &loader,
        &source,
        &TermRenderer,
        &ChartConfig::default(),
        &mut status,
    )
    .await
    .unwrap();

    // Assert: indicator shown for the duration of the call, then hidden
    assert_eq!(status.events, vec!["loading:true", "loading:false"]);
    assert_eq!(controller.handle().nodes().node_count(), 3);
    assert_eq!(controller.scale(), 1.0);
}

#[tokio::test]
async fn given_404_fetch_when_starting_then_error_surfaces_and_indicator_hides() {
    // Arrange
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hierarchy.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let loader = HierarchyLoader::new();
    let source = DocumentSource::parse(&format!("{}/hierarchy.json", mock_server.uri()));
    let mut status = RecordingStatus::default();

    // Act
    let result = Controller::start(
        &loader,
        &source,
        &TermRenderer,
        &ChartConfig::default(),
        &mut status,
    )
    .await;

    // Assert: visible error contains the fixed prefix and the status code,
    // the indicator ends hidden, no chart exists
    assert!(matches!(result, Err(LoadError::Http { status: 404 })));
    assert_eq!(status.events.len(), 3);
    assert_eq!(status.events[0], "loading:true");
    assert!(status.events[1].starts_with(&format!("error:{}", LOAD_ERROR_PREFIX)));
    assert!(status.events[1].contains("404"));
    assert_eq!(status.events[2], "loading:false");
}

#[tokio::test]
async fn given_unparsable_document_when_starting_then_parse_failure_surfaces() {
    // Arrange
    let file = doc_file("[1, 2, ");
    let loader = HierarchyLoader::new();
    let source = DocumentSource::File(file.path().to_path_buf());
    let mut status = RecordingStatus::default();

    // Act
    let result = Controller::start(
        &loader,
        &source,
        &TermRenderer,
        &ChartConfig::default(),
        &mut status,
    )
    .await;

    // Assert
    assert!(matches!(result, Err(LoadError::Parse(_))));
    assert!(status.events[1].starts_with("error:"));
}

#[tokio::test]
async fn given_successful_load_when_starting_then_render_happens_exactly_once() {
    // Arrange
    #[derive(Default)]
    struct CountingRenderer {
        calls: Rc<Cell<usize>>,
    }
    impl Renderer for CountingRenderer {
        fn render(&self, root: &HierarchyNode, config: &ChartConfig) -> ChartHandle {
            self.calls.set(self.calls.get() + 1);
            TermRenderer.render(root, config)
        }
    }

    let file = doc_file(ORG_DOC);
    let loader = HierarchyLoader::new();
    let source = DocumentSource::File(file.path().to_path_buf());
    let renderer = CountingRenderer::default();
    let calls = Rc::clone(&renderer.calls);
    let mut status = RecordingStatus::default();

    // Act
    let mut controller = Controller::start(
        &loader,
        &source,
        &renderer,
        &ChartConfig::default(),
        &mut status,
    )
    .await
    .unwrap();
    controller.handle_event(Event::ZoomIn);
    controller.handle_event(Event::SearchInput("ceo".to_string()));

    // Assert: interaction events never re-render
    assert_eq!(calls.get(), 1);
}

#[test]
fn given_panicking_renderer_when_starting_then_indicator_stays_visible() {
    // The rendering capability is outside the failure handling: its panic
    // propagates uncaught and the success path never hides the indicator.

    // Arrange
    struct PanickingRenderer;
    impl Renderer for PanickingRenderer {
        fn render(&self, _root: &HierarchyNode, _config: &ChartConfig) -> ChartHandle {
            panic!("layout capability failure");
        }
    }

    struct SharedStatus(Arc<Mutex<Vec<String>>>);
    impl StatusSink for SharedStatus {
        fn loading(&mut self, visible: bool) {
            self.0.lock().unwrap().push(format!("loading:{}", visible));
        }
        fn load_failed(&mut self, message: &str) {
            self.0.lock().unwrap().push(format!("error:{}", message));
        }
    }

    let file = doc_file(ORG_DOC);
    let events = Arc::new(Mutex::new(Vec::new()));
    let mut status = SharedStatus(Arc::clone(&events));

    // Act
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(Controller::start(
            &HierarchyLoader::new(),
            &DocumentSource::File(file.path().to_path_buf()),
            &PanickingRenderer,
            &ChartConfig::default(),
            &mut status,
        ))
    }));

    // Assert: panic propagated, indicator never hidden, no error message
    assert!(result.is_err());
    assert_eq!(*events.lock().unwrap(), vec!["loading:true"]);
}

// ============================================================
// Interaction Tests
// ============================================================

#[test]
fn given_zoom_events_when_handling_then_container_transform_tracks_scale() {
    // Arrange
    let root: HierarchyNode = serde_json::from_str(ORG_DOC).unwrap();
    let mut controller =
        Controller::from_handle(TermRenderer.render(&root, &ChartConfig::default()));

    // Act & Assert: transform reflects the scale after each event
    controller.handle_event(Event::ZoomIn);
    assert!((controller.scale() - 1.1).abs() < 1e-9);
    assert_eq!(
        controller.handle().transform(),
        format!("scale({})", controller.scale())
    );

    controller.handle_event(Event::ZoomOut);
    controller.handle_event(Event::ZoomOut);
    assert!((controller.scale() - 0.9).abs() < 1e-9);
    assert_eq!(
        controller.handle().transform(),
        format!("scale({})", controller.scale())
    );
}

#[test]
fn given_zoom_out_at_floor_when_handling_then_transform_is_unchanged() {
    // Arrange
    let root: HierarchyNode = serde_json::from_str(ORG_DOC).unwrap();
    let mut controller =
        Controller::from_handle(TermRenderer.render(&root, &ChartConfig::default()));
    loop {
        let before = controller.scale();
        controller.zoom_out();
        if controller.scale() == before {
            break;
        }
    }
    let stuck_transform = controller.handle().transform();

    // Act
    controller.handle_event(Event::ZoomOut);
    controller.handle_event(Event::ZoomOut);

    // Assert: silently ignored, no visual change
    assert_eq!(controller.handle().transform(), stuck_transform);
}

#[test]
fn given_empty_chart_when_searching_then_no_matches_and_no_scroll() {
    // Arrange: a handle over an empty surface
    let mut controller = Controller::from_handle(ChartHandle::new(VisualTree::new()));

    // Act
    let outcome = controller.search("anything");

    // Assert
    assert_eq!(outcome.matches, 0);
    assert!(controller.handle().scroll_log().is_empty());
}
