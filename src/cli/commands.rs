//! Command dispatch and implementations

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::chart::TermRenderer;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{wrap_root, HierarchyBuilder, PersonRecord};
use crate::loader::{DocumentSource, HierarchyLoader};
use crate::session::{Controller, Event, StatusSink, LOADING_TEXT};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    match &cli.command {
        Some(Commands::Show { source }) => _show(&settings, source.as_deref()),
        Some(Commands::Search { term, source }) => _search(&settings, term, source.as_deref()),
        Some(Commands::View { source }) => _view(&settings, source.as_deref()),
        Some(Commands::Build {
            people,
            root,
            wrap,
            output,
        }) => _build(people, root.as_deref(), wrap.as_deref(), output.as_deref()),
        Some(Commands::Config { command }) => _config(&settings, command),
        Some(Commands::Info) => _info(),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// Terminal implementation of the load status surface.
#[derive(Debug, Default)]
pub struct TermStatus;

impl StatusSink for TermStatus {
    fn loading(&mut self, visible: bool) {
        if visible {
            output::status(LOADING_TEXT);
        }
    }

    fn load_failed(&mut self, message: &str) {
        output::error(message);
    }
}

/// Map one input line of the interactive session to an event.
/// Returns None to end the session.
pub fn parse_event(line: &str) -> Option<Event> {
    match line.trim() {
        "q" | "quit" | "exit" => None,
        "+" => Some(Event::ZoomIn),
        "-" => Some(Event::ZoomOut),
        term => Some(Event::SearchInput(
            term.strip_prefix('/').unwrap_or(term).to_string(),
        )),
    }
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Internal(format!("cannot start async runtime: {e}")))
}

/// Run the startup sequence for the given (or configured) source.
fn start_session(settings: &Settings, source: Option<&str>) -> CliResult<Controller> {
    let source = DocumentSource::parse(source.unwrap_or(&settings.source));
    let loader = HierarchyLoader::with_settings(&settings.http);
    let renderer = TermRenderer;
    let mut status = TermStatus;

    let controller = runtime()?.block_on(Controller::start(
        &loader,
        &source,
        &renderer,
        &settings.chart,
        &mut status,
    ))?;
    Ok(controller)
}

fn print_chart(controller: &Controller) {
    if let Some(tree) = controller.handle().to_tree_string() {
        output::info(&tree);
    }
}

fn node_label(controller: &Controller, idx: generational_arena::Index) -> String {
    controller
        .handle()
        .nodes()
        .get_node(idx)
        .map(|node| node.data.label())
        .unwrap_or_default()
}

#[instrument(skip(settings))]
fn _show(settings: &Settings, source: Option<&str>) -> CliResult<()> {
    let controller = start_session(settings, source)?;
    print_chart(&controller);
    Ok(())
}

#[instrument(skip(settings))]
fn _search(settings: &Settings, term: &str, source: Option<&str>) -> CliResult<()> {
    let mut controller = start_session(settings, source)?;
    let outcome = controller.search(term);
    print_chart(&controller);
    match outcome.scrolled_to {
        Some(idx) => {
            output::action("Scrolled to", &node_label(&controller, idx));
            output::detail(&format!("{} node(s) highlighted", outcome.matches));
        }
        None => output::detail("no matches"),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _view(settings: &Settings, source: Option<&str>) -> CliResult<()> {
    let mut controller = start_session(settings, source)?;
    print_chart(&controller);
    output::detail("commands: + zoom in, - zoom out, /term search, q quit");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        output::prompt(">");
        line.clear();
        let read = stdin.read_line(&mut line).map_err(|source| CliError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
        if read == 0 {
            break; // EOF
        }
        let Some(event) = parse_event(&line) else {
            break;
        };
        debug!(?event, "interactive event");
        let outcome = controller.handle_event(event);
        print_chart(&controller);
        output::detail(&format!("transform: {}", controller.handle().transform()));
        if let Some(outcome) = outcome {
            match outcome.scrolled_to {
                Some(idx) => output::action("Scrolled to", &node_label(&controller, idx)),
                None => output::detail("no matches"),
            }
        }
    }
    Ok(())
}

#[instrument]
fn _build(
    people_path: &Path,
    root: Option<&str>,
    wrap: Option<&str>,
    output_path: Option<&Path>,
) -> CliResult<()> {
    let content = std::fs::read_to_string(people_path).map_err(|source| CliError::Io {
        path: people_path.to_path_buf(),
        source,
    })?;
    let records: Vec<PersonRecord> =
        serde_json::from_str(&content).map_err(|source| CliError::Listing {
            path: people_path.to_path_buf(),
            source,
        })?;
    debug!(records = records.len(), "people listing read");

    let mut builder = HierarchyBuilder::new(records);
    let tree = match root {
        Some(name) => builder.build(name)?,
        None => builder.build_auto()?,
    };
    let tree = match wrap {
        Some(spec) => {
            let (name, title) = match spec.split_once(':') {
                Some((name, title)) => (name, Some(title)),
                None => (spec, None),
            };
            wrap_root(tree, name, title)
        }
        None => tree,
    };

    let json = serde_json::to_string_pretty(&tree)
        .map_err(|e| CliError::Internal(format!("cannot serialize hierarchy: {e}")))?;
    match output_path {
        Some(path) => {
            std::fs::write(path, json).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            output::success(&format!("hierarchy written to {}", path.display()));
        }
        None => output::info(&json),
    }
    Ok(())
}

fn _config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(settings)
                .map_err(|e| CliError::Internal(format!("cannot render settings: {e}")))?;
            output::info(&rendered);
        }
        ConfigCommands::Path => match Settings::global_config_path() {
            Some(path) => {
                let marker = if path.exists() { "exists" } else { "not present" };
                output::info(&format!("{} ({})", path.display(), marker));
            }
            None => output::warning("cannot determine config directory"),
        },
    }
    Ok(())
}

fn _info() -> CliResult<()> {
    if let Some(author) = Cli::command().get_author() {
        println!("AUTHOR: {}", author);
    }
    if let Some(version) = Cli::command().get_version() {
        println!("VERSION: {}", version);
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    io::stdout().flush().ok();
    Ok(())
}
