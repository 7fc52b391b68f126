use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Instant};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use popcine::{
    api::TmdbClient,
    config::Config,
    handlers, logic, model,
    services::{self, SearchRequest, SearchResponse},
    trends::{AppwriteTrendStore, MemoryTrendStore, TrendStore, TrendTracker},
    ui, utils,
};

/// Terminal movie finder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp>/popcine-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Skip the welcome notice
    #[arg(long)]
    no_welcome: bool,
}

/// Install a file-only subscriber. Nothing is ever written to the terminal.
fn init_logging() -> Result<WorkerGuard> {
    let path = utils::get_debug_log_path();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("popcine=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

pub struct App {
    pub model: model::Model,

    request_tx: mpsc::UnboundedSender<SearchRequest>,
    response_rx: mpsc::UnboundedReceiver<SearchResponse>,
}

impl App {
    fn new(config: &Config, api_key: &str) -> Self {
        let store: Arc<dyn TrendStore> = match &config.trend_store {
            Some(appwrite) => {
                tracing::info!(endpoint = %appwrite.endpoint, "using Appwrite trend store");
                Arc::new(AppwriteTrendStore::new(appwrite))
            }
            None => {
                tracing::info!("no trend store configured, trending is per session");
                Arc::new(MemoryTrendStore::new())
            }
        };

        let client = TmdbClient::new(config.catalog_base_url.clone(), api_key.to_string());
        let (request_tx, response_rx) =
            services::spawn_search_service(client, TrendTracker::new(store), config.trending_limit);

        Self {
            model: model::Model::new(config.debounce(), config.show_welcome),
            request_tx,
            response_rx,
        }
    }

    fn send(&self, request: SearchRequest) {
        if self.request_tx.send(request).is_err() {
            tracing::error!("search service is gone");
        }
    }

    /// Initial discover listing and trending list
    fn mount(&mut self) {
        let request = handlers::start_search(&mut self.model, String::new());
        self.send(request);
        self.send(SearchRequest::LoadTrending);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = if args.debug {
        Some(init_logging()?)
    } else {
        None
    };

    let (mut config, api_key) = popcine::config::load(args.config)?;
    if args.no_welcome {
        config.show_welcome = false;
    }
    tracing::debug!(
        base_url = %config.catalog_base_url,
        debounce_ms = config.debounce_ms,
        "configuration loaded"
    );

    // Initialize app
    let mut app = App::new(&config, &api_key);
    app.mount();

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, &mut app.model);
        })?;

        if app.model.ui.should_quit {
            break;
        }

        // Process search responses (non-blocking)
        while let Ok(response) = app.response_rx.try_recv() {
            handlers::handle_search_response(&mut app.model, response);
        }

        // Search once the term has settled
        if let Some(request) = handlers::poll_debounced(&mut app.model, Instant::now()) {
            app.send(request);
        }

        if app.model.search.loading {
            app.model.ui.tick();
        }

        // Wake in time for the spinner or the debounce deadline, whichever is first
        let timeout = logic::ui::poll_timeout(
            Instant::now(),
            app.model.search.debouncer.deadline(),
            app.model.search.loading,
        );
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handlers::handle_key(&mut app.model, key, Instant::now());
                }
            }
        }
    }

    Ok(())
}
