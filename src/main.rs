mod app;
mod config;
mod corpus;
mod logging;
mod route;
mod ui;
mod view;

use crate::app::action::Command;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::corpus::loader::CorpusLoader;
use crate::route::links::work_list_url;
use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Terminal browser for annotated Greek corpora.
#[derive(Debug, Parser)]
#[command(name = "glossa", version, about)]
struct Cli {
    /// Config file (default: <config dir>/glossa/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Corpus directory, overriding `data.dir` from the config
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Write the effective config to the config path and exit
    #[arg(long)]
    write_config: bool,

    /// Location to open, e.g. "#view=work&workIndex=0"
    fragment: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = match cli.config.as_deref() {
        Some(path) if cli.write_config && !path.exists() => config::AppConfig::default(),
        path => config::load_config(path)?,
    };
    if let Some(dir) = cli.data_dir {
        cfg.data.dir = dir;
    }
    if cli.write_config {
        config::save_config(&cfg, cli.config.as_deref())?;
        println!("Config written");
        return Ok(());
    }
    logging::init(&cfg.logging)?;

    let start = cli
        .fragment
        .as_deref()
        .and_then(handler::normalize_location)
        .unwrap_or_else(work_list_url);

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg, start).await;

    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting on error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    start: String,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    tracing::info!(data_dir = %cfg.data.dir.display(), location = %start, "starting");
    let loader = CorpusLoader::new(cfg.data.dir.clone(), event_tx.clone());
    let mut state = AppState::new(start, cfg.ui.show_items_limit);
    state.viewport_height = ui::layout::content_height(terminal.size()?.height);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    let tick_rate = std::time::Duration::from_millis(cfg.ui.tick_rate_ms.max(10));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    let mut commands = handler::route_location(&mut state);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    loop {
        for command in commands.drain(..) {
            match command {
                Command::FetchIndex => loader.fetch_index(),
                Command::FetchWork(work_index) => loader.fetch_work(work_index),
                Command::FetchType(type_index) => loader.fetch_type(type_index),
                Command::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }

        let Some(event) = event_rx.recv().await else {
            break;
        };
        commands = handler::handle_event(&mut state, event);
    }

    tracing::info!("shutting down");
    Ok(())
}
