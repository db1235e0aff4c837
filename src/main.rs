mod action;
mod app;
mod config;
mod error;
mod event;
mod page;
mod rest;
mod service;
mod tui;
mod types;
mod ui;

use std::panic;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::action::Action;
use crate::app::App;
use crate::config::Config;
use crate::error::TuidoError;
use crate::event::Event;
use crate::rest::RestService;
use crate::service::TodoService;
use crate::tui::EventHandler;

#[derive(Parser, Debug)]
#[command(name = "tuido", about = "A TUI todo list client for REST todo services")]
struct Args {
    /// Base URL of the todo service (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let args = Args::parse();

    // Flag > config file > built-in default
    let config = Config::load();
    let base_url = args.base_url.unwrap_or(config.base_url);
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(TuidoError::Config(format!("base_url must be http(s), got {}", base_url)).into());
    }
    tracing::debug!(%base_url, "using todo service");

    let service: Arc<dyn TodoService> = Arc::new(RestService::new(base_url));

    // Run the application
    let result = run(service).await;

    // Restore terminal
    tui::restore()?;

    result
}

async fn run(service: Arc<dyn TodoService>) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize terminal
    let mut terminal = tui::init()?;

    // Create action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Create app state
    let mut app = App::new(service, action_tx.clone());

    // Create event handler
    let render_rate = Duration::from_millis(16); // ~60fps
    let mut events = EventHandler::new(render_rate);

    // Main loop
    loop {
        tokio::select! {
            Some(event) = events.next() => {
                match event {
                    Event::Render => {
                        terminal.draw(|frame| ui::render(frame, &app))?;
                    }
                    _ => {
                        let action = app.handle_event(event);
                        if !matches!(action, Action::None) {
                            action_tx.send(action)?;
                        }
                    }
                }
            }
            Some(action) = action_rx.recv() => {
                app.update(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
