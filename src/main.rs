use dashport::adapters::ReqwestHttpClient;
use dashport::api::ExporterClient;
use dashport::app::{App, AppMessage, Focus};
use dashport::cli::{parse_args, run_cli_command};
use dashport::input::{Command, CommandRegistry};
use dashport::startup::{init_logging, ClientConfig};
use dashport::terminal::{setup_panic_hook, TerminalManager};
use dashport::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind, MouseEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

fn main() -> Result<()> {
    // Handle --version / --help before any initialization
    let options = match run_cli_command(parse_args(std::env::args())) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    let config = ClientConfig::from_env().with_cli(&options);

    // Logging is best-effort; the TUI runs without it
    if let Err(e) = init_logging(&config.log_file) {
        eprintln!(
            "Warning: logging disabled ({}): {}",
            config.log_file.display(),
            e
        );
    }
    info!(
        base_url = %config.base_url,
        download_dir = %config.download_dir.display(),
        "Starting dashport {}",
        env!("CARGO_PKG_VERSION")
    );

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let http = ReqwestHttpClient::with_timeout(config.timeout)?;
    let client = ExporterClient::new(config.base_url.clone(), Arc::new(http));

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(async {
        let mut app = App::new(client, config);
        app.start_loading();

        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore()?;
        result
    });

    if let Err(e) = &result {
        error!("Exited with error: {:?}", e);
    } else {
        info!("Exited cleanly");
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();

    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        // 16ms tick drives spinner frames and notification expiry
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(&registry, key);
                    }
                    Some(Ok(Event::Mouse(mouse_event))) => {
                        let cmd = match mouse_event.kind {
                            MouseEventKind::ScrollDown => Some(Command::MoveDown),
                            MouseEventKind::ScrollUp => Some(Command::MoveUp),
                            _ => None,
                        };
                        if let Some(cmd) = cmd {
                            // Scrolling moves the item cursor unless folders are focused
                            if app.focus == Focus::Search {
                                app.focus = Focus::Items;
                            }
                            app.execute_command(cmd);
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        error!("Terminal event error: {}", e);
                    }
                    // Input stream closed
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
