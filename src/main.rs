use cerina::adapters::{ArboardClipboard, FileSessionStore, ReqwestHttpClient};
use cerina::app::{App, AppMessage};
use cerina::auth::AuthApiClient;
use cerina::cli::{handle_logout_command, parse_args, version_string, CliCommand, USAGE};
use cerina::logging::init_logging;
use cerina::startup::{run_preflight, ClientConfig};
use cerina::storage::ensure_data_dir;
use cerina::terminal::{setup_panic_hook, TerminalManager};
use cerina::ui;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    if let CliCommand::Version = command {
        println!("{}", version_string());
        return Ok(());
    }

    color_eyre::install()?;

    let config = ClientConfig::from_env();
    ensure_data_dir(config.data_dir())?;
    if let Err(e) = init_logging(&config.log_path()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let runtime = tokio::runtime::Runtime::new().wrap_err("Failed to start async runtime")?;
    let store = Arc::new(FileSessionStore::new(config.data_dir()));

    match command {
        CliCommand::Logout => {
            let cleared = runtime.block_on(handle_logout_command(store.as_ref()))?;
            if cleared {
                println!("Signed out.");
            } else {
                println!("Not signed in.");
            }
            Ok(())
        }
        CliCommand::RunTui { transcript } => runtime.block_on(run_tui(config, store, transcript)),
        CliCommand::Version => Ok(()),
    }
}

async fn run_tui(
    config: ClientConfig,
    store: Arc<FileSessionStore>,
    transcript: Option<PathBuf>,
) -> Result<()> {
    let startup = run_preflight(config, store.as_ref(), transcript.as_deref()).await?;
    tracing::info!(
        "Starting {} against {}",
        version_string(),
        startup.config.api_base_url
    );

    let http = Arc::new(ReqwestHttpClient::with_timeout(startup.config.request_timeout()));
    let api = AuthApiClient::new(startup.config.api_base_url.clone(), http);
    let mut app = App::new(
        startup,
        api,
        store,
        Box::new(ArboardClipboard::new()),
        Instant::now(),
    );

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!("Event loop failed: {:?}", e);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            let now = Instant::now();
            terminal.draw(|f| ui::render(f, &*app, now))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(app.frame_interval());

        tokio::select! {
            _ = timeout => {
                app.tick(Instant::now());
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key_event(key, Instant::now()).await;
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        return Err(e).wrap_err("Failed to read terminal event");
                    }
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
                    app.handle_message(msg, Instant::now()).await;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
