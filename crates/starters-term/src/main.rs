use std::io;
use std::path;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use starters_term::application::cli;
use starters_term::application::ui::destruct_terminal_for_panic;
use starters_term::application::ui::start_loop;
use starters_term::configuration::Config;
use starters_term::configuration::ConfigKey;
use starters_term::domain::models::Catalog;
use starters_term::domain::models::Entry;
use starters_term::domain::models::Event;
use starters_term::domain::models::OnPicked;
use starters_term::domain::services::Picker;
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;

fn init_tracing() -> Result<Option<WorkerGuard>> {
    let log_file = Config::get(ConfigKey::LogFile);
    if log_file.is_empty() {
        return Ok(None);
    }

    let log_path = path::PathBuf::from(&log_file);
    let directory = log_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| path::Path::new("."))
        .to_path_buf();
    let file_name = log_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "starters.log".to_string());

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(writer)
        .init();

    return Ok(Some(guard));
}

async fn pick(
    picker: Picker,
    on_picked: OnPicked,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<Option<Entry>> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = start_loop(&mut terminal, picker, on_picked, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    return result;
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::build().get_matches();

    if let Some(("config", _)) = matches.subcommand() {
        println!("{}", Config::serialize_default(cli::build()));
        return Ok(());
    }

    Config::load(cli::build(), vec![&matches]).await?;
    let _log_guard = init_tracing()?;

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    // Held open for the lifetime of the loop; the channel is the seam hosts
    // use to inject their own events, the standalone picker sends nothing.
    let (_event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let on_picked: OnPicked = Box::new(|value| {
        tracing::debug!(value = %value, "example picked");
    });

    let picked = pick(Picker::new(Catalog::default()), on_picked, event_rx).await?;

    if let Some(entry) = picked {
        if Config::get(ConfigKey::Format) == "json" {
            println!("{}", serde_json::to_string(&entry)?);
        } else {
            println!("{}", entry.value);
        }
    }

    return Ok(());
}
