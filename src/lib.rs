pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod logging;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

use std::{
    io::{self, Stdout},
    process::ExitCode,
};

use anyhow::Result;
use app::events::{AppEvent, spawn_input_task};
use app::search::run_search;
use app::state::{AppMode, AppState};
use cli::Cli;
use config::{AppConfig, SETUP_INSTRUCTIONS};
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use data::openweather::WeatherClient;
use domain::weather::LocationQuery;
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::info;

pub async fn run(cli: Cli) -> Result<ExitCode> {
    cli.validate()?;
    let config = match AppConfig::from_env(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}\n\n{SETUP_INSTRUCTIONS}");
            return Ok(ExitCode::FAILURE);
        }
    };
    logging::init(&cli)?;
    info!(?config, "starting");

    let client = WeatherClient::new(&config)?;
    if cli.one_shot {
        return run_one_shot(&client, &config, cli.initial_query()).await;
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &config, client, cli.initial_query()).await;
    restore_terminal(&mut terminal)?;
    result.map(|()| ExitCode::SUCCESS)
}

async fn run_one_shot(
    client: &WeatherClient,
    config: &AppConfig,
    query: Option<LocationQuery>,
) -> Result<ExitCode> {
    let Some(query) = query else {
        anyhow::bail!("--one-shot needs a CITY or --lat/--lon");
    };
    match run_search(client, &query, config.time_basis).await {
        Ok(report) => {
            println!("{}", ui::snapshot::render_snapshot(&report, config.icon_mode));
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", error.user_message(&query.label()));
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &AppConfig,
    client: WeatherClient,
    initial_query: Option<LocationQuery>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(config, client, initial_query);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}
