use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::debug;

use crate::{
    app::{events::AppEvent, search::run_search},
    cli::IconMode,
    config::AppConfig,
    data::{error::FetchError, geoip::detect_coordinates, openweather::WeatherClient},
    domain::weather::{Coordinates, LocationQuery, TimeBasis, WeatherReport},
};

mod input;

pub use input::SearchCommand;
pub(crate) use input::is_query_char;
use input::{command_char, control_char};

pub const FAREWELL_MESSAGE: &str = "Thank you for using the Weather Forecast App. Goodbye!";
pub const LOCATION_UNAVAILABLE: &str = "Location access not available or denied";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Error,
    Farewell,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub input: String,
    pub loading_message: String,
    pub last_error: Option<String>,
    pub notice: Option<String>,
    pub report: Option<WeatherReport>,
    pub selected_day: usize,
    pub search_in_flight: bool,
    pub locating: bool,
    pub last_query: Option<LocationQuery>,
    pub icon_mode: IconMode,
    time_basis: TimeBasis,
    geoip_url: String,
    pending_query: Option<LocationQuery>,
    client: WeatherClient,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        client: WeatherClient,
        initial_query: Option<LocationQuery>,
    ) -> Self {
        Self {
            mode: AppMode::Idle,
            running: true,
            input: initial_query
                .as_ref()
                .map(LocationQuery::label)
                .unwrap_or_default(),
            loading_message: String::new(),
            last_error: None,
            notice: None,
            report: None,
            selected_day: 0,
            search_in_flight: false,
            locating: false,
            last_query: None,
            icon_mode: config.icon_mode,
            time_basis: config.time_basis,
            geoip_url: config.geoip_url.clone(),
            pending_query: initial_query,
            client,
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                if let Some(query) = self.pending_query.take() {
                    self.start_search(tx, query);
                }
            }
            AppEvent::Input(input) => self.handle_input(input, tx).await?,
            AppEvent::SearchSucceeded(report) => self.handle_search_succeeded(*report),
            AppEvent::SearchFailed { query, error } => self.handle_search_failed(&query, &error),
            AppEvent::LocationDetected(city) => self.handle_location_detected(tx, city),
            AppEvent::Quit => self.mode = AppMode::Quit,
        }
        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key_press(key, tx).await?;
        }
        Ok(())
    }

    async fn handle_key_press(
        &mut self,
        key: KeyEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        // After the farewell only quitting is accepted.
        if self.mode == AppMode::Farewell {
            if key.code == KeyCode::Esc || control_char(key) == Some('c') {
                tx.send(AppEvent::Quit).await?;
            }
            return Ok(());
        }

        if let Some(ch) = control_char(key) {
            match ch {
                'c' => tx.send(AppEvent::Quit).await?,
                'l' => self.start_location_lookup(tx),
                'r' => self.refresh(tx),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => tx.send(AppEvent::Quit).await?,
            KeyCode::Enter => self.submit(tx),
            KeyCode::F(5) => self.refresh(tx),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Tab | KeyCode::Right => self.select_next_day(),
            KeyCode::BackTab | KeyCode::Left => self.select_previous_day(),
            _ => {
                if let Some(ch) = command_char(key).filter(|ch| is_query_char(*ch)) {
                    self.input.push(ch);
                }
            }
        }
        Ok(())
    }

    pub fn submit(&mut self, tx: &mpsc::Sender<AppEvent>) {
        match SearchCommand::parse(&self.input) {
            SearchCommand::Empty => {
                self.notice = Some("Enter a city name, e.g. London, Tokyo, New York".to_string());
            }
            SearchCommand::Exit => self.say_goodbye(),
            SearchCommand::Search(query) => self.start_search(tx, query),
        }
    }

    fn refresh(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if let Some(query) = self.last_query.clone() {
            self.start_search(tx, query);
        }
    }

    fn say_goodbye(&mut self) {
        self.mode = AppMode::Farewell;
        self.input.clear();
        self.report = None;
        self.last_error = None;
        self.notice = None;
    }

    /// Spawns the search pipeline; its outcome arrives as an `AppEvent`.
    /// Ignored while another search is running or after the farewell.
    pub fn start_search(&mut self, tx: &mpsc::Sender<AppEvent>, query: LocationQuery) {
        if self.search_in_flight || self.mode == AppMode::Farewell {
            return;
        }
        let label = query.label();
        self.search_in_flight = true;
        self.mode = AppMode::Loading;
        self.loading_message = format!("Fetching weather data for {label}...");
        self.last_error = None;
        self.notice = None;
        self.last_query = Some(query.clone());

        let client = self.client.clone();
        let basis = self.time_basis;
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let event = match run_search(&client, &query, basis).await {
                Ok(report) => AppEvent::SearchSucceeded(Box::new(report)),
                Err(error) => AppEvent::SearchFailed {
                    query: label,
                    error,
                },
            };
            let _ = tx2.send(event).await;
        });
    }

    fn start_location_lookup(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if self.locating || self.search_in_flight {
            return;
        }
        self.locating = true;
        self.notice = Some("Detecting location...".to_string());

        let client = self.client.clone();
        let url = self.geoip_url.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let city = match detect_coordinates(&url).await {
                Some(coords) => client.reverse_geocode(coords).await,
                None => None,
            };
            let _ = tx2.send(AppEvent::LocationDetected(city)).await;
        });
    }

    pub(crate) fn handle_search_succeeded(&mut self, report: WeatherReport) {
        self.search_in_flight = false;
        if self.mode == AppMode::Farewell {
            return;
        }
        self.mode = AppMode::Ready;
        self.selected_day = 0;
        self.report = Some(report);
    }

    pub(crate) fn handle_search_failed(&mut self, query: &str, error: &FetchError) {
        debug!(%query, %error, "search failed");
        self.search_in_flight = false;
        if self.mode == AppMode::Farewell {
            return;
        }
        self.mode = AppMode::Error;
        self.report = None;
        self.last_error = Some(error.user_message(query));
    }

    fn handle_location_detected(&mut self, tx: &mpsc::Sender<AppEvent>, city: Option<String>) {
        self.locating = false;
        if self.mode == AppMode::Farewell {
            return;
        }
        match city.as_deref().and_then(LocationQuery::city) {
            Some(query) => {
                self.input = query.label();
                self.start_search(tx, query);
            }
            None => self.notice = Some(LOCATION_UNAVAILABLE.to_string()),
        }
    }

    fn select_next_day(&mut self) {
        if let Some(report) = &self.report {
            let last = report.days.len().saturating_sub(1);
            self.selected_day = (self.selected_day + 1).min(last);
        }
    }

    fn select_previous_day(&mut self) {
        self.selected_day = self.selected_day.saturating_sub(1);
    }
}
