use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use crate::{data::error::FetchError, domain::weather::WeatherReport};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Input(Event),
    SearchSucceeded(Box<WeatherReport>),
    SearchFailed { query: String, error: FetchError },
    /// Outcome of the IP geolocation + reverse geocoding lookup.
    LocationDetected(Option<String>),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}
