use super::*;

/// What pressing Enter on the search bar should do.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchCommand {
    Empty,
    /// The literal word `exit`: say goodbye instead of searching.
    Exit,
    Search(LocationQuery),
}

impl SearchCommand {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if trimmed.eq_ignore_ascii_case("exit") {
            return Self::Exit;
        }
        if let Some(coords) = parse_coordinates(trimmed) {
            return Self::Search(LocationQuery::Coordinates(coords));
        }
        LocationQuery::city(trimmed).map_or(Self::Empty, Self::Search)
    }
}

/// Accepts `lat, lon` typed into the search bar.
fn parse_coordinates(text: &str) -> Option<Coordinates> {
    let (lat, lon) = text.split_once(',')?;
    let coords = Coordinates::new(lat.trim().parse().ok()?, lon.trim().parse().ok()?);
    coords.is_valid().then_some(coords)
}

pub(crate) fn is_query_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}

pub(super) fn command_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    if let KeyCode::Char(ch) = key.code {
        Some(ch)
    } else {
        None
    }
}

pub(super) fn control_char(key: KeyEvent) -> Option<char> {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    if let KeyCode::Char(ch) = key.code {
        Some(ch.to_ascii_lowercase())
    } else {
        None
    }
}
