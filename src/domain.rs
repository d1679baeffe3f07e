pub mod categories;
pub mod forecast;
pub mod weather;
