pub mod error;
pub mod geoip;
pub mod openweather;
