pub mod air_quality;
pub mod current;
pub mod forecast;
pub mod search;
pub mod shared;
