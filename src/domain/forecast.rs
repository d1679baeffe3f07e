use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::weather::{DisplayZone, ForecastSample};

/// Forecast samples that share one calendar date, with temperature aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub samples: Vec<ForecastSample>,
    pub min_temp_c: f64,
    pub avg_temp_c: f64,
    pub max_temp_c: f64,
}

impl DayBucket {
    /// `samples` must be non-empty; `group_by_day` never builds an empty bucket.
    #[allow(clippy::cast_precision_loss)]
    fn from_samples(date: NaiveDate, samples: Vec<ForecastSample>) -> Self {
        let (min, max, sum) = samples.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), sample| {
                (
                    min.min(sample.temperature_c),
                    max.max(sample.temperature_c),
                    sum + sample.temperature_c,
                )
            },
        );
        let avg = sum / samples.len() as f64;
        Self {
            date,
            min_temp_c: round_one_decimal(min),
            avg_temp_c: round_one_decimal(avg),
            max_temp_c: round_one_decimal(max),
            samples,
        }
    }
}

/// Groups samples by the calendar date `zone` assigns to their timestamp.
///
/// Buckets come out in ascending date order, each keeping its samples in the
/// order received. Days with no samples are not synthesized.
#[must_use]
pub fn group_by_day(samples: &[ForecastSample], zone: DisplayZone) -> Vec<DayBucket> {
    let mut days: BTreeMap<NaiveDate, Vec<ForecastSample>> = BTreeMap::new();
    for sample in samples {
        days.entry(zone.localize(sample.time).date())
            .or_default()
            .push(sample.clone());
    }
    days.into_iter()
        .map(|(date, samples)| DayBucket::from_samples(date, samples))
        .collect()
}

/// Rounds half away from zero, so 2.25 becomes 2.3 and -2.25 becomes -2.3.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
