//! Range filtering over temperature and pH
//!
//! A record passes when each filtered field is either absent or inside its
//! inclusive interval. Absent values are never excluded: a spring with an
//! unknown temperature always passes the temperature test.

use crate::models::{Interval, ObservedRanges, RecordSet, SpringRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Caller-supplied bounds; any bound left unset falls back to the observed range
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub min_ph: Option<f64>,
    pub max_ph: Option<f64>,
}

impl FilterQuery {
    /// True when no bound was supplied
    pub fn is_empty(&self) -> bool {
        self.min_temp.is_none()
            && self.max_temp.is_none()
            && self.min_ph.is_none()
            && self.max_ph.is_none()
    }
}

/// Resolved inclusive intervals for temperature (°F) and pH
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    /// `None` disables the temperature test entirely
    pub temperature_f: Option<Interval>,
    pub ph: Interval,
}

impl Default for RangeFilter {
    fn default() -> Self {
        Self {
            temperature_f: None,
            ph: Interval::unbounded(),
        }
    }
}

impl RangeFilter {
    /// Filter with explicit bounds on both fields
    pub fn new(min_temp: f64, max_temp: f64, min_ph: f64, max_ph: f64) -> Self {
        Self {
            temperature_f: Some(Interval::new(min_temp, max_temp)),
            ph: Interval::new(min_ph, max_ph),
        }
    }

    /// Resolve a query against the ranges observed in the full data set.
    ///
    /// Unset bounds default to the observed min/max, or to an open bound
    /// when the field has no values at all. When every observed temperature
    /// is the same value the temperature test is skipped so the filter never
    /// collapses to a single point.
    pub fn from_query(query: &FilterQuery, observed: &ObservedRanges) -> Self {
        let temperature_f = match observed.temperature_f {
            Some(range) if !range.is_degenerate() => Some(Interval::new(
                query.min_temp.unwrap_or(range.min),
                query.max_temp.unwrap_or(range.max),
            )),
            Some(_) | None => {
                debug!("Temperature filter skipped: observed range is empty or a single value");
                None
            }
        };

        let ph_default = observed.ph.unwrap_or_else(Interval::unbounded);
        let ph = Interval::new(
            query.min_ph.unwrap_or(ph_default.min),
            query.max_ph.unwrap_or(ph_default.max),
        );

        let filter = Self { temperature_f, ph };
        filter.warn_if_inverted();
        filter
    }

    /// Whether a single record passes both tests
    pub fn matches(&self, record: &SpringRecord) -> bool {
        let temperature_ok = match (self.temperature_f, record.temperature_f) {
            (Some(interval), Some(value)) => interval.contains(value),
            _ => true,
        };

        let ph_ok = match record.ph {
            Some(value) => self.ph.contains(value),
            None => true,
        };

        temperature_ok && ph_ok
    }

    /// Return the passing records in their original order
    pub fn apply(&self, records: &RecordSet) -> RecordSet {
        let filtered: Vec<SpringRecord> = records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();

        debug!(
            "Range filter kept {} of {} records",
            filtered.len(),
            records.len()
        );

        RecordSet::new(filtered)
    }

    fn warn_if_inverted(&self) {
        if let Some(interval) = self.temperature_f.filter(Interval::is_inverted) {
            warn!(
                "Temperature range {}..{} is inverted; only springs without a temperature will pass",
                interval.min, interval.max
            );
        }
        if self.ph.is_inverted() {
            warn!(
                "pH range {}..{} is inverted; only springs without a pH value will pass",
                self.ph.min, self.ph.max
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_spring() -> SpringRecord {
        SpringRecord::new(36.5, -121.9, "Example Spring")
            .with_temperature_f(104.0)
            .with_ph(8.1)
            .with_nearby_location("Nearby Town")
            .with_usgs_quad("USGS123")
    }

    fn sample_set() -> RecordSet {
        RecordSet::new(vec![
            example_spring(),
            SpringRecord::new(44.0, -110.0, "Boiling Pot")
                .with_temperature_f(199.0)
                .with_ph(2.5),
            SpringRecord::new(39.0, -119.0, "Unmeasured"),
            SpringRecord::new(40.0, -115.0, "Tepid Seep")
                .with_temperature_f(75.0)
                .with_ph(7.0),
        ])
    }

    fn names(set: &RecordSet) -> Vec<&str> {
        set.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_explicit_range_excludes_single_record() {
        let set = RecordSet::new(vec![example_spring()]);
        let filter = RangeFilter::new(110.0, 150.0, f64::NEG_INFINITY, f64::INFINITY);

        assert!(filter.apply(&set).is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let set = sample_set();
        let filter = RangeFilter::new(75.0, 104.0, 7.0, 8.1);

        assert_eq!(
            names(&filter.apply(&set)),
            vec!["Example Spring", "Unmeasured", "Tepid Seep"]
        );
    }

    #[test]
    fn test_absent_values_always_pass() {
        let set = sample_set();
        let filter = RangeFilter::new(500.0, 600.0, 13.0, 14.0);

        assert_eq!(names(&filter.apply(&set)), vec!["Unmeasured"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let set = sample_set();
        let filter = RangeFilter::new(80.0, 200.0, 2.0, 8.5);

        let once = filter.apply(&set);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let set = sample_set();
        let query = FilterQuery::default();
        assert!(query.is_empty());

        let filter = RangeFilter::from_query(&query, &set.observed_ranges());
        assert_eq!(filter.temperature_f, Some(Interval::new(75.0, 199.0)));
        assert_eq!(filter.ph, Interval::new(2.5, 8.1));
        assert_eq!(filter.apply(&set), set);
    }

    #[test]
    fn test_partial_query_uses_observed_defaults() {
        let set = sample_set();
        let query = FilterQuery {
            min_temp: Some(100.0),
            max_ph: Some(7.5),
            ..Default::default()
        };

        let filter = RangeFilter::from_query(&query, &set.observed_ranges());
        assert_eq!(filter.temperature_f, Some(Interval::new(100.0, 199.0)));
        assert_eq!(filter.ph, Interval::new(2.5, 7.5));
        assert_eq!(names(&filter.apply(&set)), vec!["Boiling Pot", "Unmeasured"]);
    }

    #[test]
    fn test_degenerate_temperature_range_skips_filter() {
        let set = RecordSet::new(vec![
            SpringRecord::new(40.0, -120.0, "A").with_temperature_f(100.0),
            SpringRecord::new(41.0, -121.0, "B").with_temperature_f(100.0),
        ]);
        let query = FilterQuery {
            min_temp: Some(110.0),
            max_temp: Some(150.0),
            ..Default::default()
        };

        let filter = RangeFilter::from_query(&query, &set.observed_ranges());
        assert_eq!(filter.temperature_f, None);
        assert_eq!(filter.apply(&set).len(), 2);
    }

    #[test]
    fn test_no_observed_values_leaves_bounds_open() {
        let set = RecordSet::new(vec![SpringRecord::new(40.0, -120.0, "A")]);
        let filter = RangeFilter::from_query(&FilterQuery::default(), &set.observed_ranges());

        assert_eq!(filter.temperature_f, None);
        assert_eq!(filter.ph, Interval::unbounded());
        assert_eq!(filter.apply(&set).len(), 1);
    }

    #[test]
    fn test_inverted_range_keeps_only_absent() {
        let set = sample_set();
        let query = FilterQuery {
            min_ph: Some(9.0),
            max_ph: Some(3.0),
            ..Default::default()
        };

        let filter = RangeFilter::from_query(&query, &set.observed_ranges());
        assert_eq!(names(&filter.apply(&set)), vec!["Unmeasured"]);
    }

    #[test]
    fn test_filter_empty_set() {
        let filter = RangeFilter::new(0.0, 100.0, 0.0, 14.0);
        assert!(filter.apply(&RecordSet::default()).is_empty());
    }
}
