use crate::error::ForecastError;
use chrono::{Datelike, NaiveDate};
use core_types::{ForecastSeries, PointKind, SeriesPoint};
use ta::indicators::ExponentialMovingAverage;
use ta::Next;

/// Projects the monthly sales series forward with a flat EMA continuation.
///
/// The smoothing span sets the decay factor 2 / (span + 1); with the
/// default span of 3 each month blends half the new observation with half
/// the running average.
#[derive(Debug)]
pub struct Forecaster {
    span: usize,
}

impl Forecaster {
    /// Creates a forecaster with the given smoothing span.
    ///
    /// It performs validation to ensure the span is usable.
    pub fn new(span: usize) -> Result<Self, ForecastError> {
        if span == 0 {
            return Err(ForecastError::InvalidSpan(span));
        }
        Ok(Self { span })
    }

    /// Smooths the observed monthly series and projects `horizon` future
    /// months, each carrying the last smoothed value.
    ///
    /// # Arguments
    ///
    /// * `history` - The chronological (month start, total) series. Must
    ///   not be empty; a single month is enough, the smoothing degenerates
    ///   to that value.
    /// * `horizon` - How many future months to project, at least 1.
    ///
    /// # Returns
    ///
    /// The observed pairs tagged `Actual`, followed by `horizon` projected
    /// pairs tagged `Forecast`, starting the calendar month immediately
    /// after the last observed one.
    pub fn project(
        &self,
        history: &[(NaiveDate, f64)],
        horizon: usize,
    ) -> Result<ForecastSeries, ForecastError> {
        if history.is_empty() {
            return Err(ForecastError::NotEnoughData(
                "the monthly history is empty".to_string(),
            ));
        }
        if horizon == 0 {
            return Err(ForecastError::InvalidHorizon(horizon));
        }

        // The indicator seeds itself with the first observation, then
        // applies ema = alpha * value + (1 - alpha) * ema.
        let mut ema = ExponentialMovingAverage::new(self.span)
            .map_err(|_| ForecastError::InvalidSpan(self.span))?;
        let mut last_ema = 0.0;
        for &(_, value) in history {
            last_ema = ema.next(value);
        }

        let mut points: Vec<SeriesPoint> = history
            .iter()
            .map(|&(month, value)| SeriesPoint {
                month,
                value,
                kind: PointKind::Actual,
            })
            .collect();

        let mut month = history[history.len() - 1].0;
        for _ in 0..horizon {
            month = month_after(month);
            points.push(SeriesPoint {
                month,
                value: last_ema,
                kind: PointKind::Forecast,
            });
        }

        tracing::debug!(observed = history.len(), horizon, last_ema, "projected monthly series");

        Ok(ForecastSeries { points })
    }
}

/// The first day of the calendar month immediately after `month`.
fn month_after(month: NaiveDate) -> NaiveDate {
    let (year, next) = if month.month() == 12 {
        (month.year() + 1, 1)
    } else {
        (month.year(), month.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, next, 1).expect("first of month is always a valid date")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn smooths_and_projects_the_known_scenario() {
        // EMA with span 3 over 100, 200, 300 is 100, 150, 225.
        let history = vec![
            (month(2024, 1), 100.0),
            (month(2024, 2), 200.0),
            (month(2024, 3), 300.0),
        ];

        let series = Forecaster::new(3).unwrap().project(&history, 2).unwrap();

        assert_eq!(series.points.len(), 5);
        let projected: Vec<(NaiveDate, f64)> =
            series.projected().map(|p| (p.month, p.value)).collect();
        assert_eq!(projected, vec![(month(2024, 4), 225.0), (month(2024, 5), 225.0)]);
    }

    #[test]
    fn actual_points_mirror_the_history() {
        let history = vec![(month(2024, 1), 100.0), (month(2024, 2), 200.0)];
        let series = Forecaster::new(3).unwrap().project(&history, 4).unwrap();

        let actual: Vec<(NaiveDate, f64)> = series.actual().map(|p| (p.month, p.value)).collect();
        assert_eq!(actual, history);
        assert_eq!(series.points.len(), history.len() + 4);
    }

    #[test]
    fn projected_months_are_contiguous_across_a_year_boundary() {
        let history = vec![(month(2023, 11), 50.0), (month(2023, 12), 70.0)];
        let series = Forecaster::new(3).unwrap().project(&history, 3).unwrap();

        let months: Vec<NaiveDate> = series.projected().map(|p| p.month).collect();
        assert_eq!(months, vec![month(2024, 1), month(2024, 2), month(2024, 3)]);
    }

    #[test]
    fn all_projected_values_equal_the_last_smoothed_value() {
        let history = vec![
            (month(2024, 1), 10.0),
            (month(2024, 2), 40.0),
            (month(2024, 3), 20.0),
            (month(2024, 4), 90.0),
        ];
        let series = Forecaster::new(3).unwrap().project(&history, 6).unwrap();

        let projected: Vec<f64> = series.projected().map(|p| p.value).collect();
        assert_eq!(projected.len(), 6);
        assert!(projected.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn a_single_month_history_projects_its_own_value() {
        let history = vec![(month(2024, 6), 123.0)];
        let series = Forecaster::new(3).unwrap().project(&history, 2).unwrap();

        let projected: Vec<(NaiveDate, f64)> =
            series.projected().map(|p| (p.month, p.value)).collect();
        assert_eq!(projected, vec![(month(2024, 7), 123.0), (month(2024, 8), 123.0)]);
    }

    #[test]
    fn empty_history_is_rejected() {
        let err = Forecaster::new(3).unwrap().project(&[], 6).unwrap_err();
        assert!(matches!(err, ForecastError::NotEnoughData(_)));
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let history = vec![(month(2024, 1), 100.0)];
        let err = Forecaster::new(3).unwrap().project(&history, 0).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidHorizon(0)));
    }

    #[test]
    fn zero_span_is_rejected() {
        assert!(matches!(Forecaster::new(0), Err(ForecastError::InvalidSpan(0))));
    }
}
