use super::artifact::ModelArtifact;

// ---------------------------------------------------------------------------
// ForecastPoint – one step of the forecast sequence
// ---------------------------------------------------------------------------

/// Number of yearly periods forecast beyond the fitted range.
pub const HORIZON: usize = 5;

/// One (year, point estimate, interval) tuple of the forecast sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub year: i32,
    pub yhat: f64,
    pub lower: f64,
    pub upper: f64,
}

// ---------------------------------------------------------------------------
// The two operations the artifact exposes
// ---------------------------------------------------------------------------

impl ModelArtifact {
    /// Ordered yearly timeline covering the fitted range plus `periods`
    /// future steps.
    pub fn extend_timeline(&self, periods: usize) -> Vec<i32> {
        (self.train_start..=self.train_end + periods as i32).collect()
    }

    /// Predict point estimates and prediction intervals for each year.
    ///
    /// Inside the fitted range the standard error is the residual spread;
    /// past it the error grows with the square root of the number of steps
    /// ahead, so the band widens over the horizon.
    pub fn predict(&self, years: &[i32]) -> Vec<ForecastPoint> {
        let z = z_score(self.confidence_level);

        years
            .iter()
            .map(|&year| {
                let yhat = self.intercept + self.slope * f64::from(year - self.train_start);
                let steps_ahead = (year - self.train_end).max(0);
                let se = if steps_ahead == 0 {
                    self.residual_std
                } else {
                    self.residual_std * f64::from(steps_ahead).sqrt()
                };
                ForecastPoint {
                    year,
                    yhat,
                    lower: yhat - z * se,
                    upper: yhat + z * se,
                }
            })
            .collect()
    }
}

/// Full forecast sequence: fitted years plus the fixed future horizon.
pub fn forecast_sequence(model: &ModelArtifact, periods: usize) -> Vec<ForecastPoint> {
    let timeline = model.extend_timeline(periods);
    model.predict(&timeline)
}

/// Approximate normal z-score for the given confidence level.
fn z_score(confidence_level: f64) -> f64 {
    match confidence_level {
        x if x >= 0.99 => 2.576,
        x if x >= 0.95 => 1.96,
        x if x >= 0.90 => 1.645,
        x if x >= 0.80 => 1.282,
        _ => 1.96,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ModelArtifact {
        ModelArtifact {
            train_start: 2000,
            train_end: 2018,
            intercept: 12.0,
            slope: 0.15,
            residual_std: 0.25,
            confidence_level: 0.95,
        }
    }

    #[test]
    fn sequence_is_fitted_years_plus_exactly_five() {
        let seq = forecast_sequence(&model(), HORIZON);
        let fitted = (2018 - 2000 + 1) as usize;
        assert_eq!(seq.len(), fitted + 5);
    }

    #[test]
    fn sequence_is_chronological() {
        let seq = forecast_sequence(&model(), HORIZON);
        assert_eq!(seq.first().unwrap().year, 2000);
        assert_eq!(seq.last().unwrap().year, 2023);
        assert!(seq.windows(2).all(|w| w[0].year + 1 == w[1].year));
    }

    #[test]
    fn point_estimate_follows_the_trend_line() {
        let seq = model().predict(&[2000, 2010]);
        assert!((seq[0].yhat - 12.0).abs() < 1e-12);
        assert!((seq[1].yhat - (12.0 + 0.15 * 10.0)).abs() < 1e-12);
    }

    #[test]
    fn bounds_straddle_the_point_estimate() {
        for p in forecast_sequence(&model(), HORIZON) {
            assert!(p.lower < p.yhat);
            assert!(p.upper > p.yhat);
        }
    }

    #[test]
    fn interval_widens_over_the_future_horizon() {
        let seq = forecast_sequence(&model(), HORIZON);
        let widths: Vec<f64> = seq
            .iter()
            .filter(|p| p.year > 2018)
            .map(|p| p.upper - p.lower)
            .collect();
        assert_eq!(widths.len(), 5);
        assert!(widths.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn z_score_tracks_the_confidence_level() {
        let mut m = model();
        m.confidence_level = 0.99;
        let wide = m.predict(&[2019])[0].upper - m.predict(&[2019])[0].lower;
        m.confidence_level = 0.80;
        let narrow = m.predict(&[2019])[0].upper - m.predict(&[2019])[0].lower;
        assert!(wide > narrow);
    }
}
