use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ModelArtifact – the deserialized pre-fitted forecasting model
// ---------------------------------------------------------------------------

/// Parameters of a yearly-frequency trend model fitted elsewhere and shipped
/// as a JSON artifact.  The point estimate for a year is
/// `intercept + slope * (year - train_start)`; intervals come from the
/// residual spread observed during fitting.
///
/// No provenance validation happens here: a structurally valid artifact with
/// nonsense coefficients surfaces as nonsense downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// First year of the fitted range (also the trend origin).
    pub train_start: i32,
    /// Last year of the fitted range.
    pub train_end: i32,
    /// Trend value at `train_start`.
    pub intercept: f64,
    /// Trend change per year.
    pub slope: f64,
    /// Standard deviation of the fit residuals.
    pub residual_std: f64,
    /// Confidence level for the prediction interval, e.g. 0.95.
    pub confidence_level: f64,
}

/// Load a model artifact from a JSON file.
pub fn load_artifact(path: &Path) -> Result<ModelArtifact> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading model artifact {}", path.display()))?;
    let artifact: ModelArtifact =
        serde_json::from_str(&text).context("parsing model artifact")?;
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_deserializes_from_fixture_json() {
        let artifact: ModelArtifact = serde_json::from_str(
            r#"{
                "train_start": 2000,
                "train_end": 2018,
                "intercept": 12.26,
                "slope": 0.157,
                "residual_std": 0.24,
                "confidence_level": 0.95
            }"#,
        )
        .unwrap();

        assert_eq!(artifact.train_start, 2000);
        assert_eq!(artifact.train_end, 2018);
        assert!((artifact.slope - 0.157).abs() < 1e-12);
    }

    #[test]
    fn malformed_artifact_is_a_parse_error() {
        let err = serde_json::from_str::<ModelArtifact>(r#"{"train_start": "soon"}"#);
        assert!(err.is_err());
    }
}
