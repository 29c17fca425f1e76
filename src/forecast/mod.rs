/// Forecast layer: pre-fitted model artifact and the point + interval
/// sequence derived from it.  The artifact exposes exactly two operations —
/// extend the yearly timeline by N periods, and predict over a timeline —
/// and the provider composes them into the sequence the UI renders.

pub mod artifact;
pub mod provider;
