use crate::domain::zodiac::ZodiacSign;
use serde::{Deserialize, Serialize};

// Stored prediction: exactly what the cache file holds per key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRecord {
    pub zodiac: ZodiacSign,
    pub insight: String,
    pub language: String,
}

// Incoming request fields, already parsed by the boundary (CLI or
// whatever else fronts the service). Presence is validated by the
// orchestrator, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionRequest {
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub birth_time: Option<String>,
    pub birth_place: Option<String>,
    pub language: Option<String>,
}

/// Orchestrator result: the stored record plus whether it was served
/// from the cache. `cached` is computed per call and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    #[serde(flatten)]
    pub record: InsightRecord,
    pub cached: bool,
}

/// Composite cache key. Only name and birth date participate: a request
/// for the same pair in another language hits the stored record.
pub fn record_key(name: &str, birth_date: &str) -> String {
    format!("{}_{}", name, birth_date)
}
