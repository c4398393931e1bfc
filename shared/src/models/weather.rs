//! Weather Model (cosmetic admin feature)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Displayed weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherKind {
    Sunny,
    Cloudy,
    Rainy,
}

/// Current weather record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub current: WeatherKind,
    pub updated_at: DateTime<Utc>,
}

/// One historical weather change
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherHistoryEntry {
    pub weather: WeatherKind,
    pub changed_at: DateTime<Utc>,
}
