//! Weather display client (cosmetic admin feature)

use serde::Serialize;
use shared::models::{WeatherData, WeatherHistoryEntry, WeatherKind};
use shared::ApiResponse;

use crate::http::{expect_data, HttpClient};
use crate::ClientResult;

#[derive(Serialize)]
struct WeatherUpdate {
    weather: WeatherKind,
}

/// Weather API client
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: HttpClient,
}

impl WeatherClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Currently displayed weather
    pub async fn current(&self) -> ClientResult<WeatherData> {
        self.http
            .get::<ApiResponse<WeatherData>>("/weather/current")
            .await
            .and_then(expect_data)
    }

    /// Change the displayed weather
    pub async fn update(&self, weather: WeatherKind) -> ClientResult<WeatherData> {
        self.http
            .post::<ApiResponse<WeatherData>, _>("/weather/update", &WeatherUpdate { weather })
            .await
            .and_then(expect_data)
    }

    /// Recent weather changes, newest first
    pub async fn history(&self) -> ClientResult<Vec<WeatherHistoryEntry>> {
        self.http
            .get::<ApiResponse<Vec<WeatherHistoryEntry>>>("/weather/history")
            .await
            .and_then(expect_data)
    }
}
