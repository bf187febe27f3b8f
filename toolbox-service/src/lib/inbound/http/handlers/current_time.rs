use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::clock::models::ClockReading;
use crate::clock::models::TimezoneName;
use crate::inbound::http::extract::ApiQuery;

pub async fn current_time(
    ApiQuery(query): ApiQuery<CurrentTimeQuery>,
) -> Result<ApiSuccess<CurrentTimeResponseData>, ApiError> {
    let timezone = TimezoneName::new(&query.timezone)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        (&ClockReading::now(timezone)).into(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrentTimeQuery {
    #[serde(default = "CurrentTimeQuery::default_timezone")]
    timezone: String,
}

impl CurrentTimeQuery {
    fn default_timezone() -> String {
        TimezoneName::DEFAULT.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentTimeResponseData {
    pub current_time: String,
    pub timezone: String,
    pub timestamp: f64,
}

impl From<&ClockReading> for CurrentTimeResponseData {
    fn from(reading: &ClockReading) -> Self {
        Self {
            current_time: reading.current_time.clone(),
            timezone: reading.timezone.to_string(),
            timestamp: reading.timestamp,
        }
    }
}
