use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::calculator::errors::OperatorError;
use crate::calculator::models::Calculation;
use crate::inbound::http::extract::ApiJson;

pub async fn calculate(
    ApiJson(body): ApiJson<CalculateRequest>,
) -> Result<ApiSuccess<CalculateResponseData>, ApiError> {
    let calculation = body.try_into_calculation()?;
    let result = calculation.evaluate()?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        CalculateResponseData {
            operator: calculation.operator.symbol().to_string(),
            operand1: calculation.operand1,
            operand2: calculation.operand2,
            result,
        },
    ))
}

/// HTTP request body for a calculation (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculateRequest {
    #[serde(alias = "a")]
    operand1: f64,
    #[serde(alias = "b")]
    operand2: f64,
    operator: String,
}

impl CalculateRequest {
    fn try_into_calculation(self) -> Result<Calculation, OperatorError> {
        let operator = self.operator.parse()?;
        Ok(Calculation::new(self.operand1, self.operand2, operator))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateResponseData {
    pub operator: String,
    pub operand1: f64,
    pub operand2: f64,
    pub result: f64,
}
