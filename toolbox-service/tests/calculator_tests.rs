mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

async fn calculate(app: &TestApp, body: serde_json::Value) -> reqwest::Response {
    app.post("/calculate")
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn test_four_operations() {
    let app = TestApp::spawn().await;

    let cases = [
        ("+", 10.0, 5.0, 15.0),
        ("-", 5.0, 3.0, 2.0),
        ("*", 4.0, 6.0, 24.0),
        ("/", 8.0, 2.0, 4.0),
    ];

    for (operator, a, b, expected) in cases {
        let response = calculate(
            &app,
            json!({ "operand1": a, "operand2": b, "operator": operator }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["operator"], operator);
        assert_eq!(body["operand1"], a);
        assert_eq!(body["operand2"], b);
        assert_eq!(body["result"], expected);
    }
}

#[tokio::test]
async fn test_short_operand_names_accepted() {
    let app = TestApp::spawn().await;

    let response = calculate(&app, json!({ "a": 2, "b": 3, "operator": "+" })).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["result"], 5.0);
}

#[tokio::test]
async fn test_divide_by_zero() {
    let app = TestApp::spawn().await;

    let response = calculate(
        &app,
        json!({ "operand1": 10, "operand2": 0, "operator": "/" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Division by zero is not allowed");
}

#[tokio::test]
async fn test_overflowing_result_rejected() {
    let app = TestApp::spawn().await;

    let response = calculate(
        &app,
        json!({ "operand1": 1e308, "operand2": 10, "operator": "*" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Result is not a finite number");
}

#[tokio::test]
async fn test_invalid_operator_validation() {
    let app = TestApp::spawn().await;

    for operator in ["%", "x", "**", ""] {
        let response = calculate(
            &app,
            json!({ "operand1": 1, "operand2": 2, "operator": operator }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_missing_operand() {
    let app = TestApp::spawn().await;

    let response = calculate(&app, json!({ "operand1": 1, "operator": "+" })).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
