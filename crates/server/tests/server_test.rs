//! Integration tests for the HTTP surface, driven through the router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use churn_model::testing::full_artifact;
use churn_model::ChurnModel;
use churn_server::app;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_app() -> Router {
    let model = ChurnModel::from_artifact(full_artifact()).unwrap();
    app(model)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_body(tenure: &str, monthly: &str) -> String {
    format!(
        "gender=Female&SeniorCitizen=0&Partner=Yes&Dependents=No&tenure={tenure}\
         &PhoneService=Yes&MultipleLines=No&InternetService=Fiber+optic\
         &OnlineSecurity=No&OnlineBackup=Yes&DeviceProtection=No&TechSupport=No\
         &StreamingTV=Yes&StreamingMovies=No&Contract=Month-to-month\
         &PaperlessBilling=Yes&PaymentMethod=Electronic+check\
         &MonthlyCharges={monthly}&TotalCharges=845.5"
    )
}

fn multipart_request(field_name: &str, filename: &str, csv: &str) -> Request<Body> {
    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{filename}\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         {csv}\r\n\
         --{boundary}--\r\n"
    );
    Request::builder()
        .method("POST")
        .uri("/batch")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

const BATCH_CSV: &str = "\
customerID,gender,SeniorCitizen,Partner,Dependents,tenure,PhoneService,MultipleLines,InternetService,OnlineSecurity,OnlineBackup,DeviceProtection,TechSupport,StreamingTV,StreamingMovies,Contract,PaperlessBilling,PaymentMethod,MonthlyCharges,TotalCharges
0001,Female,0,Yes,No,2,Yes,No,Fiber optic,No,Yes,No,No,Yes,No,Month-to-month,Yes,Electronic check,70.35,140.7
0002,Male,1,No,No,64,Yes,Yes,DSL,Yes,No,Yes,Yes,No,No,Two year,No,Mailed check,55.2,3532.8
0003,Male,0,Yes,Yes,30,No,No phone service,DSL,Yes,Yes,No,Yes,No,No,One year,No,Mailed check,42.3,1269.0";

#[tokio::test]
async fn test_index_renders_all_nineteen_fields() {
    let response = test_app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    for (name, _) in churn_model::FIELDS {
        assert!(html.contains(&format!("name=\"{name}\"")), "missing {name}");
    }
}

#[tokio::test]
async fn test_predict_renders_result_and_probability() {
    let response = test_app()
        .oneshot(
            Request::post("/")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(form_body("2", "70.35")))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("<strong>Prediction:</strong> Churn"));

    // Probability renders as exactly d.dd.
    let marker = "<strong>Probability:</strong> ";
    let start = html.find(marker).expect("probability block") + marker.len();
    let probability: Vec<char> = html[start..start + 4].chars().collect();
    assert!(probability[0].is_ascii_digit());
    assert_eq!(probability[1], '.');
    assert!(probability[2].is_ascii_digit());
    assert!(probability[3].is_ascii_digit());

    // Submitted values are echoed back into the form.
    assert!(html.contains("value=\"Fiber optic\""));
}

#[tokio::test]
async fn test_predict_long_tenure_says_no_churn() {
    let body = form_body("60", "70.35").replace(
        "Contract=Month-to-month",
        "Contract=Two+year",
    );
    let response = test_app()
        .oneshot(
            Request::post("/")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("<strong>Prediction:</strong> No Churn"));
}

#[tokio::test]
async fn test_predict_rejects_non_numeric_field_with_error_list() {
    let response = test_app()
        .oneshot(
            Request::post("/")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(form_body("twelve", "70.35")))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_string(response).await;
    assert!(html.contains("class=\"errors\""));
    assert!(html.contains("Invalid number 'twelve' for feature 'tenure'"));
}

#[tokio::test]
async fn test_batch_upload_appends_two_columns_in_row_order() {
    let response = test_app()
        .oneshot(multipart_request("file", "customers.csv", BATCH_CSV))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"batch_predictions.csv\"")
    );

    let csv = body_string(response).await;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4, "header plus three data rows");
    assert!(lines[0].ends_with("TotalCharges,Prediction,Probability"));

    // Row order preserved, labels reflect tenure/contract.
    assert!(lines[1].starts_with("0001,"));
    assert!(lines[2].starts_with("0002,"));
    assert!(lines[3].starts_with("0003,"));
    assert!(lines[1].contains(",140.7,1,"));
    assert!(lines[2].contains(",3532.8,0,"));
    assert!(lines[3].contains(",1269.0,0,"));
}

#[tokio::test]
async fn test_batch_without_file_redirects_with_flash() {
    let response = test_app()
        .oneshot(multipart_request("note", "", "irrelevant"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/batch?flash=No+file+selected")
    );

    // Following the redirect shows the flash message.
    let response = test_app()
        .oneshot(
            Request::get("/batch?flash=No+file+selected")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let html = body_string(response).await;
    assert!(html.contains("No file selected"));
}

#[tokio::test]
async fn test_batch_with_missing_columns_is_typed_error_not_crash() {
    let response = test_app()
        .oneshot(multipart_request(
            "file",
            "bad.csv",
            "tenure,MonthlyCharges\n5,70.0",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_string(response).await;
    assert!(html.contains("Missing feature column"));
}

#[tokio::test]
async fn test_health_probes() {
    let response = test_app()
        .oneshot(Request::get("/health/live").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("\"alive\""));

    let response = test_app()
        .oneshot(Request::get("/health/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("\"ready\""));
}
