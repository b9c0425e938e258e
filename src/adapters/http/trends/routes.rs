//! HTTP routes for trend details endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{get_trend_details_view, render_trend_details, TrendsAppState};

/// Creates the trend details router with all routes.
pub fn trends_routes(state: TrendsAppState) -> Router {
    Router::new()
        // POST /api/trends/details
        .route("/api/trends/details", post(render_trend_details))
        // POST /api/trends/details/view
        .route("/api/trends/details/view", post(get_trend_details_view))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::PresentationSettings;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        trends_routes(TrendsAppState::with_default_adapters(PresentationSettings::default()))
    }

    fn body() -> Value {
        json!({
            "records": [
                {"place": "ohio", "crime": "robbery", "year": 2015, "rate": 160.0, "count": 18600, "population": 11605738},
                {"place": "national", "crime": "robbery", "year": 2015, "rate": 102.0, "count": 327374, "population": 321418820},
                {"place": "ohio", "crime": "robbery", "year": 2016, "rate": 187.8, "count": 21805, "population": 11613423},
                {"place": "national", "crime": "robbery", "year": 2016, "rate": 102.8, "count": 332198, "population": 323127513}
            ],
            "colors": ["#ff5e50", "#95aabc"],
            "crime": "robbery",
            "keys": ["ohio", "national"],
            "since": 2015,
            "until": 2016,
            "placeName": "Ohio"
        })
    }

    fn post(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_body(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn details_route_returns_html_fragment() {
        let response = app().oneshot(post("/api/trends/details", &body())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let html = read_body(response).await;
        assert!(html.contains(r#"id="robbery-trend-chart-details""#));
        assert!(html.contains(r#"<option value="2016" selected>2016</option>"#));
        assert!(html.contains("higher"));
    }

    #[tokio::test]
    async fn view_route_honours_year_parameter() {
        let response = app()
            .oneshot(post("/api/trends/details/view?year=2015", &body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let view: Value = serde_json::from_str(&read_body(response).await).unwrap();
        assert_eq!(view["yearSelect"]["selected"], 2015);
        assert_eq!(view["sentence"]["kind"], "default");
        assert_eq!(view["rows"][0]["rate"]["text"], "160");
    }

    #[tokio::test]
    async fn out_of_range_year_is_bad_request() {
        let response = app()
            .oneshot(post("/api/trends/details?year=1999", &body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: Value = serde_json::from_str(&read_body(response).await).unwrap();
        assert_eq!(error["code"], "OUT_OF_RANGE");
    }

    #[tokio::test]
    async fn empty_keys_are_unprocessable() {
        let mut request = body();
        request["keys"] = json!([]);
        let response = app().oneshot(post("/api/trends/details", &request)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
