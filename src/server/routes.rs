use crate::{
    error::GeminiError,
    gemini::GeminiClient,
    logger,
    models::{ErrorResponse, ProxyRequest, ProxyResponse},
};
use actix_web::{get, post, web, HttpResponse, Responder};
use uuid::Uuid;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("✅ Gemini proxy is running")
}

#[post("/gemini")]
pub async fn generate(
    client: web::Data<GeminiClient>,
    body: web::Json<ProxyRequest>,
) -> HttpResponse {
    let request = body.into_inner();

    // Empty strings count as absent, matching the original's falsy check.
    let prompt = request.prompt.as_deref().filter(|p| !p.is_empty());
    let image_url = request.image_url.as_deref().filter(|u| !u.is_empty());

    if prompt.is_none() && image_url.is_none() {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("prompt or imageUrl is required"));
    }

    let request_id = Uuid::new_v4().to_string();
    let _timer = logger::timer(&format!("POST /gemini [req:{}]", request_id));

    match client.generate(prompt, image_url).await {
        Ok(result) => HttpResponse::Ok().json(ProxyResponse { result }),
        Err(err) => {
            log::error!("❌ Request failed [req:{}]: {}", request_id, err);
            error_response(&err)
        }
    }
}

fn error_response(err: &GeminiError) -> HttpResponse {
    let body = ErrorResponse::new(err.to_string());
    match err {
        GeminiError::InvalidInput(_) => HttpResponse::BadRequest().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeminiConfig;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    fn test_client() -> GeminiClient {
        GeminiClient::new(GeminiConfig::new().with_api_key("test-key")).unwrap()
    }

    #[actix_web::test]
    async fn index_returns_banner() {
        let app = test::init_service(App::new().service(index)).await;
        let response =
            test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert!(response.status().is_success());
        let body = test::read_body(response).await;
        assert_eq!(body, "✅ Gemini proxy is running".as_bytes());
    }

    #[actix_web::test]
    async fn generate_rejects_missing_input() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_client()))
                .service(generate),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/gemini")
            .set_json(json!({}))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn generate_treats_empty_strings_as_missing() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_client()))
                .service(generate),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/gemini")
            .set_json(json!({"prompt": "", "imageUrl": ""}))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn error_responses_map_to_status_codes() {
        let response = error_response(&GeminiError::InvalidInput("missing".into()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = error_response(&GeminiError::ImageFetchError("timeout".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = error_response(&GeminiError::EmptyResponse);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
