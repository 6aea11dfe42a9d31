use std::net::TcpListener;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::web::{self, Data};
use actix_web::{test, App, HttpRequest, HttpResponse, HttpServer};
use docgen_common::model::TemplateSchema;
use docgen_common::requests::{parse_generation_response, ProxyFailure};
use docgen_common::AppError;
use serde_json::{json, Value};

use super::upstream::Upstream;
use super::{generator, templates};

async fn fake_templates(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().json(json!([{
        "_id": "nda",
        "name": "Mutual NDA",
        "category": "contracts",
        "description": req.query_string(),
        "version": "1.0.0",
        "fields": [
            { "name": "party_a", "label": "Party A", "type": "text", "is_pii": true }
        ]
    }]))
}

async fn fake_render(body: web::Json<Value>) -> HttpResponse {
    let party = body["inputs"]["party_a"].as_str().unwrap_or_default();
    if party.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "detail": "party_a is required" }));
    }
    HttpResponse::Created().json(json!({
        "document_id": "doc-1",
        "template_id": body["template_id"],
        "template_name": "Mutual NDA",
        "template_version": "1.0.0",
        "generated_text": format!("Agreement with {}", party),
        "generated_at": "2024-05-01T10:00:00Z",
        "metadata": { "placeholder_keys": ["PERSON_1"] }
    }))
}

/// Starts the fake document service on an ephemeral port and returns its URL.
fn start_fake_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(|| {
        App::new()
            .route("/api/templates", web::get().to(fake_templates))
            .route("/api/generator/render", web::post().to(fake_render))
    })
    .workers(1)
    .listen(listener)
    .unwrap()
    .run();
    actix_web::rt::spawn(server);
    format!("http://{}", addr)
}

/// A base URL nothing listens on.
fn unreachable_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn upstream(base_url: String) -> Data<Upstream> {
    Data::new(Upstream::new(base_url, Duration::from_secs(5)).unwrap())
}

#[actix_web::test]
async fn catalog_is_relayed_with_query_string() {
    let app = test::init_service(
        App::new()
            .app_data(upstream(start_fake_upstream()))
            .service(templates::configure_routes()),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/templates?category=contracts")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let templates: Vec<TemplateSchema> = test::read_body_json(resp).await;
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].id, "nda");
    assert_eq!(templates[0].description, "category=contracts");
    assert_eq!(templates[0].version.to_string(), "1.0.0");
    assert!(templates[0].fields[0].is_pii);
}

#[actix_web::test]
async fn generation_is_forwarded_to_render_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(upstream(start_fake_upstream()))
            .service(generator::configure_routes()),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generator")
        .set_json(json!({
            "template_id": "nda",
            "user_id": "user-1",
            "inputs": { "party_a": "Acme Corp" },
            "output_format": "text"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["document_id"], "doc-1");
    assert_eq!(body["template_id"], "nda");
    assert_eq!(body["generated_text"], "Agreement with Acme Corp");
}

#[actix_web::test]
async fn upstream_error_status_and_detail_pass_through() {
    let app = test::init_service(
        App::new()
            .app_data(upstream(start_fake_upstream()))
            .service(generator::configure_routes()),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generator")
        .set_json(json!({
            "template_id": "nda",
            "user_id": "user-1",
            "inputs": { "party_a": "" },
            "output_format": "text"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    assert_eq!(status, 400);

    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert_eq!(
        parse_generation_response(status, body),
        Err(AppError::Generation("party_a is required".to_string()))
    );
}

#[actix_web::test]
async fn unreachable_catalog_answers_500_with_message() {
    let app = test::init_service(
        App::new()
            .app_data(upstream(unreachable_upstream()))
            .service(templates::configure_routes()),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/templates").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let failure: ProxyFailure = test::read_body_json(resp).await;
    assert_eq!(failure.message, "Failed to load templates");
    assert!(!failure.error.is_empty());
}

#[actix_web::test]
async fn unreachable_generator_answers_500_with_message() {
    let app = test::init_service(
        App::new()
            .app_data(upstream(unreachable_upstream()))
            .service(generator::configure_routes()),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generator")
        .set_json(json!({ "template_id": "nda", "user_id": "u", "inputs": {}, "output_format": "text" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let failure: ProxyFailure = test::read_body_json(resp).await;
    assert_eq!(failure.message, "Failed to generate document");
}

#[::core::prelude::v1::test]
fn upstream_url_keeps_query() {
    let upstream = Upstream::new("http://svc", Duration::from_secs(1)).unwrap();
    assert_eq!(upstream.url("/api/templates", ""), "http://svc/api/templates");
    assert_eq!(upstream.url("/api/templates", "a=1"), "http://svc/api/templates?a=1");
}
