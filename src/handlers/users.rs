//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 핸들러는 `/api/users` 스코프 아래에 등록됩니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/users` | 사용자 생성 | 201 Created |
//! | `GET` | `/api/users` | 전체 목록 | 200 OK |
//! | `GET` | `/api/users/filter?type=EDITOR` | 유형별 목록 | 200 OK |
//! | `GET` | `/api/users/{id}` | 단건 조회 | 200 OK / 404 |
//! | `PUT` | `/api/users/{id}` | 전체 수정 | 200 OK / 404 |
//! | `DELETE` | `/api/users/{id}` | 삭제 | 204 No Content / 404 |
//!
//! ## 요청 처리 흐름
//!
//! ```text
//! web::Json<UserRequest> ─ validate() ─▶ UserDto::try_from ─▶ UserService
//!                              │                 │                 │
//!                              ▼                 ▼                 ▼
//!                     FieldValidation   MalformedEnumValue   NotFound / IntegrityConflict
//! ```
//!
//! 모든 실패는 `AppError`로 전파되어 `ResponseError` 구현이 JSON 에러
//! 페이로드로 변환합니다.
//!
//! ## Spring Boot와의 비교
//!
//! | Spring Boot | 이 모듈 |
//! |-------------|---------|
//! | `@PostMapping` + `ResponseEntity.status(CREATED)` | `#[post("")]` + `HttpResponse::Created()` |
//! | `@Valid @RequestBody UserRequest` | `web::Json<UserRequest>` + `validate()?` |
//! | `@PathVariable Long id` | `web::Path<i64>` |
//! | `@RequestParam("type") UserType` | `web::Query<UserTypeQuery>` |
//! | `@Autowired UserUseCase` | `web::Data<UserService>` |

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::{UserDto, UserEnvelope, UserRequest, UserResponse};
use crate::domain::entities::users::UserType;
use crate::services::users::UserService;

/// `GET /api/users/filter?type=...` 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct UserTypeQuery {
    #[serde(rename = "type")]
    pub user_type: UserType,
}

/// 검증을 통과한 요청 본문을 서비스 입력으로 변환합니다.
fn into_dto(payload: web::Json<UserRequest>) -> Result<UserDto, AppError> {
    let request = payload.into_inner();
    request.validate()?;
    Ok(UserDto::try_from(request)?)
}

fn into_responses(users: Vec<UserDto>) -> Vec<UserResponse> {
    users.into_iter().map(UserResponse::from).collect()
}

#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = into_dto(payload)?;
    let created = service.create(user).await?;

    Ok(HttpResponse::Created().json(UserEnvelope::created(created)))
}

#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.find_all().await?;

    Ok(HttpResponse::Ok().json(into_responses(users)))
}

/// `/{id}`보다 먼저 등록되어야 합니다.
#[get("/filter")]
pub async fn filter_users(
    service: web::Data<UserService>,
    query: web::Query<UserTypeQuery>,
) -> Result<HttpResponse, AppError> {
    let users = service.find_by_user_type(query.user_type).await?;

    Ok(HttpResponse::Ok().json(into_responses(users)))
}

#[get("/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = service.find_by_id(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[put("/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let changes = into_dto(payload)?;
    let updated = service.update(id.into_inner(), changes).await?;

    Ok(HttpResponse::Ok().json(UserEnvelope::updated(updated)))
}

#[delete("/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, middleware, test as actix_test, web};
    use serde_json::{Value, json};

    use crate::repositories::users::InMemoryUserRepository;
    use crate::routes::configure_all_routes;
    use crate::services::users::UserService;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
        App::new()
            .app_data(web::Data::new(service))
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    }

    fn user_body(email: &str, user_type: &str) -> Value {
        json!({
            "fullName": "Ana Souza",
            "email": email,
            "phone": "+55 11 99999-9999",
            "birthDate": "1990-05-17",
            "userType": user_type
        })
    }

    async fn send(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        request: actix_test::TestRequest,
    ) -> (StatusCode, Value) {
        let response = actix_test::call_service(app, request.to_request()).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).expect("json body")
        };
        (status, value)
    }

    fn create(body: &Value) -> actix_test::TestRequest {
        actix_test::TestRequest::post().uri("/api/users").set_json(body)
    }

    #[actix_web::test]
    async fn test_create_user_returns_envelope() {
        let app = actix_test::init_service(test_app()).await;

        let (status, body) = send(&app, create(&user_body("ana@example.com", "ADMIN"))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "user created successfully!");
        assert_eq!(body["result"]["id"], 1);
        assert_eq!(body["result"]["fullName"], "Ana Souza");
        assert_eq!(body["result"]["userType"], "ADMIN");
    }

    #[actix_web::test]
    async fn test_create_user_with_empty_body_reports_field_errors() {
        let app = actix_test::init_service(test_app()).await;

        let (status, body) = send(&app, create(&json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "validation errors");
        assert_eq!(body["status"], 400);
        assert_eq!(body["errors"]["fullName"], "full name is required");
        assert_eq!(body["errors"]["email"], "email is required");
        assert_eq!(body["errors"]["phone"], "phone cannot be null or empty");
        assert_eq!(body["errors"]["birthDate"], "birth date is required");
        assert_eq!(
            body["errors"]["userType"],
            "invalid user type. use one of (ADMIN, EDITOR, VIEWER)"
        );
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_create_user_with_bad_phone() {
        let app = actix_test::init_service(test_app()).await;
        let mut payload = user_body("ana@example.com", "ADMIN");
        payload["phone"] = json!("11999999999");

        let (status, body) = send(&app, create(&payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"]["phone"], "invalid format, use: +55 11 99999-9999");
        assert_eq!(body["errors"].as_object().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_user_with_duplicate_email() {
        let app = actix_test::init_service(test_app()).await;
        send(&app, create(&user_body("dup@example.com", "ADMIN"))).await;

        let (status, body) = send(&app, create(&user_body("dup@example.com", "VIEWER"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "a user with this email is already registered.");
        assert!(body.get("errors").is_none());
    }

    #[actix_web::test]
    async fn test_malformed_json_is_field_formatting_error() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"fullName": "Ana", "birthDate": "17/05/1990"}"#);

        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "field formatting error");
    }

    #[actix_web::test]
    async fn test_get_missing_user_is_not_found() {
        let app = actix_test::init_service(test_app()).await;

        let (status, body) = send(&app, actix_test::TestRequest::get().uri("/api/users/999")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "user not found");
        assert_eq!(body["status"], 404);
        assert!(body.get("errors").is_none());
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_invalid_parameter() {
        let app = actix_test::init_service(test_app()).await;

        let (status, body) = send(&app, actix_test::TestRequest::get().uri("/api/users/abc")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "invalid parameter.");
    }

    #[actix_web::test]
    async fn test_list_and_filter_users() {
        let app = actix_test::init_service(test_app()).await;
        send(&app, create(&user_body("ed1@example.com", "EDITOR"))).await;
        send(&app, create(&user_body("ad@example.com", "ADMIN"))).await;
        send(&app, create(&user_body("ed2@example.com", "EDITOR"))).await;

        let (status, all) = send(&app, actix_test::TestRequest::get().uri("/api/users")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().unwrap().len(), 3);

        let (status, editors) =
            send(&app, actix_test::TestRequest::get().uri("/api/users/filter?type=EDITOR")).await;
        assert_eq!(status, StatusCode::OK);
        let editors = editors.as_array().unwrap();
        assert_eq!(editors.len(), 2);
        assert!(editors.iter().all(|user| user["userType"] == "EDITOR"));

        let (status, viewers) =
            send(&app, actix_test::TestRequest::get().uri("/api/users/filter?type=VIEWER")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(viewers.as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_filter_with_unknown_type_lists_accepted_values() {
        let app = actix_test::init_service(test_app()).await;

        let (status, body) =
            send(&app, actix_test::TestRequest::get().uri("/api/users/filter?type=SUPERUSER")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "invalid user type. accepted values: [ADMIN, EDITOR, VIEWER]"
        );
    }

    #[actix_web::test]
    async fn test_update_user() {
        let app = actix_test::init_service(test_app()).await;
        send(&app, create(&user_body("ana@example.com", "VIEWER"))).await;

        let changes = json!({
            "fullName": "Paula Mendes",
            "email": "paula@example.com",
            "phone": "+55 21 98888-7777",
            "birthDate": "1985-11-02",
            "userType": "EDITOR"
        });
        let request = actix_test::TestRequest::put().uri("/api/users/1").set_json(&changes);
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "user updated successfully!");
        assert_eq!(body["result"]["id"], 1);
        assert_eq!(body["result"]["fullName"], "Paula Mendes");
        assert_eq!(body["result"]["birthDate"], "1985-11-02");
        assert_eq!(body["result"]["userType"], "EDITOR");
    }

    #[actix_web::test]
    async fn test_update_missing_user_is_not_found() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::put()
            .uri("/api/users/42")
            .set_json(user_body("ghost@example.com", "ADMIN"));
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "user not found");
    }

    #[actix_web::test]
    async fn test_delete_user() {
        let app = actix_test::init_service(test_app()).await;
        send(&app, create(&user_body("ana@example.com", "ADMIN"))).await;

        let (status, body) = send(&app, actix_test::TestRequest::delete().uri("/api/users/1")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_null());

        let (status, _) = send(&app, actix_test::TestRequest::get().uri("/api/users/1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, actix_test::TestRequest::delete().uri("/api/users/1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "user not found");
    }
}
