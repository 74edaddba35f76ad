//! API 라우트 설정 모듈
//!
//! 사용자 CRUD 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//! 핸들러는 `web::Data<UserService>`를 app data로 요구하므로
//! `App`에 서비스를 먼저 등록해야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes)
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::handlers::rejections::{json_config, path_config, query_config};

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Extractor 실패도 JSON 에러 페이로드로 응답
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config());

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/users` - 사용자 생성
/// - `GET /api/users` - 전체 목록
/// - `GET /api/users/filter?type={ADMIN|EDITOR|VIEWER}` - 유형별 목록
/// - `GET /api/users/{id}` - 단건 조회
/// - `PUT /api/users/{id}` - 전체 수정
/// - `DELETE /api/users/{id}` - 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"fullName":"Ana Souza","email":"ana@example.com","phone":"+55 11 99999-9999","birthDate":"1990-05-17","userType":"ADMIN"}'
///
/// curl http://localhost:8080/api/users/filter?type=EDITOR
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            // `/filter`가 `/{id}`에 먼저 매칭되지 않도록 앞에 등록
            .service(handlers::users::filter_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_management_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
