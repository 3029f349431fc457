use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

use crate::models::{AuthResponse, ErrorResponse, LoginRequest, SignupRequest, UserView};
use crate::routes::listings::AppState;
use crate::services::{AuthError, Session};

/// Configure all auth-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/signup", web::post().to(signup))
        .route("/auth/login", web::post().to(login))
        .route("/auth/session", web::get().to(session));
}

fn session_response(session: Session) -> AuthResponse {
    AuthResponse {
        token: session.token,
        user: UserView {
            id: session.user.id,
            email: session.user.email,
            name: session.user.name,
        },
    }
}

fn auth_failure(error: &AuthError) -> HttpResponse {
    let status_code = match error {
        AuthError::AlreadyExists => 409,
        AuthError::NoSuchUser => 404,
        AuthError::InvalidCredentials => 401,
        AuthError::Hash(_) | AuthError::Token(_) => 500,
    };

    let body = ErrorResponse {
        error: "Authentication failed".to_string(),
        message: error.to_string(),
        status_code,
    };

    match status_code {
        409 => HttpResponse::Conflict().json(body),
        404 => HttpResponse::NotFound().json(body),
        401 => HttpResponse::Unauthorized().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

/// Signup endpoint
///
/// POST /api/v1/auth/signup
///
/// Request body:
/// ```json
/// {
///   "email": "string",
///   "password": "string",
///   "name": "string"
/// }
/// ```
async fn signup(state: web::Data<AppState>, req: web::Json<SignupRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .auth
        .sign_up(&req.email, &req.password, req.name.as_deref())
    {
        Ok(session) => HttpResponse::Ok().json(session_response(session)),
        Err(error) => {
            tracing::info!("Signup rejected: {}", error);
            auth_failure(&error)
        }
    }
}

/// Login endpoint
///
/// POST /api/v1/auth/login
async fn login(state: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.auth.sign_in(&req.email, &req.password) {
        Ok(session) => HttpResponse::Ok().json(session_response(session)),
        Err(error) => {
            tracing::info!("Login rejected: {}", error);
            auth_failure(&error)
        }
    }
}

/// Session introspection endpoint
///
/// GET /api/v1/auth/session with an `Authorization: Bearer <token>` header.
async fn session(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let token = match token {
        Some(token) => token,
        None => {
            return HttpResponse::Unauthorized().json(ErrorResponse {
                error: "Missing token".to_string(),
                message: "Authorization: Bearer <token> header is required".to_string(),
                status_code: 401,
            });
        }
    };

    match state.auth.verify_token(token) {
        Ok(claims) => HttpResponse::Ok().json(serde_json::json!({
            "user": UserView {
                id: claims.sub,
                email: claims.email,
                name: claims.name,
            },
            "expiresAt": claims.exp,
        })),
        Err(error) => HttpResponse::Unauthorized().json(ErrorResponse {
            error: "Invalid token".to_string(),
            message: error.to_string(),
            status_code: 401,
        }),
    }
}
