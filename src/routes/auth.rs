use actix_web::{web, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;

use crate::errors::FrontendError;
use crate::middleware::session::Session;
use crate::models::user::{LoginInput, RegisterInput, RegisterRequest, TokenResponse};
use crate::services::booking_service::is_valid_email;
use crate::services::upstream::Upstreams;

const LOGIN_FAILED: &str = "Đăng nhập thất bại. Vui lòng thử lại.";
const REGISTER_FAILED: &str = "Đăng ký thất bại. Vui lòng thử lại.";
const PASSWORD_MISMATCH: &str = "Mật khẩu không khớp";
const TERMS_REQUIRED: &str = "Vui lòng đồng ý với điều khoản dịch vụ";
const INVALID_EMAIL: &str = "Email không hợp lệ";
const MISSING_PASSWORD: &str = "Vui lòng nhập mật khẩu";
const MISSING_NAME: &str = "Vui lòng nhập họ và tên";

/// Form state echoed back on a failed login or register. Passwords are
/// never echoed.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthFormError {
    error: String,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
    submitting: bool,
}

impl AuthFormError {
    fn response(err: &FrontendError, fallback: &str, email: &str) -> HttpResponse {
        HttpResponse::build(err.status_code()).json(AuthFormError {
            error: err.user_message(fallback),
            email: email.to_string(),
            first_name: None,
            last_name: None,
            submitting: false,
        })
    }
}

fn signed_in(token: TokenResponse) -> HttpResponse {
    match Session::init(token.token) {
        Some(session) => HttpResponse::Ok()
            .cookie(session.cookie())
            .json(json!({ "token": session.token(), "redirect": "/" })),
        None => {
            log::error!("User service issued an unusable token");
            FrontendError::network("user", "unusable token").error_response()
        }
    }
}

pub fn validate_login(input: &LoginInput) -> Result<(), FrontendError> {
    if !is_valid_email(&input.email) {
        return Err(FrontendError::validation(INVALID_EMAIL));
    }
    if input.password.is_empty() {
        return Err(FrontendError::validation(MISSING_PASSWORD));
    }
    Ok(())
}

pub fn validate_register(input: &RegisterInput) -> Result<(), FrontendError> {
    if input.first_name.trim().is_empty() || input.last_name.trim().is_empty() {
        return Err(FrontendError::validation(MISSING_NAME));
    }
    if !is_valid_email(&input.email) {
        return Err(FrontendError::validation(INVALID_EMAIL));
    }
    if input.password.is_empty() {
        return Err(FrontendError::validation(MISSING_PASSWORD));
    }
    if input.password != input.confirm_password {
        return Err(FrontendError::validation(PASSWORD_MISMATCH));
    }
    if !input.agree_terms {
        return Err(FrontendError::validation(TERMS_REQUIRED));
    }
    Ok(())
}

/*
    /api/auth/login (POST)
*/
pub async fn login(input: web::Json<LoginInput>, upstreams: web::Data<Upstreams>) -> HttpResponse {
    let mut input = input.into_inner();
    input.email = input.email.trim().to_string();

    if let Err(err) = validate_login(&input) {
        return AuthFormError::response(&err, LOGIN_FAILED, &input.email);
    }

    match upstreams.users.login(&input).await {
        Ok(token) => {
            log::info!("Signed in {}", input.email);
            signed_in(token)
        }
        Err(err) => {
            log::warn!("Login for {} failed: {}", input.email, err);
            AuthFormError::response(&err, LOGIN_FAILED, &input.email)
        }
    }
}

/*
    /api/auth/register (POST)
*/
pub async fn register(
    input: web::Json<RegisterInput>,
    upstreams: web::Data<Upstreams>,
) -> HttpResponse {
    let input = input.into_inner();

    let result = match validate_register(&input) {
        Ok(()) => upstreams.users.register(&RegisterRequest::from(&input)).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(token) => {
            log::info!("Registered {}", input.email.trim());
            signed_in(token)
        }
        Err(err) => {
            log::warn!("Register for {} failed: {}", input.email.trim(), err);
            HttpResponse::build(err.status_code()).json(AuthFormError {
                error: err.user_message(REGISTER_FAILED),
                email: input.email,
                first_name: Some(input.first_name),
                last_name: Some(input.last_name),
                submitting: false,
            })
        }
    }
}

/*
    /api/auth/logout (POST)
*/
pub async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(Session::clear_cookie())
        .json(json!({ "redirect": "/" }))
}

/*
    /api/auth/session (signed in)
*/
pub async fn session(
    session: Session,
    upstreams: web::Data<Upstreams>,
) -> Result<HttpResponse, FrontendError> {
    match upstreams.users.profile(&session).await {
        Ok(profile) => Ok(HttpResponse::Ok().json(json!({
            "displayName": profile.display_name(),
            "profile": profile,
        }))),
        // A token the user service no longer accepts ends the session.
        Err(FrontendError::Unauthorized) => {
            let mut response = FrontendError::Unauthorized.error_response();
            if let Err(err) = response.add_cookie(&Session::clear_cookie()) {
                log::error!("Failed to clear session cookie: {}", err);
            }
            Ok(response)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_input() -> RegisterInput {
        RegisterInput {
            first_name: "An".into(),
            last_name: "Nguyễn".into(),
            email: "an@example.com".into(),
            password: "matkhau123".into(),
            confirm_password: "matkhau123".into(),
            agree_terms: true,
        }
    }

    #[test]
    fn test_register_validation() {
        assert!(validate_register(&register_input()).is_ok());

        let mut input = register_input();
        input.confirm_password = "khac".into();
        assert_eq!(
            validate_register(&input).unwrap_err().to_string(),
            PASSWORD_MISMATCH
        );

        let mut input = register_input();
        input.agree_terms = false;
        assert_eq!(validate_register(&input).unwrap_err().to_string(), TERMS_REQUIRED);
    }

    #[test]
    fn test_login_validation() {
        let input = LoginInput {
            email: "an@example.com".into(),
            password: String::new(),
        };
        assert_eq!(validate_login(&input).unwrap_err().to_string(), MISSING_PASSWORD);

        let input = LoginInput {
            email: "an".into(),
            password: "x".into(),
        };
        assert_eq!(validate_login(&input).unwrap_err().to_string(), INVALID_EMAIL);
    }
}
