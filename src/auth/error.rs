use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Incorrect username or password")]
    BadCredentials,
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // storage details stay in the logs
            Self::Internal(_) => "Internal error".to_string(),
            other => other.to_string(),
        };

        let mut response = HttpResponse::build(self.status_code());
        if matches!(self, Self::Unauthenticated | Self::InvalidToken(_)) {
            response.insert_header(("WWW-Authenticate", "Bearer"));
        }
        response.json(json!({ "message": message }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadCredentials => StatusCode::BAD_REQUEST,
            Self::Unauthenticated | Self::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_kinds_to_status_codes() {
        assert_eq!(AuthError::BadCredentials.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::Unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::InvalidToken("expired".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Forbidden("nope".into()).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn unauthenticated_response_asks_for_bearer() {
        let response = AuthError::Unauthenticated.error_response();
        assert_eq!(
            response.headers().get("WWW-Authenticate").unwrap(),
            "Bearer"
        );
    }
}
