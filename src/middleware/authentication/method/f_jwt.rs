use crate::auth::{self, AuthError, TokenCodec};
use crate::configuration::Settings;
use crate::middleware::authentication::get_header;
use actix_web::dev::ServiceRequest;
use actix_web::{web, HttpMessage};
use sqlx::PgPool;

#[tracing::instrument(name = "Authenticate with bearer token", skip_all)]
pub async fn try_jwt(req: &mut ServiceRequest) -> Result<bool, AuthError> {
    let authorization =
        get_header::<String>(req, "authorization").map_err(AuthError::InvalidToken)?;
    let Some(authorization) = authorization else {
        return Ok(false);
    };

    // Not a Bearer token, try other auth methods
    let Ok(token) = auth::extract_bearer_token(&authorization) else {
        return Ok(false);
    };

    let codec = app_data::<TokenCodec>(req)?;
    let settings = app_data::<Settings>(req)?;
    let pg_pool = app_data::<PgPool>(req)?;

    let caller = auth::resolve(token, &codec, &settings.auth, pg_pool.get_ref()).await?;
    tracing::info!(
        user_id = caller.id,
        role = %caller.role,
        "Bearer authentication successful"
    );

    if req.extensions_mut().insert(caller).is_some() {
        return Err(AuthError::Internal("caller already resolved".to_string()));
    }

    Ok(true)
}

fn app_data<T: 'static>(req: &ServiceRequest) -> Result<web::Data<T>, AuthError> {
    req.app_data::<web::Data<T>>().cloned().ok_or_else(|| {
        AuthError::Internal(format!(
            "{} is not registered as app data",
            std::any::type_name::<T>()
        ))
    })
}
