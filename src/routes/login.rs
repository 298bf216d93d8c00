use crate::auth::{self, TokenCodec};
use crate::configuration::Settings;
use crate::forms;
use crate::views;
use actix_web::{post, web, Responder, Result};
use sqlx::PgPool;

/// Exchanges a form-encoded username/password for a bearer token.
#[tracing::instrument(name = "Issue access token.", skip_all, fields(username = %form.username))]
#[post("/token")]
pub async fn token_handler(
    form: web::Form<forms::LoginForm>,
    settings: web::Data<Settings>,
    codec: web::Data<TokenCodec>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let claims =
        auth::authenticate(&form.username, &form.password, &settings.auth, pg_pool.get_ref())
            .await?;
    let access_token = codec.issue(claims)?;

    Ok(web::Json(views::token::AccessToken::bearer(access_token)))
}
