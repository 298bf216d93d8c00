use crate::auth::Caller;
use actix_web::{get, web, Responder, Result};

/// Claims of the presented token.
#[tracing::instrument(name = "Get profile.", skip_all, fields(user_id = caller.id))]
#[get("/profile")]
pub async fn profile_handler(caller: Caller) -> Result<impl Responder> {
    Ok(web::Json(caller.claims.as_ref().clone()))
}
