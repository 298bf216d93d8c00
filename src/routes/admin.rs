use crate::auth::{gate, Caller};
use actix_web::{get, web, Responder, Result};
use serde_json::json;

#[tracing::instrument(name = "Admin dashboard.", skip_all, fields(user_id = caller.id))]
#[get("/dashboard")]
pub async fn dashboard_handler(caller: Caller) -> Result<impl Responder> {
    gate::require_admin(&caller)?;

    Ok(web::Json(json!({
        "message": format!("Welcome to the admin dashboard, {}", caller.username),
        "rol": caller.role,
    })))
}
