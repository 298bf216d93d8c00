use crate::auth::{gate, Caller};
use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get inversion.", skip_all, fields(user_id = caller.id))]
#[get("/{id}")]
pub async fn item_handler(
    path: web::Path<(i32,)>,
    caller: Caller,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let inversion = db::inversion::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Inversion>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Inversion>::build().not_found("Inversion not found"))?;

    gate::authorize(&caller, &inversion)?;

    Ok(JsonResponse::build().set_item(inversion).ok("OK"))
}

/// Own inversiones for users, every inversion for the admin.
#[tracing::instrument(name = "Get all inversiones.", skip_all, fields(user_id = caller.id))]
#[get("")]
pub async fn list_handler(caller: Caller, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::inversion::fetch_by_owner(pg_pool.get_ref(), gate::owner_filter(&caller))
        .await
        .map(|inversiones| JsonResponse::build().set_list(inversiones).ok("OK"))
        .map_err(|err| JsonResponse::<models::Inversion>::build().internal_server_error(err))
}
