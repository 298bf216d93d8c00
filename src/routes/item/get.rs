use crate::auth::{gate, Caller};
use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get item.", skip_all, fields(user_id = caller.id))]
#[get("/{id}")]
pub async fn item_handler(
    path: web::Path<(i32,)>,
    caller: Caller,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let item = db::item::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<views::item::Item>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<views::item::Item>::build().not_found("Item not found"))?;

    gate::authorize(&caller, &item)?;

    Ok(JsonResponse::build()
        .set_item(views::item::Item::from(item))
        .ok("OK"))
}

#[tracing::instrument(name = "Admin get all items.", skip_all, fields(user_id = caller.id))]
#[get("")]
pub async fn list_handler(caller: Caller, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    gate::require_admin(&caller)?;

    db::item::fetch_all(pg_pool.get_ref())
        .await
        .map(|items| {
            let items = items.into_iter().map(Into::into).collect::<Vec<views::item::Item>>();
            JsonResponse::build().set_list(items).ok("OK")
        })
        .map_err(|err| JsonResponse::<views::item::Item>::build().internal_server_error(err))
}
