use crate::auth::{gate, Caller};
use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{delete, web, HttpResponse, Result};
use sqlx::PgPool;

/// Deleting an id that does not exist is still a 204.
#[tracing::instrument(name = "Delete item.", skip_all, fields(user_id = caller.id))]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(i32,)>,
    caller: Caller,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (id,) = path.into_inner();
    let Some(item) = db::item::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<views::item::Item>::build().internal_server_error(err))?
    else {
        return Ok(HttpResponse::NoContent().finish());
    };

    gate::authorize(&caller, &item)?;

    db::item::delete(pg_pool.get_ref(), item.id)
        .await
        .map(|_| HttpResponse::NoContent().finish())
        .map_err(|err| JsonResponse::<views::item::Item>::build().internal_server_error(err))
}
