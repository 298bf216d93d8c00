use crate::auth::{gate, Caller};
use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, HttpResponse, Result};
use sqlx::PgPool;

/// Deleting an id that does not exist is still a 204.
#[tracing::instrument(name = "Delete inversion.", skip_all, fields(user_id = caller.id))]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(i32,)>,
    caller: Caller,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (id,) = path.into_inner();
    let inversion = db::inversion::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Inversion>::build().internal_server_error(err))?;

    let Some(inversion) = inversion else {
        tracing::debug!("Inversion {} already gone", id);
        return Ok(HttpResponse::NoContent().finish());
    };

    gate::authorize(&caller, &inversion)?;

    db::inversion::delete(pg_pool.get_ref(), inversion.id)
        .await
        .map(|_| HttpResponse::NoContent().finish())
        .map_err(|err| JsonResponse::<models::Inversion>::build().internal_server_error(err))
}
