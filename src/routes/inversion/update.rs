use crate::auth::{gate, Caller};
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Update inversion.", skip_all, fields(user_id = caller.id))]
#[put("/{id}")]
pub async fn update_handler(
    path: web::Path<(i32,)>,
    form: web::Json<forms::inversion::Edit>,
    caller: Caller,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let mut inversion = db::inversion::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Inversion>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Inversion>::build().not_found("Inversion not found"))?;

    gate::authorize(&caller, &inversion)?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Inversion>::build().form_error(errors.to_string()));
    }

    form.into_inner().update(&mut inversion);
    tracing::debug!("Updating {}", inversion);

    db::inversion::update(pg_pool.get_ref(), inversion)
        .await
        .map(|inversion| JsonResponse::build().set_item(inversion).ok("success"))
        .map_err(|err| JsonResponse::<models::Inversion>::build().store_error(err))
}
