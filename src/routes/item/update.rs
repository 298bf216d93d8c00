use crate::auth::{gate, Caller, ADMIN_ROLE};
use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Update item.", skip_all, fields(user_id = caller.id))]
#[put("/{id}")]
pub async fn update_handler(
    path: web::Path<(i32,)>,
    form: web::Json<forms::item::Edit>,
    caller: Caller,
    settings: web::Data<Settings>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let mut item = db::item::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<views::item::Item>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<views::item::Item>::build().not_found("Item not found"))?;

    gate::authorize(&caller, &item)?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::item::Item>::build().form_error(errors.to_string()));
    }

    if let Some(role) = &form.role {
        gate::require_admin(&caller)?;
        // the admin role belongs to the configured account only
        if role == ADMIN_ROLE {
            return Err(JsonResponse::<views::item::Item>::build()
                .bad_request("The admin role cannot be assigned"));
        }
    }

    if let Some(name) = &form.name {
        if *name == settings.auth.admin_username {
            return Err(JsonResponse::<views::item::Item>::build().bad_request("Name is reserved"));
        }
        let taken = db::item::fetch_by_name(pg_pool.get_ref(), name)
            .await
            .map_err(|err| JsonResponse::<views::item::Item>::build().internal_server_error(err))?
            .is_some_and(|other| other.id != item.id);
        if taken {
            return Err(JsonResponse::<views::item::Item>::build().conflict("Name already registered"));
        }
    }

    form.into_inner().update(&mut item);

    db::item::update(pg_pool.get_ref(), item)
        .await
        .map(|item| {
            JsonResponse::build()
                .set_item(views::item::Item::from(item))
                .ok("success")
        })
        .map_err(|err| JsonResponse::<views::item::Item>::build().store_error(err))
}
