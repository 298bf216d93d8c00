use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::ops::Deref;

/// Public registration. New accounts always get the default role.
#[tracing::instrument(name = "Register item.", skip_all, fields(name = %form.name))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::item::Add>,
    settings: web::Data<Settings>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::item::Item>::build().form_error(errors.to_string()));
    }

    if form.name == settings.auth.admin_username {
        return Err(JsonResponse::<views::item::Item>::build().bad_request("Name is reserved"));
    }

    let existing = db::item::fetch_by_name(pg_pool.get_ref(), &form.name)
        .await
        .map_err(|err| JsonResponse::<views::item::Item>::build().internal_server_error(err))?;
    if let Some(existing) = existing {
        tracing::info!("Item name already taken by {}", existing.id);
        return Err(JsonResponse::<views::item::Item>::build().conflict("Name already registered"));
    }

    let item: models::Item = form.deref().into();
    db::item::insert(pg_pool.get_ref(), item)
        .await
        .map(|item| {
            JsonResponse::build()
                .set_id(item.id)
                .set_item(views::item::Item::from(item))
                .created("Created")
        })
        .map_err(|err| JsonResponse::<views::item::Item>::build().store_error(err))
}
