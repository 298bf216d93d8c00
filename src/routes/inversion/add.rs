use crate::auth::{gate, Caller};
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add inversion.", skip_all, fields(user_id = caller.id))]
#[post("")]
pub async fn add_handler(
    caller: Caller,
    form: web::Json<forms::inversion::Add>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    gate::require_stored_user(&caller)?;

    if let Err(errors) = form.validate() {
        let errors = errors.to_string();
        tracing::debug!("Invalid data received {:?}", &errors);
        return Err(JsonResponse::<models::Inversion>::build().form_error(errors));
    }

    let inversion = form.to_model(caller.id);
    tracing::info!(
        investment_type = %inversion.investment_type,
        amount = inversion.amount,
        "Creating inversion for {}",
        caller.username
    );

    db::inversion::insert(pg_pool.get_ref(), inversion)
        .await
        .map(|inversion| {
            tracing::info!("Inversion {} saved for user {}", inversion.id, caller.id);
            JsonResponse::build()
                .set_id(inversion.id)
                .set_item(inversion)
                .created("Created")
        })
        .map_err(|err| JsonResponse::<models::Inversion>::build().internal_server_error(err))
}
