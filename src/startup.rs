use crate::auth::TokenCodec;
use crate::configuration::Settings;
use crate::middleware;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpRequest, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let token_codec = web::Data::new(TokenCodec::from_settings(&settings.auth));
    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        // FormConfig keeps its handler in an Rc, so each worker builds its own
        let form_config = web::FormConfig::default().error_handler(form_error_handler);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::authentication::Manager::new())
            .wrap(actix_web::middleware::Compress::default())
            .wrap(Cors::permissive())
            .wrap(actix_web::middleware::NormalizePath::trim())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(routes::login::token_handler)
            .service(web::scope("/users").service(routes::users::profile_handler))
            .service(web::scope("/admin").service(routes::admin::dashboard_handler))
            .service(
                web::scope("/items")
                    .service(routes::item::list_handler)
                    .service(routes::item::item_handler)
                    .service(routes::item::add_handler)
                    .service(routes::item::update_handler)
                    .service(routes::item::delete_handler),
            )
            .service(
                web::scope("/inversiones")
                    .service(routes::inversion::list_handler)
                    .service(routes::inversion::item_handler)
                    .service(routes::inversion::add_handler)
                    .service(routes::inversion::update_handler)
                    .service(routes::inversion::delete_handler),
            )
            .app_data(json_config.clone())
            .app_data(form_config)
            .app_data(pg_pool.clone())
            .app_data(token_codec.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

fn form_error_handler(err: error::UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    error::InternalError::new(
        format!("{{\"kind\":\"form\",\"msg\":\"{}\"}}", err),
        http::StatusCode::BAD_REQUEST,
    )
    .into()
}
