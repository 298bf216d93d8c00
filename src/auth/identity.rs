use crate::auth::gate::{ADMIN_ID, ADMIN_ROLE};
use crate::auth::{AuthError, Claims, TokenCodec};
use crate::configuration::AuthSettings;
use crate::db;
use crate::models;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use sqlx::PgPool;
use std::future::{ready, Ready};
use std::ops::Deref;
use std::sync::Arc;

/// The authenticated principal of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl Identity {
    pub fn admin(settings: &AuthSettings) -> Self {
        Self {
            id: ADMIN_ID,
            username: settings.admin_username.clone(),
            email: settings.admin_email.clone(),
            role: ADMIN_ROLE.to_string(),
        }
    }
}

impl From<&models::Item> for Identity {
    fn from(item: &models::Item) -> Self {
        Self {
            id: item.id,
            username: item.name.clone(),
            email: item.email.clone(),
            role: item.role.clone(),
        }
    }
}

impl From<&Identity> for Claims {
    fn from(identity: &Identity) -> Self {
        Claims::new(
            identity.username.clone(),
            identity.email.clone(),
            identity.role.clone(),
            Some(identity.id),
        )
    }
}

/// Resolved identity together with the claims it was resolved from.
/// Placed in request extensions by the authentication middleware.
#[derive(Debug, Clone)]
pub struct Caller {
    pub identity: Arc<Identity>,
    pub claims: Arc<Claims>,
}

impl Deref for Caller {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.identity
    }
}

impl FromRequest for Caller {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Caller>()
                .cloned()
                .ok_or(AuthError::Unauthenticated),
        )
    }
}

fn is_admin_login(username: &str, settings: &AuthSettings) -> bool {
    username == settings.admin_username
}

/// Checks a username/password pair and returns the claims to sign.
///
/// The configured admin account is checked first and never touches the
/// store. Everyone else is looked up by name.
#[tracing::instrument(name = "Check credentials.", skip(password, settings, pool))]
pub async fn authenticate(
    username: &str,
    password: &str,
    settings: &AuthSettings,
    pool: &PgPool,
) -> Result<Claims, AuthError> {
    if is_admin_login(username, settings) {
        if password != settings.admin_password {
            tracing::warn!("Wrong password for the admin account");
            return Err(AuthError::BadCredentials);
        }
        return Ok((&Identity::admin(settings)).into());
    }

    let item = db::item::fetch_by_name(pool, username)
        .await
        .map_err(AuthError::Internal)?;

    match item {
        Some(item) if item.password == password => Ok((&Identity::from(&item)).into()),
        _ => {
            tracing::info!("Rejected credentials");
            Err(AuthError::BadCredentials)
        }
    }
}

/// The admin identity, if these claims were issued for the admin account.
pub fn admin_from_claims(claims: &Claims, settings: &AuthSettings) -> Option<Identity> {
    (is_admin_login(&claims.username, settings) && claims.role == ADMIN_ROLE)
        .then(|| Identity::admin(settings))
}

/// The stored user behind the claims. Names can be released and taken again,
/// so the row must also be the account the token was issued for.
fn stored_identity(claims: &Claims, item: Option<models::Item>) -> Result<Identity, AuthError> {
    let Some(item) = item else {
        tracing::info!("Token names an unknown user");
        return Err(AuthError::Unauthenticated);
    };

    if claims.id != Some(item.id) {
        tracing::warn!(
            claimed_id = ?claims.id,
            stored_id = item.id,
            "Token was issued for another account"
        );
        return Err(AuthError::Unauthenticated);
    }

    Ok(Identity::from(&item))
}

/// Decodes a bearer token and maps it onto the current user record.
pub async fn resolve(
    token: &str,
    codec: &TokenCodec,
    settings: &AuthSettings,
    pool: &PgPool,
) -> Result<Caller, AuthError> {
    let claims = codec.decode(token).map_err(|err| {
        tracing::debug!("Token rejected: {}", err);
        err
    })?;

    let identity = match admin_from_claims(&claims, settings) {
        Some(admin) => admin,
        None => {
            let item = db::item::fetch_by_name(pool, &claims.username)
                .await
                .map_err(AuthError::Internal)?;
            stored_identity(&claims, item)?
        }
    };

    Ok(Caller {
        identity: Arc::new(identity),
        claims: Arc::new(claims),
    })
}
