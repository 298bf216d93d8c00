//! Bearer-token authentication and ownership scoping.
//!
//! - [`token`] signs and verifies HS256 access tokens
//! - [`identity`] checks credentials and turns verified claims into a [`Caller`]
//! - [`gate`] holds the role and ownership predicates every handler goes through

mod error;
pub mod gate;
pub mod identity;
pub mod token;

pub use error::AuthError;
pub use gate::{Owned, ADMIN_ID, ADMIN_ROLE, DEFAULT_ROLE};
pub use identity::{authenticate, resolve, Caller, Identity};
pub use token::{extract_bearer_token, Claims, TokenCodec};
