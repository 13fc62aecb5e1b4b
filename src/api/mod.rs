mod auth;
pub mod error;
pub(crate) mod http;
pub mod session;
