pub(crate) mod auth_user;
pub(crate) mod json;
