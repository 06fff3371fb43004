pub mod http;
pub mod password;
