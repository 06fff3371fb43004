pub mod http;
pub mod repo;
