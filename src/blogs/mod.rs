pub mod http;
pub mod list_helper;
pub mod repo;
