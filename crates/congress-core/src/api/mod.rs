pub mod client;
pub mod enrich;
pub mod models;
pub mod pagination;
