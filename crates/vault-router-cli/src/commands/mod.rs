pub mod export;
pub mod resolve;
pub mod routes;
