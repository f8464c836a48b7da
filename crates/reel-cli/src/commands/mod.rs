pub mod ask;
pub mod audit;
pub mod config;
pub mod dispatch;
pub mod ingest;
pub mod policy;
pub mod schema;
