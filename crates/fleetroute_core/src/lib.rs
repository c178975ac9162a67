pub mod aggregator;
pub mod classifier;
pub mod distance;
pub mod error;
pub mod geometry;
pub mod payload;
pub mod pipeline;
pub mod request;
pub mod schema;
pub mod segment;
pub mod temporal;
