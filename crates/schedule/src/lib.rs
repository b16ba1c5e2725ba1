pub mod engine;
pub mod generator;
pub mod tracker;
