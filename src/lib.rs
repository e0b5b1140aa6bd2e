pub mod classifier;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod features;
pub mod model;
pub mod ranking;
pub mod search;
// cmd and reports belong to the binary (main.rs).
