pub mod aggregate;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod skip;
pub mod translate;

#[cfg(test)]
mod diff_test;
