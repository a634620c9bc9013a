//! # hwbot-api
//!
//! Client for the homework review API and validation of its answers.

pub mod client;
pub mod response;
