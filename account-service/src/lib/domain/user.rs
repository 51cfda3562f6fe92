//! User accounts keyed by Indonesian phone numbers.

pub mod errors;
pub mod models;
pub mod phone;
pub mod ports;
pub mod service;
pub mod validation;
