//! Validation and ordering of the two writes, independent of the aws clients

pub mod models;
pub mod ports;
pub mod service;
