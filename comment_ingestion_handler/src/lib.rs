//! Lambda that ingests tenant comments.
//! The raw request body is pushed to s3 first, then the normalized record is
//! written to dynamodb.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
