//! Concrete implementations of the outbound ports backed by aws

pub mod dynamodb;
pub mod s3;
