//! Adapters that drive the ingestion service

pub mod api_gateway;
