//! HTTP handlers for the wellness service.

pub mod health;
pub mod relay;
