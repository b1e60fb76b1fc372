//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate entity calls into caller-facing APIs.
//! - Keep UI layers decoupled from storage and normalization details.

pub mod app_service;
pub mod query;
