//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into shell-facing use-case APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod contact_service;
