//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate engine dispatch, history recording and snapshot
//!   persistence into the facade API used by UI/transport collaborators.
//! - Keep callers decoupled from storage details.

pub mod database_service;
