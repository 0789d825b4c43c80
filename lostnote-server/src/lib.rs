//! Lost Note Server Library
//!
//! This module exports the server components for testing and reuse.

pub mod config;
pub mod handlers;
pub mod nav;
pub mod routes;
pub mod seo;
pub mod shell;
pub mod state;
