//! Agora - a minimal multi-agent server with well-known api-catalog discovery.

// ============================================================================
// Core Infrastructure
// ============================================================================

pub mod build_info;
pub mod config;

// ============================================================================
// Server & HTTP
// ============================================================================

pub mod api;
pub mod handlers;
pub mod server;

// ============================================================================
// Domain
// ============================================================================

pub mod agent;
pub mod catalog;

// ============================================================================
// Client
// ============================================================================

pub mod client;
