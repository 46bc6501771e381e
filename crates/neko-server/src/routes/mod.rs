//! Neko API Routes
//!
//! - /callback - LINE webhook receiver
//! - /health - Health check
//! - /swagger-ui - OpenAPI documentation

pub mod callback;
pub mod swagger;
