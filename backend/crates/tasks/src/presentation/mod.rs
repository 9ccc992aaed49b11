//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and auth middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::TaskAppState;
pub use middleware::{AuthenticatedUser, require_identity};
pub use router::{task_router, task_router_generic};
