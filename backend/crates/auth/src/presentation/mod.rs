//! Presentation Layer
//!
//! Hook pipeline, request locals, middleware and layout data.

pub mod hooks;
pub mod layout;
pub mod locals;
pub mod middleware;
pub mod pipeline;

pub use hooks::{AuthGuardHook, SupabaseHook, auth_pipeline};
pub use layout::{CookieEntry, LayoutData};
pub use locals::{Locals, SessionMaterializer};
pub use middleware::handle;
pub use pipeline::{Hook, HookPipeline, RequestEvent, Resolve};
