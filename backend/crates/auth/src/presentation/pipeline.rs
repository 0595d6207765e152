//! Hook Pipeline
//!
//! Ordered request interceptors. Every hook receives the request event and a
//! [`Resolve`] continuation; calling [`Resolve::run`] hands the event to the
//! next hook, and after the last hook to the page handler. A hook that never
//! calls it answers the request itself.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use futures_util::future::BoxFuture;

use crate::error::AuthResult;
use crate::presentation::locals::Locals;

/// One request interceptor
pub trait Hook: Send + Sync {
    fn handle<'a>(
        &'a self,
        event: RequestEvent,
        resolve: Resolve<'a>,
    ) -> BoxFuture<'a, AuthResult<Response>>;
}

/// The request plus the context built so far
pub struct RequestEvent {
    pub request: Request<Body>,
    pub locals: Locals,
}

impl RequestEvent {
    pub fn new(request: Request<Body>) -> Self {
        Self {
            request,
            locals: Locals::new(),
        }
    }

    pub fn path(&self) -> &str {
        self.request.uri().path()
    }

    /// Same request, new context
    pub fn with_locals(self, locals: Locals) -> Self {
        Self {
            request: self.request,
            locals,
        }
    }
}

/// Continuation over the hooks that have not run yet
pub struct Resolve<'a> {
    hooks: &'a [Arc<dyn Hook>],
    next: Next,
}

impl<'a> Resolve<'a> {
    /// Run the remaining hooks, then the page handler.
    ///
    /// The page handler sees the final [`Locals`] as a request extension.
    pub fn run(self, event: RequestEvent) -> BoxFuture<'a, AuthResult<Response>> {
        Box::pin(async move {
            match self.hooks.split_first() {
                Some((hook, rest)) => {
                    let resolve = Resolve {
                        hooks: rest,
                        next: self.next,
                    };
                    hook.handle(event, resolve).await
                }
                None => {
                    let RequestEvent {
                        mut request,
                        locals,
                    } = event;
                    request.extensions_mut().insert(locals);
                    Ok(self.next.run(request).await)
                }
            }
        })
    }
}

/// Hooks composed into a single runner
#[derive(Clone, Default)]
pub struct HookPipeline {
    hooks: Arc<[Arc<dyn Hook>]>,
}

impl HookPipeline {
    /// Hooks run in the given order
    pub fn sequence(hooks: impl IntoIterator<Item = Arc<dyn Hook>>) -> Self {
        Self {
            hooks: hooks.into_iter().collect(),
        }
    }

    pub async fn run(&self, request: Request<Body>, next: Next) -> AuthResult<Response> {
        let resolve = Resolve {
            hooks: &self.hooks,
            next,
        };
        resolve.run(RequestEvent::new(request)).await
    }
}
