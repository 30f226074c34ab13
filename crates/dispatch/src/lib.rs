//! Custom-script manifest fetching and dispatch.
//!
//! [`ManifestLoader`](loader::ManifestLoader) fetches and shape-checks
//! `custom-scripts.json`; [`ScriptDispatcher`](dispatcher::ScriptDispatcher)
//! classifies entries by trigger and executes them through injected
//! collaborators: a [`RenderTarget`](dispatcher::RenderTarget) for
//! load-time static injection and a [`ScriptRunner`](dispatcher::ScriptRunner)
//! for navigate-time dynamic execution.

pub mod dispatcher;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod render;
