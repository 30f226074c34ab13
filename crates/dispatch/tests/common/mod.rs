//! Shared test doubles for the dispatch integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use sitekit_core::element::ScriptElement;
use sitekit_dispatch::dispatcher::{RenderTarget, ScriptRunner};
use sitekit_dispatch::error::ScriptRunError;
use sitekit_dispatch::fetch::{FetchError, ManifestFetch};

/// What the fake fetch answers with, regardless of URL.
pub enum CannedResponse {
    /// 200 with this JSON body.
    Found(serde_json::Value),
    /// 404.
    NotFound,
    /// Some other HTTP status.
    Status(u16),
}

/// In-memory [`ManifestFetch`] serving a canned response and recording
/// every requested URL.
pub struct StaticFetch {
    response: CannedResponse,
    pub requests: Mutex<Vec<String>>,
}

impl StaticFetch {
    pub fn found(body: serde_json::Value) -> Self {
        Self::with(CannedResponse::Found(body))
    }

    pub fn not_found() -> Self {
        Self::with(CannedResponse::NotFound)
    }

    pub fn status(code: u16) -> Self {
        Self::with(CannedResponse::Status(code))
    }

    fn with(response: CannedResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ManifestFetch for StaticFetch {
    async fn get_json(&self, url: &str) -> Result<Option<serde_json::Value>, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match &self.response {
            CannedResponse::Found(body) => Ok(Some(body.clone())),
            CannedResponse::NotFound => Ok(None),
            CannedResponse::Status(code) => Err(FetchError::HttpStatus(*code)),
        }
    }
}

/// [`RenderTarget`] that records inserted elements in order.
#[derive(Default)]
pub struct RecordingTarget {
    pub elements: Vec<ScriptElement>,
}

impl RecordingTarget {
    pub fn srcs(&self) -> Vec<&str> {
        self.elements.iter().map(|e| e.src.as_str()).collect()
    }
}

impl RenderTarget for RecordingTarget {
    fn insert_script(&mut self, element: ScriptElement) {
        self.elements.push(element);
    }
}

/// [`ScriptRunner`] that records executed sources in order, optionally
/// failing on a matching source.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: Mutex<Vec<String>>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner that fails any script whose source contains `pattern`.
    pub fn failing_on(pattern: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(pattern.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptRunner for RecordingRunner {
    async fn run(&self, src: &str) -> Result<(), ScriptRunError> {
        self.calls.lock().unwrap().push(src.to_string());
        if let Some(pattern) = &self.fail_on {
            if src.contains(pattern.as_str()) {
                return Err(ScriptRunError("module threw".to_string()));
            }
        }
        Ok(())
    }
}
