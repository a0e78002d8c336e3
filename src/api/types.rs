//! Shared types for the API layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine::Engine;

/// Shared context for all API routes. The engine is read-only after
/// startup, so cloning the context is just an `Arc` bump.
#[derive(Clone)]
pub struct ApiContext {
    pub engine: Arc<Engine>,
}

impl ApiContext {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }
}

/// Body of `POST /recommend`. A missing or empty list is valid input; the
/// encoder then produces the all-zero vector and the classifier resolves
/// it to whatever class it assigns to no symptoms.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub symptoms: usize,
    pub diseases: usize,
}

#[derive(Serialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<&'static str>,
}
