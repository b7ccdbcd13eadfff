//! Shared fixtures for flocknet integration tests.
#![allow(dead_code)]

use flocknet::render::{ImageRenderer, RenderError};
use flocknet::{Config, Network};
use std::sync::Arc;

/// Renderer that recognizes a fixed set of paths; no filesystem involved.
pub struct StubRenderer {
    known: Vec<String>,
}

impl ImageRenderer for StubRenderer {
    fn render(&self, path: &str) -> Result<(), RenderError> {
        if self.known.iter().any(|k| k == path) {
            Ok(())
        } else {
            Err(RenderError::NotFound(path.to_string()))
        }
    }
}

/// Network with default limits and the filesystem renderer.
pub fn network(name: &str) -> Network {
    Network::new(name)
}

/// Network whose renderer only knows the given paths.
pub fn network_with_pictures(name: &str, known: &[&str]) -> Network {
    let mut config = Config::default();
    config.network.name = name.to_string();
    let renderer = StubRenderer {
        known: known.iter().map(|s| s.to_string()).collect(),
    };
    Network::with_renderer(&config, Arc::new(renderer))
}
