//! Image rendering seam.
//!
//! The core never touches pixels. Image posts carry a path-like content
//! string, and showing the picture is delegated to an [`ImageRenderer`]
//! implementation; all the core needs back is ok-or-not-found.

use std::path::Path;
use thiserror::Error;

/// Errors from the image collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("the picture not found in {0}")]
    NotFound(String),
}

/// Capability for showing an image post's picture.
pub trait ImageRenderer: Send + Sync {
    /// Render the picture at `path`.
    fn render(&self, path: &str) -> Result<(), RenderError>;
}

/// Renderer backed by the local filesystem.
///
/// A picture renders iff the file exists; nothing is actually drawn.
#[derive(Debug, Default)]
pub struct FsRenderer;

impl ImageRenderer for FsRenderer {
    fn render(&self, path: &str) -> Result<(), RenderError> {
        if Path::new(path).is_file() {
            Ok(())
        } else {
            Err(RenderError::NotFound(path.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn existing_file_renders() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not really a png").unwrap();
        let renderer = FsRenderer;
        assert!(renderer.render(file.path().to_str().unwrap()).is_ok());
    }

    #[test]
    fn missing_file_is_not_found() {
        let renderer = FsRenderer;
        let err = renderer.render("/nonexistent/sunset.png").unwrap_err();
        assert_eq!(err, RenderError::NotFound("/nonexistent/sunset.png".into()));
        assert_eq!(err.to_string(), "the picture not found in /nonexistent/sunset.png");
    }

    #[test]
    fn directory_does_not_render() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = FsRenderer;
        assert!(renderer.render(dir.path().to_str().unwrap()).is_err());
    }
}
