//! Errors raised while building a scene.
//!
//! Tracing itself never fails; these only guard the values a caller feeds
//! into the scene before rendering starts.

use thiserror::Error;

/// Errors that can occur while describing a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Invalid material: {field} = {value}")]
    InvalidMaterial { field: &'static str, value: f32 },

    #[error("Invalid sphere radius: {0}")]
    InvalidRadius(f32),

    #[error("Non-finite coordinates for {0}")]
    NonFinite(&'static str),
}

pub type SceneResult<T> = Result<T, SceneError>;
