use crate::{LensKind, Parameter, RayName};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LensError {
    /// A parameter is exactly zero, leaving a ray angle undefined
    #[error("degenerate input: {0} must not be zero")]
    Degenerate(Parameter),
    #[error("invalid input: {0} must be a finite number")]
    NonFinite(Parameter),
    #[error("invalid input: object distance must be positive (got {0})")]
    NegativeObjectDistance(f64),
    #[error("invalid input: a {kind} lens cannot have the focal length {focal_length}")]
    FocalLengthSign { kind: LensKind, focal_length: f64 },
    /// The object sits on the focal point and the image is at infinity
    #[error("undefined image: the object is at the focal point, no image forms")]
    UndefinedImage,
    #[error("degenerate geometry: the {ray} ray has a non-finite endpoint")]
    DegenerateGeometry { ray: RayName },
    #[error("invalid configuration: extension length must be finite and positive (got {0})")]
    InvalidConfig(f64),
}

pub type Result<T> = std::result::Result<T, LensError>;
