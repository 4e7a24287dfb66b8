//!
//! # Thin Lens Ray Diagrams
//!
//! Paraxial image formation and canonical ray geometry for a single thin lens.
//!
//! The diagram space is centered on the lens: the optical axis is the $x$ axis,
//! light travels toward $+x$, the object stands at $x=-d_o$ and $y$ is up.
//!
//! ```
//! use thin_lens::{build_diagram, LensKind, LensParameters, RayConfig, RayName};
//!
//! let params = LensParameters::new(100., 300., 50., LensKind::Converging).unwrap();
//! let diagram = build_diagram(&params, &RayConfig::default()).unwrap();
//! assert!((diagram.image.distance - 60.).abs() < 1e-9);
//! assert_eq!(diagram.rays[&RayName::Central].len(), 2);
//! ```

pub mod converging;
pub mod diagram;
pub mod diverging;
pub mod error;
pub mod geometry;
pub mod image;
pub mod lens;
pub mod ray;
pub use converging::Converging;
pub use diagram::{build_diagram, Diagram};
pub use diverging::Diverging;
pub use error::{LensError, Result};
pub use geometry::{RayConfig, RayGeometry, DEFAULT_EXTENSION};
pub use image::{Classification, ImageResult, OpticalKind, Orientation, Size};
pub use lens::{LensKind, LensParameters, Parameter};
pub use ray::{RayBundle, RayName, RaySegment, SegmentKind};

/// A point of the diagram plane, in the same units as the lens parameters
pub type Point = nalgebra::Point2<f64>;
/// A direction of the diagram plane
pub type Vector = nalgebra::Vector2<f64>;
