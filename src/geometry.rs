use super::{LensError, Point, RayBundle, RayName, RaySegment, Result, SegmentKind, Vector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Default length of the rays drawn beyond the lens
pub const DEFAULT_EXTENSION: f64 = 1000f64;

/// # Ray configuration
///
/// `extension` is the length, in diagram units, of the refracted rays and of the virtual extensions.
/// It is independent of the size of any drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayConfig {
    pub extension: f64,
}
impl Default for RayConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION,
        }
    }
}
impl RayConfig {
    pub fn new(extension: f64) -> Result<Self> {
        let config = Self { extension };
        config.validate()?;
        Ok(config)
    }
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_finite() && self.extension > 0f64 {
            Ok(())
        } else {
            Err(LensError::InvalidConfig(self.extension))
        }
    }
}

/// Unit vector making the angle `angle` with the optical axis
pub fn direction(angle: f64) -> Vector {
    Vector::new(angle.cos(), angle.sin())
}
/// Angle between the line from `p` to `q` and the optical axis
pub fn axis_angle(p: Point, q: Point) -> f64 {
    let u = q - p;
    u.y.atan2(u.x)
}

/// Central ray: a straight line through the lens center
///
/// For a virtual image, the ray is extended backward from the object, continuing the line
/// through the lens center. With a diverging lens the image lies between the object and the lens,
/// on the incident segment itself, so this extension runs away from it and only prolongs the line.
pub fn central_ray(object: Point, config: &RayConfig, virtual_image: bool) -> RayBundle {
    let center = Point::origin();
    let u = direction(axis_angle(object, center));
    let bundle = RayBundle::new(
        RayName::Central,
        RaySegment::real(object, center),
        RaySegment::along(center, u, config.extension, SegmentKind::Real),
    );
    if virtual_image {
        bundle.virtual_extension(object, object - u * config.extension)
    } else {
        bundle
    }
}

/// Ray paths of a thin lens
///
/// The lens is at the origin of the diagram, the object tip at $(-d_o,h_o)$.
pub trait RayGeometry {
    fn principal_ray(&self, config: &RayConfig) -> RayBundle;
    fn central_ray(&self, config: &RayConfig) -> RayBundle;
    fn focal_ray(&self, config: &RayConfig) -> RayBundle;
    /// Whether the rays are traced back to a virtual image
    fn forms_virtual_image(&self) -> bool;
    /// Computes the named ray, failing if any of its endpoints is not finite
    fn ray(&self, name: RayName, config: &RayConfig) -> Result<RayBundle> {
        let bundle = match name {
            RayName::Principal => self.principal_ray(config),
            RayName::Central => self.central_ray(config),
            RayName::Focal => self.focal_ray(config),
        };
        if bundle.is_finite() {
            debug!("{} ray: {} segments", name, bundle.len());
            Ok(bundle)
        } else {
            Err(LensError::DegenerateGeometry { ray: name })
        }
    }
    /// Computes the three canonical rays
    fn rays(&self, config: &RayConfig) -> Result<BTreeMap<RayName, RayBundle>> {
        config.validate()?;
        RayName::ALL
            .iter()
            .map(|&name| self.ray(name, config).map(|bundle| (name, bundle)))
            .collect()
    }
}
