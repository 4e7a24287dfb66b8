use super::{
    Converging, Diverging, ImageResult, LensKind, LensParameters, Point, RayBundle, RayConfig,
    RayGeometry, RayName, RaySegment, Result, SegmentKind,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};
use tracing::debug;

/// # Ray diagram
///
/// The canonical rays of a thin lens and the image they form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub params: LensParameters,
    pub rays: BTreeMap<RayName, RayBundle>,
    pub image: ImageResult,
}
impl Diagram {
    /// Creates a new `Diagram` with the default ray configuration
    pub fn new(params: &LensParameters) -> Result<Self> {
        build_diagram(params, &RayConfig::default())
    }
    /// Tip of the object: $(-d_o,h_o)$
    pub fn object_point(&self) -> Point {
        self.params.object_point()
    }
    /// Tip of the image: $(d_i,h_i)$
    pub fn image_point(&self) -> Point {
        self.image.point()
    }
    /// Iterates over the segments of all the rays
    pub fn segments(&self) -> impl Iterator<Item = &RaySegment> {
        self.rays.values().flat_map(|ray| ray.segments.iter())
    }
    /// Iterates over the segments of a given kind of all the rays
    pub fn segments_of(&self, kind: SegmentKind) -> impl Iterator<Item = &RaySegment> {
        self.segments().filter(move |s| s.kind == kind)
    }
}
impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} lens: h_o={}, d_o={}, f={}",
            self.params.kind,
            self.params.object_height,
            self.params.object_distance,
            self.image.focal_length
        )?;
        for ray in self.rays.values() {
            write!(f, "{}", ray)?;
        }
        write!(f, "{}", self.image)
    }
}

/// Computes the ray diagram of a thin lens
///
/// The ray geometry is selected according to the lens kind and bundled with the image.
pub fn build_diagram(params: &LensParameters, config: &RayConfig) -> Result<Diagram> {
    let image = ImageResult::compute(params)?;
    let rays = match params.kind {
        LensKind::Converging => Converging::new(params)?.rays(config)?,
        LensKind::Diverging => Diverging::new(params)?.rays(config)?,
    };
    debug!(
        "{} lens diagram: {} rays, {} segments",
        params.kind,
        rays.len(),
        rays.values().map(RayBundle::len).sum::<usize>()
    );
    Ok(Diagram {
        params: *params,
        rays,
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LensError, OpticalKind};

    #[test]
    fn converging() {
        let diagram = Diagram::new(&LensParameters::default()).unwrap();
        assert_eq!(diagram.rays.len(), 3);
        assert_eq!(diagram.segments().count(), 6);
        assert_eq!(diagram.segments_of(SegmentKind::VirtualExtension).count(), 0);
        assert_eq!(diagram.image.classification.optical_kind, OpticalKind::Real);
        assert_eq!(diagram.object_point(), Point::new(-300., 100.));
    }
    #[test]
    fn diverging() {
        let params = LensParameters::default().kind(LensKind::Diverging);
        let diagram = Diagram::new(&params).unwrap();
        assert_eq!(diagram.segments_of(SegmentKind::VirtualExtension).count(), 3);
        assert!(diagram.image_point().x < 0.);
    }
    #[test]
    fn undefined_image_first() {
        let params = LensParameters::new(100., 50., 50., LensKind::Converging).unwrap();
        assert_eq!(
            build_diagram(&params, &RayConfig::default()),
            Err(LensError::UndefinedImage)
        );
    }
    #[test]
    fn invalid_config() {
        let config = RayConfig { extension: -1. };
        assert_eq!(
            build_diagram(&LensParameters::default(), &config),
            Err(LensError::InvalidConfig(-1.))
        );
    }
    #[test]
    fn display() {
        let text = Diagram::new(&LensParameters::default()).unwrap().to_string();
        assert!(text.starts_with("converging lens: h_o=100, d_o=300, f=50"));
        assert!(text.contains("principal ray:"));
        assert!(text.ends_with("Image classification: Real inverted reduced"));
    }
}
