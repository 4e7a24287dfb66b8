use super::{
    geometry::{axis_angle, central_ray, direction},
    LensParameters, Point, RayBundle, RayConfig, RayGeometry, RayName, RaySegment, Result,
    SegmentKind,
};

/// # Converging lens
///
/// Ray paths for a lens of focal length $f>0$. The image is virtual when the object
/// is inside the focal length ($f>d_o$); the rays are then traced back to the object side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converging {
    /// Object tip $(-d_o,h_o)$
    pub object: Point,
    /// Focal length magnitude
    pub focal_length: f64,
}
impl Converging {
    /// Creates a new `Converging` lens geometry
    pub fn new(params: &LensParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            object: params.object_point(),
            focal_length: params.focal_magnitude(),
        })
    }
    fn object_distance(&self) -> f64 {
        -self.object.x
    }
}
impl RayGeometry for Converging {
    fn forms_virtual_image(&self) -> bool {
        self.focal_length > self.object_distance()
    }
    /// Parallel to the axis up to the lens, then through the far focal point $(f,0)$
    fn principal_ray(&self, config: &RayConfig) -> RayBundle {
        let lens = Point::new(0f64, self.object.y);
        let u = direction(axis_angle(lens, Point::new(self.focal_length, 0f64)));
        let bundle = RayBundle::new(
            RayName::Principal,
            RaySegment::real(self.object, lens),
            RaySegment::along(lens, u, config.extension, SegmentKind::Real),
        );
        if self.forms_virtual_image() {
            bundle.virtual_extension(lens, lens - u * config.extension)
        } else {
            bundle
        }
    }
    fn central_ray(&self, config: &RayConfig) -> RayBundle {
        central_ray(self.object, config, self.forms_virtual_image())
    }
    /// Through the near focal point $(-f,0)$ up to the lens, then parallel to the axis
    fn focal_ray(&self, config: &RayConfig) -> RayBundle {
        let d_o = self.object_distance();
        let h_o = self.object.y;
        // slope of the line from the object to the near focal point
        let slope = -h_o / (d_o - self.focal_length);
        let lens = Point::new(0f64, h_o + d_o * slope);
        let bundle = RayBundle::new(
            RayName::Focal,
            RaySegment::real(self.object, lens),
            RaySegment::real(lens, Point::new(config.extension, lens.y)),
        );
        if self.forms_virtual_image() {
            bundle.virtual_extension(lens, Point::new(-config.extension, lens.y))
        } else {
            bundle
        }
    }
}
