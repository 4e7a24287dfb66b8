use super::{
    geometry::{axis_angle, central_ray, direction},
    LensParameters, Point, RayBundle, RayConfig, RayGeometry, RayName, RaySegment, Result,
    SegmentKind,
};

/// # Diverging lens
///
/// Ray paths for a lens of focal length $f<0$.
/// A diverging lens always forms a virtual image on the object side,
/// so every ray is traced back from the lens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diverging {
    /// Object tip $(-d_o,h_o)$
    pub object: Point,
    /// Focal length magnitude $|f|$
    pub focal_length: f64,
}
impl Diverging {
    /// Creates a new `Diverging` lens geometry
    pub fn new(params: &LensParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            object: params.object_point(),
            focal_length: params.focal_magnitude(),
        })
    }
}
impl RayGeometry for Diverging {
    fn forms_virtual_image(&self) -> bool {
        true
    }
    /// Parallel to the axis up to the lens, then away from the axis as if coming from the near focal point $(-|f|,0)$
    fn principal_ray(&self, config: &RayConfig) -> RayBundle {
        let lens = Point::new(0f64, self.object.y);
        let focal_point = Point::new(-self.focal_length, 0f64);
        let u = direction(axis_angle(focal_point, lens));
        RayBundle::new(
            RayName::Principal,
            RaySegment::real(self.object, lens),
            RaySegment::along(lens, u, config.extension, SegmentKind::Real),
        )
        .virtual_extension(lens, focal_point)
    }
    fn central_ray(&self, config: &RayConfig) -> RayBundle {
        central_ray(self.object, config, true)
    }
    /// Aimed at the far focal point $(|f|,0)$, then parallel to the axis
    fn focal_ray(&self, config: &RayConfig) -> RayBundle {
        let d_o = -self.object.x;
        let h_o = self.object.y;
        let slope = -h_o / (d_o + self.focal_length);
        let lens = Point::new(0f64, h_o + d_o * slope);
        RayBundle::new(
            RayName::Focal,
            RaySegment::real(self.object, lens),
            RaySegment::real(lens, Point::new(config.extension, lens.y)),
        )
        .virtual_extension(lens, Point::new(-config.extension, lens.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImageResult, LensKind};
    use approx::assert_relative_eq;

    #[test]
    fn rays() {
        let params = LensParameters::new(100., 300., 50., LensKind::Diverging).unwrap();
        let lens = Diverging::new(&params).unwrap();
        let config = RayConfig::default();
        let rays = lens.rays(&config).unwrap();
        assert!(rays.values().all(|ray| ray.len() == 3));
        let p = &rays[&RayName::Principal];
        assert_eq!(p.incident().unwrap().end, Point::new(0., 100.));
        // refracted away from the axis
        assert!(p.refracted().unwrap().end.y > 100.);
        assert_relative_eq!(
            p.refracted().unwrap().length(),
            config.extension,
            max_relative = 1e-12
        );
        assert_eq!(p.extension().unwrap().end, Point::new(-50., 0.));
        let f = &rays[&RayName::Focal];
        assert_relative_eq!(f.refracted().unwrap().start.y, 100. / 7., max_relative = 1e-12);
    }
    #[test]
    fn extensions_meet_at_image() {
        for &(h_o, d_o, f) in &[(100., 300., 50.), (-20., 40., 80.), (5., 10., 10.)] {
            let params = LensParameters::new(h_o, d_o, f, LensKind::Diverging).unwrap();
            let image = ImageResult::compute(&params).unwrap();
            let lens = Diverging::new(&params).unwrap();
            for ray in lens.rays(&RayConfig::default()).unwrap().values() {
                let e = ray.extension().unwrap();
                let t = (image.distance - e.start.x) / (e.end.x - e.start.x);
                let y = e.start.y + t * (e.end.y - e.start.y);
                assert_relative_eq!(y, image.height, epsilon = 1e-9);
            }
        }
    }
    #[test]
    fn central_image_on_incident_segment() {
        let params = LensParameters::new(100., 300., 50., LensKind::Diverging).unwrap();
        let image = ImageResult::compute(&params).unwrap();
        let ray = Diverging::new(&params)
            .unwrap()
            .central_ray(&RayConfig::default());
        let incident = ray.incident().unwrap();
        // the image tip is on the incident segment, between the object and the lens
        assert!(incident.start.x < image.distance && image.distance < incident.end.x);
        let t = (image.distance - incident.start.x) / (incident.end.x - incident.start.x);
        let y = incident.start.y + t * (incident.end.y - incident.start.y);
        assert_relative_eq!(y, image.height, epsilon = 1e-9);
        // the extension starts at the object and moves away from the image
        let e = ray.extension().unwrap();
        assert_eq!(e.start, incident.start);
        assert!(e.end.x < e.start.x);
    }
    #[test]
    fn negative_focal_length_input() {
        let a = LensParameters::new(100., 300., 50., LensKind::Diverging).unwrap();
        let b = LensParameters::new(100., 300., -50., LensKind::Diverging).unwrap();
        assert_eq!(Diverging::new(&a).unwrap(), Diverging::new(&b).unwrap());
    }
}
