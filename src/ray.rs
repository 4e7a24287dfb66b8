use super::{Point, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical rays of a thin lens diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RayName {
    /// Leaves the object parallel to the axis
    Principal,
    /// Goes through the lens center
    Central,
    /// Goes through (or is aimed at) a focal point and leaves the lens parallel to the axis
    Focal,
}
impl RayName {
    pub const ALL: [RayName; 3] = [RayName::Principal, RayName::Central, RayName::Focal];
}
impl fmt::Display for RayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RayName::Principal => write!(f, "principal"),
            RayName::Central => write!(f, "central"),
            RayName::Focal => write!(f, "focal"),
        }
    }
}

/// Style hint for renderers: a real path or the backward extension locating a virtual image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    Real,
    VirtualExtension,
}

/// # Ray segment
///
/// A straight line from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaySegment {
    pub start: Point,
    pub end: Point,
    pub kind: SegmentKind,
}
impl RaySegment {
    pub fn real(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            kind: SegmentKind::Real,
        }
    }
    pub fn virtual_extension(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            kind: SegmentKind::VirtualExtension,
        }
    }
    /// Segment from `start` along the direction `u` over the distance `s`
    ///
    /// The direction vector is normalized first: $\vec{p^\prime} = \vec p + s \frac{\vec u}{\|\vec u\|}$
    pub fn along(start: Point, u: Vector, s: f64, kind: SegmentKind) -> Self {
        Self {
            start,
            end: start + u.normalize() * s,
            kind,
        }
    }
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
    pub fn is_finite(&self) -> bool {
        [self.start.x, self.start.y, self.end.x, self.end.y]
            .iter()
            .all(|x| x.is_finite())
    }
}
impl fmt::Display for RaySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            SegmentKind::Real => "real",
            SegmentKind::VirtualExtension => "virtual",
        };
        write!(
            f,
            "{:<7}: [{:+15.6},{:+15.6}] -> [{:+15.6},{:+15.6}]",
            kind, self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}

/// # Ray bundle
///
/// The segments of one canonical ray, in order:
///  - the incident ray from the object to the lens,
///  - the refracted ray leaving the lens,
///  - the virtual extension, only if the ray is traced back to a virtual image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayBundle {
    pub name: RayName,
    pub segments: Vec<RaySegment>,
}
impl RayBundle {
    /// Creates a new `RayBundle` from the incident and refracted segments
    pub fn new(name: RayName, incident: RaySegment, refracted: RaySegment) -> Self {
        Self {
            name,
            segments: vec![incident, refracted],
        }
    }
    /// Appends a virtual extension to the bundle
    pub fn virtual_extension(self, start: Point, end: Point) -> Self {
        let mut segments = self.segments;
        segments.push(RaySegment::virtual_extension(start, end));
        Self { segments, ..self }
    }
    pub fn incident(&self) -> Option<&RaySegment> {
        self.segments.first()
    }
    pub fn refracted(&self) -> Option<&RaySegment> {
        self.segments.get(1)
    }
    pub fn extension(&self) -> Option<&RaySegment> {
        self.segments.get(2)
    }
    pub fn len(&self) -> usize {
        self.segments.len()
    }
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
    pub fn segments_of(&self, kind: SegmentKind) -> impl Iterator<Item = &RaySegment> {
        self.segments.iter().filter(move |s| s.kind == kind)
    }
    pub fn is_finite(&self) -> bool {
        self.segments.iter().all(RaySegment::is_finite)
    }
}
impl fmt::Display for RayBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ray:", self.name)?;
        for segment in &self.segments {
            writeln!(f, "  {}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn along() {
        let s = RaySegment::along(
            Point::new(1., 1.),
            Vector::new(3., 4.),
            10.,
            SegmentKind::Real,
        );
        assert_relative_eq!(s.end.x, 7.);
        assert_relative_eq!(s.end.y, 9.);
        assert_relative_eq!(s.length(), 10.);
    }
    #[test]
    fn bundle() {
        let o = Point::origin();
        let bundle = RayBundle::new(
            RayName::Central,
            RaySegment::real(Point::new(-1., 1.), o),
            RaySegment::real(o, Point::new(1., -1.)),
        );
        assert_eq!(bundle.len(), 2);
        assert!(bundle.extension().is_none());
        let bundle = bundle.virtual_extension(Point::new(-1., 1.), Point::new(-2., 2.));
        assert_eq!(bundle.len(), 3);
        assert_eq!(bundle.segments_of(SegmentKind::Real).count(), 2);
        assert_eq!(
            bundle.extension().map(|s| s.kind),
            Some(SegmentKind::VirtualExtension)
        );
        assert!(bundle.is_finite());
    }
    #[test]
    fn short_bundle() {
        let json = r#"{"name":"Focal","segments":[{"start":[-1.0,1.0],"end":[0.0,1.0],"kind":"Real"}]}"#;
        let bundle: RayBundle = serde_json::from_str(json).unwrap();
        assert_eq!(bundle.incident().map(|s| s.end), Some(Point::new(0., 1.)));
        assert!(bundle.refracted().is_none());
        assert!(bundle.extension().is_none());
    }
    #[test]
    fn not_finite() {
        let s = RaySegment::real(Point::origin(), Point::new(f64::INFINITY, 0.));
        assert!(!s.is_finite());
    }
}
