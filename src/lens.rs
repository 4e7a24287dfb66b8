use crate::{LensError, Point, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lens kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LensKind {
    Converging,
    Diverging,
}
impl LensKind {
    /// Sign applied to the focal length magnitude: $+1$ for converging and $-1$ for diverging lenses
    pub fn sign(&self) -> f64 {
        match self {
            LensKind::Converging => 1f64,
            LensKind::Diverging => -1f64,
        }
    }
}
impl Default for LensKind {
    fn default() -> Self {
        LensKind::Converging
    }
}
impl fmt::Display for LensKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LensKind::Converging => write!(f, "converging"),
            LensKind::Diverging => write!(f, "diverging"),
        }
    }
}

/// Names of the lens parameters, used to report invalid inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parameter {
    ObjectHeight,
    ObjectDistance,
    FocalLength,
}
impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::ObjectHeight => write!(f, "object height"),
            Parameter::ObjectDistance => write!(f, "object distance"),
            Parameter::FocalLength => write!(f, "focal length"),
        }
    }
}

/// # Lens parameters
///
/// An object of height $h_o$ standing at the distance $d_o$ from a thin lens of focal length $f$.
///
/// The signed focal length is $\pm|f|$, positive for a converging lens and negative for a diverging one.
/// A diverging lens accepts its focal length either as a magnitude or with its negative sign;
/// a converging lens with a negative focal length is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensParameters {
    /// Object height $h_o$, positive above the optical axis
    pub object_height: f64,
    /// Object distance to the lens $d_o$
    pub object_distance: f64,
    /// Focal length $f$
    pub focal_length: f64,
    /// Lens kind
    pub kind: LensKind,
}
impl Default for LensParameters {
    fn default() -> Self {
        Self {
            object_height: 100f64,
            object_distance: 300f64,
            focal_length: 50f64,
            kind: LensKind::Converging,
        }
    }
}
impl LensParameters {
    /// Creates new validated `LensParameters`
    pub fn new(
        object_height: f64,
        object_distance: f64,
        focal_length: f64,
        kind: LensKind,
    ) -> Result<Self> {
        let params = Self {
            object_height,
            object_distance,
            focal_length,
            kind,
        };
        params.validate()?;
        Ok(params)
    }
    pub fn kind(self, kind: LensKind) -> Self {
        Self { kind, ..self }
    }
    /// Checks that all parameters are finite and non-zero, that the object distance is positive
    /// and that a converging lens has a positive focal length
    pub fn validate(&self) -> Result<()> {
        for (value, parameter) in [
            (self.object_height, Parameter::ObjectHeight),
            (self.object_distance, Parameter::ObjectDistance),
            (self.focal_length, Parameter::FocalLength),
        ]
        .iter()
        {
            if !value.is_finite() {
                return Err(LensError::NonFinite(*parameter));
            }
            if *value == 0f64 {
                return Err(LensError::Degenerate(*parameter));
            }
        }
        if self.object_distance < 0f64 {
            return Err(LensError::NegativeObjectDistance(self.object_distance));
        }
        if self.kind == LensKind::Converging && self.focal_length < 0f64 {
            return Err(LensError::FocalLengthSign {
                kind: self.kind,
                focal_length: self.focal_length,
            });
        }
        Ok(())
    }
    /// Signed focal length: $|f|$ for a converging lens, $-|f|$ for a diverging lens
    pub fn signed_focal_length(&self) -> f64 {
        self.kind.sign() * self.focal_length.abs()
    }
    /// Focal length magnitude $|f|$
    pub fn focal_magnitude(&self) -> f64 {
        self.focal_length.abs()
    }
    /// Tip of the object: $(-d_o,h_o)$
    pub fn object_point(&self) -> Point {
        Point::new(-self.object_distance, self.object_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn sign_convention() {
        let params = LensParameters::default();
        assert_eq!(params.signed_focal_length(), 50.);
        assert_eq!(params.kind(LensKind::Diverging).signed_focal_length(), -50.);
        let params = LensParameters::new(100., 300., -50., LensKind::Diverging).unwrap();
        assert_eq!(params.signed_focal_length(), -50.);
    }
    #[test]
    fn zero_parameters() {
        assert_eq!(
            LensParameters::new(0., 300., 50., LensKind::Converging),
            Err(LensError::Degenerate(Parameter::ObjectHeight))
        );
        assert_eq!(
            LensParameters::new(100., 0., 50., LensKind::Diverging),
            Err(LensError::Degenerate(Parameter::ObjectDistance))
        );
        assert_eq!(
            LensParameters::new(100., 300., 0., LensKind::Converging),
            Err(LensError::Degenerate(Parameter::FocalLength))
        );
    }
    #[test]
    fn invalid_parameters() {
        assert_eq!(
            LensParameters::new(f64::NAN, 300., 50., LensKind::Converging),
            Err(LensError::NonFinite(Parameter::ObjectHeight))
        );
        assert_eq!(
            LensParameters::new(100., 300., f64::INFINITY, LensKind::Converging),
            Err(LensError::NonFinite(Parameter::FocalLength))
        );
        assert_eq!(
            LensParameters::new(100., -300., 50., LensKind::Converging),
            Err(LensError::NegativeObjectDistance(-300.))
        );
    }
    #[test]
    fn converging_negative_focal_length() {
        assert_eq!(
            LensParameters::new(100., 300., -50., LensKind::Converging),
            Err(LensError::FocalLengthSign {
                kind: LensKind::Converging,
                focal_length: -50.
            })
        );
        let params = LensParameters {
            focal_length: -50.,
            ..Default::default()
        };
        assert!(crate::ImageResult::compute(&params).is_err());
        assert!(LensParameters::new(100., 300., -50., LensKind::Diverging).is_ok());
    }
    #[test]
    fn object_below_axis() {
        let params = LensParameters::new(-20., 300., 50., LensKind::Converging).unwrap();
        assert_eq!(params.object_point(), Point::new(-300., -20.));
    }
}
