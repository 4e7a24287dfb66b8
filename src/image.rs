use crate::{LensError, LensParameters, Point, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpticalKind {
    Real,
    Virtual,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Upright,
    Inverted,
}
/// Image size relative to the object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    Enlarged,
    Reduced,
    /// $|m|=1$
    Unchanged,
}

/// Qualitative description of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub optical_kind: OpticalKind,
    pub orientation: Orientation,
    pub size: Size,
}
impl Classification {
    /// Classifies an image from its distance $d_i$ and magnification $m$
    ///
    /// The image is real when it forms behind the lens ($d_i>0$), inverted when $m<0$
    /// and enlarged or reduced according to $|m|$.
    /// A value that underflowed to zero keeps the sign of the exact result, so the sign bit is used.
    pub fn new(distance: f64, magnification: f64) -> Self {
        Self {
            optical_kind: if distance.is_sign_positive() {
                OpticalKind::Real
            } else {
                OpticalKind::Virtual
            },
            orientation: if magnification.is_sign_negative() {
                Orientation::Inverted
            } else {
                Orientation::Upright
            },
            size: match magnification.abs() {
                m if m > 1f64 => Size::Enlarged,
                m if m < 1f64 => Size::Reduced,
                _ => Size::Unchanged,
            },
        }
    }
}
impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optical_kind = match self.optical_kind {
            OpticalKind::Real => "Real",
            OpticalKind::Virtual => "Virtual",
        };
        let orientation = match self.orientation {
            Orientation::Upright => "upright",
            Orientation::Inverted => "inverted",
        };
        let size = match self.size {
            Size::Enlarged => "enlarged",
            Size::Reduced => "reduced",
            Size::Unchanged => "same size",
        };
        write!(f, "{} {} {}", optical_kind, orientation, size)
    }
}

/// # Thin lens image
///
/// The image distance is given by the thin lens equation:
/// $$\frac{1}{d_i} = \frac{1}{f} - \frac{1}{d_o},$$
/// with $f$ the signed focal length, and the magnification by $m=-d_i/d_o$ with $h_i=mh_o$.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageResult {
    /// Image distance $d_i$, positive behind the lens
    pub distance: f64,
    /// Image height $h_i$
    pub height: f64,
    /// Magnification $m$
    pub magnification: f64,
    pub classification: Classification,
    /// Signed focal length used to form the image
    pub focal_length: f64,
}
impl ImageResult {
    /// Computes the image of an object through a thin lens
    ///
    /// The magnification is evaluated as $m=f/(f-d_o)$ and the image distance as $d_i=-md_o$,
    /// both equivalent to the thin lens equation but free of the $1/f$ and $1/d_o$ overflows.
    pub fn compute(params: &LensParameters) -> Result<Self> {
        params.validate()?;
        let f = params.signed_focal_length();
        let d_o = params.object_distance;
        let magnification = if f.abs() >= d_o {
            // 1/(1 - d_o/f), with |d_o/f| <= 1
            let q = 1f64 - d_o / f;
            if q == 0f64 {
                return Err(LensError::UndefinedImage);
            }
            1f64 / q
        } else {
            // r/(r - 1) with r = f/d_o, |r| < 1
            let r = f / d_o;
            r / (r - 1f64)
        };
        let distance = -magnification * d_o;
        if !magnification.is_finite() || !distance.is_finite() {
            return Err(LensError::UndefinedImage);
        }
        let height = magnification * params.object_height;
        if !height.is_finite() {
            return Err(LensError::UndefinedImage);
        }
        debug!(
            "{} lens image: d_i={:.6}, m={:.6}, h_i={:.6}",
            params.kind, distance, magnification, height
        );
        Ok(Self {
            distance,
            height,
            magnification,
            classification: Classification::new(distance, magnification),
            focal_length: f,
        })
    }
    /// Tip of the image: $(d_i,h_i)$
    pub fn point(&self) -> Point {
        Point::new(self.distance, self.height)
    }
    pub fn is_virtual(&self) -> bool {
        self.classification.optical_kind == OpticalKind::Virtual
    }
}
impl fmt::Display for ImageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distance from lens to image: {:.6}", self.distance)?;
        writeln!(f, "Height of the image: {:.6}", self.height)?;
        writeln!(f, "Magnification: {:.6}", self.magnification)?;
        write!(f, "Image classification: {}", self.classification)
    }
}
