//! The closed set of surface kinds the translator can bound.
//!
//! Construction from a source description is the only way to obtain a
//! `Surface`, and it is where unsupported geometry is rejected: the general
//! cone and asymmetric tori fail here, never at emission, and are never
//! approximated.

pub mod types;

#[cfg(test)]
mod tests_construction;

pub use types::{
    BoundaryType, ClippingPolicy, Extents, HalfSpaceNode, Side, SourceSurface, SurfaceMeta,
};

use crate::geometry::{Vector3, EPSILON};
use crate::{TranslateError, TranslateResult};

/// Apex location and squared slope of an axis-aligned cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCone {
    pub x0: f64,
    pub y0: f64,
    pub z0: f64,
    pub r2: f64,
}

impl AxisCone {
    pub fn apex(&self) -> Vector3 {
        Vector3::new(self.x0, self.y0, self.z0)
    }
}

/// Center and radii of an axis-aligned torus with equal minor radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTorus {
    pub x0: f64,
    pub y0: f64,
    pub z0: f64,
    pub major: f64,
    pub minor: f64,
}

impl AxisTorus {
    fn validated(
        surface_id: u32,
        kind: &'static str,
        x0: f64,
        y0: f64,
        z0: f64,
        a: f64,
        b: f64,
        c: f64,
    ) -> TranslateResult<Self> {
        if b != c {
            return Err(TranslateError::unsupported(
                surface_id,
                kind,
                "tori with unequal minor radii are not supported",
            ));
        }
        Ok(Self {
            x0,
            y0,
            z0,
            major: a,
            minor: b,
        })
    }

    pub fn center(&self) -> Vector3 {
        Vector3::new(self.x0, self.y0, self.z0)
    }
}

/// One supported surface kind with its analytic coefficients.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceKind {
    /// General plane `ax + by + cz = d`.
    Plane { a: f64, b: f64, c: f64, d: f64 },
    XPlane { x0: f64 },
    YPlane { y0: f64 },
    ZPlane { z0: f64 },
    /// Cylinder with an arbitrary axis direction through `(x0, y0, z0)`.
    Cylinder {
        x0: f64,
        y0: f64,
        z0: f64,
        r: f64,
        dx: f64,
        dy: f64,
        dz: f64,
    },
    XCylinder { y0: f64, z0: f64, r: f64 },
    YCylinder { x0: f64, z0: f64, r: f64 },
    ZCylinder { x0: f64, y0: f64, r: f64 },
    Sphere { x0: f64, y0: f64, z0: f64, r: f64 },
    XCone(AxisCone),
    YCone(AxisCone),
    ZCone(AxisCone),
    XTorus(AxisTorus),
    YTorus(AxisTorus),
    ZTorus(AxisTorus),
}

/// A surface ready for compilation: analytic coefficients plus identity
/// and boundary bookkeeping. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub id: u32,
    pub name: String,
    pub boundary: BoundaryType,
    pub kind: SurfaceKind,
}

impl Surface {
    /// Pure field-by-name mapping from a source description.
    pub fn from_source(src: &SourceSurface) -> TranslateResult<Self> {
        let meta = src.meta();
        let kind = match *src {
            SourceSurface::Plane { a, b, c, d, .. } => SurfaceKind::Plane { a, b, c, d },
            SourceSurface::XPlane { x0, .. } => SurfaceKind::XPlane { x0 },
            SourceSurface::YPlane { y0, .. } => SurfaceKind::YPlane { y0 },
            SourceSurface::ZPlane { z0, .. } => SurfaceKind::ZPlane { z0 },
            SourceSurface::Cylinder {
                x0,
                y0,
                z0,
                r,
                dx,
                dy,
                dz,
                ..
            } => {
                if Vector3::new(dx, dy, dz).norm() < EPSILON {
                    return Err(TranslateError::configuration(
                        meta.id,
                        "cylinder",
                        "axis direction must be nonzero",
                    ));
                }
                SurfaceKind::Cylinder {
                    x0,
                    y0,
                    z0,
                    r,
                    dx,
                    dy,
                    dz,
                }
            }
            SourceSurface::XCylinder { y0, z0, r, .. } => SurfaceKind::XCylinder { y0, z0, r },
            SourceSurface::YCylinder { x0, z0, r, .. } => SurfaceKind::YCylinder { x0, z0, r },
            SourceSurface::ZCylinder { x0, y0, r, .. } => SurfaceKind::ZCylinder { x0, y0, r },
            SourceSurface::Sphere { x0, y0, z0, r, .. } => SurfaceKind::Sphere { x0, y0, z0, r },
            SourceSurface::Cone { .. } => {
                return Err(TranslateError::unsupported(
                    meta.id,
                    "cone",
                    "general cones are not supported",
                ));
            }
            SourceSurface::XCone { x0, y0, z0, r2, .. } => {
                SurfaceKind::XCone(AxisCone { x0, y0, z0, r2 })
            }
            SourceSurface::YCone { x0, y0, z0, r2, .. } => {
                SurfaceKind::YCone(AxisCone { x0, y0, z0, r2 })
            }
            SourceSurface::ZCone { x0, y0, z0, r2, .. } => {
                SurfaceKind::ZCone(AxisCone { x0, y0, z0, r2 })
            }
            SourceSurface::XTorus {
                x0,
                y0,
                z0,
                a,
                b,
                c,
                ..
            } => SurfaceKind::XTorus(AxisTorus::validated(
                meta.id, "x-torus", x0, y0, z0, a, b, c,
            )?),
            SourceSurface::YTorus {
                x0,
                y0,
                z0,
                a,
                b,
                c,
                ..
            } => SurfaceKind::YTorus(AxisTorus::validated(
                meta.id, "y-torus", x0, y0, z0, a, b, c,
            )?),
            SourceSurface::ZTorus {
                x0,
                y0,
                z0,
                a,
                b,
                c,
                ..
            } => SurfaceKind::ZTorus(AxisTorus::validated(
                meta.id, "z-torus", x0, y0, z0, a, b, c,
            )?),
        };
        Ok(Surface {
            id: meta.id,
            name: meta.name.clone(),
            boundary: meta.boundary,
            kind,
        })
    }

    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            SurfaceKind::Plane { .. } => "plane",
            SurfaceKind::XPlane { .. } => "x-plane",
            SurfaceKind::YPlane { .. } => "y-plane",
            SurfaceKind::ZPlane { .. } => "z-plane",
            SurfaceKind::Cylinder { .. } => "cylinder",
            SurfaceKind::XCylinder { .. } => "x-cylinder",
            SurfaceKind::YCylinder { .. } => "y-cylinder",
            SurfaceKind::ZCylinder { .. } => "z-cylinder",
            SurfaceKind::Sphere { .. } => "sphere",
            SurfaceKind::XCone(_) => "x-cone",
            SurfaceKind::YCone(_) => "y-cone",
            SurfaceKind::ZCone(_) => "z-cone",
            SurfaceKind::XTorus(_) => "x-torus",
            SurfaceKind::YTorus(_) => "y-torus",
            SurfaceKind::ZTorus(_) => "z-torus",
        }
    }
}
