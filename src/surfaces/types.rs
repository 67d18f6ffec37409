//! Source-side surface descriptions and the evaluation-context types.
//!
//! `SourceSurface` mirrors the geometry library's export format: a type tag
//! plus named coefficient fields. Every field is mapped by name, never by
//! position, so reordered input deserializes identically.

use serde::{Deserialize, Serialize};

use crate::script::Axis;
use crate::surfaces::Surface;

/// Boundary condition tag carried by every source surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryType {
    #[default]
    Transmission,
    Vacuum,
    Reflective,
    Albedo(f64),
}

impl BoundaryType {
    /// Group name for boundary annotation, `None` for the default
    /// transmission condition. Albedo tags key the group by value so
    /// surfaces with different albedos never share a group.
    pub fn group_name(&self) -> Option<String> {
        match self {
            BoundaryType::Transmission => None,
            BoundaryType::Vacuum => Some("boundary:vacuum".to_string()),
            BoundaryType::Reflective => Some("boundary:reflective".to_string()),
            BoundaryType::Albedo(value) => Some(format!("boundary:albedo={}", value)),
        }
    }
}

/// Which side of an implicit surface a half-space selects.
///
/// `Negative` is the side where the surface's defining function evaluates
/// negative, conventionally "inside".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Negative,
    Positive,
}

impl Side {
    /// `-` selects the negative side; any other marker is positive.
    pub fn from_marker(marker: char) -> Self {
        if marker == '-' {
            Side::Negative
        } else {
            Side::Positive
        }
    }

    pub fn is_negative(self) -> bool {
        self == Side::Negative
    }
}

/// A surface reference plus the selected side.
#[derive(Debug, Clone, Copy)]
pub struct HalfSpaceNode<'a> {
    pub surface: &'a Surface,
    pub side: Side,
}

impl<'a> HalfSpaceNode<'a> {
    pub fn new(surface: &'a Surface, side: Side) -> Self {
        Self { surface, side }
    }
}

/// World bounding box dimensions, large enough to contain the whole scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Extents {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn max_dimension(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.x > 0.0 && self.y > 0.0 && self.z > 0.0
    }
}

/// How the bounded solid is clipped when the positive side is requested.
///
/// Replaces the optional inner-world dimensions plus hex flag of the source
/// design with one exhaustive choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClippingPolicy {
    /// Clip against the full world extents.
    WholeWorld,
    /// Clip against a rectangular lattice cell.
    LatticeBox(Extents),
    /// Clip against a hexagonal-prism lattice cell. The x dimension is the
    /// flat-to-flat pitch; the z dimension is the prism height.
    LatticeHex(Extents),
}

impl ClippingPolicy {
    /// Dimension along `axis` of the volume the surface is clipped to.
    pub fn height_along(&self, axis: Axis, world: &Extents) -> f64 {
        match self {
            ClippingPolicy::WholeWorld => world.along(axis),
            ClippingPolicy::LatticeBox(dims) | ClippingPolicy::LatticeHex(dims) => {
                dims.along(axis)
            }
        }
    }

    pub fn lattice_dims(&self) -> Option<&Extents> {
        match self {
            ClippingPolicy::WholeWorld => None,
            ClippingPolicy::LatticeBox(dims) | ClippingPolicy::LatticeHex(dims) => Some(dims),
        }
    }
}

/// Identity and boundary bookkeeping shared by every source surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMeta {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub boundary: BoundaryType,
}

/// A surface description as exported by the source geometry library.
///
/// The tag spellings match the library's surface type names. The general
/// `cone` kind is recognized but unsupported; construction rejects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SourceSurface {
    #[serde(rename = "plane")]
    Plane {
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "x-plane")]
    XPlane {
        x0: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "y-plane")]
    YPlane {
        y0: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "z-plane")]
    ZPlane {
        z0: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "cylinder")]
    Cylinder {
        x0: f64,
        y0: f64,
        z0: f64,
        r: f64,
        dx: f64,
        dy: f64,
        dz: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "x-cylinder")]
    XCylinder {
        y0: f64,
        z0: f64,
        r: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "y-cylinder")]
    YCylinder {
        x0: f64,
        z0: f64,
        r: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "z-cylinder")]
    ZCylinder {
        x0: f64,
        y0: f64,
        r: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "sphere")]
    Sphere {
        x0: f64,
        y0: f64,
        z0: f64,
        r: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "cone")]
    Cone {
        x0: f64,
        y0: f64,
        z0: f64,
        r2: f64,
        dx: f64,
        dy: f64,
        dz: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "x-cone")]
    XCone {
        x0: f64,
        y0: f64,
        z0: f64,
        r2: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "y-cone")]
    YCone {
        x0: f64,
        y0: f64,
        z0: f64,
        r2: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "z-cone")]
    ZCone {
        x0: f64,
        y0: f64,
        z0: f64,
        r2: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "x-torus")]
    XTorus {
        x0: f64,
        y0: f64,
        z0: f64,
        a: f64,
        b: f64,
        c: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "y-torus")]
    YTorus {
        x0: f64,
        y0: f64,
        z0: f64,
        a: f64,
        b: f64,
        c: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
    #[serde(rename = "z-torus")]
    ZTorus {
        x0: f64,
        y0: f64,
        z0: f64,
        a: f64,
        b: f64,
        c: f64,
        #[serde(flatten)]
        meta: SurfaceMeta,
    },
}

impl SourceSurface {
    pub fn meta(&self) -> &SurfaceMeta {
        match self {
            SourceSurface::Plane { meta, .. }
            | SourceSurface::XPlane { meta, .. }
            | SourceSurface::YPlane { meta, .. }
            | SourceSurface::ZPlane { meta, .. }
            | SourceSurface::Cylinder { meta, .. }
            | SourceSurface::XCylinder { meta, .. }
            | SourceSurface::YCylinder { meta, .. }
            | SourceSurface::ZCylinder { meta, .. }
            | SourceSurface::Sphere { meta, .. }
            | SourceSurface::Cone { meta, .. }
            | SourceSurface::XCone { meta, .. }
            | SourceSurface::YCone { meta, .. }
            | SourceSurface::ZCone { meta, .. }
            | SourceSurface::XTorus { meta, .. }
            | SourceSurface::YTorus { meta, .. }
            | SourceSurface::ZTorus { meta, .. } => meta,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            SourceSurface::Plane { .. } => "plane",
            SourceSurface::XPlane { .. } => "x-plane",
            SourceSurface::YPlane { .. } => "y-plane",
            SourceSurface::ZPlane { .. } => "z-plane",
            SourceSurface::Cylinder { .. } => "cylinder",
            SourceSurface::XCylinder { .. } => "x-cylinder",
            SourceSurface::YCylinder { .. } => "y-cylinder",
            SourceSurface::ZCylinder { .. } => "z-cylinder",
            SourceSurface::Sphere { .. } => "sphere",
            SourceSurface::Cone { .. } => "cone",
            SourceSurface::XCone { .. } => "x-cone",
            SourceSurface::YCone { .. } => "y-cone",
            SourceSurface::ZCone { .. } => "z-cone",
            SourceSurface::XTorus { .. } => "x-torus",
            SourceSurface::YTorus { .. } => "y-torus",
            SourceSurface::ZTorus { .. } => "z-torus",
        }
    }
}
