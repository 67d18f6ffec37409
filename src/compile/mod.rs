//! Half-space compilation: turning one implicit surface plus a side marker
//! into a bounded-solid construction sequence.
//!
//! Implicit surfaces have infinite extent, so every kind is first realized
//! as a bounded primitive (or a primitive clipped against the working
//! volume) and then combined with the world by exactly one boolean: a
//! `subtract` keeps the positive side, an `intersect` or `section` keeps
//! the negative side. The final surviving body's id is returned; ids
//! consumed along the way are stale and never referenced again.


use tracing::debug;

use crate::geometry::Vector3;
use crate::script::{transform, Axis, CadEntityId, Command, EntityKind, IdSource, Script};
use crate::surfaces::{
    AxisCone, AxisTorus, BoundaryType, ClippingPolicy, Extents, HalfSpaceNode, Side, Surface,
    SurfaceKind,
};
use crate::{TranslateError, TranslateResult};

/// Result of compiling one half-space: the surviving solid plus the
/// commands that produced it, with the surface's identity carried along
/// for boundary annotation.
#[derive(Debug, Clone)]
pub struct CompiledSurface {
    pub result: CadEntityId,
    pub script: Script,
    pub surface_id: u32,
    pub boundary: BoundaryType,
}

/// Compile a half-space into its bounded-solid command sequence.
///
/// Referentially transparent given the inputs and the state of `ids`;
/// the only side effect is advancing the id source as commands are
/// appended to the returned script.
pub fn compile_half_space(
    node: HalfSpaceNode<'_>,
    kind: EntityKind,
    extents: Extents,
    clip: ClippingPolicy,
    ids: &mut IdSource,
) -> TranslateResult<CompiledSurface> {
    let surface = node.surface;
    let side = node.side;
    debug!(
        surface_id = surface.id,
        kind = surface.kind_label(),
        side = ?side,
        "compiling half-space"
    );

    check_dimensions(surface, &extents, &clip)?;

    let mut script = Script::new();
    let result = match &surface.kind {
        SurfaceKind::Plane { a, b, c, d } => emit_plane(
            &mut script,
            ids,
            kind,
            side,
            &extents,
            Vector3::new(*a, *b, *c),
            *d,
        ),
        SurfaceKind::XPlane { x0 } => {
            emit_axis_plane(&mut script, ids, kind, side, &extents, Axis::X, *x0)
        }
        SurfaceKind::YPlane { y0 } => {
            emit_axis_plane(&mut script, ids, kind, side, &extents, Axis::Y, *y0)
        }
        SurfaceKind::ZPlane { z0 } => {
            emit_axis_plane(&mut script, ids, kind, side, &extents, Axis::Z, *z0)
        }
        SurfaceKind::Cylinder {
            x0,
            y0,
            z0,
            r,
            dx,
            dy,
            dz,
        } => emit_general_cylinder(
            &mut script,
            ids,
            kind,
            side,
            &extents,
            &clip,
            *r,
            Vector3::new(*x0, *y0, *z0),
            Vector3::new(*dx, *dy, *dz),
        ),
        SurfaceKind::XCylinder { y0, z0, r } => emit_axis_cylinder(
            &mut script,
            ids,
            kind,
            side,
            &extents,
            &clip,
            Axis::X,
            *r,
            Vector3::new(0.0, *y0, *z0),
        ),
        SurfaceKind::YCylinder { x0, z0, r } => emit_axis_cylinder(
            &mut script,
            ids,
            kind,
            side,
            &extents,
            &clip,
            Axis::Y,
            *r,
            Vector3::new(*x0, 0.0, *z0),
        ),
        SurfaceKind::ZCylinder { x0, y0, r } => emit_axis_cylinder(
            &mut script,
            ids,
            kind,
            side,
            &extents,
            &clip,
            Axis::Z,
            *r,
            Vector3::new(*x0, *y0, 0.0),
        ),
        SurfaceKind::Sphere { x0, y0, z0, r } => emit_sphere(
            &mut script,
            ids,
            kind,
            side,
            &extents,
            *r,
            Vector3::new(*x0, *y0, *z0),
        ),
        SurfaceKind::XCone(cone) => {
            emit_axis_cone(&mut script, ids, kind, side, &extents, Axis::X, cone)
        }
        SurfaceKind::YCone(cone) => {
            emit_axis_cone(&mut script, ids, kind, side, &extents, Axis::Y, cone)
        }
        SurfaceKind::ZCone(cone) => {
            emit_axis_cone(&mut script, ids, kind, side, &extents, Axis::Z, cone)
        }
        SurfaceKind::XTorus(torus) => {
            emit_axis_torus(&mut script, ids, kind, side, &extents, Axis::X, torus)
        }
        SurfaceKind::YTorus(torus) => {
            emit_axis_torus(&mut script, ids, kind, side, &extents, Axis::Y, torus)
        }
        SurfaceKind::ZTorus(torus) => {
            emit_axis_torus(&mut script, ids, kind, side, &extents, Axis::Z, torus)
        }
    };

    Ok(CompiledSurface {
        result,
        script,
        surface_id: surface.id,
        boundary: surface.boundary,
    })
}

fn check_dimensions(
    surface: &Surface,
    extents: &Extents,
    clip: &ClippingPolicy,
) -> TranslateResult<()> {
    if !extents.is_positive() {
        return Err(TranslateError::configuration(
            surface.id,
            surface.kind_label(),
            "world extents must be positive",
        ));
    }
    if let Some(dims) = clip.lattice_dims() {
        if !dims.is_positive() {
            return Err(TranslateError::configuration(
                surface.id,
                surface.kind_label(),
                "lattice cell dimensions must be positive",
            ));
        }
    }
    Ok(())
}

/// Rotation taking a z-aligned primitive onto the given coordinate axis.
fn align_to_axis(script: &mut Script, id: CadEntityId, axis: Axis) {
    match axis {
        Axis::X => transform::rotate_about(script, id, Axis::Y, 90.0),
        Axis::Y => transform::rotate_about(script, id, Axis::X, 90.0),
        Axis::Z => {}
    }
}

fn emit_world_brick(
    script: &mut Script,
    ids: &mut IdSource,
    kind: EntityKind,
    extents: &Extents,
) -> CadEntityId {
    script.push(Command::Brick {
        x: extents.x,
        y: extents.y,
        z: extents.z,
    });
    ids.capture(kind, script)
}

/// A general plane has no primitive form. An oversized cutter cube is
/// oriented so one face lies on the plane, then combined with a
/// world-extents brick: subtracting the cutter keeps the positive side,
/// intersecting keeps the negative side.
fn emit_plane(
    script: &mut Script,
    ids: &mut IdSource,
    kind: EntityKind,
    side: Side,
    extents: &Extents,
    normal: Vector3,
    d: f64,
) -> CadEntityId {
    let distance = d / normal.norm();
    let max_extent = extents.max_dimension();
    let edge = 2.0 * max_extent;

    script.push(Command::Brick {
        x: edge,
        y: edge,
        z: edge,
    });
    let cutter = ids.capture(kind, script);
    // Drop the cube so its top face passes through the origin, orient that
    // face along the plane normal, then slide out to the plane's offset.
    transform::translate(script, cutter, Vector3::new(0.0, 0.0, -max_extent));
    transform::align_z_to(script, cutter, normal);
    transform::translate(script, cutter, distance * normal.normalize());

    let world = emit_world_brick(script, ids, kind, extents);
    if side.is_negative() {
        script.push(Command::Intersect { a: cutter, b: world });
    } else {
        script.push(Command::Subtract {
            tool: cutter,
            from: world,
        });
    }
    world
}

/// Axis-aligned planes section the world brick directly; the reverse flag
/// flips which half survives.
fn emit_axis_plane(
    script: &mut Script,
    ids: &mut IdSource,
    kind: EntityKind,
    side: Side,
    extents: &Extents,
    axis: Axis,
    offset: f64,
) -> CadEntityId {
    let id = emit_world_brick(script, ids, kind, extents);
    script.push(Command::Section {
        id,
        axis,
        offset,
        reverse: side.is_negative(),
    });
    id
}

/// Clipping solid for the positive side of a cylinder: the world brick, a
/// lattice-cell brick, or a hex prism rotated 30 degrees flat-to-flat and
/// aligned with the cylinder axis. The hex path never emits a brick.
fn emit_clip_solid(
    script: &mut Script,
    ids: &mut IdSource,
    kind: EntityKind,
    extents: &Extents,
    clip: &ClippingPolicy,
    axis: Axis,
) -> CadEntityId {
    match clip {
        ClippingPolicy::WholeWorld => emit_world_brick(script, ids, kind, extents),
        ClippingPolicy::LatticeBox(dims) => emit_world_brick(script, ids, kind, dims),
        ClippingPolicy::LatticeHex(dims) => {
            script.push(Command::HexPrism {
                height: dims.z,
                radius: dims.x / 2.0,
            });
            let id = ids.capture(kind, script);
            transform::rotate_about(script, id, Axis::Z, 30.0);
            align_to_axis(script, id, axis);
            id
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn emit_axis_cylinder(
    script: &mut Script,
    ids: &mut IdSource,
    kind: EntityKind,
    side: Side,
    extents: &Extents,
    clip: &ClippingPolicy,
    axis: Axis,
    radius: f64,
    center: Vector3,
) -> CadEntityId {
    let height = clip.height_along(axis, extents);
    script.push(Command::Cylinder { height, radius });
    let cyl = ids.capture(kind, script);
    align_to_axis(script, cyl, axis);

    if side.is_negative() {
        transform::translate(script, cyl, center);
        return cyl;
    }

    let clipper = emit_clip_solid(script, ids, kind, extents, clip, axis);
    script.push(Command::Subtract {
        tool: cyl,
        from: clipper,
    });
    transform::translate(script, clipper, center);
    clipper
}

/// A cylinder with an arbitrary axis is built along z, clipped while still
/// in its local frame, then rotated onto its axis and moved to its center.
#[allow(clippy::too_many_arguments)]
fn emit_general_cylinder(
    script: &mut Script,
    ids: &mut IdSource,
    kind: EntityKind,
    side: Side,
    extents: &Extents,
    clip: &ClippingPolicy,
    radius: f64,
    center: Vector3,
    dir: Vector3,
) -> CadEntityId {
    let height = clip.height_along(Axis::Z, extents);
    script.push(Command::Cylinder { height, radius });
    let cyl = ids.capture(kind, script);

    if side.is_negative() {
        transform::align_z_to(script, cyl, dir);
        transform::translate(script, cyl, center);
        return cyl;
    }

    // The local frame is z-aligned, so the clip solid needs no extra axis
    // alignment; the whole result is rotated afterwards.
    let clipper = emit_clip_solid(script, ids, kind, extents, clip, Axis::Z);
    script.push(Command::Subtract {
        tool: cyl,
        from: clipper,
    });
    transform::align_z_to(script, clipper, dir);
    transform::translate(script, clipper, center);
    clipper
}

fn emit_sphere(
    script: &mut Script,
    ids: &mut IdSource,
    kind: EntityKind,
    side: Side,
    extents: &Extents,
    radius: f64,
    center: Vector3,
) -> CadEntityId {
    script.push(Command::Sphere { radius });
    let sphere = ids.capture(kind, script);
    transform::translate(script, sphere, center);
    if side.is_negative() {
        return sphere;
    }
    let world = emit_world_brick(script, ids, kind, extents);
    script.push(Command::Subtract {
        tool: sphere,
        from: world,
    });
    world
}

/// A single-nappe cone cannot represent the two-nappe quadric: a frustum
/// with its apex at the origin is mirrored and united into a double-napped
/// cone before alignment and placement.
fn emit_axis_cone(
    script: &mut Script,
    ids: &mut IdSource,
    kind: EntityKind,
    side: Side,
    extents: &Extents,
    axis: Axis,
    cone: &AxisCone,
) -> CadEntityId {
    let height = extents.along(axis);
    let base_radius = cone.r2.sqrt() * height;

    script.push(Command::Frustum {
        height,
        base_radius,
    });
    let nappe = ids.capture(kind, script);
    transform::translate(script, nappe, Vector3::new(0.0, 0.0, -height / 2.0));
    script.push(Command::CopyReflect {
        id: nappe,
        axis: Axis::Z,
    });
    let mirrored = ids.capture(kind, script);
    script.push(Command::Unite {
        keep: nappe,
        other: mirrored,
    });
    align_to_axis(script, nappe, axis);
    transform::translate(script, nappe, cone.apex());

    if side.is_negative() {
        return nappe;
    }
    let world = emit_world_brick(script, ids, kind, extents);
    script.push(Command::Subtract {
        tool: nappe,
        from: world,
    });
    world
}

/// The torus boolean runs against the untranslated world brick; only the
/// surviving solid is moved to the torus center.
fn emit_axis_torus(
    script: &mut Script,
    ids: &mut IdSource,
    kind: EntityKind,
    side: Side,
    extents: &Extents,
    axis: Axis,
    torus: &AxisTorus,
) -> CadEntityId {
    script.push(Command::Torus {
        major_radius: torus.major,
        minor_radius: torus.minor,
    });
    let tor = ids.capture(kind, script);
    align_to_axis(script, tor, axis);

    if side.is_negative() {
        transform::translate(script, tor, torus.center());
        return tor;
    }
    let world = emit_world_brick(script, ids, kind, extents);
    script.push(Command::Subtract {
        tool: tor,
        from: world,
    });
    transform::translate(script, world, torus.center());
    world
}
