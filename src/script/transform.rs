//! Move/rotate fragments shared by the surface emitters.

use crate::geometry::{Vector3, ANGLE_TOL_DEG, EPSILON};

use super::{Axis, CadEntityId, Command, Script};

/// Append a move by `v`, elided when the translation is zero.
pub fn translate(script: &mut Script, id: CadEntityId, v: Vector3) {
    if v.norm() < EPSILON {
        return;
    }
    script.push(Command::Move {
        id,
        dx: v.x,
        dy: v.y,
        dz: v.z,
    });
}

/// Append a rotation about a coordinate axis through the origin.
pub fn rotate_about(script: &mut Script, id: CadEntityId, axis: Axis, angle: f64) {
    script.push(Command::RotateAboutAxis { id, axis, angle });
}

/// Append the rotation taking the +z axis onto `dir`.
///
/// The rotation axis is z-hat cross dir-hat and the angle is the angle
/// between them, in degrees. Elided when `dir` is already aligned within
/// the angular tolerance. An anti-parallel `dir` has no unique rotation
/// axis; the x-axis is used.
pub fn align_z_to(script: &mut Script, id: CadEntityId, dir: Vector3) {
    let dhat = dir.normalize();
    let zhat = Vector3::z();
    let angle = zhat.dot(&dhat).clamp(-1.0, 1.0).acos().to_degrees();
    if angle.abs() < ANGLE_TOL_DEG {
        return;
    }
    let axis = zhat.cross(&dhat);
    let direction = if axis.norm() < EPSILON {
        [1.0, 0.0, 0.0]
    } else {
        let a = axis.normalize();
        [a.x, a.y, a.z]
    };
    script.push(Command::RotateAboutDirection {
        id,
        direction,
        angle,
    });
}
