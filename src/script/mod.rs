//! Journal command model for the target kernel's scripting dialect.
//!
//! Commands are built as typed values and rendered to text only when the
//! finished script is written out. The interpreter consumes the rendered
//! lines verbatim, so each `Display` impl here is the authoritative
//! spelling of its instruction.

pub mod tracker;
pub mod transform;


pub use tracker::{CadEntityId, IdSource};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate axis named by rotate, section, and reflect instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Entity kind hint passed to the kernel's last-created-id query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    #[default]
    Body,
    Volume,
    Surface,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Body => "body",
            EntityKind::Volume => "volume",
            EntityKind::Surface => "surface",
        }
    }
}

/// One journal instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Rectangular brick centered at the origin.
    Brick { x: f64, y: f64, z: f64 },
    /// Right circular cylinder along the z-axis, centered at the origin.
    Cylinder { height: f64, radius: f64 },
    Sphere { radius: f64 },
    /// Torus in the xy-plane, centered at the origin.
    Torus { major_radius: f64, minor_radius: f64 },
    /// Cone along the z-axis; `top 0` collapses the top face to an apex.
    Frustum { height: f64, base_radius: f64 },
    /// Hexagonal prism along the z-axis.
    HexPrism { height: f64, radius: f64 },
    /// Bind the id of the most recent creation command to a journal variable.
    CaptureLastId { var: CadEntityId, kind: EntityKind },
    Move {
        id: CadEntityId,
        dx: f64,
        dy: f64,
        dz: f64,
    },
    RotateAboutAxis {
        id: CadEntityId,
        axis: Axis,
        angle: f64,
    },
    /// Rotation about an arbitrary direction through the origin.
    RotateAboutDirection {
        id: CadEntityId,
        direction: [f64; 3],
        angle: f64,
    },
    /// Mirror copy of a body about an axis-normal plane through the origin.
    CopyReflect { id: CadEntityId, axis: Axis },
    /// Split a body with an axis-aligned plane, keeping one half.
    /// `reverse` flips which half survives.
    Section {
        id: CadEntityId,
        axis: Axis,
        offset: f64,
        reverse: bool,
    },
    /// Boolean subtraction; the result replaces `from`.
    Subtract { tool: CadEntityId, from: CadEntityId },
    /// Boolean intersection of two bodies; both operand ids are consumed.
    Intersect { a: CadEntityId, b: CadEntityId },
    /// Boolean union; the result replaces `keep`.
    Unite { keep: CadEntityId, other: CadEntityId },
    /// Add the surfaces of the listed bodies to a named group.
    AddToGroup { group: String, ids: Vec<CadEntityId> },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Brick { x, y, z } => write!(f, "brick x {} y {} z {}", x, y, z),
            Command::Cylinder { height, radius } => {
                write!(f, "cylinder height {} radius {}", height, radius)
            }
            Command::Sphere { radius } => write!(f, "sphere radius {}", radius),
            Command::Torus {
                major_radius,
                minor_radius,
            } => write!(
                f,
                "torus major radius {} minor radius {}",
                major_radius, minor_radius
            ),
            Command::Frustum {
                height,
                base_radius,
            } => write!(f, "create frustum height {} radius {} top 0", height, base_radius),
            Command::HexPrism { height, radius } => {
                write!(f, "create prism height {} sides 6 radius {}", height, radius)
            }
            Command::CaptureLastId { var, kind } => {
                write!(f, "#{{{} = Id(\"{}\")}}", var, kind.label())
            }
            Command::Move { id, dx, dy, dz } => {
                write!(f, "body {{ {} }} move {} {} {}", id, dx, dy, dz)
            }
            Command::RotateAboutAxis { id, axis, angle } => {
                write!(f, "rotate body {{ {} }} about {} angle {}", id, axis, angle)
            }
            Command::RotateAboutDirection {
                id,
                direction,
                angle,
            } => write!(
                f,
                "rotate body {{ {} }} about 0 0 0 direction {} {} {} angle {}",
                id, direction[0], direction[1], direction[2], angle
            ),
            Command::CopyReflect { id, axis } => {
                write!(f, "body {{ {} }} copy reflect {}", id, axis)
            }
            Command::Section {
                id,
                axis,
                offset,
                reverse,
            } => {
                write!(
                    f,
                    "section body {{ {} }} with {}plane offset {}",
                    id, axis, offset
                )?;
                if *reverse {
                    write!(f, " reverse")?;
                }
                Ok(())
            }
            Command::Subtract { tool, from } => {
                write!(f, "subtract body {{ {} }} from body {{ {} }}", tool, from)
            }
            Command::Intersect { a, b } => {
                write!(f, "intersect body {{ {} }} {{ {} }}", a, b)
            }
            Command::Unite { keep, other } => {
                write!(f, "unite body {{ {} }} {{ {} }}", keep, other)
            }
            Command::AddToGroup { group, ids } => {
                write!(f, "group \"{}\" add surface", group)?;
                for id in ids {
                    write!(f, " {{ {} }}", id)?;
                }
                Ok(())
            }
        }
    }
}

/// An append-only command sequence.
///
/// Order is semantically load-bearing: later commands reference ids
/// captured by earlier ones, so the script is never reordered or
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: Command) {
        self.commands.push(cmd);
    }

    /// Append another fragment, preserving its internal order.
    pub fn append(&mut self, other: Script) {
        self.commands.extend(other.commands);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            writeln!(f, "{}", cmd)?;
        }
        Ok(())
    }
}
