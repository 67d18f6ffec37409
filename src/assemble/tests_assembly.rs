use super::*;
use crate::compile::compile_half_space;
use crate::script::{EntityKind, IdSource};
use crate::surfaces::{
    BoundaryType, ClippingPolicy, Extents, HalfSpaceNode, Side, Surface, SurfaceKind,
};

fn surface(id: u32, boundary: BoundaryType, kind: SurfaceKind) -> Surface {
    Surface {
        id,
        name: String::new(),
        boundary,
        kind,
    }
}

fn extents() -> Extents {
    Extents::new(10.0, 10.0, 10.0)
}

#[test]
fn fragments_concatenate_in_push_order_with_continuous_ids() {
    let first = surface(
        1,
        BoundaryType::Transmission,
        SurfaceKind::ZCylinder {
            x0: 0.0,
            y0: 0.0,
            r: 2.0,
        },
    );
    let second = surface(
        2,
        BoundaryType::Transmission,
        SurfaceKind::Sphere {
            x0: 0.0,
            y0: 0.0,
            z0: 0.0,
            r: 3.0,
        },
    );

    let mut ids = IdSource::new();
    let mut assembler = ScriptAssembler::new();
    let a = compile_half_space(
        HalfSpaceNode::new(&first, Side::Negative),
        EntityKind::Body,
        extents(),
        ClippingPolicy::WholeWorld,
        &mut ids,
    )
    .unwrap();
    let b = compile_half_space(
        HalfSpaceNode::new(&second, Side::Negative),
        EntityKind::Body,
        extents(),
        ClippingPolicy::WholeWorld,
        &mut ids,
    )
    .unwrap();
    assert_eq!(a.result.index(), 0);
    assert_eq!(b.result.index(), 1);

    let a_len = a.script.len();
    let a_first = a.script.commands()[0].clone();
    let b_first = b.script.commands()[0].clone();
    assembler.push(a);
    assembler.push(b);
    let script = assembler.finish();
    assert_eq!(script.commands()[0], a_first);
    assert_eq!(script.commands()[a_len], b_first);
}

#[test]
fn non_transmission_boundaries_are_grouped_at_the_end() {
    let vacuum = surface(
        1,
        BoundaryType::Vacuum,
        SurfaceKind::ZPlane { z0: 5.0 },
    );
    let reflective = surface(
        2,
        BoundaryType::Reflective,
        SurfaceKind::Sphere {
            x0: 0.0,
            y0: 0.0,
            z0: 0.0,
            r: 3.0,
        },
    );
    let transmission = surface(
        3,
        BoundaryType::Transmission,
        SurfaceKind::ZCylinder {
            x0: 0.0,
            y0: 0.0,
            r: 1.0,
        },
    );

    let mut ids = IdSource::new();
    let mut assembler = ScriptAssembler::new();
    for (s, side) in [
        (&vacuum, Side::Negative),
        (&reflective, Side::Positive),
        (&transmission, Side::Negative),
    ] {
        assembler.push(
            compile_half_space(
                HalfSpaceNode::new(s, side),
                EntityKind::Body,
                extents(),
                ClippingPolicy::WholeWorld,
                &mut ids,
            )
            .unwrap(),
        );
    }
    let script = assembler.finish();
    let groups: Vec<_> = script
        .iter()
        .filter_map(|c| match c {
            Command::AddToGroup { group, ids } => Some((group.clone(), ids.len())),
            _ => None,
        })
        .collect();
    assert_eq!(
        groups,
        vec![
            ("boundary:reflective".to_string(), 1),
            ("boundary:vacuum".to_string(), 1),
        ]
    );
    // Groups trail every geometry fragment.
    assert!(matches!(
        script.commands()[script.len() - 2],
        Command::AddToGroup { .. }
    ));
}

#[test]
fn surfaces_sharing_a_tag_land_in_one_group_command() {
    let mut ids = IdSource::new();
    let mut assembler = ScriptAssembler::new();
    for id in [1, 2] {
        let s = surface(
            id,
            BoundaryType::Vacuum,
            SurfaceKind::XPlane { x0: id as f64 },
        );
        assembler.push(
            compile_half_space(
                HalfSpaceNode::new(&s, Side::Negative),
                EntityKind::Body,
                extents(),
                ClippingPolicy::WholeWorld,
                &mut ids,
            )
            .unwrap(),
        );
    }
    let script = assembler.finish();
    match script.commands().last() {
        Some(Command::AddToGroup { group, ids }) => {
            assert_eq!(group, "boundary:vacuum");
            assert_eq!(ids.len(), 2);
        }
        other => panic!("expected one trailing group command, got {:?}", other),
    }
}

#[test]
fn distinct_albedos_do_not_merge() {
    let mut ids = IdSource::new();
    let mut assembler = ScriptAssembler::new();
    for (id, albedo) in [(1, 0.25), (2, 0.75)] {
        let s = surface(
            id,
            BoundaryType::Albedo(albedo),
            SurfaceKind::XPlane { x0: 0.0 },
        );
        assembler.push(
            compile_half_space(
                HalfSpaceNode::new(&s, Side::Negative),
                EntityKind::Body,
                extents(),
                ClippingPolicy::WholeWorld,
                &mut ids,
            )
            .unwrap(),
        );
    }
    let script = assembler.finish();
    let groups: Vec<_> = script
        .iter()
        .filter_map(|c| match c {
            Command::AddToGroup { group, .. } => Some(group.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        groups,
        vec![
            "boundary:albedo=0.25".to_string(),
            "boundary:albedo=0.75".to_string(),
        ]
    );
}
