use super::*;
use crate::TranslateError;

fn meta(id: u32) -> SurfaceMeta {
    SurfaceMeta {
        id,
        name: String::new(),
        boundary: BoundaryType::Transmission,
    }
}

#[test]
fn plane_construction_copies_coefficients_and_identity() {
    let src = SourceSurface::Plane {
        a: 1.0,
        b: 2.0,
        c: 3.0,
        d: 4.0,
        meta: SurfaceMeta {
            id: 7,
            name: "tilted".to_string(),
            boundary: BoundaryType::Vacuum,
        },
    };
    let surface = Surface::from_source(&src).unwrap();
    assert_eq!(surface.id, 7);
    assert_eq!(surface.name, "tilted");
    assert_eq!(surface.boundary, BoundaryType::Vacuum);
    assert_eq!(
        surface.kind,
        SurfaceKind::Plane {
            a: 1.0,
            b: 2.0,
            c: 3.0,
            d: 4.0
        }
    );
}

#[test]
fn general_cone_is_rejected_at_construction() {
    let src = SourceSurface::Cone {
        x0: 0.0,
        y0: 0.0,
        z0: 0.0,
        r2: 0.25,
        dx: 0.0,
        dy: 0.0,
        dz: 1.0,
        meta: meta(3),
    };
    match Surface::from_source(&src) {
        Err(TranslateError::UnsupportedGeometry {
            surface_id, kind, ..
        }) => {
            assert_eq!(surface_id, 3);
            assert_eq!(kind, "cone");
        }
        other => panic!("expected UnsupportedGeometry, got {:?}", other),
    }
}

#[test]
fn asymmetric_torus_is_rejected_at_construction() {
    let src = SourceSurface::ZTorus {
        x0: 0.0,
        y0: 0.0,
        z0: 0.0,
        a: 3.0,
        b: 1.0,
        c: 1.5,
        meta: meta(9),
    };
    match Surface::from_source(&src) {
        Err(TranslateError::UnsupportedGeometry {
            surface_id, kind, ..
        }) => {
            assert_eq!(surface_id, 9);
            assert_eq!(kind, "z-torus");
        }
        other => panic!("expected UnsupportedGeometry, got {:?}", other),
    }
}

#[test]
fn symmetric_torus_keeps_major_and_minor_radii() {
    let src = SourceSurface::XTorus {
        x0: 1.0,
        y0: 2.0,
        z0: 3.0,
        a: 5.0,
        b: 0.5,
        c: 0.5,
        meta: meta(4),
    };
    let surface = Surface::from_source(&src).unwrap();
    match surface.kind {
        SurfaceKind::XTorus(t) => {
            assert_eq!(t.major, 5.0);
            assert_eq!(t.minor, 0.5);
            assert_eq!((t.x0, t.y0, t.z0), (1.0, 2.0, 3.0));
        }
        other => panic!("expected an x-torus, got {:?}", other),
    }
}

#[test]
fn zero_axis_cylinder_is_a_configuration_error() {
    let src = SourceSurface::Cylinder {
        x0: 0.0,
        y0: 0.0,
        z0: 0.0,
        r: 1.0,
        dx: 0.0,
        dy: 0.0,
        dz: 0.0,
        meta: meta(11),
    };
    assert!(matches!(
        Surface::from_source(&src),
        Err(TranslateError::Configuration { surface_id: 11, .. })
    ));
}

#[test]
fn coefficients_map_by_field_name_not_position() {
    // Same surface, fields deliberately out of their declaration order.
    let json = r#"{"r": 3.0, "id": 12, "y0": 2.0, "type": "z-cylinder", "x0": 1.0}"#;
    let src: SourceSurface = serde_json::from_str(json).unwrap();
    let surface = Surface::from_source(&src).unwrap();
    assert_eq!(surface.id, 12);
    assert_eq!(surface.boundary, BoundaryType::Transmission);
    assert_eq!(
        surface.kind,
        SurfaceKind::ZCylinder {
            x0: 1.0,
            y0: 2.0,
            r: 3.0
        }
    );
}

#[test]
fn boundary_tags_deserialize_from_their_source_spellings() {
    let json = r#"{"type": "x-plane", "x0": 5.0, "id": 1, "boundary": "reflective"}"#;
    let src: SourceSurface = serde_json::from_str(json).unwrap();
    assert_eq!(src.meta().boundary, BoundaryType::Reflective);

    let json = r#"{"type": "x-plane", "x0": 5.0, "id": 2, "boundary": {"albedo": 0.5}}"#;
    let src: SourceSurface = serde_json::from_str(json).unwrap();
    assert_eq!(src.meta().boundary, BoundaryType::Albedo(0.5));
}

#[test]
fn side_marker_parsing_treats_anything_but_minus_as_positive() {
    assert_eq!(Side::from_marker('-'), Side::Negative);
    assert_eq!(Side::from_marker('+'), Side::Positive);
    assert_eq!(Side::from_marker('?'), Side::Positive);
}

#[test]
fn boundary_group_names() {
    assert_eq!(BoundaryType::Transmission.group_name(), None);
    assert_eq!(
        BoundaryType::Vacuum.group_name().as_deref(),
        Some("boundary:vacuum")
    );
    assert_eq!(
        BoundaryType::Reflective.group_name().as_deref(),
        Some("boundary:reflective")
    );
    assert_eq!(
        BoundaryType::Albedo(0.25).group_name().as_deref(),
        Some("boundary:albedo=0.25")
    );
}
