// Host-side tests for the torus-knot mesh builder.

use blob_core::{BlobError, TorusKnotDescriptor};

#[test]
fn default_knot_has_expected_counts() {
    let desc = TorusKnotDescriptor::default();
    let mesh = desc.build().expect("default knot builds");
    assert_eq!(mesh.vertices.len(), 257 * 65);
    assert_eq!(mesh.indices.len(), 256 * 64 * 6);
    assert_eq!(mesh.triangle_count(), 32_768);
    assert_eq!(desc.vertex_count(), mesh.vertices.len());
    assert_eq!(desc.index_count(), mesh.indices.len());
}

#[test]
fn indices_stay_in_bounds() {
    let mesh = TorusKnotDescriptor::default().build().unwrap();
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
}

#[test]
fn normals_are_unit_length() {
    let mesh = TorusKnotDescriptor::default().build().unwrap();
    for (i, v) in mesh.vertices.iter().enumerate() {
        let len = v.normal().length();
        assert!((len - 1.0).abs() < 1e-4, "vertex {i} normal length {len}");
    }
}

#[test]
fn vertices_sit_on_the_tube() {
    // Every vertex is within `radius * 1.5 + tube` of the origin
    let desc = TorusKnotDescriptor::default();
    let mesh = desc.build().unwrap();
    let r = mesh.bounding_radius();
    assert!(r <= desc.radius * 1.5 + desc.tube + 1e-4, "radius {r}");
    assert!(r > desc.radius * 1.5, "radius {r}");
}

#[test]
fn small_knot_counts_follow_segments() {
    let desc = TorusKnotDescriptor {
        tubular_segments: 8,
        radial_segments: 4,
        p: 2,
        q: 3,
        ..TorusKnotDescriptor::default()
    };
    let mesh = desc.build().unwrap();
    assert_eq!(mesh.vertices.len(), 9 * 5);
    assert_eq!(mesh.indices.len(), 8 * 4 * 6);
}

#[test]
fn degenerate_descriptors_are_rejected() {
    let bad = [
        TorusKnotDescriptor {
            tube: 0.0,
            ..TorusKnotDescriptor::default()
        },
        TorusKnotDescriptor {
            radius: f32::NAN,
            ..TorusKnotDescriptor::default()
        },
        TorusKnotDescriptor {
            radial_segments: 2,
            ..TorusKnotDescriptor::default()
        },
        TorusKnotDescriptor {
            p: 0,
            ..TorusKnotDescriptor::default()
        },
    ];
    for desc in bad {
        assert!(matches!(desc.build(), Err(BlobError::InvalidGeometry(_))), "{desc:?}");
    }
}

#[test]
fn segment_counts_beyond_u32_indices_are_rejected() {
    let huge = TorusKnotDescriptor {
        tubular_segments: 70_000,
        radial_segments: 70_000,
        ..TorusKnotDescriptor::default()
    };
    assert!(matches!(huge.validate(), Err(BlobError::InvalidGeometry(_))));
    assert!(matches!(huge.build(), Err(BlobError::InvalidGeometry(_))));

    // 65_536 * 65_536 is 2^32, one past the last index
    let over = TorusKnotDescriptor {
        tubular_segments: 65_535,
        radial_segments: 65_535,
        ..TorusKnotDescriptor::default()
    };
    assert!(over.validate().is_err());

    // 65_535 * 65_536 vertices still fit
    let edge = TorusKnotDescriptor {
        tubular_segments: 65_534,
        radial_segments: 65_535,
        ..TorusKnotDescriptor::default()
    };
    assert!(edge.validate().is_ok());
}
