// Host-side tests for configuration and material validation.

use blob_core::{BlobConfig, BlobError, MaterialUniforms, PhysicalMaterial, SmoothingMode};

#[test]
fn defaults_are_valid() {
    let config = BlobConfig::default();
    config.validate().expect("default config validates");
    assert_eq!(config.smoothing.mode, SmoothingMode::PerFrame);
    assert_eq!(config.base_intensity, 0.3);
    assert_eq!(config.hover_intensity, 0.8);
    assert_eq!(config.speed, 0.4);
}

#[test]
fn smoothing_factors_must_be_unit_interval() {
    for bad in [0.0, -0.1, 1.5, f32::NAN] {
        let mut config = BlobConfig::default();
        config.smoothing.pointer = bad;
        assert!(
            matches!(config.validate(), Err(BlobError::InvalidConfig(_))),
            "pointer factor {bad} accepted"
        );
    }
    let mut config = BlobConfig::default();
    config.smoothing.intensity = 1.0;
    assert!(config.validate().is_ok());
}

#[test]
fn reference_fps_must_be_positive() {
    let config = BlobConfig::default()
        .with_smoothing_mode(SmoothingMode::TimeCorrected { reference_fps: 0.0 });
    assert!(config.validate().is_err());
    let config = BlobConfig::default().with_smoothing_mode(SmoothingMode::time_corrected());
    assert!(config.validate().is_ok());
}

#[test]
fn negative_or_non_finite_intensity_rejected() {
    let mut config = BlobConfig::default();
    config.idle_intensity = -0.1;
    assert!(config.validate().is_err());

    let mut config = BlobConfig::default();
    config.speed = f32::INFINITY;
    assert!(config.validate().is_err());
}

#[test]
fn frame_updater_carries_config() {
    let mut config = BlobConfig::default().with_smoothing_mode(SmoothingMode::time_corrected());
    config.hover_intensity = 0.9;
    let updater = config.frame_updater();
    assert_eq!(updater.target_intensity(true), 0.9);
    assert_eq!(updater.target_intensity(false), 0.3);
    assert_eq!(updater.smoothing.mode, SmoothingMode::time_corrected());
}

#[test]
fn material_defaults_validate() {
    let m = PhysicalMaterial::default();
    m.validate().expect("default material validates");
    assert!(m.double_sided);
    assert_eq!(m.iridescence_thickness_range, [100.0, 800.0]);
}

#[test]
fn material_rejects_out_of_range_fields() {
    let cases: Vec<(PhysicalMaterial, &str)> = vec![
        (
            PhysicalMaterial {
                roughness: 1.5,
                ..Default::default()
            },
            "roughness",
        ),
        (
            PhysicalMaterial {
                ior: 0.5,
                ..Default::default()
            },
            "ior",
        ),
        (
            PhysicalMaterial {
                iridescence_ior: 3.0,
                ..Default::default()
            },
            "iridescence_ior",
        ),
        (
            PhysicalMaterial {
                transmission: -0.2,
                ..Default::default()
            },
            "transmission",
        ),
        (
            PhysicalMaterial {
                dispersion: -1.0,
                ..Default::default()
            },
            "dispersion",
        ),
        (
            PhysicalMaterial {
                iridescence_thickness_range: [800.0, 100.0],
                ..Default::default()
            },
            "iridescence_thickness_range.max",
        ),
        (
            PhysicalMaterial {
                color: [1.0, 2.0, 1.0],
                ..Default::default()
            },
            "color.g",
        ),
    ];
    for (material, expected) in cases {
        match material.validate() {
            Err(BlobError::InvalidMaterial { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected {expected} to be rejected, got {other:?}"),
        }
    }
}

#[test]
fn invalid_material_fails_config() {
    let mut config = BlobConfig::default();
    config.material.clearcoat = 2.0;
    assert!(matches!(
        config.validate(),
        Err(BlobError::InvalidMaterial {
            field: "clearcoat",
            ..
        })
    ));
}

#[test]
fn material_block_packs_fields() {
    let m = PhysicalMaterial::default();
    let u = MaterialUniforms::from(&m);
    assert_eq!(u.color_transmission, [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(u.ior, 1.2);
    assert_eq!(u.iridescence_thickness_min, 100.0);
    assert_eq!(u.iridescence_thickness_max, 800.0);
    assert_eq!(u.ambient, 0.5);
    let dir = glam::Vec3::new(u.light[0], u.light[1], u.light[2]);
    assert!((dir.length() - 1.0).abs() < 1e-5);
    assert!((dir - glam::Vec3::new(10.0, 10.0, 5.0).normalize()).length() < 1e-6);
    assert_eq!(u.light[3], 1.0);
}
