use shapematch_core::{Boundary, ConfigError, HalfSpace, ResponseConfig, SimConfig, Solver};

#[test]
fn test_default_config_is_valid() {
    assert_eq!(SimConfig::default().validate(), Ok(()));
}

#[test]
fn test_zero_particles_rejected() {
    let config = SimConfig {
        particle_count: 0,
        ..SimConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroParticles));
}

#[test]
fn test_non_positive_spacing_rejected() {
    let config = SimConfig {
        spacing: -0.5,
        ..SimConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidSpacing(-0.5)));
}

#[test]
fn test_non_positive_dt_rejected() {
    let config = SimConfig {
        dt: 0.0,
        ..SimConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidTimeStep(0.0)));
}

#[test]
fn test_negative_stiffness_rejected() {
    let config = SimConfig {
        response: ResponseConfig::Penalty { stiffness: -5.0 },
        ..SimConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidStiffness(-5.0)));
}

#[test]
fn test_restitution_out_of_range_rejected() {
    let config = SimConfig {
        response: ResponseConfig::Impulse {
            normal_restitution: 1.5,
            tangential_friction: 0.2,
            push_out: true,
        },
        ..SimConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidRestitution(1.5)));
}

#[test]
fn test_negative_friction_rejected() {
    let config = SimConfig {
        response: ResponseConfig::Impulse {
            normal_restitution: 0.4,
            tangential_friction: -1.0,
            push_out: false,
        },
        ..SimConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidFriction(-1.0)));
}

#[test]
fn test_negative_padding_rejected() {
    let config = SimConfig {
        boundary: Boundary::ground().with_padding(-0.1),
        ..SimConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidPadding(-0.1)));
}

#[test]
fn test_zero_normal_boundary_rejected() {
    // HalfSpace::new normalizes, so a zero normal arrives here as NaN
    let config = SimConfig {
        boundary: Boundary {
            planes: vec![HalfSpace::new(glam::Vec3::ZERO, 0.0)],
            padding: 0.0,
        },
        ..SimConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidBoundaryPlane(0)));
}

#[test]
fn test_non_finite_plane_offset_rejected() {
    let config = SimConfig {
        boundary: Boundary {
            planes: vec![
                HalfSpace::new(glam::Vec3::Y, 0.0),
                HalfSpace::new(glam::Vec3::X, f32::NAN),
            ],
            padding: 0.0,
        },
        ..SimConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidBoundaryPlane(1)));
}

#[test]
fn test_solver_refuses_invalid_config() {
    let config = SimConfig {
        dt: -1.0,
        ..SimConfig::default()
    };
    assert!(Solver::new(config).is_err());
}
