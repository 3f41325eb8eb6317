use approx::assert_relative_eq;
use nalgebra::Vector2;
use vortex_panels::{
    BoundVortexPanels, FreeVortexParticles, PolygonBody, RigidMotion, VelocitySource,
    VortexConfig, VortexError,
};

use crate::common::{assert_vec2_eq, create_plate_panels, inclined_flow, uniform_flow};

/// One coupled body/wake step: solve, shed, advect
fn step(
    panels: &mut BoundVortexPanels<PolygonBody>,
    wake: &mut FreeVortexParticles,
    dt: f64,
    freestream: Vector2<f64>,
) {
    panels
        .update_strengths_unsteady(dt, freestream, Some(&*wake), None, None)
        .unwrap();
    wake.add_newly_shed(&*panels).unwrap();
    wake.advect(dt, freestream, Some(&*panels as &dyn VelocitySource))
        .unwrap();
}

#[test]
fn test_impulsive_start_conserves_circulation() {
    let freestream = inclined_flow(5.0);
    let mut panels = create_plate_panels(8);
    let mut wake = FreeVortexParticles::new();

    for _ in 0..20 {
        step(&mut panels, &mut wake, 0.05, freestream);
        assert_relative_eq!(
            panels.bound_circulation() + wake.circulation(),
            0.0,
            epsilon = 1e-10
        );
    }
    assert_eq!(wake.len(), 20);
}

#[test]
fn test_impulsive_start_approaches_steady_lift() {
    let freestream = inclined_flow(5.0);
    let mut steady = create_plate_panels(8);
    steady.update_strengths(freestream).unwrap();
    let steady_circulation = steady.bound_circulation();

    let mut panels = create_plate_panels(8);
    let mut wake = FreeVortexParticles::new();
    let mut history = Vec::new();
    for _ in 0..60 {
        step(&mut panels, &mut wake, 0.05, freestream);
        history.push(panels.bound_circulation());
    }

    // lift builds up monotonically towards, but stays below, the steady value
    assert!(history.windows(2).all(|w| w[1] > w[0]));
    let ratio = history[history.len() - 1] / steady_circulation;
    assert!(ratio > 0.5 && ratio < 1.0, "circulation ratio {}", ratio);

    // the starting vortex has been swept well downstream
    let (positions, _) = wake.vortices();
    assert!(positions[0].x > 3.0);
}

#[test]
fn test_body_satisfies_no_penetration_with_wake() {
    let freestream = inclined_flow(3.0);
    let mut panels = create_plate_panels(6);
    let mut wake = FreeVortexParticles::new();
    for _ in 0..5 {
        step(&mut panels, &mut wake, 0.1, freestream);
    }

    // re-solve against the current wake and check the boundary condition,
    // counting the newly shed vortex before it joins the wake
    panels
        .update_strengths_unsteady(0.1, freestream, Some(&wake), None, None)
        .unwrap();
    let shed = panels.get_newly_shed().unwrap();
    let mut shed_only = FreeVortexParticles::new();
    shed_only.add_vortex(shed.position, shed.strength);

    crate::common::assert_no_penetration(&panels, freestream, &[&wake, &shed_only], 1e-10);
}

#[test]
fn test_explicit_total_circulation() {
    let mut panels = create_plate_panels(4);
    let mut wake = FreeVortexParticles::new();
    wake.add_vortex(Vector2::new(5.0, 0.0), 1.0);

    panels
        .update_strengths_unsteady(0.1, uniform_flow(), Some(&wake), Some(-0.4), None)
        .unwrap();
    let shed = panels.get_newly_shed().unwrap();
    assert_relative_eq!(
        panels.bound_circulation() + shed.strength,
        -0.4,
        epsilon = 1e-10
    );
}

#[test]
fn test_wake_offset_fraction_from_config() {
    let config = VortexConfig {
        wake_offset_fraction: 1.0,
        ..Default::default()
    };
    let mut panels =
        BoundVortexPanels::new(PolygonBody::flat_plate(1.0, 4), uniform_flow(), &config).unwrap();
    panels
        .update_strengths_unsteady(0.2, Vector2::new(3.0, 0.0), None, None, None)
        .unwrap();

    let shed = panels.get_newly_shed().unwrap();
    assert_vec2_eq(&shed.position, &Vector2::new(1.6, 0.0), 1e-12);
}

#[test]
fn test_translating_plate_sheds_in_inertial_frame() {
    // plate flying left through still air at unit speed
    let motion = RigidMotion::translating(Vector2::zeros(), Vector2::new(-1.0, 0.0));
    let body = PolygonBody::flat_plate(1.0, 4).with_motion(motion);
    let mut panels = BoundVortexPanels::new(body, uniform_flow(), &VortexConfig::default())
        .unwrap();
    let mut wake = FreeVortexParticles::new();
    let dt = 0.1;

    for i in 0..3 {
        panels
            .update_strengths_unsteady(dt, Vector2::zeros(), Some(&wake), None, None)
            .unwrap();
        wake.add_newly_shed(&panels).unwrap();
        wake.advect(dt, Vector2::zeros(), Some(&panels as &dyn VelocitySource))
            .unwrap();

        if let Some(motion) = panels.body_mut().motion_mut() {
            motion.advance(dt);
        }
        // zero free-stream places each new vortex at the trailing edge, and a
        // plate at zero incidence sheds zero-strength vortices that stay put
        let (positions, _) = wake.vortices();
        assert_vec2_eq(&positions[i], &Vector2::new(1.0 - dt * i as f64, 0.0), 1e-12);
    }
    assert_relative_eq!(wake.circulation(), 0.0, epsilon = 1e-10);
}

#[test]
fn test_get_newly_shed_requires_unsteady_solve() {
    let mut panels = create_plate_panels(4);
    panels.update_strengths(uniform_flow()).unwrap();
    let mut wake = FreeVortexParticles::new();
    assert!(matches!(
        wake.add_newly_shed(&panels),
        Err(VortexError::NoShedVortex)
    ));
    assert!(wake.is_empty());
}
