use approx::assert_relative_eq;
use nalgebra::Vector2;
use std::f64::consts::PI;
use vortex_panels::{BoundVortexPanels, PolygonBody, RigidMotion, VortexConfig};

use crate::common::{
    assert_no_penetration, create_plate_panels, create_square_body, inclined_flow, uniform_flow,
};

#[test]
fn test_square_steady_no_penetration() {
    let mut panels =
        BoundVortexPanels::new(create_square_body(), uniform_flow(), &VortexConfig::default())
            .unwrap();
    panels.update_strengths(uniform_flow()).unwrap();

    assert_no_penetration(&panels, uniform_flow(), &[], 1e-10);
}

#[test]
fn test_square_steady_has_no_net_circulation() {
    let mut panels =
        BoundVortexPanels::new(create_square_body(), uniform_flow(), &VortexConfig::default())
            .unwrap();
    panels.update_strengths(uniform_flow()).unwrap();

    let (_, strengths) = panels.vortices();
    assert_eq!(strengths.len(), 4);
    assert_relative_eq!(strengths.iter().sum::<f64>(), 0.0, epsilon = 1e-10);
    // symmetric about the flow axis: upper and lower panels cancel
    assert_relative_eq!(strengths[0], -strengths[3], epsilon = 1e-10);
}

#[test]
fn test_flat_plate_matches_thin_airfoil_lift() {
    // Kutta-Joukowski on a flat plate: circulation = pi * c * U * sin(alpha)
    let alpha = 5.0;
    let mut panels = create_plate_panels(4);
    panels.update_strengths(inclined_flow(alpha)).unwrap();

    let expected = PI * f64::to_radians(alpha).sin();
    assert_relative_eq!(panels.bound_circulation(), expected, max_relative = 0.01);
    assert_no_penetration(&panels, inclined_flow(alpha), &[], 1e-10);
}

#[test]
fn test_rotated_body_sees_rotated_flow() {
    // a plate pitched nose-up by alpha in a horizontal stream is equivalent
    // to a level plate in a stream inclined by alpha
    let alpha = 4.0;
    let mut level = create_plate_panels(6);
    level.update_strengths(inclined_flow(alpha)).unwrap();

    // points run trailing edge to leading edge, so nose-up is a clockwise rotation
    let pitched_body = PolygonBody::flat_plate(1.0, 6).with_motion(RigidMotion::new(
        Vector2::zeros(),
        Vector2::zeros(),
        -f64::to_radians(alpha),
        0.0,
    ));
    let mut pitched =
        BoundVortexPanels::new(pitched_body, uniform_flow(), &VortexConfig::default()).unwrap();
    pitched.update_strengths(uniform_flow()).unwrap();

    assert_relative_eq!(
        pitched.bound_circulation(),
        level.bound_circulation(),
        max_relative = 1e-10
    );
}
