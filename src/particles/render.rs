//! Drawing the particle field: dots, proximity links, pointer effects.

use glam::Vec2;

use super::field::{Particle, ParticleField};
use crate::color::ColorStop;
use crate::input::PointerState;
use crate::options::{ParticleOptions, PointerMode};
use crate::surface::{Paint, Surface};

/// Opacity of a link between two points `distance` apart.
///
/// `max_opacity` as the distance approaches zero, falling linearly to zero
/// at `threshold` and staying there beyond it.
#[inline]
#[must_use]
pub fn connection_opacity(
    distance: f32,
    threshold: f32,
    max_opacity: f32,
) -> f32 {
    if threshold.is_nan() || threshold <= 0.0 || distance.is_nan() {
        return 0.0;
    }
    let distance = distance.max(0.0);
    if distance >= threshold {
        return 0.0;
    }
    max_opacity * (1.0 - distance / threshold)
}

/// Clear the surface and draw one frame of the field.
pub fn render_field(
    surface: &mut dyn Surface,
    field: &ParticleField,
    pointer: &PointerState,
    options: &ParticleOptions,
) {
    surface.clear();

    for p in field.particles() {
        surface.fill_circle(p.position, p.radius, &Paint::Solid(p.color));
    }

    draw_links(surface, field.particles(), options);

    let Some(at) = pointer.hover_position() else {
        return;
    };
    match options.pointer_mode {
        PointerMode::Ripple => draw_ripple(surface, at, options),
        PointerMode::Grab => draw_grab(surface, field.particles(), at, options),
        PointerMode::None => {}
    }
}

/// Stroke a line between every unique pair closer than the link distance.
///
/// Quadratic in the particle count; the count is capped by
/// `max_count` for that reason.
fn draw_links(
    surface: &mut dyn Surface,
    particles: &[Particle],
    options: &ParticleOptions,
) {
    let threshold = options.link_distance;
    let threshold_sq = threshold * threshold;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let dist_sq = a.position.distance_squared(b.position);
            if dist_sq >= threshold_sq {
                continue;
            }
            let opacity = connection_opacity(
                dist_sq.sqrt(),
                threshold,
                options.link_opacity,
            );
            if opacity > 0.0 {
                surface.stroke_line(
                    a.position,
                    b.position,
                    options.link_color.with_alpha(opacity),
                    options.link_width,
                );
            }
        }
    }
}

/// Soft radial glow centered on the pointer.
fn draw_ripple(surface: &mut dyn Surface, at: Vec2, options: &ParticleOptions) {
    let radius = options.ripple_radius;
    if radius.is_nan() || radius <= 0.0 {
        return;
    }
    let paint = ripple_paint(at, radius, options);
    surface.fill_circle(at, radius, &paint);
}

/// Radial gradient used for the pointer ripple.
#[must_use]
pub fn ripple_paint(at: Vec2, radius: f32, options: &ParticleOptions) -> Paint {
    let color = options.ripple_color;
    Paint::radial(
        at,
        0.0,
        radius,
        vec![
            ColorStop::new(0.0, color),
            ColorStop::new(1.0, color.with_alpha(0.0)),
        ],
    )
}

/// Lines from the pointer to every particle within grab distance.
fn draw_grab(
    surface: &mut dyn Surface,
    particles: &[Particle],
    at: Vec2,
    options: &ParticleOptions,
) {
    for p in particles {
        let opacity = connection_opacity(
            p.position.distance(at),
            options.grab_distance,
            options.grab_opacity,
        );
        if opacity > 0.0 {
            surface.stroke_line(
                at,
                p.position,
                options.link_color.with_alpha(opacity),
                options.link_width,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface, SurfaceSize};

    fn field(count: usize) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(11);
        ParticleField::initialize(
            SurfaceSize::new(800, 600),
            count,
            &ParticleOptions::default(),
            &mut rng,
        )
    }

    #[test]
    fn link_opacity_decays_linearly_to_zero() {
        assert_eq!(connection_opacity(100.0, 100.0, 0.1), 0.0);
        assert_eq!(connection_opacity(250.0, 100.0, 0.1), 0.0);
        assert!((connection_opacity(50.0, 100.0, 0.1) - 0.05).abs() < 1e-6);
        assert!((connection_opacity(1e-4, 100.0, 0.1) - 0.1).abs() < 1e-5);

        let mut last = f32::INFINITY;
        for d in 0..=120 {
            let o = connection_opacity(d as f32, 100.0, 0.1);
            assert!(o <= last);
            last = o;
        }
    }

    #[test]
    fn frame_starts_with_a_clear_then_one_circle_per_particle() {
        let field = field(40);
        let mut surface = RecordingSurface::new(field.size());
        render_field(
            &mut surface,
            &field,
            &PointerState::default(),
            &ParticleOptions::default(),
        );
        let cmds = surface.commands();
        assert!(matches!(cmds[0], DrawCommand::ClearRect { .. }));
        let circles = cmds
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count();
        assert_eq!(circles, 40);
    }

    #[test]
    fn links_only_join_close_pairs() {
        let field = field(60);
        let options = ParticleOptions::default();
        let mut surface = RecordingSurface::new(field.size());
        render_field(&mut surface, &field, &PointerState::default(), &options);

        let mut expected = 0;
        let ps = field.particles();
        for i in 0..ps.len() {
            for j in i + 1..ps.len() {
                if ps[i].position.distance(ps[j].position) < 100.0 {
                    expected += 1;
                }
            }
        }
        let mut links = 0;
        for cmd in surface.commands() {
            if let DrawCommand::StrokeLine { from, to, color, .. } = cmd {
                links += 1;
                assert!(from.distance(*to) < 100.0);
                assert!(color.a > 0.0 && color.a <= 0.1);
            }
        }
        assert_eq!(links, expected);
    }

    #[test]
    fn ripple_centers_on_the_hovered_particle() {
        let field = field(10);
        let target = field.particles()[3].position;
        let pointer = PointerState::new(target, true);
        let mut surface = RecordingSurface::new(field.size());
        render_field(&mut surface, &field, &pointer, &ParticleOptions::default());

        let ripple = surface.commands().iter().find_map(|c| match c {
            DrawCommand::FillCircle {
                paint: Paint::Radial(g),
                center,
                ..
            } => Some((*center, g.center)),
            _ => None,
        });
        let (circle_center, gradient_center) = ripple.unwrap();
        assert!(circle_center.distance(target) < 1e-4);
        assert!(gradient_center.distance(target) < 1e-4);
    }

    #[test]
    fn no_pointer_effect_without_hover() {
        let field = field(10);
        let pointer = PointerState::new(Vec2::new(5.0, 5.0), false);
        let mut surface = RecordingSurface::new(field.size());
        render_field(&mut surface, &field, &pointer, &ParticleOptions::default());
        assert!(!surface.commands().iter().any(|c| matches!(
            c,
            DrawCommand::FillCircle {
                paint: Paint::Radial(_),
                ..
            }
        )));
    }

    #[test]
    fn grab_mode_reaches_nearby_particles() {
        let field = field(30);
        let at = field.particles()[0].position;
        let options = ParticleOptions {
            pointer_mode: PointerMode::Grab,
            link_distance: 0.0,
            ..ParticleOptions::default()
        };
        let mut surface = RecordingSurface::new(field.size());
        render_field(&mut surface, &field, &PointerState::new(at, true), &options);

        let grabbed = field
            .particles()
            .iter()
            .filter(|p| p.position.distance(at) < options.grab_distance)
            .count();
        let lines = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { from, .. } if *from == at))
            .count();
        // The particle under the pointer is at distance zero and still gets
        // a (degenerate) line at full grab opacity.
        assert_eq!(lines, grabbed);
    }
}
