#[cfg(test)]
mod tests {
    use crate::bands::{ArrowStyle, Rgb};
    use crate::charge::ChargeSet;
    use crate::renderer::canvas::{PlayArea, RecordingCanvas};
    use crate::renderer::draw::{lattice_points, seed_directions};
    use crate::renderer::{Anchor, Arrow, FieldMode, HeadPlacement, RenderConfig, Renderer};
    use crate::field::FieldSample;
    use approx::assert_relative_eq;
    use palette::Srgb;
    use ultraviolet::DVec2;

    const GREEN: (u8, u8, u8) = (120, 245, 120);

    fn rgb(c: (u8, u8, u8)) -> Rgb {
        Srgb::new(c.0, c.1, c.2)
    }

    #[test]
    fn lattice_covers_play_area() {
        let points = lattice_points(PlayArea::new(1180.0, 880.0), 20, 10);
        assert_eq!(points.len(), 59 * 44);
        assert_eq!(points[0], DVec2::new(10.0, 10.0));
        assert_eq!(points[1], DVec2::new(10.0, 30.0));
        assert_eq!(*points.last().unwrap(), DVec2::new(1170.0, 870.0));

        assert!(lattice_points(PlayArea::new(15.0, 15.0), 20, 10).is_empty());
    }

    #[test]
    fn start_anchored_arrow_steps_sixteen_pixels() {
        let sample = FieldSample {
            magnitude: 9.0e5,
            direction: DVec2::new(1.0, 0.0),
        };
        let arrow = Arrow::new(0, sample, Anchor::Start(DVec2::new(100.0, 50.0)), HeadPlacement::Midpoint);
        assert_eq!(arrow.start, DVec2::new(100.0, 50.0));
        assert_eq!(arrow.end, DVec2::new(116.0, 50.0));
        assert_eq!(arrow.style, ArrowStyle { length: 17, width: 2 });
        // Head sits on the midpoint, flaring back against the direction.
        assert_eq!(arrow.head[0], DVec2::new(108.0, 50.0));
        assert_eq!(arrow.head[1], DVec2::new(104.0, 46.0));
        assert_eq!(arrow.head[2], DVec2::new(104.0, 54.0));

        let back = Arrow::new(0, sample, Anchor::End(DVec2::new(100.0, 50.0)), HeadPlacement::Midpoint);
        assert_eq!(back.start, DVec2::new(84.0, 50.0));
        assert_eq!(back.end, DVec2::new(100.0, 50.0));
    }

    #[test]
    fn zero_field_arrow_collapses_to_its_anchor() {
        let p = DVec2::new(30.0, 40.0);
        for anchor in [Anchor::Start(p), Anchor::End(p), Anchor::Center(p)] {
            let arrow = Arrow::new(0, FieldSample::ZERO, anchor, HeadPlacement::Tip);
            assert_eq!(arrow.start, p);
            assert_eq!(arrow.end, p);
            assert_eq!(arrow.style, ArrowStyle::NONE);
        }
    }

    #[test]
    fn discrete_mode_with_no_charges_draws_zero_length_arrows() {
        let renderer = Renderer::default();
        let mut canvas = RecordingCanvas::new();
        let stats = renderer.draw_frame(FieldMode::Discrete, &[], &mut canvas);

        assert_eq!(stats.arrows, 59 * 44);
        assert_eq!(canvas.lines().count(), 59 * 44);
        assert_eq!(canvas.polygons().count(), 59 * 44);
        for line in canvas.lines() {
            assert_eq!(line.length(), 0.0);
            assert_eq!(line.width, 0);
            assert_eq!(line.color, rgb(GREEN));
        }
    }

    #[test]
    fn discrete_arrow_near_single_charge() {
        let mut charges = ChargeSet::new();
        charges.push(1.0, DVec2::new(10.0, 10.0), "q");
        let renderer = Renderer::default();
        let mut canvas = RecordingCanvas::new();
        renderer.draw_field_arrows(charges.as_slice(), &mut canvas);

        // Lattice point exactly on the charge: zero field, nothing to orient.
        let on_charge = canvas.lines().next().unwrap();
        assert_eq!(on_charge.start, DVec2::new(10.0, 10.0));
        assert_eq!(on_charge.length(), 0.0);

        // (110, 10) is 100 px to the right: 9e5 V/m and 9e7 V.
        let line = canvas
            .lines()
            .find(|l| (l.start + l.end) / 2.0 == DVec2::new(110.0, 10.0))
            .unwrap();
        assert_eq!(line.width, 2);
        assert_relative_eq!(line.start.x, 101.5, epsilon = 1e-9);
        assert_relative_eq!(line.end.x, 118.5, epsilon = 1e-9);
        assert_eq!(line.color, rgb((245, 66, 66)));
    }

    #[test]
    fn lone_positive_charge_emits_eight_seed_segments() {
        let renderer = Renderer::default();
        let center = renderer.play_area().center();
        let mut charges = ChargeSet::new();
        charges.push(1.0, center, "q");

        let mut canvas = RecordingCanvas::new();
        let stats = renderer.draw_field_lines(charges.as_slice(), &mut canvas);
        assert_eq!(stats.lines, 8);
        assert_eq!(stats.truncated, 0);

        let seeds: Vec<_> = canvas.lines().take(8).cloned().collect();
        for (seed, dir) in seeds.iter().zip(seed_directions()) {
            assert_eq!(seed.start, center);
            assert!((seed.length() - 16.0).abs() < 1.0, "seed length {}", seed.length());
            let d = (seed.end - seed.start).normalized();
            assert!(d.dot(dir) > 0.99);
            // A unit charge alone is far below the visible stroke tier.
            assert_eq!(seed.width, 0);
            assert_eq!(seed.color, rgb(GREEN));
        }

        let first = seed_directions()[0];
        assert_relative_eq!(first.y.atan2(first.x).to_degrees(), 22.5, epsilon = 1e-9);
    }

    #[test]
    fn positive_lines_run_outward_until_they_leave() {
        let renderer = Renderer::default();
        let area = renderer.play_area();
        let mut charges = ChargeSet::new();
        charges.push(1.0, area.center(), "q");

        let mut canvas = RecordingCanvas::new();
        let stats = renderer.draw_field_lines(charges.as_slice(), &mut canvas);
        assert_eq!(stats.segments, canvas.lines().count());
        assert!(stats.segments > 8 * 20);

        // Every segment points away from the charge and exactly one per line exits.
        let mut exits = 0;
        for line in canvas.lines() {
            let out = (line.end - area.center()).mag() - (line.start - area.center()).mag();
            assert!(out > 0.0);
            if !area.contains(line.end) {
                exits += 1;
            }
        }
        assert_eq!(exits, 8);
    }

    #[test]
    fn negative_lines_point_into_the_charge() {
        let renderer = Renderer::default();
        let area = renderer.play_area();
        let mut charges = ChargeSet::new();
        charges.push(-1.0, area.center(), "q");

        let mut canvas = RecordingCanvas::new();
        let stats = renderer.draw_field_lines(charges.as_slice(), &mut canvas);
        assert_eq!(stats.lines, 8);

        for seed in canvas.lines().take(8) {
            assert_eq!(seed.end, area.center());
        }
        for line in canvas.lines() {
            let inward = (line.start - area.center()).mag() - (line.end - area.center()).mag();
            assert!(inward > 0.0);
        }
    }

    #[test]
    fn neutral_and_empty_sets_trace_nothing() {
        let renderer = Renderer::default();
        let mut canvas = RecordingCanvas::new();
        assert_eq!(renderer.draw_field_lines(&[], &mut canvas).segments, 0);

        let mut charges = ChargeSet::new();
        charges.push(0.0, DVec2::new(100.0, 100.0), "zero");
        let stats = renderer.draw_field_lines(charges.as_slice(), &mut canvas);
        assert_eq!(stats, Default::default());
        assert!(canvas.commands.is_empty());
    }

    #[test]
    fn segment_cap_truncates_lines() {
        let renderer = Renderer::new(RenderConfig {
            max_trace_steps: 3,
            ..RenderConfig::default()
        });
        let mut charges = ChargeSet::new();
        charges.push(1.0, renderer.play_area().center(), "q");

        let mut canvas = RecordingCanvas::new();
        let stats = renderer.draw_field_lines(charges.as_slice(), &mut canvas);
        assert_eq!(stats.segments, 8 * 3);
        assert_eq!(stats.truncated, 8);
    }

    #[test]
    fn dipole_tracing_terminates() {
        let renderer = Renderer::default();
        let mut charges = ChargeSet::new();
        charges.push(1.0, DVec2::new(500.0, 440.0), "plus");
        charges.push(-1.0, DVec2::new(680.0, 440.0), "minus");

        let mut canvas = RecordingCanvas::new();
        let stats = renderer.draw_frame(FieldMode::Continuous, charges.as_slice(), &mut canvas);
        assert_eq!(stats.trace.lines, 16);
        assert!(stats.trace.segments <= 16 * renderer.config.max_trace_steps);
        assert_eq!(canvas.lines().count(), stats.trace.segments);
    }

    #[test]
    fn seeds_never_start_outside_the_area() {
        // Charge in the corner: rays heading out of the canvas are drawn but not followed.
        let renderer = Renderer::default();
        let mut charges = ChargeSet::new();
        charges.push(1.0, DVec2::new(0.0, 0.0), "corner");

        let mut canvas = RecordingCanvas::new();
        let stats = renderer.draw_field_lines(charges.as_slice(), &mut canvas);
        assert_eq!(stats.lines, 8);
        let area = renderer.play_area();
        for line in canvas.lines().skip(8) {
            assert!(area.contains(line.start));
        }
    }
}
