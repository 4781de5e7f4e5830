mod tests {
    use moonlamp_control::ring::{Point, angle_from_cursor, marker_line, swatch_position};

    const CENTER: Point = Point { x: 125.0, y: 125.0 };

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_swatch_positions_on_cardinals() {
        // LED 0 at 12 o'clock.
        let top = swatch_position(0, CENTER, 100.0);
        assert!(close(top.x, 125.0) && close(top.y, 25.0));

        // LED 2 at 3 o'clock.
        let right = swatch_position(2, CENTER, 100.0);
        assert!(close(right.x, 225.0) && close(right.y, 125.0));

        // LED 4 at 6 o'clock.
        let bottom = swatch_position(4, CENTER, 100.0);
        assert!(close(bottom.x, 125.0) && close(bottom.y, 225.0));

        // LED 6 at 9 o'clock.
        let left = swatch_position(6, CENTER, 100.0);
        assert!(close(left.x, 25.0) && close(left.y, 125.0));
    }

    #[test]
    fn test_swatches_stay_on_radius() {
        for i in 0..8 {
            let p = swatch_position(i, CENTER, 100.0);
            let dist = ((p.x - CENTER.x).powi(2) + (p.y - CENTER.y).powi(2)).sqrt();
            assert!(close(dist, 100.0));
        }
    }

    #[test]
    fn test_marker_line_is_radial() {
        let (inner, outer) = marker_line(90.0, CENTER, 90.0, 100.0);
        // 90 degrees points right (3 o'clock).
        assert!(close(inner.x, 215.0) && close(inner.y, 125.0));
        assert!(close(outer.x, 225.0) && close(outer.y, 125.0));
    }

    #[test]
    fn test_angle_from_cursor_quadrants() {
        // Straight up from center is 0 degrees.
        assert_eq!(angle_from_cursor(0.0, -50.0), 0);
        // Right is 90.
        assert_eq!(angle_from_cursor(50.0, 0.0), 90);
        // Down is 180.
        assert_eq!(angle_from_cursor(0.0, 50.0), 180);
        // Left is 270.
        assert_eq!(angle_from_cursor(-50.0, 0.0), 270);
    }

    #[test]
    fn test_angle_from_cursor_diagonals() {
        assert_eq!(angle_from_cursor(50.0, -50.0), 45);
        assert_eq!(angle_from_cursor(-50.0, -50.0), 315);
    }

    #[test]
    fn test_angle_from_cursor_in_range() {
        for step in 0..72 {
            let rad = (step as f32) * 5.0 * core::f32::consts::PI / 180.0;
            let angle = angle_from_cursor(rad.cos() * 80.0, rad.sin() * 80.0);
            assert!(angle < 360);
        }
    }
}
