mod tests {
    use moonlamp_control::color::{Rgb, rgb_from_hex, rgb_to_hex, scale_by_percent};

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(
            rgb_from_hex("#ffdc96"),
            Some(Rgb {
                r: 255,
                g: 220,
                b: 150
            })
        );
        assert_eq!(rgb_from_hex("000000"), Some(Rgb { r: 0, g: 0, b: 0 }));
        assert_eq!(
            rgb_from_hex("#FFDC96"),
            Some(Rgb {
                r: 255,
                g: 220,
                b: 150
            })
        );
    }

    #[test]
    fn test_rgb_from_hex_rejects_malformed() {
        assert_eq!(rgb_from_hex(""), None);
        assert_eq!(rgb_from_hex("#fff"), None);
        assert_eq!(rgb_from_hex("#ffdc9"), None);
        assert_eq!(rgb_from_hex("#ffdc966"), None);
        assert_eq!(rgb_from_hex("#ggdc96"), None);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(
            rgb_to_hex(Rgb {
                r: 255,
                g: 220,
                b: 150
            })
            .as_str(),
            "#ffdc96"
        );
        assert_eq!(rgb_to_hex(Rgb { r: 0, g: 7, b: 15 }).as_str(), "#00070f");
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Rgb {
            r: 18,
            g: 52,
            b: 86,
        };
        assert_eq!(rgb_from_hex(rgb_to_hex(color).as_str()), Some(color));
    }

    #[test]
    fn test_scale_by_percent() {
        let color = Rgb {
            r: 200,
            g: 100,
            b: 50,
        };
        assert_eq!(scale_by_percent(color, 100), color);
        assert_eq!(scale_by_percent(color, 0), Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(
            scale_by_percent(color, 50),
            Rgb {
                r: 100,
                g: 50,
                b: 25
            }
        );
        // Over-range percentages saturate at 100.
        assert_eq!(scale_by_percent(color, 255), color);
    }
}
