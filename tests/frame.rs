mod tests {
    use moonlamp_control::frame::{Command, MAX_FRAME_LEN, MOTOR_ZERO_SENTINEL};
    use moonlamp_control::{Endpoint, Rgb};

    #[test]
    fn test_preset_frame() {
        let cmd = Command::Preset(3);
        assert_eq!(cmd.endpoint(), Endpoint::ColorPreset);
        assert_eq!(&cmd.encode()[..], &[3]);
    }

    #[test]
    fn test_brightness_frame() {
        let cmd = Command::Brightness(100);
        assert_eq!(cmd.endpoint(), Endpoint::Brightness);
        assert_eq!(&cmd.encode()[..], &[100]);
    }

    #[test]
    fn test_led_frame_layout() {
        for index in 0..8u8 {
            let cmd = Command::Led {
                index,
                color: Rgb {
                    r: 10,
                    g: 20,
                    b: 30,
                },
                brightness: 50,
            };
            let frame = cmd.encode();
            assert_eq!(cmd.endpoint(), Endpoint::LedCustom);
            assert_eq!(frame.len(), 5);
            assert_eq!(&frame[..], &[index, 10, 20, 30, 50]);
        }
    }

    #[test]
    fn test_led_frame_extremes() {
        let cmd = Command::Led {
            index: 7,
            color: Rgb {
                r: 255,
                g: 0,
                b: 255,
            },
            brightness: 0,
        };
        assert_eq!(&cmd.encode()[..], &[7, 255, 0, 255, 0]);
    }

    #[test]
    fn test_motor_position_little_endian() {
        assert_eq!(&Command::MotorPosition(0).encode()[..], &[0, 0]);
        assert_eq!(&Command::MotorPosition(359).encode()[..], &[0x67, 0x01]);
        assert_eq!(
            Command::MotorPosition(359).endpoint(),
            Endpoint::MotorPosition
        );
    }

    #[test]
    fn test_motor_zero_sentinel() {
        let frame = Command::MotorZero.encode();
        assert_eq!(&frame[..], &[0xFF, 0xFF]);
        assert_eq!(Command::MotorZero.endpoint(), Endpoint::MotorPosition);

        // The sentinel never collides with a valid angle encoding.
        for angle in 0..360u16 {
            assert_ne!(angle.to_le_bytes(), MOTOR_ZERO_SENTINEL.to_le_bytes());
        }
    }

    #[test]
    fn test_frames_fit_max_len() {
        let commands = [
            Command::Preset(255),
            Command::Brightness(0),
            Command::Led {
                index: 0,
                color: Rgb { r: 1, g: 2, b: 3 },
                brightness: 100,
            },
            Command::MotorPosition(180),
            Command::MotorZero,
        ];
        for cmd in commands {
            assert!(cmd.encode().len() <= MAX_FRAME_LEN);
        }
    }
}
