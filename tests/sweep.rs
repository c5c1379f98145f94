mod tests {
    use desk_presence_light::effect::{Effect, RainbowSweep};
    use desk_presence_light::{CHANNEL_COUNT, Duration, Frame, Instant, PIXELS_PER_CHANNEL};

    fn rendered(now_ms: u64) -> Frame {
        let mut sweep = RainbowSweep::default();
        let mut frame = Frame::new();
        sweep.render(Instant::from_millis(now_ms), &mut frame);
        frame
    }

    #[test]
    fn test_deterministic_at_fixed_time() {
        assert_eq!(rendered(0), rendered(0));
        assert_eq!(rendered(12_345), rendered(12_345));
    }

    #[test]
    fn test_stateless_across_calls() {
        // Rendering other timestamps first must not change the output
        // for a given timestamp.
        let mut sweep = RainbowSweep::default();
        let mut frame = Frame::new();
        sweep.render(Instant::from_millis(500), &mut frame);
        sweep.render(Instant::from_millis(9_000), &mut frame);
        sweep.render(Instant::from_millis(500), &mut frame);
        assert_eq!(frame, rendered(500));
    }

    #[test]
    fn test_hue_advances_with_time() {
        assert_ne!(rendered(0), rendered(6_000));
    }

    #[test]
    fn test_wraps_after_full_cycle() {
        // One cycle is 24s; the pattern repeats afterwards.
        assert_eq!(rendered(1_000), rendered(25_000));
    }

    #[test]
    fn test_channels_are_offset() {
        let frame = rendered(3_000);
        assert_ne!(frame.get(0, 0), frame.get(1, 0));
        assert_ne!(frame.get(1, 0), frame.get(2, 0));
    }

    #[test]
    fn test_pixels_are_offset_within_channel() {
        let frame = rendered(3_000);
        assert_ne!(frame.get(0, 0), frame.get(0, 8));
    }

    #[test]
    fn test_every_pixel_is_lit() {
        // Full saturation and value: no pixel renders black.
        let frame = rendered(7_000);
        for channel in 0..CHANNEL_COUNT {
            for pixel in 0..PIXELS_PER_CHANNEL {
                let color = frame.get(channel, pixel);
                assert!(
                    color.r > 0 || color.g > 0 || color.b > 0,
                    "black pixel at channel {channel}, pixel {pixel}"
                );
            }
        }
    }

    #[test]
    fn test_custom_cycle_duration() {
        let mut slow = RainbowSweep::default().with_cycle_duration(Duration::from_secs(48));
        let mut fast = RainbowSweep::default();
        let mut slow_frame = Frame::new();
        let mut fast_frame = Frame::new();
        slow.render(Instant::from_millis(6_000), &mut slow_frame);
        fast.render(Instant::from_millis(6_000), &mut fast_frame);
        assert_ne!(slow_frame, fast_frame);
    }
}
