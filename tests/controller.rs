mod tests {
    use desk_presence_light::{Controller, DeskLightConfig, Duration, Instant, Mode, Render};

    const FAST: Duration = Duration::from_millis(100);
    const SLOW: Duration = Duration::from_secs(1);
    const HOLD: Duration = Duration::from_secs(1);

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn controller() -> Controller {
        Controller::new(DeskLightConfig::default())
    }

    #[test]
    fn test_far_readings_stay_off() {
        // Scenario A: 200cm held for 10s never lights up anything.
        let mut controller = controller();
        for second in 0..10 {
            let plan = controller.observe(200, at(second * 1_000));
            assert_eq!(plan.mode, Mode::Off);
            assert_eq!(plan.render, Render::Clear);
        }
        assert!(!controller.gaming_enabled());
        assert!(!controller.active_desk());
    }

    #[test]
    fn test_mid_range_turns_lamp_on() {
        // Scenario B: drop to 100cm and hold.
        let mut controller = controller();
        let plan = controller.observe(100, at(0));
        assert_eq!(plan.mode, Mode::Lamp);
        assert_eq!(plan.render, Render::Lamp);
        assert_eq!(plan.cadence, SLOW);
        assert_eq!(plan.toggle_hold, Duration::from_millis(0));
        assert!(controller.active_desk());

        let plan = controller.observe(100, at(1_000));
        assert_eq!(plan.mode, Mode::Lamp);
    }

    #[test]
    fn test_lamp_lingers_for_grace_period() {
        let mut controller = controller();
        controller.observe(100, at(0));
        // Far again, but still within the grace window.
        let plan = controller.observe(200, at(3_000));
        assert_eq!(plan.mode, Mode::Lamp);
        // Grace expired.
        let plan = controller.observe(200, at(5_100));
        assert_eq!(plan.mode, Mode::Off);
    }

    #[test]
    fn test_toggle_gesture_latches_gaming_on() {
        let mut controller = controller();
        let plan = controller.observe(5, at(0));
        assert_eq!(plan.mode, Mode::ToggledOn);
        assert_eq!(plan.render, Render::Gaming);
        assert_eq!(plan.cadence, FAST);
        assert_eq!(plan.toggle_hold, HOLD);
        assert_eq!(plan.sleep_duration(), HOLD + FAST);
        assert!(controller.gaming_enabled());
    }

    #[test]
    fn test_double_toggle_restores_latch() {
        let mut controller = controller();
        controller.observe(5, at(0));
        assert!(controller.gaming_enabled());

        // Hand still in range after the forced hold: latch flips back.
        let plan = controller.observe(5, at(1_100));
        assert_eq!(plan.mode, Mode::ToggledOff);
        assert_eq!(plan.render, Render::Clear);
        assert_eq!(plan.cadence, SLOW);
        assert_eq!(plan.toggle_hold, HOLD);
        assert!(!controller.gaming_enabled());
    }

    #[test]
    fn test_toggle_outranks_every_other_branch() {
        // 5cm is below both thresholds and the desk is active; the
        // toggle branch must win.
        let mut controller = controller();
        controller.observe(100, at(0));
        assert!(controller.active_desk());

        let plan = controller.observe(5, at(1_000));
        assert_eq!(plan.mode, Mode::ToggledOn);
    }

    #[test]
    fn test_gaming_outranks_lamp() {
        let mut controller = controller();
        controller.observe(5, at(0));
        // 100cm matches both the gaming-active and the lamp condition.
        let plan = controller.observe(100, at(2_000));
        assert_eq!(plan.mode, Mode::Gaming);
        assert_eq!(plan.render, Render::Gaming);
        assert_eq!(plan.cadence, FAST);
    }

    #[test]
    fn test_gaming_enabled_but_inactive_goes_dark() {
        // Scenario C: one toggle wave, then away from the desk.
        let mut controller = controller();
        let plan = controller.observe(5, at(0));
        assert_eq!(plan.mode, Mode::ToggledOn);

        // Within the grace window the sweep keeps running.
        let plan = controller.observe(200, at(2_000));
        assert_eq!(plan.mode, Mode::Gaming);

        // Grace expired: latch stays set, strip goes dark.
        let plan = controller.observe(200, at(5_100));
        assert_eq!(plan.mode, Mode::Off);
        assert!(controller.gaming_enabled());
        assert!(!controller.active_desk());
    }

    #[test]
    fn test_off_branch_keeps_previous_cadence() {
        let mut controller = controller();
        controller.observe(5, at(0));
        assert_eq!(controller.cadence(), FAST);

        let plan = controller.observe(200, at(5_100));
        assert_eq!(plan.mode, Mode::Off);
        // The off branch does not reset the cadence.
        assert_eq!(plan.cadence, FAST);
        assert_eq!(controller.cadence(), FAST);
    }

    #[test]
    fn test_lamp_requires_gaming_disabled_when_near() {
        let mut controller = controller();
        controller.observe(5, at(0));
        // Gaming latched and desk active: near readings render the
        // sweep, not the lamp.
        let plan = controller.observe(120, at(1_500));
        assert_eq!(plan.mode, Mode::Gaming);
    }

    #[test]
    fn test_threshold_boundaries() {
        let mut controller = controller();
        // 140cm is not "near"; 139cm is.
        let plan = controller.observe(140, at(0));
        assert_eq!(plan.mode, Mode::Off);
        let plan = controller.observe(139, at(1_000));
        assert_eq!(plan.mode, Mode::Lamp);

        // 10cm is not a toggle gesture; 9cm is.
        let plan = controller.observe(10, at(2_000));
        assert_eq!(plan.mode, Mode::Lamp);
        let plan = controller.observe(9, at(3_000));
        assert_eq!(plan.mode, Mode::ToggledOn);
    }
}
