mod tests {
    use embassy_time::Instant;
    use gauntlet_light::{AccelerationVector, GauntletConfig, GestureDetector};

    // Pitch = atan2(-x, sqrt(y² + z²)); unit-g vectors at known tilts.
    const FLAT: AccelerationVector = AccelerationVector::new(0.0, 0.0, 1.0);
    const TILTED_30: AccelerationVector = AccelerationVector::new(-0.5, 0.0, 0.866);
    const RAISED_60: AccelerationVector = AccelerationVector::new(-0.866, 0.0, 0.5);
    const VERTICAL: AccelerationVector = AccelerationVector::new(-1.0, 0.0, 0.0);

    fn detector() -> GestureDetector {
        GestureDetector::new(&GauntletConfig::default())
    }

    #[test]
    fn test_pitch_degrees() {
        assert!(FLAT.pitch_degrees().abs() < 0.5);
        assert!((TILTED_30.pitch_degrees() - 30.0).abs() < 0.5);
        assert!((RAISED_60.pitch_degrees() - 60.0).abs() < 0.5);
        assert!((VERTICAL.pitch_degrees() - 90.0).abs() < 0.5);
    }

    #[test]
    fn test_below_threshold_never_triggers() {
        let mut detector = detector();
        for ms in (0..2000).step_by(20) {
            assert!(!detector.poll(Some(TILTED_30), Instant::from_millis(ms)));
        }
    }

    #[test]
    fn test_rising_edge_triggers_exactly_once() {
        let mut detector = detector();
        assert!(!detector.poll(Some(FLAT), Instant::from_millis(1000)));
        assert!(detector.poll(Some(RAISED_60), Instant::from_millis(1020)));

        // Sustained raise stays quiet, even as the pitch keeps climbing.
        assert!(!detector.poll(Some(RAISED_60), Instant::from_millis(1040)));
        assert!(!detector.poll(Some(VERTICAL), Instant::from_millis(1060)));
    }

    #[test]
    fn test_retrigger_after_lower_and_raise() {
        let mut detector = detector();
        assert!(detector.poll(Some(RAISED_60), Instant::from_millis(500)));
        assert!(!detector.poll(Some(RAISED_60), Instant::from_millis(600)));
        assert!(!detector.poll(Some(FLAT), Instant::from_millis(700)));
        assert!(detector.poll(Some(RAISED_60), Instant::from_millis(800)));
    }

    #[test]
    fn test_second_rise_inside_debounce_window() {
        let mut detector = detector();
        assert!(detector.poll(Some(RAISED_60), Instant::from_millis(1000)));
        assert!(!detector.poll(Some(FLAT), Instant::from_millis(1020)));

        // Second edge 50 ms after the accepted trigger is suppressed...
        assert!(!detector.poll(Some(RAISED_60), Instant::from_millis(1050)));
        // ...but the detector stays unarmed, so a hand still raised when the
        // window expires triggers then.
        assert!(detector.poll(Some(RAISED_60), Instant::from_millis(1100)));
    }

    #[test]
    fn test_boot_debounce_window() {
        // last_trigger starts at t=0, so the first debounce interval of
        // uptime rejects triggers.
        let mut detector = detector();
        assert!(!detector.poll(Some(RAISED_60), Instant::from_millis(0)));
        assert!(!detector.poll(Some(RAISED_60), Instant::from_millis(60)));
        assert!(detector.poll(Some(RAISED_60), Instant::from_millis(120)));
    }

    #[test]
    fn test_missing_sample_changes_nothing() {
        let mut detector = detector();
        assert!(!detector.poll(None, Instant::from_millis(1000)));
        assert!(detector.poll(Some(RAISED_60), Instant::from_millis(1020)));

        // A gap in sensor data does not re-arm a raised hand.
        assert!(!detector.poll(None, Instant::from_millis(1040)));
        assert!(!detector.poll(Some(RAISED_60), Instant::from_millis(1060)));
    }

    #[test]
    fn test_custom_threshold() {
        let config = GauntletConfig {
            activation_angle_degrees: 70.0,
            ..GauntletConfig::default()
        };
        let mut detector = GestureDetector::new(&config);
        assert!(!detector.poll(Some(RAISED_60), Instant::from_millis(1000)));
        assert!(detector.poll(Some(VERTICAL), Instant::from_millis(1020)));
    }
}
