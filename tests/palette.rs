mod tests {
    use embassy_time::Duration;
    use gauntlet_light::{GauntletConfig, Palette, Rgb};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GOLD: Rgb = Rgb { r: 255, g: 180, b: 0 };

    #[test]
    fn test_colors_alternate_by_index_parity() {
        let palette = Palette::new(RED, GOLD);
        assert_eq!(palette.color_at(0), RED);
        assert_eq!(palette.color_at(1), GOLD);
        assert_eq!(palette.color_at(2), RED);
        assert_eq!(palette.color_at(255), GOLD);
    }

    #[test]
    fn test_solid_palette_collapses_both_slots() {
        let palette = Palette::solid(RED);
        assert_eq!(palette.color_at(0), palette.color_at(1));
    }

    #[test]
    fn test_default_config() {
        let config = GauntletConfig::default();
        assert_eq!(config.led_count, 4);
        assert_eq!(config.base_brightness, 200);
        assert!((config.activation_angle_degrees - 45.0).abs() < f32::EPSILON);
        assert_eq!(config.debounce_interval, Duration::from_millis(100));
        assert_eq!(config.active_duration, Duration::from_millis(3000));
        assert_eq!(config.power_up_duration, Duration::from_millis(500));
        assert_eq!(config.fade_out_duration, Duration::from_millis(1000));
        assert_eq!(config.palette, Palette::new(RED, GOLD));
    }
}
