use super::*;

#[test]
fn defaults_match_the_stock_control() {
    let config = SlideToggleConfig::default();
    assert_eq!(config.remain_distance, 10.0);
    assert_eq!(config.block_margins, EdgeInsets::uniform(1.0));
    assert_eq!(config.block_width_px(), 50.0);
    assert_eq!(config.text_size_px(), 14.0);
    assert_eq!(config.text_color, Color::WHITE);
    assert_eq!(config.highlight_delay_millis, 100);
    assert!(config.open_text.is_none() && config.close_text.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn density_scales_dp_lengths() {
    let config = SlideToggleConfig::default().with_density(2.5);
    assert_eq!(config.block_width_px(), 125.0);
    assert_eq!(config.text_size_px(), 35.0);
}

#[test]
fn builder_sets_fields() {
    let config = SlideToggleConfig::default()
        .with_open_text("on")
        .with_close_text("off")
        .with_remain_distance(24.0)
        .with_open_background(Brush::solid(Color::BLACK))
        .with_highlight_delay_millis(0);
    assert_eq!(config.open_text.as_deref(), Some("on"));
    assert_eq!(config.close_text.as_deref(), Some("off"));
    assert_eq!(config.remain_distance, 24.0);
    assert_eq!(config.open_background, Some(Brush::Solid(Color::BLACK)));
    assert_eq!(config.highlight_delay_millis, 0);
}

#[test]
fn non_finite_values_are_rejected() {
    let config = SlideToggleConfig::default().with_remain_distance(f32::NAN);
    match config.validate() {
        Err(ConfigError::NonFinite { field, .. }) => assert_eq!(field, "remain_distance"),
        other => panic!("unexpected {other:?}"),
    }

    let config = SlideToggleConfig::default().with_block_width(Dp(f32::INFINITY));
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonFinite {
            field: "block_width",
            ..
        })
    ));
}

#[test]
fn zero_density_is_rejected() {
    let err = SlideToggleConfig::default()
        .with_density(0.0)
        .validate()
        .unwrap_err();
    assert_eq!(err, ConfigError::InvalidDensity { density: 0.0 });
    assert!(err.to_string().contains("density"));
}

#[test]
fn negative_margins_are_degraded_not_errors() {
    let config =
        SlideToggleConfig::default().with_block_margins(EdgeInsets::uniform(-3.0));
    assert!(config.validate().is_ok());
}
