// Host-side tests for the theme catalog and selection state.

use dream_core::theme::*;

#[test]
fn every_theme_has_three_valid_colours_and_a_tint() {
    for theme in all_themes() {
        let stops = theme
            .gradient()
            .unwrap_or_else(|e| panic!("{}: {e}", theme.name));
        assert_eq!(stops.len(), 3);
        assert!(theme.tint().is_ok(), "{} tint", theme.name);
    }
}

#[test]
fn theme_names_are_unique_and_indexable() {
    let count = theme_count();
    assert_eq!(count, all_themes().count());
    assert_eq!(count, 18);
    for (i, theme) in all_themes().enumerate() {
        assert_eq!(theme_index_of(theme.name), Some(i));
    }
    assert_eq!(theme_index_of("No Such Theme"), None);
}

#[test]
fn categories_are_non_empty() {
    assert_eq!(THEME_CATEGORIES.len(), 6);
    for c in THEME_CATEGORIES {
        assert!(!c.themes.is_empty(), "{}", c.name);
    }
}

#[test]
fn default_state_is_lilac_blush() {
    let state = ThemeState::default();
    assert_eq!(state.current().name, "Lilac Blush");
}

#[test]
fn select_uses_flattened_index_and_rejects_out_of_range() {
    let mut state = ThemeState::default();
    assert!(state.select(3));
    assert_eq!(state.current().name, "Cotton Candy");
    assert!(!state.select(theme_count()));
    assert_eq!(state.index(), 3);
}

#[test]
fn cycle_wraps_to_first_theme() {
    let mut state = ThemeState::default();
    assert!(state.select(theme_count() - 1));
    state.cycle();
    assert_eq!(state.index(), 0);
    assert_eq!(state.current().name, "Peach Dust");
}

#[test]
fn hex_parsing() {
    let c = Rgb::from_hex("#fed7aa").unwrap();
    assert_eq!((c.r, c.g, c.b), (0xfe, 0xd7, 0xaa));
    assert_eq!(c.to_string(), "#fed7aa");
    assert!(matches!(Rgb::from_hex("fed7aa"), Err(ColorError::MissingHash(_))));
    assert!(matches!(Rgb::from_hex("#fed"), Err(ColorError::BadLength(_))));
    assert!(matches!(Rgb::from_hex("#fed7zz"), Err(ColorError::BadDigit(_))));
}

#[test]
fn linear_conversion_keeps_endpoints() {
    assert_eq!(Rgb::from_hex("#000000").unwrap().to_linear(), [0.0, 0.0, 0.0]);
    let white = Rgb::from_hex("#ffffff").unwrap().to_linear();
    for c in white {
        assert!((c - 1.0).abs() < 1e-5);
    }
    // mid grey is darker in linear light
    let grey = Rgb::from_hex("#808080").unwrap().to_linear();
    assert!(grey[0] < 0.25 && grey[0] > 0.2);
}

#[test]
fn css_gradient_lists_stops_in_order() {
    let theme = all_themes().next().unwrap();
    assert_eq!(
        theme.css_gradient(),
        "linear-gradient(to bottom, #fdf2f8, #fed7aa, #fdf2f8)"
    );
}

#[test]
fn hue_drift_is_bounded_and_periodic() {
    assert_eq!(hue_drift_deg(0.0), 0.0);
    for i in 0..500 {
        let t = i as f32 * 1.7;
        assert!(hue_drift_deg(t).abs() <= 7.0 + 1e-4);
    }
    assert!((hue_drift_deg(52.5) - 7.0).abs() < 1e-3);
    assert!((hue_drift_deg(10.0) - hue_drift_deg(220.0)).abs() < 1e-3);
}
