use super::*;

#[test]
fn spacing_multiplies_unit() {
    assert_eq!(STOREFRONT_THEME.spacing(0), "0px");
    assert_eq!(STOREFRONT_THEME.spacing(2), "16px");
}

#[test]
fn spacing_does_not_overflow_for_large_multiples() {
    assert_eq!(STOREFRONT_THEME.spacing(8192), "65536px");
    assert_eq!(STOREFRONT_THEME.spacing(u16::MAX), "524280px");
}

#[test]
fn css_variables_declare_palette_tokens() {
    let css = STOREFRONT_THEME.css_variables();
    assert!(css.starts_with(":root {"));
    assert!(css.ends_with('}'));
    assert!(css.contains("--sf-charcoal-main: #36454f;"));
    assert!(css.contains("--sf-teal-dark: #006666;"));
    assert!(css.contains("--sf-error-light: #ef5350;"));
    assert!(css.contains("--sf-spacing: 8px;"));
}

#[test]
fn stylesheet_starts_with_baseline_reset() {
    let css = STOREFRONT_THEME.stylesheet();
    assert!(css.starts_with(BASELINE_CSS));
    assert!(css.contains("--sf-background-paper: #ffffff;"));
}

#[test]
fn baseline_references_declared_variables() {
    let declared = STOREFRONT_THEME.css_variables();
    for var in ["--sf-background-default", "--sf-text-primary", "--sf-font-family"] {
        assert!(BASELINE_CSS.contains(var), "baseline should use {var}");
        assert!(declared.contains(&format!("{var}:")), "{var} should be declared");
    }
}

#[test]
fn nav_layout_reserves_fixed_slots() {
    assert_eq!(STOREFRONT_THEME.nav.cart_slot_width_px, 48);
    assert_eq!(STOREFRONT_THEME.nav.auth_skeleton_width_px, 120);
    assert_eq!(STOREFRONT_THEME.nav.auth_skeleton_height_px, 40);
}
