//! Static storefront design tokens.
//!
//! The theme is rendered once into CSS custom properties (`--sf-*`) next to
//! a baseline reset; component styles in `style/main.css` only reference the
//! variables. Layout tokens that components size inline are read back from
//! the `Theme` context.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteColor {
    pub main: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub charcoal: PaletteColor,
    pub teal: PaletteColor,
    pub error: PaletteColor,
    pub background_default: &'static str,
    pub background_paper: &'static str,
    pub text_primary: &'static str,
    pub text_on_dark: &'static str,
}

/// Fixed slot sizes that keep the bar from shifting while loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLayout {
    pub cart_slot_width_px: u16,
    pub auth_skeleton_width_px: u16,
    pub auth_skeleton_height_px: u16,
    pub logo_size_px: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub nav: NavLayout,
    pub spacing_unit_px: u16,
    pub font_family: &'static str,
}

pub const STOREFRONT_THEME: Theme = Theme {
    palette: Palette {
        charcoal: PaletteColor { main: "#36454f", light: "#5e6b74", dark: "#232d34" },
        teal: PaletteColor { main: "#008080", light: "#4db3b3", dark: "#006666" },
        error: PaletteColor { main: "#d32f2f", light: "#ef5350", dark: "#c62828" },
        background_default: "#f7f8f9",
        background_paper: "#ffffff",
        text_primary: "#1f2933",
        text_on_dark: "#ffffff",
    },
    nav: NavLayout {
        cart_slot_width_px: 48,
        auth_skeleton_width_px: 120,
        auth_skeleton_height_px: 40,
        logo_size_px: 40,
    },
    spacing_unit_px: 8,
    font_family: "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif",
};

/// Document-level normalization, applied once by `ThemeWrapper`.
pub const BASELINE_CSS: &str = "\
*, *::before, *::after { box-sizing: border-box; }
html { -webkit-font-smoothing: antialiased; -moz-osx-font-smoothing: grayscale; text-size-adjust: 100%; }
body { margin: 0; background-color: var(--sf-background-default); color: var(--sf-text-primary); font-family: var(--sf-font-family); line-height: 1.5; }
strong, b { font-weight: 700; }
button { font: inherit; }
";

impl Theme {
    /// `n` spacing units in pixels, e.g. `spacing(2)` → `"16px"`.
    pub fn spacing(&self, n: u16) -> String {
        format!("{}px", u32::from(self.spacing_unit_px) * u32::from(n))
    }

    /// `:root` block declaring every token as a CSS custom property.
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        let vars = [
            ("charcoal-main", p.charcoal.main),
            ("charcoal-light", p.charcoal.light),
            ("charcoal-dark", p.charcoal.dark),
            ("teal-main", p.teal.main),
            ("teal-light", p.teal.light),
            ("teal-dark", p.teal.dark),
            ("error-main", p.error.main),
            ("error-light", p.error.light),
            ("error-dark", p.error.dark),
            ("background-default", p.background_default),
            ("background-paper", p.background_paper),
            ("text-primary", p.text_primary),
            ("text-on-dark", p.text_on_dark),
            ("font-family", self.font_family),
        ];

        let mut css = String::from(":root {\n");
        for (name, value) in vars {
            let _ = writeln!(css, "  --sf-{name}: {value};");
        }
        let _ = writeln!(css, "  --sf-spacing: {};", self.spacing(1));
        css.push('}');
        css
    }

    /// Full stylesheet: baseline reset followed by the token block.
    pub fn stylesheet(&self) -> String {
        format!("{BASELINE_CSS}{}\n", self.css_variables())
    }
}
