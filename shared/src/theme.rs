//! ==============================================================================
//! theme.rs - palette and inline style builders for the styled widgets
//! ==============================================================================
//!
//! the widgets take a variant plus a few typography knobs and turn them into
//! an inline `style` attribute. gradients follow the default palette's
//! shade 6 at a 45deg angle.
//!
//! ==============================================================================

use serde::Serialize;

// ==============================================================================
// palette
// ==============================================================================

/// named colours of the default palette that the header paints with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Cyan,
    Indigo,
}

impl PaletteColor {
    /// shade 6, the one filled and gradient variants use
    pub const fn hex(self) -> &'static str {
        match self {
            PaletteColor::Cyan => "#15aabf",
            PaletteColor::Indigo => "#4c6ef5",
        }
    }
}

// ==============================================================================
// gradient
// ==============================================================================

/// two-stop directional gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub from: PaletteColor,
    pub to: PaletteColor,
    /// angle in degrees
    pub deg: u16,
}

impl Gradient {
    pub const DEFAULT_DEG: u16 = 45;

    /// indigo to cyan, used across the header
    pub const BRAND: Gradient = Gradient::new(PaletteColor::Indigo, PaletteColor::Cyan);

    pub const fn new(from: PaletteColor, to: PaletteColor) -> Self {
        Self {
            from,
            to,
            deg: Self::DEFAULT_DEG,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "linear-gradient({}deg, {} 0%, {} 100%)",
            self.deg,
            self.from.hex(),
            self.to.hex()
        )
    }
}

/// how a widget paints itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Variant {
    /// inherit colours from the page
    #[default]
    Default,
    Gradient(Gradient),
}

impl Variant {
    pub fn gradient(&self) -> Option<&Gradient> {
        match self {
            Variant::Default => None,
            Variant::Gradient(g) => Some(g),
        }
    }
}

// ==============================================================================
// typography
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FontWeight(u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const SEMI_BOLD: FontWeight = FontWeight(600);

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

// ==============================================================================
// widget styles
// ==============================================================================

/// inline style of the Text widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStyle {
    /// `None` keeps the inherited size
    pub size_px: Option<u16>,
    pub weight: FontWeight,
    pub variant: Variant,
}

impl TextStyle {
    pub fn css(&self) -> String {
        let mut css = match self.size_px {
            Some(size) => format!("font-size: {size}px; "),
            None => String::new(),
        };
        css.push_str(&format!("font-weight: {};", self.weight.get()));

        // gradient text: paint the background, clip it to the glyphs
        if let Some(gradient) = self.variant.gradient() {
            css.push_str(&format!(
                " background-image: {}; -webkit-background-clip: text; \
                 background-clip: text; -webkit-text-fill-color: transparent;",
                gradient.css()
            ));
        }
        css
    }
}

/// inline style of the Button widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ButtonStyle {
    pub variant: Variant,
}

impl ButtonStyle {
    pub fn css(&self) -> String {
        match self.variant.gradient() {
            Some(gradient) => format!(
                "background-image: {}; color: #fff; border: 0;",
                gradient.css()
            ),
            None => String::new(),
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
