//! static content of the site header

use serde::Serialize;

use crate::routes::AppRoute;
use crate::theme::{ButtonStyle, FontWeight, Gradient, TextStyle, Variant};

/// brand shown on the left of the bar
pub const BRAND_NAME: &str = "آرنو";

/// call to action, "sign in / sign up". carries a zero width non-joiner.
pub const CTA_LABEL: &str = "ورود / ثبت\u{200c}نام";

pub const TITLE_SIZE_PX: u16 = 32;

/// everything the header renders, in one place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderContent {
    pub brand: &'static str,
    pub cta_label: &'static str,
    pub cta_target: AppRoute,
    pub accent: Gradient,
}

pub const HEADER: HeaderContent = HeaderContent {
    brand: BRAND_NAME,
    cta_label: CTA_LABEL,
    cta_target: AppRoute::Register,
    accent: Gradient::BRAND,
};

impl HeaderContent {
    pub fn title_style(&self) -> TextStyle {
        TextStyle {
            size_px: Some(TITLE_SIZE_PX),
            weight: FontWeight::SEMI_BOLD,
            variant: Variant::Gradient(self.accent),
        }
    }

    pub fn cta_style(&self) -> ButtonStyle {
        ButtonStyle {
            variant: Variant::Gradient(self.accent),
        }
    }

    pub fn cta_href(&self) -> &'static str {
        self.cta_target.path()
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cta_targets_register() {
        assert_eq!(HEADER.cta_href(), "/register");
        assert_eq!(HEADER.cta_target, AppRoute::Register);
    }

    #[test]
    fn test_brand_literal() {
        assert_eq!(HEADER.brand, "آرنو");
        assert_eq!(HEADER.brand.chars().count(), 4);
    }

    #[test]
    fn test_cta_label_keeps_zwnj() {
        assert!(HEADER.cta_label.contains('\u{200c}'));
        assert!(HEADER.cta_label.starts_with("ورود / "));
    }

    #[test]
    fn test_title_and_button_share_gradient() {
        let title = HEADER.title_style();
        let cta = HEADER.cta_style();
        assert_eq!(title.size_px, Some(32));
        assert_eq!(title.weight.get(), 600);
        assert_eq!(title.variant, cta.variant);
        assert_eq!(title.variant, Variant::Gradient(Gradient::BRAND));
    }

    #[test]
    fn test_header_is_stable_across_reads() {
        let first = serde_json::to_string(&HEADER).unwrap();
        let second = serde_json::to_string(&HEADER).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("\"cta_target\":\"register\""));
    }
}
