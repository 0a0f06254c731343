// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the default snackbar and the demo application.
//!
//! # Organization
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Inverse surfaces: a snackbar sits on the opposite end of the theme so
    // it reads as a temporary layer above regular content.
    pub const INVERSE_SURFACE_DARK: Color = Color::from_rgb(0.19, 0.19, 0.22);
    pub const INVERSE_SURFACE_LIGHT: Color = Color::from_rgb(0.91, 0.91, 0.94);

    // Action accent
    pub const ACTION_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // On dark surfaces
    pub const ACTION_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // On light surfaces
}

// ============================================================================
// Opacity Levels
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const SECONDARY_TEXT: f32 = 0.7;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of a snackbar card (the Material single-line snackbar width).
    pub const SNACKBAR_WIDTH: f32 = 344.0;

    /// Minimum height of a snackbar card.
    pub const SNACKBAR_MIN_HEIGHT: f32 = 48.0;

    pub const ICON_SM: f32 = 16.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - prominent labels, demo heading
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - snackbar messages, button labels
    pub const BODY: f32 = 14.0;

    /// Small body - hints, secondary labels
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_monotonic() {
        assert!(spacing::XXS < spacing::XS);
        assert!(spacing::XS < spacing::SM);
        assert!(spacing::SM < spacing::MD);
        assert!(spacing::MD < spacing::LG);
    }

    #[test]
    fn inverse_surfaces_sit_on_opposite_ends() {
        assert!(palette::INVERSE_SURFACE_DARK.r < palette::INVERSE_SURFACE_LIGHT.r);
    }
}
