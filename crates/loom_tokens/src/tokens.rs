//! Semantic token names and their default scales

/// Strip a leading `--` so names can be given either way
pub fn normalize_name(name: &str) -> &str {
    name.trim().trim_start_matches("--")
}

/// CSS custom property reference for a token name
pub fn css_var(name: &str) -> String {
    format!("var(--{})", normalize_name(name))
}

/// Whether a name/value pair can be written as a custom property declaration.
///
/// Names are limited to ASCII letters, digits, `-` and `_`. Values may not
/// contain control characters, backslashes or any of `;{}<>`, so a value can
/// never end its declaration, its rule or an enclosing `<style>` element.
pub fn is_valid_entry(name: &str, value: &str) -> bool {
    let name = normalize_name(name);
    let name_ok = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    let value_ok = !value
        .chars()
        .any(|c| c.is_control() || matches!(c, ';' | '{' | '}' | '<' | '>' | '\\'));
    name_ok && value_ok
}

// =============================================================================
// Color
// =============================================================================

/// Semantic color tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Primary,
    PrimaryHover,
    Secondary,
    Accent,
    Background,
    Surface,
    SurfaceMuted,
    TextPrimary,
    TextSecondary,
    TextInverse,
    TextLink,
    Border,
    Success,
    Warning,
    Error,
}

impl ColorToken {
    pub const ALL: [ColorToken; 15] = [
        ColorToken::Primary,
        ColorToken::PrimaryHover,
        ColorToken::Secondary,
        ColorToken::Accent,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::SurfaceMuted,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::TextInverse,
        ColorToken::TextLink,
        ColorToken::Border,
        ColorToken::Success,
        ColorToken::Warning,
        ColorToken::Error,
    ];

    /// Token name as used in a [`crate::TokenSet`]
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Primary => "color-primary",
            ColorToken::PrimaryHover => "color-primary-hover",
            ColorToken::Secondary => "color-secondary",
            ColorToken::Accent => "color-accent",
            ColorToken::Background => "color-background",
            ColorToken::Surface => "color-surface",
            ColorToken::SurfaceMuted => "color-surface-muted",
            ColorToken::TextPrimary => "color-text-primary",
            ColorToken::TextSecondary => "color-text-secondary",
            ColorToken::TextInverse => "color-text-inverse",
            ColorToken::TextLink => "color-text-link",
            ColorToken::Border => "color-border",
            ColorToken::Success => "color-success",
            ColorToken::Warning => "color-warning",
            ColorToken::Error => "color-error",
        }
    }

    pub fn css_var(self) -> String {
        css_var(self.name())
    }
}

/// Default color scale
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorTokens {
    pub primary: &'static str,
    pub primary_hover: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_muted: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_inverse: &'static str,
    pub text_link: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            primary: "#2563eb",
            primary_hover: "#1d4ed8",
            secondary: "#64748b",
            accent: "#f59e0b",
            background: "#ffffff",
            surface: "#ffffff",
            surface_muted: "#f1f5f9",
            text_primary: "#0f172a",
            text_secondary: "#475569",
            text_inverse: "#ffffff",
            text_link: "#2563eb",
            border: "#e2e8f0",
            success: "#16a34a",
            warning: "#d97706",
            error: "#dc2626",
        }
    }
}

impl ColorTokens {
    pub fn get(&self, token: ColorToken) -> &'static str {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryHover => self.primary_hover,
            ColorToken::Secondary => self.secondary,
            ColorToken::Accent => self.accent,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceMuted => self.surface_muted,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextInverse => self.text_inverse,
            ColorToken::TextLink => self.text_link,
            ColorToken::Border => self.border,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
        }
    }
}

// =============================================================================
// Spacing
// =============================================================================

/// Spacing scale tokens (4px base)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpacingToken {
    Space0,
    Space1,
    Space2,
    Space3,
    Space4,
    Space6,
    Space8,
    Space12,
    Space16,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 9] = [
        SpacingToken::Space0,
        SpacingToken::Space1,
        SpacingToken::Space2,
        SpacingToken::Space3,
        SpacingToken::Space4,
        SpacingToken::Space6,
        SpacingToken::Space8,
        SpacingToken::Space12,
        SpacingToken::Space16,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpacingToken::Space0 => "spacing-0",
            SpacingToken::Space1 => "spacing-1",
            SpacingToken::Space2 => "spacing-2",
            SpacingToken::Space3 => "spacing-3",
            SpacingToken::Space4 => "spacing-4",
            SpacingToken::Space6 => "spacing-6",
            SpacingToken::Space8 => "spacing-8",
            SpacingToken::Space12 => "spacing-12",
            SpacingToken::Space16 => "spacing-16",
        }
    }

    pub fn css_var(self) -> String {
        css_var(self.name())
    }
}

/// Default spacing scale
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpacingTokens {
    pub space_0: &'static str,
    pub space_1: &'static str,
    pub space_2: &'static str,
    pub space_3: &'static str,
    pub space_4: &'static str,
    pub space_6: &'static str,
    pub space_8: &'static str,
    pub space_12: &'static str,
    pub space_16: &'static str,
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            space_0: "0px",
            space_1: "4px",
            space_2: "8px",
            space_3: "12px",
            space_4: "16px",
            space_6: "24px",
            space_8: "32px",
            space_12: "48px",
            space_16: "64px",
        }
    }
}

impl SpacingTokens {
    pub fn get(&self, token: SpacingToken) -> &'static str {
        match token {
            SpacingToken::Space0 => self.space_0,
            SpacingToken::Space1 => self.space_1,
            SpacingToken::Space2 => self.space_2,
            SpacingToken::Space3 => self.space_3,
            SpacingToken::Space4 => self.space_4,
            SpacingToken::Space6 => self.space_6,
            SpacingToken::Space8 => self.space_8,
            SpacingToken::Space12 => self.space_12,
            SpacingToken::Space16 => self.space_16,
        }
    }
}

// =============================================================================
// Radius
// =============================================================================

/// Border radius tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RadiusToken {
    None,
    Sm,
    Default,
    Md,
    Lg,
    Xl,
    Full,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 7] = [
        RadiusToken::None,
        RadiusToken::Sm,
        RadiusToken::Default,
        RadiusToken::Md,
        RadiusToken::Lg,
        RadiusToken::Xl,
        RadiusToken::Full,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RadiusToken::None => "radius-none",
            RadiusToken::Sm => "radius-sm",
            RadiusToken::Default => "radius-default",
            RadiusToken::Md => "radius-md",
            RadiusToken::Lg => "radius-lg",
            RadiusToken::Xl => "radius-xl",
            RadiusToken::Full => "radius-full",
        }
    }

    pub fn css_var(self) -> String {
        css_var(self.name())
    }
}

/// Default radius scale
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadiusTokens {
    pub radius_none: &'static str,
    pub radius_sm: &'static str,
    pub radius_default: &'static str,
    pub radius_md: &'static str,
    pub radius_lg: &'static str,
    pub radius_xl: &'static str,
    pub radius_full: &'static str,
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_none: "0px",
            radius_sm: "2px",
            radius_default: "4px",
            radius_md: "6px",
            radius_lg: "8px",
            radius_xl: "12px",
            radius_full: "9999px",
        }
    }
}

impl RadiusTokens {
    pub fn get(&self, token: RadiusToken) -> &'static str {
        match token {
            RadiusToken::None => self.radius_none,
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Default => self.radius_default,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
            RadiusToken::Xl => self.radius_xl,
            RadiusToken::Full => self.radius_full,
        }
    }
}
