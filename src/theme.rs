//! Presentation hints. The crate only names design tokens; rendering them is up to the host.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::transaction::TransactionKind;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeColorToken {
    Surface,
    SurfaceElevated,
    SurfaceMuted,
    SurfaceInset,
    Border,
    BorderMuted,
    Accent,
    AccentSoft,
    Positive,
    Negative,
    Warning,
    Income,
    Expense,
    TextPrimary,
    TextSecondary,
    TextMuted,
}

impl ThemeColorToken {
    pub const ALL: [ThemeColorToken; 16] = [
        ThemeColorToken::Surface,
        ThemeColorToken::SurfaceElevated,
        ThemeColorToken::SurfaceMuted,
        ThemeColorToken::SurfaceInset,
        ThemeColorToken::Border,
        ThemeColorToken::BorderMuted,
        ThemeColorToken::Accent,
        ThemeColorToken::AccentSoft,
        ThemeColorToken::Positive,
        ThemeColorToken::Negative,
        ThemeColorToken::Warning,
        ThemeColorToken::Income,
        ThemeColorToken::Expense,
        ThemeColorToken::TextPrimary,
        ThemeColorToken::TextSecondary,
        ThemeColorToken::TextMuted,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ThemeColorToken::Surface => "surface",
            ThemeColorToken::SurfaceElevated => "surface-elevated",
            ThemeColorToken::SurfaceMuted => "surface-muted",
            ThemeColorToken::SurfaceInset => "surface-inset",
            ThemeColorToken::Border => "border",
            ThemeColorToken::BorderMuted => "border-muted",
            ThemeColorToken::Accent => "accent",
            ThemeColorToken::AccentSoft => "accent-soft",
            ThemeColorToken::Positive => "positive",
            ThemeColorToken::Negative => "negative",
            ThemeColorToken::Warning => "warning",
            ThemeColorToken::Income => "income",
            ThemeColorToken::Expense => "expense",
            ThemeColorToken::TextPrimary => "text-primary",
            ThemeColorToken::TextSecondary => "text-secondary",
            ThemeColorToken::TextMuted => "text-muted",
        }
    }
}

impl fmt::Display for ThemeColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// CSS custom-property reference for `token`, adding the `--` prefix when missing.
pub fn theme_var(token: &str) -> String {
    if token.starts_with("--") {
        format!("var({token})")
    } else {
        format!("var(--{token})")
    }
}

pub fn theme_color(token: ThemeColorToken) -> String {
    theme_var(&format!("color-{}", token.name()))
}

/// Token color mixed with transparency; `alpha` is clamped to `[0, 1]`.
pub fn color_with_opacity(token: ThemeColorToken, alpha: f64) -> String {
    let percentage = alpha.clamp(0.0, 1.0) * 100.0;
    format!(
        "color-mix(in srgb, {} {}%, transparent)",
        theme_color(token),
        percentage
    )
}

/// Accent token for an entry of the given kind.
pub fn accent_for(kind: TransactionKind) -> ThemeColorToken {
    match kind {
        TransactionKind::Income => ThemeColorToken::Positive,
        TransactionKind::Expense => ThemeColorToken::Negative,
    }
}
