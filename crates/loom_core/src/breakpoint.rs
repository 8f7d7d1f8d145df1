//! Viewport breakpoints
//!
//! Breakpoints form a strict narrowing order: desktop is the base, tablet
//! overrides desktop, mobile overrides both. The derived `Ord` follows that
//! order, so `Desktop < Tablet < Mobile`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Widths below this render as mobile
pub const TABLET_MIN_WIDTH: u32 = 768;
/// Widths below this (and at least [`TABLET_MIN_WIDTH`]) render as tablet
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

/// A named viewport-size tier
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    /// All breakpoints, widest first
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Desktop => "desktop",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Mobile => "mobile",
        }
    }

    /// Breakpoint for a viewport width in CSS pixels
    pub fn from_width(width: u32) -> Self {
        if width < TABLET_MIN_WIDTH {
            Breakpoint::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Override levels that apply at this breakpoint, widest first.
    ///
    /// Desktop is the base and has no override level of its own.
    pub fn cascade(self) -> &'static [Breakpoint] {
        match self {
            Breakpoint::Desktop => &[],
            Breakpoint::Tablet => &[Breakpoint::Tablet],
            Breakpoint::Mobile => &[Breakpoint::Tablet, Breakpoint::Mobile],
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Breakpoint::Desktop),
            "tablet" => Ok(Breakpoint::Tablet),
            "mobile" => Ok(Breakpoint::Mobile),
            _ => Err(ModelError::UnknownBreakpoint(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrowing_order() {
        assert!(Breakpoint::Desktop < Breakpoint::Tablet);
        assert!(Breakpoint::Tablet < Breakpoint::Mobile);
        assert_eq!(Breakpoint::default(), Breakpoint::Desktop);
    }

    #[test]
    fn test_from_width() {
        assert_eq!(Breakpoint::from_width(375), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(767), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1023), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1024), Breakpoint::Desktop);
    }

    #[test]
    fn test_cascade() {
        assert!(Breakpoint::Desktop.cascade().is_empty());
        assert_eq!(Breakpoint::Tablet.cascade(), &[Breakpoint::Tablet]);
        assert_eq!(
            Breakpoint::Mobile.cascade(),
            &[Breakpoint::Tablet, Breakpoint::Mobile]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("Mobile".parse::<Breakpoint>().unwrap(), Breakpoint::Mobile);
        assert_eq!(" tablet ".parse::<Breakpoint>().unwrap(), Breakpoint::Tablet);
        assert!(matches!(
            "watch".parse::<Breakpoint>(),
            Err(ModelError::UnknownBreakpoint(name)) if name == "watch"
        ));
    }
}
