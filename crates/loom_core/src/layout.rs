//! Layout attributes for sections and containers
//!
//! These are render hints, not styles: each value is emitted as a `data-*`
//! attribute and the style layer maps it onto tokens.

use serde::{Deserialize, Serialize};

macro_rules! hint_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? } default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }
    };
}

hint_enum! {
    /// Vertical padding around a section
    Spacing { None => "none", Sm => "sm", Md => "md", Lg => "lg", Xl => "xl" } default Md
}

hint_enum! {
    /// Section background treatment
    Background { None => "none", Surface => "surface", Muted => "muted", Primary => "primary", Inverse => "inverse" } default None
}

hint_enum! {
    /// Horizontal extent of a section
    SectionWidth { Full => "full", Contained => "contained", Narrow => "narrow" } default Contained
}

hint_enum! {
    /// Main axis of a container
    Direction { Row => "row", Column => "column" } default Column
}

hint_enum! {
    /// Cross-axis alignment of a container's blocks
    Align { Start => "start", Center => "center", End => "end", Stretch => "stretch" } default Stretch
}

hint_enum! {
    /// Maximum content width of a container
    MaxWidth { Sm => "sm", Md => "md", Lg => "lg", Xl => "xl", Full => "full" } default Full
}

/// Layout attributes of a [`crate::Section`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionLayout {
    pub spacing: Spacing,
    pub background: Background,
    pub width: SectionWidth,
}

/// Layout attributes of a [`crate::Container`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerLayout {
    pub direction: Direction,
    pub align: Align,
    pub max_width: MaxWidth,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let section = SectionLayout::default();
        assert_eq!(section.spacing.as_str(), "md");
        assert_eq!(section.background.as_str(), "none");
        assert_eq!(section.width.as_str(), "contained");

        let container = ContainerLayout::default();
        assert_eq!(container.direction.as_str(), "column");
        assert_eq!(container.align.as_str(), "stretch");
        assert_eq!(container.max_width.as_str(), "full");
    }

    #[test]
    fn test_partial_deserialize() {
        let layout: ContainerLayout =
            serde_json::from_str(r#"{"direction":"row","maxWidth":"lg"}"#).unwrap();
        assert_eq!(layout.direction, Direction::Row);
        assert_eq!(layout.align, Align::Stretch);
        assert_eq!(layout.max_width, MaxWidth::Lg);
    }
}
