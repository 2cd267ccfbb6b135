use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::palette::{Palette, PaletteKey};

/// Declares the browser theme slots once. Every slot-shaped type below is
/// generated from the same list.
macro_rules! browser_slots {
    ($($slot:ident),+ $(,)?) => {
        /// Semantic key used for every slot of the browser theme.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct BrowserThemeTemplate {
            $(pub $slot: PaletteKey,)+
        }

        /// Partial browser theme template read from the config file.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct BrowserTemplateOverrides {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $slot: Option<PaletteKey>,
            )+
        }

        /// Colors of the WebExtension `theme.colors` object.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct BrowserTheme {
            $(pub $slot: HexColor,)+
        }

        /// Slot names in manifest order.
        #[cfg(test)]
        pub const SLOT_NAMES: &[&str] = &[$(stringify!($slot)),+];

        impl BrowserThemeTemplate {
            pub fn with_overrides(mut self, overrides: &BrowserTemplateOverrides) -> Self {
                $(
                    if let Some(key) = overrides.$slot {
                        self.$slot = key;
                    }
                )+
                self
            }

            /// Semantic key assigned to each slot, in manifest order.
            #[cfg(test)]
            pub fn entries(&self) -> Vec<(&'static str, PaletteKey)> {
                vec![$((stringify!($slot), self.$slot)),+]
            }
        }

        impl BrowserTemplateOverrides {
            /// Combine two override sets; slots set in `other` win.
            pub fn merge(self, other: Self) -> Self {
                Self {
                    $($slot: other.$slot.or(self.$slot),)+
                }
            }

            pub fn is_empty(&self) -> bool {
                true $(&& self.$slot.is_none())+
            }
        }

        /// Copy the palette color of each slot's semantic key into the theme.
        pub fn generate_browser_theme(palette: &Palette, template: &BrowserThemeTemplate) -> BrowserTheme {
            BrowserTheme {
                $($slot: palette.get(template.$slot).clone(),)+
            }
        }

        impl BrowserTheme {
            /// Slot name and color pairs, in manifest order.
            #[cfg(test)]
            pub fn entries(&self) -> Vec<(&'static str, &HexColor)> {
                vec![$((stringify!($slot), &self.$slot)),+]
            }
        }
    };
}

browser_slots!(
    icons,
    icons_attention,
    frame,
    tab_text,
    tab_loading,
    tab_background_text,
    tab_selected,
    tab_line,
    tab_background_separator,
    toolbar,
    toolbar_field,
    toolbar_field_focus,
    toolbar_field_text,
    toolbar_field_text_focus,
    toolbar_field_border,
    toolbar_field_border_focus,
    toolbar_field_separator,
    toolbar_field_highlight,
    toolbar_field_highlight_text,
    toolbar_bottom_separator,
    toolbar_top_separator,
    toolbar_vertical_separator,
    ntp_background,
    ntp_text,
    popup,
    popup_border,
    popup_text,
    popup_highlight,
    popup_highlight_text,
    sidebar,
    sidebar_border,
    sidebar_text,
    sidebar_highlight,
    sidebar_highlight_text,
    bookmark_text,
    button_background_hover,
    button_background_active,
);

/// The shape `browser.theme.update()` expects: `{ "colors": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserThemeManifest<'a> {
    pub colors: &'a BrowserTheme,
}

impl BrowserTheme {
    pub fn manifest(&self) -> BrowserThemeManifest<'_> {
        BrowserThemeManifest { colors: self }
    }
}
