use crate::colorscheme::Colorscheme;
use crate::palette::PaletteKey;

/// Custom properties read by the extension's own stylesheets, in output order.
const CSS_PROPERTIES: &[(&str, PaletteKey)] = &[
    ("--background", PaletteKey::Background),
    ("--background-light", PaletteKey::BackgroundLight),
    ("--text", PaletteKey::Text),
    ("--accent-primary", PaletteKey::AccentPrimary),
    ("--accent-secondary", PaletteKey::AccentSecondary),
    ("--text-focus", PaletteKey::TextFocus),
];

/// Render the palette as CSS custom properties.
///
/// The selector covers both the light and dark body classes so the extension
/// pages look the same whichever class the browser theme detection picked.
pub fn generate_extension_css(colorscheme: &Colorscheme) -> String {
    let declarations: String = CSS_PROPERTIES
        .iter()
        .map(|(property, key)| format!("{}: {};", property, colorscheme.palette.get(*key)))
        .collect();
    format!("body, body.light, body.dark {{{}}}", declarations)
}

#[cfg(test)]
mod tests {
    use super::generate_extension_css;
    use crate::colorscheme::{ColorschemeTemplate, generate_colorscheme};
    use crate::palette::{CustomColors, PaletteTemplate, RawPalette};

    #[test]
    fn renders_all_properties_in_order() {
        let colors: Vec<String> = (0..16).map(|i| format!("#0000{:02x}", i)).collect();
        let raw = RawPalette::from_strings(&colors).unwrap();
        let template = ColorschemeTemplate {
            palette: PaletteTemplate {
                background: 0,
                text: 1,
                text_focus: 2,
                background_light: 3,
                accent_primary: 4,
                accent_secondary: 5,
            },
            ..ColorschemeTemplate::dark()
        };
        let scheme = generate_colorscheme(&raw, &CustomColors::default(), &template).unwrap();

        assert_eq!(
            generate_extension_css(&scheme),
            "body, body.light, body.dark {\
             --background: #000000;\
             --background-light: #000003;\
             --text: #000001;\
             --accent-primary: #000004;\
             --accent-secondary: #000005;\
             --text-focus: #000002;\
             }"
        );
    }
}
