// ============================================================================
// Palette : couleurs de l'écran selon le thème et le focus
// ============================================================================
// Recalculée à chaque rendu depuis (ViewMode, focus) : rien n'est stocké.
//
//               clair        sombre
// fond          #e5e5e5      #333333
// textes        #333333      #e5e5e5
// bordure       #456DF2 si focus, gris sinon
// ============================================================================

use ratatui::style::Color;

use crate::models::ViewMode;

pub const DARK: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const LIGHT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const FOCUS_BORDER: Color = Color::Rgb(0x45, 0x6d, 0xf2);
pub const BLUR_BORDER: Color = Color::Rgb(0x80, 0x80, 0x80);

/// Couleurs d'un rendu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub title: Color,
    pub input: Color,
    pub placeholder: Color,
    pub output: Color,
    pub info: Color,
    pub border: Color,
}

impl Palette {
    pub fn new(view_mode: ViewMode, focused: bool) -> Self {
        let (background, text) = if view_mode.is_dark() {
            (DARK, LIGHT)
        } else {
            (LIGHT, DARK)
        };

        Self {
            background,
            title: text,
            input: text,
            placeholder: text,
            output: text,
            info: text,
            border: if focused { FOCUS_BORDER } else { BLUR_BORDER },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_palette() {
        let palette = Palette::new(ViewMode::Light, false);
        assert_eq!(palette.background, LIGHT);
        assert_eq!(palette.title, DARK);
        assert_eq!(palette.border, BLUR_BORDER);
    }

    #[test]
    fn test_dark_palette() {
        let palette = Palette::new(ViewMode::Dark, true);
        assert_eq!(palette.background, DARK);
        assert_eq!(palette.output, LIGHT);
        assert_eq!(palette.placeholder, LIGHT);
        assert_eq!(palette.border, FOCUS_BORDER);
    }

    #[test]
    fn test_double_toggle_restores_palette() {
        for mode in [ViewMode::Light, ViewMode::Dark] {
            for focused in [false, true] {
                let before = Palette::new(mode, focused);
                let after = Palette::new(mode.toggled().toggled(), focused);
                assert_eq!(before, after);
                assert_ne!(before, Palette::new(mode.toggled(), focused));
            }
        }
    }
}
