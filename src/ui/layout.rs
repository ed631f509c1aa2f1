// ============================================================================
// Layout : géométrie de l'écran
// ============================================================================
// Source unique des zones de l'écran, utilisée à la fois pour le rendu et
// pour retrouver l'élément sous un clic de souris.
//
//            (espace)
//      Currency Transducer        <- titre (cliquable)
//
//          ┌───────────┐
//          │ USD       │          <- champ de saisie
//          └───────────┘
//
//          3 650,00 ₴             <- bloc résultat (si taux présent)
//
//          USD: 36.50 $
//   Currency rate at 01.01.2024 by NBU
//            (espace)
// ============================================================================

use ratatui::layout::Rect;

/// Texte du titre
pub const TITLE: &str = "Currency Transducer";

/// Largeur du champ de saisie, bordures comprises
pub const INPUT_WIDTH: u16 = 13;

/// Hauteur du champ de saisie, bordures comprises
pub const INPUT_HEIGHT: u16 = 3;

/// Lignes du bloc résultat : montant, ligne vide, taux, date
pub const OUTPUT_HEIGHT: u16 = 4;

const TITLE_HEIGHT: u16 = 1;
const GAP: u16 = 1;
const CONTENT_HEIGHT: u16 = TITLE_HEIGHT + GAP + INPUT_HEIGHT + GAP + OUTPUT_HEIGHT;

/// Élément de l'écran sous une position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Title,
    Input,
    Background,
}

/// Zones de l'écran pour une taille de terminal donnée
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub area: Rect,
    pub title: Rect,
    pub input: Rect,
    pub output: Rect,
}

impl ScreenLayout {
    /// Calcule les zones, contenu centré verticalement et horizontalement
    ///
    /// Sur un terminal trop petit, les zones sont tronquées (hauteur 0 au pire).
    pub fn new(area: Rect) -> Self {
        let top = area.y + area.height.saturating_sub(CONTENT_HEIGHT) / 2;

        let title_width = TITLE.chars().count() as u16;
        let title = centered(area, title_width, top, TITLE_HEIGHT);

        let input_y = top + TITLE_HEIGHT + GAP;
        let input = centered(area, INPUT_WIDTH, input_y, INPUT_HEIGHT);

        let output_y = input_y + INPUT_HEIGHT + GAP;
        let output = centered(area, area.width, output_y, OUTPUT_HEIGHT);

        Self {
            area,
            title,
            input,
            output,
        }
    }

    /// Retrouve l'élément sous la cellule (column, row)
    pub fn hit(&self, column: u16, row: u16) -> Region {
        if contains(self.title, column, row) {
            Region::Title
        } else if contains(self.input, column, row) {
            Region::Input
        } else {
            Region::Background
        }
    }
}

/// Rect de largeur `width` centré horizontalement, coupé aux bords de `area`
fn centered(area: Rect, width: u16, y: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    let y = y.min(area.bottom());
    let height = height.min(area.bottom() - y);

    Rect::new(x, y, width, height)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
