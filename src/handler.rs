// ============================================================================
// Gestion des événements : événement terminal -> opération sur App
// ============================================================================
// Chaque événement déclenche au plus UNE opération sur l'état :
//
//   clic sur le titre       -> retire le focus + bascule le thème (une fois)
//   clic sur le champ       -> focus
//   clic ailleurs           -> retire le focus (fermeture du clavier)
//   Ctrl+C                  -> quitte
//
//   avec focus :  chiffres . , -  -> saisie (5 caractères max)
//                 Backspace       -> efface
//                 Échap / Entrée  -> retire le focus
//
//   sans focus :  Tab / Entrée    -> focus
//                 t               -> bascule le thème
//                 q               -> quitte
// ============================================================================

use tracing::{debug, info};

use crate::app::App;
use crate::ui::events::{
    get_char_from_event, is_backspace_event, is_dismiss_event, is_focus_event,
    is_force_quit_event, is_quit_event, is_theme_toggle_event, left_click_position, Event,
};
use crate::ui::layout::{Region, ScreenLayout};

/// Traite un événement et met à jour l'état de l'application
///
/// `layout` doit correspondre à la taille du dernier rendu, pour que les clics
/// tombent sur les mêmes zones que celles affichées.
pub fn handle_event(app: &mut App, event: Event, layout: &ScreenLayout) {
    match event {
        Event::Key(_) if is_force_quit_event(&event) => {
            info!("User quit (Ctrl+C)");
            app.quit();
        }

        Event::Mouse(_) => {
            if let Some((column, row)) = left_click_position(&event) {
                handle_click(app, layout.hit(column, row));
            }
        }

        // ========================================
        // Champ de saisie actif
        // ========================================
        Event::Key(_) if app.is_focused() => {
            if is_dismiss_event(&event) {
                debug!("Keyboard dismissed");
                app.blur();
            } else if is_backspace_event(&event) {
                app.backspace();
            } else if let Some(c) = get_char_from_event(&event) {
                if !app.type_char(c) {
                    debug!(char = %c, "Input character rejected");
                }
            }
        }

        // ========================================
        // Champ de saisie inactif
        // ========================================
        Event::Key(_) if is_quit_event(&event) => {
            info!("User quit");
            app.quit();
        }
        Event::Key(_) if is_focus_event(&event) => {
            debug!("Input focused from keyboard");
            app.focus();
        }
        Event::Key(_) if is_theme_toggle_event(&event) => {
            app.toggle_theme();
        }

        Event::Key(_) | Event::Resize(_, _) | Event::Tick => {
            // Rien à faire : le prochain rendu recalcule tout
        }
    }
}

/// Clic : le fond ferme toujours le clavier, puis l'élément touché agit
fn handle_click(app: &mut App, region: Region) {
    debug!(?region, "Mouse click");

    match region {
        Region::Title => {
            app.blur();
            app.toggle_theme();
        }
        Region::Input => app.focus(),
        Region::Background => app.blur(),
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
