// ============================================================================
// Gestion des événements
// ============================================================================
// Lit les événements du terminal (clavier, souris, redimensionnement) et
// fournit des helpers pour les reconnaître.
//
// CONCEPTS RUST :
// 1. Enums avec données : un variant par type d'événement
// 2. matches! : pattern matching compact qui retourne un bool
// 3. Poll avec timeout : Tick régulier si rien ne se passe
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};

/// Événements de l'application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Clic ou mouvement de souris
    Mouse(MouseEvent),

    /// Terminal redimensionné
    Resize(u16, u16),

    /// Rien reçu pendant le tick
    Tick,
}

/// Gestionnaire d'événements
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Lit le prochain événement (bloquant au plus `tick_rate`)
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            Ok(from_crossterm(event::read()?))
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

/// Convertit un événement crossterm
///
/// Seuls les appuis de touche sont gardés : certains OS envoient aussi
/// Release et Repeat, ce qui doublerait une bascule de thème.
pub fn from_crossterm(event: CrosstermEvent) -> Event {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
        CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
        CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
        _ => Event::Tick,
    }
}

// ============================================================================
// Helpers : reconnaître les touches
// ============================================================================

/// 'q' (quitter, hors saisie)
pub fn is_quit_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
            && !key.modifiers.contains(KeyModifiers::CONTROL)
    } else {
        false
    }
}

/// Ctrl+C (quitter, toujours)
pub fn is_force_quit_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    } else {
        false
    }
}

/// 't' (bascule du thème, hors saisie)
pub fn is_theme_toggle_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('t') | KeyCode::Char('T'))
    } else {
        false
    }
}

/// Tab ou Entrée : donne le focus au champ de saisie
pub fn is_focus_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Tab | KeyCode::Enter)
    } else {
        false
    }
}

/// Échap ou Entrée : ferme le "clavier" (retire le focus)
pub fn is_dismiss_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Esc | KeyCode::Enter)
    } else {
        false
    }
}

pub fn is_backspace_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Backspace)
    } else {
        false
    }
}

/// Extrait le caractère d'un événement clavier sans Ctrl/Alt
pub fn get_char_from_event(event: &Event) -> Option<char> {
    if let Event::Key(key) = event {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }
        if let KeyCode::Char(c) = key.code {
            return Some(c);
        }
    }
    None
}

/// Position (colonne, ligne) d'un clic gauche
pub fn left_click_position(event: &Event) -> Option<(u16, u16)> {
    if let Event::Mouse(mouse) = event {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            return Some((mouse.column, mouse.row));
        }
    }
    None
}

// ============================================================================
// Tests
// ============================================================================
