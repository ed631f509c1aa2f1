// ============================================================================
// Module : ui
// ============================================================================
// Couche de présentation : rendu de l'écran et événements du terminal
// ============================================================================

pub mod events; // Lecture et reconnaissance des événements terminal
pub mod layout; // Zones de l'écran (rendu + clics)
pub mod screen; // Rendu de l'écran de conversion
pub mod theme;  // Couleurs selon thème et focus

// Re-exports pour simplifier les imports
pub use events::{Event, EventHandler};
pub use layout::{Region, ScreenLayout};
pub use screen::render;
pub use theme::Palette;
