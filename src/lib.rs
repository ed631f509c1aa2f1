// ============================================================================
// Currency Transducer - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests d'intégration
// ============================================================================

pub mod api;     // API de la Banque Nationale d'Ukraine
pub mod app;     // État de l'écran
pub mod config;  // Paramètres (endpoint, logs, tick)
pub mod format;  // Formatage uk-UA / UAH
pub mod handler; // Événement -> opération sur l'état
pub mod models;  // Structures de données
pub mod ui;      // Interface utilisateur
pub mod worker;  // Fetch du taux en arrière-plan
