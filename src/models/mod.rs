// ============================================================================
// Module : models
// ============================================================================
// Structures de données de l'application : la cotation NBU et le thème
// ============================================================================

pub mod exchange_rate; // Cotation d'une devise (cc, exchangedate, rate)
pub mod view_mode;     // Thème clair / sombre

// Re-exports : use currency_transducer::models::ExchangeRate;
pub use exchange_rate::{ExchangeRate, USD_CODE};
pub use view_mode::ViewMode;
