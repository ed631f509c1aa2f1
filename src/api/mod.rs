// ============================================================================
// Module : api
// ============================================================================
// Client de l'API publique de la Banque Nationale d'Ukraine
// ============================================================================

pub mod nbu; // Taux de change officiels du jour

// Re-export des fonctions principales
pub use nbu::{fetch_rates, fetch_usd_rate, select_usd, NBU_EXCHANGE_URL};
