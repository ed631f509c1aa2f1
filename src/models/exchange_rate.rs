// ============================================================================
// Structure : ExchangeRate
// ============================================================================
// Représente une cotation publiée par la Banque Nationale d'Ukraine (NBU)
//
// Format d'un élément du JSON de la NBU :
//   { "r030": 840, "txt": "Долар США", "rate": 36.5,
//     "cc": "USD", "exchangedate": "01.01.2024" }
//
// CONCEPTS RUST :
// 1. #[serde(rename = "...")] : nom JSON différent du nom Rust
// 2. Les champs JSON inconnus (r030, txt) sont ignorés par défaut
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::format::to_fixed;

/// Code de la devise recherchée dans la réponse de la NBU
pub const USD_CODE: &str = "USD";

/// Une cotation : combien de hryvnias pour une unité de `code`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Code ISO à trois lettres (ex: "USD")
    #[serde(rename = "cc")]
    pub code: String,

    /// Date de publication, telle qu'envoyée par la NBU (ex: "01.01.2024")
    /// Pas de parsing : la chaîne est affichée telle quelle
    #[serde(rename = "exchangedate")]
    pub date: String,

    /// Hryvnias pour une unité de `code`
    pub rate: f64,
}

impl ExchangeRate {
    pub fn new(code: impl Into<String>, date: impl Into<String>, rate: f64) -> Self {
        Self {
            code: code.into(),
            date: date.into(),
            rate,
        }
    }

    /// Convertit un montant exprimé dans la devise `code` en hryvnias
    ///
    /// Aucun contrôle : NaN ou ±∞ se propagent tels quels.
    pub fn convert(&self, amount: f64) -> f64 {
        self.rate * amount
    }

    /// Ligne d'information du taux : "USD: 36.50 $"
    pub fn rate_label(&self) -> String {
        format!("{}: {} $", self.code, to_fixed(self.rate, 2))
    }

    /// Ligne d'information de la date : "Currency rate at 01.01.2024 by NBU"
    pub fn date_label(&self) -> String {
        format!("Currency rate at {} by NBU", self.date)
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
