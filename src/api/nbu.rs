// ============================================================================
// API Client : Banque Nationale d'Ukraine (NBU)
// ============================================================================
// Récupère les taux officiels du jour et sélectionne le dollar américain
//
// La NBU retourne un tableau JSON plat, une entrée par devise :
//   [ { "r030": 36,  "txt": "Австралійський долар", "rate": 24.1,
//       "cc": "AUD", "exchangedate": "01.01.2024" },
//     { "r030": 840, "txt": "Долар США", "rate": 36.5,
//       "cc": "USD", "exchangedate": "01.01.2024" }, ... ]
//
// Un seul appel par montage de l'écran : pas de retry, pas de cache,
// pas de timeout explicite.
// ============================================================================

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

use crate::models::{ExchangeRate, USD_CODE};

/// Endpoint public des taux de change du jour
pub const NBU_EXCHANGE_URL: &str =
    "https://bank.gov.ua/NBUStatService/v1/statdirectory/exchangenew?json";

/// Récupère toutes les cotations publiées par la NBU
///
/// CONCEPT RUST : async fn + ?
/// - Chaque étape (requête, statut, JSON) peut échouer
/// - .context() explique quelle étape a échoué dans les logs
#[instrument]
pub async fn fetch_rates(url: &str) -> Result<Vec<ExchangeRate>> {
    debug!("Sending HTTP request to NBU");
    let response = reqwest::get(url)
        .await
        .context("Échec de la requête HTTP vers la NBU")?;

    let status = response.status();
    debug!(status = %status, "Received HTTP response");

    // Statut non-2xx : erreur (loguée une seule fois, par le worker)
    if !status.is_success() {
        anyhow::bail!("La NBU a retourné une erreur : HTTP {}", status);
    }

    let records: Vec<ExchangeRate> = response
        .json()
        .await
        .context("Échec du parsing JSON de la réponse NBU")?;

    info!(records = records.len(), "Successfully fetched NBU rates");
    Ok(records)
}

/// Garde la première cotation USD, enveloppée dans une collection
///
/// - Trouvée : vec![usd] (un seul élément)
/// - Absente : vec![] (l'écran n'affiche alors aucun résultat)
pub fn select_usd(records: Vec<ExchangeRate>) -> Vec<ExchangeRate> {
    let selected: Vec<ExchangeRate> = records
        .into_iter()
        .find(|record| record.code == USD_CODE)
        .into_iter()
        .collect();

    if selected.is_empty() {
        warn!("No USD record in NBU response");
    }

    selected
}

/// Récupère le taux USD du jour (zéro ou un élément)
pub async fn fetch_usd_rate(url: &str) -> Result<Vec<ExchangeRate>> {
    let records = fetch_rates(url).await?;
    Ok(select_usd(records))
}

// ============================================================================
// Tests unitaires
// ============================================================================
