// ============================================================================
// Module : config
// ============================================================================
// Paramètres de l'application : endpoint NBU, logs, cadence de l'event loop
//
// Pas de fichier de configuration : des valeurs par défaut, et deux variables
// d'environnement optionnelles pour pointer ailleurs (tests, proxy local) :
//   TRANSDUCER_RATES_URL : endpoint JSON des taux
//   TRANSDUCER_LOG_DIR   : répertoire des fichiers de logs
// Le niveau de log reste contrôlé par RUST_LOG.
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use crate::api::nbu::NBU_EXCHANGE_URL;

/// Variable d'environnement qui remplace l'endpoint des taux
pub const RATES_URL_ENV: &str = "TRANSDUCER_RATES_URL";

/// Variable d'environnement qui remplace le répertoire des logs
pub const LOG_DIR_ENV: &str = "TRANSDUCER_LOG_DIR";

/// Nombre maximal de caractères acceptés par le champ de saisie
pub const MAX_INPUT_LEN: usize = 5;

/// Nom du répertoire applicatif (logs)
const APP_DIR_NAME: &str = "currency-transducer";

/// Configuration de l'application
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// URL de l'API des taux de change
    pub rates_url: String,

    /// Répertoire des fichiers de logs
    pub log_dir: PathBuf,

    /// Attente maximale d'un événement terminal avant un Tick
    pub tick_rate: Duration,

    /// Longueur maximale du texte saisi
    pub max_input_len: usize,
}

impl Config {
    /// Construit la configuration à partir de l'environnement du processus
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construit la configuration avec une fonction de lecture des variables
    ///
    /// CONCEPT RUST : Closure en paramètre générique
    /// - Permet de tester sans toucher aux vraies variables d'environnement
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(RATES_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.rates_url = url.trim().to_string();
        }

        if let Some(dir) = lookup(LOG_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir.trim());
        }

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rates_url: NBU_EXCHANGE_URL.to_string(),
            log_dir: default_log_dir(),
            tick_rate: Duration::from_millis(250),
            max_input_len: MAX_INPUT_LEN,
        }
    }
}

/// Répertoire de logs par défaut
///
/// - Linux : ~/.local/share/currency-transducer/logs
/// - macOS : ~/Library/Application Support/currency-transducer/logs
/// - Windows : C:\Users\<user>\AppData\Local\currency-transducer\logs
/// - Sinon : ./logs
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}
