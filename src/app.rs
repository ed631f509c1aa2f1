// ============================================================================
// Structure : App
// ============================================================================
// État de l'écran de conversion (View State Store)
//
// Quatre morceaux d'état indépendants :
// - rates      : la cotation USD (zéro ou un élément)
// - text       : le texte saisi, jamais validé
// - is_focused : le champ de saisie a-t-il le focus ?
// - view_mode  : thème clair / sombre
//
// Tout le reste (montant converti, couleurs) est recalculé à chaque rendu
// depuis ces champs : aucune valeur dérivée n'est mise en cache.
//
// CONCEPTS RUST :
// 1. State Management : un seul propriétaire (le thread UI), &mut self
// 2. Option<&T> : accès au taux sans copie
// ============================================================================

use tracing::{debug, info};

use crate::config::MAX_INPUT_LEN;
use crate::format::{format_uah, to_number};
use crate::models::{ExchangeRate, ViewMode};

// ============================================================================
// Enum : FetchOutcome
// ============================================================================
// Résultat du chargement du taux, envoyé par le worker au thread UI
// ============================================================================

/// Résultat du fetch unique effectué au montage
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Réponse reçue : zéro ou un élément USD
    Loaded(Vec<ExchangeRate>),

    /// Erreur réseau ou de parsing (message pour les logs)
    Failed(String),
}

/// État de l'écran de conversion
#[derive(Debug, Clone)]
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// L'écran est-il monté ? Les résultats de fetch arrivant après le
    /// démontage sont ignorés.
    mounted: bool,

    /// Cotation USD courante (au plus un élément)
    rates: Vec<ExchangeRate>,

    /// Texte saisi par l'utilisateur (montant en dollars)
    text: String,

    /// Focus du champ de saisie (couleur de bordure)
    is_focused: bool,

    /// Thème de l'écran
    view_mode: ViewMode,

    /// Longueur maximale du texte accepté par le champ de saisie
    max_input_len: usize,
}

impl App {
    pub fn new() -> Self {
        Self::with_max_input_len(MAX_INPUT_LEN)
    }

    /// Crée une App avec une limite de saisie différente de la valeur par défaut
    pub fn with_max_input_len(max_input_len: usize) -> Self {
        Self {
            running: true,
            mounted: false,
            rates: Vec::new(),
            text: String::new(),
            is_focused: false,
            view_mode: ViewMode::default(),
            max_input_len,
        }
    }

    // ========================================================================
    // Cycle de vie
    // ========================================================================

    /// Monte l'écran : les résultats de fetch sont désormais acceptés
    pub fn mount(&mut self) {
        debug!("Screen mounted");
        self.mounted = true;
    }

    /// Démonte l'écran : vide la cotation et refuse les résultats tardifs
    pub fn unmount(&mut self) {
        debug!("Screen unmounted");
        self.mounted = false;
        self.rates.clear();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Applique le résultat du fetch
    ///
    /// - Loaded : remplace la cotation
    /// - Failed : la cotation garde sa valeur précédente (l'erreur est déjà
    ///   loguée par le worker)
    /// - Écran démonté : résultat ignoré
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        if !self.mounted {
            debug!(?outcome, "Fetch result arrived after unmount, dropping it");
            return;
        }

        match outcome {
            FetchOutcome::Loaded(rates) => {
                info!(records = rates.len(), "Exchange rate stored");
                self.set_rates(rates);
            }
            FetchOutcome::Failed(message) => {
                debug!(error = %message, "Keeping previous exchange rate");
            }
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // ========================================================================
    // Setters
    // ========================================================================
    // Aucun setter ne peut échouer, aucune validation croisée.

    pub fn set_rates(&mut self, rates: Vec<ExchangeRate>) {
        self.rates = rates;
    }

    /// Remplace le texte, sans validation (texte vide ou non numérique accepté)
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    // ========================================================================
    // Interactions du champ de saisie et du titre
    // ========================================================================

    /// Donne le focus au champ de saisie
    pub fn focus(&mut self) {
        self.set_focused(true);
    }

    /// Retire le focus (équivalent de la fermeture du clavier)
    pub fn blur(&mut self) {
        self.set_focused(false);
    }

    /// Bascule le thème clair / sombre
    pub fn toggle_theme(&mut self) {
        self.view_mode = self.view_mode.toggled();
        info!(view_mode = self.view_mode.label(), "Theme toggled");
    }

    /// Ajoute un caractère tapé au clavier numérique
    ///
    /// Retourne false si le caractère est refusé :
    /// - pas de focus
    /// - caractère absent d'un pavé numérique
    /// - limite de longueur atteinte (le 6e caractère n'entre jamais)
    pub fn type_char(&mut self, c: char) -> bool {
        if !self.is_focused || !is_keypad_char(c) {
            return false;
        }

        if self.text.chars().count() >= self.max_input_len {
            debug!(max = self.max_input_len, "Input length limit reached");
            return false;
        }

        self.text.push(c);
        true
    }

    /// Supprime le dernier caractère saisi
    pub fn backspace(&mut self) {
        if self.is_focused {
            self.text.pop();
        }
    }

    // ========================================================================
    // Lectures
    // ========================================================================

    pub fn rates(&self) -> &[ExchangeRate] {
        &self.rates
    }

    /// Cotation courante, si chargée
    pub fn rate(&self) -> Option<&ExchangeRate> {
        self.rates.first()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Montant saisi (vide -> 0, invalide -> NaN)
    pub fn amount(&self) -> f64 {
        to_number(&self.text)
    }

    /// Montant converti en hryvnias, si un taux est présent
    pub fn converted_amount(&self) -> Option<f64> {
        self.rate().map(|rate| rate.convert(self.amount()))
    }

    /// Montant converti et formaté ("3 650,00 ₴"), si un taux est présent
    pub fn formatted_amount(&self) -> Option<String> {
        self.converted_amount().map(format_uah)
    }
}

/// Caractères disponibles sur un pavé numérique de téléphone
fn is_keypad_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | ',' | '-')
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
