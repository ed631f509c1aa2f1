// ============================================================================
// Enum : ViewMode
// ============================================================================
// Thème clair / sombre de l'écran
//
// CONCEPT RUST : Enum Copy
// - Deux variants sans données : copie triviale, pas de borrow à gérer
// - Purement visuel : n'influence aucun calcul
// ============================================================================

/// Thème de l'écran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Fond clair (#e5e5e5), texte sombre
    #[default]
    Light,

    /// Fond sombre (#333333), texte clair
    Dark,
}

impl ViewMode {
    /// Retourne le thème opposé
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Light => ViewMode::Dark,
            ViewMode::Dark => ViewMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ViewMode::Dark
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Light => "light",
            ViewMode::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mode = ViewMode::default();
        assert_eq!(mode, ViewMode::Light);
        assert_eq!(mode.toggled(), ViewMode::Dark);
        assert_eq!(mode.toggled().toggled(), mode);
    }
}
