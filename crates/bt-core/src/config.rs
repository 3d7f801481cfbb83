use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Largeur cible par défaut (pixels), reprise de l'invocation historique.
pub const DEFAULT_TARGET_WIDTH: u32 = 128;

/// Largeur cible maximale acceptée.
pub const MAX_TARGET_WIDTH: u32 = 4096;

/// Configuration de la conversion image → bitmap texte.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use bt_core::config::ConvertConfig;
/// let config = ConvertConfig::default();
/// assert_eq!(config.target_width, 128);
/// assert!(!config.invert);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConvertConfig {
    /// Largeur cible en pixels. Le ratio d'aspect est préservé.
    pub target_width: u32,
    /// Inverser la luminance avant tramage (pour fond clair).
    pub invert: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            invert: false,
        }
    }
}

impl ConvertConfig {
    /// Ramène les champs dans leurs plages valides.
    ///
    /// Une largeur nulle reprend le défaut, une largeur excessive est
    /// plafonnée. Journalisé en warn plutôt qu'erreur fatale.
    pub fn clamp_all(&mut self) {
        if self.target_width == 0 {
            log::warn!(
                "target_width = 0 invalide, retour au défaut {DEFAULT_TARGET_WIDTH}"
            );
            self.target_width = DEFAULT_TARGET_WIDTH;
        }
        if self.target_width > MAX_TARGET_WIDTH {
            log::warn!(
                "target_width = {} plafonné à {MAX_TARGET_WIDTH}",
                self.target_width
            );
            self.target_width = MAX_TARGET_WIDTH;
        }
    }
}

/// Miroir TOML : tous les champs optionnels, table `[convert]`.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    convert: ConvertTable,
}

#[derive(Debug, Default, Deserialize)]
struct ConvertTable {
    target_width: Option<u32>,
    invert: Option<bool>,
}

/// Charge une configuration TOML. Les champs absents gardent leurs défauts.
///
/// # Errors
/// Retourne une erreur si le fichier est illisible ou si le TOML est invalide.
///
/// # Example
/// ```no_run
/// use bt_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = ConvertConfig::default();

    let c = file.convert;
    if let Some(v) = c.target_width {
        config.target_width = v;
    }
    if let Some(v) = c.invert {
        config.invert = v;
    }

    config.clamp_all();
    Ok(config)
}
