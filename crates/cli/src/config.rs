//! Configuration de la ligne de commande

use serde::Deserialize;
use seqtools_core::{GcWindowConfig, OrfConfig};
use std::path::Path;

/// Fichier de configuration lu par défaut dans le répertoire courant
pub const DEFAULT_CONFIG_FILE: &str = "seqtools.toml";

/// Configuration du logging
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Configuration complète de l'application
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub orf: OrfConfig,
    pub gc_window: GcWindowConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Charge la configuration depuis un fichier TOML
    ///
    /// Un fichier absent donne la configuration par défaut; un fichier
    /// présent mais invalide est une erreur.
    pub fn load_from_file(path: &Path) -> Result<Self, ::config::ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .build()?;

        settings.try_deserialize::<AppConfig>()
    }

    /// Les options `orf` de la ligne de commande l'emportent sur le fichier
    pub fn apply_orf_flags(&mut self, min_length: Option<usize>, all_frames: bool) {
        if let Some(min_length) = min_length {
            self.orf.min_length = min_length;
        }
        self.orf.emit_all |= all_frames;
    }

    /// Idem pour `gc-window`
    pub fn apply_gc_flags(&mut self, window: Option<usize>, step: Option<usize>) {
        if let Some(window) = window {
            self.gc_window.window = window;
        }
        if let Some(step) = step {
            self.gc_window.step = step;
        }
    }

    /// Niveau de log effectif: `-v` l'emporte sur le fichier
    pub fn log_level(&self, verbose: u8) -> &str {
        match verbose {
            0 => &self.logging.level,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
