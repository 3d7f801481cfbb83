use std::path::PathBuf;

use clap::Parser;

/// bitrame — Tramage Floyd-Steinberg d'images en bitmap texte 1-bit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image d'entrée (PNG, JPEG, BMP, GIF).
    pub input: PathBuf,

    /// Fichier texte de sortie. Défaut : chemin d'entrée en .txt.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Largeur cible en pixels (prioritaire sur la config).
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Inverser la luminance avant tramage (pour fond clair).
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Output path: explicit `--output`, or the input path with a .txt
    /// extension.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_to_input_with_txt_extension() {
        let cli = Cli::parse_from(["bitrame", "obrazek2.jpg"]);
        assert_eq!(cli.output_path(), PathBuf::from("obrazek2.txt"));
    }

    #[test]
    fn explicit_output_wins() {
        let cli = Cli::parse_from(["bitrame", "photo.png", "-o", "obraz.txt"]);
        assert_eq!(cli.output_path(), PathBuf::from("obraz.txt"));
    }

    #[test]
    fn width_override_is_optional() {
        let cli = Cli::parse_from(["bitrame", "photo.png", "--width", "64"]);
        assert_eq!(cli.width, Some(64));
        let cli = Cli::parse_from(["bitrame", "photo.png"]);
        assert_eq!(cli.width, None);
    }
}
