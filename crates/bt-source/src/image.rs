use std::path::Path;

use anyhow::{Context, Result};
use bt_core::grid::SampleGrid;

/// Charge une image depuis le disque en grille de luminance [0, 255].
///
/// Le décodage et la conversion niveaux-de-gris sont délégués au crate
/// `image` (formats : PNG, JPEG, BMP, GIF). Les erreurs de chargement sont
/// propagées telles quelles au caller, enrichies du chemin.
///
/// # Errors
/// Retourne une erreur si le fichier est introuvable ou le format non
/// supporté.
///
/// # Example
/// ```no_run
/// use bt_source::image::load_grayscale;
/// use std::path::Path;
/// let grid = load_grayscale(Path::new("obrazek2.jpg")).unwrap();
/// assert!(grid.width > 0);
/// ```
pub fn load_grayscale(path: &Path) -> Result<SampleGrid> {
    let img = image::open(path)
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    log::debug!("Image décodée : {}×{} ({})", width, height, path.display());
    Ok(SampleGrid::from_luma_bytes(&luma.into_raw(), width, height)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = load_grayscale(Path::new("/nonexistent/nope.png")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.png"));
    }

    #[test]
    fn loads_written_png_as_luminance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.png");
        let pixels: Vec<u8> = vec![0, 85, 170, 255];
        image::save_buffer(&path, &pixels, 4, 1, image::ExtendedColorType::L8).unwrap();

        let grid = load_grayscale(&path).unwrap();
        assert_eq!((grid.width, grid.height), (4, 1));
        assert_eq!(grid.to_luma_bytes(), pixels);
    }
}
