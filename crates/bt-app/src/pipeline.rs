use std::path::Path;

use anyhow::Result;
use bt_core::config::ConvertConfig;

/// Convertit une image en bitmap texte 1-bit.
///
/// Enchaîne le flux complet : chargement → inversion optionnelle →
/// redimensionnement → tramage Floyd-Steinberg → sérialisation texte.
/// Toute étape en échec est immédiatement fatale et propagée au caller.
///
/// # Errors
/// Retourne une erreur si le chargement, le redimensionnement ou
/// l'écriture échoue.
pub fn convert(input: &Path, output: &Path, config: &ConvertConfig) -> Result<()> {
    let mut grid = bt_source::image::load_grayscale(input)?;
    log::info!(
        "Image chargée : {}×{} ({})",
        grid.width,
        grid.height,
        input.display()
    );

    if config.invert {
        grid.invert();
    }

    let resized = bt_source::resize::resize_to_width(&grid, config.target_width)?;
    log::info!("Redimensionnée : {}×{}", resized.width, resized.height);

    let bits = bt_dither::floyd_steinberg::dither(resized);
    bt_export::textmap::save(output, &bits)?;
    log::info!("Bitmap texte écrit : {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, pixels: &[u8], width: u32, height: u32) {
        image::save_buffer(path, pixels, width, height, image::ExtendedColorType::L8).unwrap();
    }

    #[test]
    fn end_to_end_produces_parsable_bitmap_of_target_width() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.txt");

        // Dégradé horizontal 64×32
        let pixels: Vec<u8> = (0..32u32)
            .flat_map(|_| (0..64u32).map(|x| (x * 4) as u8))
            .collect();
        write_png(&input, &pixels, 64, 32);

        let config = ConvertConfig {
            target_width: 16,
            invert: false,
        };
        convert(&input, &output, &config).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let grid = bt_export::textmap::parse(&text).unwrap();
        assert_eq!((grid.width, grid.height), (16, 8));
        assert!(grid.bits.iter().all(|&b| b == 0 || b == 1));
    }

    #[test]
    fn white_image_yields_all_ones_black_all_zeroes() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConvertConfig {
            target_width: 4,
            invert: false,
        };

        for (name, value, expected) in [("white.png", 255u8, b'1'), ("black.png", 0u8, b'0')] {
            let input = dir.path().join(name);
            let output = input.with_extension("txt");
            write_png(&input, &[value; 16], 4, 4);
            convert(&input, &output, &config).unwrap();
            let text = std::fs::read_to_string(&output).unwrap();
            assert!(text.bytes().all(|b| b == expected || b == b'\n'), "{name}");
        }
    }

    #[test]
    fn invert_flips_every_decision() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("dark.png");
        write_png(&input, &[10u8; 16], 4, 4);

        let out_plain = dir.path().join("plain.txt");
        let out_inverted = dir.path().join("inverted.txt");
        let mut config = ConvertConfig {
            target_width: 4,
            invert: false,
        };
        convert(&input, &out_plain, &config).unwrap();
        config.invert = true;
        convert(&input, &out_inverted, &config).unwrap();

        let plain = std::fs::read_to_string(&out_plain).unwrap();
        let inverted = std::fs::read_to_string(&out_inverted).unwrap();
        assert!(plain.bytes().all(|b| b == b'0' || b == b'\n'));
        assert!(inverted.bytes().all(|b| b == b'1' || b == b'\n'));
    }

    #[test]
    fn two_runs_are_bit_identical() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let pixels: Vec<u8> = (0..64u8).map(|i| i.wrapping_mul(37)).collect();
        write_png(&input, &pixels, 8, 8);

        let config = ConvertConfig {
            target_width: 8,
            invert: false,
        };
        let out_a = dir.path().join("a.txt");
        let out_b = dir.path().join("b.txt");
        convert(&input, &out_a, &config).unwrap();
        convert(&input, &out_b, &config).unwrap();
        assert_eq!(
            std::fs::read(&out_a).unwrap(),
            std::fs::read(&out_b).unwrap()
        );
    }

    #[test]
    fn missing_input_fails_with_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConvertConfig::default();
        let err = convert(
            Path::new("/nonexistent/missing.png"),
            &dir.path().join("out.txt"),
            &config,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("missing.png"));
    }
}
