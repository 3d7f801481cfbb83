//! Format bitmap texte : une ligne par rangée, caractères '1'/'0'.
//!
//! Chaque rangée est terminée par '\n', y compris la dernière. Pas
//! d'en-tête ni de pied de page — c'est l'unique format persisté et il
//! doit être reproduit octet pour octet pour compatibilité.

use std::path::Path;

use anyhow::{Context, Result};
use bt_core::error::CoreError;
use bt_core::grid::BitGrid;

/// Sérialise une grille binaire en texte.
///
/// # Example
/// ```
/// use bt_core::grid::BitGrid;
/// use bt_export::textmap::render;
///
/// let mut grid = BitGrid::new(2, 2);
/// grid.set(1, 0, 1);
/// grid.set(0, 1, 1);
/// assert_eq!(render(&grid), "01\n10\n");
/// ```
#[must_use]
pub fn render(grid: &BitGrid) -> String {
    let w = grid.width as usize;
    let mut out = String::with_capacity(grid.bits.len() + grid.height as usize);
    for row in grid.bits.chunks_exact(w.max(1)) {
        for &bit in row {
            out.push(if bit != 0 { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}

/// Écrit la grille sérialisée dans un fichier.
///
/// # Errors
/// Retourne une erreur si l'écriture échoue.
///
/// # Example
/// ```no_run
/// use bt_core::grid::BitGrid;
/// use bt_export::textmap::save;
/// use std::path::Path;
///
/// let grid = BitGrid::new(128, 96);
/// save(Path::new("obraz.txt"), &grid).unwrap();
/// ```
pub fn save(path: &Path, grid: &BitGrid) -> Result<()> {
    std::fs::write(path, render(grid))
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    log::debug!(
        "Bitmap texte {}×{} écrit dans {}",
        grid.width,
        grid.height,
        path.display()
    );
    Ok(())
}

/// Reconstruit une grille binaire depuis sa forme texte.
///
/// Inverse exact de [`render`] : `parse(&render(g)) == g`.
///
/// # Errors
/// Retourne `CoreError::MalformedBitmap` si une ligne n'a pas la même
/// largeur que la première, ou contient autre chose que '0'/'1'.
///
/// # Example
/// ```
/// use bt_export::textmap::parse;
///
/// let grid = parse("01\n10\n").unwrap();
/// assert_eq!((grid.width, grid.height), (2, 2));
/// assert_eq!(grid.bits, vec![0, 1, 1, 0]);
/// ```
pub fn parse(text: &str) -> Result<BitGrid, CoreError> {
    let mut bits = Vec::new();
    let mut width: Option<usize> = None;
    let mut height = 0u32;

    for (i, line) in text.lines().enumerate() {
        let expected = *width.get_or_insert(line.len());
        if line.len() != expected {
            return Err(CoreError::MalformedBitmap {
                line: i + 1,
                reason: format!("largeur {} ≠ {expected}", line.len()),
            });
        }
        for c in line.chars() {
            match c {
                '0' => bits.push(0),
                '1' => bits.push(1),
                _ => {
                    return Err(CoreError::MalformedBitmap {
                        line: i + 1,
                        reason: format!("caractère inattendu '{c}'"),
                    });
                }
            }
        }
        height += 1;
    }

    let width = width.unwrap_or(0) as u32;
    let mut grid = BitGrid::new(width, height);
    grid.bits = bits;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: u32, height: u32) -> BitGrid {
        let mut grid = BitGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, ((x + y) % 2) as u8);
            }
        }
        grid
    }

    #[test]
    fn render_terminates_every_row_including_last() {
        let grid = BitGrid::new(3, 2);
        assert_eq!(render(&grid), "000\n000\n");
    }

    #[test]
    fn render_has_no_header_or_footer() {
        let text = render(&checkerboard(4, 4));
        assert!(text.starts_with('0') || text.starts_with('1'));
        assert!(text.ends_with('\n'));
        assert_eq!(text.len(), 4 * 5);
    }

    #[test]
    fn round_trip_reproduces_grid_exactly() {
        let grid = checkerboard(7, 3);
        let parsed = parse(&render(&grid)).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn parse_empty_text_is_empty_grid() {
        let grid = parse("").unwrap();
        assert_eq!((grid.width, grid.height), (0, 0));
        assert!(grid.bits.is_empty());
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = parse("010\n01\n").unwrap_err();
        assert!(matches!(err, CoreError::MalformedBitmap { line: 2, .. }));
    }

    #[test]
    fn parse_rejects_foreign_characters() {
        let err = parse("01\n0x\n").unwrap_err();
        assert!(matches!(err, CoreError::MalformedBitmap { line: 2, .. }));
    }

    #[test]
    fn save_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("obraz.txt");
        let grid = checkerboard(2, 2);
        save(&path, &grid).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "01\n10\n");
    }
}
