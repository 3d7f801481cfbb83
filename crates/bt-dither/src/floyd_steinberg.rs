//! Diffusion d'erreur Floyd–Steinberg vers grille binaire.
//!
//! Parcours raster strict : l'erreur de quantification de chaque pixel est
//! distribuée uniquement vers des pixels visités plus tard (droite, puis
//! rangée suivante). Les pixels de bordure — dernière rangée, première et
//! dernière colonnes — ne sont jamais sources de diffusion : ils reçoivent
//! de l'erreur mais ne la propagent pas. C'est une politique de bordure
//! délibérée (limite connue de qualité sur les bords), pas une omission.
//!
//! Répartition de l'erreur `e = v − q` :
//!
//! ```text
//!        X   7
//!    3   5   1     (seizièmes, total 16/16)
//! ```

use bt_core::grid::{BitGrid, SampleGrid};

/// Seuil de décision : bit = 1 si v > 127.
const THRESHOLD: f32 = 127.0;

/// Poids vers le voisin de droite.
const W_RIGHT: f32 = 7.0 / 16.0;
/// Poids vers le voisin bas-gauche.
const W_DOWN_LEFT: f32 = 3.0 / 16.0;
/// Poids vers le voisin du dessous.
const W_DOWN: f32 = 5.0 / 16.0;
/// Poids vers le voisin bas-droite.
const W_DOWN_RIGHT: f32 = 1.0 / 16.0;

/// Diffuse l'erreur de quantification dans la grille, en place.
///
/// Parcourt les rangées `0..H-1` et, dans chaque rangée, les colonnes
/// `1..W-1`. Chaque pixel visité est remplacé par sa valeur quantifiée
/// (0 ou 255) et son erreur est ajoutée aux quatre voisins aval, de sorte
/// que les lectures suivantes voient l'erreur accumulée. Strictement
/// séquentiel : l'ordre de parcours fait partie du contrat.
///
/// Les tailles dégénérées (H < 2 ou W < 3) sont légales et ne diffusent
/// rien ; la grille reste telle quelle.
///
/// # Example
/// ```
/// use bt_core::grid::SampleGrid;
/// use bt_dither::floyd_steinberg::diffuse_in_place;
///
/// let mut grid = SampleGrid::from_raw(vec![100.0; 9], 3, 3).unwrap();
/// diffuse_in_place(&mut grid);
/// // (0,1) quantifié à 0, son erreur de 100 répartie en aval
/// assert_eq!(grid.get(1, 0), 0.0);
/// assert_eq!(grid.get(2, 0), 100.0 + 100.0 * 7.0 / 16.0);
/// ```
pub fn diffuse_in_place(grid: &mut SampleGrid) {
    let w = grid.width as usize;
    let h = grid.height as usize;
    let data = &mut grid.data;

    for y in 0..h.saturating_sub(1) {
        let row = y * w;
        let below = row + w;
        for x in 1..w.saturating_sub(1) {
            let v = data[row + x];
            let q = if v > THRESHOLD { 255.0 } else { 0.0 };
            data[row + x] = q;
            let e = v - q;

            data[row + x + 1] += e * W_RIGHT;
            data[below + x - 1] += e * W_DOWN_LEFT;
            data[below + x] += e * W_DOWN;
            data[below + x + 1] += e * W_DOWN_RIGHT;
        }
    }
}

/// Trame une grille de luminance en grille binaire.
///
/// Consomme la grille (elle est mutée par la diffusion puis jetée),
/// clampe chaque valeur finale à [0, 255] et seuille : bit = 1 si > 127.
/// Déterministe : même entrée, même sortie bit à bit. Les dimensions de
/// sortie égalent celles d'entrée.
///
/// # Example
/// ```
/// use bt_core::grid::SampleGrid;
/// use bt_dither::floyd_steinberg::dither;
///
/// // 2×2 : aucune rangée ni colonne éligible, seuillage pur
/// let grid = SampleGrid::from_raw(vec![0.0, 255.0, 255.0, 0.0], 2, 2).unwrap();
/// let bits = dither(grid);
/// assert_eq!(bits.bits, vec![0, 1, 1, 0]);
/// ```
#[must_use]
pub fn dither(mut grid: SampleGrid) -> BitGrid {
    log::debug!(
        "Tramage Floyd-Steinberg : {}×{}",
        grid.width,
        grid.height
    );
    diffuse_in_place(&mut grid);

    let mut out = BitGrid::new(grid.width, grid.height);
    for (bit, &v) in out.bits.iter_mut().zip(&grid.data) {
        *bit = u8::from(v.clamp(0.0, 255.0) > THRESHOLD);
    }
    out
}
