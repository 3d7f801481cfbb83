use anyhow::{Context, Result};
use bt_core::error::CoreError;
use bt_core::grid::SampleGrid;
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

/// Resizer réutilisable wrappant fast_image_resize, canal unique (luminance).
///
/// Filtre Lanczos3 — interpolation haute qualité, le redimensionnement
/// précède toujours le tramage.
///
/// # Example
/// ```
/// use bt_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch buffer for the clamped u8 source samples.
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new()
                .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
            src_buf: Vec::new(),
        }
    }

    /// Redimensionne `src` à la largeur cible, ratio d'aspect préservé.
    ///
    /// Hauteur cible = `round(target_width · H / W)`. Si les dimensions
    /// correspondent déjà, la grille est copiée telle quelle.
    ///
    /// # Errors
    /// Retourne une erreur si la grille source ou la largeur cible a une
    /// dimension nulle, ou si l'opération de resize échoue.
    ///
    /// # Example
    /// ```
    /// use bt_core::grid::SampleGrid;
    /// use bt_source::resize::Resizer;
    /// let src = SampleGrid::new(100, 50);
    /// let mut r = Resizer::new();
    /// let dst = r.resize_to_width(&src, 10).unwrap();
    /// assert_eq!((dst.width, dst.height), (10, 5));
    /// ```
    pub fn resize_to_width(&mut self, src: &SampleGrid, target_width: u32) -> Result<SampleGrid> {
        if src.width == 0 || src.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: src.width,
                height: src.height,
            }
            .into());
        }
        if target_width == 0 {
            return Err(CoreError::InvalidDimensions {
                width: target_width,
                height: 0,
            }
            .into());
        }

        let target_height = (f64::from(target_width) * f64::from(src.height)
            / f64::from(src.width))
        .round() as u32;

        // Image extrêmement large : la hauteur arrondie peut tomber à 0,
        // la grille vide est légale et le resize n'a rien à produire.
        if target_height == 0 {
            return Ok(SampleGrid::new(target_width, 0));
        }

        if src.width == target_width && src.height == target_height {
            return Ok(src.clone());
        }

        // R1: forced copy — fast_image_resize requires &mut on source
        self.src_buf.clear();
        self.src_buf.extend(src.to_luma_bytes());

        let src_image =
            Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8)
                .context("Invalid source dimensions")?;

        let mut dst_buf = vec![0u8; target_width as usize * target_height as usize];
        let mut dst_image =
            Image::from_slice_u8(target_width, target_height, &mut dst_buf, PixelType::U8)
                .context("Invalid destination dimensions")?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Resize failed")?;

        log::debug!(
            "Redimensionnement : {}×{} → {}×{}",
            src.width,
            src.height,
            target_width,
            target_height
        );
        Ok(SampleGrid::from_luma_bytes(
            &dst_buf,
            target_width,
            target_height,
        )?)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience for one-shot usage.
///
/// # Errors
/// Returns an error if the resize operation fails.
///
/// # Example
/// ```
/// use bt_core::grid::SampleGrid;
/// use bt_source::resize::resize_to_width;
/// let src = SampleGrid::new(256, 192);
/// let dst = resize_to_width(&src, 128).unwrap();
/// assert_eq!((dst.width, dst.height), (128, 96));
/// ```
pub fn resize_to_width(src: &SampleGrid, target_width: u32) -> Result<SampleGrid> {
    Resizer::new().resize_to_width(src, target_width)
}
