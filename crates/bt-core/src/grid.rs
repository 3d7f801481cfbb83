use crate::error::CoreError;

/// Grille de luminance en flottants. Row-major, un échantillon par pixel.
///
/// Les valeurs nominales sont dans [0, 255] mais peuvent transitoirement
/// sortir de cette plage pendant la diffusion d'erreur ; le seuillage final
/// clampe avant de décider. Les valeurs doivent être finies (ni NaN ni ∞).
///
/// # Example
/// ```
/// use bt_core::grid::SampleGrid;
/// let grid = SampleGrid::new(10, 4);
/// assert_eq!(grid.data.len(), 40);
/// assert_eq!(grid.get(0, 0), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct SampleGrid {
    /// Échantillons row-major, longueur = width × height.
    pub data: Vec<f32>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SampleGrid {
    /// Crée une grille pré-allouée, initialisée à 0.
    ///
    /// # Example
    /// ```
    /// use bt_core::grid::SampleGrid;
    /// let grid = SampleGrid::new(100, 50);
    /// assert_eq!(grid.width, 100);
    /// assert_eq!(grid.height, 50);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0.0f32; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Construit une grille depuis un buffer row-major existant.
    ///
    /// # Errors
    /// Retourne `CoreError::BufferSizeMismatch` si la longueur du buffer
    /// ne vaut pas `width × height`.
    ///
    /// # Example
    /// ```
    /// use bt_core::grid::SampleGrid;
    /// let grid = SampleGrid::from_raw(vec![0.0, 255.0, 255.0, 0.0], 2, 2).unwrap();
    /// assert_eq!(grid.get(1, 0), 255.0);
    /// ```
    pub fn from_raw(data: Vec<f32>, width: u32, height: u32) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(CoreError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Construit une grille depuis des octets de luminance (image 8-bit).
    ///
    /// # Errors
    /// Retourne `CoreError::BufferSizeMismatch` si la longueur ne colle pas.
    ///
    /// # Example
    /// ```
    /// use bt_core::grid::SampleGrid;
    /// let grid = SampleGrid::from_luma_bytes(&[0, 128, 255], 3, 1).unwrap();
    /// assert_eq!(grid.get(2, 0), 255.0);
    /// ```
    pub fn from_luma_bytes(bytes: &[u8], width: u32, height: u32) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize;
        if bytes.len() != expected {
            return Err(CoreError::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            data: bytes.iter().map(|&b| f32::from(b)).collect(),
            width,
            height,
        })
    }

    /// Exporte la grille en octets de luminance, clampés à [0, 255].
    ///
    /// # Example
    /// ```
    /// use bt_core::grid::SampleGrid;
    /// let grid = SampleGrid::from_raw(vec![-3.0, 260.0], 2, 1).unwrap();
    /// assert_eq!(grid.to_luma_bytes(), vec![0, 255]);
    /// ```
    #[must_use]
    pub fn to_luma_bytes(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| v.clamp(0.0, 255.0).round() as u8)
            .collect()
    }

    /// Accès à l'échantillon (x, y).
    ///
    /// # Example
    /// ```
    /// use bt_core::grid::SampleGrid;
    /// let grid = SampleGrid::new(4, 4);
    /// assert_eq!(grid.get(3, 3), 0.0);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.width && y < self.height, "sample out of bounds");
        self.data[(y * self.width + x) as usize]
    }

    /// Écrit l'échantillon (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        debug_assert!(x < self.width && y < self.height, "sample out of bounds");
        self.data[(y * self.width + x) as usize] = value;
    }

    /// Inverse la luminance (v → 255 − v), pour sortie sur fond clair.
    ///
    /// # Example
    /// ```
    /// use bt_core::grid::SampleGrid;
    /// let mut grid = SampleGrid::from_raw(vec![0.0, 200.0], 2, 1).unwrap();
    /// grid.invert();
    /// assert_eq!(grid.get(0, 0), 255.0);
    /// assert_eq!(grid.get(1, 0), 55.0);
    /// ```
    pub fn invert(&mut self) {
        for v in &mut self.data {
            *v = 255.0 - *v;
        }
    }
}

/// Grille de sortie binaire. Un bit par pixel, stocké en 0/1.
///
/// # Example
/// ```
/// use bt_core::grid::BitGrid;
/// let mut grid = BitGrid::new(8, 2);
/// grid.set(3, 1, 1);
/// assert_eq!(grid.get(3, 1), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid {
    /// Bits row-major, chaque élément vaut 0 ou 1.
    pub bits: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl BitGrid {
    /// Crée une grille binaire pré-allouée, initialisée à 0.
    ///
    /// # Example
    /// ```
    /// use bt_core::grid::BitGrid;
    /// let grid = BitGrid::new(16, 16);
    /// assert_eq!(grid.bits.len(), 256);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bits: vec![0u8; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Accès au bit (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "bit out of bounds");
        self.bits[(y * self.width + x) as usize]
    }

    /// Écrit le bit (x, y). Toute valeur non nulle devient 1.
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, bit: u8) {
        debug_assert!(x < self.width && y < self.height, "bit out of bounds");
        self.bits[(y * self.width + x) as usize] = u8::from(bit != 0);
    }
}
