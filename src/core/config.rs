//! Board configuration and dimension validation.

use serde::{Deserialize, Serialize};

use crate::error::DimensionError;

/// Largest allowed width or height.
pub const MAX_DIMENSION: usize = 20;

/// Validated board dimensions.
///
/// Both sides lie in `1..=MAX_DIMENSION`. The only way to obtain one is
/// [`BoardConfig::new`], so a `Board` built from it is always well-formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    width: usize,
    height: usize,
}

impl BoardConfig {
    /// Validate raw dimensions.
    ///
    /// ```
    /// use binary_game::core::BoardConfig;
    ///
    /// assert!(BoardConfig::new(20, 1).is_ok());
    /// assert!(BoardConfig::new(0, 5).is_err());
    /// assert!(BoardConfig::new(5, 21).is_err());
    /// ```
    pub fn new(width: i64, height: i64) -> Result<Self, DimensionError> {
        let range = 1..=MAX_DIMENSION as i64;
        if !range.contains(&width) || !range.contains(&height) {
            return Err(DimensionError { width, height });
        }
        Ok(Self {
            width: width as usize,
            height: height as usize,
        })
    }

    #[must_use]
    pub fn width(self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(self) -> usize {
        self.height
    }

}
