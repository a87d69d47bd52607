use crate::error::ConfigError;

/// Rows (and columns) of the demo grid.
pub const DEFAULT_ROWS: usize = 50;
/// Width (and height) of the demo window in pixels.
pub const DEFAULT_WIDTH: u32 = 800;

/// Dimensions of a [Session](crate::Session). The grid is always square and the window is
/// `width` pixels on each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: usize,
    pub width: u32,
}

impl Default for SessionConfig {
    fn default() -> SessionConfig {
        SessionConfig {
            rows: DEFAULT_ROWS,
            width: DEFAULT_WIDTH,
        }
    }
}

impl SessionConfig {
    /// Checks that every cell gets at least one pixel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::NoRows);
        }
        if (self.width as usize) < self.rows {
            return Err(ConfigError::WidthTooSmall {
                width: self.width,
                rows: self.rows,
            });
        }
        Ok(())
    }
    pub fn cell_size(&self) -> u32 {
        self.width.checked_div(self.rows as u32).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_demo_window() {
        let config = SessionConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.cell_size(), 16);
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        let no_rows = SessionConfig { rows: 0, width: 800 };
        assert_eq!(no_rows.validate(), Err(ConfigError::NoRows));
        assert_eq!(no_rows.cell_size(), 0);
        let narrow = SessionConfig { rows: 50, width: 30 };
        assert_eq!(
            narrow.validate(),
            Err(ConfigError::WidthTooSmall { width: 30, rows: 50 })
        );
    }
}
