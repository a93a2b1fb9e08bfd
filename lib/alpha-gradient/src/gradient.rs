//! Linear alpha ramps
//!
//! Builds the 1-D sequence of gradient values and turns it into `u8` alpha.

use crate::{AlphaGradientError, AlphaGradientConfig, Result};

/// Axis the alpha ramp runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    /// Left edge = start, right edge = end, constant per column
    Horizontal,
    /// Top edge = start, bottom edge = end, constant per row
    Vertical,
}

/// Float to `u8` conversion applied to every gradient value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaCast {
    /// Toward zero, saturating at 0 and 255
    Truncate,
    /// Nearest, half away from zero, saturating at 0 and 255
    Round,
}

impl AlphaCast {
    pub fn cast(&self, value: f64) -> u8 {
        match self {
            AlphaCast::Truncate => value as u8,
            AlphaCast::Round => value.round() as u8,
        }
    }
}

/// `count` evenly spaced values from `start` to `end`, both inclusive.
///
/// The last element is `end` exactly, not `start + (count - 1) * step`.
pub fn linspace(start: f64, end: f64, count: u32) -> Vec<f64> {
    match count {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values = (0..count)
                .map(|i| start + i as f64 * step)
                .collect::<Vec<_>>();

            if let Some(last) = values.last_mut() {
                *last = end;
            }

            values
        }
    }
}

/// Alpha values for an axis of `len` pixels.
pub fn alpha_row(config: &AlphaGradientConfig, len: u32) -> Result<Vec<u8>> {
    if len < 2 {
        return Err(AlphaGradientError::InvalidParameter(format!(
            "gradient axis needs at least 2 pixels, got {len}"
        )));
    }

    let cast = config.cast();
    Ok(linspace(config.start(), config.end(), len)
        .into_iter()
        .map(|v| cast.cast(v))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let values = linspace(0.0, 255.0, 256);
        assert_eq!(values.len(), 256);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[255], 255.0);
        assert_eq!(values[128], 128.0);
    }

    #[test]
    fn test_linspace_small_counts() {
        assert!(linspace(0.0, 255.0, 0).is_empty());
        assert_eq!(linspace(0.0, 255.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 255.0, 2), vec![0.0, 255.0]);
        assert_eq!(linspace(0.0, 255.0, 3), vec![0.0, 127.5, 255.0]);
    }

    #[test]
    fn test_cast_modes() {
        assert_eq!(AlphaCast::Truncate.cast(127.5), 127);
        assert_eq!(AlphaCast::Round.cast(127.5), 128);
        assert_eq!(AlphaCast::Truncate.cast(254.999), 254);
        assert_eq!(AlphaCast::Round.cast(254.999), 255);

        // saturating
        assert_eq!(AlphaCast::Truncate.cast(300.0), 255);
        assert_eq!(AlphaCast::Truncate.cast(-4.0), 0);
        assert_eq!(AlphaCast::Round.cast(-0.4), 0);
    }

    #[test]
    fn test_alpha_row_truncates_by_default() {
        let config = AlphaGradientConfig::new();
        assert_eq!(alpha_row(&config, 3).unwrap(), vec![0, 127, 255]);

        let config = AlphaGradientConfig::new().with_cast(AlphaCast::Round);
        assert_eq!(alpha_row(&config, 3).unwrap(), vec![0, 128, 255]);
    }

    #[test]
    fn test_alpha_row_is_monotonic() {
        let config = AlphaGradientConfig::new();
        let row = alpha_row(&config, 1000).unwrap();

        assert_eq!(row[0], 0);
        assert_eq!(row[999], 255);
        assert!(row.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_alpha_row_too_short() {
        let config = AlphaGradientConfig::new();
        assert!(matches!(
            alpha_row(&config, 1),
            Err(AlphaGradientError::InvalidParameter(_))
        ));
        assert!(alpha_row(&config, 0).is_err());
    }
}
