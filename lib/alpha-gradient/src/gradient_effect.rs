use crate::{
    Effect, Result,
    gradient::{AlphaCast, GradientDirection, alpha_row},
};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Linear alpha gradient configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct AlphaGradientConfig {
    #[derivative(Default(value = "GradientDirection::Horizontal"))]
    direction: GradientDirection,

    #[derivative(Default(value = "0.0"))]
    start: f64,

    #[derivative(Default(value = "255.0"))]
    end: f64,

    #[derivative(Default(value = "AlphaCast::Truncate"))]
    cast: AlphaCast,
}

impl AlphaGradientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> GradientDirection {
        self.direction
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn cast(&self) -> AlphaCast {
        self.cast
    }
}

impl Effect for AlphaGradientConfig {
    /// Overwrites the alpha channel only, color channels are left as is.
    fn apply(&self, image: &mut RgbaImage) -> Result<()> {
        match self.direction {
            GradientDirection::Horizontal => {
                let alpha = alpha_row(self, image.width())?;
                for row in image.rows_mut() {
                    for (pixel, a) in row.zip(alpha.iter()) {
                        pixel[3] = *a;
                    }
                }
            }
            GradientDirection::Vertical => {
                let alpha = alpha_row(self, image.height())?;
                for (row, a) in image.rows_mut().zip(alpha.iter()) {
                    for pixel in row {
                        pixel[3] = *a;
                    }
                }
            }
        }

        log::debug!(
            "applied {:?} alpha gradient {}..{} ({:?}) to {}x{}",
            self.direction,
            self.start,
            self.end,
            self.cast,
            image.width(),
            image.height()
        );

        Ok(())
    }
}
