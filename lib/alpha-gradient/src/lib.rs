pub mod compositor;
pub mod gradient;
pub mod gradient_effect;

pub use compositor::{
    add_alpha_gradient, add_horizontal_alpha_gradient, compose_rgba, load_rgb, save_rgba,
};
pub use gradient::{AlphaCast, GradientDirection};
pub use gradient_effect::AlphaGradientConfig;

use image::RgbaImage;

pub type Result<T> = std::result::Result<T, AlphaGradientError>;

#[derive(thiserror::Error, Debug)]
pub enum AlphaGradientError {
    #[error("Unsupported pixel layout: {0}")]
    UnsupportedLayout(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub trait Effect {
    fn apply(&self, image: &mut RgbaImage) -> Result<()>;
}
