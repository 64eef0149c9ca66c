use image::RgbaImage;
use std::sync::Arc;
use tracing::debug;

use crate::algorithm::renderer::render;
use crate::algorithm::resolver::{Bitmap, resolve};
use crate::io::configuration::GenerationOptions;
use crate::io::error::Result;
use crate::spatial::Mask;

/// Produces sprites from one shared mask and one set of options
///
/// Every call draws fresh bits from the owned source, so consecutive sprites
/// differ. Two generators replaying identical seed material produce identical
/// sprites. A generator is `Send` but performs no locking; callers sharing one
/// across threads must serialize access themselves.
#[derive(Debug)]
pub struct Generator {
    mask: Arc<Mask>,
    options: GenerationOptions,
}

impl Generator {
    /// Bind a mask to generation options
    pub fn new(mask: impl Into<Arc<Mask>>, options: GenerationOptions) -> Self {
        let mask = mask.into();
        debug!(
            width = mask.image_width(),
            height = mask.image_height(),
            bits = mask.ambiguity_count(),
            "Generator created"
        );
        Self { mask, options }
    }

    /// Bind a mask to default options with an operating system seeded source
    pub fn with_default_options(mask: impl Into<Arc<Mask>>) -> Self {
        Self::new(mask, GenerationOptions::default())
    }

    /// Template shared by every sprite
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Current options
    pub const fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Mutable options, e.g. to reseed the bit source between sprites
    pub const fn options_mut(&mut self) -> &mut GenerationOptions {
        &mut self.options
    }

    /// Resolve a fresh copy of the mask without rendering it
    pub fn resolve(&mut self) -> Bitmap {
        resolve(&self.mask, &mut self.options.source)
    }

    /// Resolve and render a new sprite
    ///
    /// # Errors
    ///
    /// Returns an error if the bit source cannot derive a seed value for the
    /// renderer
    pub fn sprite(&mut self) -> Result<RgbaImage> {
        let bitmap = self.resolve();
        let image = render(&bitmap, &mut self.options)?;
        debug!(
            width = image.width(),
            height = image.height(),
            "Sprite generated"
        );
        Ok(image)
    }
}
