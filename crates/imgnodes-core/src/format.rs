// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image value — the raster carried between nodes. Converts to and from
// `PixelArray` and to and from encoded bytes using the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::{
    ColorType, DynamicImage, GrayAlphaImage, GrayImage, ImageFormat, ImageReader, Limits,
    RgbImage, RgbaImage,
};
use tracing::{debug, instrument};

use crate::array::PixelArray;
use crate::config::NodeConfig;
use crate::error::{ImgNodesError, Result};

/// Widest decoded pixel: four 32-bit float channels.
const MAX_BYTES_PER_PIXEL: u64 = 16;

/// Smallest allocation budget handed to a decoder.
const MIN_ALLOC_BUDGET: u64 = 16 * 1024 * 1024;

/// One decoded in-memory image.
///
/// Values are never mutated in place: every transform builds a new
/// `ImageValue`, so a value handed to a downstream node stays valid for the
/// node that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageValue {
    image: DynamicImage,
}

impl ImageValue {
    // -- Construction ---------------------------------------------------------

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Decode raw encoded bytes (PNG, JPEG, ...). The format is sniffed from
    /// the content.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(data)?;
        debug!(
            width = image.width(),
            height = image.height(),
            color = ?image.color(),
            "Image decoded from bytes"
        );
        Ok(Self { image })
    }

    /// Decode raw bytes, refusing images larger than `max_pixels`.
    ///
    /// The `image` crate enforces an allocation limit derived from
    /// `max_pixels` while decoding, so a corrupt or oversized header fails
    /// with the decoder's own error. The exact pixel count is checked once
    /// the dimensions are known to be real.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes_limited(data: &[u8], max_pixels: u64) -> Result<Self> {
        let mut reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
        reader.limits(decode_limits(max_pixels));
        let image = reader.decode()?;

        let (width, height) = (u64::from(image.width()), u64::from(image.height()));
        if width.saturating_mul(height) > max_pixels {
            return Err(ImgNodesError::TooLarge {
                width,
                height,
                max_pixels,
            });
        }
        debug!(width, height, color = ?image.color(), "Image decoded from bytes");
        Ok(Self { image })
    }

    /// Load an image from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let image = image::open(path.as_ref())?;
        Ok(Self { image })
    }

    /// Build an image from a `(height, width, channels)` array.
    ///
    /// 1 channel becomes grayscale, 2 grayscale + alpha, 3 RGB, 4 RGBA.
    pub fn from_array(array: PixelArray) -> Result<Self> {
        let (height, width, channels) = array.shape();
        let (width, height) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(ImgNodesError::InvalidShape(format!(
                    "({height}, {width}, {channels}) exceeds the maximum image size"
                )));
            }
        };
        let raw = array.into_raw();
        let image = match channels {
            1 => GrayImage::from_raw(width, height, raw).map(DynamicImage::ImageLuma8),
            2 => GrayAlphaImage::from_raw(width, height, raw).map(DynamicImage::ImageLumaA8),
            3 => RgbImage::from_raw(width, height, raw).map(DynamicImage::ImageRgb8),
            _ => RgbaImage::from_raw(width, height, raw).map(DynamicImage::ImageRgba8),
        };
        let image = image.ok_or_else(|| {
            ImgNodesError::InvalidShape(format!(
                "buffer does not match ({height}, {width}, {channels})"
            ))
        })?;
        Ok(Self { image })
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Number of channels `to_array` will produce.
    pub fn channels(&self) -> usize {
        match self.image.color() {
            ColorType::L8 | ColorType::L16 => 1,
            ColorType::La8 | ColorType::La16 => 2,
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => 3,
            _ => 4,
        }
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the value and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Conversion -----------------------------------------------------------

    /// Copy the pixels into a `(height, width, channels)` array.
    ///
    /// Deeper sample formats (16-bit, float) are narrowed to 8 bits.
    pub fn to_array(&self) -> PixelArray {
        let height = self.image.height() as usize;
        let width = self.image.width() as usize;
        let channels = self.channels();
        let raw = match channels {
            1 => self.image.to_luma8().into_raw(),
            2 => self.image.to_luma_alpha8().into_raw(),
            3 => self.image.to_rgb8().into_raw(),
            _ => self.image.to_rgba8().into_raw(),
        };
        PixelArray::from_raw_parts(height, width, channels, raw)
    }

    /// Aspect-preserving preview no larger than `max_side` on either axis.
    /// Images already within the bound are returned unchanged.
    pub fn to_thumbnail(&self, max_side: u32) -> Self {
        let max_side = max_side.max(1);
        if self.width() <= max_side && self.height() <= max_side {
            return self.clone();
        }
        Self {
            image: self.image.thumbnail(max_side, max_side),
        }
    }

    /// Preview bounded by `config.thumbnail_max_side`.
    pub fn to_thumbnail_with_config(&self, config: &NodeConfig) -> Self {
        self.to_thumbnail(config.thumbnail_max_side)
    }

    // -- Output ---------------------------------------------------------------

    /// Encode as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        self.to_bytes(ImageFormat::Png)
    }

    /// Encode as JPEG using `config.jpeg_quality`.
    pub fn to_jpeg_with_config(&self, config: &NodeConfig) -> Result<Vec<u8>> {
        self.to_jpeg(config.jpeg_quality)
    }

    /// Encode as JPEG bytes with the given quality (1-100). Alpha is dropped;
    /// grayscale stays grayscale.
    pub fn to_jpeg(&self, quality: u8) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
        if self.channels() <= 2 {
            self.image.to_luma8().write_with_encoder(encoder)?;
        } else {
            self.image.to_rgb8().write_with_encoder(encoder)?;
        }
        Ok(buffer)
    }

    /// Encode in any format the `image` crate can write.
    pub fn to_bytes(&self, format: ImageFormat) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.image.write_to(&mut Cursor::new(&mut buffer), format)?;
        Ok(buffer)
    }

    /// Write the image to a file. The format is inferred from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image.save(path.as_ref())?;
        Ok(())
    }
}

/// Decoder limits for a `max_pixels` budget.
///
/// No axis can exceed the pixel budget. Decoder allocations are bounded by
/// the budget at the widest sample format, kept between a floor that leaves
/// room for codec scratch buffers and the library default ceiling.
fn decode_limits(max_pixels: u64) -> Limits {
    let mut limits = Limits::default();
    let axis = u32::try_from(max_pixels).unwrap_or(u32::MAX);
    limits.max_image_width = Some(axis);
    limits.max_image_height = Some(axis);
    let ceiling = limits.max_alloc.unwrap_or(u64::MAX).max(MIN_ALLOC_BUDGET);
    let budget = max_pixels.saturating_mul(MAX_BYTES_PER_PIXEL);
    limits.max_alloc = Some(budget.clamp(MIN_ALLOC_BUDGET, ceiling));
    limits
}

impl From<DynamicImage> for ImageValue {
    fn from(image: DynamicImage) -> Self {
        Self::from_dynamic(image)
    }
}
