use std::marker::PhantomData;
use std::path::Path;

use crate::engine::pixel_ops::PixelOps;
use crate::engine::write::WritePixel;
use crate::foundation::core::Location;
use crate::foundation::error::{BlitError, BlitResult};
use crate::format::{PixelFormat, RgbColor};

/// Order in which rows are laid out in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// Row 0 first.
    #[default]
    TopDown,
    /// Last row first (BMP/DIB style storage).
    BottomUp,
}

/// Owned, tightly packed framebuffer of `width * height` pixels in format `F`.
///
/// The checked entry points (`span`, `fill_span`, `copy_span`, ...) validate
/// coordinates before handing raw locations to the engine.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer<F: PixelFormat> {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
    order: RowOrder,
    _format: PhantomData<F>,
}

impl<F: PixelFormat> Framebuffer<F> {
    /// Zero-filled top-down framebuffer.
    pub fn new(width: u32, height: u32) -> BlitResult<Self> {
        Self::with_row_order(width, height, RowOrder::TopDown)
    }

    /// Zero-filled framebuffer with the given row order.
    pub fn with_row_order(width: u32, height: u32, order: RowOrder) -> BlitResult<Self> {
        let len = byte_len::<F>(width, height)?;
        tracing::debug!(format = F::NAME, width, height, ?order, "allocate framebuffer");
        Ok(Self {
            bytes: vec![0; len],
            width,
            height,
            order,
            _format: PhantomData,
        })
    }

    /// Wrap existing pixel bytes. The length must match the geometry exactly.
    pub fn from_bytes(
        width: u32,
        height: u32,
        order: RowOrder,
        bytes: Vec<u8>,
    ) -> BlitResult<Self> {
        let expected = byte_len::<F>(width, height)?;
        if bytes.len() != expected {
            return Err(BlitError::validation(format!(
                "{} framebuffer {width}x{height} needs {expected} bytes, got {}",
                F::NAME,
                bytes.len()
            )));
        }
        Ok(Self {
            bytes,
            width,
            height,
            order,
            _format: PhantomData,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row layout.
    pub fn row_order(&self) -> RowOrder {
        self.order
    }

    /// Bytes per row.
    pub fn pitch(&self) -> usize {
        self.width as usize * F::BYTES_PER_PIXEL
    }

    /// Raw pixel bytes in storage order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable raw pixel bytes in storage order.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Give up ownership of the pixel bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn storage_row(&self, y: u32) -> usize {
        assert!(
            y < self.height,
            "row {y} outside {} row framebuffer",
            self.height
        );
        match self.order {
            RowOrder::TopDown => y as usize,
            RowOrder::BottomUp => (self.height - 1 - y) as usize,
        }
    }

    /// Location of pixel `(x, y)`, advancing left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`; debug builds also panic if `x >= width`.
    /// Use [`Framebuffer::span`] for a checked location.
    pub fn location(&self, x: u32, y: u32) -> Location {
        let row = self.storage_row(y);
        debug_assert!(x < self.width, "column {x} outside {} column framebuffer", self.width);
        Location::new(row * self.width as usize + x as usize)
    }

    /// Location of the first pixel of row `y`, advancing left to right.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Framebuffer::location`] with `x = 0`.
    pub fn row(&self, y: u32) -> Location {
        self.location(0, y)
    }

    /// Location of the top pixel of column `x`, advancing downward.
    ///
    /// Used for rotated output, where a logical scanline is a memory column.
    ///
    /// # Panics
    ///
    /// Panics if the framebuffer has no rows; debug builds also panic if
    /// `x >= width`. Use [`Framebuffer::column_span`] for a checked location.
    pub fn column(&self, x: u32) -> Location {
        let w = self.width as isize;
        let step = match self.order {
            RowOrder::TopDown => w,
            RowOrder::BottomUp => -w,
        };
        Location::with_step(self.location(x, 0).index(), step)
    }

    /// Checked location of an `n`-pixel horizontal span starting at `(x, y)`.
    pub fn span(&self, x: u32, y: u32, n: u32) -> BlitResult<Location> {
        let end = x
            .checked_add(n)
            .ok_or_else(|| BlitError::bounds("span end overflows u32"))?;
        if y >= self.height || end > self.width {
            return Err(BlitError::bounds(format!(
                "span x={x} y={y} n={n} outside {}x{} framebuffer",
                self.width, self.height
            )));
        }
        if n == 0 {
            // Nothing will be touched; any in-range index will do.
            return Ok(Location::new(0));
        }
        Ok(self.location(x, y))
    }

    /// Checked location of an `n`-pixel vertical span starting at `(x, y)`.
    pub fn column_span(&self, x: u32, y: u32, n: u32) -> BlitResult<Location> {
        let end = y
            .checked_add(n)
            .ok_or_else(|| BlitError::bounds("span end overflows u32"))?;
        if x >= self.width || end > self.height {
            return Err(BlitError::bounds(format!(
                "column span x={x} y={y} n={n} outside {}x{} framebuffer",
                self.width, self.height
            )));
        }
        if n == 0 {
            return Ok(Location::new(0));
        }
        Ok(self.column(x).advance(y as usize))
    }

    /// Pixel at `(x, y)`, or `None` outside the framebuffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<F::Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(F::read_pixel(&self.bytes, self.location(x, y)))
    }

    /// Bytes of logical row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_bytes(&self, y: u32) -> &[u8] {
        let pitch = self.pitch();
        let start = self.storage_row(y) * pitch;
        &self.bytes[start..start + pitch]
    }

    /// Mutable bytes of logical row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_bytes_mut(&mut self, y: u32) -> &mut [u8] {
        let pitch = self.pitch();
        let start = self.storage_row(y) * pitch;
        &mut self.bytes[start..start + pitch]
    }

    /// Fill `n` pixels of row `y` starting at `x` through `ops`.
    pub fn fill_span<W, S>(
        &mut self,
        ops: &PixelOps<F, W, S>,
        x: u32,
        y: u32,
        n: u32,
        c: S::Color,
    ) -> BlitResult<()>
    where
        S: PixelFormat,
        W: WritePixel<F, S>,
    {
        let at = self.span(x, y, n)?;
        ops.fill_pixels(&mut self.bytes, at, n as usize, c);
        Ok(())
    }

    /// Copy `n` pixels from `src` row `sy` (from `sx`) into row `y` (from
    /// `x`) through `ops`.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_span<W, S>(
        &mut self,
        ops: &PixelOps<F, W, S>,
        x: u32,
        y: u32,
        src: &Framebuffer<S>,
        sx: u32,
        sy: u32,
        n: u32,
    ) -> BlitResult<()>
    where
        S: PixelFormat,
        W: WritePixel<F, S>,
    {
        let at = self.span(x, y, n)?;
        let from = src.span(sx, sy, n)?;
        ops.copy_pixels(&mut self.bytes, at, &src.bytes, from, n as usize);
        Ok(())
    }

    /// Copy `n` pixels within this framebuffer, front to back.
    ///
    /// See [`PixelOps::copy_pixels_within`] for overlap behavior.
    pub fn copy_span_within<W>(
        &mut self,
        ops: &PixelOps<F, W>,
        (x, y): (u32, u32),
        (sx, sy): (u32, u32),
        n: u32,
    ) -> BlitResult<()>
    where
        W: WritePixel<F, F>,
    {
        let at = self.span(x, y, n)?;
        let from = self.span(sx, sy, n)?;
        ops.copy_pixels_within(&mut self.bytes, at, from, n as usize);
        Ok(())
    }
}

impl<F: RgbColor> Framebuffer<F> {
    /// Expand to a straight-alpha RGBA8 image in top-down order.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(F::to_rgba(F::read_pixel(&self.bytes, self.location(x, y))))
        })
    }

    /// Write the framebuffer as a PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> BlitResult<()> {
        let path = path.as_ref();
        self.to_rgba_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        tracing::debug!(path = %path.display(), "wrote png");
        Ok(())
    }
}

impl<F: PixelFormat> std::fmt::Debug for Framebuffer<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("format", &F::NAME)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

fn byte_len<F: PixelFormat>(width: u32, height: u32) -> BlitResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(F::BYTES_PER_PIXEL))
        .ok_or_else(|| BlitError::validation("framebuffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/surface/framebuffer.rs"]
mod tests;
