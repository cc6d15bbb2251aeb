use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use rayon::prelude::*;

use crate::engine::pixel_ops::PixelOps;
use crate::engine::write::WritePixel;
use crate::foundation::core::Location;
use crate::foundation::error::{BlitError, BlitResult};
use crate::format::PixelFormat;
use crate::surface::framebuffer::{Framebuffer, RowOrder};

/// Threading controls for row-batched fills and copies.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlitThreading {
    /// Split rows across worker threads when `true`.
    pub parallel: bool,
    /// Dedicated pool size. `None` runs on the global rayon pool.
    pub threads: Option<usize>,
    /// Lower bound on rows handed to one task.
    pub min_rows_per_task: usize,
}

impl Default for BlitThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            min_rows_per_task: 16,
        }
    }
}

impl BlitThreading {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> BlitResult<Self> {
        let threading: Self = serde_json::from_str(s)?;
        threading.validate()?;
        Ok(threading)
    }

    /// Reject settings no pool could honor.
    pub fn validate(&self) -> BlitResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(BlitError::validation(
                "blit threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Axis-aligned band of rows: `height` rows starting at `y`, each covering
/// `width` pixels from `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RowBand {
    /// Left edge.
    pub x: u32,
    /// Top row.
    pub y: u32,
    /// Pixels per row.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl RowBand {
    /// The band covering a whole framebuffer.
    pub fn full<F: PixelFormat>(fb: &Framebuffer<F>) -> Self {
        Self {
            x: 0,
            y: 0,
            width: fb.width(),
            height: fb.height(),
        }
    }

    fn check<F: PixelFormat>(self, fb: &Framebuffer<F>, what: &str) -> BlitResult<()> {
        let x_end = self.x.checked_add(self.width);
        let y_end = self.y.checked_add(self.height);
        match (x_end, y_end) {
            (Some(xe), Some(ye)) if xe <= fb.width() && ye <= fb.height() => Ok(()),
            _ => Err(BlitError::bounds(format!(
                "{what} band {self:?} outside {}x{} framebuffer",
                fb.width(),
                fb.height()
            ))),
        }
    }

    /// Storage-order row range and whether logical order is reversed in it.
    fn storage_rows<F: PixelFormat>(self, fb: &Framebuffer<F>) -> (usize, usize, bool) {
        match fb.row_order() {
            RowOrder::TopDown => (self.y as usize, (self.y + self.height) as usize, false),
            RowOrder::BottomUp => {
                let h = fb.height();
                ((h - self.y - self.height) as usize, (h - self.y) as usize, true)
            }
        }
    }
}

/// Fill every row of `band` with `c` through `ops`.
///
/// Rows are independent, so the parallel path produces the same bytes as
/// the sequential one; a row is never split between workers.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(format = F::NAME, rows = band.height, parallel = threading.parallel)
)]
pub fn fill_rows<F, W, S>(
    fb: &mut Framebuffer<F>,
    ops: &PixelOps<F, W, S>,
    band: RowBand,
    c: S::Color,
    threading: &BlitThreading,
) -> BlitResult<()>
where
    F: PixelFormat,
    S: PixelFormat,
    W: WritePixel<F, S> + Sync,
{
    band.check(fb, "fill")?;
    threading.validate()?;
    if band.width == 0 || band.height == 0 {
        return Ok(());
    }

    let pitch = fb.pitch();
    let (first, last, _) = band.storage_rows(fb);
    let rows = &mut fb.as_bytes_mut()[first * pitch..last * pitch];
    let at = Location::new(band.x as usize);
    let n = band.width as usize;

    if !threading.parallel {
        for row in rows.chunks_exact_mut(pitch) {
            ops.fill_pixels(row, at, n, c);
        }
        return Ok(());
    }

    let min_len = threading.min_rows_per_task.max(1);
    run_in_pool(threading.threads, || {
        rows.par_chunks_exact_mut(pitch)
            .with_min_len(min_len)
            .for_each(|row| ops.fill_pixels(row, at, n, c));
    })
}

/// Copy `band` from `src` (top-left at `(sx, sy)`) into `fb` through `ops`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(
        format = F::NAME,
        source = S::NAME,
        rows = band.height,
        parallel = threading.parallel
    )
)]
pub fn copy_rows<F, W, S>(
    fb: &mut Framebuffer<F>,
    ops: &PixelOps<F, W, S>,
    band: RowBand,
    src: &Framebuffer<S>,
    (sx, sy): (u32, u32),
    threading: &BlitThreading,
) -> BlitResult<()>
where
    F: PixelFormat,
    S: PixelFormat,
    W: WritePixel<F, S> + Sync,
{
    band.check(fb, "copy destination")?;
    RowBand {
        x: sx,
        y: sy,
        ..band
    }
    .check(src, "copy source")?;
    threading.validate()?;
    if band.width == 0 || band.height == 0 {
        return Ok(());
    }

    let pitch = fb.pitch();
    let (first, last, reversed) = band.storage_rows(fb);
    let rows = &mut fb.as_bytes_mut()[first * pitch..last * pitch];
    let at = Location::new(band.x as usize);
    let from = Location::new(sx as usize);
    let n = band.width as usize;
    let height = band.height;

    // Logical source row for the i-th destination row in storage order.
    let src_row = move |i: usize| -> u32 {
        let i = i as u32;
        if reversed {
            sy + height - 1 - i
        } else {
            sy + i
        }
    };

    if !threading.parallel {
        for (i, row) in rows.chunks_exact_mut(pitch).enumerate() {
            ops.copy_pixels(row, at, src.row_bytes(src_row(i)), from, n);
        }
        return Ok(());
    }

    let min_len = threading.min_rows_per_task.max(1);
    run_in_pool(threading.threads, || {
        rows.par_chunks_exact_mut(pitch)
            .enumerate()
            .with_min_len(min_len)
            .for_each(|(i, row)| ops.copy_pixels(row, at, src.row_bytes(src_row(i)), from, n));
    })
}

fn run_in_pool(threads: Option<usize>, job: impl FnOnce() + Send) -> BlitResult<()> {
    match threads {
        None => {
            job();
            Ok(())
        }
        Some(n) => {
            let pool = shared_pool(n)?;
            pool.install(job);
            Ok(())
        }
    }
}

/// Dedicated pool for `threads` workers, built on first use and reused by
/// every later batch asking for the same size.
fn shared_pool(threads: usize) -> BlitResult<Arc<rayon::ThreadPool>> {
    static POOLS: OnceLock<Mutex<HashMap<usize, Arc<rayon::ThreadPool>>>> = OnceLock::new();

    let mut pools = POOLS
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(pool) = pools.get(&threads) {
        return Ok(Arc::clone(pool));
    }
    let pool = Arc::new(build_thread_pool(threads)?);
    pools.insert(threads, Arc::clone(&pool));
    Ok(pool)
}

fn build_thread_pool(threads: usize) -> BlitResult<rayon::ThreadPool> {
    tracing::debug!(threads, "build blit thread pool");
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| BlitError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/surface/parallel.rs"]
mod tests;
