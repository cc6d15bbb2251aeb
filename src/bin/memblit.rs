use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use memblit::engine::WritePixel;
use memblit::{
    Bgra8888, BlitThreading, Framebuffer, Gray8, Luminosity8, PixelFormat, PixelOps, Rgb565,
    RgbColor, RowBand, RowOrder, catalog, copy_rows, fill_rows,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "memblit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a test card exercising every operation and save it as a PNG.
    Card(CardArgs),
    /// Time fills and copies for every operation and print a JSON report.
    Bench(BenchArgs),
}

#[derive(Parser, Debug)]
struct CardArgs {
    /// Pixel format of the framebuffer.
    #[arg(long, value_enum, default_value_t = FormatChoice::Bgra8888)]
    format: FormatChoice,

    /// Width in pixels.
    #[arg(long, default_value_t = 320)]
    width: u32,

    /// Height in pixels.
    #[arg(long, default_value_t = 240)]
    height: u32,

    /// Store rows bottom-up.
    #[arg(long)]
    bottom_up: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Threading config JSON (`BlitThreading`).
    #[arg(long)]
    threading: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BenchArgs {
    /// Pixel format of the framebuffer.
    #[arg(long, value_enum, default_value_t = FormatChoice::Bgra8888)]
    format: FormatChoice,

    /// Width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Passes per operation.
    #[arg(long, default_value_t = 20)]
    iterations: u32,

    /// Threading config JSON (`BlitThreading`).
    #[arg(long)]
    threading: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Gray8,
    Rgb565,
    Bgra8888,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Card(args) => cmd_card(args),
        Command::Bench(args) => cmd_bench(args),
    }
}

fn read_threading(path: Option<&Path>) -> anyhow::Result<BlitThreading> {
    let Some(path) = path else {
        return Ok(BlitThreading::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read threading config '{}'", path.display()))?;
    BlitThreading::from_json_str(&s)
        .with_context(|| format!("parse threading config '{}'", path.display()))
}

fn cmd_card(args: CardArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.width > 0 && args.height >= CARD_BANDS,
        "card needs width >= 1 and height >= {CARD_BANDS}"
    );
    let threading = read_threading(args.threading.as_deref())?;
    let order = if args.bottom_up {
        RowOrder::BottomUp
    } else {
        RowOrder::TopDown
    };

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    match args.format {
        FormatChoice::Gray8 => render_card::<Gray8>(&args, order, &threading),
        FormatChoice::Rgb565 => render_card::<Rgb565>(&args, order, &threading),
        FormatChoice::Bgra8888 => render_card::<Bgra8888>(&args, order, &threading),
    }
}

const CARD_BANDS: u32 = 11;

fn render_card<F: RgbColor>(
    args: &CardArgs,
    order: RowOrder,
    threading: &BlitThreading,
) -> anyhow::Result<()> {
    let (w, h) = (args.width, args.height);
    let mut fb = Framebuffer::<F>::with_row_order(w, h, order)?;

    let ramp = coverage_ramp(w, h)?;
    let glyphs = checker_glyphs(w, h)?;
    let key = F::from_rgb(255, 0, 255);
    let sprite = keyed_sprite::<F>(w, h, key, threading)?;

    let base = F::from_rgb(40, 44, 56);
    let full = RowBand::full(&fb);
    fill_rows(&mut fb, &catalog::copy(), full, base, threading)?;

    let band_h = h / CARD_BANDS;
    let band = |i: u32| RowBand {
        x: 0,
        y: i * band_h,
        width: w,
        height: if i + 1 == CARD_BANDS {
            h - i * band_h
        } else {
            band_h
        },
    };
    let origin = |b: RowBand| (b.x, b.y);

    let light = F::from_rgb(230, 230, 230);
    fill_rows(&mut fb, &catalog::copy(), band(0), light, threading)?;
    copy_rows(&mut fb, &catalog::bit_not(), band(1), &sprite, origin(band(1)), threading)?;
    let navy = F::from_rgb(0, 0, 160);
    fill_rows(&mut fb, &catalog::bit_or(), band(2), navy, threading)?;
    let orange = F::from_rgb(255, 96, 0);
    fill_rows(&mut fb, &catalog::bit_and(), band(3), orange, threading)?;
    let cyan = F::from_rgb(0, 255, 255);
    fill_rows(&mut fb, &catalog::bit_not_or(), band(4), cyan, threading)?;
    let red = F::from_rgb(220, 40, 40);
    fill_rows(&mut fb, &catalog::alpha(128), band(5), red, threading)?;

    let ink = F::from_rgb(250, 210, 60);
    let inked = catalog::colored_alpha(ink);
    copy_rows(&mut fb, &inked, band(6), &ramp, origin(band(6)), threading)?;

    let (lo, hi) = (F::from_rgb(0, 40, 120), F::from_rgb(255, 255, 255));
    let gradient = catalog::opaque_alpha(lo, hi);
    copy_rows(&mut fb, &gradient, band(7), &ramp, origin(band(7)), threading)?;

    let (paper, text) = (F::from_rgb(250, 250, 240), F::from_rgb(20, 20, 20));
    copy_rows(
        &mut fb,
        &catalog::opaque_text::<F, Gray8>(paper, text),
        band(8),
        &glyphs,
        origin(band(8)),
        threading,
    )?;

    let keyed = catalog::transparent(key);
    copy_rows(&mut fb, &keyed, band(9), &sprite, origin(band(9)), threading)?;
    copy_rows(
        &mut fb,
        &catalog::transparent_invert(key),
        band(10),
        &sprite,
        origin(band(10)),
        threading,
    )?;

    fb.save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Horizontal 0..=255 coverage ramp.
fn coverage_ramp(w: u32, h: u32) -> anyhow::Result<Framebuffer<Gray8>> {
    let denom = (w - 1).max(1);
    let row: Vec<u8> = (0..w)
        .map(|x| (u64::from(x) * 255 / u64::from(denom)) as u8)
        .collect();
    let bytes = row.repeat(h as usize);
    Ok(Framebuffer::from_bytes(w, h, RowOrder::TopDown, bytes)?)
}

/// 4x4 checkerboard standing in for a monochrome glyph bitmap.
fn checker_glyphs(w: u32, h: u32) -> anyhow::Result<Framebuffer<Gray8>> {
    let mut fb = Framebuffer::<Gray8>::new(w, h)?;
    let ops = catalog::copy::<Gray8>();
    for y in 0..h {
        for x in (0..w).step_by(4) {
            let on = ((x / 4) + (y / 4)) % 2 == 1;
            let c = if on { Luminosity8::WHITE } else { Luminosity8::BLACK };
            fb.fill_span(&ops, x, y, 4.min(w - x), c)?;
        }
    }
    Ok(fb)
}

/// Key-colored sheet with a centered block of solid color.
fn keyed_sprite<F: RgbColor>(
    w: u32,
    h: u32,
    key: F::Color,
    threading: &BlitThreading,
) -> anyhow::Result<Framebuffer<F>> {
    let mut fb = Framebuffer::<F>::new(w, h)?;
    let ops = catalog::copy::<F>();
    let full = RowBand::full(&fb);
    fill_rows(&mut fb, &ops, full, key, threading)?;
    let block = RowBand {
        x: w / 4,
        y: 0,
        width: w / 2,
        height: h,
    };
    fill_rows(&mut fb, &ops, block, F::from_rgb(60, 180, 90), threading)?;
    Ok(fb)
}

#[derive(Debug, serde::Serialize)]
struct BenchReport {
    format: &'static str,
    width: u32,
    height: u32,
    iterations: u32,
    threading: BlitThreading,
    results: Vec<BenchResult>,
}

#[derive(Debug, serde::Serialize)]
struct BenchResult {
    op: &'static str,
    mode: &'static str,
    total_ms: f64,
    ns_per_pixel: f64,
}

fn cmd_bench(args: BenchArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.width > 0 && args.height > 0, "bench needs a non-empty framebuffer");
    anyhow::ensure!(args.iterations > 0, "bench needs at least one iteration");
    let threading = read_threading(args.threading.as_deref())?;

    let report = match args.format {
        FormatChoice::Gray8 => run_bench::<Gray8>(&args, threading)?,
        FormatChoice::Rgb565 => run_bench::<Rgb565>(&args, threading)?,
        FormatChoice::Bgra8888 => run_bench::<Bgra8888>(&args, threading)?,
    };

    let json = serde_json::to_string_pretty(&report).context("serialize bench report")?;
    println!("{json}");
    Ok(())
}

struct Bench<'a, F: PixelFormat> {
    fb: Framebuffer<F>,
    iterations: u32,
    threading: &'a BlitThreading,
    results: Vec<BenchResult>,
}

impl<F: PixelFormat> Bench<'_, F> {
    fn fill<W, S>(
        &mut self,
        op: &'static str,
        ops: &PixelOps<F, W, S>,
        c: S::Color,
    ) -> anyhow::Result<()>
    where
        S: PixelFormat,
        W: WritePixel<F, S> + Sync,
    {
        let band = RowBand::full(&self.fb);
        let start = Instant::now();
        for _ in 0..self.iterations {
            fill_rows(&mut self.fb, ops, band, c, self.threading)?;
        }
        self.record(op, "fill", start);
        Ok(())
    }

    fn copy<W, S>(
        &mut self,
        op: &'static str,
        ops: &PixelOps<F, W, S>,
        src: &Framebuffer<S>,
    ) -> anyhow::Result<()>
    where
        S: PixelFormat,
        W: WritePixel<F, S> + Sync,
    {
        let band = RowBand::full(&self.fb);
        let start = Instant::now();
        for _ in 0..self.iterations {
            copy_rows(&mut self.fb, ops, band, src, (0, 0), self.threading)?;
        }
        self.record(op, "copy", start);
        Ok(())
    }

    fn record(&mut self, op: &'static str, mode: &'static str, start: Instant) {
        let elapsed = start.elapsed();
        let pixels =
            f64::from(self.fb.width()) * f64::from(self.fb.height()) * f64::from(self.iterations);
        tracing::debug!(op, mode, ?elapsed, "bench pass");
        self.results.push(BenchResult {
            op,
            mode,
            total_ms: elapsed.as_secs_f64() * 1e3,
            ns_per_pixel: elapsed.as_secs_f64() * 1e9 / pixels,
        });
    }
}

fn run_bench<F: RgbColor>(
    args: &BenchArgs,
    threading: BlitThreading,
) -> anyhow::Result<BenchReport> {
    let (w, h) = (args.width, args.height);
    let ramp = coverage_ramp(w, h)?;
    let key = F::from_rgb(255, 0, 255);
    let sprite = keyed_sprite::<F>(w, h, key, &threading)?;
    let red = F::from_rgb(220, 40, 40);

    let mut bench = Bench {
        fb: Framebuffer::<F>::new(w, h)?,
        iterations: args.iterations,
        threading: &threading,
        results: Vec::new(),
    };

    bench.fill("copy", &catalog::copy(), red)?;
    bench.copy("copy", &catalog::copy(), &sprite)?;
    bench.copy("bit_not", &catalog::bit_not(), &sprite)?;
    bench.fill("bit_or", &catalog::bit_or(), red)?;
    bench.fill("bit_and", &catalog::bit_and(), red)?;
    bench.fill("bit_not_or", &catalog::bit_not_or(), red)?;
    bench.fill("alpha", &catalog::alpha(128), red)?;
    bench.copy("alpha", &catalog::alpha(128), &sprite)?;
    bench.copy("colored_alpha", &catalog::colored_alpha(red), &ramp)?;
    bench.copy("opaque_alpha", &catalog::opaque_alpha(red, key), &ramp)?;
    bench.copy("opaque_text", &catalog::opaque_text::<F, Gray8>(key, red), &ramp)?;
    bench.copy("transparent", &catalog::transparent(key), &sprite)?;
    bench.copy("transparent_invert", &catalog::transparent_invert(key), &sprite)?;

    let results = bench.results;
    Ok(BenchReport {
        format: F::NAME,
        width: w,
        height: h,
        iterations: args.iterations,
        threading,
        results,
    })
}
