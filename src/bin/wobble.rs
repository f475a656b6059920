use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use wobble::{Background, GridLayout, RenderOpts};

#[derive(Parser, Debug)]
#[command(name = "wobble", version, about = "Render text as a wobbling animated GIF")]
struct Cli {
    /// Text to draw.
    text: String,

    /// Output GIF path.
    output: PathBuf,

    /// Font to use. Glyph files must be named `{font}_{character}.png`.
    #[arg(long, short = 'f', default_value = "Helvetica")]
    font: String,

    /// Directory holding the glyph files.
    #[arg(long, default_value = "letters")]
    letters_dir: PathBuf,

    /// Black background instead of white.
    #[arg(long, short = 'b')]
    black_background: bool,

    /// Word-wrap and center the text; grid size options are ignored.
    #[arg(long, short = 's')]
    smart: bool,

    /// Grid width in letters [default: 7].
    #[arg(long, short = 'x')]
    grid_x: Option<u32>,

    /// Grid height in letters [default: 3].
    #[arg(long, short = 'y')]
    grid_y: Option<u32>,

    /// Chromatic channel offset in pixels, rounded down to even [default: 2].
    #[arg(long, short = 'r')]
    rgb_shift: Option<u32>,

    /// Largest per-frame shift of a letter in pixels [default: 1].
    #[arg(long)]
    max_shift: Option<u32>,

    /// Random-walk steps; the GIF has 2 * (steps + 1) frames [default: 30].
    #[arg(long)]
    steps: Option<usize>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON render options; command-line flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log progress details.
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    wobble::ensure_gif_path(&cli.output)?;
    let opts = resolve_opts(&cli)?;

    let glyphs = wobble::GlyphSet::load(&cli.letters_dir, &cli.font, opts.background)
        .with_context(|| format!("load glyphs for font '{}'", cli.font))?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let grid = wobble::build_grid(&cli.text, &glyphs, &opts, &mut rng)?;
    let stats = wobble::render_to_gif(&grid, &opts, &cli.output)?;

    eprintln!(
        "wrote {} ({} frames, {}x{})",
        cli.output.display(),
        stats.frames,
        stats.width,
        stats.height
    );
    Ok(())
}

fn resolve_opts(cli: &Cli) -> anyhow::Result<RenderOpts> {
    let mut opts = match &cli.config {
        Some(path) => RenderOpts::from_path(path)?,
        None => RenderOpts::default(),
    };

    if cli.black_background {
        opts.background = Background::Black;
    }
    if cli.smart {
        opts.layout = GridLayout::Smart { width: None };
    } else if cli.grid_x.is_some() || cli.grid_y.is_some() {
        let (x, y) = match opts.layout {
            GridLayout::Fixed { x, y } => (x, y),
            GridLayout::Smart { .. } => (7, 3),
        };
        opts.layout = GridLayout::Fixed {
            x: cli.grid_x.unwrap_or(x),
            y: cli.grid_y.unwrap_or(y),
        };
    }
    if let Some(k) = cli.rgb_shift {
        opts.rgb_shift = wobble::even_shift(k);
    }
    if let Some(m) = cli.max_shift {
        opts.max_shift = m;
    }
    if let Some(s) = cli.steps {
        opts.steps = s;
    }

    opts.validate()?;
    Ok(opts)
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
