use std::path::PathBuf;

use clap::Parser;
use fractal_zoom::{
    CliController, ColourMapKinds, ExplorerConfig, FractalKinds, Point, PpmFilePresenter,
    RenderStrategy,
};

#[derive(Parser, Debug)]
#[command(name = "fractal_zoom")]
#[command(about = "Renders an escape-time fractal and zooms in on clicked pixels")]
struct Args {
    /// JSON settings file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    fractal: Option<FractalKinds>,

    /// Side length of the square image in pixels
    #[arg(short, long)]
    size: Option<u32>,

    #[arg(long)]
    max_iterations: Option<u32>,

    #[arg(long)]
    colour_map: Option<ColourMapKinds>,

    /// Render rows on the rayon pool
    #[arg(long)]
    parallel: bool,

    /// Pixel to zoom in on, as X,Y; repeat for several zooms
    #[arg(long = "click", value_parser = parse_click)]
    clicks: Vec<Point>,

    /// Where the last frame is written
    #[arg(short, long, default_value = "output/fractal.ppm")]
    output: PathBuf,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn parse_click(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;

    let x = x.trim().parse().map_err(|e| format!("bad x in '{value}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in '{value}': {e}"))?;

    Ok(Point { x, y })
}

fn apply_overrides(mut config: ExplorerConfig, args: &Args) -> ExplorerConfig {
    if let Some(fractal) = args.fractal {
        config.fractal = fractal;
    }
    if let Some(size) = args.size {
        config.display_size = size;
    }
    if let Some(max_iterations) = args.max_iterations {
        config.max_iterations = max_iterations;
    }
    if let Some(colour_map) = args.colour_map {
        config.colour_map = colour_map;
    }
    if args.parallel {
        config.strategy = RenderStrategy::Parallel;
    }

    config
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let base = match &args.config {
        Some(path) => ExplorerConfig::load(path)?,
        None => ExplorerConfig::default(),
    };
    let config = apply_overrides(base, &args);
    config.validate()?;

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let presenter = PpmFilePresenter::new(&args.output);
    let mut controller = CliController::new(&config, presenter)?;
    let report = controller.run(&args.clicks)?;

    println!("Wrote {} ({} frames)", args.output.display(), report.frames);

    Ok(())
}
