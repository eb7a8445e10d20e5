use clap::{Parser, ValueEnum};
use log::{info, warn};

use escape_time::{
    ComplexPoint, Engine, EngineConfig, FractalKind, Generation, HistogramColouring, Legend,
    Palette, PointerButton, ViewController, ViewState,
};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Kind {
    Mandelbrot,
    Julia,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Click {
    x: f64,
    y: f64,
    button: PointerButton,
}

fn parse_click(input: &str) -> Result<Click, String> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    let [x, y, button] = parts.as_slice() else {
        return Err(format!("expected x,y,button but got {:?}", input));
    };
    let x = x.parse::<f64>().map_err(|err| format!("bad x {:?}: {}", x, err))?;
    let y = y.parse::<f64>().map_err(|err| format!("bad y {:?}: {}", y, err))?;
    let button = match *button {
        "primary" | "left" | "1" => PointerButton::Primary,
        "secondary" | "right" | "3" => PointerButton::Secondary,
        other => return Err(format!("unknown button {:?}", other)),
    };
    Ok(Click { x, y, button })
}

#[derive(Debug, Parser)]
#[command(name = "escape-time", about = "Generate Mandelbrot and Julia escape-time grids", version)]
struct Args {
    #[arg(value_enum, default_value_t = Kind::Mandelbrot)]
    kind: Kind,

    /// Iteration budget per point
    #[arg(short = 'i', long, default_value_t = escape_time::DEFAULT_MAX_ITERATIONS)]
    iterations: u32,

    #[arg(long, default_value_t = 500)]
    width: u32,

    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Multibrot exponent
    #[arg(long, default_value_t = escape_time::DEFAULT_POWER)]
    power: f64,

    /// Real part of the Julia constant
    #[arg(long, default_value_t = escape_time::DEFAULT_JULIA_CONSTANT.re, allow_hyphen_values = true)]
    julia_re: f64,

    /// Imaginary part of the Julia constant
    #[arg(long, default_value_t = escape_time::DEFAULT_JULIA_CONSTANT.im, allow_hyphen_values = true)]
    julia_im: f64,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    center_x: f64,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    center_y: f64,

    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    /// Replay a click before generating: x,y,primary|secondary (repeatable)
    #[arg(long = "click", value_parser = parse_click, allow_hyphen_values = true)]
    clicks: Vec<Click>,

    /// Worker threads; 0 uses every CPU
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Colormap name forwarded to the renderer
    #[arg(long, default_value = Palette::HOT)]
    palette: String,

    /// Print the grid rows to stdout
    #[arg(long)]
    dump: bool,

    /// With --dump, print histogram-normalised values instead of counts
    #[arg(long, requires = "dump")]
    normalised: bool,
}

fn dump(generation: &Generation, normalised: bool) {
    let grid = generation.grid();
    if normalised {
        let ranges = HistogramColouring::new().colour_ranges(grid);
        for row in ranges.chunks(grid.width()) {
            let line: Vec<String> = row.iter().map(|range| format!("{:.4}", range.value)).collect();
            println!("{}", line.join(" "));
        }
    } else {
        for row in grid.rows() {
            let line: Vec<String> = row.iter().map(u32::to_string).collect();
            println!("{}", line.join(" "));
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let kind = match args.kind {
        Kind::Mandelbrot => FractalKind::Mandelbrot { power: args.power },
        Kind::Julia => FractalKind::Julia {
            constant: ComplexPoint::new(args.julia_re, args.julia_im),
        },
    };

    let palette = Palette::new(args.palette);
    if !palette.is_offered() {
        warn!("palette {} is not one of {:?}", palette, Palette::OFFERED);
    }

    let mut controller =
        ViewController::with_view(ViewState::new(args.center_x, args.center_y, args.zoom));
    for click in &args.clicks {
        controller.click(click.x, click.y, click.button);
    }

    let engine = Engine::new(EngineConfig::with_threads(args.threads))?;
    let parameters = controller.parameters(kind, args.iterations, args.width, args.height);
    let generation = engine.generate(&parameters)?;

    let legend = Legend::for_grid(generation.grid());
    info!("{}", generation.title().replace('\n', " | "));

    if args.dump {
        dump(&generation, args.normalised);
    } else {
        let view = controller.view();
        println!("{}", generation.title());
        println!(
            "center = ({}, {}), zoom = {}",
            view.center_x, view.center_y, view.zoom_factor
        );
        println!(
            "real axis [{}, {}], imaginary axis [{}, {}]",
            generation.axis_x().min(),
            generation.axis_x().max(),
            generation.axis_y().min(),
            generation.axis_y().max()
        );
        println!(
            "escaped {} / bounded {}, legend {}..={}, palette {}",
            generation.grid().escaped_count(),
            generation.grid().bounded_count(),
            legend.min,
            legend.max,
            palette
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clicks() {
        assert_eq!(
            parse_click("-0.5, 0.25, primary"),
            Ok(Click {
                x: -0.5,
                y: 0.25,
                button: PointerButton::Primary
            })
        );
        assert_eq!(parse_click("1,2,3").map(|click| click.button), Ok(PointerButton::Secondary));
    }

    #[test]
    fn rejects_malformed_clicks() {
        assert!(parse_click("1,2").is_err());
        assert!(parse_click("a,2,primary").is_err());
        assert!(parse_click("1,2,middle").is_err());
    }

    #[test]
    fn args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
