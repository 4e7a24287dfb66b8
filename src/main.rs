//! thin-lens CLI: ray diagram and image of an object through a thin lens.

use clap::{Args, Parser, Subcommand, ValueEnum};
use thin_lens::{
    build_diagram, ImageResult, LensError, LensKind, LensParameters, RayConfig, DEFAULT_EXTENSION,
};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "thin-lens")]
#[command(about = "Thin lens ray diagrams: principal, central and focal rays and the image they form")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the ray segments and the image.
    Diagram {
        #[command(flatten)]
        lens: LensArgs,

        /// Length of the rays drawn beyond the lens.
        #[arg(long, default_value_t = DEFAULT_EXTENSION)]
        extension: f64,

        /// Print the diagram as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Compute the image only.
    Image {
        #[command(flatten)]
        lens: LensArgs,

        /// Print the image as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Args)]
struct LensArgs {
    /// Height of the object.
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    height: f64,

    /// Distance of the object from the lens.
    #[arg(long, default_value_t = 300.0)]
    distance: f64,

    /// Focal length (positive for a converging lens, either sign for a diverging lens).
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    focal: f64,

    /// Lens kind.
    #[arg(long, value_enum, default_value_t = CliLensKind::Converging)]
    kind: CliLensKind,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLensKind {
    Converging,
    Diverging,
}

impl From<CliLensKind> for LensKind {
    fn from(kind: CliLensKind) -> Self {
        match kind {
            CliLensKind::Converging => LensKind::Converging,
            CliLensKind::Diverging => LensKind::Diverging,
        }
    }
}

impl LensArgs {
    fn to_params(&self) -> CliResult<LensParameters> {
        let params = LensParameters::new(self.height, self.distance, self.focal, self.kind.into())?;
        tracing::info!(
            "{} lens: h_o={}, d_o={}, f={}",
            params.kind,
            params.object_height,
            params.object_distance,
            params.signed_focal_length()
        );
        Ok(params)
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diagram {
            lens,
            extension,
            json,
        } => run_diagram(&lens, extension, json),
        Commands::Image { lens, json } => run_image(&lens, json),
    };
    match result {
        Err(e) => match e.downcast_ref::<LensError>() {
            Some(LensError::UndefinedImage) => {
                println!("No image forms: {}", e);
                std::process::exit(1)
            }
            _ => Err(e),
        },
        ok => ok,
    }
}

// ── diagram ────────────────────────────────────────────────────────────

fn run_diagram(lens: &LensArgs, extension: f64, json: bool) -> CliResult<()> {
    let params = lens.to_params()?;
    let config = RayConfig::new(extension)?;
    let diagram = build_diagram(&params, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&diagram)?);
        return Ok(());
    }

    println!("{}", diagram);
    let object = diagram.object_point();
    let image = diagram.image_point();
    println!("Object tip: [{:+.6},{:+.6}]", object.x, object.y);
    println!("Image tip : [{:+.6},{:+.6}]", image.x, image.y);
    Ok(())
}

// ── image ──────────────────────────────────────────────────────────────

fn run_image(lens: &LensArgs, json: bool) -> CliResult<()> {
    let params = lens.to_params()?;
    let image = ImageResult::compute(&params)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&image)?);
    } else {
        println!("{}", image);
    }
    Ok(())
}
