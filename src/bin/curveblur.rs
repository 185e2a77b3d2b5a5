use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "curveblur", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Blur an image along the project's path and write a PNG.
    Render(RenderArgs),
    /// Write a default project file.
    Init(InitArgs),
    /// Print the sampled curve and direction sequence as JSON.
    Directions(DirectionsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Source image (any format the `image` crate decodes).
    #[arg(long)]
    image: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Project JSON (defaults are used when omitted).
    #[arg(long)]
    project: Option<PathBuf>,

    /// Export resolution relative to the display size.
    #[arg(long, value_enum, default_value_t = TierChoice::Full)]
    tier: TierChoice,

    /// Write the uncropped display-resolution preview instead of the export.
    #[arg(long)]
    preview: bool,

    /// Darken the area outside the crop (preview only).
    #[arg(long, requires = "preview")]
    crop_overlay: bool,

    /// Override the project's blur radius.
    #[arg(long)]
    radius: Option<u32>,

    /// Override the project's rotation in degrees.
    #[arg(long, allow_negative_numbers = true)]
    rotation: Option<f64>,
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Output project JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

#[derive(Parser, Debug)]
struct DirectionsArgs {
    /// Project JSON (defaults are used when omitted).
    #[arg(long)]
    project: Option<PathBuf>,

    /// Override the sample count.
    #[arg(long)]
    count: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TierChoice {
    Full,
    Half,
    Quarter,
}

impl From<TierChoice> for curveblur::ExportTier {
    fn from(t: TierChoice) -> Self {
        match t {
            TierChoice::Full => Self::Full,
            TierChoice::Half => Self::Half,
            TierChoice::Quarter => Self::Quarter,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Init(args) => cmd_init(args),
        Command::Directions(args) => cmd_directions(args),
    }
}

fn read_project(path: Option<&Path>) -> anyhow::Result<curveblur::Project> {
    match path {
        Some(p) => curveblur::Project::from_path(p)
            .with_context(|| format!("load project '{}'", p.display())),
        None => Ok(curveblur::Project::default()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut project = read_project(args.project.as_deref())?;
    if let Some(r) = args.radius {
        project.blur_radius = r;
    }
    if let Some(rot) = args.rotation {
        project.rotation_deg = rot;
    }

    let source = curveblur::load_image(&args.image)
        .with_context(|| format!("load image '{}'", args.image.display()))?;
    let state = project.into_editor_state(Some(source))?;

    let out = if args.preview {
        let mut preview = curveblur::render_preview(&state)?;
        if args.crop_overlay {
            curveblur::shade_outside_crop(
                &mut preview,
                state.crop(),
                curveblur::CROP_SHADE,
                curveblur::CROP_SHADE_OPACITY,
            )?;
        }
        preview
    } else {
        let tier = curveblur::ExportTier::from(args.tier);
        curveblur::render_export(&state, tier.scale())?
            .context("export produced no image (no source loaded)")?
    };

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let png = curveblur::encode_png(&out)?;
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {} ({}x{})", args.out.display(), out.width(), out.height());
    Ok(())
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    if args.out.exists() && !args.force {
        anyhow::bail!(
            "'{}' already exists (pass --force to overwrite)",
            args.out.display()
        );
    }
    let json = curveblur::Project::default().to_json_pretty()?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write project '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

#[derive(serde::Serialize)]
struct DirectionsReport {
    view_points: Vec<curveblur::Point>,
    sampled: Vec<curveblur::Point>,
    directions: Vec<curveblur::Vec2>,
}

fn cmd_directions(args: DirectionsArgs) -> anyhow::Result<()> {
    let mut project = read_project(args.project.as_deref())?;
    if let Some(count) = args.count {
        project.num_samples = count.clamp(1, curveblur::MAX_NUM_SAMPLES);
    }
    let state = project.into_editor_state(None)?;
    let view = state.path().view_points();

    let report = DirectionsReport {
        view_points: view.to_vec(),
        sampled: curveblur::sample_curve(view, state.params().num_samples),
        directions: state.directions(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
