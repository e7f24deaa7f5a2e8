use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use frame_annotator::{
    Anchor, FontDirs, FontDiscovery, FrameAnnotator, ImageBatch, NamedColor, OutlineColor,
    RenderConfig, SystemFonts,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "frame-annotator", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Burn frame numbers into a sequence of images.
    Annotate(AnnotateArgs),
    /// List font identifiers accepted by `--font`.
    Fonts(FontArgs),
}

#[derive(Args, Debug)]
struct FontArgs {
    /// Only look for fonts in these directories (repeatable).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct AnnotateArgs {
    /// Input images, in frame order (repeatable). All must share dimensions.
    #[arg(long = "in", required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory; each frame is written as `<input stem>.png`.
    #[arg(long)]
    out_dir: PathBuf,

    /// Render config JSON. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    fonts: FontArgs,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Font size in pixels (8-200).
    #[arg(long)]
    font_size: Option<u32>,

    /// Font identifier or path to a font file.
    #[arg(long)]
    font: Option<String>,

    /// Caption color.
    #[arg(long)]
    font_color: Option<NamedColor>,

    /// Horizontal anchor: start|center|end (left/right accepted).
    #[arg(long)]
    h_position: Option<Anchor>,

    /// Vertical anchor: start|center|end (top/bottom accepted).
    #[arg(long)]
    v_position: Option<Anchor>,

    /// Horizontal padding in pixels (0-1000).
    #[arg(long)]
    h_padding: Option<u32>,

    /// Vertical padding in pixels (0-1000).
    #[arg(long)]
    v_padding: Option<u32>,

    /// Minimum digits of the frame number (1-5).
    #[arg(long)]
    num_padding: Option<u32>,

    /// Text before the number; pass an empty string to drop it.
    #[arg(long)]
    prefix: Option<String>,

    /// Draw an outline around the caption.
    #[arg(long, conflicts_with = "no_outline")]
    outline: bool,

    /// Turn the outline off even if the config file enables it.
    #[arg(long)]
    no_outline: bool,

    /// Outline color, or `none`.
    #[arg(long)]
    outline_color: Option<OutlineColor>,

    /// Outline width in pixels (0-5).
    #[arg(long)]
    stroke_width: Option<u32>,
}

impl StyleArgs {
    fn apply(self, cfg: &mut RenderConfig) {
        if let Some(v) = self.font_size {
            cfg.font_size = v;
        }
        if let Some(v) = self.font {
            cfg.font = v;
        }
        if let Some(v) = self.font_color {
            cfg.font_color = v;
        }
        if let Some(v) = self.h_position {
            cfg.h_position = v;
        }
        if let Some(v) = self.v_position {
            cfg.v_position = v;
        }
        if let Some(v) = self.h_padding {
            cfg.h_padding = v;
        }
        if let Some(v) = self.v_padding {
            cfg.v_padding = v;
        }
        if let Some(v) = self.num_padding {
            cfg.num_padding = v;
        }
        if let Some(v) = self.prefix {
            cfg.prefix = v;
        }
        if self.outline {
            cfg.outline.enabled = true;
        }
        if self.no_outline {
            cfg.outline.enabled = false;
        }
        if let Some(v) = self.outline_color {
            cfg.outline.color = v;
        }
        if let Some(v) = self.stroke_width {
            cfg.outline.stroke_width = v;
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
        Command::Annotate(args) => {
            if args.fonts.font_dirs.is_empty() {
                cmd_annotate(args, SystemFonts::new())
            } else {
                let dirs = FontDirs::new(args.fonts.font_dirs.clone());
                cmd_annotate(args, dirs)
            }
        }
        Command::Fonts(args) => {
            let names = if args.font_dirs.is_empty() {
                SystemFonts::new().font_names()
            } else {
                FontDirs::new(args.font_dirs).font_names()
            };
            for name in names {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>, style: StyleArgs) -> anyhow::Result<RenderConfig> {
    let mut cfg = match path {
        Some(path) => RenderConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => RenderConfig::default(),
    };
    style.apply(&mut cfg);
    Ok(cfg)
}

fn cmd_annotate<D: FontDiscovery>(args: AnnotateArgs, discovery: D) -> anyhow::Result<()> {
    let AnnotateArgs {
        inputs,
        out_dir,
        config,
        style,
        ..
    } = args;
    let cfg = load_config(config.as_deref(), style)?;
    let out_paths = output_paths(&out_dir, &inputs)?;

    let mut frames = Vec::with_capacity(inputs.len());
    for path in &inputs {
        let img = image::open(path)
            .with_context(|| format!("decode image '{}'", path.display()))?
            .to_rgb8();
        frames.push(img);
    }
    let batch = ImageBatch::from_rgb_images(&frames)?;

    let annotator = FrameAnnotator::with_discovery(discovery);
    let out = annotator.render(&batch, &cfg)?;

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;
    for (out_path, img) in out_paths.iter().zip(out.to_rgb_images()?) {
        img.save_with_format(out_path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", out_path.display()))?;
        eprintln!("wrote {}", out_path.display());
    }
    Ok(())
}

/// One output path per input; inputs sharing a file stem would overwrite each other.
fn output_paths(out_dir: &Path, inputs: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::with_capacity(inputs.len());
    for input in inputs {
        let path = output_path(out_dir, input);
        if !seen.insert(path.clone()) {
            anyhow::bail!(
                "input '{}' would overwrite '{}' (input file stems must be unique)",
                input.display(),
                path.display()
            );
        }
        out.push(path);
    }
    Ok(out)
}

fn output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_owned());
    out_dir.join(format!("{stem}.png"))
}
