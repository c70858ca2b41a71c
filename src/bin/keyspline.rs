use std::io::Write as _;
use std::str::FromStr;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "keyspline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a keyframe animation and print sampled frames as JSON lines.
    Sample(SampleArgs),
    /// Print how a wrap mode maps a range of indices onto a sequence.
    Wrap(WrapArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Keyframe as `X,Y[,ROT[,SX,SY]][@DURATION]`; repeat for each keyframe.
    ///
    /// Keyframes without `@DURATION` are filled in from `--total`.
    #[arg(long = "key", required = true, allow_hyphen_values = true)]
    keys: Vec<KeyArg>,

    /// Total seconds for one pass.
    #[arg(long)]
    total: Option<f64>,

    /// Add a closing span from the last keyframe back to the first.
    #[arg(long, default_value_t = false)]
    circular: bool,

    #[arg(long, value_enum, default_value_t = InterpArg::Smooth)]
    interp: InterpArg,

    /// Time wrap applied past either end of the animation.
    #[arg(long, value_enum, default_value_t = WrapArg::Clamp)]
    time_wrap: WrapArg,

    /// Index wrap override (default: wrap when circular, clamp otherwise).
    #[arg(long, value_enum)]
    index_wrap: Option<WrapArg>,

    /// Frames per second.
    #[arg(long, default_value_t = 10.0)]
    fps: f64,

    /// Seconds to sample (default: one pass).
    #[arg(long)]
    seconds: Option<f64>,

    /// Also print the affine coefficients of each frame.
    #[arg(long, default_value_t = false)]
    affine: bool,
}

#[derive(Parser, Debug)]
struct WrapArgs {
    /// Sequence length.
    #[arg(long)]
    len: usize,

    /// First index (inclusive).
    #[arg(long, allow_hyphen_values = true)]
    from: i32,

    /// Last index (inclusive).
    #[arg(long, allow_hyphen_values = true)]
    to: i32,

    /// Only print this mode (default: all modes).
    #[arg(long, value_enum)]
    mode: Option<WrapArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum WrapArg {
    Clamp,
    Wrap,
    Reflect,
}

impl From<WrapArg> for keyspline::IndexWrapMode {
    fn from(v: WrapArg) -> Self {
        match v {
            WrapArg::Clamp => Self::Clamp,
            WrapArg::Wrap => Self::Wrap,
            WrapArg::Reflect => Self::Reflect,
        }
    }
}

impl From<WrapArg> for keyspline::TimeWrapMode {
    fn from(v: WrapArg) -> Self {
        match v {
            WrapArg::Clamp => Self::Clamp,
            WrapArg::Wrap => Self::Wrap,
            WrapArg::Reflect => Self::Reflect,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InterpArg {
    Straight,
    Smooth,
}

impl From<InterpArg> for keyspline::InterpolationKind {
    fn from(v: InterpArg) -> Self {
        match v {
            InterpArg::Straight => Self::Straight,
            InterpArg::Smooth => Self::Smooth,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct KeyArg {
    orientation: keyspline::Orientation,
    duration: Option<f64>,
}

impl FromStr for KeyArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (fields, duration) = match s.split_once('@') {
            Some((fields, d)) => {
                let d = d
                    .trim()
                    .parse::<f64>()
                    .with_context(|| format!("parse duration '{d}'"))?;
                (fields, Some(d))
            }
            None => (s, None),
        };
        let nums = fields
            .split(',')
            .map(|v| {
                v.trim()
                    .parse::<f64>()
                    .with_context(|| format!("parse number '{v}'"))
            })
            .collect::<anyhow::Result<Vec<f64>>>()?;

        let mut orientation = keyspline::Orientation::default();
        match nums.as_slice() {
            [x, y] => orientation.position = keyspline::Vec2::new(*x, *y),
            [x, y, rot] => {
                orientation.position = keyspline::Vec2::new(*x, *y);
                orientation.rotation = *rot;
            }
            [x, y, rot, sx, sy] => {
                orientation.position = keyspline::Vec2::new(*x, *y);
                orientation.rotation = *rot;
                orientation.scale = keyspline::Vec2::new(*sx, *sy);
            }
            _ => anyhow::bail!("expected X,Y[,ROT[,SX,SY]] but got {} numbers", nums.len()),
        }
        Ok(Self {
            orientation,
            duration,
        })
    }
}

#[derive(serde::Serialize)]
struct FrameLine {
    frame: u64,
    time: f64,
    orientation: keyspline::Orientation,
    #[serde(skip_serializing_if = "Option::is_none")]
    affine: Option<[f64; 6]>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Wrap(args) => cmd_wrap(args),
    }
}

fn build_animation(args: &SampleArgs) -> anyhow::Result<keyspline::KeyframeAnimation> {
    let mut builder = keyspline::KeyframeAnimation::builder()
        .set_interpolation(args.interp.into())
        .set_circular(args.circular);
    if let Some(total) = args.total {
        builder = builder.set_total_duration(total);
    }
    for key in &args.keys {
        builder = builder
            .set_orientation(key.orientation)
            .add_keyframe(key.duration.unwrap_or(0.0));
    }
    Ok(builder.build()?)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    use keyspline::Animation as _;

    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be a positive number (got {})", args.fps);
    }
    let mut anim = build_animation(&args).context("build animation")?;
    anim.set_time_wrap(args.time_wrap.into());
    if let Some(mode) = args.index_wrap {
        anim.set_index_wrap(mode.into());
    }

    let seconds = args.seconds.unwrap_or_else(|| anim.duration());
    if !(seconds.is_finite() && seconds >= 0.0) {
        anyhow::bail!("--seconds must be a non-negative number (got {seconds})");
    }
    let frames = (seconds * args.fps).floor() as u64;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for frame in 0..=frames {
        let time = frame as f64 / args.fps;
        let orientation = anim
            .sample(time)
            .with_context(|| format!("sample frame {frame} at {time}s"))?;
        let line = FrameLine {
            frame,
            time,
            orientation,
            affine: args.affine.then(|| orientation.to_affine().as_coeffs()),
        };
        serde_json::to_writer(&mut out, &line).context("serialize frame")?;
        writeln!(out).context("write stdout")?;
    }
    Ok(())
}

fn cmd_wrap(args: WrapArgs) -> anyhow::Result<()> {
    if args.len == 0 {
        anyhow::bail!("--len must be at least 1");
    }
    if args.from > args.to {
        anyhow::bail!("--from ({}) must not exceed --to ({})", args.from, args.to);
    }
    let modes: Vec<WrapArg> = match args.mode {
        Some(mode) => vec![mode],
        None => vec![WrapArg::Clamp, WrapArg::Wrap, WrapArg::Reflect],
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let header: Vec<String> = modes
        .iter()
        .map(|m| format!("{m:?}").to_lowercase())
        .collect();
    writeln!(out, "index\t{}", header.join("\t")).context("write stdout")?;
    for index in args.from..=args.to {
        let mapped: Vec<String> = modes
            .iter()
            .map(|m| keyspline::IndexWrapMode::from(*m).handle(index, args.len).to_string())
            .collect();
        writeln!(out, "{index}\t{}", mapped.join("\t")).context("write stdout")?;
    }
    Ok(())
}
