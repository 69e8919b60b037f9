// SPDX-License-Identifier: MIT
//
// Command-line parsing for chromalab.
//
// Arguments are parsed into an `Invocation` (options + one `Command`)
// before anything runs, so a typo never produces partial output.
//
// | Command                                   | Action                          |
// |-------------------------------------------|---------------------------------|
// | `convert <hex>`                           | RGB / HSL / HSV readout         |
// | `harmony <hex>`                           | Eight harmony swatches          |
// | `rings <hex>`                             | Six concentric ring gradients   |
// | `contrast <bg> <fg>`                      | WCAG ratio, grade and checks    |
// | `mix <c1> <c2> [slider]`                  | Additive and subtractive blends |
// | `gradient <kind> <angle> <hex[@pos]>...`  | Gradient CSS declaration        |
// | `wheel <dx> <dy> [--keep <hex>]`          | Pick a base color on the wheel  |
// | `random [seed] [--rings]`                 | Seeded random base color        |
// | `palettes <file>`                         | Decode a palette JSON document  |
// | `scan <file>`                             | Extract hex colors from text    |
// | `swatches`                                | Reference swatches              |
//
// Global flags: `--set <directive>` (repeatable), `-h`/`--help`.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use chroma_color::Rgb;
use chroma_theory::GradientKind;
use chroma_theory::options::{Options, parse_set};

/// A parsed command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Convert(Rgb),
    Harmony(Rgb),
    Rings(Rgb),
    Contrast {
        background: Rgb,
        foreground: Rgb,
    },
    Mix {
        first: Rgb,
        second: Rgb,
        /// Mixer slider, 0 = all `first`, 100 = all `second`.
        slider: f64,
    },
    Gradient {
        kind: GradientKind,
        angle: f64,
        stops: Vec<(Rgb, f64)>,
    },
    Wheel {
        dx: f64,
        dy: f64,
        /// Keep this color's saturation and lightness.
        keep: Option<Rgb>,
    },
    Random {
        seed: u32,
        rings: bool,
    },
    Palettes(PathBuf),
    Scan(PathBuf),
    Swatches,
    Help,
}

/// Everything needed to run once.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub options: Options,
    pub command: Command,
    /// Answers to `--set` queries and listings, in order.
    pub messages: Vec<String>,
}

pub const USAGE: &str = "\
usage: chromalab [--set <option>]... <command> [args]

commands:
  convert <hex>                          RGB / HSL / HSV readout
  harmony <hex>                          harmony swatches around a base color
  rings <hex>                            concentric harmony ring gradients
  contrast <background> <foreground>     WCAG contrast ratio and checks
  mix <hex1> <hex2> [slider 0-100]       additive and subtractive blends
  gradient <linear|radial|conic> <angle> <hex[@pos]>...
  wheel <dx> <dy> [--keep <hex>]         pick a color from the wheel
  random [seed] [--rings]                seeded random base color
  palettes <file.json>                   decode a palette document
  scan <file>                            extract hex colors from text
  swatches                               reference swatches

options (see --set all):
  uppercase/uc  gamma/gm  saturationfloor/sf  lightnessmin/lmin
  lightnessmax/lmax  aaanormal/aaa  aanormal/aa  aalarge/aal

logging: CHROMALAB_LOG=debug";

/// Parse `args` (without the program name).
///
/// # Errors
///
/// Fails on unknown commands, missing or malformed arguments, and invalid
/// `--set` directives.
pub fn parse_args<I, S>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = Options::default();
    let mut messages = Vec::new();
    let mut rest = Vec::new();

    let mut iter = args.into_iter().map(Into::into);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--set" | "-s" => {
                let directive = iter.next().ok_or_else(|| anyhow!("--set needs a value"))?;
                for d in parse_set(&directive) {
                    let reply = options
                        .apply(&d)
                        .with_context(|| format!("--set {directive}"))?;
                    messages.extend(reply);
                }
            }
            "-h" | "--help" => {
                return Ok(Invocation {
                    options,
                    command: Command::Help,
                    messages,
                });
            }
            _ => rest.push(arg),
        }
    }

    let command = parse_command(&rest)?;
    Ok(Invocation {
        options,
        command,
        messages,
    })
}

fn parse_command(args: &[String]) -> Result<Command> {
    let Some((name, args)) = args.split_first() else {
        return Ok(Command::Help);
    };

    let command = match name.as_str() {
        "convert" => Command::Convert(color(args, 0)?),
        "harmony" => Command::Harmony(color(args, 0)?),
        "rings" => Command::Rings(color(args, 0)?),
        "contrast" => Command::Contrast {
            background: color(args, 0)?,
            foreground: color(args, 1)?,
        },
        "mix" => Command::Mix {
            first: color(args, 0)?,
            second: color(args, 1)?,
            slider: args.get(2).map_or(Ok(50.0), |s| number(s, "slider"))?,
        },
        "gradient" => parse_gradient(args)?,
        "wheel" => parse_wheel(args)?,
        "random" => parse_random(args)?,
        "palettes" => Command::Palettes(path(args)?),
        "scan" => Command::Scan(path(args)?),
        "swatches" => Command::Swatches,
        "help" => Command::Help,
        other => bail!("unknown command: {other}"),
    };
    Ok(command)
}

fn parse_gradient(args: &[String]) -> Result<Command> {
    let kind: GradientKind = args
        .first()
        .ok_or_else(|| anyhow!("gradient needs a kind"))?
        .parse()?;
    let angle = number(args.get(1).ok_or_else(|| anyhow!("gradient needs an angle"))?, "angle")?;
    let specs = &args[2..];
    if specs.len() < 2 {
        bail!("gradient needs at least two stops");
    }

    #[allow(clippy::cast_precision_loss)]
    let last = (specs.len() - 1) as f64;
    let stops = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            #[allow(clippy::cast_precision_loss)]
            let even = i as f64 * 100.0 / last;
            match spec.split_once('@') {
                Some((hex, pos)) => Ok((parse_color(hex)?, number(pos, "stop position")?)),
                None => Ok((parse_color(spec)?, even)),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Command::Gradient { kind, angle, stops })
}

fn parse_wheel(args: &[String]) -> Result<Command> {
    let dx = number(args.first().ok_or_else(|| anyhow!("wheel needs dx and dy"))?, "dx")?;
    let dy = number(args.get(1).ok_or_else(|| anyhow!("wheel needs dx and dy"))?, "dy")?;
    let keep = match args.get(2).map(String::as_str) {
        Some("--keep") => Some(color(args, 3)?),
        Some(other) => bail!("unexpected argument: {other}"),
        None => None,
    };
    Ok(Command::Wheel { dx, dy, keep })
}

fn parse_random(args: &[String]) -> Result<Command> {
    let mut seed = 1;
    let mut rings = false;
    for arg in args {
        if arg == "--rings" {
            rings = true;
        } else {
            seed = arg.parse().with_context(|| format!("invalid seed: {arg}"))?;
        }
    }
    Ok(Command::Random { seed, rings })
}

fn color(args: &[String], index: usize) -> Result<Rgb> {
    let raw = args
        .get(index)
        .ok_or_else(|| anyhow!("missing color argument {}", index + 1))?;
    parse_color(raw)
}

fn parse_color(raw: &str) -> Result<Rgb> {
    // Shells eat unquoted `#`, so a bare `rrggbb` is accepted here.
    if raw.starts_with('#') {
        Ok(raw.parse()?)
    } else {
        Ok(format!("#{raw}").parse()?)
    }
}

fn number(raw: &str, what: &str) -> Result<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| anyhow!("invalid {what}: {raw}"))
}

fn path(args: &[String]) -> Result<PathBuf> {
    args.first()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("missing file argument"))
}
