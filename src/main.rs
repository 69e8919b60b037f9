// SPDX-License-Identifier: MIT
//
// chromalab — a color-theory workbench on the command line.
//
// This is the main binary that wires together the two library crates:
//
//   chroma-color  → hex parsing/formatting, RGB ⇄ HSL ⇄ HSV
//   chroma-theory → contrast, harmonies, rings, mixing, gradients, palettes
//
// Each invocation flows through:
//
//   argv → cli::parse_args → Invocation { options, command } → run → stdout
//
// Errors go to stderr with their context chain and exit status 1.

mod cli;

use std::fmt::Write as _;
use std::fs;
use std::process;

use anyhow::{Context, Result};
use chroma_color::{Hsl, Hsv, Rgb};
use chroma_theory::contrast::Compliance;
use chroma_theory::mix::{MixMode, mix, weight_from_slider};
use chroma_theory::palette::{extract_hex_colors, palettes_from_json, reference_swatches};
use chroma_theory::random::{ToneRange, Xorshift32};
use chroma_theory::rings::harmony_rings_with;
use chroma_theory::wheel::{MARKER_RADIUS, marker_position, pick_on_wheel};
use chroma_theory::{ContrastReport, Gradient, derive_harmonies};
use tracing_subscriber::EnvFilter;

use cli::{Command, Invocation, USAGE};

fn main() {
    init_logging();

    let invocation = match cli::parse_args(std::env::args().skip(1)) {
        Ok(inv) => inv,
        Err(err) => {
            eprintln!("chromalab: {err:#}");
            eprintln!("run `chromalab --help` for usage");
            process::exit(1);
        }
    };

    // `--set` queries and listings.
    for message in &invocation.messages {
        eprintln!("{message}");
    }

    match run(&invocation) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("chromalab: {err:#}");
            process::exit(1);
        }
    }
}

/// Logging goes to stderr, filtered by `CHROMALAB_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("CHROMALAB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Execute one command and return everything it prints.
fn run(inv: &Invocation) -> Result<String> {
    let opts = &inv.options;
    let hex = |c: Rgb| c.to_hex(opts.case);
    let mut out = String::new();

    tracing::debug!(command = ?inv.command, "running");

    match &inv.command {
        Command::Help => {
            out.push_str(USAGE);
            out.push('\n');
        }

        Command::Convert(color) => {
            let hsl = Hsl::from(*color);
            let hsv = Hsv::from(*color);
            let (r, g, b) = color.to_tuple();
            writeln!(out, "hex  {}", hex(*color))?;
            writeln!(out, "rgb  {r}, {g}, {b}")?;
            writeln!(out, "hsl  {:.0}°, {:.0}%, {:.0}%", hsl.h, hsl.s * 100.0, hsl.l * 100.0)?;
            writeln!(out, "hsv  {:.0}°, {:.0}%, {:.0}%", hsv.h, hsv.s * 100.0, hsv.v * 100.0)?;
        }

        Command::Harmony(base) => {
            for derived in derive_harmonies(*base).iter() {
                writeln!(out, "{:<16} {:>5.1}°  {}", derived.tag(), derived.hue, derived.hex(opts.case))?;
            }
        }

        Command::Rings(base) => {
            for ring in harmony_rings_with(*base, &opts.rings) {
                let colors: Vec<String> = ring.colors.iter().map(|c| hex(*c)).collect();
                writeln!(out, "{} ({}%): {}", ring.scheme.name(), ring.size, colors.join(" "))?;
                writeln!(out, "  {}", ring.conic_gradient())?;
            }
        }

        Command::Contrast { background, foreground } => {
            let report = ContrastReport::new(*background, *foreground, &opts.thresholds);
            writeln!(out, "{} on {}", hex(report.foreground), hex(report.background))?;
            writeln!(out, "ratio  {}", report.ratio_label())?;
            writeln!(out, "grade  {}", report.grade)?;
            for (check, label) in Compliance::checks() {
                let mark = if report.passes(check) { "pass" } else { "fail" };
                writeln!(out, "{label:<16} {mark}")?;
            }
        }

        Command::Mix { first, second, slider } => {
            let w = weight_from_slider(*slider);
            let add = mix(MixMode::Additive, *first, *second, w, &opts.mix);
            let sub = mix(MixMode::Subtractive, *first, *second, w, &opts.mix);
            writeln!(out, "weight       {w:.2}")?;
            writeln!(out, "additive     {}", hex(add))?;
            writeln!(out, "subtractive  {}", hex(sub))?;
        }

        Command::Gradient { kind, angle, stops } => {
            let gradient = Gradient::new(*kind, *angle, stops.iter().copied());
            writeln!(out, "{}", gradient.css_declaration())?;
        }

        Command::Wheel { dx, dy, keep } => {
            let picked = match keep {
                Some(current) => pick_on_wheel(*current, *dx, *dy, true),
                None => pick_on_wheel(Rgb::BLACK, *dx, *dy, false),
            };
            let hue = Hsl::from(picked).h;
            let (top, left) = marker_position(hue, MARKER_RADIUS);
            writeln!(out, "{}", hex(picked))?;
            writeln!(out, "marker  top {top:.1}%  left {left:.1}%")?;
        }

        Command::Random { seed, rings } => {
            let range = if *rings { ToneRange::RINGS } else { ToneRange::WHEEL };
            let color = Xorshift32::new(*seed).base_color(&range);
            writeln!(out, "{}", hex(color))?;
        }

        Command::Palettes(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let palettes = palettes_from_json(&json);
            if palettes.is_empty() {
                tracing::warn!(path = %path.display(), "no usable palettes");
            }
            for palette in palettes {
                let colors: Vec<String> = palette.rgb_colors().into_iter().map(hex).collect();
                writeln!(out, "{}: {}", palette.name, colors.join(" "))?;
                if !palette.description.is_empty() {
                    writeln!(out, "  {}", palette.description)?;
                }
            }
        }

        Command::Scan(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            for color in extract_hex_colors(&text) {
                writeln!(out, "{}", hex(color))?;
            }
        }

        Command::Swatches => {
            for color in reference_swatches() {
                writeln!(out, "{}", hex(color))?;
            }
        }
    }

    Ok(out)
}
