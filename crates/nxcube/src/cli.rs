use std::fmt;
use std::path::PathBuf;

use eyre::{Context, Result};
use nxcube_core::{
    BorderSpin, ColorKey, CubeModel, Face, HistoricBlock, HistoricalCube, PerFace, ScrambleParams,
    ScrambleType, ScrambledCube, Twist,
};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::settings::{OutputFormat, Settings};

/// N×N×N cube simulator
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub(crate) struct Args {
    /// Settings file (YAML) to layer over the built-in defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// Log more details. Repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Build a cube, scramble it and twist it, then print it.
    Show {
        #[command(flatten)]
        cube: CubeArgs,
        /// Number of random twists to scramble with. 0 for none.
        #[arg(short, long)]
        scramble: Option<u32>,
        /// Scramble seed. Without `--scramble`, applies a full scramble.
        #[arg(long)]
        seed: Option<String>,
        /// Twists to apply after scrambling (such as `x0 y2' z1*2`).
        #[arg(short, long)]
        twists: Option<String>,
    },
    /// Apply a twist sequence followed by its inverse and report whether the
    /// cube returned to its starting state.
    Check {
        #[command(flatten)]
        cube: CubeArgs,
        /// Twists to apply (such as `x0 y2' z1*2`).
        twists: String,
    },
}

/// Options that override settings.
#[derive(clap::Args, Debug, Default)]
pub(crate) struct CubeArgs {
    /// Number of blocks along each edge of the cube.
    #[arg(short = 'n', long)]
    pub dimension: Option<usize>,
    /// How the face beside an outer slice spins (`match_slice` or
    /// `always_clockwise`).
    #[arg(long)]
    pub border_spin: Option<BorderSpin>,
    /// Output format.
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

impl CubeArgs {
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(dimension) = self.dimension {
            settings.dimension = dimension;
        }
        if let Some(border_spin) = self.border_spin {
            settings.border_spin = border_spin;
        }
        if let Some(output) = self.output {
            settings.output = output;
        }
    }
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let mut settings = Settings::load(args.config.as_deref())?;

    match args.subcommand {
        Subcommand::Show {
            cube,
            scramble,
            seed,
            twists,
        } => {
            cube.apply_to(&mut settings);
            if let Some(scramble_length) = scramble {
                settings.scramble_length = scramble_length;
            }
            let twists = parse_notation(twists.as_deref().unwrap_or(""))?;
            let params = scramble_params(settings.scramble_length, seed);
            let (cube, scramble) = show(&settings, params, &twists)?;
            write_output(settings.output, &ShowReport::new(&cube, scramble, &twists))
        }

        Subcommand::Check { cube, twists } => {
            cube.apply_to(&mut settings);
            let twists = parse_notation(&twists)?;
            let report = check(&settings, &twists)?;
            write_output(settings.output, &report)
        }
    }
}

fn parse_notation(s: &str) -> Result<Vec<Twist>> {
    nxcube_notation::parse_twists(s).with_context(|| format!("invalid twist notation {s:?}"))
}

/// Returns the scramble to apply, if any.
///
/// A seed with no length means a full scramble.
fn scramble_params(length: u32, seed: Option<String>) -> Option<ScrambleParams> {
    let ty = match (length, &seed) {
        (0, None) => return None,
        (0, Some(_)) => ScrambleType::Full,
        (n, _) => ScrambleType::Partial(n),
    };
    Some(match seed {
        Some(seed) => ScrambleParams::with_seed(ty, seed),
        None => ScrambleParams::new(ty),
    })
}

fn show(
    settings: &Settings,
    scramble_params: Option<ScrambleParams>,
    twists: &[Twist],
) -> Result<(HistoricalCube, Option<ScrambledCube>)> {
    let mut cube = HistoricalCube::with_border_spin(settings.dimension, settings.border_spin)?;
    let scramble = scramble_params
        .map(|params| cube.scramble(params))
        .transpose()
        .context("error scrambling cube")?;
    cube.twist_all(twists.iter().copied())
        .context("error applying twists")?;
    Ok((cube, scramble))
}

fn check(settings: &Settings, twists: &[Twist]) -> Result<CheckReport> {
    let initial = CubeModel::with_border_spin(settings.dimension, settings.border_spin)?;
    let mut cube = initial.clone();
    cube.twist_all(twists.iter().copied())
        .context("error applying twists")?;
    let solved_after_twists = cube.is_solved();

    let inverse = nxcube_notation::invert_twists(twists);
    cube.twist_all(inverse.iter().copied())
        .context("error applying inverse twists")?;
    log::info!("checked {} twists", twists.len());

    Ok(CheckReport {
        twists: nxcube_notation::format_twists(twists),
        inverse: nxcube_notation::format_twists(&inverse),
        solved_after_twists,
        solved: cube.is_solved(),
        restored: cube == initial,
    })
}

#[derive(Serialize, Debug)]
struct ShowReport<'a> {
    dimension: usize,
    border_spin: BorderSpin,
    scramble: Option<ScrambledCube>,
    twists: String,
    solved: bool,
    faces: &'a PerFace<Face>,
    historic_faces: &'a PerFace<Vec<HistoricBlock>>,
    #[serde(skip)]
    cube: &'a CubeModel,
}

impl<'a> ShowReport<'a> {
    fn new(cube: &'a HistoricalCube, scramble: Option<ScrambledCube>, twists: &[Twist]) -> Self {
        Self {
            dimension: cube.dimension(),
            border_spin: cube.cube().border_spin(),
            scramble,
            twists: nxcube_notation::format_twists(twists),
            solved: cube.is_solved(),
            faces: cube.faces(),
            historic_faces: cube.historic_faces(),
            cube: cube.cube(),
        }
    }
}

impl fmt::Display for ShowReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scramble) = &self.scramble {
            writeln!(
                f,
                "scramble (seed {:?}): {}",
                scramble.params.seed,
                nxcube_notation::format_twists(&scramble.twists),
            )?;
        }
        if !self.twists.is_empty() {
            writeln!(f, "twists: {}", self.twists)?;
        }
        writeln!(f, "{}", self.cube)?;
        for key in ColorKey::iter() {
            writeln!(f, "{key} = {} ({})", key.color_name(), key.hex_code())?;
        }
        write!(f, "solved: {}", self.solved)
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
struct CheckReport {
    twists: String,
    inverse: String,
    /// Whether the cube was solved after the twists, before the inverse.
    solved_after_twists: bool,
    /// Whether the cube is solved after the inverse.
    solved: bool,
    /// Whether every block returned to its exact starting position.
    restored: bool,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "twists:  {}", self.twists)?;
        writeln!(f, "inverse: {}", self.inverse)?;
        writeln!(f, "solved after twists: {}", self.solved_after_twists)?;
        writeln!(f, "solved after inverse: {}", self.solved)?;
        write!(f, "restored: {}", self.restored)
    }
}

fn write_output<T: Serialize + fmt::Display>(format: OutputFormat, value: &T) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{value}"),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(std::io::stdout(), value)
                .context("error serializing data and writing to stdout")?;
            println!();
        }
        OutputFormat::Yaml => {
            serde_norway::to_writer(std::io::stdout(), value)
                .context("error serializing data and writing to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    fn settings(dimension: usize, border_spin: BorderSpin) -> Settings {
        Settings {
            dimension,
            border_spin,
            scramble_length: 0,
            output: OutputFormat::Text,
        }
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from([
            "nxcube", "-vv", "show", "-n", "4", "--border-spin", "always_clockwise", "--seed",
            "abc", "-t", "x0 y1'",
        ]);
        assert_eq!(args.verbose, 2);
        let Subcommand::Show {
            cube, seed, twists, ..
        } = args.subcommand
        else {
            panic!("expected show subcommand");
        };
        let mut s = settings(3, BorderSpin::MatchSlice);
        cube.apply_to(&mut s);
        assert_eq!(s, settings(4, BorderSpin::AlwaysClockwise));
        assert_eq!(seed.as_deref(), Some("abc"));
        assert_eq!(twists.as_deref(), Some("x0 y1'"));
    }

    #[test]
    fn test_scramble_params() {
        assert_eq!(scramble_params(0, None), None);
        assert_eq!(
            scramble_params(0, Some("s".to_owned())),
            Some(ScrambleParams::with_seed(ScrambleType::Full, "s")),
        );
        assert_eq!(
            scramble_params(12, Some("s".to_owned())),
            Some(ScrambleParams::with_seed(ScrambleType::Partial(12), "s")),
        );
        assert_eq!(scramble_params(5, None).map(|p| p.ty), Some(ScrambleType::Partial(5)));
    }

    #[test]
    fn test_show() {
        let params = ScrambleParams::with_seed(ScrambleType::Partial(10), "seed");
        let twists = parse_notation("x0 x0'").unwrap();
        let (cube, scramble) =
            show(&settings(3, BorderSpin::MatchSlice), Some(params.clone()), &twists).unwrap();
        let scramble = scramble.unwrap();
        assert_eq!(scramble.twists, params.twists(3));

        let mut expected = CubeModel::new(3).unwrap();
        expected.twist_all(scramble.twists).unwrap();
        assert_eq!(cube.cube(), &expected);

        assert!(show(&settings(2, BorderSpin::MatchSlice), None, &twists).is_ok());
        let bad = parse_notation("y2").unwrap();
        assert!(show(&settings(2, BorderSpin::MatchSlice), None, &bad).is_err());
        assert!(parse_notation("y2 q").is_err());
        assert!(parse_notation(&format!("x0*{}", usize::MAX)).is_err());
    }

    #[test]
    fn test_check() {
        let twists = parse_notation("x0 y1' z2*2").unwrap();
        let report = check(&settings(3, BorderSpin::MatchSlice), &twists).unwrap();
        assert_eq!(
            report,
            CheckReport {
                twists: "x0 y1' z2 z2".to_owned(),
                inverse: "z2' z2' y1 x0'".to_owned(),
                solved_after_twists: false,
                solved: true,
                restored: true,
            },
        );

        let twists = parse_notation("x0").unwrap();
        let report = check(&settings(3, BorderSpin::AlwaysClockwise), &twists).unwrap();
        assert!(report.solved);
        assert!(!report.restored);
    }

    #[test]
    fn test_show_report_text() {
        let twists = parse_notation("y0").unwrap();
        let (cube, scramble) = show(&settings(2, BorderSpin::MatchSlice), None, &twists).unwrap();
        let report = ShowReport::new(&cube, scramble, &twists);
        let text = report.to_string();
        assert!(text.starts_with("twists: y0\nCube :\n"));
        assert!(text.contains("\tfront = {\n\t\tkey2 key2\n\t\tkey3 key3\n\t}"));
        assert!(text.contains("key4 = orange (#ff5800)\n"));
        assert!(text.ends_with("solved: false"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["dimension"], 2);
        assert_eq!(json["scramble"], serde_json::Value::Null);
        assert_eq!(json["faces"]["front"]["blocks"][0]["value"], "key2");
        assert_eq!(json["historic_faces"]["front"][0]["old_position"]["face"], "left");
    }
}
