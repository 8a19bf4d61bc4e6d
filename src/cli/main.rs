#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cheapflow::algo::mcmf::successive_shortest_path::SuccessiveShortestPath;
use cheapflow::algo::mcmf::Augmentation;
use cheapflow::impls::default::DefaultSolver;
use cheapflow::report::{edge_flows, Report};
use cheapflow::{loader, EdgeFlow, Graph, Solver};
use clap::{Parser, ValueEnum};
use csv::Writer;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

type Amount = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Push the whole bottleneck of each path
    Bottleneck,
    /// Push one unit at a time, printing one line per unit
    UnitStep,
}

impl From<Mode> for Augmentation {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Bottleneck => Augmentation::Bottleneck,
            Mode::UnitStep => Augmentation::UnitStep,
        }
    }
}

/// Minimum-cost maximum-flow over edge-list files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input files (`N` followed by `u v capacity weight` quadruples)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Amount of flow pushed per augmenting path
    #[arg(short, long, value_enum, default_value_t = Mode::Bottleneck)]
    mode: Mode,

    /// Log level, logs go to stderr
    #[arg(short, long, default_value_t = LevelFilter::Warn)]
    verbosity: LevelFilter,

    /// Also write the final edge flows of every input to `<DIR>/<stem>.flows.csv`
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Verify the flow invariants after each run
    #[arg(short, long)]
    check: bool,
}

// Function to write the final edge flows
fn write_csv(flows: &[EdgeFlow<Amount>], filepath: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filepath)?;
    for flow in flows {
        wtr.serialize(flow)?;
    }
    wtr.flush()?;
    Ok(())
}

fn csv_path(dir: &Path, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    dir.join(format!("{stem}.flows.csv"))
}

fn solve_file(cli: &Cli, file: &Path) -> Result<(), Box<dyn Error>> {
    let mut graph: Graph<Amount> = loader::load_file(file)?;
    let mut solver = DefaultSolver::new(SuccessiveShortestPath::new(cli.mode.into()));

    let solution = solver.run(&mut graph)?;
    print!("{}", Report::new(&graph, &solution.paths));

    if cli.check {
        solver.check(&graph)?;
    }
    if let Some(dir) = &cli.output_dir {
        let path = csv_path(dir, file);
        write_csv(&edge_flows(&graph), &path)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();

    TermLogger::init(
        cli.verbosity,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    if let Some(dir) = &cli.output_dir {
        fs::create_dir_all(dir)?;
    }

    // a failing file never stops the ones after it
    let mut failed = 0;
    for file in &cli.files {
        if let Err(e) = solve_file(&cli, file) {
            log::error!("{}: {e}", file.display());
            failed += 1;
        }
    }

    if failed == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        log::error!("{failed} of {} files failed", cli.files.len());
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_bottleneck_mode() {
        let cli = Cli::try_parse_from(["cheapflow-cli", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(cli.mode, Mode::Bottleneck);
        assert_eq!(cli.verbosity, LevelFilter::Warn);
        assert!(!cli.check);
        assert!(cli.output_dir.is_none());
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "cheapflow-cli",
            "--mode",
            "unit-step",
            "-v",
            "debug",
            "-c",
            "-o",
            "out",
            "g.txt",
        ])
        .unwrap();
        assert_eq!(Augmentation::from(cli.mode), Augmentation::UnitStep);
        assert_eq!(cli.verbosity, LevelFilter::Debug);
        assert!(cli.check);
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn requires_a_file() {
        assert!(Cli::try_parse_from(["cheapflow-cli"]).is_err());
    }

    #[test]
    fn csv_named_after_input_stem() {
        assert_eq!(
            csv_path(Path::new("out"), Path::new("data/match3.txt")),
            PathBuf::from("out/match3.flows.csv")
        );
    }

    #[test]
    fn writes_edge_flows_csv() {
        let input = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/parallel.txt");
        let dir = std::env::temp_dir().join(format!("cheapflow-csv-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let args = [
            OsStr::new("cheapflow-cli"),
            OsStr::new("-c"),
            OsStr::new("-o"),
            dir.as_os_str(),
            input.as_os_str(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        solve_file(&cli, &input).unwrap();

        let written = fs::read_to_string(csv_path(&dir, &input)).unwrap();
        fs::remove_dir_all(&dir).unwrap();
        assert_eq!(
            written,
            "from,to,capacity,flow,cost\n0,1,2,2,1\n0,2,3,3,5\n1,3,2,2,1\n2,3,3,3,5\n"
        );
    }
}
