use spanlink::main_solve::{self, RunError};
use spanlink::{Config, EnablementLevel, Report};

#[derive(clap::Parser, Debug)]
/// spanlink: interval coverage and nearest-pair circuits.
struct Cli {
    /// Config file path (default: ~/.config/spanlink/spanlink.yml)
    #[arg(
        short,
        long,
        global = true,
        required = false,
        help = format!("Config file path (default: {:?})", spanlink::default_config_path())
    )]
    config: Option<std::path::PathBuf>,

    #[arg(long, value_enum, global = true, default_value_t)]
    color: EnablementLevel,

    /// Also print how long solving took.
    #[arg(long, global = true)]
    timing: bool,

    #[command(subcommand)]
    puzzle: Puzzle,
}

#[derive(clap::Subcommand, Debug)]
enum Puzzle {
    /// Count fresh ids and the total size of the merged ranges.
    Intervals {
        #[arg(default_value = "input.txt")]
        input: std::path::PathBuf,
    },
    /// Connect the closest junction boxes into circuits.
    Circuits {
        #[arg(default_value = "input.txt")]
        input: std::path::PathBuf,

        /// Connections to make before measuring circuits (overrides config).
        #[arg(short, long)]
        limit: Option<usize>,

        /// Which connections count toward --limit (overrides config).
        #[arg(long, value_enum)]
        counting: Option<spanlink::Counting>,

        /// How many of the largest circuits to multiply (overrides config).
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        top: Option<u16>,
    },
}

fn main() -> std::process::ExitCode {
    use clap::Parser;

    env_logger::init();

    let cli = Cli::parse();
    let report = Report {
        use_color: cli.color.resolve(),
        timing: cli.timing,
    };
    match run(&cli, &report) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

/// Prints every answer it can. Puzzles that could not be answered are
/// reported on stderr and turn the exit code into a failure.
fn run(cli: &Cli, report: &Report) -> Result<std::process::ExitCode, RunError> {
    let start = std::time::Instant::now();
    let results: Vec<Result<String, RunError>> = match &cli.puzzle {
        Puzzle::Intervals { input } => {
            let answers = main_solve::run_intervals(input)?;
            vec![
                Ok(answers.covered_ids.to_string()),
                Ok(answers.covered_total.to_string()),
            ]
        }
        Puzzle::Circuits {
            input,
            limit,
            counting,
            top,
        } => {
            let mut config = Config::load(cli.config.as_deref())?;
            if let Some(limit) = limit {
                config.budget.limit = *limit;
            }
            if let Some(counting) = counting {
                config.budget.counting = *counting;
            }
            if let Some(top) = top {
                config.top_components = usize::from(*top);
            }
            let answers = main_solve::run_circuits(input, &config)?;
            vec![
                answers
                    .largest_product
                    .map(|product| product.to_string())
                    .map_err(RunError::from),
                answers
                    .bridging_product
                    .map(|product| product.to_string())
                    .map_err(RunError::from),
            ]
        }
    };

    let mut stdout = std::io::stdout();
    let mut written: std::io::Result<()> = Ok(());
    let mut exit_code = std::process::ExitCode::SUCCESS;
    for (index, result) in results.iter().enumerate() {
        match result {
            Ok(answer) => {
                written =
                    written.and_then(|_| report.write_answer(&mut stdout, index + 1, answer));
            }
            Err(e) => {
                eprintln!("Puzzle {}: {}", index + 1, e);
                exit_code = std::process::ExitCode::FAILURE;
            }
        }
    }
    // stdout going away isn't worth an error exit
    if let Err(e) = written.and_then(|_| report.write_duration(&mut stdout, start.elapsed())) {
        log::warn!("could not write results: {}", e);
    }
    Ok(exit_code)
}
