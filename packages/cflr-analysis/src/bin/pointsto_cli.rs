/*
 * Whole-Program Points-to Analysis CLI
 *
 * Reads a pointer assignment graph (JSON statement lists), saturates it
 * under the CFL-reachability grammar, and dumps the points-to relation.
 *
 * Usage:
 *   pointsto_cli <pag.json>
 *   pointsto_cli <pag.json> --format json
 *   pointsto_cli <pag.json> --stats
 *
 * Output formats:
 *   --format text    One sorted line per pointer (default)
 *   --format json    JSON report (for downstream tooling)
 */

use std::path::PathBuf;
use std::process::ExitCode;

use cflr_analysis::errors::CflrError;
use cflr_analysis::features::cfl_reachability::application::{PagInput, PointsToAnalyzer};

/// CLI arguments
struct Args {
    /// PAG input file
    input: PathBuf,

    /// Output format
    format: OutputFormat,

    /// Print solver statistics to stderr
    stats: bool,
}

#[derive(Clone, Copy, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

impl Args {
    fn parse() -> Result<Self, CflrError> {
        let args: Vec<String> = std::env::args().collect();

        let mut input: Option<PathBuf> = None;
        let mut format = OutputFormat::Text;
        let mut stats = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--format" | "-f" => {
                    i += 1;
                    match args.get(i).map(|s| s.as_str()) {
                        Some("text") => format = OutputFormat::Text,
                        Some("json") => format = OutputFormat::Json,
                        other => {
                            return Err(CflrError::config(format!(
                                "unknown format: {}",
                                other.unwrap_or("<missing>")
                            )))
                        }
                    }
                }
                "--stats" | "-s" => stats = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                flag if flag.starts_with('-') => {
                    return Err(CflrError::config(format!("unknown flag: {flag}")));
                }
                path => {
                    if input.is_some() {
                        return Err(CflrError::config("multiple input files given"));
                    }
                    input = Some(PathBuf::from(path));
                }
            }
            i += 1;
        }

        let input = input.ok_or_else(|| CflrError::config("missing input file"))?;
        Ok(Self {
            input,
            format,
            stats,
        })
    }
}

fn print_usage() {
    eprintln!("Usage: pointsto_cli <pag.json> [--format text|json] [--stats]");
}

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    let pag = match PagInput::from_path(&args.input) {
        Ok(pag) => pag,
        Err(e) => {
            eprintln!("error: failed to load {}: {e}", args.input.display());
            return ExitCode::FAILURE;
        }
    };

    let mut analyzer = PointsToAnalyzer::default();
    pag.apply_to(&mut analyzer);
    let result = analyzer.solve();

    match args.format {
        OutputFormat::Text => print!("{}", analyzer.dump_result()),
        OutputFormat::Json => match analyzer.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    if args.stats {
        let s = &result.stats;
        eprintln!(
            "statements: {}, variables: {}, initial edges: {}, derived edges: {}, \
             points-to pairs: {}, pops: {}, {:.2}ms",
            pag.statement_count(),
            s.variables,
            s.edges_initial,
            s.edges_derived,
            s.points_to_edges,
            s.pops,
            s.duration_ms
        );
    }

    ExitCode::SUCCESS
}
