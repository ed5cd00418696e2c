//! Chiller / heat-pump seasonal simulator entry point.

use std::path::{Path, PathBuf};
use std::process;

use chiller_sim::config::ScenarioConfig;
use chiller_sim::io::export::{export_hourly_csv, export_load_csv};
use chiller_sim::logging;
use chiller_sim::reporting::print_load_summary;
use chiller_sim::runner::run_scenario;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    seed_override: Option<u64>,
    weather_file: Option<String>,
    load_file: Option<String>,
    hourly_out: Option<String>,
    load_out: Option<String>,
    verbose: bool,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("chiller-sim: annual energy performance of a chiller or heat pump");
    eprintln!();
    eprintln!("Usage: chiller-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!(
        "  --preset <name>          Use a built-in preset ({})",
        ScenarioConfig::PRESETS.join(", ")
    );
    eprintln!("  --seed <u64>             Override weather seed");
    eprintln!("  --weather-file <path>    Read hourly weather instead of synthesizing it");
    eprintln!("  --load-file <path>       Read hourly load CSV instead of synthesizing it");
    eprintln!("  --hourly-out <path>      Export hourly results to CSV");
    eprintln!("  --load-out <path>        Export the load series to CSV");
    eprintln!("  --verbose                Log debug details to stderr");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server after simulation");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the office_chiller preset is used.");
}

fn value_of(args: &[String], i: usize, flag: &str, what: &str) -> String {
    match args.get(i) {
        Some(v) => v.clone(),
        None => {
            eprintln!("error: {flag} requires {what}");
            process::exit(1);
        }
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        seed_override: None,
        weather_file: None,
        load_file: None,
        hourly_out: None,
        load_out: None,
        verbose: false,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                cli.scenario_path = Some(value_of(&args, i, "--scenario", "a path argument"));
            }
            "--preset" => {
                i += 1;
                cli.preset = Some(value_of(&args, i, "--preset", "a name argument"));
            }
            "--seed" => {
                i += 1;
                let raw = value_of(&args, i, "--seed", "a u64 argument");
                if let Ok(s) = raw.parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{raw}\" is not a valid u64");
                    process::exit(1);
                }
            }
            "--weather-file" => {
                i += 1;
                cli.weather_file = Some(value_of(&args, i, "--weather-file", "a path argument"));
            }
            "--load-file" => {
                i += 1;
                cli.load_file = Some(value_of(&args, i, "--load-file", "a path argument"));
            }
            "--hourly-out" => {
                i += 1;
                cli.hourly_out = Some(value_of(&args, i, "--hourly-out", "a path argument"));
            }
            "--load-out" => {
                i += 1;
                cli.load_out = Some(value_of(&args, i, "--load-out", "a path argument"));
            }
            "--verbose" | "-v" => {
                cli.verbose = true;
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                let raw = value_of(&args, i, "--port", "a u16 argument");
                if let Ok(p) = raw.parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{raw}\" is not a valid u16");
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();
    logging::init(logging::level_for(cli.verbose));

    // Load config: --scenario takes priority, then --preset, then baseline default
    let (label, loaded) = if let Some(ref path) = cli.scenario_path {
        (path.clone(), ScenarioConfig::from_toml_file(Path::new(path)))
    } else if let Some(ref name) = cli.preset {
        (name.clone(), ScenarioConfig::from_preset(name))
    } else {
        ("office_chiller".to_string(), Ok(ScenarioConfig::baseline()))
    };
    let mut scenario = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    // Apply overrides
    if let Some(seed) = cli.seed_override {
        scenario.simulation.seed = seed;
    }
    if let Some(ref path) = cli.weather_file {
        scenario.climate.weather_file = Some(PathBuf::from(path));
    }
    if let Some(ref path) = cli.load_file {
        scenario.load.load_file = Some(PathBuf::from(path));
    }

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let run = match run_scenario(&scenario) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    println!("Scenario: {label}");
    print_load_summary(&run.statistics.load);
    println!("\n{}", run.statistics.report);
    println!("\n{}", run.statistics.monthly_table());

    if let Some(ref path) = cli.hourly_out {
        if let Err(e) = export_hourly_csv(&run.result.hourly, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Hourly results written to {path}");
    }
    if let Some(ref path) = cli.load_out {
        if let Err(e) = export_load_csv(&run.inputs.load, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Load series written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(chiller_sim::api::AppState {
            scenario: label,
            sample_stride_hours: run.inputs.sample_stride_hours,
            climate: run.inputs.climate,
            result: run.result,
            statistics: run.statistics,
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        if let Err(e) = rt.block_on(chiller_sim::api::serve(state, addr)) {
            eprintln!("error: API server failed: {e}");
            process::exit(1);
        }
    }
}
