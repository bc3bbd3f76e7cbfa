//! thr-spiro - spirograph patterns for polar sand tables
//!
//! Usage:
//!   thr-spiro presets                    List built-in presets
//!   thr-spiro preset <name> [-o NAME]    Generate a preset as a .thr file
//!   thr-spiro custom <curve> [params]    Generate a custom curve
//!   thr-spiro request <file|->           Run a JSON request
//!   thr-spiro inspect <file.thr>         Summarize a .thr file

use std::env;

use tracing_subscriber::EnvFilter;

mod cli;

use cli::{cmd_custom, cmd_inspect, cmd_preset, cmd_presets, cmd_request};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "thr_spiro=info";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("thr-spiro");

    let (config_path, rest) = match cli::common::take_config_flag(args.get(1..).unwrap_or(&[])) {
        Ok(split) => split,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let Some(command) = rest.first() else {
        print_usage(prog);
        std::process::exit(1);
    };

    let result = match command.as_str() {
        "presets" => cmd_presets(&rest[1..], config_path.as_deref()),
        "preset" => cmd_preset(&rest[1..], config_path.as_deref()),
        "custom" => cmd_custom(&rest[1..], config_path.as_deref()),
        "request" => cmd_request(&rest[1..], config_path.as_deref()),
        "inspect" => cmd_inspect(&rest[1..]),
        "help" | "--help" | "-h" => {
            print_usage(prog);
            Ok(())
        }
        other => Err(format!("Unknown command: {}. Use 'help' for usage.", other)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_usage(prog: &str) {
    eprintln!("thr-spiro - spirograph patterns for polar sand tables");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} [--config FILE] <command> [options]", prog);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  presets [--catalog FILE] [--json]     List presets and curve types");
    eprintln!("  preset <name> [options]               Generate a named preset");
    eprintln!("  custom <curve> [options]              Generate a custom curve");
    eprintln!("  request <file|->                      Run a JSON request, print the JSON response");
    eprintln!("  inspect <file.thr> [--json]           Summarize a .thr file");
    eprintln!("  help                                  Show this message");
    eprintln!();
    eprintln!("Output options (preset, custom):");
    eprintln!("  -o, --output <name>    Output name, .thr is appended (default: preset/curve name)");
    eprintln!("                         Use '-' to print the .thr text to stdout");
    eprintln!("  --dir <dir>            Output directory (default: ./patterns)");
    eprintln!("  --catalog <file>       Extra preset YAML layered over the built-ins");
    eprintln!("  --json                 Print theta/rho points as JSON instead of writing a file");
    eprintln!();
    eprintln!("Curve options (custom):");
    eprintln!("  -R <x>                 Fixed circle radius (trochoids)");
    eprintln!("  -r <x>                 Rolling circle radius (trochoids)");
    eprintln!("  -d <x>                 Pen offset (trochoids) or rose denominator");
    eprintln!("  -n <k>                 Rose numerator, may be negative or fractional");
    eprintln!("  -a <x>, -b <x>         Lissajous frequencies");
    eprintln!("  --delta <rad>          Lissajous phase (default: 0)");
    eprintln!("  --revolutions <k>      Trochoid turns, overrides the closure search");
    eprintln!("  -p, --points <n>       Number of samples (default: 2000)");
    eprintln!("  --scale <s>            Largest radius on the table, in (0, 1] (default: 0.95)");
    eprintln!("  --offset <c>           Center offset, in [0, 1) (default: 0)");
    eprintln!();
    eprintln!("Curves: hypotrochoid (hypo), epitrochoid (epi), rose, lissajous (lissa)");
    eprintln!();
    eprintln!("Logging goes to stderr; set RUST_LOG (e.g. RUST_LOG=thr_spiro=debug) for more.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} preset rose_5 -o my_rose", prog);
    eprintln!("  {} custom rose -n 5 -d 2 -o - > rose.thr", prog);
    eprintln!("  {} custom hypotrochoid -R 1 -r 0.25 -d 0.5 -p 3000 -o spiro", prog);
    eprintln!("  echo '{{\"action\": \"list_presets\"}}' | {} request -", prog);
}
