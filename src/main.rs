use anyhow::Result;
use clap::Parser;

use get_next_version::output::{FileSink, OutputSink, StdoutSink};
use get_next_version::{action, config, ui};

#[derive(clap::Parser)]
#[command(
    name = "get-next-version",
    about = "Compute the next semantic version for a release pipeline"
)]
struct Args {
    #[arg(long, help = "Current version, optionally v-prefixed (default: $INPUT_VERSION)")]
    current: Option<String>,

    #[arg(short, long, help = "Increment level: major, minor or patch (default: $INPUT_LEVEL)")]
    level: Option<String>,

    #[arg(short, long, help = "Output file to append key=value lines to (default: $GITHUB_OUTPUT)")]
    output: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Print the output lines to stdout instead of appending to the output file")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("get-next-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(e.exit_code());
        }
    };

    // Resolve inputs once, at the boundary
    let inputs = match config::Inputs::resolve(args.current, args.level, args.output) {
        Ok(inputs) => inputs,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };

    // Compute before opening the sink so a failed invocation never
    // touches the output file
    let next = match action::compute(&inputs.version, &inputs.level) {
        Ok(next) => next,
        Err(e) => {
            // Same diagnostic shape for both failure kinds; only the
            // exit status differs
            ui::emit_workflow_error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };

    let mut sink: Box<dyn OutputSink> = if args.dry_run {
        Box::new(StdoutSink)
    } else {
        let path = match inputs.require_output_path() {
            Ok(path) => path,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(e.exit_code());
            }
        };
        match FileSink::open(path) {
            Ok(sink) => Box::new(sink),
            Err(e) => {
                ui::display_error(&format!("Failed to open output file: {}", e));
                std::process::exit(e.exit_code());
            }
        }
    };

    if let Err(e) = action::emit(&next, &config.output, sink.as_mut()) {
        ui::display_error(&format!("Failed to write output: {}", e));
        std::process::exit(e.exit_code());
    }

    if args.dry_run {
        ui::display_dry_run(&inputs.version, &next);
    }

    Ok(())
}
