use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use mqsim_results::report::{build_report, save_report};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
/// Summarizes MQSim XML result reports into a single CSV file
struct Args {
    /// Path to XML file with the workload definition
    workload: PathBuf,

    /// Path to produced CSV file with the report
    output: PathBuf,

    /// Paths to XML result files, one per scenario, in scenario order
    #[arg(required = true)]
    results: Vec<PathBuf>,
}

fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            // Missing or invalid arguments: usage goes to stdout with a
            // plain failure status.
            println!("{}", err);
            exit(1);
        }
        Err(err) => err.exit(),
    };

    let rows = build_report(&args.workload, &args.results)?;
    save_report(&args.output, &rows)?;

    println!("Results saved to {}", args.output.display());
    Ok(())
}
