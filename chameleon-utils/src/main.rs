use clap::Parser;

use chameleon_utils::measurement::list_measurements;

/// List all measurement directories that contain a given file, oldest first.
#[derive(Parser, Debug)]
#[command(author, version, about)] // get author/version information from Cargo.toml
struct Args {
    /// Directory in which to search for measurements.
    #[arg(short, long, default_value = "./results/")]
    data_root: String,
    /// Name of the file that a measurement directory must contain.
    #[arg(short, long, default_value = "throughput_per_egress.csv")]
    contains: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let args = Args::parse();
    let measurements = list_measurements(&args.data_root, &args.contains)?;
    if measurements.is_empty() {
        log::warn!("No measurement in {} contains {}", args.data_root, args.contains);
    }
    for (i, measurement) in measurements.iter().enumerate() {
        println!("{i:>3}: {}", measurement.display());
    }

    Ok(())
}
