use clap::{Parser, Subcommand};
use launchboard::{data, serve, stats, LaunchRecord};
use std::path::{Path, PathBuf};

const DEFAULT_DATA: &str = "spacex_launch_dash.csv";

#[derive(Parser, Debug)]
#[command(name = "launchboard")]
#[command(author, version, about = "Interactive dashboard for historical SpaceX launch records")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Launch records CSV (when run without a subcommand, serves it)
    #[arg(default_value = DEFAULT_DATA)]
    data: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value_t = serve::DEFAULT_PORT)]
    port: u16,

    /// Don't open the browser automatically
    #[arg(long)]
    no_open: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the interactive dashboard
    Serve {
        /// Launch records CSV
        #[arg(default_value = DEFAULT_DATA)]
        data: PathBuf,

        /// Port to listen on
        #[arg(short, long, default_value_t = serve::DEFAULT_PORT)]
        port: u16,

        /// Don't open the browser automatically
        #[arg(long)]
        no_open: bool,
    },

    /// Print aggregate launch statistics to the terminal
    Summary {
        /// Launch records CSV
        #[arg(default_value = DEFAULT_DATA)]
        data: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    match args.command {
        Some(Command::Serve { data, port, no_open }) => run_serve(&data, port, !no_open),
        Some(Command::Summary { data }) => run_summary(&data),
        None => run_serve(&args.data, args.port, !args.no_open),
    }
}

fn load_or_exit(path: &Path) -> Vec<LaunchRecord> {
    match data::load_table(path) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Failed to load launch data: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_serve(path: &Path, port: u16, open_browser: bool) {
    let table = load_or_exit(path);

    if let Err(e) = serve::start(port, table, open_browser) {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

fn run_summary(path: &Path) {
    let table = load_or_exit(path);

    let successes = table.iter().filter(|r| r.is_success()).count();
    let failures = table.len() - successes;

    println!("\x1b[1mSpaceX Launch Records\x1b[0m");
    println!("{}", "─".repeat(50));
    println!("Total launches: {}", table.len());
    println!("  \x1b[32m✓ Successes:\x1b[0m {}", successes);
    println!("  \x1b[31m✗ Failures:\x1b[0m  {}", failures);

    println!("\n\x1b[1mSuccesses by site\x1b[0m");
    println!("{}", "─".repeat(50));
    for count in stats::success_counts_by_site(&table) {
        println!("{:<36} {:>6}", count.site, count.successes);
    }

    if let Some((min, max)) = stats::payload_range(&table) {
        println!("\nPayload mass range: {:.0} – {:.0} kg", min, max);
    }
}
