use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "stragglers",
    about = "Read a JSON report of per-domain counts on stdin and list domains below the threshold",
    version,
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
