use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tradu")]
#[command(about = "Interactive English translation assistant")]
#[command(version)]
pub struct Args {
    /// Suppress status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
