use clap::Parser;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "rouillebridge",
    about = "Serves a file store over FTP, one session per control connection."
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "")]
    pub config: String,

    /// Overrides the control port from the configuration file
    #[arg(short = 'p', long)]
    pub listen_port: Option<u16>,

    /// Overrides the directory served to clients
    #[arg(short, long)]
    pub root_dir: Option<String>,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}
