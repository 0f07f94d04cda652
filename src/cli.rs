use clap::Parser;

#[derive(Parser)]
#[command(name = "sprig")]
#[command(about = "Houseplant watering and light reminders in the terminal")]
#[command(version)]
pub struct Cli {
    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use development mode (uses a separate dev config)
    #[arg(long)]
    pub dev: bool,
}
