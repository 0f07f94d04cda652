use clap::Parser;
use color_eyre::Result;
use sprig_tui::{cli::Cli, Config, Profile, ReminderStore};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let profile = if cli.dev { Profile::Dev } else { Profile::Prod };

    let config = match cli.config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::load_with_profile(profile)?,
    };

    // All reminder state is memory-only and scoped to this run.
    let store = ReminderStore::new();

    let app = sprig_tui::tui::App::new(config, store);
    sprig_tui::tui::run_event_loop(app)?;

    Ok(())
}
