use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use crowdless::app::App;
use crowdless::cli::Cli;
use crowdless::config::{self, Config};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();

    // Logging stays off in release builds so the alternate screen is never
    // written to by the env_logger backend
    #[cfg(debug_assertions)]
    env_logger::init();

    let config = config::load(&cli)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Run the application
    let result = run(terminal, &config);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, config: &Config) -> Result<()> {
    let mut app = App::new(config);

    while !app.should_quit() {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events and poll the fetch/submit workers
        app.handle_events()?;
    }

    Ok(())
}
