use clap::Parser;
use escape_fractals::{AnsiTerminalPresenter, CliConfig, CliController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = CliConfig::parse();
    let request = config.render_request()?;

    let presenter = AnsiTerminalPresenter::new(std::io::stdout().lock());
    let mut controller = CliController::new(presenter);

    controller.run(&request, config.zoom_selection())?;

    Ok(())
}
