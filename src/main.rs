use fractal_terminal::{
    Cli, InteractiveController, LineCommandSource, TerminalPresenter, init_logging,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let cli = Cli::try_parse_args(std::env::args()).unwrap_or_else(|err| err.exit());
    let config = cli.into_options().build()?;

    tracing::debug!(?config, "starting explorer");

    let mut controller = InteractiveController::new(
        config,
        LineCommandSource::stdin(),
        TerminalPresenter::stdout(),
    );

    controller.run()?;

    Ok(())
}
