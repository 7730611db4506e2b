use clap::Parser;
use nudge::config;
use nudge::gui::app::AppModel;
use nudge::gui::prompt::Greeting;
use nudge::sys::runtime;
use relm4::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "nudge", version, about = "An evasive Yes/No prompt", long_about = None)]
struct Cli {
    /// The message revealed after clicking Yes. Blank when omitted.
    message: Option<String>,

    /// Write the default config file and print its path, then exit.
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.write_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default();
    let greeting = cli.message.map(Greeting::new).unwrap_or_default();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("dev.nudge.nudge").with_args(Vec::new());

    app.run::<AppModel>((greeting, config, rx));
    Ok(())
}
