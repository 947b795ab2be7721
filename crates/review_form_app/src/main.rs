use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use review_form_app::platform::config::{self, CONFIG_ENV};
use review_form_app::platform::console::{self, Command, HELP};
use review_form_app::platform::logging::{self, LogDestination};
use review_form_app::{ClockScheduler, FormController, MemoryPage};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Drive the movie review form controller from the terminal"
)]
struct Cli {
    /// RON file overriding the default form settings.
    #[arg(long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t)]
    log: LogDestination,

    /// Print the default config as RON and exit.
    #[arg(long)]
    print_default_config: bool,

    /// Log debug output as well.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        println!("{}", config::default_config_ron()?);
        return Ok(());
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(cli.log, level);

    let form_config = config::load_config(cli.config.as_deref()).context("loading form config")?;
    let mut controller =
        FormController::attach(MemoryPage::new(), ClockScheduler::new(), form_config);

    println!("{HELP}");
    println!("{}", controller.view().describe());

    // Stdin is read on its own thread so due timers still run while the
    // terminal is idle.
    let (line_tx, line_rx) = mpsc::channel::<io::Result<String>>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut stdout = io::stdout();
    loop {
        let received = match controller.scheduler().time_until_next() {
            Some(timeout) => line_rx.recv_timeout(timeout),
            None => line_rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        let line = match received {
            Ok(line) => line.context("reading command")?,
            Err(RecvTimeoutError::Timeout) => {
                if controller.run_due_timers() > 0 {
                    writeln!(stdout, "{}", controller.view().describe())
                        .context("writing state")?;
                }
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        };
        controller.run_due_timers();

        match console::parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Wait(duration)) => {
                thread::sleep(duration);
                controller.run_due_timers();
            }
            Ok(command) => console::execute(&mut controller, command),
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        }

        writeln!(stdout, "{}", controller.view().describe()).context("writing state")?;
    }

    Ok(())
}
