use clap::{Parser, Subcommand};
use dresser::app::AppModel;
use dresser::config;
use dresser::events::AppEvent;
use dresser::sys::{SOCKET_PATH, runtime};
use std::io::Write;
use std::os::unix::net::UnixStream;
use wardrobe::{Request, Slot};

#[derive(Parser, Debug)]
#[command(name = "dresser", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Run the customization daemon (default)
    Daemon,
    /// Wear the next piece of a slot
    Next { slot: Slot },
    /// Wear the previous piece of a slot
    Prev { slot: Slot },
    /// Move a slot's selection by any number of pieces
    Step {
        slot: Slot,
        #[arg(allow_hyphen_values = true)]
        delta: isize,
    },
    /// Wear the piece at an index, -1 takes the slot off
    Set {
        slot: Slot,
        #[arg(allow_hyphen_values = true)]
        index: isize,
    },
    /// Wear a random piece (or nothing) in a slot
    Random { slot: Slot },
    /// Randomize every slot except the outfit
    Randomize,
    /// Take everything off
    Reset,
    /// Ask the daemon to print its panel
    Status,
    /// Reload the configuration file
    Reload,
    /// Stop the daemon
    Quit,
    /// Randomize once from the configuration and print the result, no daemon needed
    Preview {
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Write the default configuration file if there is none
    InitConfig,
}

impl Commands {
    fn event(&self) -> Option<AppEvent> {
        Some(match *self {
            Commands::Next { slot } => AppEvent::Change(slot, Request::NEXT),
            Commands::Prev { slot } => AppEvent::Change(slot, Request::PREVIOUS),
            Commands::Step { slot, delta } => AppEvent::Change(slot, Request::Relative(delta)),
            Commands::Set { slot, index } => AppEvent::Change(slot, Request::Absolute(index)),
            Commands::Random { slot } => AppEvent::Change(slot, Request::Random),
            Commands::Randomize => AppEvent::RandomizeAll,
            Commands::Reset => AppEvent::Reset,
            Commands::Status => AppEvent::Status,
            Commands::Reload => AppEvent::ConfigReload,
            Commands::Quit => AppEvent::Quit,
            Commands::Daemon | Commands::Preview { .. } | Commands::InitConfig => return None,
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Daemon) {
        Commands::Daemon => run_daemon(),
        Commands::Preview { seed } => preview(seed),
        Commands::InitConfig => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
        command => match command.event() {
            Some(event) => send_command(&event),
            None => Ok(()),
        },
    }
}

fn run_daemon() -> anyhow::Result<()> {
    let config = config::load_or_setup()?;
    let mut app = AppModel::new(config)?;

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    let _services = runtime::start_background_services(tx)?;

    app.update(AppEvent::Activate);
    println!("{}", app.render());

    while let Ok(event) = rx.recv_blocking() {
        if event == AppEvent::Quit {
            log::info!("Quit requested");
            break;
        }
        app.update(event);
        println!("{}", app.render());
    }
    Ok(())
}

fn preview(seed: Option<u64>) -> anyhow::Result<()> {
    let mut config = config::load_or_setup()?;
    if seed.is_some() {
        config.seed = seed;
    }
    let mut app = AppModel::new(config)?;
    app.update(AppEvent::RandomizeAll);
    print!("{}", app.render());
    Ok(())
}

fn send_command(event: &AppEvent) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to dresser daemon at {}: {}. Is dresser running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", event)?;
    Ok(())
}
