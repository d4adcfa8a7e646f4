use std::{io, path::PathBuf};

use clap::Parser;
use rand::{rngs::StdRng, thread_rng, SeedableRng};

use mazesolver::{
    app::{self, App},
    logging,
    maze::ser,
    presets,
    settings::{Settings, ThemeMode},
    Error,
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazesolver")]
struct Args {
    #[clap(short, long, help = "Load the maze from a RON file")]
    maze: Option<PathBuf>,
    #[clap(short, long, conflicts_with = "maze", help = "Use one of the built-in mazes (0-3)")]
    preset: Option<usize>,
    #[clap(short, long, action, conflicts_with_all = ["maze", "preset"], help = "Use a random built-in maze")]
    random: bool,
    #[clap(long, requires = "random", help = "Seed for --random")]
    seed: Option<u64>,
    #[clap(long, action, help = "Use the dark theme")]
    dark: bool,
    #[clap(long, action, help = "Show the solved maze at once")]
    no_animate: bool,
    #[clap(long, help = "Delay between revealed cells in milliseconds")]
    delay: Option<u64>,
    #[clap(long, help = "Write the solved maze to a RON file")]
    save: Option<PathBuf>,
    #[clap(short, long, action, help = "Print debug logs")]
    verbose: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    logging::init(if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Warn
    });

    if args.reset_config {
        Settings::reset_config(Settings::default_path());
        return Ok(());
    }

    if args.show_config_path {
        let settings_path = Settings::default_path();
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    let mut settings = Settings::load(Settings::default_path());
    if args.dark {
        settings = settings.set_theme(ThemeMode::Dark);
    }
    if args.no_animate {
        settings = settings.set_animate(false);
    }
    if let Some(delay) = args.delay {
        settings = settings.set_delay_ms(delay);
    }

    let mut app = App::new(app::initial_maze(&settings)?, &settings);

    if let Some(path) = &args.maze {
        app.set_maze(ser::load(path)?);
    } else if let Some(index) = args.preset {
        app.set_maze(presets::preset(index)?);
    } else if args.random {
        match args.seed {
            Some(seed) => app.randomize(&mut StdRng::seed_from_u64(seed)),
            None => app.randomize(&mut thread_rng()),
        }
    }

    let mut stdout = io::stdout().lock();
    app.solve(&mut stdout)?;

    if let Some(path) = &args.save {
        ser::save(app.maze(), path)?;
    }

    Ok(())
}
