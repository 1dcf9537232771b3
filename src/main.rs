use ascii_buddy::app::{self, Outcome};
use ascii_buddy::cli::{print_usage, Args};
use ascii_buddy::error::EXIT_FAILURE;
use ascii_buddy::feed::RandomPicker;
use clap::Parser;
use colored::Colorize;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.wants_verbose());

    // Single-threaded: the only await point is the feed/image download
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("{}", format!("Failed to create async runtime: {}", e).red());
            std::process::exit(EXIT_FAILURE);
        }
    };

    let mut picker = RandomPicker;
    match rt.block_on(app::run(&args, &mut picker)) {
        Ok(Outcome::Rendered(post)) => {
            print!("{}", post);
        }
        Ok(Outcome::Usage) => {
            print_usage();
            std::process::exit(EXIT_FAILURE);
        }
        Err(e) => {
            log::debug!("Failed with {:?} error: {:?}", e.kind(), e);
            eprintln!("{}", e.to_string().red());
            std::process::exit(e.exit_code());
        }
    }
}
