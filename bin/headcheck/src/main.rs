mod probe;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn init_tracing(verbose: bool) -> std::result::Result<(), BoxedError> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> std::result::Result<(), BoxedError> {
    let commander = probe::register(
        clap::Command::new("headcheck")
            .about("Fetches each url with a plain GET and reports on the response head")
            .arg(
                clap::Arg::new("verbose")
                    .long("verbose")
                    .short('v')
                    .action(clap::ArgAction::SetTrue),
            ),
    );

    let matches = commander.get_matches();
    init_tracing(matches.get_flag("verbose"))?;

    probe::run(&matches)
}
