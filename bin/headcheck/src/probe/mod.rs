use derive_more::From;
use foundation_wirehead::client::HeadFetcher;
use foundation_wirehead::config::{ConfigError, ProbeConfig};

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(From, Debug)]
pub enum ProbeError {
    Config(ConfigError),

    #[from(ignore)]
    NoTargets,

    /// number of targets that could not be fetched.
    #[from(ignore)]
    FailedTargets(usize),
}

impl std::error::Error for ProbeError {}

impl core::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

pub fn register(command: clap::Command) -> clap::Command {
    command
        .arg(
            clap::Arg::new("config")
                .long("config")
                .action(clap::ArgAction::Set)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::Arg::new("urls")
                .action(clap::ArgAction::Append)
                .num_args(0..)
                .value_parser(clap::value_parser!(String)),
        )
}

fn load_config(args: &clap::ArgMatches) -> std::result::Result<ProbeConfig, ProbeError> {
    let mut config = match args.get_one::<std::path::PathBuf>("config") {
        Some(path) => ProbeConfig::from_path(path.clone())?,
        None => ProbeConfig::default(),
    };

    if let Some(urls) = args.get_many::<String>("urls") {
        let mut targets: Vec<String> = urls.cloned().collect();
        targets.append(&mut config.targets);
        config.targets = targets;
    }

    if config.targets.is_empty() {
        return Err(ProbeError::NoTargets);
    }

    Ok(config)
}

pub fn run(args: &clap::ArgMatches) -> std::result::Result<(), BoxedError> {
    let config = load_config(args)?;
    let fetcher = HeadFetcher::from_config(&config.client);

    let mut failed = 0;
    for url in &config.targets {
        println!("{url}");
        match fetcher.fetch(url) {
            Ok(head) => print!("{}", head.summary()),
            Err(err) => {
                tracing::error!("Failed to fetch {}: {:?}", url, err);
                println!("Failed to fetch: {err}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(Box::new(ProbeError::FailedTargets(failed)));
    }

    Ok(())
}
