use anyhow::Result;
use clap::{Parser, Subcommand};
use gitnuke::areas::console::Terminal;
use gitnuke::areas::repository::Repository;
use is_terminal::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "gitnuke",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Reset aggregate branches to their last known good build",
    long_about = "This tool resets shared aggregate branches (staging, prototype, ...) \
    to the most recent build tag recorded for them, locally and on the remote. \
    It refuses to touch branches that are not aggregate branches and warns about \
    migrations that would have to be reverted first.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short = 'C', long, global = true, help = "Run as if started in this directory")]
    path: Option<String>,
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "nuke",
        about = "Nuke the specified aggregate branch and reset it to a known good state",
        long_about = "This command deletes the aggregate branch locally and on the remote, \
        then recreates it at the latest build tag of the destination branch. \
        The destination defaults to the nuked branch itself and is asked for when omitted."
    )]
    Nuke {
        #[arg(index = 1, help = "The aggregate branch to reset")]
        bad_branch: String,
        #[arg(short, long, help = "Destination branch to reset to")]
        destination: Option<String>,
    },
    #[command(
        name = "build-tags",
        about = "List the build tags of a branch",
        long_about = "This command fetches tags from the remote and prints the build tags \
        of the given branch, oldest first. The last one is what nuke resets to."
    )]
    BuildTags {
        #[arg(index = 1, help = "The branch whose build tags to list")]
        branch: String,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?.to_string_lossy().into_owned(),
    };
    let repository = Repository::open(&path, Box::new(Terminal::stdio()))?;

    match &cli.command {
        Commands::Nuke {
            bad_branch,
            destination,
        } => {
            let outcome = repository.nuke(bad_branch, destination.as_deref());

            if let Err(error) = &outcome
                && error.is_partially_applied()
            {
                tracing::error!("{bad_branch} was partially reset, check it before retrying");
            }

            outcome?;
        }
        Commands::BuildTags { branch } => repository.build_tags(branch)?,
    }

    Ok(())
}
