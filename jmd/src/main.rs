use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use jmd::commands::inquiry::{self, InquiryArgs};
use jmd_utils::jmd_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    if let Command::Validate { inquiry } = cli.command {
        return inquiry::validate(inquiry);
    }

    let config = jmd_config::load().context("Failed to load config")?;

    match cli.command {
        Command::Submit { inquiry, no_open } => inquiry::submit(config, inquiry, no_open).await?,
        Command::Link { inquiry } => inquiry::link(config, inquiry)?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Validate { .. } | Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = jmd_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate an inquiry and hand it over to WhatsApp
    #[command(aliases(["s"]))]
    Submit {
        #[command(flatten)]
        inquiry: InquiryArgs,
        /// Print the link instead of opening it
        #[arg(long)]
        no_open: bool,
    },
    /// Print the WhatsApp link for an inquiry
    #[command(aliases(["l"]))]
    Link {
        #[command(flatten)]
        inquiry: InquiryArgs,
    },
    /// Check every field of an inquiry
    #[command(aliases(["v"]))]
    Validate {
        #[command(flatten)]
        inquiry: InquiryArgs,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }
}
