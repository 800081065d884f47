use crate::app_config::AppConfig;
use clap::{Parser, Subcommand};
use shef_remote::shef::{Parameter, new_http_client};
use shef_remote::{Hold, Key, Outcome, Params, RemoteClient, SerialCommand};
use std::error::Error;
use tracing::{debug, info};

mod app_config;

/// Remote control for set-top-boxes that speak SHEF.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// IPv4 address of the set-top-box, overrides `remote.address`
    #[arg(short, long)]
    address: Option<String>,

    /// HTTP port of the set-top-box, overrides `remote.port`
    #[arg(short, long)]
    port: Option<u16>,

    /// Address of the client receiver to target instead of the main box
    #[arg(long)]
    client_addr: Option<String>,

    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    operation: Operation,
}

#[derive(Subcommand, Debug)]
enum Operation {
    /// List the APIs the set-top-box supports
    Options,
    /// List the receivers the set-top-box knows about
    Locations,
    /// Show software version information
    Version,
    /// Show the operating mode
    Mode,
    /// Show the program on the tuned channel
    Tuned,
    /// Tune to a channel
    Tune {
        major: u32,
        #[arg(long)]
        minor: Option<u32>,
    },
    /// Show program information for a channel
    ProgInfo {
        major: u32,
        #[arg(long)]
        minor: Option<u32>,
        /// Unix timestamp of the program slot
        #[arg(long)]
        time: Option<u64>,
    },
    /// Press a remote key
    Key {
        key: Key,
        #[arg(long)]
        hold: Option<Hold>,
    },
    /// Send a serial command code such as FA87
    Command { cmd: SerialCommand },
    /// Send arbitrary `name=value` parameters to a path
    Raw {
        path: String,
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    debug!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    debug!("✅  Loaded configuration");

    let address = cli
        .address
        .as_deref()
        .or(config.remote().address())
        .ok_or("no set-top-box address, pass --address or set remote.address")?;
    let port = cli.port.unwrap_or(config.remote().port());

    let remote = RemoteClient::connect_with(address, port, new_http_client()?).await?;

    let mut params = Params::new();
    if let Some(client_addr) = &cli.client_addr {
        params.insert(Parameter::ClientAddr.as_str(), client_addr.as_str());
    }

    let outcome = match cli.operation {
        Operation::Options => remote.get_options(&params).await?,
        Operation::Locations => remote.get_locations(&params).await?,
        Operation::Version => remote.get_version(&params).await?,
        Operation::Mode => remote.get_mode(&params).await?,
        Operation::Tuned => remote.get_tuned(&params).await?,
        Operation::Tune { major, minor } => {
            params.insert(Parameter::Major.as_str(), major.to_string());
            if let Some(minor) = minor {
                params.insert(Parameter::Minor.as_str(), minor.to_string());
            }
            remote.tune(&params).await?
        }
        Operation::ProgInfo { major, minor, time } => {
            params.insert(Parameter::Major.as_str(), major.to_string());
            if let Some(minor) = minor {
                params.insert(Parameter::Minor.as_str(), minor.to_string());
            }
            if let Some(time) = time {
                params.insert(Parameter::Time.as_str(), time.to_string());
            }
            remote.get_prog_info(&params).await?
        }
        Operation::Key { key, hold } => {
            params.insert(Parameter::Key.as_str(), key.as_str());
            if let Some(hold) = hold {
                params.insert(Parameter::Hold.as_str(), hold.as_str());
            }
            remote.process_key(&params).await?
        }
        Operation::Command { cmd } => {
            params.insert(Parameter::Cmd.as_str(), cmd.code());
            remote.process_command(&params).await?
        }
        Operation::Raw { path, params: raw } => {
            for (name, value) in raw {
                params.insert(name, value);
            }
            remote.dispatch(&path, &params).await?
        }
    };

    match outcome {
        Outcome::Success(payload) => {
            info!(status = payload.http_status, "✅  Request succeeded");
            println!("{}", payload.body());
            Ok(())
        }
        Outcome::Failure(status) => Err(format!("set-top-box answered {}", status).into()),
    }
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, found '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_typed_operations() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["shef-remote", "--address", "192.168.1.20", "key", "chanup", "--hold", "keyPress"])?;

        assert_eq!(cli.address.as_deref(), Some("192.168.1.20"));
        assert!(matches!(
            cli.operation,
            Operation::Key {
                key: Key::ChannelUp,
                hold: Some(Hold::KeyPress)
            }
        ));
        Ok(())
    }

    #[test]
    fn rejects_unknown_serial_commands() {
        assert!(Cli::try_parse_from(["shef-remote", "command", "FB00"]).is_err());
    }

    #[test]
    fn parse_param_splits_on_the_first_equals_sign() {
        assert_eq!(parse_param("wrapper=a=b"), Ok(("wrapper".to_string(), "a=b".to_string())));
        assert!(parse_param("major").is_err());
    }
}
