// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use config::{ConfigError, NodeConfig, SdkConfig};
use serde_json::Value;
use std::path::{Path, PathBuf};
use switchboard_aptos::client::{AptosClient, Ed25519Signer, FaucetClient};
use switchboard_aptos::codec::{JsonForm, MoveParams, MoveStruct};
use switchboard_aptos::logging;
use switchboard_aptos::params::*;
use switchboard_aptos::resources::SwitchboardProgram;
use switchboard_aptos::transaction::{EntryCall, EntryFunctionPayload, ProgramAddresses};
use switchboard_aptos::types::AccountAddress;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to .env file (e.g., .env.devnet)
    #[arg(short, long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a JSON-form parameter file to its Move-struct form
    ToMove(ParamsArgs),
    /// Convert a Move-struct parameter file to its JSON form
    ToJson(ParamsArgs),
    /// Build the entry-function payload for a JSON-form parameter file
    Payload(ParamsArgs),
    /// Sign and submit a JSON-form parameter file, waiting for confirmation
    Submit(ParamsArgs),
    /// Fund an account from the faucet
    Fund {
        #[arg(long)]
        address: AccountAddress,

        /// Amount in octas
        #[arg(long, default_value_t = 100_000_000)]
        amount: u64,

        /// Wait for the funding transactions to be confirmed
        #[arg(long)]
        wait: bool,
    },
}

#[derive(Args, Debug)]
struct ParamsArgs {
    #[arg(long, value_enum)]
    params: ParamsKind,

    /// Input file, or `-` for stdin
    #[arg(long)]
    file: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ParamsKind {
    AggregatorInit,
    AggregatorAddJob,
    AggregatorRemoveJob,
    AggregatorSetConfig,
    AggregatorSaveResult,
    AggregatorOpenRound,
    JobInit,
    CrankInit,
    CrankPush,
    CrankPop,
    OracleQueueSetConfigs,
}

/// Call the generic `$func` with the record type selected by `$kind`.
macro_rules! with_params {
    ($kind:expr, $func:ident($($arg:expr),*)) => {
        match $kind {
            ParamsKind::AggregatorInit => $func::<AggregatorInitParams>($($arg),*),
            ParamsKind::AggregatorAddJob => $func::<AggregatorAddJobParams>($($arg),*),
            ParamsKind::AggregatorRemoveJob => $func::<AggregatorRemoveJobParams>($($arg),*),
            ParamsKind::AggregatorSetConfig => $func::<AggregatorSetConfigParams>($($arg),*),
            ParamsKind::AggregatorSaveResult => $func::<AggregatorSaveResultParams>($($arg),*),
            ParamsKind::AggregatorOpenRound => $func::<AggregatorOpenRoundParams>($($arg),*),
            ParamsKind::JobInit => $func::<JobInitParams>($($arg),*),
            ParamsKind::CrankInit => $func::<CrankInitParams>($($arg),*),
            ParamsKind::CrankPush => $func::<CrankPushParams>($($arg),*),
            ParamsKind::CrankPop => $func::<CrankPopParams>($($arg),*),
            ParamsKind::OracleQueueSetConfigs => $func::<OracleQueueSetConfigsParams>($($arg),*),
        }
    };
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.env_file {
        Some(path) => SdkConfig::from_env_file(path),
        None => SdkConfig::from_env(),
    };
    let log = config
        .as_ref()
        .map(|c| c.log.clone())
        .unwrap_or_default();
    logging::init(&log)?;

    match cli.command {
        Command::ToMove(args) => {
            let value = read_params(&args.file)?;
            print_json(&with_params!(args.params, to_move_struct(value))?)
        }
        Command::ToJson(args) => {
            let value = read_params(&args.file)?;
            print_json(&with_params!(args.params, to_json(value))?)
        }
        Command::Payload(args) => {
            let config = config.context("Failed to load configuration")?;
            let addresses = ProgramAddresses::from_config(&config.contract)
                .context("Invalid Switchboard contract address")?;

            let value = read_params(&args.file)?;
            let payload = with_params!(args.params, build_payload(value, &addresses))?;
            print_json(&payload)
        }
        Command::Submit(args) => {
            let config = config.context("Failed to load configuration")?;
            let program = SwitchboardProgram::from_config(&config)?;
            let signer = Ed25519Signer::from_config(&config.account)?.context(
                "Submitting requires APTOS_ACCOUNT_PRIVATE_KEY and APTOS_ACCOUNT_ADDRESS",
            )?;

            let value = read_params(&args.file)?;
            let payload = with_params!(args.params, build_payload(value, program.addresses()))?;
            let info = program
                .client()
                .send_entry_function(&signer, payload)
                .await
                .context("Transaction failed")?;

            println!("{}", info.hash);
            Ok(())
        }
        Command::Fund {
            address,
            amount,
            wait,
        } => {
            let (node, transaction) = match config {
                Ok(config) => (config.node, config.transaction),
                Err(e) => {
                    node_config_fallback(&e);
                    (NodeConfig::default(), Default::default())
                }
            };

            let hashes = FaucetClient::new(&node)?
                .fund_account(&address, amount)
                .await
                .context("Faucet request failed")?;

            if wait {
                let client = AptosClient::new(&node, transaction)?;
                for hash in &hashes {
                    client.wait_for_transaction(hash).await?;
                }
            }

            for hash in hashes {
                println!("{}", hash);
            }
            Ok(())
        }
    }
}

fn node_config_fallback(error: &ConfigError) {
    tracing::warn!(error = %error, "Configuration not loaded, using default node endpoints");
}

fn read_params(path: &Path) -> Result<Value> {
    let contents = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("Failed to read parameters from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&contents)
        .with_context(|| format!("{} does not contain valid JSON", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn to_move_struct<P: MoveParams>(value: Value) -> Result<Value> {
    let params = P::from_json(&JsonForm::try_from(value)?)?;
    Ok(params.to_move_struct().into())
}

fn to_json<P: MoveParams>(value: Value) -> Result<Value> {
    let params = P::from_move_struct(&MoveStruct::try_from(value)?)?;
    Ok(params.to_json().into())
}

fn build_payload<P: EntryCall>(
    value: Value,
    addresses: &ProgramAddresses,
) -> Result<EntryFunctionPayload> {
    let params = P::from_json(&JsonForm::try_from(value)?)?;
    Ok(params.payload(addresses)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "switchboard-aptos",
            "to-move",
            "--params",
            "oracle-queue-set-configs",
            "--file",
            "queue.json",
        ])
        .unwrap();
        match cli.command {
            Command::ToMove(args) => {
                assert_eq!(args.params, ParamsKind::OracleQueueSetConfigs);
                assert_eq!(args.file, PathBuf::from("queue.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from([
            "switchboard-aptos",
            "fund",
            "--address",
            "0x1",
            "--env-file",
            ".env.devnet",
        ])
        .unwrap();
        assert_eq!(cli.env_file, Some(PathBuf::from(".env.devnet")));
        assert!(matches!(
            cli.command,
            Command::Fund { amount: 100_000_000, wait: false, .. }
        ));
    }

    #[test]
    fn test_cli_rejects_bad_address() {
        assert!(Cli::try_parse_from(["switchboard-aptos", "fund", "--address", "nope"]).is_err());
    }

    #[test]
    fn test_read_params_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "crankAddress": "0x1" }}"#).unwrap();

        let value = read_params(file.path()).unwrap();
        assert_eq!(value, json!({ "crankAddress": "0x1" }));
    }

    #[test]
    fn test_read_params_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(read_params(file.path()).is_err());
        assert!(read_params(Path::new("/nonexistent/params.json")).is_err());
    }

    #[test]
    fn test_dispatch_conversions() {
        let crank = AccountAddress::new([1; 32]).to_string();
        let json = json!({ "crankAddress": crank });
        let move_struct = with_params!(ParamsKind::CrankPop, to_move_struct(json)).unwrap();
        assert_eq!(move_struct, json!({ "crank_addr": crank }));

        let back = with_params!(ParamsKind::CrankPop, to_json(move_struct)).unwrap();
        assert_eq!(back, json!({ "crankAddress": crank }));
    }

    #[test]
    fn test_dispatch_rejects_short_address() {
        let err = with_params!(
            ParamsKind::CrankPop,
            to_move_struct(json!({ "crankAddress": "0x1" }))
        )
        .unwrap_err();
        assert!(err.to_string().contains("crankAddress"));
    }

    #[test]
    fn test_dispatch_payload() {
        let addresses = ProgramAddresses {
            contract: AccountAddress::new([0xaa; 32]),
            state: AccountAddress::new([0xbb; 32]),
        };
        let payload = with_params!(
            ParamsKind::CrankPop,
            build_payload(
                json!({ "crankAddress": AccountAddress::new([1; 32]).to_string() }),
                &addresses
            )
        )
        .unwrap();

        assert!(payload.function.ends_with("::CrankPopAction::run"));
        assert_eq!(payload.arguments[0], json!(AccountAddress::new([0xbb; 32]).to_string()));
    }

    #[test]
    fn test_dispatch_reports_transcode_error() {
        let err = with_params!(ParamsKind::CrankPop, to_move_struct(json!([1, 2]))).unwrap_err();
        assert!(err.to_string().contains("object"));
    }
}
