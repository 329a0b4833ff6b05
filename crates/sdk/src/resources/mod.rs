// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Handles for on-chain Switchboard accounts.
//!
//! A handle pairs a program (node client plus deployment addresses) with the
//! address of one account. Handles carrying a signer can submit transactions
//! that act on that account.

use crate::client::{AptosClient, ClientError, Signer};
use crate::params::{
    AggregatorAddJobParams, AggregatorInitParams, AggregatorOpenRoundParams,
    AggregatorRemoveJobParams, AggregatorSaveResultParams, AggregatorSetConfigParams,
    CrankInitParams, CrankPopParams, CrankPushParams, JobInitParams, OracleQueueSetConfigsParams,
};
use crate::transaction::{EntryCall, ProgramAddresses};
use crate::types::AccountAddress;
use config::SdkConfig;
use std::fmt;
use std::sync::Arc;

/// A Switchboard deployment reachable through one node.
#[derive(Debug, Clone)]
pub struct SwitchboardProgram {
    client: Arc<AptosClient>,
    addresses: ProgramAddresses,
}

impl SwitchboardProgram {
    pub fn new(client: AptosClient, addresses: ProgramAddresses) -> Self {
        Self {
            client: Arc::new(client),
            addresses,
        }
    }

    pub fn from_config(config: &SdkConfig) -> Result<Self, ClientError> {
        let client = AptosClient::new(&config.node, config.transaction.clone())?;
        let addresses = ProgramAddresses::from_config(&config.contract)?;
        Ok(Self::new(client, addresses))
    }

    pub fn client(&self) -> &AptosClient {
        &self.client
    }

    pub fn addresses(&self) -> &ProgramAddresses {
        &self.addresses
    }

    /// Submit `params` to its entry function and return the committed hash.
    pub async fn send<P: EntryCall>(
        &self,
        signer: &dyn Signer,
        params: &P,
    ) -> Result<String, ClientError> {
        let payload = params.payload(&self.addresses)?;
        tracing::debug!(module = P::MODULE, "Sending Switchboard action");

        let info = self.client.send_entry_function(signer, payload).await?;
        Ok(info.hash)
    }
}

// ================================================================================================
// Handle boilerplate
// ================================================================================================

macro_rules! impl_handle {
    ($($handle:ident),* $(,)?) => {
        $(
            impl $handle {
                pub fn new(
                    program: SwitchboardProgram,
                    address: AccountAddress,
                    signer: Option<Arc<dyn Signer>>,
                ) -> Self {
                    Self {
                        program,
                        address,
                        signer,
                    }
                }

                pub fn address(&self) -> AccountAddress {
                    self.address
                }

                pub fn program(&self) -> &SwitchboardProgram {
                    &self.program
                }

                /// Attach a signer, replacing any existing one.
                pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
                    self.signer = Some(signer);
                    self
                }

                fn signer(&self, operation: &'static str) -> Result<&dyn Signer, ClientError> {
                    self.signer
                        .as_deref()
                        .ok_or(ClientError::MissingSigner(operation))
                }
            }

            impl fmt::Debug for $handle {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($handle))
                        .field("address", &self.address)
                        .field("signer", &self.signer.as_ref().map(|s| s.address()))
                        .finish()
                }
            }
        )*
    };
}

#[derive(Clone)]
pub struct Aggregator {
    program: SwitchboardProgram,
    address: AccountAddress,
    signer: Option<Arc<dyn Signer>>,
}

#[derive(Clone)]
pub struct Job {
    program: SwitchboardProgram,
    address: AccountAddress,
    signer: Option<Arc<dyn Signer>>,
}

#[derive(Clone)]
pub struct Crank {
    program: SwitchboardProgram,
    address: AccountAddress,
    signer: Option<Arc<dyn Signer>>,
}

#[derive(Clone)]
pub struct OracleQueue {
    program: SwitchboardProgram,
    address: AccountAddress,
    signer: Option<Arc<dyn Signer>>,
}

impl_handle!(Aggregator, Job, Crank, OracleQueue);

// ================================================================================================
// Aggregator
// ================================================================================================

impl Aggregator {
    /// Create the aggregator described by `params`.
    pub async fn init(
        program: &SwitchboardProgram,
        signer: Arc<dyn Signer>,
        params: AggregatorInitParams,
    ) -> Result<(String, Self), ClientError> {
        let hash = program.send(signer.as_ref(), &params).await?;
        tracing::info!(aggregator = %params.address, hash = %hash, "Aggregator created");

        let aggregator = Self::new(program.clone(), params.address, Some(signer));
        Ok((hash, aggregator))
    }

    pub async fn add_job(&self, job: AccountAddress, weight: u8) -> Result<String, ClientError> {
        let signer = self.signer("Add Job")?;
        let params = AggregatorAddJobParams {
            aggregator_address: self.address,
            job,
            weight,
        };
        self.program.send(signer, &params).await
    }

    pub async fn remove_job(&self, job: AccountAddress) -> Result<String, ClientError> {
        let signer = self.signer("Remove Job")?;
        let params = AggregatorRemoveJobParams {
            aggregator_address: self.address,
            job,
        };
        self.program.send(signer, &params).await
    }

    /// Replace the aggregator's configuration. `params.address` is overridden
    /// with this handle's address.
    pub async fn set_config(
        &self,
        mut params: AggregatorSetConfigParams,
    ) -> Result<String, ClientError> {
        let signer = self.signer("Set Config")?;
        params.address = self.address;
        self.program.send(signer, &params).await
    }

    /// Report an oracle response for the current round.
    pub async fn save_result(
        &self,
        mut params: AggregatorSaveResultParams,
    ) -> Result<String, ClientError> {
        let signer = self.signer("Save Result")?;
        params.aggregator_address = self.address;
        self.program.send(signer, &params).await
    }

    pub async fn open_round(&self) -> Result<String, ClientError> {
        let signer = self.signer("Open Round")?;
        let params = AggregatorOpenRoundParams {
            aggregator_address: self.address,
        };
        self.program.send(signer, &params).await
    }
}

// ================================================================================================
// Job
// ================================================================================================

impl Job {
    pub async fn init(
        program: &SwitchboardProgram,
        signer: Arc<dyn Signer>,
        params: JobInitParams,
    ) -> Result<(String, Self), ClientError> {
        let hash = program.send(signer.as_ref(), &params).await?;
        tracing::info!(job = %params.address, hash = %hash, "Job created");

        Ok((hash, Self::new(program.clone(), params.address, Some(signer))))
    }
}

// ================================================================================================
// Crank
// ================================================================================================

impl Crank {
    pub async fn init(
        program: &SwitchboardProgram,
        signer: Arc<dyn Signer>,
        params: CrankInitParams,
    ) -> Result<(String, Self), ClientError> {
        let hash = program.send(signer.as_ref(), &params).await?;
        tracing::info!(crank = %params.address, hash = %hash, "Crank created");

        Ok((hash, Self::new(program.clone(), params.address, Some(signer))))
    }

    pub async fn push(&self, aggregator: AccountAddress) -> Result<String, ClientError> {
        let signer = self.signer("Crank Push")?;
        let params = CrankPushParams {
            crank_address: self.address,
            aggregator_address: aggregator,
        };
        self.program.send(signer, &params).await
    }

    pub async fn pop(&self) -> Result<String, ClientError> {
        let signer = self.signer("Crank Pop")?;
        let params = CrankPopParams {
            crank_address: self.address,
        };
        self.program.send(signer, &params).await
    }
}

// ================================================================================================
// Oracle queue
// ================================================================================================

impl OracleQueue {
    /// Create or reconfigure the queue. `params.address` is overridden with
    /// this handle's address.
    pub async fn set_configs(
        &self,
        mut params: OracleQueueSetConfigsParams,
    ) -> Result<String, ClientError> {
        let signer = self.signer("Set Queue Configs")?;
        params.address = self.address;
        self.program.send(signer, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Ed25519Signer;
    use config::{NodeConfig, TransactionConfig};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn program_for(node_url: String) -> SwitchboardProgram {
        let node = NodeConfig {
            node_url,
            ..Default::default()
        };
        let transaction = TransactionConfig {
            wait_timeout_secs: 2,
            poll_interval_ms: 10,
            ..Default::default()
        };
        let addresses = ProgramAddresses {
            contract: AccountAddress::new([0xaa; 32]),
            state: AccountAddress::new([0xbb; 32]),
        };
        SwitchboardProgram::new(AptosClient::new(&node, transaction).unwrap(), addresses)
    }

    fn signer() -> Arc<dyn Signer> {
        Arc::new(Ed25519Signer::from_seed([4; 32], AccountAddress::new([0x44; 32])))
    }

    /// Mock node accepting one transaction calling `module`.
    async fn mock_node(module: &str) -> MockServer {
        let server = MockServer::start().await;
        let sender = AccountAddress::new([0x44; 32]);
        let function = format!("{}::{}::run", AccountAddress::new([0xaa; 32]), module);

        Mock::given(method("GET"))
            .and(path(format!("/v1/accounts/{}", sender)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sequence_number": "0",
                "authentication_key": sender.to_string(),
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/transactions/encode_submission"))
            .and(body_partial_json(json!({ "payload": { "function": function } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("0x00")))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/transactions"))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!({ "hash": "0x99" })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/transactions/by_hash/0x99"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "type": "user_transaction",
                "hash": "0x99",
                "success": true
            })))
            .mount(&server)
            .await;

        server
    }

    #[tokio::test]
    async fn test_missing_signer() {
        let program = program_for("http://127.0.0.1:9/v1".to_string());
        let aggregator = Aggregator::new(program.clone(), AccountAddress::new([1; 32]), None);

        let err = aggregator.open_round().await.unwrap_err();
        assert!(matches!(err, ClientError::MissingSigner("Open Round")));
        assert_eq!(err.to_string(), "Open Round Error: No Payer Found");

        let crank = Crank::new(program.clone(), AccountAddress::new([2; 32]), None);
        assert!(matches!(
            crank.pop().await,
            Err(ClientError::MissingSigner("Crank Pop"))
        ));

        let queue = OracleQueue::new(program, AccountAddress::new([3; 32]), None);
        assert!(matches!(
            queue.set_configs(OracleQueueSetConfigsParams::default()).await,
            Err(ClientError::MissingSigner(_))
        ));
    }

    #[tokio::test]
    async fn test_negative_threshold_fails_before_submission() {
        let program = program_for("http://127.0.0.1:9/v1".to_string());
        let aggregator = Aggregator::new(program, AccountAddress::new([1; 32]), Some(signer()));

        let params = AggregatorSetConfigParams {
            variance_threshold: crate::types::SwitchboardDecimal::new(5u64, 1, true),
            ..Default::default()
        };
        assert!(matches!(
            aggregator.set_config(params).await,
            Err(ClientError::Payload(_))
        ));
    }

    #[tokio::test]
    async fn test_aggregator_init_returns_handle() {
        let server = mock_node("AggregatorInitAction").await;
        let program = program_for(format!("{}/v1", server.uri()));

        let params = AggregatorInitParams {
            address: AccountAddress::new([7; 32]),
            ..Default::default()
        };
        let (hash, aggregator) = Aggregator::init(&program, signer(), params).await.unwrap();

        assert_eq!(hash, "0x99");
        assert_eq!(aggregator.address(), AccountAddress::new([7; 32]));
        assert!(aggregator.signer("Open Round").is_ok());
    }

    #[tokio::test]
    async fn test_crank_push_routes_to_push_action() {
        let server = mock_node("CrankPushAction").await;
        let program = program_for(format!("{}/v1", server.uri()));

        let crank = Crank::new(program, AccountAddress::new([2; 32]), None).with_signer(signer());
        let hash = crank.push(AccountAddress::new([7; 32])).await.unwrap();
        assert_eq!(hash, "0x99");
    }

    #[tokio::test]
    async fn test_save_result_routes_to_save_result_action() {
        let server = mock_node("AggregatorSaveResultAction").await;
        let program = program_for(format!("{}/v1", server.uri()));

        let aggregator = Aggregator::new(program, AccountAddress::new([7; 32]), Some(signer()));
        let hash = aggregator
            .save_result(AggregatorSaveResultParams::default())
            .await
            .unwrap();
        assert_eq!(hash, "0x99");
    }

    #[test]
    fn test_debug_shows_signer_address() {
        let program = program_for("http://127.0.0.1:9/v1".to_string());
        let job = Job::new(program, AccountAddress::new([5; 32]), Some(signer()));
        let debug = format!("{:?}", job);
        assert!(debug.starts_with("Job"));
        assert!(debug.contains(&AccountAddress::new([0x44; 32]).to_string()));
    }
}
