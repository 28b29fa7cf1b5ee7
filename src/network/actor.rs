//! Network actor - runs IBGE fetches in the Tokio async runtime

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, fetch_cities, fetch_states};

/// Network actor that executes fetch commands.
///
/// Fetches are spawned tasks, so a slow response never blocks the command
/// loop. In-flight fetches are not cancelled; the App layer discards stale
/// responses by request id.
pub struct NetworkActor {
    client: reqwest::Client,
    base_url: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_fetches: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: &Config, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(Duration::from_secs(config.request_timeout_secs)),
            base_url: config.api_base_url.clone(),
            response_tx,
            active_fetches: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchStates { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let base_url = self.base_url.clone();

                            self.active_fetches.spawn(async move {
                                tracing::info!(id, "Fetching states");
                                let result = fetch_states(&client, &base_url, id).await;
                                tracing::info!(id = result.id(), kind = result.kind().as_str(), "Fetch completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::FetchCities { id, uf }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let base_url = self.base_url.clone();

                            self.active_fetches.spawn(async move {
                                tracing::info!(id, %uf, "Fetching cities");
                                let result = fetch_cities(&client, &base_url, &uf, id).await;
                                tracing::info!(id = result.id(), kind = result.kind().as_str(), "Fetch completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_fetches.join_next() => {
                    // Fetch finished - the task already sent its response
                }
            }
        }
    }
}
