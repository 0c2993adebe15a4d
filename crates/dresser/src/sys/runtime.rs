use super::server;
use crate::config;
use crate::events::AppEvent;
use async_channel::Sender;
use std::thread::{self, JoinHandle};
use tokio::runtime::Runtime;

/// Runs the control socket and the config watcher on a side thread. The thread ends,
/// dropping its senders, once both services have stopped.
pub fn start_background_services(tx: Sender<AppEvent>) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("dresser-services".to_string())
        .spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create Tokio runtime: {}", e);
                    return;
                }
            };

            rt.block_on(async {
                tokio::join!(
                    server::run_server(tx.clone()),
                    config::run_async_watcher(tx)
                );
            });
        })
}
