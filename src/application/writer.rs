//! Background persistence task
//!
//! Saves are queued and drained in order by a single task, so the last
//! queued map for a category is the one that ends up in storage. Callers
//! never wait on an individual save.

use crate::domain::{Category, ItemMap};
use crate::infrastructure::PersistenceGateway;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

enum WriteCommand {
    Save(Category, ItemMap),
    Flush(oneshot::Sender<()>),
}

pub struct PersistenceWriter {
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl PersistenceWriter {
    /// Spawn the writer task on the current runtime
    pub fn spawn(gateway: Arc<PersistenceGateway>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(gateway, rx));
        PersistenceWriter { tx }
    }

    /// Queue a save and return immediately
    pub fn submit(&self, category: Category, items: ItemMap) {
        if self.tx.send(WriteCommand::Save(category, items)).is_err() {
            warn!(%category, "persistence writer stopped, dropping save");
        }
    }

    /// Wait until everything queued so far has been attempted
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(WriteCommand::Flush(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }
}

async fn run(gateway: Arc<PersistenceGateway>, mut rx: mpsc::UnboundedReceiver<WriteCommand>) {
    while let Some(command) = rx.recv().await {
        match command {
            WriteCommand::Save(category, items) => gateway.save(category, &items).await,
            WriteCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}
