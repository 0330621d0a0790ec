use tokio::sync::mpsc;
use crate::state::ClientCommand;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<ClientCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self { tx }
    }

    /// Commands sent after the game thread exits are dropped.
    pub fn send(&self, cmd: ClientCommand) {
        let _ = self.tx.send(cmd);
    }
}
