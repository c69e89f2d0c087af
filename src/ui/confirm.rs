use tokio::sync::oneshot;

use crate::models::ToolCall;

/// Pending tool-call confirmation.
///
/// The requester gets a one-shot receiver; confirm resolves it with `true`,
/// cancel (including backdrop dismissal) with `false`. Resolving consumes
/// the pending call and its sender together, so the continuation can fire
/// at most once per request.
#[derive(Debug, Default)]
pub struct ToolConfirmation {
    pending: Option<(ToolCall, oneshot::Sender<bool>)>,
}

impl ToolConfirmation {
    /// Ask the user to confirm a tool call. A still-unresolved earlier
    /// request is resolved with `false` before being replaced.
    pub fn request(&mut self, call: ToolCall) -> oneshot::Receiver<bool> {
        if let Some((displaced, tx)) = self.pending.take() {
            tracing::warn!(tool = %displaced.name, "Displacing unresolved tool confirmation");
            let _ = tx.send(false);
        }

        let (tx, rx) = oneshot::channel();
        self.pending = Some((call, tx));
        rx
    }

    /// The call awaiting confirmation, if any.
    pub fn pending_call(&self) -> Option<&ToolCall> {
        self.pending.as_ref().map(|(call, _)| call)
    }

    /// Confirm the pending call. Returns false when nothing was pending.
    pub fn confirm(&mut self) -> bool {
        self.resolve(true)
    }

    /// Cancel the pending call. Returns false when nothing was pending.
    pub fn cancel(&mut self) -> bool {
        self.resolve(false)
    }

    fn resolve(&mut self, approved: bool) -> bool {
        match self.pending.take() {
            Some((call, tx)) => {
                tracing::debug!(tool = %call.name, approved, "Tool confirmation resolved");
                let _ = tx.send(approved);
                true
            }
            None => false,
        }
    }
}
