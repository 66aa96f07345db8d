//! Extraction of a result identifier from a confirmed receipt

use crate::{
    constants::{TOKEN_ID_ARG, TRANSFER_EVENT},
    runtime::TxReceipt,
    tx::events::format_value,
};

/// Pulls the token id out of a mint receipt
pub trait TokenIdExtractor: Send + Sync {
    /// The token id, `None` when the receipt does not carry one
    fn extract(&self, receipt: &TxReceipt) -> Option<String>;
}

/// Reads one argument of the first event with a given name
#[derive(Clone, Debug)]
pub struct EventArgExtractor {
    /// Event to look for
    pub event: String,
    /// Argument of the event to read
    pub arg: String,
}

impl EventArgExtractor {
    /// Extractor reading `arg` of the first `event`
    pub fn new(event: &str, arg: &str) -> Self {
        EventArgExtractor {
            event: event.to_string(),
            arg: arg.to_string(),
        }
    }
}

impl Default for EventArgExtractor {
    /// `tokenId` of the `Transfer` event
    fn default() -> Self {
        EventArgExtractor::new(TRANSFER_EVENT, TOKEN_ID_ARG)
    }
}

impl TokenIdExtractor for EventArgExtractor {
    fn extract(&self, receipt: &TxReceipt) -> Option<String> {
        receipt
            .find_event(&self.event)?
            .arg(&self.arg)
            .map(format_value)
    }
}

impl<F> TokenIdExtractor for F
where
    F: Fn(&TxReceipt) -> Option<String> + Send + Sync,
{
    fn extract(&self, receipt: &TxReceipt) -> Option<String> {
        self(receipt)
    }
}
