// src/types.rs

/// Messages sent from the acquisition thread to the GUI.
#[derive(Clone, Debug)]
pub enum ReaderMessage {
    /// One decoded sample, in arrival order.
    Sample(i16),
    /// The transport failed fatally; no more samples will arrive.
    TransportFailed(String),
}
