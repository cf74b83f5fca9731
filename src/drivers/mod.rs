// src/drivers/mod.rs
pub mod decode;
pub mod error;
pub mod gate;
pub mod source;
pub mod window;

pub use decode::decode_sample;
pub use error::ScopeError;
pub use gate::RedrawGate;
pub use source::{ManualTransport, SampleTransport, SerialTransport};
pub use window::SampleWindow;
