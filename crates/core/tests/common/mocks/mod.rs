//! Mock implementations of emulator seams.


pub use sink::{FailingSink, RecordingSink, SinkCall};
