//! Bounded Ring Buffer
//!
//! Fixed-capacity FIFO buffer over owned contiguous storage. Elements move
//! in and out either as contiguous runs (`put_slice` / `get`) or one at a
//! time (`push` / `pop`); both forms share the same cursors and ordering.
//!
//! The buffer is single-owner and single-threaded: every mutation takes
//! `&mut self`, and a failed transfer never changes the buffer.

mod buffer;
mod error;
mod settings;

pub use buffer::RingBuffer;
pub use error::BufferError;
pub use settings::{BufferConfig, DEFAULT_CAPACITY};
