//! Ring Buffer Implementation

use crate::{BufferConfig, BufferError, DEFAULT_CAPACITY};
use std::fmt;
use std::mem;
use std::ops::Range;
use tracing::debug;

/// Bounded FIFO ring buffer over a pre-allocated boxed slice
#[derive(Clone)]
pub struct RingBuffer<T> {
    /// Pre-allocated storage, one slot per element of capacity
    storage: Box<[T]>,
    /// Head position (write cursor)
    head: usize,
    /// Tail position (read cursor)
    tail: usize,
    /// Occupied slots
    stored: usize,
    /// Total elements accepted (for statistics)
    total_written: usize,
}

/// Split a wrapping run of `count` slots starting at `start` into the part
/// up to the end of storage and the part that wraps back to index 0.
fn split_runs(start: usize, count: usize, capacity: usize) -> (Range<usize>, Range<usize>) {
    let first = count.min(capacity - start);
    (start..start + first, 0..count - first)
}

impl<T: Default> RingBuffer<T> {
    /// Create a new ring buffer with given capacity
    pub fn new(capacity: usize) -> Self {
        let storage: Vec<T> = (0..capacity).map(|_| T::default()).collect();
        Self {
            storage: storage.into_boxed_slice(),
            head: 0,
            tail: 0,
            stored: 0,
            total_written: 0,
        }
    }

    /// Create a buffer with default capacity (3000 elements)
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Create a buffer sized from a validated configuration
    pub fn from_config(config: &BufferConfig) -> Result<Self, BufferError> {
        config.validate()?;
        debug!(capacity = config.capacity, "Creating ring buffer from config");
        Ok(Self::new(config.capacity))
    }

    /// Read `count` elements into the front of `dst`, oldest first
    pub fn get(&mut self, dst: &mut [T], count: usize) -> Result<(), BufferError> {
        if count > dst.len() {
            return Err(BufferError::InvalidArgument(format!(
                "destination holds {} elements, {} requested",
                dst.len(),
                count
            )));
        }
        if count > self.stored {
            return Err(BufferError::InsufficientData {
                requested: count,
                stored: self.stored,
            });
        }
        if count == 0 {
            return Ok(());
        }

        let capacity = self.capacity();
        let (front, back) = split_runs(self.tail, count, capacity);
        let (dst_front, dst_back) = dst[..count].split_at_mut(front.len());
        for (out, slot) in dst_front.iter_mut().zip(&mut self.storage[front]) {
            *out = mem::take(slot);
        }
        for (out, slot) in dst_back.iter_mut().zip(&mut self.storage[back]) {
            *out = mem::take(slot);
        }

        self.tail = (self.tail + count) % capacity;
        self.stored -= count;
        Ok(())
    }

    /// Fill the whole of `dst` from the buffer
    pub fn get_slice(&mut self, dst: &mut [T]) -> Result<(), BufferError> {
        let count = dst.len();
        self.get(dst, count)
    }

    /// Read `count` elements into a freshly allocated vector
    pub fn drain_to_vec(&mut self, count: usize) -> Result<Vec<T>, BufferError> {
        if count > self.stored {
            return Err(BufferError::InsufficientData {
                requested: count,
                stored: self.stored,
            });
        }
        let mut out: Vec<T> = (0..count).map(|_| T::default()).collect();
        self.get(&mut out, count)?;
        Ok(out)
    }

    /// Remove and return the oldest element
    pub fn pop(&mut self) -> Result<T, BufferError> {
        if self.is_empty() {
            return Err(BufferError::InsufficientData {
                requested: 1,
                stored: 0,
            });
        }

        let value = mem::take(&mut self.storage[self.tail]);
        self.tail = (self.tail + 1) % self.capacity();
        self.stored -= 1;
        Ok(value)
    }

    /// Drop all stored elements and rewind both cursors
    pub fn clear(&mut self) {
        for slot in self.storage.iter_mut() {
            *slot = T::default();
        }
        self.head = 0;
        self.tail = 0;
        self.stored = 0;
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Copy all of `src` into the buffer, or nothing if it does not fit
    pub fn put_slice(&mut self, src: &[T]) -> Result<(), BufferError> {
        let count = src.len();
        let available = self.available();
        if count > available {
            return Err(BufferError::InsufficientSpace {
                requested: count,
                available,
            });
        }
        if count == 0 {
            return Ok(());
        }

        let capacity = self.capacity();
        let (front, back) = split_runs(self.head, count, capacity);
        let (src_front, src_back) = src.split_at(front.len());
        self.storage[front].clone_from_slice(src_front);
        self.storage[back].clone_from_slice(src_back);

        self.head = (self.head + count) % capacity;
        self.stored += count;
        self.total_written += count;
        Ok(())
    }

    /// Copy the first `count` elements of `src` into the buffer
    pub fn put(&mut self, src: &[T], count: usize) -> Result<(), BufferError> {
        let run = src.get(..count).ok_or_else(|| {
            BufferError::InvalidArgument(format!(
                "source holds {} elements, {} requested",
                src.len(),
                count
            ))
        })?;
        self.put_slice(run)
    }
}

impl<T> RingBuffer<T> {
    /// Append a single element
    pub fn push(&mut self, value: T) -> Result<(), BufferError> {
        if self.is_full() {
            return Err(BufferError::InsufficientSpace {
                requested: 1,
                available: 0,
            });
        }

        self.storage[self.head] = value;
        self.head = (self.head + 1) % self.capacity();
        self.stored += 1;
        self.total_written += 1;
        Ok(())
    }

    /// Oldest element, without consuming it
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.storage[self.tail])
        }
    }

    /// Iterate stored elements from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let (front, back) = split_runs(self.tail, self.stored, self.capacity());
        self.storage[front].iter().chain(self.storage[back].iter())
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Get the number of elements currently in the buffer
    pub fn len(&self) -> usize {
        self.stored
    }

    /// Number of free slots
    pub fn available(&self) -> usize {
        self.capacity() - self.stored
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.stored == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.stored == self.capacity()
    }

    /// Get fill ratio (0.0 to 1.0)
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity() == 0 {
            return 0.0;
        }
        self.stored as f64 / self.capacity() as f64
    }

    /// Get total elements accepted (for statistics)
    pub fn total_written(&self) -> usize {
        self.total_written
    }
}

/// Zero-capacity buffer; what `mem::take` leaves behind
impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self {
            storage: Vec::new().into_boxed_slice(),
            head: 0,
            tail: 0,
            stored: 0,
            total_written: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}
