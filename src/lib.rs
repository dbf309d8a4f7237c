#![deny(
    warnings,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    rust_2018_idioms
)]

//! A mutex-guarded multi-producer multi-consumer unbounded FIFO queue.
//!
//! Every operation holds the queue's internal lock for the full duration of
//! its read or write, and the emptiness check of a pop is merged with the
//! removal of the front element into a single critical section. There is no
//! standalone "peek front" primitive: splitting "look" and "remove" across
//! two lock acquisitions is the classic interface race in which two threads
//! both observe the same front element, one value is processed twice and the
//! next one never.
//!
//! Popping an empty queue is an expected, recoverable condition reported as
//! [`EmptyQueue`] rather than a panic, so drain loops terminate by matching
//! on the result.
//!
//! # Examples
//!
//! Single Producer - Single Consumer:
//!
//! ```
//! use mx_queue::Queue;
//!
//! const COUNT: usize = 1_000;
//! let queue: Queue<usize> = Queue::new();
//!
//! for i in 0..COUNT {
//!     queue.push(i);
//! }
//!
//! for i in 0..COUNT {
//!     assert_eq!(i, queue.try_pop().unwrap());
//! }
//!
//! assert!(queue.try_pop().is_err());
//! ```
//!
//! Multi Producer - Single Consumer:
//!
//! ```
//! use mx_queue::Queue;
//! use std::thread;
//!
//! const COUNT: usize = 1_000;
//! const CONCURRENCY: usize = 4;
//!
//! let queue: Queue<usize> = Queue::new();
//!
//! let ths: Vec<_> = (0..CONCURRENCY)
//!     .map(|_| {
//!         let q = queue.clone();
//!         thread::spawn(move || {
//!             for i in 0..COUNT {
//!                 q.push(i);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for th in ths {
//!     th.join().unwrap();
//! }
//!
//! for _ in 0..COUNT * CONCURRENCY {
//!     assert!(queue.try_pop().is_ok());
//! }
//!
//! assert!(queue.try_pop().is_err());
//! ```
//!
//! Draining until empty:
//!
//! ```
//! use mx_queue::{EmptyQueue, Queue};
//!
//! let queue: Queue<u32> = Queue::new();
//! queue.push(1);
//! queue.push(2);
//! queue.push(3);
//!
//! let mut drained = Vec::new();
//! loop {
//!     match queue.try_pop() {
//!         Ok(value) => drained.push(value),
//!         Err(EmptyQueue) => break,
//!     }
//! }
//!
//! assert_eq!(drained, [1, 2, 3]);
//! ```

mod error;
mod queue;

pub(crate) mod variant;

pub use error::EmptyQueue;
pub use queue::Queue;
