//! The recoverable error kinds reported by the [`Queue`].
//!
//! [`Queue`]: crate::Queue

use thiserror::Error;

/// Reports that no element was available to remove at the instant the
/// atomic check-and-remove of a pop executed.
///
/// This is an expected condition, not a failure of the queue: callers branch
/// on it to stop consuming, retry later, or terminate a drain loop. The queue
/// itself carries no retry or backoff policy.
///
/// # Examples
///
/// ```
/// use mx_queue::{EmptyQueue, Queue};
///
/// let queue: Queue<usize> = Queue::new();
///
/// assert_eq!(queue.try_pop(), Err(EmptyQueue));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("queue empty")]
pub struct EmptyQueue;
