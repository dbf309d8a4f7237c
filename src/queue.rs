//! A mutex-guarded multi-producer multi-consumer unbounded FIFO queue.

use crate::error::EmptyQueue;
use crate::variant::sync::{Arc, Mutex};

use std::collections::VecDeque;

/// A mutex-guarded multi-producer multi-consumer unbounded FIFO queue.
///
/// The queue owns its elements exclusively: values are moved in on
/// [`push`] and moved out on [`try_pop`]/[`pop_into`], and no operation ever
/// hands out a reference into the internal storage. Every operation acquires
/// the internal lock for exactly one logical step, so no lock is ever held
/// across caller code or across an operation on a second queue.
///
/// Cloning a `Queue` yields another handle to the *same* queue, which is how
/// producer and consumer threads share it. To copy the *contents* into an
/// independent queue, use [`snapshot`].
///
/// [`push`]: Queue::push
/// [`try_pop`]: Queue::try_pop
/// [`pop_into`]: Queue::pop_into
/// [`snapshot`]: Queue::snapshot
#[derive(Debug)]
pub struct Queue<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Queue<T> {
    /// Creates a new, empty [`Queue`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mx_queue::Queue;
    ///
    /// let queue = Queue::<usize>::new();
    /// assert!(queue.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                elements: Mutex::new(VecDeque::new()),
            }),
        }
    }

    /// Returns `true` if the [`Queue`] held no elements at some instant
    /// during the call.
    ///
    /// Under concurrent pushes and pops from other threads the result is
    /// advisory: it can be stale as soon as the lock is released. Use
    /// [`try_pop`] to decide whether an element is actually available.
    ///
    /// [`try_pop`]: Queue::try_pop
    ///
    /// # Examples
    ///
    /// ```
    /// use mx_queue::Queue;
    ///
    /// let queue = Queue::<usize>::new();
    /// assert!(queue.is_empty());
    ///
    /// queue.push(1);
    /// assert!(!queue.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.inner.elements.lock().is_empty()
    }

    /// Returns the number of elements the [`Queue`] held at some instant
    /// during the call. Advisory under concurrency, like [`is_empty`].
    ///
    /// [`is_empty`]: Queue::is_empty
    pub fn len(&self) -> usize {
        self.inner.elements.lock().len()
    }

    /// Pushes an item onto the back of the [`Queue`], taking ownership of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use mx_queue::Queue;
    ///
    /// let queue = Queue::<usize>::new();
    ///
    /// queue.push(1);
    /// queue.push(2);
    /// queue.push(3);
    /// ```
    pub fn push(&self, item: T) {
        self.inner.elements.lock().push_back(item);
    }

    /// Removes and returns the front item of the [`Queue`], or fails with
    /// [`EmptyQueue`] if there was none.
    ///
    /// The emptiness check and the removal happen under a single lock
    /// acquisition; there is no separate "peek front" primitive that could be
    /// paired with a later removal, so two threads can never both observe the
    /// same element as available.
    ///
    /// # Examples
    ///
    /// ```
    /// use mx_queue::Queue;
    ///
    /// let queue = Queue::<usize>::new();
    /// for i in 0..8 {
    ///     queue.push(i);
    /// }
    ///
    /// for i in 0..8 {
    ///     assert_eq!(i, queue.try_pop().unwrap());
    /// }
    ///
    /// assert!(queue.try_pop().is_err());
    /// ```
    pub fn try_pop(&self) -> Result<T, EmptyQueue> {
        self.inner.elements.lock().pop_front().ok_or(EmptyQueue)
    }

    /// Removes the front item of the [`Queue`] and writes it into a
    /// caller-supplied slot, or fails with [`EmptyQueue`] if there was none.
    ///
    /// On failure both the slot and the queue are left untouched. Because the
    /// slot already holds a valid value, no new value has to be constructed
    /// between "element removed from the queue" and "element handed to the
    /// caller", so there is no failure point at which the element could be
    /// lost. The slot is overwritten after the lock is released; the drop of
    /// its previous value never runs inside the critical section.
    ///
    /// # Examples
    ///
    /// ```
    /// use mx_queue::Queue;
    ///
    /// let queue = Queue::<usize>::new();
    /// queue.push(7);
    ///
    /// let mut slot = 0;
    /// assert!(queue.pop_into(&mut slot).is_ok());
    /// assert_eq!(slot, 7);
    ///
    /// // On an empty queue the slot keeps its value.
    /// assert!(queue.pop_into(&mut slot).is_err());
    /// assert_eq!(slot, 7);
    /// ```
    pub fn pop_into(&self, slot: &mut T) -> Result<(), EmptyQueue> {
        let item = self.inner.elements.lock().pop_front().ok_or(EmptyQueue)?;
        *slot = item;
        Ok(())
    }

    /// Creates a new, independent [`Queue`] containing a copy of this queue's
    /// elements taken under this queue's lock.
    ///
    /// The snapshot equals the source's contents at one instant; afterwards
    /// the two queues share nothing, and pushes or pops on one never affect
    /// the other. Only the source's lock is held during the copy. Replacing a
    /// live queue's contents *in place* with another's would need both locks
    /// at once with no general acquisition order, and is deliberately not
    /// offered.
    ///
    /// # Examples
    ///
    /// ```
    /// use mx_queue::Queue;
    ///
    /// let queue = Queue::<usize>::new();
    /// queue.push(1);
    /// queue.push(2);
    ///
    /// let copy = queue.snapshot();
    /// copy.push(3);
    ///
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(copy.len(), 3);
    /// ```
    pub fn snapshot(&self) -> Self
    where
        T: Clone,
    {
        let elements = self.inner.elements.lock().clone();
        Self {
            inner: Arc::new(Inner {
                elements: Mutex::new(elements),
            }),
        }
    }
}

impl<T> Clone for Queue<T> {
    /// Returns a new handle to the same [`Queue`].
    ///
    /// Both handles push to and pop from one shared element sequence; this is
    /// not a copy of the contents (see [`snapshot`]).
    ///
    /// [`snapshot`]: Queue::snapshot
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct Inner<T> {
    /// The FIFO element sequence. Only ever touched through the mutex, for
    /// the full duration of each observation or mutation.
    elements: Mutex<VecDeque<T>>,
}
