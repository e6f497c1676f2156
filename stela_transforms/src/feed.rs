// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-slot update channel for derived data.
//!
//! The transform stage publishes derived data; the geometry engine owns the
//! receiving end and drains it synchronously inside the host's update tick.
//! There are no listeners or registries: delivery is a slot handoff, and a
//! superseding publish simply overwrites the pending value (implicit
//! cancellation: nothing is in flight).
//!
//! Both ends are `Rc`-based and single-threaded, matching the engines'
//! concurrency model.

use alloc::rc::Rc;
use core::cell::RefCell;

/// Creates a connected sender/receiver pair.
#[must_use]
pub fn feed<T>() -> (FeedSender<T>, FeedReceiver<T>) {
    let slot = Rc::new(RefCell::new(None));
    (
        FeedSender {
            slot: Rc::clone(&slot),
        },
        FeedReceiver { slot },
    )
}

/// The publishing end held by the transform stage.
#[derive(Debug)]
pub struct FeedSender<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> FeedSender<T> {
    /// Publishes a new update, replacing any update not yet drained.
    pub fn publish(&self, value: T) {
        *self.slot.borrow_mut() = Some(value);
    }

    /// Whether the receiving end still exists.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        Rc::strong_count(&self.slot) > 1
    }
}

/// The draining end owned by the geometry engine.
#[derive(Debug)]
pub struct FeedReceiver<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> FeedReceiver<T> {
    /// Takes the pending update, if any.
    ///
    /// At most one update is pending at a time; intermediate values published
    /// between drains are superseded, not queued.
    #[must_use]
    pub fn drain(&self) -> Option<T> {
        self.slot.borrow_mut().take()
    }

    /// Whether an update is waiting.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.slot.borrow().is_some()
    }
}
