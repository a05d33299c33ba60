//! Single-writer, many-reader value cells for ambient inputs (scroll offset,
//! pointer position).
//!
//! The writer half is deliberately not `Clone`: exactly one event source
//! publishes each signal. Readers are cheap clones that observe the latest
//! value and a version counter that bumps on every change.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
struct Slot<T: Copy> {
    value: Cell<T>,
    version: Cell<u64>,
}

#[derive(Debug)]
pub struct SignalWriter<T: Copy> {
    slot: Rc<Slot<T>>,
}

#[derive(Debug)]
pub struct SignalReader<T: Copy> {
    slot: Rc<Slot<T>>,
}

impl<T: Copy> Clone for SignalReader<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

pub fn signal<T: Copy + PartialEq>(initial: T) -> (SignalWriter<T>, SignalReader<T>) {
    let slot = Rc::new(Slot {
        value: Cell::new(initial),
        version: Cell::new(0),
    });
    (
        SignalWriter { slot: slot.clone() },
        SignalReader { slot },
    )
}

impl<T: Copy + PartialEq> SignalWriter<T> {
    /// Publish a value. Returns true when it differed from the previous one.
    pub fn set(&self, value: T) -> bool {
        if self.slot.value.get() == value {
            return false;
        }
        self.slot.value.set(value);
        self.slot.version.set(self.slot.version.get().wrapping_add(1));
        true
    }

    pub fn get(&self) -> T {
        self.slot.value.get()
    }

    pub fn reader(&self) -> SignalReader<T> {
        SignalReader {
            slot: self.slot.clone(),
        }
    }
}

impl<T: Copy> SignalReader<T> {
    pub fn get(&self) -> T {
        self.slot.value.get()
    }

    pub fn version(&self) -> u64 {
        self.slot.version.get()
    }

    pub fn changed_since(&self, version: u64) -> bool {
        self.slot.version.get() != version
    }
}
