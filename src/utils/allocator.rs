use serde::{Deserialize, Serialize};

/// Stable identifier handed out when a body is spawned.
///
/// Handles are issued in strictly increasing order and never reused, so a
/// handle whose body has been evicted simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct BodyHandle(u64);

impl BodyHandle {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of [`BodyHandle`]s.
#[derive(Debug, Default, Clone)]
pub struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> BodyHandle {
        let handle = BodyHandle(self.next);
        self.next += 1;
        handle
    }

    /// Number of handles issued so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}

/// Finds the slot of `handle` in a slice kept in allocation order.
pub fn find_slot<T>(
    items: &[T],
    handle: BodyHandle,
    key: impl Fn(&T) -> BodyHandle,
) -> Option<usize> {
    items.binary_search_by_key(&handle, key).ok()
}
