//! Fixed-capacity variable storage addressed by name hashing.

/// Number of storage slots.
pub const STORE_CAPACITY: usize = 10;

/// The variable store: a fixed array of integers addressed by hashed names.
///
/// Variable names are never kept at runtime; a name is reduced to a slot
/// index by [`Store::slot`]. Distinct names whose hashes collide modulo the
/// capacity share a slot, and programs observe that aliasing directly —
/// there is no collision detection in the language.
///
/// Slots are zero-initialized, so reading a variable before any `define`
/// deterministically yields 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    slots: [i64; STORE_CAPACITY],
}

impl Store {
    /// A fresh store with every slot zeroed.
    pub fn new() -> Store {
        Store {
            slots: [0; STORE_CAPACITY],
        }
    }

    /// Map a variable name to its slot with the djb2 string hash:
    /// accumulator 5381, multiplier 33, 64-bit unsigned wraparound, reduced
    /// modulo the store capacity. Deterministic and pure.
    pub fn slot(name: &str) -> usize {
        let mut hash: u64 = 5381;
        for byte in name.bytes() {
            hash = hash.wrapping_mul(33).wrapping_add(u64::from(byte));
        }
        (hash % STORE_CAPACITY as u64) as usize
    }

    /// Value held in `slot`.
    pub fn get(&self, slot: usize) -> i64 {
        self.slots[slot]
    }

    /// Overwrite `slot` with `value`.
    pub fn set(&mut self, slot: usize, value: i64) {
        self.slots[slot] = value;
    }

    /// Value bound to `name` (zero until something is stored in its slot).
    pub fn fetch(&self, name: &str) -> i64 {
        self.slots[Self::slot(name)]
    }
}

impl Default for Store {
    fn default() -> Store {
        Store::new()
    }
}
