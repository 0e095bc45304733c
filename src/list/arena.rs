//! Node storage for the list engine.
//!
//! Nodes live in a growable slot arena and reference their neighbors by
//! stable [`NodeId`] indices rather than pointers. Slot 0 permanently holds
//! the sentinel; it is created with the arena and survives until the arena
//! is dropped or reset. Released slots are threaded into a free list and
//! reused in LIFO order:
//!
//! ```text
//! +----------+--------+-------------+--------+-------------+
//! | sentinel | node A | vacant -> 4 | node B | vacant -> END |
//! +----------+--------+-------------+--------+-------------+
//!   slot 0     slot 1    slot 2       slot 3    slot 4
//!                          ^
//!                    first_free = 2
//! ```

use super::error::ListError;
use crate::datum::Datum;

/// End-of-free-list marker.
const FREE_END: u32 = u32::MAX;

/// Stable index of a node within its list's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The sentinel's index. An empty list is exactly the state where the
    /// sentinel's `next` and `prev` are both `SENTINEL`.
    pub const SENTINEL: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A list node: an owned payload plus links to both neighbors.
///
/// The sentinel is the one node with no payload; every real node carries
/// `Some(datum)`.
#[derive(Debug)]
pub struct Node {
    /// Owned payload, `None` only for the sentinel.
    pub datum: Option<Datum>,
    /// Next neighbor (toward the back).
    pub next: NodeId,
    /// Previous neighbor (toward the front).
    pub prev: NodeId,
}

/// A slot in the arena.
///
/// Vacant slots reuse their storage to hold the next free slot index,
/// `FREE_END` marking the end of the free list.
#[derive(Debug)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: u32 },
}

/// Index-addressed node storage with LIFO slot reuse.
#[derive(Debug)]
pub struct NodeArena {
    slots: Vec<Slot>,
    /// Head of the vacant-slot free list, `FREE_END` if none.
    first_free: u32,
    /// Count of live real nodes (the sentinel is not counted).
    live: usize,
    /// Optional bound on `live`.
    max_len: Option<usize>,
}

impl NodeArena {
    /// Creates an arena holding only the self-linked sentinel.
    pub fn new(max_len: Option<usize>) -> Self {
        Self {
            slots: vec![Slot::Occupied(Node {
                datum: None,
                next: NodeId::SENTINEL,
                prev: NodeId::SENTINEL,
            })],
            first_free: FREE_END,
            live: 0,
            max_len,
        }
    }

    /// Allocates a slot for a new real node carrying `datum`.
    ///
    /// The node's links are initialized to the sentinel; the caller is
    /// expected to splice it into place immediately.
    ///
    /// # Errors
    ///
    /// Returns `ListError::CapacityExhausted` if the configured capacity is
    /// already reached.
    pub fn alloc(&mut self, datum: Datum) -> Result<NodeId, ListError> {
        if let Some(max_len) = self.max_len {
            if self.live >= max_len {
                return Err(ListError::CapacityExhausted { max_len });
            }
        }

        let node = Node {
            datum: Some(datum),
            next: NodeId::SENTINEL,
            prev: NodeId::SENTINEL,
        };

        let id = if self.first_free != FREE_END {
            // Reuse a vacant slot (O(1) via free list)
            let id = NodeId(self.first_free);
            match self.slots[id.index()] {
                Slot::Vacant { next_free } => self.first_free = next_free,
                Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
            }
            self.slots[id.index()] = Slot::Occupied(node);
            id
        } else {
            let id = NodeId(self.slots.len() as u32);
            self.slots.push(Slot::Occupied(node));
            id
        };

        self.live += 1;
        Ok(id)
    }

    /// Releases a real node's slot and returns its payload.
    ///
    /// The slot is linked onto the free list head (O(1)). The caller must
    /// have already relinked the node's neighbors.
    pub fn release(&mut self, id: NodeId) -> Datum {
        debug_assert!(id != NodeId::SENTINEL, "the sentinel is never released");

        let slot = std::mem::replace(
            &mut self.slots[id.index()],
            Slot::Vacant {
                next_free: self.first_free,
            },
        );
        self.first_free = id.index() as u32;
        self.live -= 1;

        match slot {
            Slot::Occupied(node) => node
                .datum
                .expect("every released node carries a payload"),
            Slot::Vacant { .. } => unreachable!("released slot is vacant"),
        }
    }

    /// Returns the node at `id`.
    pub fn node(&self, id: NodeId) -> &Node {
        match &self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("linked node slot is vacant"),
        }
    }

    /// Returns the node at `id` mutably.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("linked node slot is vacant"),
        }
    }

    /// Count of live real nodes.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Drops every real node and relinks the sentinel to itself.
    ///
    /// The arena is empty but fully usable afterward; the configured
    /// capacity bound is retained.
    pub fn reset(&mut self) {
        self.slots.truncate(1);
        self.slots[0] = Slot::Occupied(Node {
            datum: None,
            next: NodeId::SENTINEL,
            prev: NodeId::SENTINEL,
        });
        self.first_free = FREE_END;
        self.live = 0;
    }
}
