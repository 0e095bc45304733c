//! The list engine: a circular doubly-linked list rooted at a sentinel.
//!
//! The sentinel's `next` is the front element and its `prev` is the back
//! element; an empty list is the sentinel linked to itself both ways. The
//! circular layout makes front and back access symmetric and removes null
//! checks from traversal, which simply stops when the sentinel comes back
//! around:
//!
//! ```text
//!   +--> [ sentinel ] <-> [ front ] <-> ... <-> [ back ] <--+
//!   |                                                       |
//!   +-------------------------------------------------------+
//! ```
//!
//! All link mutation funnels through two private primitives: `splice`, the
//! one place links are written during insertion, and `unlink`, the one place
//! a node is bypassed and released. Every failure is reported before either
//! primitive runs, so a failed operation leaves the list untouched.

use std::fmt;

use super::arena::{NodeArena, NodeId};
use super::error::ListError;
use crate::datum::Datum;

/// Side of an anchor a relative operation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the back of the list.
    After,
    /// Toward the front of the list.
    Before,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::After => write!(f, "after"),
            Direction::Before => write!(f, "before"),
        }
    }
}

/// Construction-time list configuration.
#[derive(Debug, Clone, Default)]
pub struct ListConfig {
    /// Fixed byte width of `Record` payloads stored in this list.
    ///
    /// With `None`, Record inserts fail `RecordWidthUnset`. Must be nonzero
    /// when set.
    pub record_width: Option<usize>,
    /// Maximum live element count, `None` for unbounded.
    pub max_len: Option<usize>,
}

/// A doubly-linked list of heterogeneous [`Datum`] elements.
///
/// Elements are addressed positionally (front/back) or by value: anchored
/// operations locate the first element byte-equal to the anchor, front to
/// back, then act on it or its neighbor. Inserts take ownership of the
/// datum; queries hand back independently owned copies; removals return the
/// unlinked datum. Dropping the list releases every node.
///
/// # Example
///
/// ```
/// use catena::datum::Datum;
/// use catena::list::List;
///
/// let mut list = List::new();
/// list.push_back(Datum::Integer(100)).unwrap();
/// list.push_front(Datum::Character('A')).unwrap();
/// list.insert_after(&Datum::Character('A'), Datum::Double(9.81)).unwrap();
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.front().unwrap(), Datum::Character('A'));
/// assert_eq!(list.back().unwrap(), Datum::Integer(100));
/// ```
#[derive(Debug)]
pub struct List {
    arena: NodeArena,
    record_width: Option<usize>,
}

impl List {
    /// Creates an empty list with the default configuration: no record
    /// width, unbounded length.
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    /// Creates an empty list accepting `Record` payloads of exactly `width`
    /// bytes.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    pub fn with_record_width(width: usize) -> Self {
        Self::with_config(ListConfig {
            record_width: Some(width),
            ..ListConfig::default()
        })
    }

    /// Creates an empty list from `config`.
    ///
    /// # Panics
    ///
    /// Panics if `config.record_width` is `Some(0)`.
    pub fn with_config(config: ListConfig) -> Self {
        assert!(
            config.record_width != Some(0),
            "record width must be nonzero"
        );
        Self {
            arena: NodeArena::new(config.max_len),
            record_width: config.record_width,
        }
    }

    /// Returns the configured `Record` payload width, if any.
    pub fn record_width(&self) -> Option<usize> {
        self.record_width
    }

    /// Returns true if the list has no elements.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(
            self.first() == NodeId::SENTINEL,
            self.last() == NodeId::SENTINEL,
        );
        self.first() == NodeId::SENTINEL
    }

    /// Count of elements, by full traversal, O(n).
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut id = self.first();
        while id != NodeId::SENTINEL {
            count += 1;
            id = self.arena.node(id).next;
        }
        debug_assert_eq!(count, self.arena.live());
        count
    }

    /// Returns a copy of the front element. Fails `Empty` if there is none.
    pub fn front(&self) -> Result<Datum, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        Ok(self.payload(self.first()).clone())
    }

    /// Returns a copy of the back element. Fails `Empty` if there is none.
    pub fn back(&self) -> Result<Datum, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        Ok(self.payload(self.last()).clone())
    }

    /// Returns a copy of the element immediately after the first element
    /// byte-equal to `anchor`.
    ///
    /// # Errors
    ///
    /// Fails `Empty` on an empty list, `NotFound` if no element matches
    /// `anchor`, and `NeighborAbsent` if the anchor is the back element.
    pub fn after(&self, anchor: &Datum) -> Result<Datum, ListError> {
        let id = self.neighbor(anchor, Direction::After)?;
        Ok(self.payload(id).clone())
    }

    /// Returns a copy of the element immediately before the first element
    /// byte-equal to `anchor`.
    ///
    /// # Errors
    ///
    /// Fails `Empty` on an empty list, `NotFound` if no element matches
    /// `anchor`, and `NeighborAbsent` if the anchor is the front element.
    pub fn before(&self, anchor: &Datum) -> Result<Datum, ListError> {
        let id = self.neighbor(anchor, Direction::Before)?;
        Ok(self.payload(id).clone())
    }

    /// Returns true if some element is byte-equal to `datum`.
    pub fn contains(&self, datum: &Datum) -> bool {
        self.find(datum).is_some()
    }

    /// Front-to-back traversal of borrowed elements.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            id: self.first(),
        }
    }

    /// Inserts `datum` at the front.
    ///
    /// # Errors
    ///
    /// Fails on a `Record` width violation or when the configured capacity
    /// is exhausted.
    pub fn push_front(&mut self, datum: Datum) -> Result<(), ListError> {
        self.check_width(&datum)?;
        let first = self.first();
        let id = self.arena.alloc(datum)?;
        self.splice(NodeId::SENTINEL, id, first);
        Ok(())
    }

    /// Inserts `datum` at the back.
    ///
    /// # Errors
    ///
    /// Fails on a `Record` width violation or when the configured capacity
    /// is exhausted.
    pub fn push_back(&mut self, datum: Datum) -> Result<(), ListError> {
        self.check_width(&datum)?;
        let last = self.last();
        let id = self.arena.alloc(datum)?;
        self.splice(last, id, NodeId::SENTINEL);
        Ok(())
    }

    /// Inserts `datum` immediately after the first element byte-equal to
    /// `anchor`.
    ///
    /// # Errors
    ///
    /// Fails `Empty` on an empty list and `NotFound` if no element matches
    /// `anchor`, then on a `Record` width violation or exhausted capacity.
    /// On any failure the list is unchanged.
    pub fn insert_after(&mut self, anchor: &Datum, datum: Datum) -> Result<(), ListError> {
        let left = self.locate(anchor)?;
        self.check_width(&datum)?;
        let right = self.arena.node(left).next;
        let id = self.arena.alloc(datum)?;
        self.splice(left, id, right);
        Ok(())
    }

    /// Inserts `datum` immediately before the first element byte-equal to
    /// `anchor`.
    ///
    /// # Errors
    ///
    /// Fails `Empty` on an empty list and `NotFound` if no element matches
    /// `anchor`, then on a `Record` width violation or exhausted capacity.
    /// On any failure the list is unchanged.
    pub fn insert_before(&mut self, anchor: &Datum, datum: Datum) -> Result<(), ListError> {
        let right = self.locate(anchor)?;
        self.check_width(&datum)?;
        let left = self.arena.node(right).prev;
        let id = self.arena.alloc(datum)?;
        self.splice(left, id, right);
        Ok(())
    }

    /// Removes the front element and returns it. Fails `Empty` if there is
    /// none.
    pub fn pop_front(&mut self) -> Result<Datum, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let id = self.first();
        Ok(self.unlink(id))
    }

    /// Removes the back element and returns it. Fails `Empty` if there is
    /// none.
    pub fn pop_back(&mut self) -> Result<Datum, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let id = self.last();
        Ok(self.unlink(id))
    }

    /// Removes the element immediately after the first element byte-equal
    /// to `anchor` and returns it.
    ///
    /// # Errors
    ///
    /// Fails `Empty` on an empty list, `NotFound` if no element matches
    /// `anchor`, and `NeighborAbsent` if the anchor is the back element.
    pub fn remove_after(&mut self, anchor: &Datum) -> Result<Datum, ListError> {
        let id = self.neighbor(anchor, Direction::After)?;
        Ok(self.unlink(id))
    }

    /// Removes the element immediately before the first element byte-equal
    /// to `anchor` and returns it.
    ///
    /// # Errors
    ///
    /// Fails `Empty` on an empty list, `NotFound` if no element matches
    /// `anchor`, and `NeighborAbsent` if the anchor is the front element.
    pub fn remove_before(&mut self, anchor: &Datum) -> Result<Datum, ListError> {
        let id = self.neighbor(anchor, Direction::Before)?;
        Ok(self.unlink(id))
    }

    /// Removes the first element byte-equal to `datum` and returns it.
    ///
    /// # Errors
    ///
    /// Fails `Empty` on an empty list and `NotFound` if no element matches.
    pub fn remove(&mut self, datum: &Datum) -> Result<Datum, ListError> {
        let id = self.locate(datum)?;
        Ok(self.unlink(id))
    }

    /// Removes every element, leaving the sentinel self-linked.
    ///
    /// The list stays usable and keeps its configuration. Clearing an empty
    /// list is a no-op.
    pub fn clear(&mut self) {
        self.arena.reset();
    }

    /// First real node, or the sentinel if the list is empty.
    fn first(&self) -> NodeId {
        self.arena.node(NodeId::SENTINEL).next
    }

    /// Last real node, or the sentinel if the list is empty.
    fn last(&self) -> NodeId {
        self.arena.node(NodeId::SENTINEL).prev
    }

    /// Payload of a real node.
    fn payload(&self, id: NodeId) -> &Datum {
        match &self.arena.node(id).datum {
            Some(datum) => datum,
            None => unreachable!("the sentinel is never a query target"),
        }
    }

    /// First node byte-equal to `query`, scanning front to back.
    fn find(&self, query: &Datum) -> Option<NodeId> {
        let mut id = self.first();
        while id != NodeId::SENTINEL {
            let node = self.arena.node(id);
            if matches!(&node.datum, Some(datum) if datum.byte_eq(query)) {
                return Some(id);
            }
            id = node.next;
        }
        None
    }

    /// Locates an anchor, applying the Empty-then-NotFound check order.
    fn locate(&self, anchor: &Datum) -> Result<NodeId, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        self.find(anchor)
            .ok_or_else(|| ListError::NotFound(anchor.kind()))
    }

    /// Locates an anchor and steps to its neighbor, failing `NeighborAbsent`
    /// at the list boundary.
    fn neighbor(&self, anchor: &Datum, direction: Direction) -> Result<NodeId, ListError> {
        let id = self.locate(anchor)?;
        let node = self.arena.node(id);
        let neighbor = match direction {
            Direction::After => node.next,
            Direction::Before => node.prev,
        };
        if neighbor == NodeId::SENTINEL {
            return Err(ListError::NeighborAbsent(direction));
        }
        Ok(neighbor)
    }

    /// Enforces the configured `Record` width before a datum is stored.
    fn check_width(&self, datum: &Datum) -> Result<(), ListError> {
        if let Datum::Record(payload) = datum {
            match self.record_width {
                None => return Err(ListError::RecordWidthUnset),
                Some(expected) if expected != payload.len() => {
                    return Err(ListError::RecordWidthMismatch {
                        expected,
                        actual: payload.len(),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Links `mid` between the adjacent pair `left`/`right`, rewriting the
    /// four affected links. Every insert path ends here.
    fn splice(&mut self, left: NodeId, mid: NodeId, right: NodeId) {
        debug_assert_eq!(self.arena.node(left).next, right);
        debug_assert_eq!(self.arena.node(right).prev, left);

        self.arena.node_mut(left).next = mid;
        let node = self.arena.node_mut(mid);
        node.prev = left;
        node.next = right;
        self.arena.node_mut(right).prev = mid;
    }

    /// Bypasses a real node and releases its slot, returning the payload.
    /// Every removal path ends here.
    fn unlink(&mut self, id: NodeId) -> Datum {
        debug_assert!(id != NodeId::SENTINEL, "the sentinel is never unlinked");

        let node = self.arena.node(id);
        let (prev, next) = (node.prev, node.next);
        self.arena.node_mut(prev).next = next;
        self.arena.node_mut(next).prev = prev;
        self.arena.release(id)
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back borrowed traversal over a [`List`].
///
/// Created by [`List::iter`]. Holding an `Iter` borrows the list, so
/// structural mutation while iterating is rejected at compile time.
pub struct Iter<'a> {
    list: &'a List,
    id: NodeId,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Datum;

    fn next(&mut self) -> Option<&'a Datum> {
        if self.id == NodeId::SENTINEL {
            return None;
        }
        let node = self.list.arena.node(self.id);
        self.id = node.next;
        node.datum.as_ref()
    }
}
