//! Key Order Module
//!
//! Arena-backed doubly-linked list of keys used by every eviction policy.
//!
//! Nodes live in a `Vec` and link to each other through integer slot handles,
//! so moving or removing a key never walks the list.

use std::collections::HashMap;
use std::hash::Hash;

// == Slot Handle ==
/// Index of a node inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SlotId(usize);

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

// == Key List ==
/// Ordered set of keys with O(1) push, move and remove.
///
/// - Front = head of the list
/// - Back = tail of the list
///
/// Each key appears at most once. Pushing a key that is already present
/// relocates it instead of adding a second copy.
#[derive(Debug)]
pub struct KeyList<K> {
    /// Node storage, `None` marks a free slot
    slots: Vec<Option<Node<K>>>,
    /// Free slots available for reuse
    free: Vec<usize>,
    /// Key to slot lookup
    index: HashMap<K, SlotId>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<K> Default for KeyList<K> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            head: None,
            tail: None,
        }
    }
}

impl<K: Eq + Hash + Clone> KeyList<K> {
    // == Constructor ==
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push Front ==
    /// Places `key` at the front, moving it there if already present.
    pub fn push_front(&mut self, key: K) {
        if let Some(&id) = self.index.get(&key) {
            self.detach(id);
            self.attach_front(id);
            return;
        }
        let id = self.alloc(key);
        self.attach_front(id);
    }

    // == Push Back ==
    /// Places `key` at the back, moving it there if already present.
    pub fn push_back(&mut self, key: K) {
        if let Some(&id) = self.index.get(&key) {
            self.detach(id);
            self.attach_back(id);
            return;
        }
        let id = self.alloc(key);
        self.attach_back(id);
    }

    // == Move To Front ==
    /// Moves an existing key to the front. Returns false if the key is absent.
    pub fn move_to_front(&mut self, key: &K) -> bool {
        match self.index.get(key).copied() {
            Some(id) => {
                self.detach(id);
                self.attach_front(id);
                true
            }
            None => false,
        }
    }

    // == Move To Back ==
    /// Moves an existing key to the back. Returns false if the key is absent.
    pub fn move_to_back(&mut self, key: &K) -> bool {
        match self.index.get(key).copied() {
            Some(id) => {
                self.detach(id);
                self.attach_back(id);
                true
            }
            None => false,
        }
    }

    // == Remove ==
    /// Removes a key from the list. Returns false if the key is absent.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(id) => {
                self.detach(id);
                self.release(id);
                true
            }
            None => false,
        }
    }

    // == Pop Front ==
    pub fn pop_front(&mut self) -> Option<K> {
        let key = self.front()?.clone();
        self.remove(&key);
        Some(key)
    }

    // == Pop Back ==
    pub fn pop_back(&mut self) -> Option<K> {
        let key = self.back()?.clone();
        self.remove(&key);
        Some(key)
    }

    // == Peek ==
    /// Returns the key at the front without removing it.
    pub fn front(&self) -> Option<&K> {
        self.head.and_then(|id| self.node(id)).map(|node| &node.key)
    }

    /// Returns the key at the back without removing it.
    pub fn back(&self) -> Option<&K> {
        self.tail.and_then(|id| self.node(id)).map(|node| &node.key)
    }

    // == Contains ==
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Iteration ==
    /// Iterates keys from front to back.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    fn node(&self, id: SlotId) -> Option<&Node<K>> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    fn node_mut(&mut self, id: SlotId) -> Option<&mut Node<K>> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    fn alloc(&mut self, key: K) -> SlotId {
        let node = Node {
            key: key.clone(),
            prev: None,
            next: None,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                SlotId(idx)
            }
            None => {
                self.slots.push(Some(node));
                SlotId(self.slots.len() - 1)
            }
        };
        self.index.insert(key, id);
        id
    }

    fn release(&mut self, id: SlotId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            if slot.take().is_some() {
                self.free.push(id.0);
            }
        }
    }

    fn detach(&mut self, id: SlotId) {
        let (prev, next) = match self.node(id) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.node_mut(prev_id) {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = self.node_mut(next_id) {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = None;
        }
    }

    fn attach_front(&mut self, id: SlotId) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head_id) => {
                if let Some(head_node) = self.node_mut(head_id) {
                    head_node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    fn attach_back(&mut self, id: SlotId) {
        let old_tail = self.tail;
        if let Some(node) = self.node_mut(id) {
            node.next = None;
            node.prev = old_tail;
        }
        match old_tail {
            Some(tail_id) => {
                if let Some(tail_node) = self.node_mut(tail_id) {
                    tail_node.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`KeyList`].
pub struct Iter<'a, K> {
    list: &'a KeyList<K>,
    current: Option<SlotId>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.slots.get(id.0)?.as_ref()?;
        self.current = node.next;
        Some(&node.key)
    }
}
