/// Initial heap capacity of [`PriorityQueue::new`].
pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug, Clone)]
struct Node<T> {
    priority: u64,
    item: T,
}

/// Binary max-heap.
///
/// Indices used by the heap routines are 1-based, 0 means "no node". When both children of a
/// node have the same priority, the right one is sifted up.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<Node<T>>,
    capacity: usize,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            heap: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Logical capacity, doubles every time the queue fills up.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, priority: u64, item: T) {
        if self.heap.len() == self.capacity {
            self.heap.reserve_exact(self.capacity);
            self.capacity *= 2;
        }

        self.heap.push(Node { priority, item });
        self.up_heap(self.heap.len());
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.first().map(|node| &node.item)
    }

    pub fn peek_priority(&self) -> Option<u64> {
        self.heap.first().map(|node| node.priority)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.pop_entry().map(|(_, item)| item)
    }

    /// Removes the top entry, returning it together with its priority.
    pub fn pop_entry(&mut self) -> Option<(u64, T)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len();
        self.swap(1, last);
        let Node { priority, item } = self.heap.pop()?;
        self.down_heap(1);

        Some((priority, item))
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Hands every item to `destroy` exactly once, in heap storage order.
    pub fn clear_and_destroy(&mut self, mut destroy: impl FnMut(T)) {
        for node in self.heap.drain(..) {
            destroy(node.item);
        }
    }

    fn priority(&self, qidx: usize) -> Option<u64> {
        qidx.checked_sub(1)
            .and_then(|i| self.heap.get(i))
            .map(|node| node.priority)
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == 0 || b == 0 || a == b {
            return;
        }
        self.heap.swap(a - 1, b - 1);
    }

    fn parent(qidx: usize) -> usize {
        qidx / 2
    }

    fn left_child(&self, qidx: usize) -> usize {
        let idx = qidx * 2;
        if idx <= self.heap.len() {
            idx
        } else {
            0
        }
    }

    fn right_child(&self, qidx: usize) -> usize {
        let idx = qidx * 2 + 1;
        if idx <= self.heap.len() {
            idx
        } else {
            0
        }
    }

    fn up_heap(&mut self, mut qidx: usize) {
        loop {
            let pidx = Self::parent(qidx);
            if pidx == 0 || self.priority(qidx) <= self.priority(pidx) {
                return;
            }
            self.swap(qidx, pidx);
            qidx = pidx;
        }
    }

    fn down_heap(&mut self, mut qidx: usize) {
        loop {
            let lidx = self.left_child(qidx);
            let ridx = self.right_child(qidx);

            let child = match (lidx, ridx) {
                (0, _) => return,
                (l, 0) => l,
                (l, r) if self.priority(r) >= self.priority(l) => r,
                (l, _) => l,
            };

            if self.priority(qidx) >= self.priority(child) {
                return;
            }
            self.swap(qidx, child);
            qidx = child;
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(u64, T)> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (u64, T)>>(&mut self, iter: I) {
        for (priority, item) in iter {
            self.push(priority, item);
        }
    }
}
