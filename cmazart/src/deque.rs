/// Double-ended queue backed by a doubly linked chain of nodes.
///
/// Nodes live in an arena and link to each other by index, freed nodes are recycled through
/// a free list, so every operation is `O(1)`.
#[derive(Debug, Clone)]
pub struct Deque<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    first: Option<usize>,
    last: Option<usize>,
    len: usize,
}

#[derive(Debug, Clone)]
struct Node<T> {
    item: Option<T>,
    // closer to front
    preceding: Option<usize>,
    // closer to back
    succeeding: Option<usize>,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            first: None,
            last: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, item: T) {
        let idx = self.alloc(item);
        match self.first {
            Some(first) => {
                self.nodes[first].preceding = Some(idx);
                self.nodes[idx].succeeding = Some(first);
            }
            None => self.last = Some(idx),
        }
        self.first = Some(idx);
        self.len += 1;
    }

    pub fn push_back(&mut self, item: T) {
        let idx = self.alloc(item);
        match self.last {
            Some(last) => {
                self.nodes[last].succeeding = Some(idx);
                self.nodes[idx].preceding = Some(last);
            }
            None => self.first = Some(idx),
        }
        self.last = Some(idx);
        self.len += 1;
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.first.and_then(|i| self.nodes[i].item.as_ref())
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.last.and_then(|i| self.nodes[i].item.as_ref())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let idx = self.first?;
        let next = self.nodes[idx].succeeding;
        match next {
            Some(next) => self.nodes[next].preceding = None,
            None => self.last = None,
        }
        self.first = next;
        self.release(idx)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let idx = self.last?;
        let prev = self.nodes[idx].preceding;
        match prev {
            Some(prev) => self.nodes[prev].succeeding = None,
            None => self.first = None,
        }
        self.last = prev;
        self.release(idx)
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.first = None;
        self.last = None;
        self.len = 0;
    }

    /// Hands every item to `destroy` exactly once, front to back.
    pub fn clear_and_destroy(&mut self, mut destroy: impl FnMut(T)) {
        while let Some(item) = self.pop_front() {
            destroy(item);
        }
        self.clear();
    }

    /// Items from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            next: self.first,
        }
    }

    fn alloc(&mut self, item: T) -> usize {
        let node = Node {
            item: Some(item),
            preceding: None,
            succeeding: None,
        };

        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Option<T> {
        let node = &mut self.nodes[idx];
        node.preceding = None;
        node.succeeding = None;
        let item = node.item.take();

        self.free.push(idx);
        self.len -= 1;
        item
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.deque.nodes[self.next?];
        self.next = node.succeeding;
        node.item.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_item_through_both_ends() {
        let mut deque = Deque::new();
        deque.push_front("only");
        assert_eq!(deque.len(), 1);
        assert_eq!(deque.peek_front(), Some(&"only"));
        assert_eq!(deque.peek_back(), Some(&"only"));
        assert_eq!(deque.pop_back(), Some("only"));
        assert!(deque.is_empty());
        assert_eq!(deque.pop_front(), None);
        assert_eq!(deque.pop_back(), None);
    }

    #[test]
    fn fifo_and_lifo() {
        let mut fifo: Deque<_> = (1..=4).collect();
        assert_eq!(fifo.pop_front(), Some(1));
        assert_eq!(fifo.pop_front(), Some(2));
        fifo.push_back(5);
        assert_eq!(fifo.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);

        let mut stack = Deque::new();
        stack.push_front(1);
        stack.push_front(2);
        stack.push_front(3);
        assert_eq!(stack.pop_front(), Some(3));
        assert_eq!(stack.pop_back(), Some(1));
        assert_eq!(stack.pop_front(), Some(2));
        assert!(stack.is_empty());
    }

    #[test]
    fn size_tracks_pushes_minus_pops() {
        let mut deque = Deque::new();
        let mut expected = 0usize;
        for i in 0..100 {
            match i % 5 {
                0 | 1 => {
                    deque.push_back(i);
                    expected += 1;
                }
                2 => {
                    deque.push_front(i);
                    expected += 1;
                }
                3 => {
                    if deque.pop_front().is_some() {
                        expected -= 1;
                    }
                }
                _ => {
                    if deque.pop_back().is_some() {
                        expected -= 1;
                    }
                }
            }
            assert_eq!(deque.len(), expected);
            assert_eq!(deque.iter().count(), expected);
        }
    }

    #[test]
    fn recycled_nodes_keep_order() {
        let mut deque = Deque::new();
        for i in 0..3 {
            deque.push_back(i);
        }
        deque.pop_front();
        deque.pop_front();
        deque.push_back(10);
        deque.push_front(20);
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![20, 2, 10]);
        assert_eq!(deque.pop_back(), Some(10));
        assert_eq!(deque.pop_back(), Some(2));
        assert_eq!(deque.pop_back(), Some(20));
    }

    #[test]
    fn destroy_front_to_back() {
        let mut deque: Deque<_> = vec![String::from("a"), String::from("b")].into_iter().collect();
        deque.push_front(String::from("z"));

        let mut seen = Vec::new();
        deque.clear_and_destroy(|s| seen.push(s));
        assert_eq!(seen, vec!["z", "a", "b"]);
        assert!(deque.is_empty());
        assert_eq!(deque.peek_front(), None);
    }
}
