use std::{fmt, io, marker::PhantomData, ptr::null_mut};

use crate::conf::ListConf;

type Link<T> = *mut Node<T>;

struct Node<T> {
    data: T,
    next: Link<T>,
}

/// Linked list with entry/removal at both ends, capped to a fixed size.
///
/// Pushing into a full list is refused (returns `false`) instead of evicting.
pub struct ListDequeMax<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    max: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// every node is owned by exactly one list and never handed out
unsafe impl<T: Send> Send for ListDequeMax<T> {}

impl<T> ListDequeMax<T> {
    pub fn new(max: i64) -> io::Result<Self> {
        if max < 0 {
            return Err(crate::ioerr(
                format!("capacity cannot be negative:{}", max),
                Some(io::ErrorKind::InvalidInput),
            ));
        }
        Ok(Self::with_max(max as usize))
    }
    pub fn with_max(max: usize) -> Self {
        log::debug!("ListDequeMax new max={}", max);
        Self {
            head: null_mut(),
            tail: null_mut(),
            len: 0,
            max: max,
            _marker: PhantomData,
        }
    }
    pub fn from_conf(cfg: &ListConf) -> io::Result<Self> {
        Self::new(cfg.max)
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn size(&self) -> usize {
        self.len
    }
    pub fn capacity(&self) -> usize {
        self.max
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn is_full(&self) -> bool {
        self.len >= self.max
    }

    pub fn push_front(&mut self, d: T) -> bool {
        if self.is_full() {
            log::trace!("push_front refused, list full({})", self.max);
            return false;
        }
        let node = Box::into_raw(Box::new(Node {
            data: d,
            next: self.head,
        }));
        if self.tail.is_null() {
            self.tail = node;
        }
        self.head = node;
        self.len += 1;
        true
    }
    pub fn push_back(&mut self, d: T) -> bool {
        if self.is_full() {
            log::trace!("push_back refused, list full({})", self.max);
            return false;
        }
        let node = Box::into_raw(Box::new(Node {
            data: d,
            next: null_mut(),
        }));
        if self.tail.is_null() {
            self.head = node;
        } else {
            unsafe { (*self.tail).next = node };
        }
        self.tail = node;
        self.len += 1;
        true
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }
        let node = unsafe { Box::from_raw(self.head) };
        self.head = node.next;
        if self.head.is_null() {
            self.tail = null_mut();
        }
        self.len -= 1;
        Some(node.data)
    }
    /// Walks from head to the node before tail, so this is O(n).
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail.is_null() {
            return None;
        }
        let node = if self.len == 1 {
            let node = unsafe { Box::from_raw(self.tail) };
            self.head = null_mut();
            self.tail = null_mut();
            node
        } else {
            let prev = self.node_at(self.len - 2);
            unsafe {
                (*prev).next = null_mut();
                let node = Box::from_raw(self.tail);
                self.tail = prev;
                node
            }
        };
        self.len -= 1;
        Some(node.data)
    }

    pub fn clear(&mut self) {
        log::debug!("ListDequeMax clear len={}", self.len);
        while self.pop_front().is_some() {}
    }

    pub fn get(&self, pos: i64) -> Option<&T> {
        if pos < 0 || pos as u64 >= self.len as u64 {
            return None;
        }
        let node = self.node_at(pos as usize);
        unsafe { node.as_ref().map(|v| &v.data) }
    }
    pub fn get_mut(&mut self, pos: i64) -> Option<&mut T> {
        if pos < 0 || pos as u64 >= self.len as u64 {
            return None;
        }
        let node = self.node_at(pos as usize);
        unsafe { node.as_mut().map(|v| &mut v.data) }
    }
    pub fn front(&self) -> Option<&T> {
        unsafe { self.head.as_ref().map(|v| &v.data) }
    }
    pub fn back(&self) -> Option<&T> {
        unsafe { self.tail.as_ref().map(|v| &v.data) }
    }

    pub fn position(&self, d: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.entries().position(|v| v == d)
    }
    /// Last match in one forward pass; there are no back links to scan from tail.
    pub fn rposition(&self, d: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut rt = None;
        for (i, v) in self.entries().enumerate() {
            if v == d {
                rt = Some(i);
            }
        }
        rt
    }
    pub fn index_of(&self, d: &T) -> i64
    where
        T: PartialEq,
    {
        match self.position(d) {
            Some(i) => i as i64,
            None => -1,
        }
    }
    pub fn last_index_of(&self, d: &T) -> i64
    where
        T: PartialEq,
    {
        match self.rposition(d) {
            Some(i) => i as i64,
            None => -1,
        }
    }
    pub fn contains(&self, d: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(d) >= 0
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut rt = Vec::with_capacity(self.len);
        rt.extend(self.entries().cloned());
        rt
    }
    pub fn describe(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    // caller keeps pos < len
    fn node_at(&self, pos: usize) -> Link<T> {
        let mut node = self.head;
        for _ in 0..pos {
            node = unsafe { (*node).next };
        }
        node
    }
    fn entries(&self) -> Entries<'_, T> {
        Entries {
            next: self.head,
            _marker: PhantomData,
        }
    }
}

struct Entries<'a, T> {
    next: Link<T>,
    _marker: PhantomData<&'a T>,
}
impl<'a, T> Iterator for Entries<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        unsafe {
            self.next.as_ref().map(|node| {
                self.next = node.next;
                &node.data
            })
        }
    }
}

impl<T> Drop for ListDequeMax<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T: fmt::Display> fmt::Display for ListDequeMax<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.entries().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]\tsize={}\tcapacity={}", self.len, self.max)?;
        if let (Some(hd), Some(tl)) = (self.front(), self.back()) {
            write!(f, "\thead={} tail={}", hd, tl)?;
        }
        Ok(())
    }
}
impl<T: fmt::Debug> fmt::Debug for ListDequeMax<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}
