#![allow(dead_code)]

use promptbox::IdGenerator;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out `id-1`, `id-2`, ... in call order.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicUsize,
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        format!("id-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Same as `SequentialIds` with a custom prefix, for telling stores apart.
#[derive(Debug)]
pub struct PrefixedIds {
    prefix: &'static str,
    next: AtomicUsize,
}

impl PrefixedIds {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicUsize::new(0),
        }
    }
}

impl IdGenerator for PrefixedIds {
    fn generate(&self) -> String {
        format!("{}-{}", self.prefix, self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
