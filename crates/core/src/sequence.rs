//! Monotonic code sequence shared by everything that numbers entities.

use core::sync::atomic::{AtomicU64, Ordering};

use crate::id::Code;

/// Thread-safe counter holding the last issued [`Code`].
///
/// `next()` is a single atomic `fetch_add`, so callers on different threads
/// never observe the same code unless someone calls [`Sequence::reset`] in
/// between.
#[derive(Debug, Default)]
pub struct Sequence {
    last: AtomicU64,
}

impl Sequence {
    /// A sequence that has issued nothing yet; the first code is 1.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// A sequence whose next code will be `last + 1`.
    pub const fn starting_at(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }

    /// Advance the sequence and return the freshly issued code.
    pub fn next(&self) -> Code {
        // fetch_add returns the previous value
        let previous = self.last.fetch_add(1, Ordering::SeqCst);
        Code::new(previous.wrapping_add(1))
    }

    /// Last issued code (0 when nothing was issued since creation or reset).
    pub fn current(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }

    /// Overwrite the last issued code.
    ///
    /// Codes already handed out are not affected. Resetting below the current
    /// value makes later codes collide with earlier ones.
    pub fn reset(&self, last: u64) -> u64 {
        self.last.swap(last, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn starts_at_one() {
        let seq = Sequence::new();
        assert_eq!(seq.current(), 0);
        assert_eq!(seq.next(), Code::new(1));
        assert_eq!(seq.next(), Code::new(2));
        assert_eq!(seq.current(), 2);
    }

    #[test]
    fn reset_overwrites_and_returns_previous() {
        let seq = Sequence::starting_at(10);
        assert_eq!(seq.reset(3), 10);
        assert_eq!(seq.current(), 3);
        assert_eq!(seq.next(), Code::new(4));
    }

    #[test]
    fn concurrent_next_never_duplicates() {
        let seq = &Sequence::new();
        let per_thread = 500;
        let threads = 8;

        let codes: Vec<Code> = thread::scope(|s| {
            let handles: Vec<_> = (0..threads)
                .map(|_| s.spawn(move || (0..per_thread).map(|_| seq.next()).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: HashSet<_> = codes.iter().copied().collect();
        assert_eq!(unique.len(), threads * per_thread);
        assert_eq!(seq.current(), (threads * per_thread) as u64);
    }
}
