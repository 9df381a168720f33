use crate::config::CAPACITY;
use crate::error::QueueError;
use crate::structs::Piece;
use log::debug;

/// Fixed-capacity circular FIFO of pieces.
///
/// `count` is authoritative: when it is zero, `head` and `tail` carry no
/// meaning and the next enqueue places its piece at `head`.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    items: [Piece; CAPACITY],
    head: usize,
    tail: Option<usize>,
    count: usize,
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceQueue {
    pub fn new() -> Self {
        let mut queue = Self {
            items: [Piece::default(); CAPACITY],
            head: 0,
            tail: None,
            count: 0,
        };
        queue.initialize();
        queue
    }

    /// Drops all logical content. Slots keep their old values but become unreachable.
    pub fn initialize(&mut self) {
        self.head = 0;
        self.tail = None;
        self.count = 0;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == CAPACITY
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    pub fn enqueue(&mut self, piece: Piece) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full { capacity: CAPACITY });
        }

        let slot = match self.tail {
            Some(tail) => (tail + 1) % CAPACITY,
            None => self.head,
        };
        self.items[slot] = piece;
        self.tail = Some(slot);
        self.count += 1;
        debug!(
            "enqueued {piece:?} at slot {slot} (head {}, count {})",
            self.head, self.count
        );
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let piece = self.items[self.head];
        let slot = self.head;
        self.head = (self.head + 1) % CAPACITY;
        self.count -= 1;
        if self.count == 0 {
            self.tail = None;
        }
        debug!(
            "dequeued {piece:?} from slot {slot} (head {}, count {})",
            self.head, self.count
        );
        Ok(piece)
    }

    /// The next piece to play, if any.
    pub fn front(&self) -> Option<Piece> {
        (!self.is_empty()).then(|| self.items[self.head])
    }

    /// Live pieces oldest first. Cloning the iterator restarts the walk.
    pub fn snapshot(&self) -> impl ExactSizeIterator<Item = Piece> + Clone + '_ {
        (0..self.count).map(move |i| self.items[(self.head + i) % CAPACITY])
    }
}
