use std::collections::VecDeque;

use proptest::collection::vec;
use proptest::prelude::*;
use quadring::{DequeueError, EnqueueError, RingBuffer};

#[derive(Debug, Clone)]
enum Op {
    Enqueue(u16),
    Dequeue,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![any::<u16>().prop_map(Op::Enqueue), Just(Op::Dequeue)]
}

proptest! {
    #[test]
    fn capacity_is_the_next_power_of_two(requested in 0u32..=(1 << 20)) {
        let rb = RingBuffer::<u8>::with_capacity(requested);
        let cap = rb.cap();
        prop_assert!(cap.is_power_of_two());
        prop_assert!(cap >= 2);
        prop_assert!(cap >= requested.max(2));
        // tight: the next power down would not fit the request
        prop_assert!(cap / 2 < requested.max(2));
    }

    #[test]
    fn fifo_round_trip(values in vec(any::<u16>(), 0..256)) {
        let rb = RingBuffer::with_capacity(256);
        for v in &values {
            prop_assert_eq!(rb.enqueue(*v), Ok(()));
        }
        for v in &values {
            prop_assert_eq!(rb.dequeue(), Ok(*v));
        }
        prop_assert_eq!(rb.dequeue(), Err(DequeueError::Empty));
        prop_assert!(rb.is_empty());
    }

    #[test]
    fn matches_vecdeque_model(
        ops in vec(op_strategy(), 0..512),
        requested in 2u32..64,
    ) {
        let rb = RingBuffer::with_capacity(requested);
        let usable = rb.cap() - 1;
        let mut model: VecDeque<u16> = VecDeque::new();

        for op in ops {
            match op {
                Op::Enqueue(v) => {
                    if model.len() as u32 == usable {
                        prop_assert_eq!(rb.enqueue(v), Err(EnqueueError::Full(v)));
                    } else {
                        prop_assert_eq!(rb.enqueue(v), Ok(()));
                        model.push_back(v);
                    }
                }
                Op::Dequeue => {
                    match model.pop_front() {
                        Some(expected) => prop_assert_eq!(rb.dequeue(), Ok(expected)),
                        None => prop_assert_eq!(rb.dequeue(), Err(DequeueError::Empty)),
                    }
                }
            }

            prop_assert_eq!(rb.quantity() as usize, model.len());
            prop_assert!(rb.quantity() <= usable);
            prop_assert_eq!(rb.is_empty(), model.is_empty());
            prop_assert_eq!(rb.is_full(), model.len() as u32 == usable);
            prop_assert!(!(rb.is_full() && rb.is_empty()));
        }
    }
}
