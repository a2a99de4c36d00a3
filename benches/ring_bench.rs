use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use std::thread;

use quadring::RingBuffer;

const MESSAGES: usize = 100_000;
const CAPACITY: u32 = 1024;

fn bench_1p_1c(c: &mut Criterion) {
    let mut group = c.benchmark_group("1p_1c");
    group.throughput(Throughput::Elements(MESSAGES as u64));

    group.bench_function("quadring", |b| {
        b.iter(|| {
            let rb = Arc::new(RingBuffer::with_capacity(CAPACITY));
            let tx = Arc::clone(&rb);
            let rx = Arc::clone(&rb);

            let producer = thread::spawn(move || {
                for i in 0..MESSAGES {
                    while tx.enqueue(black_box(i)).is_err() {
                        std::hint::spin_loop();
                    }
                }
            });

            let consumer = thread::spawn(move || {
                let mut received = 0usize;
                while received < MESSAGES {
                    if rx.dequeue().is_ok() {
                        received += 1;
                    } else {
                        std::hint::spin_loop();
                    }
                }
            });

            producer.join().unwrap();
            consumer.join().unwrap();
        });
    });

    group.finish();
}

fn bench_4p_4c(c: &mut Criterion) {
    let mut group = c.benchmark_group("4p_4c");
    group.throughput(Throughput::Elements(MESSAGES as u64));

    group.bench_function("quadring", |b| {
        b.iter(|| {
            let rb = Arc::new(RingBuffer::with_capacity(CAPACITY));
            let per_producer = MESSAGES / 4;
            let mut handles = Vec::new();

            for p in 0..4usize {
                let rb = Arc::clone(&rb);
                handles.push(thread::spawn(move || {
                    for i in 0..per_producer {
                        while rb.enqueue(black_box(p * per_producer + i)).is_err() {
                            std::hint::spin_loop();
                        }
                    }
                }));
            }

            let received = Arc::new(std::sync::atomic::AtomicUsize::new(0));
            for _ in 0..4 {
                let rb = Arc::clone(&rb);
                let received = Arc::clone(&received);
                handles.push(thread::spawn(move || loop {
                    if rb.dequeue().is_ok() {
                        received.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                    } else if received.load(std::sync::atomic::Ordering::Relaxed) >= MESSAGES {
                        break;
                    } else {
                        std::hint::spin_loop();
                    }
                }));
            }

            for h in handles {
                h.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_1p_1c, bench_4p_4c);
criterion_main!(benches);
