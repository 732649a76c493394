//! Loops built out of other loops, resolved from the task queue.

mod common;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use common::{init_test_logging, Parked};
use cont_flow::prelude::*;
use cont_flow::{reactor, Error};

#[test]
fn pump_of_batches_until_end_of_stream() {
    init_test_logging();
    let batches: Rc<RefCell<VecDeque<Vec<u8>>>> = Rc::new(RefCell::new(
        vec![vec![1, 2], vec![], vec![3, 4, 5]].into(),
    ));
    let written = Rc::new(RefCell::new(Vec::new()));
    let parked = Parked::default();

    let pumped = keep_doing({
        let batches = Rc::clone(&batches);
        let written = Rc::clone(&written);
        let parked = parked.clone();
        move || {
            let batch = batches
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| Failure::msg("end of stream"))?;
            let written = Rc::clone(&written);
            let parked = parked.clone();
            Ok::<_, Failure>(for_each(batch, move |byte| {
                written.borrow_mut().push(byte);
                if byte % 2 == 0 {
                    parked.park()
                } else {
                    Handle::ready(())
                }
            }))
        }
    });

    while let Some(sink) = parked.take() {
        assert!(pumped.is_pending());
        sink.set_value(());
        reactor::run();
    }

    let failure = reactor::block_on(pumped).unwrap_err();
    assert_eq!(failure.to_string(), "end of stream");
    assert_eq!(*written.borrow(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn when_all_over_loops_of_different_shapes() {
    init_test_logging();
    let parked = Parked::default();
    let mut remaining = 3;
    let counted = do_until(
        move || {
            remaining -= 1;
            remaining < 0
        },
        {
            let parked = parked.clone();
            move || parked.park()
        },
    );
    let fanned = parallel_for_each(0..4, |i| {
        if i == 2 {
            Handle::failure(Failure::msg("lane 2 down"))
        } else {
            Handle::ready(())
        }
    });
    let summed = drive(from_fn({
        let mut next = 0;
        move || {
            next += 1;
            if next > 4 {
                Step::Complete(next - 1)
            } else {
                Step::Yielded(Handle::ready(()))
            }
        }
    }));

    let joined = when_all((counted, fanned, summed));
    while let Some(sink) = parked.take() {
        assert!(joined.is_pending());
        sink.set_value(());
        reactor::run();
    }

    let (counted, fanned, summed) = reactor::block_on(joined).unwrap();
    assert!(counted.into_result().is_ok());
    assert_eq!(fanned.into_result().unwrap_err().to_string(), "lane 2 down");
    assert_eq!(summed.into_result().unwrap(), 4);
}

#[test]
fn dropped_producer_breaks_the_loop() {
    init_test_logging();
    let done = for_each(0..3, |i| {
        let (sink, handle) = promise::<()>();
        if i == 1 {
            drop(sink);
        } else {
            sink.set_value(());
        }
        handle
    });

    let failure = reactor::block_on(done).unwrap_err();
    assert_eq!(failure.as_error(), Some(&Error::BrokenPromise));
}

#[test]
fn handle_can_be_awaited() {
    use std::future::Future;
    use std::pin::pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    struct NoopWaker;
    impl Wake for NoopWaker {
        fn wake(self: Arc<Self>) {}
    }

    init_test_logging();
    let (sink, handle) = promise::<u32>();
    let mut fut = pin!(handle.map(|n| n * 2));
    let waker = Waker::from(Arc::new(NoopWaker));
    let mut cx = Context::from_waker(&waker);

    assert!(fut.as_mut().poll(&mut cx).is_pending());
    sink.set_value(21);
    reactor::run();
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(result) => assert_eq!(result.unwrap(), 42),
        Poll::Pending => panic!("handle still pending after the queue drained"),
    }
}
