use fallible_bridge::guard::{run_guarded, Guarded};
use fallible_bridge::{capture, BoxedFailure, Captured, PanicFailure, Unchecked, UncheckedKind};
use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use crate::common::{oom, TestFailure};

fn closed_flag() -> (Rc<Cell<bool>>, impl FnOnce() -> Result<(), TestFailure>) {
    let flag = Rc::new(Cell::new(false));
    let handle = Rc::clone(&flag);
    (flag, move || {
        handle.set(true);
        Ok(())
    })
}

#[test]
fn value_returns_when_cleanup_succeeds() {
    let (closed, cleanup) = closed_flag();

    let value = run_guarded(|| Ok::<_, TestFailure>(42), cleanup);

    assert_eq!(value, 42);
    assert!(closed.get());
}

#[test]
fn cleanup_failure_raises_when_primary_succeeded() {
    let caught = capture(|| {
        run_guarded(
            || Ok::<_, TestFailure>(42),
            || Err(io::Error::new(io::ErrorKind::BrokenPipe, "close failed")),
        )
    })
    .unwrap_err();

    let wrapped = caught.into_failure().downcast::<Unchecked>().unwrap();
    assert_eq!(wrapped.kind(), UncheckedKind::Io);
    assert!(wrapped.suppressed().is_empty());
}

#[test]
fn primary_failure_raises_after_cleanup_ran() {
    let (closed, cleanup) = closed_flag();

    let caught =
        capture(|| run_guarded(|| Err::<u32, _>(TestFailure("primary")), cleanup)).unwrap_err();

    assert!(closed.get(), "cleanup must run even when the primary failed");
    let wrapped = caught.into_failure().downcast::<Unchecked>().unwrap();
    assert_eq!(
        wrapped.cause().downcast_ref::<TestFailure>(),
        Some(&TestFailure("primary"))
    );
    assert!(wrapped.suppressed().is_empty());
}

#[test]
fn cleanup_failure_suppresses_into_primary() {
    let caught = capture(|| {
        run_guarded(
            || Err::<u32, _>(TestFailure("primary")),
            || Err(TestFailure("cleanup")),
        )
    })
    .unwrap_err();

    let wrapped = caught.into_failure().downcast::<Unchecked>().unwrap();
    // The primary failure leads; cleanup's failure rides along, suppressed.
    assert_eq!(
        wrapped.cause().downcast_ref::<TestFailure>(),
        Some(&TestFailure("primary"))
    );
    assert_eq!(wrapped.suppressed().len(), 1);
    assert_eq!(
        wrapped.suppressed()[0].downcast_ref::<TestFailure>(),
        Some(&TestFailure("cleanup"))
    );
}

#[test]
fn fatal_primary_passes_through_with_cleanup_run() {
    let (closed, cleanup) = closed_flag();

    let caught = capture(|| run_guarded(|| Err::<u32, _>(oom()), cleanup)).unwrap_err();

    assert!(closed.get());
    let Captured::Panic(payload) = caught else {
        panic!("expected pass-through");
    };
    let failure = payload.downcast::<BoxedFailure>().unwrap();
    assert_eq!(
        failure.downcast_ref::<io::Error>().unwrap().kind(),
        io::ErrorKind::OutOfMemory
    );
}

#[test]
fn fatal_primary_is_never_suppressed_into() {
    let caught = capture(|| {
        run_guarded(|| Err::<u32, _>(oom()), || Err(TestFailure("cleanup")))
    })
    .unwrap_err();

    // The fatal failure crosses untouched; no wrapper, no suppressed list.
    let Captured::Panic(payload) = caught else {
        panic!("expected pass-through");
    };
    let failure = payload.downcast::<BoxedFailure>().unwrap();
    assert_eq!(
        failure.downcast_ref::<io::Error>().unwrap().kind(),
        io::ErrorKind::OutOfMemory
    );
}

#[test]
fn cleanups_run_in_registration_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&order);
    let second = Rc::clone(&order);

    let value = Guarded::new(|| Ok::<_, TestFailure>(1))
        .cleanup(move || {
            first.borrow_mut().push("first");
            Ok::<_, TestFailure>(())
        })
        .cleanup(move || {
            second.borrow_mut().push("second");
            Ok::<_, TestFailure>(())
        })
        .run();

    assert_eq!(value, 1);
    assert_eq!(*order.borrow(), ["first", "second"]);
}

#[test]
fn later_cleanup_failures_suppress_into_the_first() {
    let caught = capture(|| {
        Guarded::new(|| Ok::<_, TestFailure>(()))
            .cleanup(|| Err(TestFailure("close a")))
            .cleanup(|| Err(TestFailure("close b")))
            .run()
    })
    .unwrap_err();

    let wrapped = caught.into_failure().downcast::<Unchecked>().unwrap();
    assert_eq!(
        wrapped.cause().downcast_ref::<TestFailure>(),
        Some(&TestFailure("close a"))
    );
    assert_eq!(wrapped.suppressed().len(), 1);
    assert_eq!(
        wrapped.suppressed()[0].downcast_ref::<TestFailure>(),
        Some(&TestFailure("close b"))
    );
}

#[test]
fn primary_panic_still_triggers_cleanup() {
    let (closed, cleanup) = closed_flag();

    let caught = capture(|| {
        Guarded::new(|| -> Result<u32, TestFailure> { panic!("primary blew up") })
            .cleanup(cleanup)
            .run()
    })
    .unwrap_err();

    assert!(closed.get());
    let Captured::Panic(payload) = caught else {
        panic!("expected resumed payload");
    };
    assert_eq!(*payload.downcast::<&str>().unwrap(), "primary blew up");
}

#[test]
fn cleanup_panic_folds_into_suppressed_list() {
    let caught = capture(|| {
        Guarded::new(|| Err::<u32, _>(TestFailure("primary")))
            .cleanup(|| -> Result<(), TestFailure> { panic!("close blew up") })
            .run()
    })
    .unwrap_err();

    let wrapped = caught.into_failure().downcast::<Unchecked>().unwrap();
    assert_eq!(wrapped.suppressed().len(), 1);
    let suppressed = wrapped.suppressed()[0].downcast_ref::<PanicFailure>().unwrap();
    assert_eq!(suppressed.message(), "close blew up");
}

#[test]
fn guarded_without_cleanup_behaves_plainly() {
    assert_eq!(Guarded::new(|| Ok::<_, TestFailure>(7)).run(), 7);
}
