use fallible_bridge::{capture, raise, BoxedFailure, Captured, Unchecked, UncheckedKind};
use std::collections::TryReserveError;
use std::error::Error;
use std::io;

use crate::common::{oom, TestFailure};

#[test]
fn checked_failure_wraps_as_undeclared() {
    let caught = capture(|| -> u32 { raise::rethrow(TestFailure("boom")) }).unwrap_err();

    let failure = caught.into_failure();
    let wrapped = failure.downcast_ref::<Unchecked>().unwrap();
    assert_eq!(wrapped.kind(), UncheckedKind::Undeclared);
    assert_eq!(
        wrapped.cause().downcast_ref::<TestFailure>(),
        Some(&TestFailure("boom"))
    );
    assert!(wrapped.suppressed().is_empty());
}

#[test]
fn io_failure_wraps_as_io() {
    let caught = capture(|| -> u32 {
        raise::rethrow(io::Error::new(io::ErrorKind::NotFound, "missing"))
    })
    .unwrap_err();

    let failure = caught.into_failure();
    let wrapped = failure.downcast_ref::<Unchecked>().unwrap();
    assert_eq!(wrapped.kind(), UncheckedKind::Io);
    let cause = wrapped.cause().downcast_ref::<io::Error>().unwrap();
    assert_eq!(cause.kind(), io::ErrorKind::NotFound);
}

#[test]
fn boxed_failure_keeps_identity_across_the_boundary() {
    let original: BoxedFailure = Box::new(io::Error::new(io::ErrorKind::NotFound, "missing"));
    let original_ptr = &*original as *const (dyn Error + Send + Sync) as *const ();

    let caught = capture(move || -> u32 { raise::rethrow_boxed(original) }).unwrap_err();

    let wrapped = caught.into_failure().downcast::<Unchecked>().unwrap();
    let cause_ptr = (*wrapped).cause() as *const (dyn Error + Send + Sync) as *const ();
    assert_eq!(cause_ptr, original_ptr, "the cause must be the original allocation");
}

#[test]
fn source_chain_reaches_the_original() {
    let caught = capture(|| -> u32 { raise::rethrow(TestFailure("root")) }).unwrap_err();

    let failure = caught.into_failure();
    let wrapped = failure.downcast_ref::<Unchecked>().unwrap();
    let source = wrapped.source().unwrap();
    assert_eq!(source.downcast_ref::<TestFailure>(), Some(&TestFailure("root")));
}

#[test]
fn wrapper_re_raises_as_itself() {
    let mut wrapped = Unchecked::undeclared(TestFailure("first"));
    wrapped.push_suppressed(Box::new(TestFailure("second")));

    let caught = capture(move || -> u32 { raise::rethrow(wrapped) }).unwrap_err();

    let Captured::Panic(payload) = caught else {
        panic!("expected an in-flight payload");
    };
    let wrapped = payload.downcast::<Unchecked>().unwrap();
    // Same wrapper, not a wrapper around a wrapper.
    assert_eq!(wrapped.kind(), UncheckedKind::Undeclared);
    assert_eq!(
        (*wrapped).cause().downcast_ref::<TestFailure>(),
        Some(&TestFailure("first"))
    );
    assert_eq!(wrapped.suppressed().len(), 1);
}

#[test]
fn absent_failure_returns_normally() {
    raise::rethrow_captured(None);
}

#[test]
fn capture_passes_success_through() {
    assert_eq!(capture(|| 41 + 1).unwrap(), 42);
}

#[test]
fn out_of_memory_passes_through_unwrapped() {
    let caught = capture(|| -> u32 { raise::rethrow(oom()) }).unwrap_err();

    let Captured::Panic(payload) = caught else {
        panic!("expected pass-through");
    };
    let failure = payload.downcast::<BoxedFailure>().unwrap();
    let original = failure.downcast_ref::<io::Error>().unwrap();
    assert_eq!(original.kind(), io::ErrorKind::OutOfMemory);
}

#[test]
fn try_reserve_failure_is_fatal_by_default() {
    let failure = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();

    let caught = capture(move || {
        raise::rethrow(failure);
    })
    .unwrap_err();

    let Captured::Panic(payload) = caught else {
        panic!("expected pass-through");
    };
    assert!(payload.downcast::<BoxedFailure>().unwrap().is::<TryReserveError>());
}
