use std::error::Error;
use std::fmt;
use std::io;

/// Failure type with a recognizable payload for identity checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFailure(pub &'static str);

impl fmt::Display for TestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test failure: {}", self.0)
    }
}

impl Error for TestFailure {}

/// An I/O failure the default fatal boundary treats as unrecoverable.
pub fn oom() -> io::Error {
    io::Error::new(io::ErrorKind::OutOfMemory, "exhausted")
}
