//! Process-terminating failure reporting for detected bounds violations.
//!
//! Both failure policies end the process; neither touches the heap. The
//! diagnostic path formats into a fixed stack buffer and hands it to the
//! platform error sink, because by the time a violation is detected the heap
//! may already be corrupted.

use core::fmt::{self, Write};

use crate::config;
use crate::oracle::AllocationExtent;

/// Which side of the copy violated its allocation bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Destination,
    Source,
}

impl Side {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Side::Destination => "memcpy with destination out of bounds of heap allocation",
            Side::Source => "memcpy with source out of bounds of heap allocation",
        }
    }
}

/// Capacity of the stack-resident diagnostic buffer.
pub const MESSAGE_CAPACITY: usize = 512;

/// `fmt::Write` over a fixed byte buffer. Silently truncates once full
/// rather than growing; never allocates.
struct StackWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl Write for StackWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.len() - self.len;
        let take = s.len().min(room);
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

/// Render the one-line violation diagnostic into `buf`, returning the number
/// of bytes written. Uses only `buf`; no heap allocation.
pub(crate) fn format_violation(
    buf: &mut [u8],
    side: Side,
    addr: usize,
    extent: AllocationExtent,
    len: usize,
) -> usize {
    let mut w = StackWriter { buf, len: 0 };
    let _ = writeln!(
        w,
        "{}: {:#x} is in allocation {:#x}..{:#x}, offset {:#x} ({}) is past the end",
        side.label(),
        addr,
        extent.start,
        extent.one_past_end,
        len,
        len,
    );
    w.len
}

/// Terminate the process for a detected bounds violation. Never returns.
///
/// Fail-fast traps with no further computation. Otherwise the diagnostic is
/// built on the caller's stack and written to the platform error sink before
/// aborting.
#[cold]
#[inline(never)]
pub(crate) fn bounds_violation(side: Side, addr: usize, extent: AllocationExtent, len: usize) -> ! {
    if config::current().fail_fast {
        trap();
    }
    let mut buf = [0u8; MESSAGE_CAPACITY];
    let written = format_violation(&mut buf, side, addr, extent, len);
    error(&buf[..written])
}

/// Immediate abnormal termination, no diagnostics.
#[cold]
fn trap() -> ! {
    std::process::abort()
}

/// Write `message` to stderr and abort. Raw `libc::write`: stdio buffers may
/// allocate and the heap is suspect here.
#[cold]
fn error(message: &[u8]) -> ! {
    let mut off = 0;
    while off < message.len() {
        // SAFETY: the pointer/length pair denotes the initialized remainder
        // of a live stack buffer.
        let rc = unsafe {
            libc::write(
                libc::STDERR_FILENO,
                message[off..].as_ptr() as *const libc::c_void,
                message.len() - off,
            )
        };
        if rc <= 0 {
            break;
        }
        off += rc as usize;
    }
    std::process::abort()
}
