//! Debounced command flags shared between input producers and the game loop.
//!
//! On the device each button interrupt calls [`CommandFlags::press`]; in the
//! terminal host the key reader does. The game loop consumes flags through
//! [`InputSource::take`]. Every field is atomic, so a `static CommandFlags` can
//! be written from an interrupt and read from the main loop without a lock.
//!
//! One debounce window is shared by all four buttons: after an accepted edge,
//! every edge within `DEBOUNCE_MS` is dropped, whichever button it came from.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::types::{Command, DEBOUNCE_MS};
use tft_tetris_core::InputSource;

/// Pending-command flags with a shared debounce timer.
#[derive(Debug)]
pub struct CommandFlags {
    pending: [AtomicBool; 4],
    last_edge_ms: AtomicU32,
    seen_edge: AtomicBool,
}

impl CommandFlags {
    pub const fn new() -> Self {
        Self {
            pending: [
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
            ],
            last_edge_ms: AtomicU32::new(0),
            seen_edge: AtomicBool::new(false),
        }
    }

    /// Record a button edge at `now_ms`.
    ///
    /// Returns `false` when the edge falls inside the debounce window of the
    /// previous accepted edge. Pressing an already pending command is accepted
    /// and leaves it pending once.
    pub fn press(&self, command: Command, now_ms: u32) -> bool {
        if self.seen_edge.load(Ordering::Acquire) {
            let last = self.last_edge_ms.load(Ordering::Acquire);
            if now_ms.wrapping_sub(last) <= DEBOUNCE_MS {
                return false;
            }
        }

        self.last_edge_ms.store(now_ms, Ordering::Release);
        self.seen_edge.store(true, Ordering::Release);
        self.pending[command.index()].store(true, Ordering::Release);
        true
    }

    /// Whether `command` is pending, without consuming it.
    pub fn is_pending(&self, command: Command) -> bool {
        self.pending[command.index()].load(Ordering::Acquire)
    }

    /// Drop every pending command. The debounce timer is kept.
    pub fn clear(&self) {
        for flag in &self.pending {
            flag.store(false, Ordering::Release);
        }
    }
}

impl Default for CommandFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for CommandFlags {
    fn take(&self, command: Command) -> bool {
        self.pending[command.index()].swap(false, Ordering::AcqRel)
    }
}
