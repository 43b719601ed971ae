//! Cycle-accurate pacing, run on a dedicated thread so the executor can
//! block on a condition variable rather than busy-waiting or sleeping
//! in-line between every instruction.
//!
//! The original C++ source (`CPU_Timer`) spawns one OS thread *per
//! instruction* and joins it immediately after it signals. This keeps a
//! single long-lived pacer thread instead, parked on a channel between
//! instructions - still the same "two cooperating threads, Condvar
//! handoff" shape spec.md 5 describes, just without the per-instruction
//! thread-spawn overhead (spec.md 9 calls the thread-per-tick approach an
//! implementation choice, not a requirement).

use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How long one cycle takes to "execute" on the reference hardware being
/// emulated. Default is 2 MHz (0.5 microseconds/cycle); 1 MHz NES-era
/// parts want 1.0 microseconds/cycle instead.
#[derive(Debug, Clone, Copy)]
pub struct ClockConfig {
    pub cycle_period: Duration,
}

impl ClockConfig {
    pub fn from_hz(hz: f64) -> ClockConfig {
        ClockConfig {
            cycle_period: Duration::from_secs_f64(1.0 / hz),
        }
    }

    pub const fn from_period(cycle_period: Duration) -> ClockConfig {
        ClockConfig { cycle_period }
    }
}

impl Default for ClockConfig {
    /// 2 MHz, 0.5 microseconds per cycle.
    fn default() -> ClockConfig {
        ClockConfig::from_hz(2_000_000.0)
    }
}

struct Handoff {
    ready: Mutex<bool>,
    condvar: Condvar,
}

/// Signals "instruction-end" no sooner than `cycles * cycle_period` after
/// `pace` is called - never earlier, possibly later. Non-deadline-missing:
/// on modern hosts the executor's own work finishes well within the delay.
pub struct Pacer {
    cycle_period: Duration,
    to_pacer: Sender<u8>,
    handoff: Arc<Handoff>,
    _thread: JoinHandle<()>,
}

impl Pacer {
    pub fn spawn(config: ClockConfig) -> Pacer {
        let (to_pacer, from_executor) = mpsc::channel::<u8>();
        let handoff = Arc::new(Handoff {
            ready: Mutex::new(false),
            condvar: Condvar::new(),
        });
        let thread_handoff = Arc::clone(&handoff);
        let cycle_period = config.cycle_period;

        let thread = thread::spawn(move || {
            for cycles in from_executor {
                thread::sleep(cycle_period * cycles as u32);
                let mut ready = thread_handoff.ready.lock().unwrap();
                *ready = true;
                thread_handoff.condvar.notify_all();
            }
        });

        Pacer {
            cycle_period,
            to_pacer,
            handoff,
            _thread: thread,
        }
    }

    /// Hands `cycles` off to the pacer thread and blocks until it signals
    /// instruction-end, or until a safety-cap wait expires - whichever
    /// comes first. The cap is `cycles * cycle_period` plus a 10-cycle
    /// margin, so a pacer thread that's gone missing never hangs the
    /// executor forever.
    pub fn pace(&self, cycles: u8) {
        {
            let mut ready = self.handoff.ready.lock().unwrap();
            *ready = false;
        }

        if self.to_pacer.send(cycles).is_err() {
            // Pacer thread is gone; proceed immediately rather than hang.
            return;
        }

        let cap = self.cycle_period * (cycles as u32 + 10);
        let ready = self.handoff.ready.lock().unwrap();
        let _ = self
            .handoff
            .condvar
            .wait_timeout_while(ready, cap, |ready| !*ready);
    }
}
