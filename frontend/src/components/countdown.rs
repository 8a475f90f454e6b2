use yew::prelude::*;
use yew_hooks::prelude::*;

const TICK_MS: u32 = 1_000;

#[derive(Clone, PartialEq)]
pub struct UseCountdownHandle {
    remaining: UseStateHandle<u32>,
}

impl UseCountdownHandle {
    pub fn start(&self, seconds: u32) {
        self.remaining.set(seconds);
    }

    pub fn start_from_ms(&self, ms: u64) {
        self.start(ms.div_ceil(1000).min(u32::MAX as u64) as u32);
    }

    pub fn remaining(&self) -> u32 {
        *self.remaining
    }

    pub fn is_running(&self) -> bool {
        *self.remaining > 0
    }
}

/// Seconds-remaining counter that ticks once a second and stops at zero.
#[hook]
pub fn use_countdown() -> UseCountdownHandle {
    let remaining = use_state(|| 0u32);

    {
        let remaining = remaining.clone();
        let millis = if *remaining > 0 { TICK_MS } else { 0 };
        use_interval(
            move || {
                remaining.set(remaining.saturating_sub(1));
            },
            millis,
        );
    }

    UseCountdownHandle { remaining }
}
