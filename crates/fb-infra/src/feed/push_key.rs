//! Time-ordered push keys.
//!
//! A key is 20 characters: 8 encode the creation time in milliseconds, 12 are
//! random. The alphabet is ordered by ASCII value, so keys sort in creation
//! order. Keys created within the same millisecond reuse the previous random
//! part incremented by one, which keeps them ordered as well.

use std::sync::{Arc, Mutex, PoisonError};

use fb_core::ports::ClockPort;
use fb_core::{InvalidItemKey, ItemKey};
use rand::Rng;

const PUSH_CHARS: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";
const TIME_CHARS: usize = 8;
const RANDOM_CHARS: usize = 12;

struct KeyState {
    last_ms: i64,
    last_random: [u8; RANDOM_CHARS],
}

pub struct PushKeyGenerator {
    clock: Arc<dyn ClockPort>,
    state: Mutex<KeyState>,
}

impl PushKeyGenerator {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            clock,
            state: Mutex::new(KeyState {
                last_ms: i64::MIN,
                last_random: [0; RANDOM_CHARS],
            }),
        }
    }

    pub fn next_key(&self) -> Result<ItemKey, InvalidItemKey> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        // A clock stepping backwards reuses the last timestamp.
        let now = self.clock.now_ms().max(state.last_ms);
        if now == state.last_ms {
            increment(&mut state.last_random);
        } else {
            state.last_ms = now;
            let mut rng = rand::rng();
            for digit in state.last_random.iter_mut() {
                *digit = rng.random_range(0..64);
            }
        }

        let mut key = String::with_capacity(TIME_CHARS + RANDOM_CHARS);
        let mut time = now.max(0);
        let mut time_chars = [0u8; TIME_CHARS];
        for slot in time_chars.iter_mut().rev() {
            *slot = PUSH_CHARS[(time % 64) as usize];
            time /= 64;
        }
        key.extend(time_chars.iter().map(|&c| c as char));
        key.extend(
            state
                .last_random
                .iter()
                .map(|&digit| PUSH_CHARS[digit as usize] as char),
        );

        ItemKey::parse(key)
    }
}

fn increment(digits: &mut [u8; RANDOM_CHARS]) {
    for digit in digits.iter_mut().rev() {
        if *digit == 63 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
}
