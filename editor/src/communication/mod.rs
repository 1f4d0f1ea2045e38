pub mod dispatcher;
pub mod message;
use crate::message_prelude::*;
pub use dispatcher::*;
use rand_chacha::{
	rand_core::{RngCore, SeedableRng},
	ChaCha20Rng,
};
use spin::{Mutex, MutexGuard};

use std::{cell::Cell, collections::VecDeque};

#[cfg(not(test))]
static RNG: Mutex<Option<ChaCha20Rng>> = Mutex::new(None);

pub trait MessageHandler<A, T> {
	/// Process a single message, pushing any follow-up messages onto `responses`.
	fn process_action(&mut self, action: A, data: T, responses: &mut VecDeque<Message>);
}

thread_local! {
	pub static UUID_SEED: Cell<Option<u64>> = Cell::new(None);
	#[cfg(test)]
	static LOCAL_RNG: Mutex<Option<ChaCha20Rng>> = Mutex::new(None);
}

pub fn set_uuid_seed(random_seed: u64) {
	UUID_SEED.with(|seed| seed.set(Some(random_seed)));
}

pub fn generate_uuid() -> u64 {
	let init = |mut lock: MutexGuard<Option<ChaCha20Rng>>| {
		if lock.is_none() {
			UUID_SEED.with(|seed| {
				let random_seed = seed.get().expect("random seed not set before editor was initialized");
				*lock = Some(ChaCha20Rng::seed_from_u64(random_seed));
			})
		}
		lock.as_mut().map(ChaCha20Rng::next_u64).unwrap()
	};
	(
		#[cfg(test)]
		LOCAL_RNG.with(|rng| init(rng.lock())),
		#[cfg(not(test))]
		init(RNG.lock()),
	)
		.0
}
