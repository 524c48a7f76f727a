use core::{
	mem::MaybeUninit,
	ptr
};

/// A low-level utility for more ergonomically managing an inline buffer of `N` slots.
///
/// This type does not in anyway inspect the memory that it manages. When dropped it
/// *won't* try to drop its contents. It is up to the user of `RawStaticVec`
/// to keep track of which slots are initialized and to drop them.
pub struct RawStaticVec<T, const N: usize> {
	/// Slots, properly sized and aligned for `N` values of `T`.
	slots: [MaybeUninit<T>; N]
}

impl<T, const N: usize> RawStaticVec<T, N> {
	/// Creates a new buffer where every slot is uninitialized.
	#[inline]
	pub fn new() -> Self {
		RawStaticVec {
			// SAFETY: An uninitialized `[MaybeUninit<_>; N]` is valid.
			slots: unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() }
		}
	}

	/// Number of slots in the buffer.
	#[inline]
	pub const fn capacity(&self) -> usize {
		N
	}

	/// Returns a raw pointer to the first slot.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.slots.as_ptr() as *const T
	}

	/// Returns a raw mutable pointer to the first slot.
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.slots.as_mut_ptr() as *mut T
	}

	/// Returns the slots as a slice of `MaybeUninit<T>`.
	#[inline]
	pub fn slots(&self) -> &[MaybeUninit<T>] {
		&self.slots
	}

	/// Returns the slots as a mutable slice of `MaybeUninit<T>`.
	#[inline]
	pub fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
		&mut self.slots
	}

	/// Writes `value` into the slot at `index` without reading or dropping
	/// whatever the slot held before.
	///
	/// ## Safety
	///
	/// `index` must be lower than `N` and the slot must not hold a live value
	/// (it would be leaked).
	#[inline]
	pub unsafe fn write(&mut self, index: usize, value: T) {
		debug_assert!(index < N);
		ptr::write(self.as_mut_ptr().add(index), value)
	}

	/// Moves the value out of the slot at `index`.
	///
	/// ## Safety
	///
	/// `index` must be lower than `N` and the slot must hold a live value.
	/// After this call the slot must be considered uninitialized.
	#[inline]
	pub unsafe fn read(&self, index: usize) -> T {
		debug_assert!(index < N);
		ptr::read(self.as_ptr().add(index))
	}

	/// Drops the value stored in the slot at `index`.
	///
	/// ## Safety
	///
	/// `index` must be lower than `N` and the slot must hold a live value.
	/// After this call the slot must be considered uninitialized.
	#[inline]
	pub unsafe fn drop_in_place(&mut self, index: usize) {
		debug_assert!(index < N);
		ptr::drop_in_place(self.as_mut_ptr().add(index))
	}
}

impl<T, const N: usize> Default for RawStaticVec<T, N> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slots_are_aligned_for_t() {
		let buffer: RawStaticVec<u64, 3> = RawStaticVec::new();
		assert_eq!(buffer.as_ptr() as usize % core::mem::align_of::<u64>(), 0);
		assert_eq!(core::mem::size_of::<RawStaticVec<u64, 3>>(), 3 * core::mem::size_of::<u64>());
		assert_eq!(buffer.capacity(), 3);
	}

	#[test]
	fn write_then_read_moves_value() {
		let mut buffer: RawStaticVec<String, 2> = RawStaticVec::new();
		unsafe {
			buffer.write(1, "slot".to_string());
			assert_eq!(buffer.read(1), "slot");
		}
	}

	#[test]
	fn zero_slots() {
		let buffer: RawStaticVec<String, 0> = RawStaticVec::new();
		assert_eq!(buffer.capacity(), 0);
		assert!(buffer.slots().is_empty());
	}
}
