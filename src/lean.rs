/// Length stored on a single `u16`.
///
/// This reduces the footprint of containers of small elements
/// (a `lean::StaticString<14>` fits in 16 bytes)
/// at the cost of a maximum capacity of [`u16::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Meta {
	len: u16
}

impl crate::generic::Meta for Meta {
	const MAX_LENGTH: usize = u16::MAX as usize;

	#[inline]
	fn new(len: usize) -> Self {
		assert!(len <= Self::MAX_LENGTH);
		Meta { len: len as u16 }
	}

	#[inline]
	fn len(&self) -> usize {
		self.len as usize
	}

	#[inline]
	fn set_len(&mut self, len: usize) {
		assert!(len <= Self::MAX_LENGTH);
		self.len = len as u16
	}
}

pub type StaticVec<T, const N: usize> = crate::generic::StaticVec<Meta, T, N>;
pub type StaticString<const N: usize> = crate::string::StaticString<Meta, N>;

#[cfg(test)]
mod tests {
	use core::mem::size_of;

	#[test]
	fn lean_layout_is_smaller() {
		assert_eq!(size_of::<super::StaticString<14>>(), 16);
		assert!(size_of::<super::StaticVec<u8, 6>>() < size_of::<crate::wide::StaticVec<u8, 6>>());
	}
}
