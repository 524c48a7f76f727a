/// Length stored as a plain `usize`.
///
/// Any capacity can be used with this format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Meta {
	len: usize
}

impl crate::generic::Meta for Meta {
	const MAX_LENGTH: usize = usize::MAX;

	#[inline]
	fn new(len: usize) -> Self {
		Meta { len }
	}

	#[inline]
	fn len(&self) -> usize {
		self.len
	}

	#[inline]
	fn set_len(&mut self, len: usize) {
		self.len = len
	}
}

pub type StaticVec<T, const N: usize> = crate::generic::StaticVec<Meta, T, N>;
pub type StaticString<const N: usize> = crate::string::StaticString<Meta, N>;
