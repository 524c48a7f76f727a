use core::{
	borrow::Borrow,
	cmp::Ordering,
	convert::TryFrom,
	fmt,
	hash::{
		Hash,
		Hasher
	},
	ops::{
		Deref,
		DerefMut
	},
	str
};
use crate::{
	generic::{
		capacity_exhausted,
		Meta,
		StaticVec
	},
	CapacityError
};

/// A possible error value when converting a `StaticString` from a UTF-8 byte vector.
///
/// This type is the error type for the [`from_utf8`] method on [`StaticString`].
/// The [`into_bytes`] method will give back the byte vector that was used in the
/// conversion attempt.
///
/// [`from_utf8`]: StaticString::from_utf8
/// [`into_bytes`]: FromUtf8Error::into_bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromUtf8Error<M: Meta, const N: usize> {
	bytes: StaticVec<M, u8, N>,
	error: str::Utf8Error
}

impl<M: Meta, const N: usize> FromUtf8Error<M, N> {
	/// Returns a slice of [`u8`]s bytes that were attempted to convert to a `StaticString`.
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Returns the bytes that were attempted to convert to a `StaticString`.
	pub fn into_bytes(self) -> StaticVec<M, u8, N> {
		self.bytes
	}

	/// Fetch a `Utf8Error` to get more details about the conversion failure.
	pub fn utf8_error(&self) -> str::Utf8Error {
		self.error
	}
}

impl<M: Meta, const N: usize> fmt::Display for FromUtf8Error<M, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.error, f)
	}
}

#[cfg(feature = "std")]
impl<M: Meta + fmt::Debug, const N: usize> std::error::Error for FromUtf8Error<M, N> {}

/// A UTF-8 string with a fixed capacity of `N` bytes, stored inline.
///
/// # Example
/// ```
/// # use static_vec::StaticString;
/// use std::fmt::Write;
///
/// let mut s: StaticString<16> = StaticString::new();
/// s.push_str("Hello");
/// write!(s, ", {}!", "World").unwrap();
/// assert_eq!(s, "Hello, World!");
///
/// assert!(s.try_push_str(" Too long").is_err());
/// assert_eq!(s, "Hello, World!");
/// ```
pub struct StaticString<M: Meta, const N: usize> {
	/// Internal bytes buffer.
	vec: StaticVec<M, u8, N>
}

impl<M: Meta, const N: usize> StaticString<M, N> {
	/// Creates a new empty `StaticString`.
	#[inline]
	pub fn new() -> StaticString<M, N> {
		StaticString { vec: StaticVec::new() }
	}

	/// Converts a vector of bytes to a `StaticString` without checking that the
	/// string contains valid UTF-8.
	///
	/// See the safe version, [`from_utf8`], for more details.
	///
	/// [`from_utf8`]: StaticString::from_utf8
	///
	/// # Safety
	///
	/// This function is unsafe because it does not check that the bytes passed
	/// to it are valid UTF-8. If this constraint is violated, it may cause
	/// memory unsafety issues with future users of the `StaticString`.
	#[inline]
	pub unsafe fn from_utf8_unchecked(bytes: StaticVec<M, u8, N>) -> StaticString<M, N> {
		StaticString { vec: bytes }
	}

	/// Converts a vector of bytes to a `StaticString`.
	///
	/// # Errors
	///
	/// Returns [`Err`] if the slice is not UTF-8 with a description as to why the
	/// provided bytes are not UTF-8. The vector you moved in is also included.
	#[inline]
	pub fn from_utf8(bytes: StaticVec<M, u8, N>) -> Result<StaticString<M, N>, FromUtf8Error<M, N>> {
		match str::from_utf8(&bytes) {
			Ok(..) => Ok(StaticString { vec: bytes }),
			Err(e) => Err(FromUtf8Error { bytes, error: e })
		}
	}

	/// Returns this `StaticString`'s size, in bytes.
	#[inline]
	pub fn len(&self) -> usize {
		self.vec.len()
	}

	/// Returns this `StaticString`'s capacity, in bytes.
	#[inline]
	pub const fn capacity(&self) -> usize {
		N
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.vec.is_empty()
	}

	/// Returns the number of bytes that can still be appended.
	#[inline]
	pub fn remaining_capacity(&self) -> usize {
		self.vec.remaining_capacity()
	}

	/// Converts a `StaticString` into a [`StaticVec`] byte vector.
	#[inline]
	pub fn into_bytes(self) -> StaticVec<M, u8, N> {
		self.vec
	}

	/// Truncates this `StaticString`, removing all contents.
	#[inline]
	pub fn clear(&mut self) {
		self.vec.clear()
	}

	/// Appends the given [`char`] to the end of this `StaticString`.
	///
	/// If the encoded character does not fit, the string is left unchanged
	/// and the character is given back inside the error.
	#[inline]
	pub fn try_push(&mut self, ch: char) -> Result<(), CapacityError<char>> {
		let mut bits = [0; 4];
		let bytes = ch.encode_utf8(&mut bits).as_bytes();
		self.vec.extend_from_slice(bytes).map_err(|_| CapacityError::new(ch))
	}

	/// Appends the given [`char`] to the end of this `StaticString`.
	///
	/// # Panics
	///
	/// Panics if the encoded character does not fit.
	#[inline]
	pub fn push(&mut self, ch: char) {
		if self.try_push(ch).is_err() {
			capacity_exhausted()
		}
	}

	/// Appends a given string slice onto the end of this `StaticString`.
	///
	/// Nothing is appended if the whole slice does not fit.
	#[inline]
	pub fn try_push_str(&mut self, string: &str) -> Result<(), CapacityError> {
		self.vec.extend_from_slice(string.as_bytes())
	}

	/// Appends a given string slice onto the end of this `StaticString`.
	///
	/// # Panics
	///
	/// Panics if the string slice does not fit.
	#[inline]
	pub fn push_str(&mut self, string: &str) {
		if self.try_push_str(string).is_err() {
			capacity_exhausted()
		}
	}

	/// Removes the last character from the string buffer and returns it.
	///
	/// Returns [`None`] if this `StaticString` is empty.
	#[inline]
	pub fn pop(&mut self) -> Option<char> {
		let ch = self.chars().next_back()?;
		let newlen = self.len() - ch.len_utf8();
		unsafe {
			self.vec.set_len(newlen);
		}
		Some(ch)
	}

	/// Returns a byte slice of this `StaticString`'s contents.
	///
	/// The inverse of this method is [`from_utf8`].
	///
	/// [`from_utf8`]: StaticString::from_utf8
	#[inline]
	pub fn as_bytes(&self) -> &[u8] {
		&self.vec
	}

	/// Extracts a string slice containing the entire `StaticString`.
	#[inline]
	pub fn as_str(&self) -> &str {
		self
	}

	/// Converts a `StaticString` into a mutable string slice.
	#[inline]
	pub fn as_mut_str(&mut self) -> &mut str {
		self
	}

	/// Returns a mutable reference to the contents of this `StaticString`.
	///
	/// # Safety
	///
	/// This function is unsafe because it does not check that the bytes passed
	/// to it are valid UTF-8. If this constraint is violated, it may cause
	/// memory unsafety issues with future users of the `StaticString`.
	#[inline]
	pub unsafe fn as_mut_vec(&mut self) -> &mut StaticVec<M, u8, N> {
		&mut self.vec
	}

	/// Shortens this `StaticString` to the specified length.
	///
	/// If `new_len` is greater than the string's current length, this has no
	/// effect.
	///
	/// # Panics
	///
	/// Panics if `new_len` does not lie on a [`char`] boundary.
	#[inline]
	pub fn truncate(&mut self, new_len: usize) {
		if new_len <= self.len() {
			assert!(self.is_char_boundary(new_len));
			self.vec.truncate(new_len)
		}
	}
}

impl<M: Meta, const N: usize> Default for StaticString<M, N> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<M: Meta, const N: usize> Clone for StaticString<M, N> {
	#[inline]
	fn clone(&self) -> Self {
		StaticString { vec: self.vec.clone() }
	}

	#[inline]
	fn clone_from(&mut self, source: &Self) {
		self.vec.clone_from(&source.vec)
	}
}

impl<M: Meta, const N: usize> Deref for StaticString<M, N> {
	type Target = str;

	#[inline]
	fn deref(&self) -> &str {
		unsafe {
			str::from_utf8_unchecked(&self.vec)
		}
	}
}

impl<M: Meta, const N: usize> DerefMut for StaticString<M, N> {
	#[inline]
	fn deref_mut(&mut self) -> &mut str {
		unsafe {
			str::from_utf8_unchecked_mut(&mut self.vec)
		}
	}
}

impl<M: Meta, const N: usize> AsRef<str> for StaticString<M, N> {
	#[inline]
	fn as_ref(&self) -> &str {
		self
	}
}

impl<M: Meta, const N: usize> AsRef<[u8]> for StaticString<M, N> {
	#[inline]
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl<M: Meta, const N: usize> Borrow<str> for StaticString<M, N> {
	#[inline]
	fn borrow(&self) -> &str {
		self
	}
}

impl<'s, M: Meta, const N: usize> TryFrom<&'s str> for StaticString<M, N> {
	type Error = CapacityError;

	#[inline]
	fn try_from(s: &'s str) -> Result<StaticString<M, N>, CapacityError> {
		let mut string = StaticString::new();
		string.try_push_str(s)?;
		Ok(string)
	}
}

impl<M: Meta, const N: usize> str::FromStr for StaticString<M, N> {
	type Err = CapacityError;

	#[inline]
	fn from_str(s: &str) -> Result<StaticString<M, N>, CapacityError> {
		StaticString::try_from(s)
	}
}

impl<M: Meta, const N: usize> fmt::Write for StaticString<M, N> {
	#[inline]
	fn write_str(&mut self, s: &str) -> fmt::Result {
		self.try_push_str(s).map_err(|_| fmt::Error)
	}

	#[inline]
	fn write_char(&mut self, c: char) -> fmt::Result {
		self.try_push(c).map_err(|_| fmt::Error)
	}
}

impl<M: Meta, P: Meta, const N: usize, const O: usize> PartialEq<StaticString<P, O>> for StaticString<M, N> {
	#[inline]
	fn eq(&self, other: &StaticString<P, O>) -> bool {
		self.as_str() == other.as_str()
	}
}

impl<M: Meta, const N: usize> PartialEq<str> for StaticString<M, N> {
	#[inline]
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl<'b, M: Meta, const N: usize> PartialEq<&'b str> for StaticString<M, N> {
	#[inline]
	fn eq(&self, other: &&'b str) -> bool {
		self.as_str() == *other
	}
}

impl<M: Meta, const N: usize> PartialEq<StaticString<M, N>> for str {
	#[inline]
	fn eq(&self, other: &StaticString<M, N>) -> bool {
		self == other.as_str()
	}
}

impl<'b, M: Meta, const N: usize> PartialEq<StaticString<M, N>> for &'b str {
	#[inline]
	fn eq(&self, other: &StaticString<M, N>) -> bool {
		*self == other.as_str()
	}
}

#[cfg(feature = "std")]
impl<M: Meta, const N: usize> PartialEq<std::string::String> for StaticString<M, N> {
	#[inline]
	fn eq(&self, other: &std::string::String) -> bool {
		self.as_str() == other
	}
}

impl<M: Meta, const N: usize> Eq for StaticString<M, N> {}

impl<M: Meta, const N: usize> PartialOrd for StaticString<M, N> {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<M: Meta, const N: usize> Ord for StaticString<M, N> {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		self.as_str().cmp(other.as_str())
	}
}

impl<M: Meta, const N: usize> Hash for StaticString<M, N> {
	#[inline]
	fn hash<H: Hasher>(&self, state: &mut H) {
		(**self).hash(state)
	}
}

impl<M: Meta, const N: usize> fmt::Display for StaticString<M, N> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&**self, f)
	}
}

impl<M: Meta, const N: usize> fmt::Debug for StaticString<M, N> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&**self, f)
	}
}

#[cfg(test)]
mod tests {
	use core::fmt::Write;
	use crate::wide::{
		StaticString,
		StaticVec
	};

	#[test]
	fn multibyte_push_is_all_or_nothing() {
		let mut s: StaticString<4> = StaticString::new();
		s.push_str("ab");
		assert_eq!(s.try_push('é'), Ok(()));
		assert_eq!(s.try_push('€').unwrap_err().into_inner(), '€');
		assert_eq!(s, "abé");
		assert_eq!(s.pop(), Some('é'));
		assert_eq!(s.len(), 2);
	}

	#[test]
	fn write_fails_on_exhaustion() {
		let mut s: StaticString<5> = StaticString::new();
		assert!(write!(s, "{}", 1234).is_ok());
		assert!(write!(s, "{}", 56).is_err());
		assert!(s.starts_with("1234"));
	}

	#[test]
	fn from_utf8_gives_bytes_back() {
		let bytes: StaticVec<u8, 4> = [0xff, 0x41].iter().copied().collect();
		let error = StaticString::from_utf8(bytes).unwrap_err();
		assert_eq!(error.as_bytes(), [0xff, 0x41]);
		assert_eq!(error.utf8_error().valid_up_to(), 0);

		let bytes: StaticVec<u8, 4> = b"ok".iter().copied().collect();
		assert_eq!(StaticString::from_utf8(bytes).unwrap(), "ok");
	}

	#[test]
	#[should_panic]
	fn truncate_off_char_boundary_panics() {
		let mut s: StaticString<8> = "é".parse().unwrap();
		s.truncate(1);
	}

	#[test]
	fn parse_rejects_overlong_input() {
		assert!("too long".parse::<StaticString<4>>().is_err());
		let s: StaticString<8> = "fits".parse().unwrap();
		assert_eq!(s.remaining_capacity(), 4);
	}
}
