use core::{
	borrow::{
		Borrow,
		BorrowMut
	},
	cmp::Ordering,
	convert::TryFrom,
	fmt,
	hash::{
		Hash,
		Hasher
	},
	iter::FusedIterator,
	mem::{
		self,
		MaybeUninit
	},
	ops::{
		Deref,
		DerefMut
	},
	slice
};
use crate::{
	raw::RawStaticVec,
	CapacityError
};

/// Metadata representing the length of the array.
///
/// This crate provides two implementation of this trait:
/// [`wide::Meta`](crate::wide::Meta) stores the length in a `usize`,
/// so any capacity can be used.
/// [`lean::Meta`](crate::lean::Meta) stores the length in a `u16`,
/// which saves space for small element types but limits the capacity to [`u16::MAX`].
pub trait Meta: Copy {
	/// Maximum length (and capacity) of the array using this metadata format.
	const MAX_LENGTH: usize;

	/// Create a new metadata from an array's length.
	fn new(len: usize) -> Self;

	/// Get the length of the array.
	fn len(&self) -> usize;

	/// Set the new length of the array.
	fn set_len(&mut self, len: usize);
}

/// A vector with a fixed capacity `N`, storing its elements inline.
///
/// The elements are stored in an uninitialized buffer of `N` slots that is part of the
/// `StaticVec` value itself: creating, filling and dropping a `StaticVec` never allocates.
/// Only the first [`len`](StaticVec::len) slots hold live elements.
/// Elements are written one by one when inserted and dropped one by one when removed,
/// so no element is ever constructed for the unused slots.
///
/// Inserting into a full vector is not an error condition:
/// [`emplace_back`](StaticVec::emplace_back) returns `false` and
/// [`try_push`](StaticVec::try_push) gives the element back.
///
/// # Example
/// ```
/// # use static_vec::StaticVec;
/// let mut vec: StaticVec<String, 3> = StaticVec::new();
/// assert!(vec.emplace_back(|| "Hello".to_string()));
/// assert!(vec.emplace_back(|| "Embedded".to_string()));
/// assert!(vec.emplace_back(|| "World".to_string()));
/// assert!(!vec.emplace_back(|| "Overflow".to_string()));
///
/// assert!(vec.pop_back());
/// assert_eq!(vec, ["Hello", "Embedded"]);
/// ```
pub struct StaticVec<M: Meta, T, const N: usize> {
	/// Metadata storing the length of the array.
	meta: M,

	/// Inline slots. Only the first `meta.len()` are initialized.
	data: RawStaticVec<T, N>
}

impl<M: Meta, T, const N: usize> Drop for StaticVec<M, T, N> {
	fn drop(&mut self) {
		self.clear()
	}
}

impl<M: Meta, T, const N: usize> StaticVec<M, T, N> {
	/// Capacity of the vector.
	pub const CAPACITY: usize = N;

	const CAPACITY_FITS_META: () = assert!(N <= M::MAX_LENGTH, "capacity exceeds the maximum length of the metadata format");

	/// Creates a new empty `StaticVec`.
	///
	/// No element is constructed.
	///
	/// # Example
	/// ```
	/// # use static_vec::StaticVec;
	/// let vec: StaticVec<String, 8> = StaticVec::new();
	/// assert_eq!(vec.len(), 0);
	/// assert_eq!(vec.capacity(), 8);
	/// ```
	// TODO make this function `const` once trait methods can be called in `const fn` on stable.
	#[inline]
	pub fn new() -> Self {
		#[allow(clippy::let_unit_value)]
		let () = Self::CAPACITY_FITS_META;

		StaticVec {
			meta: M::new(0),
			data: RawStaticVec::new()
		}
	}

	/// Creates a new vector by moving every element out of `other`.
	///
	/// Elements are moved one by one, in ascending index order.
	/// Afterwards `other` is empty and can be reused.
	///
	/// # Example
	/// ```
	/// # use static_vec::StaticVec;
	/// let mut source: StaticVec<String, 4> = ["a", "b"].iter().map(|s| s.to_string()).collect();
	/// let vec = StaticVec::take_from(&mut source);
	///
	/// assert_eq!(vec, ["a", "b"]);
	/// assert!(source.is_empty());
	/// ```
	#[inline]
	pub fn take_from(other: &mut Self) -> Self {
		let mut vec = Self::new();
		vec.move_elements_from(other);
		vec
	}

	/// Replaces the content of this vector by the elements of `other`.
	///
	/// The current elements are dropped first (see [`clear`](StaticVec::clear)),
	/// then the elements of `other` are moved in one by one, in ascending index order.
	/// Afterwards `other` is empty and can be reused.
	#[inline]
	pub fn move_from(&mut self, other: &mut Self) {
		self.clear();
		self.move_elements_from(other);
	}

	/// Moves all the elements of `other` into the empty `self`.
	fn move_elements_from(&mut self, other: &mut Self) {
		debug_assert!(self.is_empty());
		let len = other.len();

		unsafe {
			// `other` gives up ownership before anything is read.
			other.set_len(0);
			for i in 0..len {
				self.data.write(i, other.data.read(i));
			}
			self.set_len(len);
		}
	}

	/// Returns the number of elements in the vector.
	#[inline]
	pub fn len(&self) -> usize {
		self.meta.len()
	}

	/// Forces the length of the vector to `len`.
	///
	/// ## Safety
	///
	/// `len` must be lower or equal to `N` and
	/// the elements at `old_len..len` must be initialized.
	/// Elements at `len..old_len` are not dropped.
	#[inline]
	pub unsafe fn set_len(&mut self, len: usize) {
		debug_assert!(len <= N);
		self.meta.set_len(len)
	}

	/// Returns the number of elements the vector can hold, `N`.
	#[inline]
	pub const fn capacity(&self) -> usize {
		N
	}

	/// Returns `true` if the vector contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns `true` if the vector contains `N` elements.
	#[inline]
	pub fn is_full(&self) -> bool {
		self.len() == N
	}

	/// Returns the number of elements that can still be inserted.
	#[inline]
	pub fn remaining_capacity(&self) -> usize {
		N - self.len()
	}

	/// Returns a raw pointer to the vector's buffer.
	///
	/// The caller must ensure that the vector outlives the pointer this
	/// function returns, or else it will end up pointing to garbage.
	/// Since the buffer is stored inline, moving the vector also
	/// invalidates the pointer.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.data.as_ptr()
	}

	/// Returns an unsafe mutable pointer to the vector's buffer.
	///
	/// Same restrictions as [`as_ptr`](StaticVec::as_ptr).
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.data.as_mut_ptr()
	}

	/// Extracts a slice containing the entire vector.
	///
	/// Equivalent to `&s[..]`.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slice::from_raw_parts(self.as_ptr(), self.len())
		}
	}

	/// Extracts a mutable slice of the entire vector.
	///
	/// Equivalent to `&mut s[..]`.
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe {
			slice::from_raw_parts_mut(self.as_mut_ptr(), self.len())
		}
	}

	/// Returns the remaining spare capacity of the vector as a slice of
	/// `MaybeUninit<T>`.
	///
	/// The returned slice can be used to fill the vector with data before marking
	/// the data as initialized using the [`set_len`] method.
	///
	/// [`set_len`]: StaticVec::set_len
	#[inline]
	pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
		let len = self.len();
		&mut self.data.slots_mut()[len..]
	}

	/// Constructs a new element at the end of the vector.
	///
	/// If the vector is full, `f` is not called and `false` is returned.
	/// Otherwise the value returned by `f` is written in the first free slot
	/// and `true` is returned.
	///
	/// If `f` panics, the vector is left untouched.
	///
	/// # Example
	/// ```
	/// # use static_vec::StaticVec;
	/// let mut vec: StaticVec<String, 1> = StaticVec::new();
	/// assert!(vec.emplace_back(|| String::from("first")));
	/// assert!(!vec.emplace_back(|| unreachable!()));
	/// ```
	#[inline]
	pub fn emplace_back<F>(&mut self, f: F) -> bool where F: FnOnce() -> T {
		if self.is_full() {
			return false
		}

		let value = f();
		unsafe {
			self.push_unchecked(value);
		}
		true
	}

	/// Constructs a new element at the end of the vector using a fallible constructor.
	///
	/// Returns `Ok(false)` without calling `f` if the vector is full.
	/// If `f` fails, its error is returned and the vector is left untouched.
	///
	/// # Example
	/// ```
	/// # use static_vec::StaticVec;
	/// let mut vec: StaticVec<u8, 2> = StaticVec::new();
	/// assert_eq!(vec.try_emplace_back(|| "12".parse::<u8>()), Ok(true));
	/// assert!(vec.try_emplace_back(|| "1024".parse::<u8>()).is_err());
	/// assert_eq!(vec, [12]);
	/// ```
	#[inline]
	pub fn try_emplace_back<F, E>(&mut self, f: F) -> Result<bool, E> where F: FnOnce() -> Result<T, E> {
		if self.is_full() {
			return Ok(false)
		}

		let value = f()?;
		unsafe {
			self.push_unchecked(value);
		}
		Ok(true)
	}

	/// Appends an element to the back of the vector.
	///
	/// If the vector is full, the element is given back inside the error.
	#[inline]
	pub fn try_push(&mut self, value: T) -> Result<(), CapacityError<T>> {
		if self.is_full() {
			return Err(CapacityError::new(value))
		}

		unsafe {
			self.push_unchecked(value);
		}
		Ok(())
	}

	/// Appends an element to the back of the vector.
	///
	/// # Panics
	///
	/// Panics if the vector is full.
	/// See [`try_push`](StaticVec::try_push) for a non-panicking version.
	#[inline]
	pub fn push(&mut self, value: T) {
		if self.try_push(value).is_err() {
			capacity_exhausted()
		}
	}

	/// Appends an element to the back of the vector without checking the capacity.
	///
	/// ## Safety
	///
	/// The vector must not be full.
	#[inline]
	pub unsafe fn push_unchecked(&mut self, value: T) {
		let len = self.len();
		self.data.write(len, value);
		self.set_len(len + 1);
	}

	/// Drops the last element of the vector.
	///
	/// Returns `false` if the vector is empty, in which case nothing happens.
	///
	/// The length is decreased before the element is dropped,
	/// so a panicking destructor never leads to a second drop.
	#[inline]
	pub fn pop_back(&mut self) -> bool {
		let len = self.len();
		if len == 0 {
			return false
		}

		unsafe {
			self.set_len(len - 1);
			self.data.drop_in_place(len - 1);
		}
		true
	}

	/// Removes the last element from a vector and returns it, or [`None`] if it
	/// is empty.
	#[inline]
	pub fn pop(&mut self) -> Option<T> {
		let len = self.len();
		if len == 0 {
			None
		} else {
			unsafe {
				self.set_len(len - 1);
				Some(self.data.read(len - 1))
			}
		}
	}

	/// Shortens the vector, keeping the first `len` elements and dropping
	/// the rest, last element first.
	///
	/// If `len` is greater than the vector's current length, this has no
	/// effect.
	#[inline]
	pub fn truncate(&mut self, len: usize) {
		while self.len() > len {
			self.pop_back();
		}
	}

	/// Clears the vector, dropping all values from the last one to the first one.
	#[inline]
	pub fn clear(&mut self) {
		self.truncate(0)
	}

	/// Clones and appends all the elements of `other`.
	///
	/// Nothing is appended if the elements do not all fit.
	///
	/// # Example
	/// ```
	/// # use static_vec::StaticVec;
	/// let mut vec: StaticVec<u32, 4> = StaticVec::new();
	/// vec.extend_from_slice(&[1, 2, 3]).unwrap();
	/// assert!(vec.extend_from_slice(&[4, 5]).is_err());
	/// assert_eq!(vec, [1, 2, 3]);
	/// ```
	pub fn extend_from_slice(&mut self, other: &[T]) -> Result<(), CapacityError> where T: Clone {
		if other.len() > self.remaining_capacity() {
			return Err(CapacityError::new(()))
		}

		for value in other {
			unsafe {
				self.push_unchecked(value.clone());
			}
		}
		Ok(())
	}
}

// One central function responsible for reporting exhausted capacities.
#[cold]
#[inline(never)]
pub(crate) fn capacity_exhausted() -> ! {
	panic!("capacity exhausted");
}

impl<M: Meta, T, const N: usize> Default for StaticVec<M, T, N> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<M: Meta, T: Clone, const N: usize> Clone for StaticVec<M, T, N> {
	fn clone(&self) -> StaticVec<M, T, N> {
		let mut vec = StaticVec::new();
		for value in self {
			unsafe {
				vec.push_unchecked(value.clone());
			}
		}
		vec
	}

	fn clone_from(&mut self, source: &Self) {
		self.clear();
		for value in source {
			unsafe {
				self.push_unchecked(value.clone());
			}
		}
	}
}

impl<M: Meta, T, const N: usize> Deref for StaticVec<M, T, N> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<M: Meta, T, const N: usize> DerefMut for StaticVec<M, T, N> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		self.as_mut_slice()
	}
}

impl<'v, M: Meta, T, const N: usize> IntoIterator for &'v StaticVec<M, T, N> {
	type Item = &'v T;
	type IntoIter = slice::Iter<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.as_slice().iter()
	}
}

impl<'v, M: Meta, T, const N: usize> IntoIterator for &'v mut StaticVec<M, T, N> {
	type Item = &'v mut T;
	type IntoIter = slice::IterMut<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.as_mut_slice().iter_mut()
	}
}

/// An iterator that moves out of a [`StaticVec`].
///
/// Elements that are not consumed are dropped with the iterator, last one first.
pub struct IntoIter<T, const N: usize> {
	/// Index of the next element to yield from the front.
	start: usize,

	/// Index after the next element to yield from the back.
	end: usize,

	data: RawStaticVec<T, N>
}

impl<T, const N: usize> IntoIter<T, N> {
	/// Returns the remaining items of this iterator as a slice.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slice::from_raw_parts(self.data.as_ptr().add(self.start), self.end - self.start)
		}
	}

	/// Returns the remaining items of this iterator as a mutable slice.
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe {
			slice::from_raw_parts_mut(self.data.as_mut_ptr().add(self.start), self.end - self.start)
		}
	}
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
	type Item = T;

	#[inline]
	fn next(&mut self) -> Option<T> {
		if self.start < self.end {
			let i = self.start;
			self.start += 1;
			Some(unsafe { self.data.read(i) })
		} else {
			None
		}
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.end - self.start;
		(len, Some(len))
	}
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
	#[inline]
	fn next_back(&mut self) -> Option<T> {
		if self.start < self.end {
			self.end -= 1;
			Some(unsafe { self.data.read(self.end) })
		} else {
			None
		}
	}
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
	fn drop(&mut self) {
		// only drop remaining elements.
		while self.end > self.start {
			self.end -= 1;
			unsafe {
				self.data.drop_in_place(self.end)
			}
		}
	}
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
	}
}

impl<M: Meta, T, const N: usize> IntoIterator for StaticVec<M, T, N> {
	type Item = T;
	type IntoIter = IntoIter<T, N>;

	fn into_iter(mut self) -> Self::IntoIter {
		let len = self.len();
		unsafe {
			// the elements now belong to the iterator.
			self.set_len(0);
		}

		IntoIter {
			start: 0,
			end: len,
			data: mem::take(&mut self.data)
		}
	}
}

impl<M: Meta, T, const N: usize> Extend<T> for StaticVec<M, T, N> {
	/// Appends every element of the iterator.
	///
	/// # Panics
	///
	/// Panics if the vector becomes full before the iterator is exhausted.
	#[inline]
	fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
		for value in iterable {
			self.push(value)
		}
	}
}

impl<'a, M: Meta, T: 'a + Copy, const N: usize> Extend<&'a T> for StaticVec<M, T, N> {
	#[inline]
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iterable: I) {
		self.extend(iterable.into_iter().copied())
	}
}

impl<M: Meta, T, const N: usize> FromIterator<T> for StaticVec<M, T, N> {
	/// Collects the iterator into a new vector.
	///
	/// # Panics
	///
	/// Panics if the iterator yields more than `N` elements.
	#[inline]
	fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
		let mut vec = StaticVec::new();
		vec.extend(iterable);
		vec
	}
}

impl<'s, M: Meta, T: Clone, const N: usize> TryFrom<&'s [T]> for StaticVec<M, T, N> {
	type Error = CapacityError;

	#[inline]
	fn try_from(s: &'s [T]) -> Result<Self, CapacityError> {
		let mut vec = StaticVec::new();
		vec.extend_from_slice(s)?;
		Ok(vec)
	}
}

impl<M: Meta, T: fmt::Debug, const N: usize> fmt::Debug for StaticVec<M, T, N> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&**self, f)
	}
}

impl<M: Meta, T: Hash, const N: usize> Hash for StaticVec<M, T, N> {
	#[inline]
	fn hash<H: Hasher>(&self, state: &mut H) {
		Hash::hash(&**self, state)
	}
}

impl<M: Meta, T, const N: usize> AsRef<StaticVec<M, T, N>> for StaticVec<M, T, N> {
	#[inline]
	fn as_ref(&self) -> &StaticVec<M, T, N> {
		self
	}
}

impl<M: Meta, T, const N: usize> AsMut<StaticVec<M, T, N>> for StaticVec<M, T, N> {
	#[inline]
	fn as_mut(&mut self) -> &mut StaticVec<M, T, N> {
		self
	}
}

impl<M: Meta, T, const N: usize> AsRef<[T]> for StaticVec<M, T, N> {
	#[inline]
	fn as_ref(&self) -> &[T] {
		self
	}
}

impl<M: Meta, T, const N: usize> AsMut<[T]> for StaticVec<M, T, N> {
	#[inline]
	fn as_mut(&mut self) -> &mut [T] {
		self
	}
}

impl<M: Meta, T, const N: usize> Borrow<[T]> for StaticVec<M, T, N> {
	#[inline]
	fn borrow(&self) -> &[T] {
		self
	}
}

impl<M: Meta, T, const N: usize> BorrowMut<[T]> for StaticVec<M, T, N> {
	#[inline]
	fn borrow_mut(&mut self) -> &mut [T] {
		self
	}
}

macro_rules! impl_slice_eq1 {
	([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
		impl<$($vars)*> PartialEq<$rhs> for $lhs where T: PartialEq<U> {
			#[inline]
			fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
			#[inline]
			fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
		}
	}
}

impl_slice_eq1! { [T, U, O: Meta, P: Meta, const N: usize, const M: usize] StaticVec<O, T, N>, StaticVec<P, U, M> }
impl_slice_eq1! { [T, U, M: Meta, const N: usize] StaticVec<M, T, N>, [U] }
impl_slice_eq1! { ['b, T, U, M: Meta, const N: usize] StaticVec<M, T, N>, &'b [U] }
impl_slice_eq1! { ['b, T, U, M: Meta, const N: usize] StaticVec<M, T, N>, &'b mut [U] }
impl_slice_eq1! { ['b, T, U, M: Meta, const N: usize] &'b [T], StaticVec<M, U, N> }
impl_slice_eq1! { ['b, T, U, M: Meta, const N: usize] &'b mut [T], StaticVec<M, U, N> }
impl_slice_eq1! { [T, U, M: Meta, const N: usize, const O: usize] StaticVec<M, T, N>, [U; O] }
impl_slice_eq1! { ['b, T, U, M: Meta, const N: usize, const O: usize] StaticVec<M, T, N>, &'b [U; O] }
impl_slice_eq1! { [T, U, M: Meta, const N: usize, const O: usize] [T; O], StaticVec<M, U, N> }
#[cfg(feature = "std")]
impl_slice_eq1! { [T, U, M: Meta, const N: usize] StaticVec<M, T, N>, std::vec::Vec<U> }
#[cfg(feature = "std")]
impl_slice_eq1! { [T, U, M: Meta, const N: usize] std::vec::Vec<T>, StaticVec<M, U, N> }

impl<M: Meta, T: Eq, const N: usize> Eq for StaticVec<M, T, N> {}

impl<M: Meta, T: PartialOrd, const N: usize> PartialOrd for StaticVec<M, T, N> {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		PartialOrd::partial_cmp(&**self, &**other)
	}
}

impl<M: Meta, T: Ord, const N: usize> Ord for StaticVec<M, T, N> {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		Ord::cmp(&**self, &**other)
	}
}

#[cfg(test)]
mod tests {
	use std::{
		cell::RefCell,
		rc::Rc
	};
	use crate::wide::StaticVec;

	/// Records its id in a shared log when dropped.
	struct Tracked {
		id: usize,
		log: Rc<RefCell<Vec<usize>>>
	}

	impl Drop for Tracked {
		fn drop(&mut self) {
			self.log.borrow_mut().push(self.id)
		}
	}

	fn tracked<const N: usize>(count: usize, log: &Rc<RefCell<Vec<usize>>>) -> StaticVec<Tracked, N> {
		let mut vec = StaticVec::new();
		for id in 0..count {
			assert!(vec.emplace_back(|| Tracked { id, log: log.clone() }));
		}
		vec
	}

	#[test]
	fn drop_runs_once_per_live_element_in_descending_order() {
		let log = Rc::new(RefCell::new(Vec::new()));
		drop(tracked::<5>(3, &log));
		assert_eq!(*log.borrow(), [2, 1, 0]);
	}

	#[test]
	fn truncate_drops_suffix_last_first() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let mut vec = tracked::<4>(4, &log);
		vec.truncate(1);
		assert_eq!(*log.borrow(), [3, 2, 1]);
		vec.truncate(3);
		assert_eq!(vec.len(), 1);
		assert_eq!(*log.borrow(), [3, 2, 1]);
	}

	#[test]
	fn move_does_not_drop_moved_elements() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let mut source = tracked::<3>(3, &log);
		let mut target = tracked::<3>(1, &log);
		target[0].id = 10;

		target.move_from(&mut source);
		assert_eq!(*log.borrow(), [10]);
		assert!(source.is_empty());
		assert_eq!(target.iter().map(|t| t.id).collect::<Vec<_>>(), [0, 1, 2]);

		drop(source);
		assert_eq!(*log.borrow(), [10]);
	}

	#[test]
	fn failed_emplace_leaves_vector_untouched() {
		let mut vec: StaticVec<String, 2> = StaticVec::new();
		vec.push("a".to_string());

		let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
			vec.emplace_back(|| panic!("constructor failed"));
		}));
		assert!(result.is_err());
		assert_eq!(vec, ["a"]);
		assert!(vec.emplace_back(|| "b".to_string()));
	}

	#[test]
	fn partially_consumed_into_iter_drops_rest() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let mut iter = tracked::<4>(4, &log).into_iter();

		let first = iter.next().unwrap();
		assert_eq!(first.id, 0);
		assert_eq!(iter.next_back().unwrap().id, 3);
		assert_eq!(iter.len(), 2);
		assert_eq!(*log.borrow(), [3]);

		drop(iter);
		assert_eq!(*log.borrow(), [3, 2, 1]);
		drop(first);
		assert_eq!(*log.borrow(), [3, 2, 1, 0]);
	}

	#[test]
	fn spare_capacity_can_be_filled() {
		let mut vec: StaticVec<u32, 4> = StaticVec::new();
		vec.push(1);
		let spare = vec.spare_capacity_mut();
		assert_eq!(spare.len(), 3);
		spare[0].write(2);
		unsafe {
			vec.set_len(2);
		}
		assert_eq!(vec, [1, 2]);
	}
}
