use core::fmt;

/// Error returned when an element does not fit in a full container.
///
/// The rejected element is handed back so that no value is lost:
/// ```
/// # use static_vec::StaticVec;
/// let mut vec: StaticVec<String, 1> = StaticVec::new();
/// vec.push("kept".to_string());
///
/// let error = vec.try_push("rejected".to_string()).unwrap_err();
/// assert_eq!(error.into_inner(), "rejected");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CapacityError<T = ()> {
	element: T
}

impl<T> CapacityError<T> {
	/// Creates a new error holding the rejected element.
	#[inline]
	pub const fn new(element: T) -> CapacityError<T> {
		CapacityError { element }
	}

	/// Returns a reference to the rejected element.
	#[inline]
	pub fn element(&self) -> &T {
		&self.element
	}

	/// Returns the rejected element.
	#[inline]
	pub fn into_inner(self) -> T {
		self.element
	}

	/// Forgets the rejected element.
	#[inline]
	pub fn simplify(self) -> CapacityError {
		CapacityError { element: () }
	}
}

const CAPACITY_EXHAUSTED: &str = "insufficient capacity";

impl<T> fmt::Debug for CapacityError<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "CapacityError: {}", CAPACITY_EXHAUSTED)
	}
}

impl<T> fmt::Display for CapacityError<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(CAPACITY_EXHAUSTED)
	}
}

#[cfg(feature = "std")]
impl<T> std::error::Error for CapacityError<T> {}
