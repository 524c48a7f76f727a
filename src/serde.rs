use core::{
	fmt,
	marker::PhantomData
};
use serde::{
	de::{
		Error,
		SeqAccess,
		Visitor
	},
	Deserialize,
	Deserializer,
	Serialize,
	Serializer
};
use crate::generic::{
	Meta,
	StaticVec
};
use crate::string::StaticString;

impl<M: Meta, T: Serialize, const N: usize> Serialize for StaticVec<M, T, N> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(self.iter())
	}
}

struct StaticVecVisitor<M, T, const N: usize>(PhantomData<(M, T)>);

impl<'de, M: Meta, T: Deserialize<'de>, const N: usize> Visitor<'de> for StaticVecVisitor<M, T, N> {
	type Value = StaticVec<M, T, N>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "a sequence of at most {} elements", N)
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
		let mut vec = StaticVec::new();
		while let Some(value) = seq.next_element()? {
			if vec.try_push(value).is_err() {
				return Err(A::Error::invalid_length(N + 1, &self))
			}
		}

		Ok(vec)
	}
}

impl<'de, M: Meta, T: Deserialize<'de>, const N: usize> Deserialize<'de> for StaticVec<M, T, N> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_seq(StaticVecVisitor(PhantomData))
	}
}

impl<M: Meta, const N: usize> Serialize for StaticString<M, N> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self)
	}
}

struct StaticStringVisitor<M, const N: usize>(PhantomData<M>);

impl<'de, M: Meta, const N: usize> Visitor<'de> for StaticStringVisitor<M, N> {
	type Value = StaticString<M, N>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "a string of at most {} bytes", N)
	}

	fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
		let mut string = StaticString::new();
		match string.try_push_str(v) {
			Ok(()) => Ok(string),
			Err(_) => Err(E::invalid_length(v.len(), &self))
		}
	}
}

impl<'de, M: Meta, const N: usize> Deserialize<'de> for StaticString<M, N> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_str(StaticStringVisitor(PhantomData))
	}
}
