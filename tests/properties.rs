use proptest::prelude::*;
use static_vec::StaticVec;

const CAPACITY: usize = 8;

proptest! {
	#[test]
	fn emplace_back_grows_until_full(values in prop::collection::vec(any::<u32>(), 0..16)) {
		let mut vec: StaticVec<u32, CAPACITY> = StaticVec::new();

		for (i, value) in values.iter().enumerate() {
			let inserted = vec.emplace_back(|| *value);
			prop_assert_eq!(inserted, i < CAPACITY);
			prop_assert_eq!(vec.len(), (i + 1).min(CAPACITY));
		}

		let expected = &values[..values.len().min(CAPACITY)];
		prop_assert_eq!(vec.as_slice(), expected);
	}

	#[test]
	fn pop_back_len_times_empties(values in prop::collection::vec(".{0,8}", 0..=CAPACITY)) {
		let mut vec: StaticVec<String, CAPACITY> = values.iter().cloned().collect();

		for _ in 0..values.len() {
			prop_assert!(vec.pop_back());
		}
		prop_assert_eq!(vec.len(), 0);
		prop_assert!(!vec.pop_back());
		prop_assert_eq!(vec.len(), 0);
	}

	#[test]
	fn clone_then_mutate_is_independent(values in prop::collection::vec(".{0,8}", 0..=CAPACITY)) {
		let original: StaticVec<String, CAPACITY> = values.iter().cloned().collect();
		let mut copy = original.clone();

		for i in 0..original.len() {
			prop_assert_eq!(&copy[i], &original[i]);
		}

		for value in copy.iter_mut() {
			value.push('#');
		}
		prop_assert_eq!(original.as_slice(), values.as_slice());
	}

	#[test]
	fn take_from_moves_everything(values in prop::collection::vec(".{0,8}", 0..=CAPACITY)) {
		let mut source: StaticVec<String, CAPACITY> = values.iter().cloned().collect();
		let target = StaticVec::take_from(&mut source);

		prop_assert_eq!(target.len(), values.len());
		prop_assert_eq!(target.as_slice(), values.as_slice());
		prop_assert_eq!(source.len(), 0);
	}

	#[test]
	fn truncate_keeps_prefix(values in prop::collection::vec(any::<i64>(), 0..=CAPACITY), len in 0..=CAPACITY + 2) {
		let mut vec: StaticVec<i64, CAPACITY> = values.iter().copied().collect();
		vec.truncate(len);

		let kept = len.min(values.len());
		prop_assert_eq!(vec.as_slice(), &values[..kept]);
	}
}
