#![cfg(feature = "serde")]

use serde::{
	Deserialize,
	Serialize
};
use static_vec::{
	lean,
	StaticString,
	StaticVec
};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Frame {
	id: u16,
	tags: StaticVec<StaticString<8>, 3>,
	samples: lean::StaticVec<i32, 4>
}

#[test]
fn serialize_as_sequence() {
	let vec: StaticVec<u8, 4> = [1, 2, 3].iter().copied().collect();
	assert_eq!(serde_json::to_string(&vec).unwrap(), "[1,2,3]");

	let name: StaticString<8> = "sensor".parse().unwrap();
	assert_eq!(serde_json::to_string(&name).unwrap(), r#""sensor""#);
}

#[test]
fn nested_round_trip() {
	let json = r#"{"id":7,"tags":["hot","wet"],"samples":[-1,0,1]}"#;
	let frame: Frame = serde_json::from_str(json).unwrap();
	assert_eq!(frame.id, 7);
	assert_eq!(frame.tags, [StaticString::<8>::try_from("hot").unwrap(), "wet".parse().unwrap()]);
	assert_eq!(frame.samples, [-1, 0, 1]);
	assert_eq!(serde_json::to_string(&frame).unwrap(), json);
}

#[test]
fn too_many_elements_is_rejected() {
	let error = serde_json::from_str::<StaticVec<u8, 2>>("[1,2,3]").unwrap_err();
	assert!(error.to_string().contains("invalid length 3"));

	assert!(serde_json::from_str::<StaticString<2>>(r#""abc""#).is_err());
}
