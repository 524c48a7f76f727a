//! Fills a three-slot vector of strings, prints it, and removes one element.
//!
//! Run with `cargo run --example hello`.
use static_vec::StaticVec;

fn main() {
	let mut vec: StaticVec<String, 3> = StaticVec::new();

	vec.emplace_back(|| String::from("Hello"));
	vec.emplace_back(|| String::from("Embedded"));
	vec.emplace_back(|| String::from("World"));

	for i in 0..vec.len() {
		println!("{}", vec[i]);
	}

	vec.pop_back();

	println!("Size: {}", vec.len());
}
