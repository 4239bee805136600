//! The partial form does not take the data as a second argument.

use keyed::iterate::map_with;
use keyed::object;

fn main() {
    let object = object! { "a" => 1_i32 };
    let _ = map_with(|value: &i32, _key: &String| value * 2, &object);
}
