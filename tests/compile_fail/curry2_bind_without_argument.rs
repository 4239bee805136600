//! Binding no argument to a binary function does not compile.

use keyed::curry::curry2;

fn main() {
    let add = curry2(|first: i32, second: i32| first + second);
    let _ = add.bind();
}
