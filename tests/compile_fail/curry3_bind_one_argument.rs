//! Binding only one of the two leading arguments does not compile.

use keyed::curry::curry3;

fn main() {
    let clamp = curry3(|low: i32, high: i32, value: i32| value.max(low).min(high));
    let _ = clamp.bind(0);
}
