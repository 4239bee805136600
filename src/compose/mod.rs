//! Function composition utilities.
//!
//! The partial forms in [`crate::iterate`] return functions of the data, so a
//! chain of object transformations can be written as a pipeline without
//! naming the intermediate objects.
//!
//! - [`pipe!`]: Apply functions left-to-right (data flow style)
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`flip`]: Swaps the arguments of a binary function
//!
//! # Examples
//!
//! ```
//! use keyed::iterate::{every_with, filter_with};
//! use keyed::{object, pipe};
//!
//! let stock = object! { "apples" => 3, "pears" => 0, "plums" => 7 };
//!
//! let all_in_stock = pipe!(
//!     &stock,
//!     filter_with(|_count: &u32, name: &String| name.starts_with('p')),
//!     &every_with(|count: &u32, _name: &String| *count > 0),
//! );
//! assert!(!all_in_stock);
//! ```
//!
//! # Laws
//!
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Pipe Definition**: `pipe!(x, f, g) == g(f(x))`

mod pipe_macro;
mod utils;

pub use utils::{flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::pipe;
