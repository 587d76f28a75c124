//! Ordered maps and sets based on self-balancing binary search trees, with navigation queries,
//! live range views and bidirectional cursors.
//!
//! Trees are balanced by either the AVL or the red-black scheme, chosen through a type
//! parameter:
//!
//! ```
//! use compare::Natural;
//! use navtree::{RedBlack, TreeSet};
//!
//! let mut avl = TreeSet::new();
//! let mut rb: TreeSet<i32, Natural<i32>, RedBlack> = TreeSet::default();
//!
//! for i in 0..100 {
//!     avl.insert(i);
//!     rb.insert(i);
//! }
//!
//! assert!(avl.iter().eq(rb.iter()));
//! ```

#[macro_use]
extern crate log;

pub mod balance;
pub mod cursor;
mod error;
pub mod map;
mod node;
pub mod set;
pub mod view;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use balance::{Avl, Balance, Color, RedBlack};
pub use cursor::Cursor;
pub use error::Error;
pub use map::{RbTreeMap, TreeMap};
pub use set::{RbTreeSet, TreeSet};
pub use view::View;
