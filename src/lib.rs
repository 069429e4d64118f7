//! Seqscan - comparison-based scans over ordered sequences.
//!
//! # Quick Start
//!
//! ```
//! use seqscan::array::{index_of, maximum, second_maximum};
//!
//! let scores = [3, 5, 5, 1];
//! assert_eq!(maximum(&scores), Some(&5));
//! assert_eq!(second_maximum(&scores), Some(&3));
//!
//! let slots = [Some("a"), None, Some("b")];
//! assert_eq!(index_of(&slots, Some(&"b")), Some(2));
//! assert_eq!(index_of(&slots, None), Some(1));
//! ```

pub mod array;
