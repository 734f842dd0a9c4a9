// Clippy allows for the whole crate
#![allow(clippy::too_many_arguments)]
#![allow(clippy::should_implement_trait)]

//! MINT: Multiset INtersection Toolkit
//!
//! This library computes multiset intersections over integer sequences:
//! each value appears in the result as many times as it appears in both
//! inputs. Four interchangeable algorithms cover the common input shapes,
//! and a classifier plus selector pick among them automatically.
//!
//! # Features
//!
//! - **Method selection**: Inputs are classified by ordering and value
//!   range, and the cheapest applicable algorithm is chosen
//! - **Streaming**: The second sequence can arrive in chunks from a file,
//!   reader, or channel without being held in memory at once
//! - **Permissive parsing**: Bracketed or bare integer lists, with
//!   non-numeric noise silently dropped
//!
//! # Example
//!
//! ```rust
//! use mint_intersect::engine::{IntersectEngine, Mode};
//!
//! let engine = IntersectEngine::new();
//! let result = engine.run_text("[1, 2, 2, 3]", "2 2 4", Mode::Auto).unwrap();
//!
//! assert_eq!(result.values, vec![2, 2]);
//! ```

pub mod classify;
pub mod commands;
pub mod engine;
pub mod error;
pub mod methods;
pub mod output;
pub mod parse;
pub mod select;
pub mod stream;
pub mod table;

// Re-export commonly used types
pub use classify::{classify, Classification, DEFAULT_CEILING, MAX_CEILING};
pub use engine::{IntersectEngine, Intersection, Mode};
pub use error::{MintError, Result};
pub use parse::parse_sequence;
pub use select::{select_method, Method, MethodChoice};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::classify::{classify, Classification, DEFAULT_CEILING, MAX_CEILING};
    pub use crate::engine::{IntersectEngine, Intersection, Mode};
    pub use crate::error::{MintError, Result};
    pub use crate::methods::{
        intersect_counting, intersect_hashed, intersect_two_pointer, StreamingIntersect,
    };
    pub use crate::parse::parse_sequence;
    pub use crate::select::{select_method, Method, MethodChoice};
    pub use crate::stream::{ChunkSource, SliceChunkSource};
}
