//! Hand-built associative and priority containers.
//!
//! Engine state — the link graph, rank vectors, the IDF table, document
//! vectors, and top-K selection — is backed by these containers rather than
//! the standard library collections. The chained-hash map and set store
//! entries in per-bucket vectors and rehash into a doubled bucket array when
//! the load factor is exceeded; the heap is a single growable array with
//! index arithmetic.

pub mod heap;
pub mod map;
pub mod set;

pub use heap::ArrayHeap;
pub use map::ChainedHashMap;
pub use set::ChainedHashSet;
