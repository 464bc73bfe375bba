//! # trie-dict
//!
//! A character trie holding a set of words, with exact lookup, prefix
//! autocomplete, longest-prefix spelling suggestions, and deletes that prune
//! nodes no other word needs.
//!
//! ## Example
//!
//! ```rust
//! use trie_dict::Trie;
//!
//! let mut trie = Trie::new();
//! assert!(trie.insert("catastrophe"));
//! assert!(trie.insert("catatonic"));
//! assert!(trie.insert("caterpillar"));
//! assert!(!trie.insert("catatonic"));
//!
//! assert!(trie.search("catatonic"));
//! assert!(!trie.search("cat"));
//! assert_eq!(
//!     trie.auto_suggest("cata"),
//!     vec!["catastrophe", "catatonic"]
//! );
//! assert_eq!(trie.spelling_suggestions("catatonicc"), vec!["catatonic"]);
//!
//! assert!(trie.delete("caterpillar"));
//! assert!(!trie.search("caterpillar"));
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod node;
pub mod trie;
mod wordlist;

pub use config::Config;
pub use error::{Error, Result};
pub use node::TrieNode;
pub use trie::{Trie, Words};


#[cfg(test)]
mod proptests;
