//! # solq - Solr/Lucene Query Builder
//!
//! solq builds Lucene/Solr-style boolean query strings from an object model
//! instead of hand-concatenated fragments. Clients assemble a tree of terms
//! and groups through a fluent API, mutate it freely, and render it to query
//! text once the shape is right.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`query`] - The query tree model (terms, groups, occur operators,
//!   scoring modifiers) and its mutation operations
//! - [`output`] - Render options controlling compact, pretty, and labeled
//!   serializations
//!
//! ## Quick Start
//!
//! ```
//! use solq::{Group, Occur, Term};
//!
//! let group = Group::new().with_occur(Occur::Must);
//!
//! let styx = group.add_group().with_boost(0.3);
//! styx.add_term(&Term::new("title", "Grand Illusion").with_proximity(1));
//! styx.add_term(&Term::new("title", "Paradise Theatre").with_proximity(1));
//!
//! assert_eq!(
//!     group.to_string(),
//!     r#"+( ( title:"Grand Illusion"~1 title:"Paradise Theatre"~1 )^0.3 )"#,
//! );
//! ```
//!
//! The same tree renders as an indented, one-clause-per-line string through
//! [`Group::pretty`], and groups can carry diagnostic labels that surface as
//! `/* label */` comments when requested via [`output::RenderOptions`].
//!
//! ## Model notes
//!
//! [`Term`] and [`Group`] are cheap-to-clone shared handles: cloning a handle
//! does not copy the node, and mutations through any handle are visible to
//! every holder, including the groups the node is attached to. Membership
//! checks are by node identity, so two structurally equal terms are still two
//! distinct members. Use [`Term::deep_clone`] / [`Group::deep_clone`] for an
//! independent copy of a subtree.
//!
//! The model performs no I/O and no validation of field names or numeric
//! magnitudes; it produces a query string and trusts the caller to supply
//! backend-valid fragments. Handles are intentionally single-threaded
//! (`!Send`) - wrap the tree in external synchronization if a concurrent host
//! needs it.

pub mod output;
pub mod query;

pub use output::RenderOptions;
pub use query::{Boost, ConstantScore, Group, GroupKind, Occur, Proximity, Term};
