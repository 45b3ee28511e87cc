//! rbxapi-patcher: an in-memory API descriptor model with a declarative
//! patch engine.
//!
//! Two concrete representations describe the same schema: [`dump`] mirrors
//! the legacy plain-text dump, where security lives in tags and types are
//! packed strings, and [`json`] mirrors the structured dump with first-class
//! fields. Both expose the read-only capability views in [`api`], so the
//! engine in [`patch`] works on either one and actions may carry payloads
//! from the other representation.
//!
//! # Architecture
//!
//! Actions describe *what* changed through borrowed views. Applying them never
//! fails: a target that cannot be located or a payload that does not fit makes
//! the action a no-op. Pass a [`PatchReport`] to [`Patcher::patch_with`] to
//! observe which actions were skipped.
//!
//! # Example
//!
//! ```
//! use rbxapi_patcher::api::{ClassView, RootView};
//! use rbxapi_patcher::dump::{Class, Property, Root};
//! use rbxapi_patcher::patch::{Action, Patcher};
//!
//! let mut root = Root::new().with_class(Class::new("Part", "BasePart"));
//! let template = Class::new("Part", "BasePart").with_member(Property::new("Size", "Vector3"));
//!
//! root.patch(&[Action::add_member(&template, &template.members[0])]);
//!
//! let part = root.find_class("Part").unwrap();
//! assert_eq!(part.members().len(), 1);
//! ```

pub mod api;
pub mod config;
pub mod dump;
pub mod json;
pub mod patch;

pub use api::{MemberKind, Tags};
pub use config::{load_from_path, load_from_str, ConfigError, PatchOptions};
pub use patch::{Action, ActionKind, ActionTarget, PatchReport, Patcher, SkipReason, Value};
