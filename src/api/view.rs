//! Read-only capability views implemented by both representations.
//!
//! The patch engine and external tooling only ever talk to descriptors
//! through these traits. List accessors always return fresh containers, and
//! `find_*` lookups return the first match by name or `None`.

use crate::api::kind::MemberKind;
use std::fmt;

pub trait Taggable {
    /// Whether the label is present.
    fn tag(&self, label: &str) -> bool;
    /// Snapshot of all labels in order.
    fn tags(&self) -> Vec<String>;
}

/// A value type as a `(category, name)` pair.
pub trait TypeView {
    /// Empty when the type has no category.
    fn category(&self) -> &str;
    fn name(&self) -> &str;
}

impl fmt::Display for dyn TypeView + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category() {
            "" => f.write_str(self.name()),
            category => write!(f, "{}:{}", category, self.name()),
        }
    }
}

pub trait ParameterView {
    fn param_type(&self) -> &dyn TypeView;
    fn name(&self) -> &str;
    fn default_value(&self) -> Option<&str>;
}

/// Security contexts guarding reads and writes of a property.
///
/// An empty string means no context applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySecurity {
    pub read: String,
    pub write: String,
}

impl PropertySecurity {
    pub fn new(read: impl Into<String>, write: impl Into<String>) -> Self {
        Self {
            read: read.into(),
            write: write.into(),
        }
    }
}

/// Load/save flags of a property, where the representation tracks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Serialization {
    pub can_load: bool,
    pub can_save: bool,
}

impl Default for Serialization {
    fn default() -> Self {
        Self {
            can_load: true,
            can_save: true,
        }
    }
}

pub trait MemberView: Taggable {
    fn kind(&self) -> MemberKind;
    fn name(&self) -> &str;

    fn as_property(&self) -> Option<&dyn PropertyView> {
        None
    }

    /// Function-shaped members: both Function and Callback.
    fn as_function(&self) -> Option<&dyn FunctionView> {
        None
    }

    fn as_event(&self) -> Option<&dyn EventView> {
        None
    }
}

pub trait PropertyView {
    fn value_type(&self) -> &dyn TypeView;
    fn security(&self) -> PropertySecurity;

    fn category(&self) -> Option<&str> {
        None
    }

    fn serialization(&self) -> Option<Serialization> {
        None
    }
}

pub trait FunctionView {
    fn return_type(&self) -> &dyn TypeView;
    fn parameters(&self) -> Vec<&dyn ParameterView>;
    fn security(&self) -> &str;
}

pub trait EventView {
    fn parameters(&self) -> Vec<&dyn ParameterView>;
    fn security(&self) -> &str;
}

pub trait ClassView: Taggable {
    fn name(&self) -> &str;
    /// Name of the parent class. Never resolved; may dangle.
    fn superclass(&self) -> &str;
    fn members(&self) -> Vec<&dyn MemberView>;

    fn memory_category(&self) -> Option<&str> {
        None
    }

    fn find_member(&self, name: &str) -> Option<&dyn MemberView> {
        self.members().into_iter().find(|member| member.name() == name)
    }
}

pub trait EnumItemView: Taggable {
    fn name(&self) -> &str;
    fn value(&self) -> i64;
}

pub trait EnumView: Taggable {
    fn name(&self) -> &str;
    fn items(&self) -> Vec<&dyn EnumItemView>;

    fn find_item(&self, name: &str) -> Option<&dyn EnumItemView> {
        self.items().into_iter().find(|item| item.name() == name)
    }
}

pub trait RootView {
    fn classes(&self) -> Vec<&dyn ClassView>;
    fn enums(&self) -> Vec<&dyn EnumView>;

    fn find_class(&self, name: &str) -> Option<&dyn ClassView> {
        self.classes().into_iter().find(|class| class.name() == name)
    }

    fn find_enum(&self, name: &str) -> Option<&dyn EnumView> {
        self.enums().into_iter().find(|enm| enm.name() == name)
    }
}
