//! The action contract consumed by the engine.
//!
//! Actions are built elsewhere (usually by diffing two roots) and borrow the
//! descriptors they describe. The target shape is fixed when the action is
//! built, so the engine never has to guess what an action refers to.

use crate::api::{ClassView, EnumItemView, EnumView, MemberView, ParameterView, TypeView};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Add,
    Remove,
    Change,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Add => f.write_str("Add"),
            ActionKind::Remove => f.write_str("Remove"),
            ActionKind::Change => f.write_str("Change"),
        }
    }
}

/// The descriptor an action refers to.
#[derive(Clone, Copy)]
pub enum ActionTarget<'a> {
    Class(&'a dyn ClassView),
    Member {
        class: &'a dyn ClassView,
        member: &'a dyn MemberView,
    },
    Enum(&'a dyn EnumView),
    EnumItem {
        enumeration: &'a dyn EnumView,
        item: &'a dyn EnumItemView,
    },
}

impl fmt::Display for ActionTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionTarget::Class(class) => write!(f, "Class {}", class.name()),
            ActionTarget::Member { class, member } => {
                write!(f, "{} {}.{}", member.kind(), class.name(), member.name())
            }
            ActionTarget::Enum(enumeration) => write!(f, "Enum {}", enumeration.name()),
            ActionTarget::EnumItem { enumeration, item } => {
                write!(f, "EnumItem {}.{}", enumeration.name(), item.name())
            }
        }
    }
}

/// Payload of a Change action. Which variant is expected depends on the
/// field being changed.
#[derive(Clone)]
pub enum Value<'a> {
    String(String),
    Type(&'a dyn TypeView),
    Parameters(Vec<&'a dyn ParameterView>),
    Tags(Vec<String>),
    Int(i64),
    Bool(bool),
}

impl<'a> Value<'a> {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_tags(&self) -> Option<&[String]> {
        match self {
            Value::Tags(tags) => Some(tags.as_slice()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_parameters(&self) -> Option<&[&'a dyn ParameterView]> {
        match self {
            Value::Parameters(params) => Some(params.as_slice()),
            _ => None,
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Type(_) => "Type",
            Value::Parameters(_) => "Parameters",
            Value::Tags(_) => "Tags",
            Value::Int(_) => "Int",
            Value::Bool(_) => "Bool",
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Type(t) => write!(f, "Type({})", t),
            Value::Parameters(params) => {
                let names: Vec<&str> = params.iter().map(|p| p.name()).collect();
                write!(f, "Parameters({names:?})")
            }
            Value::Tags(tags) => write!(f, "Tags({tags:?})"),
            Value::Int(v) => write!(f, "Int({v})"),
            Value::Bool(v) => write!(f, "Bool({v})"),
        }
    }
}

impl From<&str> for Value<'_> {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Vec<String>> for Value<'_> {
    fn from(tags: Vec<String>) -> Self {
        Value::Tags(tags)
    }
}

impl<'a> From<&'a dyn TypeView> for Value<'a> {
    fn from(t: &'a dyn TypeView) -> Self {
        Value::Type(t)
    }
}

/// A single declarative edit.
#[derive(Clone)]
pub struct Action<'a> {
    kind: ActionKind,
    target: ActionTarget<'a>,
    field: Option<String>,
    prev: Option<Value<'a>>,
    next: Option<Value<'a>>,
}

impl<'a> Action<'a> {
    pub fn new(kind: ActionKind, target: ActionTarget<'a>) -> Self {
        Self {
            kind,
            target,
            field: None,
            prev: None,
            next: None,
        }
    }

    fn change(target: ActionTarget<'a>, field: &str, next: impl Into<Value<'a>>) -> Self {
        Self {
            kind: ActionKind::Change,
            target,
            field: Some(field.to_string()),
            prev: None,
            next: Some(next.into()),
        }
    }

    pub fn add_class(class: &'a dyn ClassView) -> Self {
        Self::new(ActionKind::Add, ActionTarget::Class(class))
    }

    pub fn remove_class(class: &'a dyn ClassView) -> Self {
        Self::new(ActionKind::Remove, ActionTarget::Class(class))
    }

    pub fn change_class(
        class: &'a dyn ClassView,
        field: &str,
        next: impl Into<Value<'a>>,
    ) -> Self {
        Self::change(ActionTarget::Class(class), field, next)
    }

    pub fn add_member(class: &'a dyn ClassView, member: &'a dyn MemberView) -> Self {
        Self::new(ActionKind::Add, ActionTarget::Member { class, member })
    }

    pub fn remove_member(class: &'a dyn ClassView, member: &'a dyn MemberView) -> Self {
        Self::new(ActionKind::Remove, ActionTarget::Member { class, member })
    }

    pub fn change_member(
        class: &'a dyn ClassView,
        member: &'a dyn MemberView,
        field: &str,
        next: impl Into<Value<'a>>,
    ) -> Self {
        Self::change(ActionTarget::Member { class, member }, field, next)
    }

    pub fn add_enum(enumeration: &'a dyn EnumView) -> Self {
        Self::new(ActionKind::Add, ActionTarget::Enum(enumeration))
    }

    pub fn remove_enum(enumeration: &'a dyn EnumView) -> Self {
        Self::new(ActionKind::Remove, ActionTarget::Enum(enumeration))
    }

    pub fn change_enum(
        enumeration: &'a dyn EnumView,
        field: &str,
        next: impl Into<Value<'a>>,
    ) -> Self {
        Self::change(ActionTarget::Enum(enumeration), field, next)
    }

    pub fn add_item(enumeration: &'a dyn EnumView, item: &'a dyn EnumItemView) -> Self {
        Self::new(ActionKind::Add, ActionTarget::EnumItem { enumeration, item })
    }

    pub fn remove_item(enumeration: &'a dyn EnumView, item: &'a dyn EnumItemView) -> Self {
        Self::new(ActionKind::Remove, ActionTarget::EnumItem { enumeration, item })
    }

    pub fn change_item(
        enumeration: &'a dyn EnumView,
        item: &'a dyn EnumItemView,
        field: &str,
        next: impl Into<Value<'a>>,
    ) -> Self {
        Self::change(ActionTarget::EnumItem { enumeration, item }, field, next)
    }

    /// Attach the value the field held before the change. The engine ignores
    /// it; it exists for undo tooling.
    pub fn with_prev(mut self, prev: impl Into<Value<'a>>) -> Self {
        self.prev = Some(prev.into());
        self
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn target(&self) -> ActionTarget<'a> {
        self.target
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn prev(&self) -> Option<&Value<'a>> {
        self.prev.as_ref()
    }

    pub fn next(&self) -> Option<&Value<'a>> {
        self.next.as_ref()
    }

    /// Describe the payload variant for diagnostics.
    pub(crate) fn next_variant(&self) -> &'static str {
        self.next.as_ref().map_or("None", Value::variant_name)
    }
}

impl fmt::Display for Action<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.target)?;
        if let Some(field) = &self.field {
            write!(f, " {field}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Action<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("kind", &self.kind)
            .field("target", &self.target.to_string())
            .field("field", &self.field)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}
