//! Descriptors of the structured (JSON) dump.
//!
//! Unlike the legacy dump, every piece of metadata is a first-class field:
//! types are split into category and name, and security contexts, load/save
//! flags and categories live next to the member they describe.

use crate::api::{
    ClassView, EnumItemView, EnumView, EventView, FunctionView, MemberKind, MemberView,
    ParameterView, PropertySecurity, PropertyView, RootView, Serialization, Taggable, Tags,
    TypeView,
};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Root {
    pub classes: Vec<Class>,
    pub enums: Vec<Enum>,
}

impl Root {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_enum(mut self, enm: Enum) -> Self {
        self.enums.push(enm);
        self
    }
}

impl RootView for Root {
    fn classes(&self) -> Vec<&dyn ClassView> {
        self.classes.iter().map(|c| c as &dyn ClassView).collect()
    }

    fn enums(&self) -> Vec<&dyn EnumView> {
        self.enums.iter().map(|e| e as &dyn EnumView).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Type {
    pub category: String,
    pub name: String,
}

impl Type {
    pub fn new(category: &str, name: &str) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
        }
    }

    /// Split a `category:name` string on its first colon.
    pub fn parse(packed: &str) -> Self {
        match packed.split_once(':') {
            Some((category, name)) => Self::new(category, name),
            None => Self::new("", packed),
        }
    }
}

impl TypeView for Type {
    fn category(&self) -> &str {
        &self.category
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.category.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}:{}", self.category, self.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: Type,
    pub name: String,
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(ty: Type, name: &str) -> Self {
        Self {
            ty,
            name: name.to_string(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }
}

impl ParameterView for Parameter {
    fn param_type(&self) -> &dyn TypeView {
        &self.ty
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value_type: Type,
    pub category: String,
    pub read_security: String,
    pub write_security: String,
    pub can_load: bool,
    pub can_save: bool,
    pub tags: Tags,
}

impl Property {
    pub fn new(name: &str, value_type: Type) -> Self {
        let serialization = Serialization::default();
        Self {
            name: name.to_string(),
            value_type,
            category: String::new(),
            read_security: String::new(),
            write_security: String::new(),
            can_load: serialization.can_load,
            can_save: serialization.can_save,
            tags: Tags::new(),
        }
    }

    pub fn with_security(mut self, read: &str, write: &str) -> Self {
        self.read_security = read.to_string();
        self.write_security = write.to_string();
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.set_tag(tag);
        self
    }
}

impl PropertyView for Property {
    fn value_type(&self) -> &dyn TypeView {
        &self.value_type
    }

    fn security(&self) -> PropertySecurity {
        PropertySecurity::new(self.read_security.as_str(), self.write_security.as_str())
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn serialization(&self) -> Option<Serialization> {
        Some(Serialization {
            can_load: self.can_load,
            can_save: self.can_save,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    pub security: String,
    pub tags: Tags,
}

impl Function {
    pub fn new(name: &str, return_type: Type, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.to_string(),
            parameters,
            return_type,
            ..Self::default()
        }
    }

    pub fn with_security(mut self, security: &str) -> Self {
        self.security = security.to_string();
        self
    }
}

impl FunctionView for Function {
    fn return_type(&self) -> &dyn TypeView {
        &self.return_type
    }

    fn parameters(&self) -> Vec<&dyn ParameterView> {
        params_view(&self.parameters)
    }

    fn security(&self) -> &str {
        &self.security
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub security: String,
    pub tags: Tags,
}

impl Event {
    pub fn new(name: &str, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.to_string(),
            parameters,
            ..Self::default()
        }
    }

    pub fn with_security(mut self, security: &str) -> Self {
        self.security = security.to_string();
        self
    }
}

impl EventView for Event {
    fn parameters(&self) -> Vec<&dyn ParameterView> {
        params_view(&self.parameters)
    }

    fn security(&self) -> &str {
        &self.security
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Callback {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    pub security: String,
    pub tags: Tags,
}

impl Callback {
    pub fn new(name: &str, return_type: Type, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.to_string(),
            parameters,
            return_type,
            ..Self::default()
        }
    }

    pub fn with_security(mut self, security: &str) -> Self {
        self.security = security.to_string();
        self
    }
}

impl FunctionView for Callback {
    fn return_type(&self) -> &dyn TypeView {
        &self.return_type
    }

    fn parameters(&self) -> Vec<&dyn ParameterView> {
        params_view(&self.parameters)
    }

    fn security(&self) -> &str {
        &self.security
    }
}

fn params_view(params: &[Parameter]) -> Vec<&dyn ParameterView> {
    params.iter().map(|p| p as &dyn ParameterView).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Property(Property),
    Function(Function),
    Event(Event),
    Callback(Callback),
}

impl Member {
    pub fn tag_set(&self) -> &Tags {
        match self {
            Member::Property(m) => &m.tags,
            Member::Function(m) => &m.tags,
            Member::Event(m) => &m.tags,
            Member::Callback(m) => &m.tags,
        }
    }
}

impl From<Property> for Member {
    fn from(m: Property) -> Self {
        Member::Property(m)
    }
}

impl From<Function> for Member {
    fn from(m: Function) -> Self {
        Member::Function(m)
    }
}

impl From<Event> for Member {
    fn from(m: Event) -> Self {
        Member::Event(m)
    }
}

impl From<Callback> for Member {
    fn from(m: Callback) -> Self {
        Member::Callback(m)
    }
}

impl Taggable for Member {
    fn tag(&self, label: &str) -> bool {
        self.tag_set().tag(label)
    }

    fn tags(&self) -> Vec<String> {
        self.tag_set().tags()
    }
}

impl MemberView for Member {
    fn kind(&self) -> MemberKind {
        match self {
            Member::Property(_) => MemberKind::Property,
            Member::Function(_) => MemberKind::Function,
            Member::Event(_) => MemberKind::Event,
            Member::Callback(_) => MemberKind::Callback,
        }
    }

    fn name(&self) -> &str {
        match self {
            Member::Property(m) => &m.name,
            Member::Function(m) => &m.name,
            Member::Event(m) => &m.name,
            Member::Callback(m) => &m.name,
        }
    }

    fn as_property(&self) -> Option<&dyn PropertyView> {
        match self {
            Member::Property(m) => Some(m as &dyn PropertyView),
            _ => None,
        }
    }

    fn as_function(&self) -> Option<&dyn FunctionView> {
        match self {
            Member::Function(m) => Some(m as &dyn FunctionView),
            Member::Callback(m) => Some(m as &dyn FunctionView),
            _ => None,
        }
    }

    fn as_event(&self) -> Option<&dyn EventView> {
        match self {
            Member::Event(m) => Some(m as &dyn EventView),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Class {
    pub name: String,
    pub superclass: String,
    /// Memory accounting bucket reported for instances of the class.
    pub memory_category: String,
    pub members: Vec<Member>,
    pub tags: Tags,
}

impl Class {
    pub fn new(name: &str, superclass: &str) -> Self {
        Self {
            name: name.to_string(),
            superclass: superclass.to_string(),
            ..Self::default()
        }
    }

    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn with_memory_category(mut self, category: &str) -> Self {
        self.memory_category = category.to_string();
        self
    }
}

impl Taggable for Class {
    fn tag(&self, label: &str) -> bool {
        self.tags.tag(label)
    }

    fn tags(&self) -> Vec<String> {
        self.tags.tags()
    }
}

impl ClassView for Class {
    fn name(&self) -> &str {
        &self.name
    }

    fn superclass(&self) -> &str {
        &self.superclass
    }

    fn members(&self) -> Vec<&dyn MemberView> {
        self.members.iter().map(|m| m as &dyn MemberView).collect()
    }

    fn memory_category(&self) -> Option<&str> {
        Some(self.memory_category.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enum {
    pub name: String,
    pub items: Vec<EnumItem>,
    pub tags: Tags,
}

impl Enum {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_item(mut self, item: EnumItem) -> Self {
        self.items.push(item);
        self
    }
}

impl Taggable for Enum {
    fn tag(&self, label: &str) -> bool {
        self.tags.tag(label)
    }

    fn tags(&self) -> Vec<String> {
        self.tags.tags()
    }
}

impl EnumView for Enum {
    fn name(&self) -> &str {
        &self.name
    }

    fn items(&self) -> Vec<&dyn EnumItemView> {
        self.items.iter().map(|i| i as &dyn EnumItemView).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumItem {
    pub name: String,
    pub value: i64,
    pub tags: Tags,
}

impl EnumItem {
    pub fn new(name: &str, value: i64) -> Self {
        Self {
            name: name.to_string(),
            value,
            tags: Tags::new(),
        }
    }
}

impl Taggable for EnumItem {
    fn tag(&self, label: &str) -> bool {
        self.tags.tag(label)
    }

    fn tags(&self) -> Vec<String> {
        self.tags.tags()
    }
}

impl EnumItemView for EnumItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> i64 {
        self.value
    }
}
