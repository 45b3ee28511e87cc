//! Descriptors of the legacy plain-text dump.
//!
//! This representation stores types as packed `category:name` strings and
//! keeps security contexts inside the free-form tag list. Members and enum
//! items also remember the name of their owner.

use crate::api::{
    ClassView, EnumItemView, EnumView, EventView, FunctionView, MemberKind, MemberView,
    ParameterView, PropertySecurity, PropertyView, RootView, Taggable, Tags, TypeView,
};
use crate::dump::security;
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

/// A value type packed as `name` or `category:name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Type(String);

impl Type {
    pub fn new(packed: impl Into<String>) -> Self {
        Self(packed.into())
    }

    /// Pack a split type. A colon inside an uncategorised `name` cannot be
    /// told apart from the separator, so `("", "a:b")` reads back as
    /// category `a`, name `b`.
    pub fn from_parts(category: &str, name: &str) -> Self {
        if category.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{category}:{name}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TypeView for Type {
    fn category(&self) -> &str {
        self.0.split_once(':').map_or("", |(category, _)| category)
    }

    fn name(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(_, name)| name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: Type,
    pub name: String,
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(ty: &str, name: &str) -> Self {
        Self {
            ty: Type::new(ty),
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

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    /// Owning class name.
    pub class: String,
    pub value_type: Type,
    pub tags: Tags,
}

impl Property {
    pub fn new(name: &str, value_type: &str) -> Self {
        Self {
            name: name.to_string(),
            value_type: Type::new(value_type),
            ..Self::default()
        }
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
        security::property_security(&self.tags)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub class: String,
    pub return_type: Type,
    pub parameters: Vec<Parameter>,
    pub tags: Tags,
}

impl Function {
    pub fn new(name: &str, return_type: &str, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.to_string(),
            return_type: Type::new(return_type),
            parameters,
            ..Self::default()
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.set_tag(tag);
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
        security::member_security(&self.tags)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    pub class: String,
    pub parameters: Vec<Parameter>,
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

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.set_tag(tag);
        self
    }
}

impl EventView for Event {
    fn parameters(&self) -> Vec<&dyn ParameterView> {
        params_view(&self.parameters)
    }

    fn security(&self) -> &str {
        security::member_security(&self.tags)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Callback {
    pub name: String,
    pub class: String,
    pub return_type: Type,
    pub parameters: Vec<Parameter>,
    pub tags: Tags,
}

impl Callback {
    pub fn new(name: &str, return_type: &str, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.to_string(),
            return_type: Type::new(return_type),
            parameters,
            ..Self::default()
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.set_tag(tag);
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
        security::member_security(&self.tags)
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
    /// Name of the class this member was declared in.
    pub fn class(&self) -> &str {
        match self {
            Member::Property(m) => &m.class,
            Member::Function(m) => &m.class,
            Member::Event(m) => &m.class,
            Member::Callback(m) => &m.class,
        }
    }

    pub(crate) fn set_class(&mut self, class: &str) {
        let slot = match self {
            Member::Property(m) => &mut m.class,
            Member::Function(m) => &mut m.class,
            Member::Event(m) => &mut m.class,
            Member::Callback(m) => &mut m.class,
        };
        *slot = class.to_string();
    }

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

    /// Append a member, recording this class as its owner.
    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        let mut member = member.into();
        member.set_class(&self.name);
        self.members.push(member);
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.set_tag(tag);
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

    pub fn with_item(mut self, mut item: EnumItem) -> Self {
        item.enum_name = self.name.clone();
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
    /// Owning enum name.
    pub enum_name: String,
    pub name: String,
    pub value: i64,
    pub tags: Tags,
}

impl EnumItem {
    pub fn new(name: &str, value: i64) -> Self {
        Self {
            name: name.to_string(),
            value,
            ..Self::default()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_type_splits_on_first_colon() {
        let ty = Type::new("Class:Instance");
        assert_eq!(ty.category(), "Class");
        assert_eq!(ty.name(), "Instance");

        let plain = Type::new("string");
        assert_eq!(plain.category(), "");
        assert_eq!(plain.name(), "string");
        assert_eq!(Type::from_parts("Enum", "Material").as_str(), "Enum:Material");
    }

    #[test]
    fn test_find_member_returns_first_match() {
        let class = Class::new("Part", "BasePart")
            .with_member(Property::new("Touched", "bool"))
            .with_member(Event::new("Touched", vec![Parameter::new("Instance", "hit")]));
        let found = class.find_member("Touched").unwrap();
        assert_eq!(found.kind(), MemberKind::Property);
        assert!(class.find_member("Missing").is_none());
    }

    #[test]
    fn test_members_list_is_detached() {
        let class = Class::new("Part", "BasePart").with_member(Property::new("Size", "Vector3"));
        let mut list = class.members();
        list.clear();
        assert_eq!(class.members.len(), 1);
    }

    #[test]
    fn test_function_and_callback_share_shape_but_not_kind() {
        let function: Member = Function::new("Clone", "Instance", vec![]).into();
        let callback: Member = Callback::new("OnInvoke", "Tuple", vec![]).into();
        assert!(function.as_function().is_some());
        assert!(callback.as_function().is_some());
        assert_eq!(function.kind(), MemberKind::Function);
        assert_eq!(callback.kind(), MemberKind::Callback);
        assert!(callback.as_event().is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Class::new("Part", "BasePart")
            .with_member(Function::new("Resize", "bool", vec![Parameter::new("NormalId", "face")]));
        let mut copy = original.clone();
        if let Member::Function(f) = &mut copy.members[0] {
            f.parameters[0].name = "side".to_string();
            f.tags.set_tag("Deprecated");
        }
        copy.name = "Wedge".to_string();

        assert_eq!(original.name, "Part");
        let Member::Function(f) = &original.members[0] else {
            panic!("expected function");
        };
        assert_eq!(f.parameters[0].name, "face");
        assert!(f.tags.is_empty());
    }

    #[test]
    fn test_from_parts_colon_in_name_splits_on_read() {
        let ty = Type::from_parts("", "a:b");
        assert_eq!(ty.as_str(), "a:b");
        assert_eq!(ty.category(), "a");
        assert_eq!(TypeView::name(&ty), "b");
        assert_eq!(Type::from_parts("Enum", "Material").as_str(), "Enum:Material");
    }
}
