//! Owned dump descriptors from any capability view.
//!
//! Sources may come from the structured representation, so security contexts
//! are re-encoded into tags whenever the copied tags alone would read out
//! differently.

use crate::api::{
    ClassView, EnumItemView, EnumView, MemberKind, MemberView, ParameterView, Tags, TypeView,
};
use crate::dump::model::{
    Callback, Class, Enum, EnumItem, Event, Function, Member, Parameter, Property, Type,
};
use crate::dump::security;
use tracing::debug;

pub fn copy_type(view: &dyn TypeView) -> Type {
    Type::from_parts(view.category(), view.name())
}

pub fn copy_parameters(params: &[&dyn ParameterView]) -> Vec<Parameter> {
    params
        .iter()
        .map(|param| Parameter {
            ty: copy_type(param.param_type()),
            name: param.name().to_string(),
            default: param.default_value().map(str::to_string),
        })
        .collect()
}

/// Copy a member by the capabilities it exposes.
///
/// Function-shaped sources become a Function or a Callback according to
/// their kind. Anything without a recognised shape yields `None`.
pub fn copy_member(view: &dyn MemberView) -> Option<Member> {
    let name = view.name().to_string();
    let mut tags = Tags::from_labels(view.tags());

    if let Some(property) = view.as_property() {
        security::encode_property_security(&mut tags, &property.security());
        return Some(Member::Property(Property {
            name,
            class: String::new(),
            value_type: copy_type(property.value_type()),
            tags,
        }));
    }

    if let Some(function) = view.as_function() {
        security::encode_member_security(&mut tags, function.security());
        let return_type = copy_type(function.return_type());
        let parameters = copy_parameters(&function.parameters());
        return match view.kind() {
            MemberKind::Function => Some(Member::Function(Function {
                name,
                class: String::new(),
                return_type,
                parameters,
                tags,
            })),
            MemberKind::Callback => Some(Member::Callback(Callback {
                name,
                class: String::new(),
                return_type,
                parameters,
                tags,
            })),
            kind => {
                debug!(member = %name, %kind, "function-shaped member with foreign kind dropped");
                None
            }
        };
    }

    if let Some(event) = view.as_event() {
        security::encode_member_security(&mut tags, event.security());
        return Some(Member::Event(Event {
            name,
            class: String::new(),
            parameters: copy_parameters(&event.parameters()),
            tags,
        }));
    }

    debug!(member = %name, kind = %view.kind(), "member without a supported shape dropped");
    None
}

/// Copy a class and every member that converts. Members record the class
/// name as their owner.
pub fn copy_class(view: &dyn ClassView) -> Class {
    let members = view.members();
    let mut class = Class {
        name: view.name().to_string(),
        superclass: view.superclass().to_string(),
        members: Vec::with_capacity(members.len()),
        tags: Tags::from_labels(view.tags()),
    };
    for member in members {
        if let Some(mut copy) = copy_member(member) {
            copy.set_class(&class.name);
            class.members.push(copy);
        }
    }
    class
}

pub fn copy_item(view: &dyn EnumItemView) -> EnumItem {
    EnumItem {
        enum_name: String::new(),
        name: view.name().to_string(),
        value: view.value(),
        tags: Tags::from_labels(view.tags()),
    }
}

pub fn copy_enum(view: &dyn EnumView) -> Enum {
    let name = view.name().to_string();
    let items = view
        .items()
        .into_iter()
        .map(|item| EnumItem {
            enum_name: name.clone(),
            ..copy_item(item)
        })
        .collect();
    Enum {
        name,
        items,
        tags: Tags::from_labels(view.tags()),
    }
}
