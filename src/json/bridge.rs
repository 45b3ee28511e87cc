//! Owned structured descriptors from any capability view.

use crate::api::{
    ClassView, EnumItemView, EnumView, MemberKind, MemberView, ParameterView, Tags, TypeView,
};
use crate::json::model::{
    Callback, Class, Enum, EnumItem, Event, Function, Member, Parameter, Property, Type,
};
use tracing::debug;

pub fn copy_type(view: &dyn TypeView) -> Type {
    Type::new(view.category(), view.name())
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
/// Metadata the source does not track falls back to empty strings and
/// loadable/savable. Tags are copied verbatim, so security tags from a legacy
/// source stay in the tag set next to the typed fields and are not updated by
/// later changes to those fields.
pub fn copy_member(view: &dyn MemberView) -> Option<Member> {
    let name = view.name().to_string();
    let tags = Tags::from_labels(view.tags());

    if let Some(property) = view.as_property() {
        let security = property.security();
        let serialization = property.serialization().unwrap_or_default();
        return Some(Member::Property(Property {
            name,
            value_type: copy_type(property.value_type()),
            category: property.category().unwrap_or_default().to_string(),
            read_security: security.read,
            write_security: security.write,
            can_load: serialization.can_load,
            can_save: serialization.can_save,
            tags,
        }));
    }

    if let Some(function) = view.as_function() {
        let return_type = copy_type(function.return_type());
        let parameters = copy_parameters(&function.parameters());
        let security = function.security().to_string();
        return match view.kind() {
            MemberKind::Function => Some(Member::Function(Function {
                name,
                parameters,
                return_type,
                security,
                tags,
            })),
            MemberKind::Callback => Some(Member::Callback(Callback {
                name,
                parameters,
                return_type,
                security,
                tags,
            })),
            kind => {
                debug!(member = %name, %kind, "function-shaped member with foreign kind dropped");
                None
            }
        };
    }

    if let Some(event) = view.as_event() {
        return Some(Member::Event(Event {
            name,
            parameters: copy_parameters(&event.parameters()),
            security: event.security().to_string(),
            tags,
        }));
    }

    debug!(member = %name, kind = %view.kind(), "member without a supported shape dropped");
    None
}

pub fn copy_class(view: &dyn ClassView) -> Class {
    Class {
        name: view.name().to_string(),
        superclass: view.superclass().to_string(),
        memory_category: view.memory_category().unwrap_or_default().to_string(),
        members: view.members().into_iter().filter_map(copy_member).collect(),
        tags: Tags::from_labels(view.tags()),
    }
}

pub fn copy_item(view: &dyn EnumItemView) -> EnumItem {
    EnumItem {
        name: view.name().to_string(),
        value: view.value(),
        tags: Tags::from_labels(view.tags()),
    }
}

pub fn copy_enum(view: &dyn EnumView) -> Enum {
    Enum {
        name: view.name().to_string(),
        items: view.items().into_iter().map(copy_item).collect(),
        tags: Tags::from_labels(view.tags()),
    }
}
