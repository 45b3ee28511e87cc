//! Patch support for structured descriptors.

use crate::api::{ClassView, EnumItemView, EnumView, MemberView};
use crate::json::bridge::{
    copy_class, copy_enum, copy_item, copy_member, copy_parameters, copy_type,
};
use crate::json::model::{
    Callback, Class, Enum, EnumItem, Event, Function, Member, Parameter, Property, Root, Type,
};
use crate::patch::engine::{self, assign_bool, assign_int, assign_string, assign_tags};
use crate::patch::{
    Action, ClassModel, EnumModel, FieldChange, ItemModel, MemberModel, PatchReport, Patcher,
    RootModel, Value,
};

impl RootModel for Root {
    type Class = Class;
    type Enum = Enum;

    fn classes_mut(&mut self) -> &mut Vec<Class> {
        &mut self.classes
    }

    fn enums_mut(&mut self) -> &mut Vec<Enum> {
        &mut self.enums
    }
}

impl ClassModel for Class {
    type Member = Member;

    fn bridge(view: &dyn ClassView) -> Self {
        copy_class(view)
    }

    fn members_mut(&mut self) -> &mut Vec<Member> {
        &mut self.members
    }

    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange {
        match field {
            "Name" => assign_string(&mut self.name, next),
            "Superclass" => assign_string(&mut self.superclass, next),
            "MemoryCategory" => assign_string(&mut self.memory_category, next),
            "Tags" => assign_tags(&mut self.tags, next),
            _ => FieldChange::Unknown,
        }
    }
}

impl MemberModel for Member {
    fn bridge(view: &dyn MemberView) -> Option<Self> {
        copy_member(view)
    }

    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange {
        match self {
            Member::Property(m) => m.change_field(field, next),
            Member::Function(m) => m.change_field(field, next),
            Member::Event(m) => m.change_field(field, next),
            Member::Callback(m) => m.change_field(field, next),
        }
    }
}

/// Accepts a type view or a packed `category:name` string.
fn assign_type(slot: &mut Type, next: &Value<'_>) -> FieldChange {
    match next {
        Value::Type(ty) => *slot = copy_type(*ty),
        Value::String(packed) => *slot = Type::parse(packed),
        _ => return FieldChange::Mismatch,
    }
    FieldChange::Applied
}

fn assign_parameters(slot: &mut Vec<Parameter>, next: &Value<'_>) -> FieldChange {
    match next.as_parameters() {
        Some(params) => {
            *slot = copy_parameters(params);
            FieldChange::Applied
        }
        None => FieldChange::Mismatch,
    }
}

impl Property {
    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange {
        match field {
            "Name" => assign_string(&mut self.name, next),
            "ValueType" => assign_type(&mut self.value_type, next),
            "Category" => assign_string(&mut self.category, next),
            "ReadSecurity" => assign_string(&mut self.read_security, next),
            "WriteSecurity" => assign_string(&mut self.write_security, next),
            "CanLoad" => assign_bool(&mut self.can_load, next),
            "CanSave" => assign_bool(&mut self.can_save, next),
            "Tags" => assign_tags(&mut self.tags, next),
            _ => FieldChange::Unknown,
        }
    }
}

impl Function {
    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange {
        match field {
            "Name" => assign_string(&mut self.name, next),
            "ReturnType" => assign_type(&mut self.return_type, next),
            "Parameters" => assign_parameters(&mut self.parameters, next),
            "Security" => assign_string(&mut self.security, next),
            "Tags" => assign_tags(&mut self.tags, next),
            _ => FieldChange::Unknown,
        }
    }
}

impl Event {
    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange {
        match field {
            "Name" => assign_string(&mut self.name, next),
            "Parameters" => assign_parameters(&mut self.parameters, next),
            "Security" => assign_string(&mut self.security, next),
            "Tags" => assign_tags(&mut self.tags, next),
            _ => FieldChange::Unknown,
        }
    }
}

impl Callback {
    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange {
        match field {
            "Name" => assign_string(&mut self.name, next),
            "ReturnType" => assign_type(&mut self.return_type, next),
            "Parameters" => assign_parameters(&mut self.parameters, next),
            "Security" => assign_string(&mut self.security, next),
            "Tags" => assign_tags(&mut self.tags, next),
            _ => FieldChange::Unknown,
        }
    }
}

impl EnumModel for Enum {
    type Item = EnumItem;

    fn bridge(view: &dyn EnumView) -> Self {
        copy_enum(view)
    }

    fn items_mut(&mut self) -> &mut Vec<EnumItem> {
        &mut self.items
    }

    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange {
        match field {
            "Name" => assign_string(&mut self.name, next),
            "Tags" => assign_tags(&mut self.tags, next),
            _ => FieldChange::Unknown,
        }
    }
}

impl ItemModel for EnumItem {
    fn bridge(view: &dyn EnumItemView) -> Self {
        copy_item(view)
    }

    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange {
        match field {
            "Name" => assign_string(&mut self.name, next),
            "Value" => assign_int(&mut self.value, next),
            "Tags" => assign_tags(&mut self.tags, next),
            _ => FieldChange::Unknown,
        }
    }
}

impl Patcher for Root {
    fn patch_with(&mut self, actions: &[Action<'_>], report: &mut PatchReport) {
        engine::patch_root(self, actions, report);
    }
}

impl Patcher for Class {
    fn patch_with(&mut self, actions: &[Action<'_>], report: &mut PatchReport) {
        engine::patch_class(self, actions, report);
    }
}

impl Patcher for Member {
    fn patch_with(&mut self, actions: &[Action<'_>], report: &mut PatchReport) {
        engine::patch_member(self, actions, report);
    }
}

impl Patcher for Enum {
    fn patch_with(&mut self, actions: &[Action<'_>], report: &mut PatchReport) {
        engine::patch_enum(self, actions, report);
    }
}

impl Patcher for EnumItem {
    fn patch_with(&mut self, actions: &[Action<'_>], report: &mut PatchReport) {
        engine::patch_item(self, actions, report);
    }
}
