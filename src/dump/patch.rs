//! Patch support for dump descriptors.

use crate::api::{ClassView, EnumItemView, EnumView, MemberView, Tags};
use crate::dump::bridge::{
    copy_class, copy_enum, copy_item, copy_member, copy_parameters, copy_type,
};
use crate::dump::model::{
    Callback, Class, Enum, EnumItem, Event, Function, Member, Parameter, Property, Root, Type,
};
use crate::dump::security;
use crate::patch::engine::{self, assign_int, assign_string, assign_tags};
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

    fn push_member(&mut self, mut member: Member) {
        member.set_class(&self.name);
        self.members.push(member);
    }

    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange {
        match field {
            "Name" => {
                let outcome = assign_string(&mut self.name, next);
                if outcome == FieldChange::Applied {
                    for member in &mut self.members {
                        member.set_class(&self.name);
                    }
                }
                outcome
            }
            "Superclass" => assign_string(&mut self.superclass, next),
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

fn assign_type(slot: &mut Type, next: &Value<'_>) -> FieldChange {
    match next {
        Value::Type(ty) => *slot = copy_type(*ty),
        Value::String(packed) => *slot = Type::new(packed.as_str()),
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

fn assign_security(
    tags: &mut Tags,
    next: &Value<'_>,
    write: fn(&mut Tags, &str),
) -> FieldChange {
    match next.as_str() {
        Some(context) => {
            write(tags, context);
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
            "ReadSecurity" => assign_security(&mut self.tags, next, security::set_read_security),
            "WriteSecurity" => assign_security(&mut self.tags, next, security::set_write_security),
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
            "Security" => assign_security(&mut self.tags, next, security::set_read_security),
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
            "Security" => assign_security(&mut self.tags, next, security::set_read_security),
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
            "Security" => assign_security(&mut self.tags, next, security::set_read_security),
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

    fn push_item(&mut self, mut item: EnumItem) {
        item.enum_name = self.name.clone();
        self.items.push(item);
    }

    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange {
        match field {
            "Name" => {
                let outcome = assign_string(&mut self.name, next);
                if outcome == FieldChange::Applied {
                    for item in &mut self.items {
                        item.enum_name = self.name.clone();
                    }
                }
                outcome
            }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ParameterView, PropertyView, RootView, Taggable, TypeView};

    fn sample_root() -> Root {
        Root::new()
            .with_class(
                Class::new("Instance", "")
                    .with_member(Property::new("Name", "string"))
                    .with_member(Event::new("Changed", vec![Parameter::new("string", "property")])),
            )
            .with_enum(
                Enum::new("Material")
                    .with_item(EnumItem::new("Plastic", 0))
                    .with_item(EnumItem::new("Wood", 1)),
            )
    }

    #[test]
    fn test_change_value_type_accepts_string_or_type() {
        let mut root = sample_root();
        let template = root.classes[0].clone();
        let target = template.members[0].clone();

        let packed = Type::new("Content:string");
        root.patch(&[Action::change_member(&template, &target, "ValueType", "int")]);
        assert_eq!(
            root.classes[0].members[0].as_property().unwrap().value_type().name(),
            "int"
        );

        root.patch(&[Action::change_member(
            &template,
            &target,
            "ValueType",
            &packed as &dyn TypeView,
        )]);
        let value_type = root.find_class("Instance").unwrap().members()[0]
            .as_property()
            .unwrap()
            .value_type()
            .to_string();
        assert_eq!(value_type, "Content:string");
    }

    #[test]
    fn test_change_read_security_rewrites_tags() {
        let mut root = sample_root();
        let template = root.classes[0].clone();
        let target = template.members[0].clone();
        root.patch(&[
            Action::change_member(&template, &target, "ReadSecurity", "PluginSecurity"),
            Action::change_member(&template, &target, "WriteSecurity", "RobloxSecurity"),
        ]);
        let member = &root.classes[0].members[0];
        let security = member.as_property().unwrap().security();
        assert_eq!(security.read, "PluginSecurity");
        assert_eq!(security.write, "RobloxSecurity");
        assert!(member.tag("ScriptWriteRestricted: [RobloxSecurity]"));
    }

    #[test]
    fn test_rename_class_updates_member_owner() {
        let mut root = sample_root();
        let template = root.classes[0].clone();
        root.patch(&[Action::change_class(&template, "Name", "Object")]);
        assert_eq!(root.classes[0].name, "Object");
        assert!(root.classes[0].members.iter().all(|m| m.class() == "Object"));
    }

    #[test]
    fn test_added_item_records_owner() {
        let mut root = sample_root();
        let template = root.enums[0].clone();
        let item = EnumItem::new("Slate", 800);
        root.patch(&[Action::add_item(&template, &item)]);
        let added = root.enums[0].items.last().unwrap();
        assert_eq!(added.name, "Slate");
        assert_eq!(added.enum_name, "Material");
    }

    #[test]
    fn test_payload_mismatch_is_reported() {
        let mut root = sample_root();
        let template = root.classes[0].clone();
        let mut report = PatchReport::recording();
        root.patch_with(
            &[Action::change_class(&template, "Superclass", 5_i64)],
            &mut report,
        );
        assert_eq!(root, sample_root());
        assert_eq!(report.applied(), 0);
        assert_eq!(report.skipped().len(), 1);
        assert_eq!(
            report.skipped()[0].to_string(),
            "Change Class Instance Superclass: field 'Superclass' does not accept a Int payload"
        );
    }

    fn part() -> Class {
        Class::new("Part", "BasePart")
            .with_member(
                Function::new("Resize", "bool", vec![Parameter::new("NormalId", "normalId")])
                    .with_tag("PluginSecurity"),
            )
            .with_member(Callback::new("OnHit", "void", vec![]))
            .with_member(Event::new("Touched", vec![]))
    }

    #[test]
    fn test_change_function_fields_from_structured_payloads() {
        let mut class = part();
        let template = class.clone();
        let resize = template.members[0].clone();
        let instance = crate::json::Type::new("Class", "Instance");
        class.patch(&[
            Action::change_member(&template, &resize, "ReturnType", &instance as &dyn TypeView),
            Action::change_member(&template, &resize, "Security", "None"),
        ]);

        let Member::Function(function) = &class.members[0] else {
            panic!("expected function");
        };
        assert_eq!(function.return_type.as_str(), "Class:Instance");
        assert!(function.tags.is_empty());
        assert_eq!(class.members[0].as_function().unwrap().security(), "");
    }

    #[test]
    fn test_change_callback_parameters_and_return_type() {
        let mut class = part();
        let template = class.clone();
        let on_hit = template.members[1].clone();
        let params = [crate::json::Parameter::new(
            crate::json::Type::new("Enum", "NormalId"),
            "face",
        )
        .with_default("Top")];
        class.patch(&[
            Action::change_member(
                &template,
                &on_hit,
                "Parameters",
                Value::Parameters(params.iter().map(|p| p as &dyn ParameterView).collect()),
            ),
            Action::change_member(&template, &on_hit, "ReturnType", "Tuple"),
        ]);

        let Member::Callback(callback) = &class.members[1] else {
            panic!("expected callback");
        };
        assert_eq!(callback.return_type.as_str(), "Tuple");
        assert_eq!(callback.parameters.len(), 1);
        assert_eq!(callback.parameters[0].ty.as_str(), "Enum:NormalId");
        assert_eq!(callback.parameters[0].name, "face");
        assert_eq!(callback.parameters[0].default.as_deref(), Some("Top"));
        assert_eq!(class.members[1].kind(), crate::api::MemberKind::Callback);
    }

    #[test]
    fn test_change_event_security_adds_tag() {
        let mut class = part();
        let template = class.clone();
        let touched = template.members[2].clone();
        class.patch(&[Action::change_member(
            &template,
            &touched,
            "Security",
            "RobloxScriptSecurity",
        )]);

        let event = &class.members[2];
        assert_eq!(event.tags(), vec!["RobloxScriptSecurity"]);
        assert_eq!(event.as_event().unwrap().security(), "RobloxScriptSecurity");
    }

    #[test]
    fn test_previous_value_is_ignored() {
        let mut class = part();
        let template = class.clone();
        let action = Action::change_class(&template, "Superclass", "PVInstance")
            .with_prev("SomethingElse");
        assert_eq!(action.prev().and_then(Value::as_str), Some("SomethingElse"));

        class.patch(&[action]);
        assert_eq!(class.superclass, "PVInstance");
    }
}

