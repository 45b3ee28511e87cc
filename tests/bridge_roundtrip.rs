//! Cross-representation bridge tests.

use rbxapi_patcher::api::{ClassView, EnumView, MemberKind, MemberView, PropertySecurity, Taggable};
use rbxapi_patcher::{dump, json};

fn dump_part() -> dump::Class {
    dump::Class::new("Part", "BasePart")
        .with_tag("NotCreatable")
        .with_member(
            dump::Property::new("Anchored", "bool")
                .with_tag("PluginSecurity")
                .with_tag("ScriptWriteRestricted: [NotAccessibleSecurity]")
                .with_tag("readonly"),
        )
        .with_member(dump::Property::new("Parent", "Class:Instance"))
        .with_member(
            dump::Function::new(
                "Resize",
                "bool",
                vec![
                    dump::Parameter::new("Enum:NormalId", "normalId"),
                    dump::Parameter::new("int", "deltaAmount").with_default("1"),
                ],
            )
            .with_tag("RobloxScriptSecurity"),
        )
        .with_member(dump::Event::new(
            "Touched",
            vec![dump::Parameter::new("Class:BasePart", "otherPart")],
        ))
        .with_member(dump::Callback::new(
            "OnHit",
            "void",
            vec![dump::Parameter::new("Class:Instance", "hit")],
        ))
}

fn json_workspace() -> json::Class {
    json::Class::new("Workspace", "WorldRoot")
        .with_memory_category("PhysicsParts")
        .with_member(
            json::Property::new("Gravity", json::Type::new("", "float"))
                .with_security("LocalUserSecurity", "PluginSecurity")
                .with_tag("Hidden"),
        )
        .with_member(
            json::Function::new(
                "Raycast",
                json::Type::new("DataType", "RaycastResult"),
                vec![json::Parameter::new(
                    json::Type::new("DataType", "Vector3"),
                    "origin",
                )],
            )
            .with_security("RobloxScriptSecurity"),
        )
        .with_member(json::Event::new("Changed", vec![]).with_security("None"))
}

fn signature(class: &dyn ClassView) -> Vec<(String, MemberKind, Vec<String>)> {
    class
        .members()
        .into_iter()
        .map(|member| {
            let params = member
                .as_function()
                .map(|f| f.parameters())
                .or_else(|| member.as_event().map(|e| e.parameters()))
                .unwrap_or_default()
                .into_iter()
                .map(|p| {
                    let default = p.default_value().unwrap_or("-");
                    format!("{} {}={}", p.param_type(), p.name(), default)
                })
                .collect();
            (member.name().to_string(), member.kind(), params)
        })
        .collect()
}

fn security_of(member: &dyn MemberView) -> PropertySecurity {
    if let Some(property) = member.as_property() {
        return property.security();
    }
    let context = member
        .as_function()
        .map(|f| f.security())
        .or_else(|| member.as_event().map(|e| e.security()))
        .unwrap_or_default();
    PropertySecurity::new(context, "")
}

fn normalized(security: PropertySecurity) -> PropertySecurity {
    let clean = |s: String| if s == "None" { String::new() } else { s };
    PropertySecurity::new(clean(security.read), clean(security.write))
}

#[test]
fn test_dump_to_json_and_back_is_lossless() {
    let original = dump_part();
    let structured = json::bridge::copy_class(&original);
    let restored = dump::bridge::copy_class(&structured);

    assert_eq!(restored, original);
    assert_eq!(signature(&structured), signature(&original));
    assert_eq!(structured.tags(), original.tags());
}

#[test]
fn test_dump_security_reads_out_as_typed_fields() {
    let structured = json::bridge::copy_class(&dump_part());
    let json::Member::Property(anchored) = &structured.members[0] else {
        panic!("expected property");
    };
    assert_eq!(anchored.read_security, "PluginSecurity");
    assert_eq!(anchored.write_security, "NotAccessibleSecurity");
    assert_eq!(anchored.value_type, json::Type::new("", "bool"));

    let json::Member::Property(parent) = &structured.members[1] else {
        panic!("expected property");
    };
    assert_eq!(parent.value_type, json::Type::new("Class", "Instance"));

    let json::Member::Function(resize) = &structured.members[2] else {
        panic!("expected function");
    };
    assert_eq!(resize.security, "RobloxScriptSecurity");
    assert_eq!(resize.parameters[1].default.as_deref(), Some("1"));
}

#[test]
fn test_json_to_dump_and_back_preserves_read_out() {
    let original = json_workspace();
    let legacy = dump::bridge::copy_class(&original);
    let restored = json::bridge::copy_class(&legacy);

    assert_eq!(restored.name, original.name);
    assert_eq!(restored.superclass, original.superclass);
    assert_eq!(signature(&restored), signature(&original));
    assert_eq!(signature(&legacy), signature(&original));

    for (before, after) in original.members.iter().zip(&restored.members) {
        assert_eq!(
            normalized(security_of(after)),
            normalized(security_of(before)),
            "security of {}",
            before.name()
        );
        assert!(before.tags().iter().all(|tag| after.tag(tag)));
    }
}

#[test]
fn test_dump_loses_structured_only_metadata() {
    let legacy = dump::bridge::copy_class(&json_workspace());
    let restored = json::bridge::copy_class(&legacy);
    assert_eq!(restored.memory_category, "");

    let json::Member::Property(gravity) = &restored.members[0] else {
        panic!("expected property");
    };
    assert!(gravity.can_load && gravity.can_save);
    assert_eq!(gravity.category, "");
}

#[test]
fn test_enum_bridge_keeps_items_in_order() {
    let original = dump::Enum::new("NormalId")
        .with_item(dump::EnumItem::new("Right", 0))
        .with_item(dump::EnumItem::new("Top", 1))
        .with_item(dump::EnumItem::new("Back", 2));
    let structured = json::bridge::copy_enum(&original);
    let restored = dump::bridge::copy_enum(&structured);

    assert_eq!(restored, original);
    let names: Vec<_> = structured.items().iter().map(|i| i.name().to_string()).collect();
    assert_eq!(names, vec!["Right", "Top", "Back"]);
}
