use proptest::prelude::*;
use rbxapi_patcher::api::{Taggable, Tags};
use rbxapi_patcher::patch::{Action, Patcher};
use rbxapi_patcher::{dump, json};

#[derive(Debug, Clone)]
enum TagOp {
    Set(String),
    Unset(String),
}

fn label() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Deprecated", "Hidden", "ReadOnly", "NotBrowsable", "Yields"])
        .prop_map(str::to_string)
}

fn tag_op() -> impl Strategy<Value = TagOp> {
    prop_oneof![
        3 => label().prop_map(TagOp::Set),
        1 => label().prop_map(TagOp::Unset),
    ]
}

fn member_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z][a-z]{1,8}", 0..6)
}

proptest! {
    #[test]
    fn tags_stay_unique_and_follow_move_to_end(ops in prop::collection::vec(tag_op(), 0..40)) {
        let mut tags = Tags::new();
        let mut expected: Vec<String> = Vec::new();

        for op in &ops {
            match op {
                TagOp::Set(label) => {
                    let before = tags.len();
                    let present = tags.tag(label);
                    tags.set_tag(label.as_str());
                    expected.retain(|l| l != label);
                    expected.push(label.clone());
                    prop_assert_eq!(tags.len(), if present { before } else { before + 1 });
                    prop_assert_eq!(tags.iter().last(), Some(label.as_str()));
                }
                TagOp::Unset(label) => {
                    tags.unset_tag(label);
                    expected.retain(|l| l != label);
                    prop_assert!(!tags.tag(label));
                }
            }
        }

        let labels = tags.tags();
        prop_assert_eq!(&labels, &expected);
        for (idx, label) in labels.iter().enumerate() {
            prop_assert!(!labels[idx + 1..].contains(label));
        }
    }

    #[test]
    fn tag_replacement_deduplicates_payload(labels in prop::collection::vec(label(), 0..12)) {
        let mut root = dump::Root::new().with_class(dump::Class::new("Instance", ""));
        let template = dump::Class::new("Instance", "");
        root.patch(&[Action::change_class(&template, "Tags", labels.clone())]);

        let mut expected: Vec<String> = Vec::new();
        for label in labels {
            expected.retain(|l| *l != label);
            expected.push(label);
        }
        prop_assert_eq!(root.classes[0].tags(), expected);
    }

    #[test]
    fn bridged_copies_are_independent(names in member_names(), tag in label()) {
        let mut original = json::Class::new("Model", "PVInstance");
        for name in &names {
            original = original.with_member(json::Property::new(name, json::Type::new("", "bool")));
        }
        let snapshot = original.clone();

        let mut copy = json::bridge::copy_class(&original);
        prop_assert_eq!(&copy, &original);

        let template = copy.clone();
        let mut actions = vec![
            Action::change_class(&template, "Name", "Folder"),
            Action::change_class(&template, "Tags", vec![tag.clone()]),
        ];
        for member in &template.members {
            actions.push(Action::change_member(&template, member, "CanSave", false));
        }
        copy.patch(&actions);
        if let Some(json::Member::Property(property)) = copy.members.first_mut() {
            property.tags.set_tag("Mutated");
        }

        prop_assert_eq!(&original, &snapshot);
        prop_assert_eq!(copy.name.as_str(), "Folder");
        prop_assert!(copy.tag(&tag));
        prop_assert!(!original.tag(&tag));

        let legacy = dump::bridge::copy_class(&original);
        drop(original);
        prop_assert_eq!(legacy.members.len(), snapshot.members.len());
    }
}
