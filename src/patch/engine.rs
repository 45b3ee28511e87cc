//! Dispatch shared by both representations.
//!
//! A representation plugs in by implementing the model traits below: how to
//! reach its owned collections, how to bridge a foreign view into an owned
//! value, and how to change a field by name. Everything about locating
//! targets, ordering, and the tolerant no-op policy lives here.

use crate::api::{ClassView, EnumItemView, EnumView, MemberView, Tags};
use crate::patch::action::{Action, ActionKind, ActionTarget, Value};
use crate::patch::report::{PatchReport, SkipReason};
use std::slice;

/// Outcome of a single field change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldChange {
    Applied,
    /// The field exists but the payload variant does not fit it.
    Mismatch,
    Unknown,
}

pub trait RootModel {
    type Class: ClassModel;
    type Enum: EnumModel;

    fn classes_mut(&mut self) -> &mut Vec<Self::Class>;
    fn enums_mut(&mut self) -> &mut Vec<Self::Enum>;
}

pub trait ClassModel: ClassView + Sized {
    type Member: MemberModel;

    /// Owned copy of any class view, possibly from the other representation.
    fn bridge(view: &dyn ClassView) -> Self;
    fn members_mut(&mut self) -> &mut Vec<Self::Member>;
    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange;

    fn push_member(&mut self, member: Self::Member) {
        self.members_mut().push(member);
    }
}

pub trait MemberModel: MemberView + Sized {
    /// `None` when the view has no shape this representation can hold.
    fn bridge(view: &dyn MemberView) -> Option<Self>;
    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange;
}

pub trait EnumModel: EnumView + Sized {
    type Item: ItemModel;

    fn bridge(view: &dyn EnumView) -> Self;
    fn items_mut(&mut self) -> &mut Vec<Self::Item>;
    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange;

    fn push_item(&mut self, item: Self::Item) {
        self.items_mut().push(item);
    }
}

pub trait ItemModel: EnumItemView + Sized {
    fn bridge(view: &dyn EnumItemView) -> Self;
    fn change_field(&mut self, field: &str, next: &Value<'_>) -> FieldChange;
}

pub fn patch_root<R: RootModel>(root: &mut R, actions: &[Action<'_>], report: &mut PatchReport) {
    for action in actions {
        let single = slice::from_ref(action);
        match action.target() {
            ActionTarget::Member { class, .. } => {
                match find_class(root.classes_mut(), class.name()) {
                    Some(target) => patch_class(target, single, report),
                    None => report.skip(action, class_not_found(class)),
                }
            }
            ActionTarget::Class(class) => match action.kind() {
                ActionKind::Remove => {
                    let classes = root.classes_mut();
                    match classes.iter().position(|c| c.name() == class.name()) {
                        Some(index) => {
                            classes.remove(index);
                            report.applied_action(action);
                        }
                        None => report.skip(action, class_not_found(class)),
                    }
                }
                ActionKind::Add => {
                    root.classes_mut().push(R::Class::bridge(class));
                    report.applied_action(action);
                }
                ActionKind::Change => match find_class(root.classes_mut(), class.name()) {
                    Some(target) => patch_class(target, single, report),
                    None => report.skip(action, class_not_found(class)),
                },
            },
            ActionTarget::EnumItem { enumeration, .. } => {
                match find_enum(root.enums_mut(), enumeration.name()) {
                    Some(target) => patch_enum(target, single, report),
                    None => report.skip(action, enum_not_found(enumeration)),
                }
            }
            ActionTarget::Enum(enumeration) => match action.kind() {
                ActionKind::Remove => {
                    let enums = root.enums_mut();
                    match enums.iter().position(|e| e.name() == enumeration.name()) {
                        Some(index) => {
                            enums.remove(index);
                            report.applied_action(action);
                        }
                        None => report.skip(action, enum_not_found(enumeration)),
                    }
                }
                ActionKind::Add => {
                    root.enums_mut().push(R::Enum::bridge(enumeration));
                    report.applied_action(action);
                }
                ActionKind::Change => match find_enum(root.enums_mut(), enumeration.name()) {
                    Some(target) => patch_enum(target, single, report),
                    None => report.skip(action, enum_not_found(enumeration)),
                },
            },
        }
    }
}

/// Members are matched by name and kind, so a property and an event that
/// share a name never shadow each other.
pub fn patch_class<C: ClassModel>(class: &mut C, actions: &[Action<'_>], report: &mut PatchReport) {
    for action in actions {
        match action.target() {
            ActionTarget::Member {
                class: owner,
                member,
            } => match action.kind() {
                ActionKind::Remove => {
                    let members = class.members_mut();
                    match members.iter().position(|m| same_member(m, member)) {
                        Some(index) => {
                            members.remove(index);
                            report.applied_action(action);
                        }
                        None => report.skip(action, member_not_found(owner, member)),
                    }
                }
                ActionKind::Add => match C::Member::bridge(member) {
                    Some(copy) => {
                        class.push_member(copy);
                        report.applied_action(action);
                    }
                    None => report.skip(
                        action,
                        SkipReason::UnsupportedMember {
                            member: member.name().to_string(),
                        },
                    ),
                },
                ActionKind::Change => {
                    let found = class
                        .members_mut()
                        .iter_mut()
                        .find(|m| same_member(&**m, member));
                    match found {
                        Some(target) => patch_member(target, slice::from_ref(action), report),
                        None => report.skip(action, member_not_found(owner, member)),
                    }
                }
            },
            ActionTarget::Class(_) if action.kind() == ActionKind::Change => {
                apply_change(action, report, |field, next| class.change_field(field, next));
            }
            _ => report.skip(action, SkipReason::NotApplicable),
        }
    }
}

/// Only Change actions mean anything to a single member.
pub fn patch_member<M: MemberModel>(
    member: &mut M,
    actions: &[Action<'_>],
    report: &mut PatchReport,
) {
    for action in actions {
        if action.kind() != ActionKind::Change {
            report.skip(action, SkipReason::NotApplicable);
            continue;
        }
        apply_change(action, report, |field, next| member.change_field(field, next));
    }
}

pub fn patch_enum<E: EnumModel>(enm: &mut E, actions: &[Action<'_>], report: &mut PatchReport) {
    for action in actions {
        match action.target() {
            ActionTarget::EnumItem { enumeration, item } => match action.kind() {
                ActionKind::Remove => {
                    let items = enm.items_mut();
                    match items.iter().position(|i| i.name() == item.name()) {
                        Some(index) => {
                            items.remove(index);
                            report.applied_action(action);
                        }
                        None => report.skip(action, item_not_found(enumeration, item)),
                    }
                }
                ActionKind::Add => {
                    enm.push_item(E::Item::bridge(item));
                    report.applied_action(action);
                }
                ActionKind::Change => {
                    let found = enm.items_mut().iter_mut().find(|i| i.name() == item.name());
                    match found {
                        Some(target) => patch_item(target, slice::from_ref(action), report),
                        None => report.skip(action, item_not_found(enumeration, item)),
                    }
                }
            },
            ActionTarget::Enum(_) if action.kind() == ActionKind::Change => {
                apply_change(action, report, |field, next| enm.change_field(field, next));
            }
            _ => report.skip(action, SkipReason::NotApplicable),
        }
    }
}

pub fn patch_item<I: ItemModel>(item: &mut I, actions: &[Action<'_>], report: &mut PatchReport) {
    for action in actions {
        if action.kind() != ActionKind::Change {
            report.skip(action, SkipReason::NotApplicable);
            continue;
        }
        apply_change(action, report, |field, next| item.change_field(field, next));
    }
}

fn apply_change<'a, F>(action: &Action<'a>, report: &mut PatchReport, change: F)
where
    F: FnOnce(&str, &Value<'a>) -> FieldChange,
{
    let (Some(field), Some(next)) = (action.field(), action.next()) else {
        report.skip(action, SkipReason::MissingChange);
        return;
    };
    match change(field, next) {
        FieldChange::Applied => report.applied_action(action),
        FieldChange::Mismatch => report.skip(
            action,
            SkipReason::PayloadMismatch {
                field: field.to_string(),
                found: action.next_variant(),
            },
        ),
        FieldChange::Unknown => report.skip(
            action,
            SkipReason::UnknownField {
                field: field.to_string(),
            },
        ),
    }
}

fn find_class<'c, C: ClassModel>(classes: &'c mut [C], name: &str) -> Option<&'c mut C> {
    classes.iter_mut().find(|c| c.name() == name)
}

fn find_enum<'e, E: EnumModel>(enums: &'e mut [E], name: &str) -> Option<&'e mut E> {
    enums.iter_mut().find(|e| e.name() == name)
}

fn same_member<M: MemberView + ?Sized>(candidate: &M, target: &dyn MemberView) -> bool {
    candidate.name() == target.name() && candidate.kind() == target.kind()
}

fn class_not_found(class: &dyn ClassView) -> SkipReason {
    SkipReason::ClassNotFound {
        class: class.name().to_string(),
    }
}

fn member_not_found(class: &dyn ClassView, member: &dyn MemberView) -> SkipReason {
    SkipReason::MemberNotFound {
        class: class.name().to_string(),
        member: member.name().to_string(),
    }
}

fn enum_not_found(enumeration: &dyn EnumView) -> SkipReason {
    SkipReason::EnumNotFound {
        enumeration: enumeration.name().to_string(),
    }
}

fn item_not_found(enumeration: &dyn EnumView, item: &dyn EnumItemView) -> SkipReason {
    SkipReason::ItemNotFound {
        enumeration: enumeration.name().to_string(),
        item: item.name().to_string(),
    }
}

/// Field setters shared by both representations' change handlers.
pub fn assign_string(slot: &mut String, next: &Value<'_>) -> FieldChange {
    match next.as_str() {
        Some(value) => {
            *slot = value.to_string();
            FieldChange::Applied
        }
        None => FieldChange::Mismatch,
    }
}

/// Replaces the whole set; duplicates in the payload collapse.
pub fn assign_tags(slot: &mut Tags, next: &Value<'_>) -> FieldChange {
    match next.as_tags() {
        Some(labels) => {
            *slot = Tags::from_labels(labels.iter().cloned());
            FieldChange::Applied
        }
        None => FieldChange::Mismatch,
    }
}

pub fn assign_int(slot: &mut i64, next: &Value<'_>) -> FieldChange {
    match next.as_int() {
        Some(value) => {
            *slot = value;
            FieldChange::Applied
        }
        None => FieldChange::Mismatch,
    }
}

pub fn assign_bool(slot: &mut bool, next: &Value<'_>) -> FieldChange {
    match next.as_bool() {
        Some(value) => {
            *slot = value;
            FieldChange::Applied
        }
        None => FieldChange::Mismatch,
    }
}
