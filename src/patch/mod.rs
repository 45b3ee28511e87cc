//! Declarative patch actions and the engine that applies them.
//!
//! Application is tolerant: a target that cannot be found, a payload of the
//! wrong shape, or a field the descriptor does not have turns that one action
//! into a no-op and the rest of the sequence still applies. Pass a
//! [`PatchReport`] to [`Patcher::patch_with`] to see what was skipped.

pub mod action;
pub mod engine;
pub mod report;

pub use action::{Action, ActionKind, ActionTarget, Value};
pub use engine::{
    assign_bool, assign_int, assign_string, assign_tags, ClassModel, EnumModel, FieldChange,
    ItemModel, MemberModel, RootModel,
};
pub use report::{PatchReport, SkipReason, Skipped};

/// Anything that can apply an ordered action sequence to itself in place.
pub trait Patcher {
    fn patch_with(&mut self, actions: &[Action<'_>], report: &mut PatchReport);

    fn patch(&mut self, actions: &[Action<'_>]) {
        self.patch_with(actions, &mut PatchReport::silent());
    }
}
