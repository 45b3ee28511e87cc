pub mod kind;
pub mod tags;
pub mod view;

pub use kind::{MemberKind, ParseKindError};
pub use tags::Tags;
pub use view::{
    ClassView, EnumItemView, EnumView, EventView, FunctionView, MemberView, ParameterView,
    PropertySecurity, PropertyView, RootView, Serialization, Taggable, TypeView,
};
