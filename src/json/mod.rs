//! Representation B: the structured JSON API dump.

pub mod bridge;
pub mod model;
pub mod patch;

pub use model::{
    Callback, Class, Enum, EnumItem, Event, Function, Member, Parameter, Property, Root, Type,
};
