//! Representation A: the legacy plain-text API dump.

pub mod bridge;
pub mod model;
pub mod patch;
pub mod security;

pub use model::{
    Callback, Class, Enum, EnumItem, Event, Function, Member, Parameter, Property, Root, Type,
};
