//! Security contexts encoded in dump tags.
//!
//! The legacy dump has no security fields. A read (or member) context is a
//! tag that mentions `security` in any case; a write restriction on a property
//! is a tag of the form `ScriptWriteRestricted: [<context>]`. Every other
//! module reads and writes security through the functions here.

use crate::api::{PropertySecurity, Tags};

const WRITE_PREFIX: &str = "ScriptWriteRestricted: [";
const WRITE_SUFFIX: &str = "]";

/// Context that means "no restriction" in the structured dump.
const UNRESTRICTED: &str = "None";

fn write_context(tag: &str) -> Option<&str> {
    let rest = tag.strip_prefix(WRITE_PREFIX)?;
    Some(rest.strip_suffix(WRITE_SUFFIX).unwrap_or(rest))
}

fn is_read_context(tag: &str) -> bool {
    write_context(tag).is_none() && tag.to_ascii_lowercase().contains("security")
}

/// Empty and `None` both mean unrestricted.
pub fn normalize(context: &str) -> &str {
    if context == UNRESTRICTED {
        ""
    } else {
        context
    }
}

/// First security tag of a function, event, or callback, or empty.
pub fn member_security(tags: &Tags) -> &str {
    tags.iter().find(|tag| is_read_context(tag)).unwrap_or("")
}

pub fn property_security(tags: &Tags) -> PropertySecurity {
    let read = tags.iter().find(|tag| is_read_context(tag)).unwrap_or("");
    let write = tags.iter().find_map(write_context).unwrap_or("");
    PropertySecurity::new(read, write)
}

/// Replace the read (or member) context. Unrestricted removes it.
pub fn set_read_security(tags: &mut Tags, context: &str) {
    tags.retain(|tag| !is_read_context(tag));
    let context = normalize(context);
    if !context.is_empty() {
        tags.set_tag(context);
    }
}

/// Replace the write restriction. Unrestricted removes it.
pub fn set_write_security(tags: &mut Tags, context: &str) {
    tags.retain(|tag| write_context(tag).is_none());
    let context = normalize(context);
    if !context.is_empty() {
        tags.set_tag(format!("{WRITE_PREFIX}{context}{WRITE_SUFFIX}"));
    }
}

/// Rewrite only the parts of `tags` whose read-out differs from `wanted`.
pub fn encode_property_security(tags: &mut Tags, wanted: &PropertySecurity) {
    let current = property_security(tags);
    if normalize(&current.read) != normalize(&wanted.read) {
        set_read_security(tags, &wanted.read);
    }
    if normalize(&current.write) != normalize(&wanted.write) {
        set_write_security(tags, &wanted.write);
    }
}

pub fn encode_member_security(tags: &mut Tags, wanted: &str) {
    if normalize(member_security(tags)) != normalize(wanted) {
        set_read_security(tags, wanted);
    }
}
