//! Small shared utilities.

pub mod text;

/// Merge a controlled (host-supplied) field with internal widget state.
///
/// When the host supplies a value for a field, that value is the single
/// source of truth and internal state for the field is ignored. Applied
/// uniformly per field; never mixed within one field.
pub fn resolve<'a, T>(external: Option<&'a T>, internal: &'a T) -> &'a T {
    external.unwrap_or(internal)
}
