//! Utility functions for rendering type names in diagnostics.

use std::any::type_name;

/// Render `T` without module paths.
///
/// `std::any::type_name` returns fully qualified paths, which make contract
/// violation messages noisy:
/// - `i32` → `i32`
/// - `alloc::string::String` → `String`
/// - `alloc::vec::Vec<alloc::string::String>` → `Vec<String>`
/// - `core::option::Option<&str>` → `Option<&str>`
pub fn short_type_name<T: ?Sized>() -> String {
    strip_paths(type_name::<T>())
}

/// Keep only the last segment of every path in a rendered type.
pub(crate) fn strip_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut path = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            path.push(c);
        } else {
            push_last_segment(&mut out, &path);
            path.clear();
            out.push(c);
        }
    }
    push_last_segment(&mut out, &path);

    out
}

fn push_last_segment(out: &mut String, path: &str) {
    if let Some(segment) = path.rsplit("::").next() {
        out.push_str(segment);
    }
}
