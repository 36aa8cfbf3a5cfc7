//! Class naming for generated message-type models.

use types::CLASS_NAME_SUFFIX;

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first_letter(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Class name for a service: `capitalize(short_name) + "MessageType"`.
///
/// The same name is used for every target language.
pub fn derive_class_name(short_name: &str) -> String {
    format!("{}{}", capitalize_first_letter(short_name), CLASS_NAME_SUFFIX)
}
