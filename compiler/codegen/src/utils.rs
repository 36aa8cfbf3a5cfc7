//! Identifier case conversion.

pub use model::capitalize_first_letter as capitalize;

/// Convert PascalCase or camelCase to snake_case.
///
/// Runs of capitals are treated as one word, so acronyms stay together:
///
/// ```
/// use codegen::utils::pascal_to_snake_case;
/// assert_eq!(pascal_to_snake_case("CPCountDownLatch"), "cp_count_down_latch");
/// assert_eq!(pascal_to_snake_case("trySetCount"), "try_set_count");
/// assert_eq!(pascal_to_snake_case("MapMessageType"), "map_message_type");
/// ```
pub fn pascal_to_snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);

    for (i, c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }

    result
}

/// Upper-case constant name for an operation: `SERVICE_OPERATION`.
///
/// Matches the historical codec naming, which upper-cases names verbatim
/// without inserting word breaks.
pub fn upper_constant_name(service: &str, operation: &str) -> String {
    format!("{}_{}", service.to_uppercase(), operation.to_uppercase())
}

/// PascalCase member name for an operation: `ServiceOperation`.
pub fn pascal_member_name(service: &str, operation: &str) -> String {
    format!("{}{}", capitalize(service), capitalize(operation))
}

/// Split a namespace on `.`, `::` or `/` into its non-empty segments.
pub fn namespace_segments(namespace: &str) -> Vec<&str> {
    namespace.split(['.', ':', '/']).filter(|s| !s.is_empty()).collect()
}
