//! Generic helpers exposed to the template-evaluation context.

use heck::{ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

pub fn pascal_case(text: &str) -> String {
    text.to_upper_camel_case()
}

pub fn camel_case(text: &str) -> String {
    text.to_lower_camel_case()
}

pub fn snake_case(text: &str) -> String {
    text.to_snake_case()
}

pub fn is_first(index: usize) -> bool {
    index == 0
}

pub fn is_last(index: usize, len: usize) -> bool {
    index + 1 == len
}
