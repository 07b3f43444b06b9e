//! Textkit Text Primitives
//!
//! Stateless string predicates and transformations, plus random text
//! generation. Predicates never panic: malformed input yields `false`.

pub mod helpers;
pub mod validate;
pub mod transform;
pub mod whitespace;
pub mod html;
pub mod generate;

pub use validate::{
    check_length, check_length_in, is_alpha, is_alphanumeric, is_blank, is_domain, is_email,
    is_empty, is_numeric, is_url, is_uuid, is_valid_length, LengthUnit,
};
pub use transform::{
    alpha_only, alphanumeric_only, camel_case, capitalize, kebab_case, pascal_case,
    remove_non_printable, reverse, slugify, snake_case, title_case, to_lower, to_upper, truncate,
};
pub use whitespace::{clean_whitespace, collapse_whitespace, normalize_whitespace};
pub use html::{escape_html, strip_html, unescape_html};
pub use generate::{
    lorem_paragraph, lorem_sentence, lorem_words, random_alphanumeric, random_string, uuid_v4,
    LoremConfig,
};
