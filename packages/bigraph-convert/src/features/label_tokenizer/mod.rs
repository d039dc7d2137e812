// Label Tokenizer
//
// Header line → ordered (vertex index, label) fields.
//
// Labels may contain nested parentheses and commas, e.g.
// `(0, Area(2):1)(1, Foo:0)`, so the header is scanned with an explicit
// depth counter rather than split on delimiters.

pub mod domain;
pub mod scanner;

pub use domain::LabelField;
pub use scanner::tokenize_header;
