//! plainloc URL - Absolute URL Codec
//!
//! Parsing and re-composition of absolute URLs with RFC 3986
//! character-class percent-encoding, narrower than generic
//! encode-everything schemes.

mod encode;
mod parse;
mod query;

pub use encode::{
    encode_path, encode_path_segment, encode_query_token, percent_decode, percent_decode_query,
};
pub use parse::{MalformedUrlError, ParsedUrl, compose_origin, default_port, parse_absolute_url};
pub use query::{QueryMap, QueryValue, decode_query_string, encode_query_string};
