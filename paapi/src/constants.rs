use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Fixed fields merged into every request.
pub const SERVICE: &str = "AWSECommerceService";
pub const API_VERSION: &str = "2011-08-01";

/// Request path shared by every regional endpoint.
pub const REQUEST_PATH: &str = "/onca/xml";

/// AsciiSet for the service's strict RFC 3986 encoding.
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
///
/// Space must become `%20` (never `+`), and `+`/`*` must be escaped, or the
/// service recomputes a different signature.
pub static STRICT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
