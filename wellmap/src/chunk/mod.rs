//! Tile key codec for map chunks.
//!
//! Chunk payloads are stored under string keys in the format:
//! `location:(<lat1>, <lon1>)-(<lat2>, <lon2>)`
//!
//! Examples:
//! - `location:(34.7, -120.5)-(34.6, -120.4)` (Santa Barbara County)
//! - `location:(36.00035, -121.1)-(35.9, -121.0)`
//!
//! The first corner is the chunk's top-left point and the second its
//! bottom-right point. Keys are parsed with a hand-rolled grammar rather
//! than a regex so the accepted shape is explicit: the `location:(` prefix,
//! four coordinate groups, the literal separators, and nothing after the
//! closing parenthesis.
//!
//! Coordinate groups are converted with longest-valid-prefix float parsing.
//! A group that starts with a number keeps the numeric prefix (`"12abc"`
//! reads as 12) and a group with no leading number yields NaN. A key whose
//! shape matches therefore always decodes; only a shape mismatch rejects
//! the key. This keeps malformed coordinates visible in listings instead of
//! silently dropping the chunk.

mod types;

pub use types::{BoundingBox, GeoPoint};

/// Literal prefix every tile key starts with.
const KEY_PREFIX: &str = "location:(";
/// Separator between the two corner points.
const POINT_SEPARATOR: &str = ")-(";
/// Separator between latitude and longitude within a point.
const COORD_SEPARATOR: &str = ", ";
/// Closing parenthesis terminating the key.
const KEY_SUFFIX: &str = ")";

/// Decodes a store key into the map chunk it identifies.
///
/// Returns `None` when the key is not a tile key at all (wrong prefix,
/// missing separators, empty coordinate group, or trailing text). A key
/// with the right shape but unparseable coordinate text still decodes, with
/// NaN standing in for each group that has no numeric prefix.
///
/// # Arguments
///
/// * `key` - Store key to decode (e.g., `"location:(34.7, -120.5)-(34.6, -120.4)"`)
///
/// # Examples
///
/// ```
/// use wellmap::chunk::decode_tile_key;
///
/// let chunk = decode_tile_key("location:(34.7, -120.5)-(34.6, -120.4)").unwrap();
/// assert_eq!(chunk.top_left.lat, 34.7);
/// assert_eq!(chunk.top_left.lon, -120.5);
/// assert_eq!(chunk.bottom_right.lat, 34.6);
/// assert_eq!(chunk.bottom_right.lon, -120.4);
///
/// assert!(decode_tile_key("user:1001").is_none());
/// ```
pub fn decode_tile_key(key: &str) -> Option<BoundingBox> {
    let rest = key.strip_prefix(KEY_PREFIX)?;

    let (lat1, rest) = take_coordinate(rest, COORD_SEPARATOR)?;
    let (lon1, rest) = take_coordinate(rest, POINT_SEPARATOR)?;
    let (lat2, rest) = take_coordinate(rest, COORD_SEPARATOR)?;
    let (lon2, rest) = take_coordinate(rest, KEY_SUFFIX)?;

    // Anchored: nothing may follow the closing parenthesis.
    if !rest.is_empty() {
        return None;
    }

    Some(BoundingBox::from_corners(lat1, lon1, lat2, lon2))
}

/// Encodes a map chunk back into its store key.
///
/// Coordinates are rendered with the shortest decimal form that parses back
/// to the same value, so `decode_tile_key(&encode_tile_key(&chunk))` returns
/// the original chunk exactly for finite coordinates.
///
/// # Arguments
///
/// * `chunk` - The bounding box to encode
///
/// # Examples
///
/// ```
/// use wellmap::chunk::{encode_tile_key, BoundingBox};
///
/// let chunk = BoundingBox::from_corners(34.7, -120.5, 34.6, -120.4);
/// assert_eq!(
///     encode_tile_key(&chunk),
///     "location:(34.7, -120.5)-(34.6, -120.4)"
/// );
/// ```
pub fn encode_tile_key(chunk: &BoundingBox) -> String {
    format!(
        "location:({}, {})-({}, {})",
        chunk.top_left.lat, chunk.top_left.lon, chunk.bottom_right.lat, chunk.bottom_right.lon
    )
}

/// Splits the next coordinate group off `input` at the first occurrence of
/// `delimiter` and converts it with prefix float parsing.
///
/// The group must be non-empty and comma-free; commas only appear in keys as
/// part of the `", "` separator, so a stray comma means the key shape is
/// wrong rather than a coordinate being odd.
fn take_coordinate<'a>(input: &'a str, delimiter: &str) -> Option<(f64, &'a str)> {
    let end = input.find(delimiter)?;
    let group = &input[..end];

    if group.is_empty() || group.contains(',') {
        return None;
    }

    Some((parse_float_prefix(group), &input[end + delimiter.len()..]))
}

/// Converts the longest numeric prefix of `group` to an `f64`, or NaN when
/// no numeric prefix exists.
///
/// Accepted prefix shape: optional leading whitespace, an optional sign,
/// digits with at most one decimal point (at least one digit overall), and
/// an exponent part only when at least one exponent digit follows. Anything
/// after the prefix is ignored. Alphabetic spellings such as `"inf"` or
/// `"NaN"` are not numeric prefixes and yield NaN like any other text.
fn parse_float_prefix(group: &str) -> f64 {
    let text = group.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    // Optional sign.
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    // Integer digits.
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    // Optional fraction. A bare trailing dot ("1.") is part of the number,
    // but a dot with no digits on either side is not.
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Optional exponent, only consumed when at least one digit follows it
    // ("1e5" includes the exponent, "1e" stops at the mantissa).
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    // The scanned prefix is always a valid float literal; NaN covers the
    // impossible parse failure rather than a panic.
    text[..end].parse().unwrap_or(f64::NAN)
}

/// Counts leading ASCII digits.
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
