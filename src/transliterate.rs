/// Byte-level transliteration into uppercase letters and spelled-out digits.
use std::borrow::Cow;
use std::io::Read;

/// English words for the digits `0` through `9`, indexed by value.
const DIGIT_WORDS: [&str; 10] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];

/// Transliterate a single input byte.
///
/// - ASCII letters become their uppercase form.
/// - ASCII digits become the uppercase English word (`'7'` → `"SEVEN"`).
/// - Everything else is dropped and yields an empty string.
///
/// Total over all byte values; never fails.
#[must_use]
pub fn transliterate_byte(byte: u8) -> Cow<'static, str> {
    if byte.is_ascii_alphabetic() {
        return Cow::Owned(char::from(byte.to_ascii_uppercase()).to_string());
    }
    if byte.is_ascii_digit() {
        return Cow::Borrowed(DIGIT_WORDS[usize::from(byte - b'0')]);
    }
    Cow::Borrowed("")
}

/// Pull bytes from `reader` until end-of-stream and transliterate each one.
///
/// # Errors
///
/// Returns the first I/O error reported by the reader.
pub fn transliterate_reader<R: Read>(reader: R) -> std::io::Result<String> {
    let mut text = String::new();
    for byte in reader.bytes() {
        text.push_str(&transliterate_byte(byte?));
    }
    Ok(text)
}
