use std::{error::Error, fmt};

/// Code carried by [`ShortBuffer`].
pub const CODE_SHORT_BUFFER: i32 = 1;
/// Code carried by [`Unencodable`].
pub const CODE_UNENCODABLE: i32 = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// An error code: an integer, a brief message and an optional detail.
///
/// # Example
///
/// ```
/// use lecodec::errors::Code;
///
/// assert_eq!(Code::new(7, "").to_string(), "7");
/// assert_eq!(Code::new(7, "bad input").to_string(), "7:bad input");
/// assert_eq!(
///     Code::new(7, "bad input").with_detail("at byte 3").to_string(),
///     "7:bad input at byte 3"
/// );
/// ```
pub struct Code {
    code: i32,
    message: String,
    detail: Option<String>,
}

impl Code {
    /// Creates a new `Code` with no detail.
    ///
    /// # Arguments
    ///
    /// * `code: i32` - The integer code.
    /// * `message: &str` - The brief message associated with the code.
    pub fn new(code: i32, message: &str) -> Self {
        Code {
            code,
            message: message.to_owned(),
            detail: None,
        }
    }

    /// Attaches a detail, replacing any previous one.
    pub fn with_detail<D: fmt::Display>(mut self, detail: D) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    pub fn code(&self) -> i32 { self.code }

    pub fn message(&self) -> &str { &self.message }

    pub fn detail(&self) -> Option<&str> { self.detail.as_ref().map(String::as_str) }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.detail, self.message.is_empty()) {
            (Some(detail), _) => write!(f, "{}:{} {}", self.code, self.message, detail),
            (None, false) => write!(f, "{}:{}", self.code, self.message),
            (None, true) => write!(f, "{}", self.code),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A strict decode ran out of bytes before every slot was filled.
pub struct ShortBuffer {
    /// Bytes required by the slots being decoded.
    pub needed: usize,
    /// Bytes left in the buffer.
    pub available: usize,
}

impl ShortBuffer {
    /// Creates a new `ShortBuffer`
    ///
    /// # Arguments
    ///
    /// * `needed: usize` - The number of bytes the read required.
    /// * `available: usize` - The number of bytes the buffer still held.
    pub fn new(needed: usize, available: usize) -> Self { ShortBuffer { needed, available } }

    pub fn code(&self) -> Code {
        Code::new(CODE_SHORT_BUFFER, "short buffer").with_detail(format!(
            "needed {} bytes, found {}",
            self.needed, self.available
        ))
    }
}

impl Error for ShortBuffer {}

impl fmt::Display for ShortBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "source buffer too short: needed {needed} bytes, found {available}",
            needed = self.needed,
            available = self.available,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// An opaque value has no structural encoding.
pub struct Unencodable(pub String);

impl Unencodable {
    /// Creates a new `Unencodable`
    ///
    /// # Arguments
    ///
    /// * `type_name: &str` - The name of the type that could not be encoded.
    pub fn new(type_name: &str) -> Self { Unencodable(type_name.to_string()) }

    pub fn code(&self) -> Code {
        Code::new(CODE_UNENCODABLE, "unencodable value").with_detail(&self.0)
    }
}

impl Error for Unencodable {}

impl fmt::Display for Unencodable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "`{}` has no little-endian layout", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_accessors() {
        let c = Code::new(3, "oops").with_detail(42);

        assert_eq!(c.code(), 3);
        assert_eq!(c.message(), "oops");
        assert_eq!(c.detail(), Some("42"));
    }

    #[test]
    fn detail_without_message() {
        // the detail is rendered even if the message is empty
        assert_eq!(Code::new(5, "").with_detail("x").to_string(), "5: x");
    }

    #[test]
    fn short_buffer_code() {
        let code = ShortBuffer::new(8, 5).code();

        assert_eq!(code.code(), CODE_SHORT_BUFFER);
        assert_eq!(code.to_string(), "1:short buffer needed 8 bytes, found 5");
    }

    #[test]
    fn unencodable_display() {
        let e = Unencodable::new("my::Type");

        assert_eq!(e.to_string(), "`my::Type` has no little-endian layout");
        assert_eq!(e.code().to_string(), "2:unencodable value my::Type");
    }
}
