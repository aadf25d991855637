use std::io::{self, ErrorKind, Read};

/// Byte-oriented input with one byte of pushback.
///
/// Integer parsing reads one byte past the digits to find the end of the
/// number; the pushback slot hands that byte to the next read instead of
/// losing it.
pub struct InputReader<R> {
    inner: R,
    pending: Option<u8>,
}

impl<R: Read> InputReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: None,
        }
    }

    /// Reads the next byte, or `None` once the source is exhausted.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pending.take() {
            return Ok(Some(byte));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn unread(&mut self, byte: u8) {
        self.pending = Some(byte);
    }

    /// Reads a decimal integer: skips to the first digit, accumulates
    /// digits until a non-digit or until another digit would overflow,
    /// and pushes the terminating byte back for the next read.
    ///
    /// A leading `-` is discarded like any other non-digit, so negative
    /// numbers cannot be entered. Returns `None` if the source runs out
    /// before any digit appears.
    pub fn read_int(&mut self) -> io::Result<Option<i32>> {
        let mut value;
        loop {
            match self.read_byte()? {
                None => return Ok(None),
                Some(byte) if byte.is_ascii_digit() => {
                    value = i32::from(byte - b'0');
                    break;
                }
                Some(_) => continue,
            }
        }
        while let Some(byte) = self.read_byte()? {
            if !byte.is_ascii_digit() {
                self.unread(byte);
                break;
            }
            let digit = i32::from(byte - b'0');
            match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(next) => value = next,
                None => {
                    self.unread(byte);
                    break;
                }
            }
        }
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> InputReader<Cursor<Vec<u8>>> {
        InputReader::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_read_byte_in_order_then_none() {
        let mut r = reader("AB");
        assert_eq!(r.read_byte().unwrap(), Some(b'A'));
        assert_eq!(r.read_byte().unwrap(), Some(b'B'));
        assert_eq!(r.read_byte().unwrap(), None);
    }

    #[test]
    fn test_read_int_plain_number() {
        let mut r = reader("42");
        assert_eq!(r.read_int().unwrap(), Some(42));
        assert_eq!(r.read_int().unwrap(), None);
    }

    #[test]
    fn test_read_int_skips_leading_junk() {
        let mut r = reader("ab 7x");
        assert_eq!(r.read_int().unwrap(), Some(7));
        assert_eq!(r.read_byte().unwrap(), Some(b'x'));
    }

    #[test]
    fn test_read_int_no_digits_at_all() {
        let mut r = reader("abc");
        assert_eq!(r.read_int().unwrap(), None);
    }

    #[test]
    fn test_read_int_minus_sign_is_junk() {
        let mut r = reader("-5");
        assert_eq!(r.read_int().unwrap(), Some(5));
    }

    #[test]
    fn test_read_int_twice_across_whitespace() {
        let mut r = reader("12 34");
        assert_eq!(r.read_int().unwrap(), Some(12));
        assert_eq!(r.read_int().unwrap(), Some(34));
    }

    #[test]
    fn test_terminator_is_pushed_back() {
        let mut r = reader("99Z");
        assert_eq!(r.read_int().unwrap(), Some(99));
        assert_eq!(r.read_byte().unwrap(), Some(b'Z'));
    }

    #[test]
    fn test_read_int_handles_i32_max() {
        let mut r = reader("2147483647");
        assert_eq!(r.read_int().unwrap(), Some(i32::MAX));
    }

    #[test]
    fn test_read_int_stops_before_overflow() {
        let mut r = reader("2147483648");
        assert_eq!(r.read_int().unwrap(), Some(214748364));
        assert_eq!(r.read_byte().unwrap(), Some(b'8'));
    }

    #[test]
    fn test_read_int_leading_zero() {
        let mut r = reader("021");
        assert_eq!(r.read_int().unwrap(), Some(21));
    }

    struct InterruptingReader {
        interrupted: bool,
        inner: Cursor<Vec<u8>>,
    }

    impl Read for InterruptingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            self.inner.read(buf)
        }
    }

    #[test]
    fn test_read_byte_retries_after_interrupt() {
        let mut r = InputReader::new(InterruptingReader {
            interrupted: false,
            inner: Cursor::new(b"7".to_vec()),
        });
        assert_eq!(r.read_byte().unwrap(), Some(b'7'));
    }
}
