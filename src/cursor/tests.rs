use super::*;

#[test]
fn test_str_cursor_walk() {
    let mut cursor = StrCursor::new("abc");

    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.peek(), Ok(Some(b'a')));
    // Peeking does not advance.
    assert_eq!(cursor.peek(), Ok(Some(b'a')));

    cursor.advance().unwrap();
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.peek(), Ok(Some(b'b')));

    cursor.advance().unwrap();
    cursor.advance().unwrap();
    assert_eq!(cursor.position(), 3);
    assert_eq!(cursor.peek(), Ok(None));
    assert_eq!(cursor.at_end(), Ok(true));
}

#[test]
fn test_str_cursor_retreat() {
    let mut cursor = StrCursor::new("xy");

    cursor.advance().unwrap();
    assert_eq!(cursor.peek(), Ok(Some(b'y')));

    cursor.retreat();
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.peek(), Ok(Some(b'x')));
}

#[test]
fn test_str_cursor_empty_input() {
    let mut cursor = StrCursor::new("");
    assert_eq!(cursor.at_end(), Ok(true));
    assert_eq!(cursor.peek(), Ok(None));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_read_cursor_walk() {
    let mut cursor = ReadCursor::new(&b"abc"[..]);

    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.peek(), Ok(Some(b'a')));
    assert_eq!(cursor.peek(), Ok(Some(b'a')));

    cursor.advance().unwrap();
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.peek(), Ok(Some(b'b')));

    cursor.advance().unwrap();
    cursor.advance().unwrap();
    assert_eq!(cursor.position(), 3);
    assert_eq!(cursor.at_end(), Ok(true));
    // End of input latches.
    assert_eq!(cursor.peek(), Ok(None));
    assert_eq!(cursor.peek(), Ok(None));
}

#[test]
fn test_read_cursor_pushback() {
    let mut cursor = ReadCursor::new(&b"12,"[..]);

    cursor.advance().unwrap();
    cursor.advance().unwrap();
    cursor.advance().unwrap();
    assert_eq!(cursor.position(), 3);

    // Un-read the comma, then consume it again.
    cursor.retreat();
    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.peek(), Ok(Some(b',')));
    cursor.advance().unwrap();
    assert_eq!(cursor.position(), 3);
    assert_eq!(cursor.at_end(), Ok(true));
}

#[test]
fn test_read_cursor_pushback_with_lookahead_pending() {
    let mut cursor = ReadCursor::new(&b"ab"[..]);

    cursor.advance().unwrap();
    // Fetch 'b' into the lookahead slot before rewinding.
    assert_eq!(cursor.peek(), Ok(Some(b'b')));
    cursor.retreat();

    assert_eq!(cursor.peek(), Ok(Some(b'a')));
    cursor.advance().unwrap();
    assert_eq!(cursor.peek(), Ok(Some(b'b')));
    cursor.advance().unwrap();
    assert_eq!(cursor.at_end(), Ok(true));
}

#[test]
fn test_read_cursor_io_error() {
    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("broken pipe"))
        }
    }

    let mut cursor = ReadCursor::new(FailingReader);
    match cursor.peek() {
        Err(ParseError::Io { message }) => assert!(message.contains("broken pipe")),
        other => panic!("expected an i/o error, got {:?}", other),
    }
}

#[test]
fn test_read_cursor_retries_interrupted_reads() {
    struct InterruptedOnce {
        interrupted: bool,
    }

    impl std::io::Read for InterruptedOnce {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.interrupted {
                buf[0] = b'7';
                Ok(1)
            } else {
                self.interrupted = true;
                Err(std::io::Error::from(std::io::ErrorKind::Interrupted))
            }
        }
    }

    let mut cursor = ReadCursor::new(InterruptedOnce { interrupted: false });
    assert_eq!(cursor.peek(), Ok(Some(b'7')));
}
