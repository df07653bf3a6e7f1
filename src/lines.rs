use std::io::{self, BufRead};

/// Reads one line, without its `\n` or `\r\n` terminator. `None` at the end of input.
///
/// Bytes that aren't valid UTF-8 become `U+FFFD` instead of failing the read, so one badly
/// encoded line doesn't cost the rest of the input.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
