use bytes::buf::Writer;
use std::io::Write;

pub const EOL: &str = "\n";

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
        }
    }
}

pub fn paint(text: &str, color: Color, colored: bool) -> String {
    if colored {
        format!("{}{}{}", color.code(), text, RESET)
    } else {
        text.to_owned()
    }
}

/// Writes `text` followed by a newline, wrapped in `color` when `colored`.
pub fn put_line(
    buffer: &mut Writer<Vec<u8>>,
    text: &str,
    color: Color,
    colored: bool,
) -> std::io::Result<()> {
    buffer.write_all(paint(text, color, colored).as_bytes())?;
    buffer.write_all(EOL.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BufMut;

    #[test]
    fn test_put_line_plain() {
        let mut buf = Vec::with_capacity(64).writer();
        put_line(&mut buf, "OK", Color::Green, false).unwrap();
        assert_eq!(buf.get_ref(), b"OK\n");
    }

    #[test]
    fn test_put_line_colored() {
        let mut buf = Vec::with_capacity(64).writer();
        put_line(&mut buf, "(nil)", Color::Yellow, true).unwrap();
        assert_eq!(buf.get_ref(), b"\x1b[33m(nil)\x1b[0m\n");
    }
}
