use std::{iter::Peekable, str::Chars};

/// A preprocessor directive with the leading `#` removed, comments blanked out and line
/// continuations joined.
#[derive(Debug, PartialEq, Eq)]
pub struct Directive {
  pub text: String,
}

/// Tokenizes `source` just enough to find preprocessor directives.
///
/// A `#` only opens a directive when it is the first token of a logical line; comments in
/// regular code are skipped so pragmas that have been commented out are never reported.
pub fn scan_directives(source: &str) -> Vec<Directive> {
  let mut scanner = Scanner { chars: source.chars().peekable() };
  let mut directives = vec![];
  let mut at_line_start = true;

  while let Some(c) = scanner.chars.next() {
    match c {
      '\n' => at_line_start = true,
      '/' if scanner.chars.peek() == Some(&'/') => scanner.skip_line_comment(),
      '/' if scanner.chars.peek() == Some(&'*') => {
        scanner.chars.next();
        scanner.skip_block_comment();
      }
      '\\' if scanner.eat_line_continuation() => {}
      '#' if at_line_start => {
        let text = scanner.read_directive();
        directives.push(Directive { text });
      }
      c if c.is_whitespace() => {}
      _ => at_line_start = false,
    }
  }

  directives
}

struct Scanner<'a> {
  chars: Peekable<Chars<'a>>,
}

impl Scanner<'_> {
  /// Consumes a newline (`\n` or `\r\n`) directly following a backslash.
  fn eat_line_continuation(&mut self) -> bool {
    if self.chars.peek() == Some(&'\r') {
      let mut lookahead = self.chars.clone();
      lookahead.next();
      if lookahead.peek() != Some(&'\n') {
        return false;
      }
      self.chars.next();
    }
    if self.chars.peek() == Some(&'\n') {
      self.chars.next();
      return true;
    }
    false
  }

  /// Stops in front of the terminating newline.
  fn skip_line_comment(&mut self) {
    while let Some(&c) = self.chars.peek() {
      if c == '\n' {
        break;
      }
      self.chars.next();
    }
  }

  /// Expects the opening `/*` to be consumed already.
  fn skip_block_comment(&mut self) {
    while let Some(c) = self.chars.next() {
      if c == '*' && self.chars.peek() == Some(&'/') {
        self.chars.next();
        break;
      }
    }
  }

  fn read_quoted(&mut self, delim: char, out: &mut String) {
    out.push(delim);
    while let Some(&c) = self.chars.peek() {
      if c == '\n' {
        break;
      }
      self.chars.next();
      out.push(c);
      if c == delim {
        break;
      }
    }
  }

  /// Reads up to and including the newline ending the directive.
  fn read_directive(&mut self) -> String {
    let mut text = String::new();

    while let Some(c) = self.chars.next() {
      match c {
        '\n' => break,
        '\\' if self.eat_line_continuation() => text.push(' '),
        '/' if self.chars.peek() == Some(&'/') => self.skip_line_comment(),
        '/' if self.chars.peek() == Some(&'*') => {
          self.chars.next();
          self.skip_block_comment();
          text.push(' ');
        }
        '"' | '\'' => self.read_quoted(c, &mut text),
        '\r' if self.chars.peek() == Some(&'\n') => {}
        _ => text.push(c),
      }
    }

    text.trim().to_string()
  }
}
