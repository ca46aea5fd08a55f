use std::rc::Rc;

use regex::Regex;

use crate::{SrcLoc, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

/// Single-pass scanner over an in-memory source buffer.
///
/// Tokens are pulled one at a time with [`Lexer::next_token`]; the stream is
/// forward-only and keeps yielding `Eof` after exhaustion. Restarting a scan
/// means constructing a new lexer.
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(file: &str, source: &str) -> Lexer {
        Lexer {
            pos: 0,
            line: 1,
            column: 1,
            // Order matters: two-character operators before their
            // one-character prefixes, comments before Slash.
            patterns: vec![
                RegexPattern { regex: Regex::new(r"\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("//.*").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new(r"[0-9]+(\.[0-9]+)?").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\"[^\"]*\"").unwrap(), handler: string_handler },
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
                RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Bang, "!") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                RegexPattern { regex: Regex::new(r"\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new(r"\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
                RegexPattern { regex: Regex::new(r"\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new(r"\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new(r"\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
                RegexPattern { regex: Regex::new(r"\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
            ],
            source: String::from(source),
            file: Rc::new(String::from(file)),
        }
    }

    /// The location of the next unconsumed character.
    pub fn loc(&self) -> SrcLoc {
        SrcLoc::new(Rc::clone(&self.file), self.line, self.column)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consumes `text` from the front of the remainder, keeping line and
    /// column in step. Newlines reset the column.
    pub fn advance_over(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += text.len();
    }

    /// Yields the next token. Unscannable input becomes an `Err` token and
    /// the scan moves one character forward rather than halting; after the
    /// end of input this keeps returning `Eof`.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::Eof, String::from("EOF"), self.loc());
            }

            let mut selected = None;
            for pattern in &self.patterns {
                if let Some(found) = pattern.regex.find(self.remainder()) {
                    if found.start() == 0 {
                        selected = Some((pattern.regex.clone(), pattern.handler));
                        break;
                    }
                }
            }

            match selected {
                Some((regex, handler)) => {
                    // Skip handlers consume input and yield nothing.
                    if let Some(token) = handler(self, &regex) {
                        return token;
                    }
                }
                None => {
                    let loc = self.loc();
                    let word: String = match self.remainder().chars().next() {
                        Some(ch) => ch.to_string(),
                        None => continue,
                    };
                    self.advance_over(&word);
                    return MK_TOKEN!(TokenKind::Err, word, loc);
                }
            }
        }
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder())?.as_str().to_string();
    lexer.advance_over(&matched);
    None
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder())?.as_str().to_string();
    let kind = if matched.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Int
    };

    let loc = lexer.loc();
    lexer.advance_over(&matched);
    Some(MK_TOKEN!(kind, matched, loc))
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder())?.as_str().to_string();
    // Inner text is kept verbatim; no escape processing.
    let word = String::from(&matched[1..matched.len() - 1]);

    let loc = lexer.loc();
    lexer.advance_over(&matched);
    Some(MK_TOKEN!(TokenKind::Str, word, loc))
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder())?.as_str().to_string();
    let kind = RESERVED_LOOKUP
        .get(matched.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let loc = lexer.loc();
    lexer.advance_over(&matched);
    Some(MK_TOKEN!(kind, matched, loc))
}

/// Drains a fresh lexer into a vector, final `Eof` token included.
pub fn tokenize(file: &str, source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(file, source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
