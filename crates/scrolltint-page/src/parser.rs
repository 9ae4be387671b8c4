use crate::ast::{Attr, Element, PageDocument, Value};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

/// Deepest block nesting accepted. Parsing, layout and tree walks all
/// recurse per level.
pub const MAX_DEPTH: usize = 128;

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0, depth: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| (t.line, t.col))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.peek_ahead(0)
    }

    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.peek().clone() {
            Token::Ident(s) => {
                self.advance();
                Ok(s)
            }
            tok => Err(self.err(format!("expected an element name, got {:?}", tok))),
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<PageDocument, ParseError> {
        let root = self.parse_element()?;
        match self.peek() {
            Token::Eof => Ok(PageDocument { root }),
            tok => Err(self.err(format!(
                "unexpected {:?} after the root element; a page has exactly one root",
                tok
            ))),
        }
    }

    // ── Element ───────────────────────────────────────────────────────────

    fn parse_element(&mut self) -> Result<Element, ParseError> {
        let (line, col) = self.current_pos();
        let tag = self.expect_ident()?;

        let label = match self.peek().clone() {
            Token::Str(s) => {
                self.advance();
                Some(s)
            }
            _ => None,
        };

        let (attrs, children) = if self.peek() == &Token::LBrace {
            if self.depth == MAX_DEPTH {
                return Err(self.err(format!("elements nested deeper than {MAX_DEPTH} levels")));
            }
            self.depth += 1;
            let block = self.parse_block();
            self.depth -= 1;
            block?
        } else {
            (Vec::new(), Vec::new())
        };

        Ok(Element { tag, label, attrs, children, line, col })
    }

    // ── Block ─────────────────────────────────────────────────────────────

    /// Parses `{ item* }`, where `Ident ":"` starts an attribute and any other
    /// `Ident` starts a child element.
    fn parse_block(&mut self) -> Result<(Vec<Attr>, Vec<Element>), ParseError> {
        self.advance(); // `{`
        let mut attrs = Vec::new();
        let mut children = Vec::new();

        loop {
            match self.peek() {
                Token::RBrace => {
                    self.advance();
                    break;
                }
                Token::Eof => return Err(self.err("unclosed '{' block")),
                Token::Ident(_) => {
                    if self.peek_ahead(1) == &Token::Colon {
                        attrs.push(self.parse_attr()?);
                    } else {
                        children.push(self.parse_element()?);
                    }
                }
                tok => {
                    return Err(self.err(format!(
                        "unexpected {:?} inside block, expected an attribute (key: value) or an element",
                        tok
                    )));
                }
            }
        }

        Ok((attrs, children))
    }

    // ── Attr ──────────────────────────────────────────────────────────────

    fn parse_attr(&mut self) -> Result<Attr, ParseError> {
        let (line, col) = self.current_pos();
        let key = self.expect_ident()?;
        self.advance(); // `:`
        let value = self.parse_value()?;
        Ok(Attr { key, value, line, col })
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let value = match self.peek().clone() {
            Token::Str(s) => Value::Str(s),
            Token::Number(n) => Value::Number(n),
            Token::Color(c) => Value::Color(c),
            Token::Ident(s) => Value::Ident(s),
            tok => return Err(self.err(format!("expected a value, got {:?}", tok))),
        };
        self.advance();
        Ok(value)
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse a `.tint` source string into a [`PageDocument`].
pub fn parse_str(src: &str) -> Result<PageDocument, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
