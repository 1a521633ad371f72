//! Structural literal parser
//!
//! The external parser process emits blocks as a nested-list literal with
//! bare (unquoted) alphanumeric/parenthesis tokens. Parsing happens in two
//! steps: a fixed set of boundary-rewrite rules quotes the bare tokens, then
//! a recursive-descent pass reads the rewritten text into [`Tree`] values,
//! classifying every list as a sequence or an alternation exactly once.

use crate::error::{Error, Result};
use crate::structure::{Block, Tree};
use once_cell::sync::Lazy;
use regex::Regex;

/// Opening quote: token start preceded by whitespace or `[`
static QUOTE_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\s\[])([\w()])").unwrap());

/// Closing quote: token end followed by `,` or `]`
static QUOTE_CLOSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\w()])([,\]])").unwrap());

/// The empty list literal stands for an empty quoted leaf
static EMPTY_LIST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\]").unwrap());

/// Quote bare tokens so the blob reads as a quoted nested-list literal.
///
/// Tokens are runs of word characters and parentheses; the rewrite only
/// recognizes them at the list syntax's own boundaries, so no escaping of
/// structural characters inside a token is supported.
pub fn quote_bare_tokens(content: &str) -> String {
    let content = QUOTE_OPEN_RE.replace_all(content, "${1}\"${2}");
    let content = QUOTE_CLOSE_RE.replace_all(&content, "${1}\"${2}");
    EMPTY_LIST_RE.replace_all(&content, "[\"\"]").into_owned()
}

/// Parse a structural literal into its root blocks.
///
/// The top level is either one list whose elements are the root blocks, or
/// several comma-separated items (a bare tuple), normalized to the same
/// shape. Whitespace-only input is an empty collection of root blocks;
/// anything unparsable is a [`Error::MalformedLiteral`], and an alternation
/// containing a non-list element is a [`Error::InvalidStructure`].
pub fn parse_blocks(content: &str) -> Result<Vec<Block>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let rewritten = quote_bare_tokens(content);
    let mut items = Parser::new(&rewritten).parse_input()?;
    let roots = if items.len() == 1 {
        match items.remove(0) {
            Literal::List(elems) => elems,
            atom @ Literal::Atom(_) => vec![atom],
        }
    } else {
        items
    };
    roots.into_iter().map(classify_node).collect()
}

/// Raw literal shape before sequence/alternation classification
#[derive(Debug, Clone, PartialEq, Eq)]
enum Literal {
    Atom(String),
    List(Vec<Literal>),
}

/// Classify a raw literal in node position.
///
/// A list is an alternation iff its first element is itself a list; every
/// element of an alternation must then be a list and is read as one
/// alternative sequence. Anything else is a sequence of nodes.
fn classify_node(lit: Literal) -> Result<Tree<String>> {
    match lit {
        Literal::Atom(text) => Ok(Tree::Leaf(text)),
        Literal::List(items) => {
            if matches!(items.first(), Some(Literal::List(_))) {
                let alts = items
                    .into_iter()
                    .map(|item| match item {
                        Literal::List(elems) => {
                            elems.into_iter().map(classify_node).collect::<Result<Vec<_>>>()
                        }
                        Literal::Atom(text) => Err(Error::structure(format!(
                            "alternation element must be a list, got token {:?}",
                            text
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Tree::Alternation(alts))
            } else {
                let children = items
                    .into_iter()
                    .map(classify_node)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Tree::Sequence(children))
            }
        }
    }
}

/// Recursive-descent reader for the rewritten (fully quoted) literal text
struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Parser { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::malformed(self.pos, message)
    }

    /// Top level: one or more comma-separated items, trailing comma allowed
    fn parse_input(&mut self) -> Result<Vec<Literal>> {
        self.skip_whitespace();
        let mut items = vec![self.parse_item()?];
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                    self.skip_whitespace();
                    if self.peek().is_none() {
                        break;
                    }
                    items.push(self.parse_item()?);
                }
                Some(c) => return Err(self.error(format!("unexpected character {:?}", c))),
                None => break,
            }
        }
        Ok(items)
    }

    fn parse_item(&mut self) -> Result<Literal> {
        match self.peek() {
            Some('[') => self.parse_list(),
            Some('"') => Ok(Literal::Atom(self.parse_string()?)),
            Some(c) => Err(self.error(format!("expected '[' or string, found {:?}", c))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_list(&mut self) -> Result<Literal> {
        self.bump();
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.bump();
            // empty list literal: always the empty-leaf placeholder
            return Ok(Literal::List(vec![Literal::Atom(String::new())]));
        }
        let mut items = vec![self.parse_item()?];
        loop {
            self.skip_whitespace();
            match self.bump() {
                Some(',') => {
                    self.skip_whitespace();
                    if self.peek() == Some(']') {
                        self.bump();
                        break;
                    }
                    items.push(self.parse_item()?);
                }
                Some(']') => break,
                Some(c) => return Err(self.error(format!("expected ',' or ']', found {:?}", c))),
                None => return Err(self.error("unterminated list")),
            }
        }
        Ok(Literal::List(items))
    }

    /// Quoted token; no escape sequences exist in the rewritten text
    fn parse_string(&mut self) -> Result<String> {
        self.bump();
        let start = self.pos;
        loop {
            match self.bump() {
                Some('"') => {
                    let end = self.pos - 1;
                    return Ok(self.src[start..end].to_string());
                }
                Some(_) => {}
                None => return Err(self.error("unterminated string")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_bare_tokens() {
        assert_eq!(quote_bare_tokens("[a, b]"), "[\"a\", \"b\"]");
        assert_eq!(quote_bare_tokens("[a, [b, c]]"), "[\"a\", [\"b\", \"c\"]]");
        assert_eq!(quote_bare_tokens("[]"), "[\"\"]");
        assert_eq!(quote_bare_tokens("[f(x), g]"), "[\"f(x)\", \"g\"]");
    }

    #[test]
    fn test_quote_call_tokens() {
        // parentheses are token characters
        assert_eq!(quote_bare_tokens("[assign(JFrame)]"), "[\"assign(JFrame)\"]");
    }

    #[test]
    fn test_empty_list_inside_sequence() {
        assert_eq!(quote_bare_tokens("[a, []]"), "[\"a\", [\"\"]]");
    }

    #[test]
    fn test_parse_single_block() {
        let blocks = parse_blocks("[[a, b]]").unwrap();
        assert_eq!(
            blocks,
            vec![Tree::Sequence(vec![
                Tree::Leaf("a".to_string()),
                Tree::Leaf("b".to_string())
            ])]
        );
    }

    #[test]
    fn test_parse_alternation() {
        let blocks = parse_blocks("[[s1, [[a1], [b1]], s2]]").unwrap();
        assert_eq!(
            blocks,
            vec![Tree::Sequence(vec![
                Tree::Leaf("s1".to_string()),
                Tree::Alternation(vec![
                    vec![Tree::Leaf("a1".to_string())],
                    vec![Tree::Leaf("b1".to_string())],
                ]),
                Tree::Leaf("s2".to_string()),
            ])]
        );
    }

    #[test]
    fn test_whitespace_only_input_is_empty() {
        assert!(parse_blocks("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(matches!(
            parse_blocks("[a, b"),
            Err(Error::MalformedLiteral { .. })
        ));
    }

    #[test]
    fn test_mixed_alternation_is_rejected() {
        assert!(matches!(
            parse_blocks("[[[a], b]]"),
            Err(Error::InvalidStructure { .. })
        ));
    }
}
