#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Tree-sitter parser wrapper for Starlark build files.
//!
//! Starlark is syntactically a subset of Python, so the Python grammar is
//! used to build the syntax tree.

use std::fmt::Formatter;

use anyhow::{Context, Result, anyhow};
use tree_sitter::{Node, Query, QueryCursor, StreamingIterator, Tree};

use crate::{constants::RULE_CALL_QUERY, error::ReleaseError};

/// Value passed to a keyword argument of a rule call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// A plain string literal, already unescaped.
    Literal(String),
    /// A plain string literal whose escape sequences do not decode.
    Malformed(String),
    /// Anything else, kept as source text for error messages.
    Expression(String),
}

peg::parser! {
    /// grammar for the body of a single- or double-quoted Starlark string
    grammar literal_parser() for str {
        /// decodes every character and escape sequence of the body
        pub rule body() -> String
            = parts:part()* { parts.into_iter().flatten().collect() }

        /// one source character, one escape, or a line continuation
        rule part() -> Option<char>
            = "\\\n" { None }
            / "\\" e:escape() { Some(e) }
            / c:[^ '\\'] { Some(c) }

        /// the character an escape sequence stands for, backslash excluded
        rule escape() -> char
            = "\\" { '\\' }
            / "'" { '\'' }
            / "\"" { '"' }
            / "n" { '\n' }
            / "t" { '\t' }
            / "r" { '\r' }
            / "a" { '\x07' }
            / "b" { '\x08' }
            / "f" { '\x0c' }
            / "v" { '\x0b' }
            / "x" h:$(hex()*<2>) {? code_point(h, 16) }
            / "u" h:$(hex()*<4>) {? code_point(h, 16) }
            / "U" h:$(hex()*<8>) {? code_point(h, 16) }
            / o:$(['0'..='7']*<1,3>) {? code_point(o, 8) }

        /// a single hexadecimal digit
        rule hex() = ['0'..='9' | 'a'..='f' | 'A'..='F']
    }
}

/// Converts the digits of a numeric escape to the character they name.
fn code_point(digits: &str, radix: u32) -> Result<char, &'static str> {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
        .ok_or("a valid unicode code point")
}

/// A single call of a rule such as `maven_jar(name = "...", ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCall {
    /// Name of the rule being called.
    rule:     String,
    /// 1-based line where the call starts.
    line:     usize,
    /// Keyword arguments in source order. Positional arguments are dropped.
    keywords: Vec<(String, ArgValue)>,
}

impl RuleCall {
    /// Name of the rule being called.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// 1-based line where the call starts.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the raw value of a keyword argument, if present.
    pub fn keyword(&self, name: &str) -> Option<&ArgValue> {
        self.keywords
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns the string value of a keyword argument, if present.
    ///
    /// Fails when the argument is present but is not a string literal.
    pub fn literal(&self, name: &str) -> Result<Option<&str>, ReleaseError> {
        match self.keyword(name) {
            None => Ok(None),
            Some(ArgValue::Literal(value)) => Ok(Some(value.as_str())),
            Some(ArgValue::Malformed(found)) => Err(ReleaseError::InvalidEscape {
                rule:  self.rule.clone(),
                field: name.to_string(),
                line:  self.line,
                found: found.clone(),
            }),
            Some(ArgValue::Expression(found)) => Err(ReleaseError::UnsupportedArgument {
                rule:  self.rule.clone(),
                field: name.to_string(),
                line:  self.line,
                found: found.clone(),
            }),
        }
    }
}

/// A struct that wraps a tree-sitter parser object and source code.
#[derive(Clone)]
pub struct Parser {
    /// The source code being parsed.
    code: String,
    /// The parse tree.
    tree: Tree,
    /// The tree-sitter grammar language.
    lang: tree_sitter::Language,
}

/// Returns the compiled tree-sitter grammar used for Starlark.
fn starlark_language() -> tree_sitter::Language {
    tree_sitter_python::LANGUAGE.into()
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("bytes", &self.code.len())
            .finish()
    }
}

impl Parser {
    /// Returns a new parser object.
    ///
    /// * `source_code`: the source code to be parsed
    pub fn new(source_code: String) -> Result<Self> {
        let mut parser = tree_sitter::Parser::new();
        let language = starlark_language();

        parser
            .set_language(&language)
            .with_context(|| "Failed to load Starlark grammar")?;
        let tree = parser
            .parse(source_code.as_str(), None)
            .ok_or_else(|| anyhow!("Error parsing Starlark code"))?;

        Ok(Self {
            code: source_code,
            tree,
            lang: language,
        })
    }

    /// Returns the 1-based line of the first syntax error, if the tree has
    /// any.
    pub fn first_error_line(&self) -> Option<usize> {
        first_error(self.tree.root_node()).map(|node| node.start_position().row + 1)
    }

    /// Fails with [`ReleaseError::Syntax`] if the source did not parse
    /// cleanly.
    pub fn ensure_valid(&self) -> Result<(), ReleaseError> {
        match self.first_error_line() {
            Some(line) => Err(ReleaseError::Syntax(line)),
            None => Ok(()),
        }
    }

    /// Returns every call of `rule` in the file, at any nesting depth, in
    /// source order.
    ///
    /// * `rule`: name of the rule to look for, e.g. `maven_jar`
    pub fn rule_calls(&self, rule: &str) -> Result<Vec<RuleCall>> {
        let query = Query::new(&self.lang, RULE_CALL_QUERY)
            .with_context(|| format!("Failed to compile tree-sitter query: {RULE_CALL_QUERY}"))?;
        let rule_index = query
            .capture_index_for_name("rule")
            .ok_or_else(|| anyhow!("Capture name rule not present in query"))?;
        let args_index = query
            .capture_index_for_name("args")
            .ok_or_else(|| anyhow!("Capture name args not present in query"))?;

        let source = self.code.as_bytes();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, self.tree.root_node(), source);
        let mut calls = Vec::new();

        while let Some(m) = matches.next() {
            let callee = m.captures.iter().find(|c| c.index == rule_index);
            let args = m.captures.iter().find(|c| c.index == args_index);
            let (Some(callee), Some(args)) = (callee, args) else {
                continue;
            };

            let name = callee
                .node
                .utf8_text(source)
                .context("Cannot map capture to source text")?;
            if name != rule {
                continue;
            }

            calls.push(RuleCall {
                rule:     name.to_string(),
                line:     callee.node.start_position().row + 1,
                keywords: keyword_arguments(args.node, source)?,
            });
        }

        Ok(calls)
    }
}

/// Depth-first search for the first `ERROR` or `MISSING` node.
fn first_error<'t>(node: Node<'t>) -> Option<Node<'t>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

/// Collects `name = value` pairs from an `argument_list` node.
fn keyword_arguments(args: Node<'_>, source: &[u8]) -> Result<Vec<(String, ArgValue)>> {
    let mut cursor = args.walk();
    let mut keywords = Vec::new();

    for child in args.named_children(&mut cursor) {
        if child.kind() != "keyword_argument" {
            continue;
        }
        let (Some(name), Some(value)) = (
            child.child_by_field_name("name"),
            child.child_by_field_name("value"),
        ) else {
            continue;
        };

        let name = name
            .utf8_text(source)
            .context("Cannot map keyword name to source text")?;
        keywords.push((name.to_string(), arg_value(value, source)?));
    }

    Ok(keywords)
}

/// Classifies an argument expression as a plain string literal or not.
fn arg_value(node: Node<'_>, source: &[u8]) -> Result<ArgValue> {
    let text = node
        .utf8_text(source)
        .context("Cannot map argument value to source text")?;

    // f-strings, byte strings, raw strings and triple-quoted strings all
    // count as expressions.
    let plain = node.kind() == "string"
        && (text.starts_with('"') || text.starts_with('\''))
        && !text.starts_with("\"\"\"")
        && !text.starts_with("'''")
        && !has_interpolation(node);
    if !plain {
        return Ok(ArgValue::Expression(text.to_string()));
    }

    // The opening and closing quotes are both a single ASCII byte.
    let Some(body) = text.get(1..text.len().saturating_sub(1)) else {
        return Ok(ArgValue::Malformed(text.to_string()));
    };
    match literal_parser::body(body) {
        Ok(value) => Ok(ArgValue::Literal(value)),
        Err(_) => Ok(ArgValue::Malformed(text.to_string())),
    }
}

/// True if a string node contains an `{...}` interpolation.
fn has_interpolation(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .any(|child| child.kind() == "interpolation");
    found
}
