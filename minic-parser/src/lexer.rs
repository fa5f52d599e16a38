use minic_source::Span;
use std::fmt;
use tracing::{debug, trace};

/// Reserved words. A keyword only matches as a whole word.
pub const KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

/// Keywords accepted where a type name is required.
pub const TYPE_NAMES: &[&str] = &[
    "char", "double", "float", "int", "long", "short", "signed", "unsigned", "void",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    // punctuation
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Semicolon,
    // operators
    AssignmentOperator,
    ArithmeticOperator,
    RelationalOperator,
    LogicalOperator,
    Identifier,
    // literals
    Integer,
    Float,
    String,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The parsed value of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// A classified lexeme. Tokens borrow their text from the source buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    kind: TokenKind,
    lexeme: &'a str,
    /// Only set for `Integer` and `Float` tokens.
    /// `None` on an `Integer` means the literal does not fit in an `i64`.
    value: Option<Number>,
    span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, lexeme: &'a str, span: Span) -> Self {
        let value = match kind {
            TokenKind::Integer => lexeme.parse().ok().map(Number::Int),
            TokenKind::Float => lexeme.parse().ok().map(Number::Float),
            _ => None,
        };
        Self {
            kind,
            lexeme,
            value,
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &'a str {
        self.lexeme
    }

    pub fn value(&self) -> Option<Number> {
        self.value
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    /// Returns `true` if the token has the given `kind` and exact `lexeme`.
    pub fn is(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.is(TokenKind::Keyword, keyword)
    }

    pub fn is_type_name(&self) -> bool {
        self.kind == TokenKind::Keyword && TYPE_NAMES.contains(&self.lexeme)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)
    }
}

/// Returns the length of the match at the very start of the input, if any.
type Matcher = fn(&str) -> Option<usize>;

/// Token classifiers in priority order. The first one that matches wins.
///
/// The order is load-bearing: `Keyword` must precede `Identifier` and `Integer` must precede
/// `Float` (whose pattern is a superset of `Integer`).
const CLASSIFIERS: &[(TokenKind, Matcher)] = &[
    (TokenKind::Keyword, match_keyword),
    (TokenKind::OpenBrace, match_open_brace),
    (TokenKind::CloseBrace, match_close_brace),
    (TokenKind::OpenParen, match_open_paren),
    (TokenKind::CloseParen, match_close_paren),
    (TokenKind::Semicolon, match_semicolon),
    (TokenKind::AssignmentOperator, match_assignment_operator),
    (TokenKind::ArithmeticOperator, match_arithmetic_operator),
    (TokenKind::RelationalOperator, match_relational_operator),
    (TokenKind::LogicalOperator, match_logical_operator),
    (TokenKind::Identifier, match_identifier),
    (TokenKind::Integer, match_integer),
    (TokenKind::Float, match_float),
    (TokenKind::String, match_string),
];

fn match_literal(s: &str, literal: &str) -> Option<usize> {
    s.starts_with(literal).then(|| literal.len())
}

fn match_open_brace(s: &str) -> Option<usize> {
    match_literal(s, "{")
}

fn match_close_brace(s: &str) -> Option<usize> {
    match_literal(s, "}")
}

fn match_open_paren(s: &str) -> Option<usize> {
    match_literal(s, "(")
}

fn match_close_paren(s: &str) -> Option<usize> {
    match_literal(s, ")")
}

fn match_semicolon(s: &str) -> Option<usize> {
    match_literal(s, ";")
}

fn match_any(s: &str, literals: &[&str]) -> Option<usize> {
    literals.iter().find_map(|literal| match_literal(s, literal))
}

fn digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn match_identifier(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return None,
    }
    let len = chars
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
        .map_or(s.len(), |(i, _)| i);
    Some(len)
}

fn match_keyword(s: &str) -> Option<usize> {
    let len = match_identifier(s)?;
    KEYWORDS.contains(&&s[..len]).then(|| len)
}

fn match_assignment_operator(s: &str) -> Option<usize> {
    if let Some(len) = match_any(s, &["<<=", ">>="]) {
        return Some(len);
    }
    match s.as_bytes() {
        [b'=', b'=', ..] => None,
        [b'=', ..] => Some(1),
        // `!=` is relational and `op==` is not an assignment
        [op, b'=', rest @ ..] if b"+-*/%&^|".contains(op) && rest.first() != Some(&b'=') => {
            Some(2)
        }
        _ => None,
    }
}

fn match_arithmetic_operator(s: &str) -> Option<usize> {
    match_any(s, &["++", "--", "+", "-", "*", "/", "%"])
}

fn match_relational_operator(s: &str) -> Option<usize> {
    match_any(s, &["==", "!=", ">=", "<=", "<", ">"])
}

fn match_logical_operator(s: &str) -> Option<usize> {
    match_any(s, &["&&", "||"]).or_else(|| {
        (s.starts_with('!') && !s[1..].starts_with('=')).then(|| 1)
    })
}

fn match_integer(s: &str) -> Option<usize> {
    let len = digits(s);
    // a run followed by `.` is the integer part of a float
    (len > 0 && !s[len..].starts_with('.')).then(|| len)
}

fn match_float(s: &str) -> Option<usize> {
    let int_part = digits(s);
    if s[int_part..].starts_with('.') {
        let frac_part = digits(&s[int_part + 1..]);
        if frac_part > 0 || int_part > 0 {
            return Some(int_part + 1 + frac_part);
        }
        None
    } else {
        (int_part > 0).then(|| int_part)
    }
}

fn match_string(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('"')?;
    let body = rest
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map_or(rest.len(), |(i, _)| i);
    (body > 0 && rest[body..].starts_with('"')).then(|| body + 2)
}

/// Classifies the start of `s`, returning the winning kind and the matched length.
fn classify(s: &str) -> Option<(TokenKind, usize)> {
    CLASSIFIERS
        .iter()
        .find_map(|(kind, matcher)| matcher(s).map(|len| (*kind, len)))
}

/// Iterator over the tokens of a source buffer.
/// Whitespace and characters no classifier accepts are skipped without error.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        while self.pos < self.input.len() {
            let rest = &self.input[self.pos..];
            if let Some((kind, len)) = classify(rest) {
                let token = Token::new(kind, &rest[..len], self.pos..self.pos + len);
                self.pos += len;
                return Some(token);
            }

            let skipped = rest.chars().next()?;
            if !skipped.is_whitespace() {
                trace!(position = self.pos, character = ?skipped, "skipping unrecognized character");
            }
            self.pos += skipped.len_utf8();
        }
        None
    }
}

/// Tokenizes the whole `input`.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let tokens: Vec<_> = Lexer::new(input).collect();
    debug!(tokens = tokens.len(), bytes = input.len(), "lexed source");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).iter().map(Token::kind).collect()
    }

    fn single(source: &str) -> Token<'_> {
        let mut tokens = lex(source);
        assert_eq!(tokens.len(), 1, "expected one token for {:?}", source);
        tokens.remove(0)
    }

    #[test]
    fn test_keyword() {
        let token = single("int");
        assert_eq!(token.kind(), TokenKind::Keyword);
        assert_eq!(token.lexeme(), "int");
        assert_eq!(single("return").kind(), TokenKind::Keyword);
    }

    #[test]
    fn test_keyword_is_whole_word() {
        assert_eq!(single("integer").kind(), TokenKind::Identifier);
        assert_eq!(single("double").lexeme(), "double");
        assert_eq!(single("iffy").kind(), TokenKind::Identifier);
        assert_eq!(single("return_value").kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_integer() {
        let token = lex("return 2;").remove(1);
        assert_eq!(token.kind(), TokenKind::Integer);
        assert_eq!(token.value(), Some(Number::Int(2)));

        assert_eq!(single("1234").value(), Some(Number::Int(1234)));
    }

    #[test]
    fn test_integer_overflow_has_no_value() {
        let token = single("99999999999999999999");
        assert_eq!(token.kind(), TokenKind::Integer);
        assert_eq!(token.value(), None);
    }

    #[test]
    fn test_float() {
        let token = single("1.234");
        assert_eq!(token.kind(), TokenKind::Float);
        assert_eq!(token.value(), Some(Number::Float(1.234)));

        let token = lex("return 12.5;").remove(1);
        assert_eq!(token.lexeme(), "12.5");
        assert_eq!(token.value(), Some(Number::Float(12.5)));

        assert_eq!(single(".5").value(), Some(Number::Float(0.5)));
        assert_eq!(single("1.").value(), Some(Number::Float(1.0)));
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("{return 1;}"),
            vec![
                TokenKind::OpenBrace,
                TokenKind::Keyword,
                TokenKind::Integer,
                TokenKind::Semicolon,
                TokenKind::CloseBrace,
            ]
        );
        assert_eq!(kinds("()"), vec![TokenKind::OpenParen, TokenKind::CloseParen]);
    }

    #[test]
    fn test_assignment_operators() {
        for op in &["=", "+=", "-=", "*=", "/=", "%=", "&=", "^=", "|=", "<<=", ">>="] {
            let source = format!("a{}1", op);
            let token = lex(&source).remove(1);
            assert_eq!(token.kind(), TokenKind::AssignmentOperator, "{}", op);
            assert_eq!(token.lexeme(), *op);
        }
    }

    #[test]
    fn test_equality_is_not_assignment() {
        let token = lex("a==1").remove(1);
        assert_eq!(token.kind(), TokenKind::RelationalOperator);
        assert_eq!(token.lexeme(), "==");

        let token = lex("a!=1").remove(1);
        assert_eq!(token.kind(), TokenKind::RelationalOperator);
        assert_eq!(token.lexeme(), "!=");
    }

    #[test]
    fn test_arithmetic_operators() {
        let token = single("-");
        assert_eq!(token.kind(), TokenKind::ArithmeticOperator);
        assert_eq!(lex("-2")[0].lexeme(), "-");
        assert_eq!(single("++").lexeme(), "++");
        assert_eq!(single("--").lexeme(), "--");
        assert_eq!(single("%").kind(), TokenKind::ArithmeticOperator);
    }

    #[test]
    fn test_relational_operators() {
        for op in &["<", ">", "<=", ">="] {
            let token = single(op);
            assert_eq!(token.kind(), TokenKind::RelationalOperator);
            assert_eq!(token.lexeme(), *op);
        }
    }

    #[test]
    fn test_logical_operators() {
        assert_eq!(single("&&").kind(), TokenKind::LogicalOperator);
        assert_eq!(single("||").kind(), TokenKind::LogicalOperator);
        let not = lex("!a").remove(0);
        assert_eq!(not.kind(), TokenKind::LogicalOperator);
        assert_eq!(not.lexeme(), "!");
    }

    #[test]
    fn test_string() {
        let token = single("\"hello_world\"");
        assert_eq!(token.kind(), TokenKind::String);
        assert_eq!(token.lexeme(), "\"hello_world\"");
        assert_eq!(token.value(), None);
    }

    #[test]
    fn test_unrecognized_characters_are_skipped() {
        assert_eq!(kinds("@ # $"), vec![]);
        assert_eq!(
            kinds("a , b"),
            vec![TokenKind::Identifier, TokenKind::Identifier]
        );
        assert_eq!(kinds("\"not a string\""), vec![TokenKind::Identifier; 3]);
        assert_eq!(kinds("é1"), vec![TokenKind::Integer]);
    }

    #[test]
    fn test_spans() {
        let tokens = lex("int  main");
        assert_eq!(tokens[0].span(), 0..3);
        assert_eq!(tokens[1].span(), 5..9);
    }

    #[test]
    fn test_simple_main() {
        let tokens: Vec<String> = lex("int main() { int a=2; return a;}")
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            tokens,
            vec![
                "Keyword int",
                "Identifier main",
                "OpenParen (",
                "CloseParen )",
                "OpenBrace {",
                "Keyword int",
                "Identifier a",
                "AssignmentOperator =",
                "Integer 2",
                "Semicolon ;",
                "Keyword return",
                "Identifier a",
                "Semicolon ;",
                "CloseBrace }",
            ]
        );
    }
}
