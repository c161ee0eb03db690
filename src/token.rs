use logos::Logos;

/// Tokens of the textual assembly format.
/// The `#[derive(Logos)]` macro from the `logos` crate generates the lexer implementation.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")] // Ignore whitespace other than newlines
#[logos(skip r";[^\n]*")] // Comments run to the end of the line
pub enum Token {
    #[regex("-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Integer(i64),

    // Literal tokens outrank the identifier regex, so these never lex as labels.
    #[token("true")]
    True,

    #[token("false")]
    False,

    // A label definition: an identifier immediately followed by a colon.
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*:", |lex| {
        let slice = lex.slice();
        slice[..slice.len() - 1].to_string()
    })]
    Label(String),

    // Mnemonics and label references.
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    #[token(",")]
    Comma,

    #[token("\n")]
    Newline,
}
