use logos::{Logos, SpannedIter};
use thiserror::Error;

#[derive(Default, Error, Debug, Clone, PartialEq)]
pub enum LexicalError {
    #[default]
    #[error("invalid token")]
    InvalidToken,
}

#[derive(Clone, Debug, Logos, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+", error = LexicalError)]
pub enum Token<'source> {
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("!=")]
    NotEqual,
    #[token("!")]
    Bang,
    #[token("==")]
    EqualEqual,
    #[token("=")]
    Equal,
    #[token("(")]
    LeftParenthesis,
    #[token(")")]
    RightParenthesis,
    // Kconfig option names may begin with a digit (e.g. `64BIT`), so the
    // identifier regex admits digits in the leading position too; the
    // `and`/`or`/`not` keywords are pulled back out of it in `Lexer::next`
    // below, the same way the logos/keyword priority conflict is worked
    // around elsewhere in this crate's lineage.
    #[regex(r"[A-Za-z0-9_]+", |lex| lex.slice())]
    Identifier(&'source str),
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

pub type Spanned<Tok, Location, Error> = Result<(Location, Tok, Location), Error>;

pub struct Lexer<'input> {
    token_stream: SpannedIter<'input, Token<'input>>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Self {
            token_stream: Token::lexer(input).spanned(),
        }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Spanned<Token<'input>, usize, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.token_stream.next().map(|(token, span)| {
            let token = token.map(|token| match token {
                Token::Identifier("and") => Token::AndAnd,
                Token::Identifier("or") => Token::OrOr,
                Token::Identifier("not") => Token::Bang,
                other => other,
            });
            Ok((span.start, token?, span.end))
        })
    }
}
