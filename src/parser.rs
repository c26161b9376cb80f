use lalrpop_util::lalrpop_mod;

use crate::ast::Node;
use crate::error::ParseError;
use crate::lexer::Lexer;

lalrpop_mod!(
    #[allow(clippy::all)]
    grammar
);

/// Parses `input` per the Kconfig boolean grammar (see the crate-level
/// documentation): `&&`/`and`, `||`/`or`, `!`/`not`, parenthesization, and
/// `NAME (= | == | !=) NAME` comparisons.
pub fn parse(input: &str) -> Result<Node, ParseError> {
    grammar::ExprParser::new()
        .parse(Lexer::new(input))
        .map_err(|_| ParseError {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ast::{and, eq, leaf, neq, not, or};

    #[test]
    fn returns_an_error_on_empty_input() {
        assert!(parse("").is_err());
    }

    #[test]
    fn returns_an_error_on_unbalanced_parentheses() {
        assert!(parse(")(invalid-").is_err());
    }

    #[test]
    fn returns_an_error_when_a_comparison_operand_is_not_a_name() {
        assert!(parse("A = (B)").is_err());
    }

    #[test]
    fn parses_a_bare_leaf() {
        assert_eq!(Ok(leaf!("A")), parse("A"));
    }

    #[test]
    fn parses_a_digit_led_name() {
        assert_eq!(Ok(leaf!("64BIT")), parse("64BIT"));
    }

    #[test]
    fn parses_negation_synonyms() {
        let expected = Ok(not!(leaf!("A")));
        assert_eq!(expected, parse("!A"));
        assert_eq!(expected, parse("not A"));
    }

    #[test]
    fn parses_conjunction_synonyms() {
        let expected = Ok(and![leaf!("A"), leaf!("B")]);
        assert_eq!(expected, parse("A && B"));
        assert_eq!(expected, parse("A and B"));
    }

    #[test]
    fn parses_disjunction_synonyms() {
        let expected = Ok(or![leaf!("A"), leaf!("B")]);
        assert_eq!(expected, parse("A || B"));
        assert_eq!(expected, parse("A or B"));
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let expected = Ok(or![leaf!("A"), and![leaf!("B"), leaf!("C")]]);
        assert_eq!(expected, parse("A || B && C"));
    }

    #[test]
    fn flattens_a_run_of_the_same_operator() {
        let expected = Ok(and![leaf!("A"), leaf!("B"), leaf!("C")]);
        assert_eq!(expected, parse("A && B && C"));
    }

    #[test]
    fn parentheses_override_precedence() {
        let expected = Ok(and![or![leaf!("A"), leaf!("B")], leaf!("C")]);
        assert_eq!(expected, parse("(A || B) && C"));
    }

    #[test]
    fn parses_equality_with_a_single_equal_sign() {
        assert_eq!(Ok(eq!("A", "y")), parse("A = y"));
    }

    #[test]
    fn parses_equality_with_a_double_equal_sign() {
        assert_eq!(Ok(eq!("A", "y")), parse("A == y"));
    }

    #[test]
    fn parses_inequality_without_splitting_off_a_bang() {
        assert_eq!(Ok(neq!("A", "n")), parse("A != n"));
    }

    #[test]
    fn whitespace_between_tokens_is_insignificant() {
        assert_eq!(parse("A&&!B"), parse(" A  &&  ! B "));
    }
}
