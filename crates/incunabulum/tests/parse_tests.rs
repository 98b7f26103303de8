//! Parser tests

use incunabulum::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Primaries
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_parse_digits_and_letters() {
    for d in 0..=9u8 {
        assert_eq!(parse(&d.to_string()).unwrap(), Expr::Noun(d));
    }
    for c in 'a'..='z' {
        assert_eq!(parse(&c.to_string()).unwrap(), Expr::Var(c));
    }
}

#[test]
fn test_parse_nested_groups() {
    assert_eq!(
        parse("((5))").unwrap(),
        Expr::group(Expr::group(Expr::Noun(5)))
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Verb Position
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_same_symbol_monadic_and_dyadic() {
    assert_eq!(
        parse("#3#4").unwrap(),
        Expr::monad(Verb::Hash, Expr::dyad(Verb::Hash, Expr::Noun(3), Expr::Noun(4)))
    );
}

#[test]
fn test_every_verb_in_both_positions() {
    for verb in Verb::ALL {
        let monadic = format!("{}1", verb);
        let dyadic = format!("1{}2", verb);
        assert_eq!(parse(&monadic).unwrap(), Expr::monad(verb, Expr::Noun(1)));
        assert_eq!(
            parse(&dyadic).unwrap(),
            Expr::dyad(verb, Expr::Noun(1), Expr::Noun(2))
        );
    }
}

#[test]
fn test_monad_takes_rest_of_line() {
    // ~3+4 is ~(3+4)
    assert_eq!(
        parse("~3+4").unwrap(),
        Expr::monad(
            Verb::Tilde,
            Expr::dyad(Verb::Plus, Expr::Noun(3), Expr::Noun(4))
        )
    );
}

#[test]
fn test_assignment_inside_dyad() {
    assert_eq!(
        parse("1,a=2").unwrap(),
        Expr::dyad(Verb::Comma, Expr::Noun(1), Expr::assign('a', Expr::Noun(2)))
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Display Round Trip
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_display_reproduces_source() {
    for src in ["a=5,2", "(2,3)#~6", "<<~3", "0{m", "x#y", "#(a,b)", "+{<1"] {
        assert_eq!(parse(src).unwrap().to_string(), src);
    }
}

#[test]
fn test_display_drops_whitespace() {
    assert_eq!(parse(" a = ( 1 , 2 ) ").unwrap().to_string(), "a=(1,2)");
}

// ═══════════════════════════════════════════════════════════════════════
// Limits
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_deep_parens_within_default_limit() {
    let src = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert!(parse(&src).is_ok());
}

#[test]
fn test_runaway_nesting_is_rejected() {
    let src = "~".repeat(5000) + "1";
    assert!(matches!(parse(&src), Err(ParseError::TooDeep { .. })));
}
