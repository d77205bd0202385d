//! Compares the shunting-yard pipeline against a recursive-descent evaluator
//! on randomly generated well-formed expressions.

use std::{iter::Peekable, str::Chars};

use rand::{Rng, SeedableRng, rngs::StdRng};
use shunt::get_result;

const OPERATORS: [char; 4] = ['+', '-', '*', '/'];
const SPACING: [&str; 3] = ["", " ", "  "];

fn gen_number(rng: &mut StdRng) -> String {
    if rng.gen_bool(0.5) {
        rng.gen_range(0..1000).to_string()
    } else {
        format!("{}.{}", rng.gen_range(0..100), rng.gen_range(0..100))
    }
}

fn gen_operand(rng: &mut StdRng, depth: u32) -> String {
    if depth > 0 && rng.gen_bool(0.3) {
        let pad = SPACING[rng.gen_range(0..SPACING.len())];
        format!("({pad}{}{pad})", gen_expression(rng, depth - 1))
    } else {
        gen_number(rng)
    }
}

fn gen_expression(rng: &mut StdRng, depth: u32) -> String {
    let mut out = gen_operand(rng, depth);
    for _ in 0..rng.gen_range(0..4) {
        let pad = SPACING[rng.gen_range(0..SPACING.len())];
        let op = OPERATORS[rng.gen_range(0..OPERATORS.len())];
        out.push_str(pad);
        out.push(op);
        out.push_str(pad);
        out.push_str(&gen_operand(rng, depth));
    }
    out
}

/// expr := term (('+' | '-') term)*
/// term := atom (('*' | '/') atom)*
/// atom := number | '(' expr ')'
struct Oracle<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Oracle<'_> {
    fn eval(source: &str) -> f64 {
        let mut oracle = Oracle { chars: source.chars().peekable() };
        let value = oracle.expr();
        oracle.skip_spaces();
        assert!(oracle.chars.next().is_none(), "trailing input in {source}");
        value
    }

    fn skip_spaces(&mut self) {
        while self.chars.next_if_eq(&' ').is_some() {}
    }

    fn expr(&mut self) -> f64 {
        let mut value = self.term();
        loop {
            self.skip_spaces();
            match self.chars.next_if(|&c| matches!(c, '+' | '-')) {
                Some('+') => value += self.term(),
                Some(_) => value -= self.term(),
                None => return value,
            }
        }
    }

    fn term(&mut self) -> f64 {
        let mut value = self.atom();
        loop {
            self.skip_spaces();
            match self.chars.next_if(|&c| matches!(c, '*' | '/')) {
                Some('*') => value *= self.atom(),
                Some(_) => value /= self.atom(),
                None => return value,
            }
        }
    }

    fn atom(&mut self) -> f64 {
        self.skip_spaces();
        if self.chars.next_if_eq(&'(').is_some() {
            let value = self.expr();
            self.skip_spaces();
            assert_eq!(self.chars.next(), Some(')'));
            return value;
        }
        let mut literal = String::new();
        while let Some(c) = self.chars.next_if(|c| c.is_ascii_digit() || *c == '.') {
            literal.push(c);
        }
        literal.parse().unwrap_or_else(|_| panic!("bad literal {literal:?}"))
    }
}

fn same_value(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

#[test]
fn random_expressions_match_recursive_descent() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..2000 {
        let source = gen_expression(&mut rng, 3);
        let expected = Oracle::eval(&source);
        let actual = get_result(&source).unwrap_or_else(|e| panic!("{source} failed: {e}"));
        assert!(same_value(actual, expected), "{source}: got {actual}, expected {expected}");
    }
}

#[test]
fn random_expressions_ignore_spacing() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let source = gen_expression(&mut rng, 2);
        let compact: String = source.chars().filter(|c| *c != ' ').collect();
        let spaced = get_result(&source).unwrap();
        let squeezed = get_result(&compact).unwrap();
        assert!(same_value(spaced, squeezed), "{source} and {compact} disagree");
    }
}
