use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::ExprWrapper, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Binding strength of an operator. Variants are declared weakest first, so
/// the derived ordering is the precedence ordering.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // f(x)
}

pub type NUDHandler = fn(&mut Parser) -> Option<ExprWrapper>;
pub type LEDHandler = fn(&mut Parser, Option<ExprWrapper>) -> Option<ExprWrapper>;

pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

lazy_static! {
    pub static ref BINDING_POWER_LOOKUP: BPLookup = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Equals, BindingPower::Equals);
        map.insert(TokenKind::NotEquals, BindingPower::Equals);
        map.insert(TokenKind::Less, BindingPower::LessGreater);
        map.insert(TokenKind::Greater, BindingPower::LessGreater);
        map.insert(TokenKind::Plus, BindingPower::Sum);
        map.insert(TokenKind::Minus, BindingPower::Sum);
        map.insert(TokenKind::Slash, BindingPower::Product);
        map.insert(TokenKind::Asterisk, BindingPower::Product);
        map
    };
}

/// Precedence of `kind` when it appears in infix position. Kinds without an
/// entry bind as `Lowest`, which is what stops the climbing loop.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    BINDING_POWER_LOOKUP
        .get(&kind)
        .copied()
        .unwrap_or(BindingPower::Lowest)
}

/// Prefix and infix handler tables.
///
/// Filled in before a parser is built and only read afterwards.
#[derive(Clone, Default)]
pub struct Lookups {
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
}

impl Lookups {
    pub fn new() -> Self {
        Lookups {
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
        }
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }
}

pub fn create_token_lookups() -> Lookups {
    let mut lookups = Lookups::new();

    // Literals and symbols
    lookups.nud(TokenKind::Identifier, parse_identifier);
    lookups.nud(TokenKind::Int, parse_integer_literal);

    // Unary
    lookups.nud(TokenKind::Bang, parse_prefix_expr);
    lookups.nud(TokenKind::Minus, parse_prefix_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, parse_infix_expr);
    lookups.led(TokenKind::Minus, parse_infix_expr);
    lookups.led(TokenKind::Slash, parse_infix_expr);
    lookups.led(TokenKind::Asterisk, parse_infix_expr);

    // Equality and relational
    lookups.led(TokenKind::Equals, parse_infix_expr);
    lookups.led(TokenKind::NotEquals, parse_infix_expr);
    lookups.led(TokenKind::Less, parse_infix_expr);
    lookups.led(TokenKind::Greater, parse_infix_expr);

    lookups
}
