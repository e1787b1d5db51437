// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! PEG parser rules and actions for the CQL2 text encoding.
//!
//! Being a PEG parser means the following limits/constraints/directives
//! should be observed when writing and ordering rules...
//!
//! * When writing a parser with choices, put the longest or most specific
//!   choice first, and the shortest or most general choice last.
//! * PEGs do not backtrack into a succeeded sub-rule: in `first second`, once
//!   `first` parses successfully it has consumed characters that never come
//!   back, and `second` only runs on the rest.
//!
//! Keyword rules therefore outrank the identifier rule simply by appearing
//! earlier in their alternations.
//!
//! Lowering performs exactly three rewrites: negated predicate spellings are
//! pulled up into a `NOT` wrapper, unary minus on a non-literal operand
//! becomes a multiplication by `-1`, and every numeric literal becomes a
//! double. `AND`/`OR` chains additionally flatten into one n-ary node per
//! nesting level.
//!

use crate::{
    config::config,
    error::Cql2Error,
    expr::{Call, Expr},
    geom::{BBox, G, Geometries, Line, Lines, Point, Points, Polygon, Polygons},
    op::Op,
};
use jiff::{Timestamp, civil::Date};

/// Parse a complete text-encoded filter into its syntax tree.
pub(crate) fn parse(s: &str) -> Result<Expr, Cql2Error> {
    check_depth(s, config().max_depth())?;
    cql2::expression(s).map_err(Cql2Error::from)
}

// Reject pathologically nested input before the recursive descent runs; the
// recursion in the generated parser tracks bracket nesting, so a lexical scan
// of the bracket depth bounds it. Parentheses inside character literals do
// not count; a quote preceded by a backslash stays inside its literal.
fn check_depth(s: &str, limit: usize) -> Result<(), Cql2Error> {
    let mut depth = 0usize;
    let mut in_literal = false;
    let mut prev = '\0';
    for c in s.chars() {
        match c {
            '\'' if !(in_literal && prev == '\\') => in_literal = !in_literal,
            '(' if !in_literal => {
                depth += 1;
                if depth > limit {
                    return Err(Cql2Error::DepthExceeded(limit));
                }
            }
            ')' if !in_literal => depth = depth.saturating_sub(1),
            _ => {}
        }
        prev = c;
    }
    Ok(())
}

// Constructor keywords never name user functions; without this reservation a
// malformed spatial or temporal literal would quietly re-parse as a function
// call instead of failing.
const RESERVED_FN_NAMES: [&str; 13] = [
    "POINT",
    "LINESTRING",
    "POLYGON",
    "MULTIPOINT",
    "MULTILINESTRING",
    "MULTIPOLYGON",
    "GEOMETRYCOLLECTION",
    "BBOX",
    "DATE",
    "TIMESTAMP",
    "INTERVAL",
    "CASEI",
    "ACCENTI",
];

fn reserved_fn_name(name: &str) -> bool {
    RESERVED_FN_NAMES.iter().any(|k| name.eq_ignore_ascii_case(k))
}

peg::parser! {
    pub(crate) grammar cql2() for str {
        // howto handle case-insensitive tokens.  see
        // https://github.com/kevinmehall/rust-peg/issues/216
        rule i(literal: &'static str)
        = input:$([_]*<{literal.len()}>)
        {? if input.eq_ignore_ascii_case(literal) { Ok(()) } else { Err(literal) } }

        // ===== whitespace ===================================================
        rule _ = quiet! { [
            '\t'
            | '\u{0009}'   // Character tabulation
            | '\n'
            | '\u{000A}'   // Line feed
            | '\u{000B}'   // Line tabulation
            | '\u{000C}'   // Form feed
            | '\r'
            | '\u{000D}'   // Carriage return
            | '\u{0020}'   // Space
            | '\u{0085}'   // Next line
            | '\u{00A0}'   // No-break space
            | '\u{1680}'   // Ogham space mark
            | '\u{2000}'   // En quad
            | '\u{2001}'   // Em quad
            | '\u{2002}'   // En space
            | '\u{2003}'   // Em space
            | '\u{2004}'   // Three-per-em space
            | '\u{2005}'   // Four-per-em space
            | '\u{2006}'   // Six-per-em space
            | '\u{2007}'   // Figure space
            | '\u{2008}'   // Punctuation space
            | '\u{2009}'   // Thin space
            | '\u{200A}'   // Hair space
            | '\u{2028}'   // Line separator
            | '\u{2029}'   // Paragraph separator
            | '\u{202F}'   // Narrow no-break space
            | '\u{205F}'   // Medium mathematical space
            | '\u{3000}'   // Ideographic space
        ]* }

        // ignore whitespaces and EOL + EOF...
        pub rule expression() -> Expr = _ x:boolean_expression() _ ![_] { x }

        #[cache_left_rec]
        rule boolean_expression() -> Expr = x:boolean_term() y:or_term()* {
            if y.is_empty() {
                x
            } else {
                let mut args = vec![x];
                args.extend(y);
                Expr::Variadic(Op::Or, args)
            }
        }

        rule or_term() -> Expr = _ i("OR") _ y:boolean_term() { y }

        #[cache_left_rec]
        rule boolean_term() -> Expr = x:boolean_factor() y:and_term()* {
            if y.is_empty() {
                x
            } else {
                let mut args = vec![x];
                args.extend(y);
                Expr::Variadic(Op::And, args)
            }
        }

        rule and_term() -> Expr = _ i("AND") _ y:boolean_factor() { y }

        #[cache_left_rec]
        rule boolean_factor() -> Expr
        = i("NOT") _ x:boolean_factor() { Expr::Monadic(Op::Not, Box::new(x)) }
        / x:boolean_primary()           { x }

        #[cache_left_rec]
        rule boolean_primary() -> Expr
        = "(" _ x:boolean_expression() _ ")" { x }
        / x:comparison_predicate()           { x }
        / x:spatial_predicate()              { x }
        / x:temporal_predicate()             { x }
        / x:array_predicate()                { x }
        / x:function()                       { x }
        / x:boolean_literal()                { x }

        #[cache_left_rec]
        rule comparison_predicate() -> Expr
        = x:binary_comparison_predicate() { x }
        / x:is_like_predicate()           { x }
        / x:is_between_predicate()        { x }
        / x:is_in_list_predicate()        { x }
        / x:is_null_predicate()           { x }

        #[cache_left_rec]
        rule is_null_predicate() -> Expr
        = x:is_null_operand() _ i("IS") _ n:(i("NOT") _)? i("NULL") {
            let p = Expr::Monadic(Op::IsNull, Box::new(x));
            match n {
                Some(_) => Expr::Monadic(Op::Not, Box::new(p)),
                None => p,
            }
        }

        #[cache_left_rec]
        rule is_null_operand() -> Expr
        = x:temporal_instance()     { x }
        / x:spatial_instance()      { x }
        / x:character_clause()      { x }
        / x:arithmetic_expression() { x }
        / x:numeric_literal()       { x }
        / x:function()              { x }
        / x:property_name()         { x }
        / x:boolean_expression()    { x }

        rule binary_comparison_predicate() -> Expr
        = x:scalar_expression() _ op:comparison_operator() _ y:scalar_expression()
        { Expr::Dyadic(op, Box::new(x), Box::new(y)) }

        rule scalar_expression() -> Expr
        = x:boolean_literal()       { x }
        / x:character_clause()      { x }
        / x:instant_instance()      { x }
        / x:arithmetic_expression() { x }
        / x:numeric_literal()       { x }
        / x:function()              { x }
        / x:property_name()         { x }

        rule comparison_operator() -> Op
        = "<>" { Op::Neq }
        / "<=" { Op::Lte }
        / ">=" { Op::Gte }
        / "<"  { Op::Lt }
        / ">"  { Op::Gt }
        / "="  { Op::Eq }

        pub(crate) rule is_like_predicate() -> Expr
        = x:character_expression() _ n:(i("NOT") _)? i("LIKE") _ y:pattern_expression() {
            let p = Expr::Dyadic(Op::IsLike, Box::new(x), Box::new(y));
            match n {
                Some(_) => Expr::Monadic(Op::Not, Box::new(p)),
                None => p,
            }
        }

        rule pattern_expression() -> Expr
        = i("CASEI") _ "(" _ x:pattern_expression() _ ")"   { Expr::Monadic(Op::CaseI, Box::new(x)) }
        / i("ACCENTI") _ "(" _ x:pattern_expression() _ ")" { Expr::Monadic(Op::AccentI, Box::new(x)) }
        / x:character_literal()                             { x }

        rule is_between_predicate() -> Expr
        = x:numeric_expression() _ n:(i("NOT") _)? i("BETWEEN") _ a:numeric_expression() _ i("AND") _ b:numeric_expression() {
            let p = Expr::Dyadic(Op::IsBetween, Box::new(x), Box::new(Expr::Array(vec![a, b])));
            match n {
                Some(_) => Expr::Monadic(Op::Not, Box::new(p)),
                None => p,
            }
        }

        #[cache]
        pub(crate) rule numeric_expression() -> Expr
        = x:arithmetic_expression() { x }
        / x:numeric_literal()       { x }
        / x:function()              { x }
        / x:property_name()         { x }

        rule is_in_list_predicate() -> Expr
        = x:scalar_expression() _ n:(i("NOT") _)? i("IN") _ "(" _ y:in_list() _ ")" {
            let p = Expr::Dyadic(Op::IsInList, Box::new(x), Box::new(Expr::Array(y)));
            match n {
                Some(_) => Expr::Monadic(Op::Not, Box::new(p)),
                None => p,
            }
        }

        rule in_list() -> Vec<Expr> = x:(scalar_expression() ++ (_ "," _)) { x }

        #[cache]
        rule spatial_predicate() -> Expr
        = op:spatial_function() _ "(" _ x:geom_expression() _ "," _ y:geom_expression() _ ")"
        { Expr::Dyadic(op, Box::new(x), Box::new(y)) }

        rule spatial_function() -> Op
        = i("S_INTERSECTS") { Op::SIntersects }
        / i("S_EQUALS")     { Op::SEquals }
        / i("S_DISJOINT")   { Op::SDisjoint }
        / i("S_TOUCHES")    { Op::STouches }
        / i("S_WITHIN")     { Op::SWithin }
        / i("S_OVERLAPS")   { Op::SOverlaps }
        / i("S_CROSSES")    { Op::SCrosses }
        / i("S_CONTAINS")   { Op::SContains }

        #[cache]
        pub(crate) rule geom_expression() -> Expr
        = x:spatial_instance() { x }
        / x:function()         { x }
        / x:property_name()    { x }

        #[cache]
        pub(crate) rule temporal_predicate() -> Expr
        = op:temporal_function() _ "(" _ x:temporal_expression() _ "," _ y:temporal_expression() _ ")"
        { Expr::Dyadic(op, Box::new(x), Box::new(y)) }

        #[cache]
        pub(crate) rule temporal_expression() -> Expr
        = x:temporal_instance() { x }
        / x:function()          { x }
        / x:property_name()     { x }

        rule temporal_function() -> Op
        = i("T_AFTER")        { Op::TAfter }
        / i("T_BEFORE")       { Op::TBefore }
        / i("T_CONTAINS")     { Op::TContains }
        / i("T_DISJOINT")     { Op::TDisjoint }
        / i("T_DURING")       { Op::TDuring }
        / i("T_EQUALS")       { Op::TEquals }
        / i("T_FINISHEDBY")   { Op::TFinishedBy }
        / i("T_FINISHES")     { Op::TFinishes }
        / i("T_INTERSECTS")   { Op::TIntersects }
        / i("T_MEETS")        { Op::TMeets }
        / i("T_METBY")        { Op::TMetBy }
        / i("T_OVERLAPPEDBY") { Op::TOverlappedBy }
        / i("T_OVERLAPS")     { Op::TOverlaps }
        / i("T_STARTEDBY")    { Op::TStartedBy }
        / i("T_STARTS")       { Op::TStarts }

        rule array_predicate() -> Expr
        = op:array_function() _ "(" _ x:array_expression() _ "," _ y:array_expression() _ ")"
        { Expr::Dyadic(op, Box::new(x), Box::new(y)) }

        rule array_expression() -> Expr
        = x:array()         { x }
        / x:function()      { x }
        / x:property_name() { x }

        #[cache]
        rule array() -> Expr = "(" _ x:(array_element() ** (_ "," _)) _ ")" { Expr::Array(x) }

        rule array_element() -> Expr
        = x:character_clause()      { x }
        / x:temporal_instance()     { x }
        / x:spatial_instance()      { x }
        / x:array()                 { x }
        / x:boolean_expression()    { x }
        / x:arithmetic_expression() { x }
        / x:numeric_literal()       { x }
        / x:function()              { x }
        / x:property_name()         { x }

        rule array_function() -> Op
        = i("A_EQUALS")      { Op::AEquals }
        / i("A_CONTAINS")    { Op::AContains }
        / i("A_CONTAINEDBY") { Op::AContainedBy }
        / i("A_OVERLAPS")    { Op::AOverlaps }

        #[cache]
        rule arithmetic_expression() -> Expr = x:arithmetic_term() v:add_term()* {
            v.into_iter()
                .fold(x, |t, (op, y)| Expr::Dyadic(op, Box::new(t), Box::new(y)))
        }

        rule add_term() -> (Op, Expr)
        = _ "+" _ y:arithmetic_term() { (Op::Plus, y) }
        / _ "-" _ y:arithmetic_term() { (Op::Minus, y) }

        rule arithmetic_term() -> Expr = x:power_term() v:mult_term()* {
            v.into_iter()
                .fold(x, |t, (op, y)| Expr::Dyadic(op, Box::new(t), Box::new(y)))
        }

        rule mult_term() -> (Op, Expr)
        = _ "*" _ y:power_term()      { (Op::Mult, y) }
        / _ "/" _ y:power_term()      { (Op::Div, y) }
        / _ "%" _ y:power_term()      { (Op::Mod, y) }
        / _ i("DIV") _ y:power_term() { (Op::IntDiv, y) }

        // exponentiation recurses on the right and is thus right-associative...
        rule power_term() -> Expr = x:arithmetic_factor() n:exp_term()? {
            match n {
                Some((op, y)) => Expr::Dyadic(op, Box::new(x), Box::new(y)),
                None => x,
            }
        }

        rule exp_term() -> (Op, Expr) = _ "^" _ y:power_term() { (Op::Exp, y) }

        // a sign in front of a numeric literal stays in the literal; in front
        // of anything else it is expanded into a multiplication by -1...
        rule arithmetic_factor() -> Expr
        = "(" _ x:arithmetic_expression() _ ")" { x }
        / "-" _ x:arithmetic_operand() {
            match x {
                Expr::Num(n) => Expr::Num(-n),
                other => Expr::Dyadic(Op::Mult, Box::new(Expr::Num(-1.0)), Box::new(other)),
            }
        }
        / x:arithmetic_operand() { x }

        #[cache]
        rule arithmetic_operand() -> Expr
        = x:numeric_literal() { x }
        / x:function()        { x }
        / x:property_name()   { x }

        #[cache]
        pub(crate) rule property_name() -> Expr
        = "\"" a:$((!"\"" [_])*) "\"" { Expr::Id(a.into()) }
        / b:ident()                   { Expr::Id(b.into()) }

        #[cache]
        rule function() -> Expr
        = name:ident() _ "(" _ params:argument_list() _ ")" {?
            if reserved_fn_name(name) {
                Err("a non-reserved function name")
            } else {
                Ok(Expr::Function(Call::new(name, params)))
            }
        }

        rule argument_list() -> Vec<Expr> = x:(argument() ** (_ "," _)) { x }

        #[cache]
        rule argument() -> Expr
        = x:character_clause()      { x }
        / x:temporal_instance()     { x }
        / x:spatial_instance()      { x }
        / x:array()                 { x }
        / x:boolean_expression()    { x }
        / x:arithmetic_expression() { x }
        / x:numeric_literal()       { x }
        / x:function()              { x }
        / x:property_name()         { x }

        pub(crate) rule character_expression() -> Expr
        = x:character_clause() { x }
        / x:function()         { x }
        / x:property_name()    { x }

        #[cache]
        rule character_clause() -> Expr
        = i("CASEI") _ "(" _ x:character_expression() _ ")"   { Expr::Monadic(Op::CaseI, Box::new(x)) }
        / i("ACCENTI") _ "(" _ x:character_expression() _ ")" { Expr::Monadic(Op::AccentI, Box::new(x)) }
        / x:character_literal()                               { x }

        #[cache]
        rule character_literal() -> Expr = "'" s:character()* "'" {
            Expr::Str(s.into_iter().collect())
        }

        rule character() -> char
        = "''"            { '\'' }
        / "\\'"           { '\'' }
        / c:not_a_quote() { c }

        rule not_a_quote() -> char = !"'" c:[_] { c }

        #[cache]
        rule numeric_literal() -> Expr = n:(unsigned_num() / signed_num()) { Expr::Num(n) }

        #[cache]
        rule signed_num() -> f64 = s:['+' | '-']? n:unsigned_num() {
            let sign = match s {
                Some('-') => -1.0,
                _ => 1.0,
            };
            sign * n
        }

        #[cache]
        rule unsigned_num() -> f64
        = n:$(['0'..='9']+ ("." ['0'..='9']*)? ( ['e'|'E'] ['+'|'-']? ['0'..='9']+ )?)
        {? n.parse().or(Err("a parseable number")) }

        #[cache]
        rule boolean_literal() -> Expr
        = i("TRUE")  { Expr::Bool(true) }
        / i("FALSE") { Expr::Bool(false) }

        rule temporal_instance() -> Expr = x:(instant_instance() / interval_instance()) { x }

        rule instant_instance() -> Expr = x:(date_instant() / timestamp_instant()) { x }

        rule date_instant() -> Expr = i("DATE") _ "(" _ x:date_instant_string() _ ")" { x }

        rule date_instant_string() -> Expr = "'" x:full_date() "'" { Expr::Date(x) }

        rule timestamp_instant() -> Expr = i("TIMESTAMP") _ "(" _ x:timestamp_instant_string() _ ")" { x }

        rule timestamp_instant_string() -> Expr = "'" x:utc_time() "'" { Expr::Timestamp(x) }

        #[cache]
        rule interval_instance() -> Expr
        = i("INTERVAL") _ "(" _ x:instant_parameter() _ "," _ y:instant_parameter() _ ")"
        { Expr::Interval(Box::new(x), Box::new(y)) }

        #[cache]
        rule instant_parameter() -> Expr
        = x:date_instant_string()      { x }
        / x:timestamp_instant_string() { x }
        / "'..'"                       { Expr::Unbounded }
        / x:function()                 { x }
        / x:property_name()            { x }

        #[cache]
        rule ident() -> &'input str
        = quiet! { s:$([
            '\u{003A}'                  // colon
            | '\u{005F}'                // underscore
            | '\u{0041}'..='\u{005A}'   // A-Z
            | '\u{0061}'..='\u{007A}'   // a-z
            | '\u{00C0}'..='\u{00D6}'   // À-Ö Latin-1 Supplement Letters
            | '\u{00D8}'..='\u{00F6}'   // Ø-ö Latin-1 Supplement Letters
            | '\u{00F8}'..='\u{02FF}'   // ø-ÿ Latin-1 Supplement Letters
            | '\u{0370}'..='\u{037D}'   // Ͱ-ͽ Greek and Coptic (without ";")
            | '\u{037F}'..='\u{1FFE}'   // Greek extended and much of the BMP
            | '\u{200C}'..='\u{200D}'   // zero width non-joiner and joiner
            | '\u{2070}'..='\u{218F}'   // superscripts, subscripts, letterlike
            | '\u{2C00}'..='\u{2FEF}'   // Glagolitic .. CJK radicals
            | '\u{3001}'..='\u{D7FF}'   // CJK and Hangul ranges
            | '\u{F900}'..='\u{FDCF}'   // CJK compatibility ideographs
            | '\u{FDF0}'..='\u{FFFD}'   // presentation forms
            | '\u{10000}'..='\u{EFFFF}' // supplementary planes
        ] [
            '\u{003A}'                  // colon
            | '\u{005F}'                // underscore
            | '\u{0041}'..='\u{005A}'   // A-Z
            | '\u{0061}'..='\u{007A}'   // a-z
            | '\u{00C0}'..='\u{00D6}'   // À-Ö Latin-1 Supplement Letters
            | '\u{00D8}'..='\u{00F6}'   // Ø-ö Latin-1 Supplement Letters
            | '\u{00F8}'..='\u{02FF}'   // ø-ÿ Latin-1 Supplement Letters
            | '\u{0370}'..='\u{037D}'   // Ͱ-ͽ Greek and Coptic (without ";")
            | '\u{037F}'..='\u{1FFE}'   // Greek extended and much of the BMP
            | '\u{200C}'..='\u{200D}'   // zero width non-joiner and joiner
            | '\u{2070}'..='\u{218F}'   // superscripts, subscripts, letterlike
            | '\u{2C00}'..='\u{2FEF}'   // Glagolitic .. CJK radicals
            | '\u{3001}'..='\u{D7FF}'   // CJK and Hangul ranges
            | '\u{F900}'..='\u{FDCF}'   // CJK compatibility ideographs
            | '\u{FDF0}'..='\u{FFFD}'   // presentation forms
            | '\u{10000}'..='\u{EFFFF}' // supplementary planes
            | '\u{002E}'                // dot
            | '0'..='9'
            | '\u{0300}'..='\u{036F}'   // combining and diacritical marks
            | '\u{203F}'..='\u{2040}'   // ‿ and ⁀
        ]*) { s } }

        #[cache]
        rule spatial_instance() -> Expr = g:wkt() { Expr::Spatial(g) }

        #[cache]
        pub(crate) rule wkt() -> G
        = g:geo_literal()             { g }
        / g:geo_collection_tagd_txt() { g }
        / g:bbox_tagd_txt()           { g }

        #[cache]
        rule geo_literal() -> G
        = g:point_tagd_txt()        { g }
        / g:line_tagd_txt()         { g }
        / g:poly_tagd_txt()         { g }
        / g:multipoint_tagd_txt()   { g }
        / g:multiline_tagd_txt()    { g }
        / g:multipolygon_tagd_txt() { g }

        rule point_tagd_txt() -> G = i("POINT") _ ("Z" _)? g:point_txt()
        {? Point::try_new(g).map(G::Point).or(Err("2 or 3 point coordinates")) }

        rule point_txt() -> Vec<f64> = "(" _ x:point() _ ")" { x }

        rule point() -> Vec<f64> = x:signed_num() **<2, 3> ([' ' | '\t' | '\x0C']*) { x }

        rule line_tagd_txt() -> G = i("LINESTRING") _ ("Z" _)? x:line_txt()
        {? Line::try_new(x).map(G::Line).or(Err("a line string")) }

        rule line_txt() -> Vec<Vec<f64>> = "(" _ x:point() **<2,> (_ "," _) _ ")" { x }

        rule poly_tagd_txt() -> G = i("POLYGON") _ ("Z" _)? x:poly_txt()
        {? Polygon::try_new(x).map(G::Polygon).or(Err("a polygon")) }

        rule poly_txt() -> Vec<Vec<Vec<f64>>> = "(" _ x:ring_txt() ++ (_ "," _) _ ")" { x }

        // a linear ring is a closed line w/ at least 4 points...
        rule ring_txt() -> Vec<Vec<f64>> = "(" _ x:point() **<4,> (_ "," _) _ ")" { x }

        rule multipoint_tagd_txt() -> G
        = i("MULTIPOINT") _ ("Z" _)? x:multipoint_txt()
        {? Points::try_new(x).map(G::Points).or(Err("a multi-point")) }

        // point coordinates are accepted both w/ and w/o surrounding parens;
        // output always uses the parenthesized form...
        rule multipoint_txt() -> Vec<Vec<f64>> = "(" _ x:(point_txt_forms() ++ (_ "," _)) _ ")" { x }

        rule point_txt_forms() -> Vec<f64>
        = "(" _ x:point() _ ")" { x }
        / x:point()             { x }

        rule multiline_tagd_txt() -> G
        = i("MULTILINESTRING") _ ("Z" _)? x:multiline_txt()
        {? Lines::try_new(x).map(G::Lines).or(Err("a multi-line")) }

        rule multiline_txt() -> Vec<Vec<Vec<f64>>> = "(" _ x:(line_txt() ++ (_ "," _)) _ ")" { x }

        rule multipolygon_tagd_txt() -> G
        = i("MULTIPOLYGON") _ ("Z" _)? x:multipolygon_txt()
        {? Polygons::try_new(x).map(G::Polygons).or(Err("a multi-polygon")) }

        rule multipolygon_txt() -> Vec<Vec<Vec<Vec<f64>>>> = "(" _ x:(poly_txt() ++ (_ "," _)) _ ")" { x }

        rule geo_collection_tagd_txt() -> G
        = i("GEOMETRYCOLLECTION") _ ("Z" _)? x:geo_collection_txt()
        {? Geometries::try_new(x).map(G::Vec).or(Err("a geometry collection")) }

        rule geo_collection_txt() -> Vec<G> = "(" _ x:(geo_literal() ++ (_ "," _)) _ ")" { x }

        rule bbox_tagd_txt() -> G = i("BBOX") _ x:bbox_txt()
        {? BBox::try_new(x).map(G::BBox).or(Err("4 or 6 bbox coordinates")) }

        rule bbox_txt() -> Vec<f64> = "(" _ x:(signed_num() **<4,6> (_ "," _)) _ ")" { x }

        #[cache]
        rule full_date() -> Date
        = d:$(['0'..='9']*<4,4> "-" ['0'..='9']*<2,2> "-" ['0'..='9']*<2,2>)
        {? d.parse::<Date>().or(Err("a valid calendar date")) }

        #[cache]
        rule utc_time() -> Timestamp
        = z:$(['0'..='9']*<4,4> "-" ['0'..='9']*<2,2> "-" ['0'..='9']*<2,2> "T" ['0'..='9']*<2,2> ":" ['0'..='9']*<2,2> ":" ['0'..='9']*<2,2> ("." ['0'..='9']+)? "Z")
        {? z.parse::<Timestamp>().or(Err("a valid UTC timestamp")) }
    }
}
