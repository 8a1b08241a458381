//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Variable declarations and returns
//! - Literals, prefix and infix expressions
//! - Operator precedence
//! - If expressions and blocks
//! - Statement terminators
//! - Error cases

use crate::{
    ast::ast::{Expr, Node, Program, Stmt},
    errors::errors::{Error, ErrorImpl, ErrorKind},
    lexer::{lexer::Lexer, tokens::TokenKind},
    reader::reader::StringReader,
    Position,
};

use super::{
    lookups::BindingPower,
    parser::{parse, Parser},
};

fn parse_str(source: &str) -> Result<Program, Error> {
    parse(Lexer::new(StringReader::from_source(source)))
}

fn parse_ok(source: &str) -> Program {
    match parse_str(source) {
        Ok(program) => program,
        Err(error) => panic!("failed to parse {:?}: {}", source, error),
    }
}

fn single_expr(source: &str) -> Expr {
    let program = parse_ok(source);
    assert_eq!(program.len(), 1, "expected one statement in {:?}", source);

    match &program.statements[0] {
        Stmt::Expression(stmt) => stmt.expression.clone(),
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

fn unexpected(expected: &str, received: &str) -> ErrorImpl {
    ErrorImpl::UnexpectedToken {
        expected: expected.to_string(),
        received: received.to_string(),
    }
}

#[test]
fn test_binding_power_order() {
    assert!(BindingPower::Lowest < BindingPower::Equals);
    assert!(BindingPower::Equals < BindingPower::LessGreater);
    assert!(BindingPower::LessGreater < BindingPower::Sum);
    assert!(BindingPower::Sum < BindingPower::Product);
    assert!(BindingPower::Product < BindingPower::Prefix);
    assert!(BindingPower::Prefix < BindingPower::Call);
}

#[test]
fn test_lookup_tables_are_registered() {
    let parser = Parser::new(Lexer::new(StringReader::from_source("a"))).unwrap();

    assert_eq!(
        parser.get_bp_lookup().get(&TokenKind::Star),
        Some(&BindingPower::Product)
    );
    assert_eq!(
        parser.get_bp_lookup().get(&TokenKind::NotEquals),
        Some(&BindingPower::Equals)
    );
    assert!(parser.get_nud_lookup().contains_key(&TokenKind::Minus));
    assert!(parser.get_led_lookup().contains_key(&TokenKind::Minus));
    assert!(!parser.get_led_lookup().contains_key(&TokenKind::Not));
    assert!(parser.get_stmt_lookup().contains_key(&TokenKind::Var));
    assert_eq!(parser.current_token_kind(), TokenKind::Identifier);
    assert_eq!(parser.peek_token_kind(), TokenKind::EOF);
}

#[test]
fn test_parse_variable_declarations() {
    let cases = [
        ("var x = 5", "x", "5"),
        ("var y = true;", "y", "true"),
        ("var foobar = y", "foobar", "y"),
        ("var ratio = 1.5", "ratio", "1.5"),
    ];

    for (source, name, value) in cases {
        let program = parse_ok(source);
        assert_eq!(program.len(), 1);

        let Stmt::VarDecl(decl) = &program.statements[0] else {
            panic!("expected a declaration for {:?}", source);
        };
        assert_eq!(decl.token_literal(), "var");
        assert_eq!(decl.identifier.value, name);
        assert_eq!(decl.identifier.token_literal(), name);
        assert_eq!(decl.assigned_value.to_string(), value);
    }
}

#[test]
fn test_parse_several_declarations() {
    let program = parse_ok("var x = 5;\nvar y = 10\n\nvar foobar = 838383;");

    assert_eq!(program.len(), 3);
    assert_eq!(program.to_string(), "var x = 5;var y = 10;var foobar = 838383;");
}

#[test]
fn test_parse_declaration_with_expression() {
    let program = parse_ok("var total = a + b * 2");

    assert_eq!(program.to_string(), "var total = (a + (b * 2));");
}

#[test]
fn test_parse_return_statements() {
    let cases = [
        ("return 5;", Some("5")),
        ("return x + y", Some("(x + y)")),
        ("return;", None),
        ("return", None),
    ];

    for (source, value) in cases {
        let program = parse_ok(source);
        assert_eq!(program.len(), 1);

        let Stmt::Return(stmt) = &program.statements[0] else {
            panic!("expected a return for {:?}", source);
        };
        assert_eq!(stmt.token_literal(), "return");
        assert_eq!(stmt.value.as_ref().map(|v| v.to_string()).as_deref(), value);
    }
}

#[test]
fn test_parse_return_rendering() {
    assert_eq!(parse_ok("return 5").to_string(), "return 5;");
    assert_eq!(parse_ok("return\n").to_string(), "return;");
}

#[test]
fn test_return_without_value_before_closing_brace() {
    let program = parse_ok("{ return }");

    let Stmt::Block(block) = &program.statements[0] else {
        panic!("expected a block");
    };
    assert_eq!(block.body.len(), 1);
    assert_eq!(block.to_string(), "{ return; }");
}

#[test]
fn test_parse_identifier_expression() {
    let Expr::Symbol(symbol) = single_expr("foobar;") else {
        panic!("expected a symbol");
    };

    assert_eq!(symbol.value, "foobar");
    assert_eq!(symbol.token_literal(), "foobar");
}

#[test]
fn test_parse_integer_literal() {
    let Expr::Integer(integer) = single_expr("5;") else {
        panic!("expected an integer");
    };

    assert_eq!(integer.value, 5);
    assert_eq!(integer.token_literal(), "5");
}

#[test]
fn test_parse_decimal_literal() {
    let Expr::Decimal(decimal) = single_expr("2.25") else {
        panic!("expected a decimal");
    };

    assert_eq!(decimal.value, 2.25);
    assert_eq!(decimal.to_string(), "2.25");
}

#[test]
fn test_parse_boolean_literals() {
    for (source, expected) in [("true;", true), ("false", false)] {
        let Expr::Boolean(boolean) = single_expr(source) else {
            panic!("expected a boolean for {:?}", source);
        };
        assert_eq!(boolean.value, expected);
    }
}

#[test]
fn test_parse_string_and_char_literals() {
    let Expr::String(string) = single_expr("\"hello world\"") else {
        panic!("expected a string");
    };
    assert_eq!(string.value, "hello world");
    assert_eq!(string.to_string(), "\"hello world\"");

    let Expr::Char(character) = single_expr("'a'") else {
        panic!("expected a char");
    };
    assert_eq!(character.value, 'a');
    assert_eq!(character.to_string(), "'a'");
}

#[test]
fn test_parse_prefix_expressions() {
    let cases = [("!5;", "!", "5"), ("-15;", "-", "15"), ("!true", "!", "true")];

    for (source, operator, operand) in cases {
        let Expr::Prefix(prefix) = single_expr(source) else {
            panic!("expected a prefix expression for {:?}", source);
        };
        assert_eq!(prefix.operator.value, operator);
        assert_eq!(prefix.right_expr.to_string(), operand);
    }
}

#[test]
fn test_parse_infix_expressions() {
    let operators = ["+", "-", "*", "/", ">", "<", ">=", "<=", "==", "!="];

    for operator in operators {
        let source = format!("5 {} 6", operator);
        let Expr::Infix(infix) = single_expr(&source) else {
            panic!("expected an infix expression for {:?}", source);
        };
        assert_eq!(infix.left.to_string(), "5");
        assert_eq!(infix.operator.value, operator);
        assert_eq!(infix.right.to_string(), "6");
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        ("a <= b >= c", "((a <= b) >= c)"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_ok(source).to_string(), expected, "source: {:?}", source);
    }
}

#[test]
fn test_parse_if_expression() {
    let Expr::If(if_expr) = single_expr("if (x < y) { x }") else {
        panic!("expected an if expression");
    };

    assert_eq!(if_expr.token_literal(), "if");
    assert_eq!(if_expr.condition.to_string(), "(x < y)");
    assert_eq!(if_expr.then_body.body.len(), 1);
    assert_eq!(if_expr.then_body.to_string(), "{ x }");
    assert!(if_expr.else_body.is_none());
}

#[test]
fn test_parse_if_else_across_lines() {
    let source = "if (x < y){\n\t\tx\n\t} else {\n\t\ty\n\t}";
    let Expr::If(if_expr) = single_expr(source) else {
        panic!("expected an if expression");
    };

    assert_eq!(if_expr.then_body.to_string(), "{ x }");
    assert_eq!(
        if_expr.else_body.as_ref().map(|body| body.to_string()).as_deref(),
        Some("{ y }")
    );
    assert_eq!(if_expr.to_string(), "if (x < y) { x } else { y }");
}

#[test]
fn test_parse_nested_if() {
    let source = "if (x + y) {\n  if (y) { 1 } else { 2 }\n} else { 3 }";

    assert_eq!(
        parse_ok(source).to_string(),
        "if (x + y) { if (y) { 1 } else { 2 } } else { 3 }"
    );
}

#[test]
fn test_if_branch_without_braces_is_wrapped() {
    let Expr::If(if_expr) = single_expr("if (ready) go else stop") else {
        panic!("expected an if expression");
    };

    assert_eq!(if_expr.then_body.body.len(), 1);
    assert_eq!(if_expr.to_string(), "if (ready) { go } else { stop }");
}

#[test]
fn test_if_branch_on_next_line() {
    let program = parse_ok("if (a)\n  var b = 1");

    assert_eq!(program.len(), 1);
    assert_eq!(program.to_string(), "if (a) { var b = 1; }");
}

#[test]
fn test_parse_blocks() {
    let program = parse_ok("{\n  var a = 1\n  a\n}");

    assert_eq!(program.len(), 1);
    let Stmt::Block(block) = &program.statements[0] else {
        panic!("expected a block");
    };
    assert_eq!(block.body.len(), 2);
    assert_eq!(block.token_literal(), "{");
    assert_eq!(block.to_string(), "{ var a = 1; a }");
}

#[test]
fn test_parse_empty_block() {
    assert_eq!(parse_ok("{}").to_string(), "{ }");
    assert_eq!(parse_ok("{\n\n}").to_string(), "{ }");
}

#[test]
fn test_terminators_between_statements_are_skipped() {
    let program = parse_ok(";;\n\n a ;; b\n\n");

    assert_eq!(program.len(), 2);
    assert_eq!(program.token_literal(), "a");
}

#[test]
fn test_empty_programs() {
    for source in ["", "\n\n", "# only a comment\n", ";"] {
        let program = parse_ok(source);
        assert!(program.is_empty(), "source: {:?}", source);
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.to_string(), "");
    }
}

#[test]
fn test_dangling_operator_has_no_prefix_handler() {
    let error = parse_str("1 +").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NoPrefixHandler {
            token: "<eof>".to_string()
        }
    );
}

#[test]
fn test_operator_cannot_continue_on_next_line() {
    let error = parse_str("a +\nb").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NoPrefixHandler {
            token: "<new line>".to_string()
        }
    );
}

#[test]
fn test_unexpected_closing_paren() {
    let error = parse_str(")").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NoPrefixHandler {
            token: ")".to_string()
        }
    );
    assert_eq!(error.get_position(), &Position { line: 1, column: 1 });
}

#[test]
fn test_declaration_errors() {
    let error = parse_str("var = 1").unwrap_err();
    assert_eq!(error.get_impl(), &unexpected("<identifier>", "="));
    assert_eq!(error.get_position(), &Position { line: 1, column: 5 });

    let error = parse_str("var x 1").unwrap_err();
    assert_eq!(error.get_impl(), &unexpected("=", "<integer>"));
}

#[test]
fn test_missing_closing_paren() {
    let error = parse_str("(1 + 2").unwrap_err();

    assert_eq!(error.get_impl(), &unexpected(")", "<eof>"));
}

#[test]
fn test_if_requires_parenthesized_condition() {
    let error = parse_str("if x { y }").unwrap_err();

    assert_eq!(error.get_impl(), &unexpected("(", "<identifier>"));
}

#[test]
fn test_unterminated_block() {
    let error = parse_str("{ x").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(error.get_impl(), &unexpected("}", "<eof>"));
}

#[test]
fn test_integer_overflow() {
    let error = parse_str("99999999999999999999").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string()
        }
    );
}

#[test]
fn test_lexical_errors_abort_parsing() {
    let error = parse_str("a + @").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnrecognisedCharacter { character: '@' }
    );

    let error = parse_str("@").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_rendering_parses_back_to_itself() {
    let sources = [
        "a + b * c",
        "-a * b",
        "!(x == y)",
        "if (x < y) { x } else { y }",
        "if (!a) b",
        "var x = 1 + 2",
        "return a",
        "{ var a = 1\n a }",
        "'c' == 'c'",
        "\"str\" + x",
        "1; 2",
        "a\nb",
        "x; (y)",
        "var a = 1\na\n-a",
        "if (a) { b }\nc",
    ];

    for source in sources {
        let rendered = parse_ok(source).to_string();
        let reparsed = parse_ok(&rendered).to_string();
        assert_eq!(rendered, reparsed, "source: {:?}", source);
    }
}

#[test]
fn test_several_statements_keep_their_count() {
    let cases = [
        ("1; 2", "1;2"),
        ("a\nb", "a;b"),
        ("x; (y)", "x;y"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("var a = 1\na", "var a = 1;a"),
        ("a\n'c'", "a'c'"),
        ("if (a) { b }\nc", "if (a) { b }c"),
        ("return x\ny", "return x;y"),
    ];

    for (source, expected) in cases {
        let program = parse_ok(source);
        let rendered = program.to_string();
        assert_eq!(rendered, expected, "source: {:?}", source);

        let reparsed = parse_ok(&rendered);
        assert_eq!(reparsed.len(), program.len(), "source: {:?}", source);
        assert_eq!(reparsed.to_string(), rendered);
    }
}

#[test]
fn test_return_without_value_before_else() {
    let program = parse_ok("if (a) return else b");

    assert_eq!(program.len(), 1);
    assert_eq!(program.to_string(), "if (a) { return; } else { b }");
    assert_eq!(
        parse_ok("if (a) return\nelse b").to_string(),
        "if (a) { return; } else { b }"
    );
}

#[test]
fn test_else_placement() {
    assert_eq!(
        parse_ok("if (a) b\nelse c").to_string(),
        "if (a) { b } else { c }"
    );

    let error = parse_str("if (a) { b }\nelse { c }").unwrap_err();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NoPrefixHandler {
            token: "else".to_string()
        }
    );
    assert_eq!(error.get_position(), &Position { line: 2, column: 1 });
}

#[test]
fn test_dangling_operator_at_line_end_points_at_that_line() {
    let error = parse_str("1 +\n").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NoPrefixHandler {
            token: "<new line>".to_string()
        }
    );
    assert_eq!(error.get_position(), &Position { line: 1, column: 4 });
}
