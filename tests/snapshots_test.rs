// KPLC - Symbol table and front-end core for the KPL teaching language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Snapshot tests for the KPLC front-end.
//!
//! These tests use the `insta` crate to capture and verify the token
//! listings, symbol table dumps and rendered diagnostics.

use kplc::symtab::{ConstantValue, Object, ParamMode, SymTab, Type};
use kplc::{error::format_error, lexer, Token};

// ============================================================================
// Lexer Snapshot Tests
// ============================================================================

/// Format tokens for snapshot comparison.
fn format_tokens(tokens: &[Token]) -> String {
    let mut output = String::new();
    for token in tokens {
        output.push_str(&format!("{}\n", token));
    }
    output
}

#[test]
fn test_lexer_snapshot_program() {
    let source = "program EXAMPLE;\nconst MAX = 10;\nvar c : char;\nbegin\n  c := 'a';\n  call WRITEI(MAX)\nend.";
    let tokens = lexer::tokenize(source).unwrap();
    insta::assert_snapshot!(format_tokens(&tokens), @r###"
    1-1:KW_PROGRAM
    1-9:TK_IDENT(EXAMPLE)
    1-16:SB_SEMICOLON
    2-1:KW_CONST
    2-7:TK_IDENT(MAX)
    2-11:SB_EQ
    2-13:TK_NUMBER(10)
    2-15:SB_SEMICOLON
    3-1:KW_VAR
    3-5:TK_IDENT(c)
    3-7:SB_COLON
    3-9:KW_CHAR
    3-13:SB_SEMICOLON
    4-1:KW_BEGIN
    5-3:TK_IDENT(c)
    5-5:SB_ASSIGN
    5-8:TK_CHAR('a')
    5-11:SB_SEMICOLON
    6-3:KW_CALL
    6-8:TK_IDENT(WRITEI)
    6-14:SB_LPAR
    6-15:TK_IDENT(MAX)
    6-18:SB_RPAR
    7-1:KW_END
    7-4:SB_PERIOD
    7-5:TK_EOF
    "###);
}

#[test]
fn test_lexer_snapshot_operators() {
    let source = "a(.i.) := b + c - d * e / f;\nif x != y then x := 0";
    let tokens = lexer::tokenize(source).unwrap();
    insta::assert_snapshot!(format_tokens(&tokens), @r###"
    1-1:TK_IDENT(a)
    1-2:SB_LSEL
    1-4:TK_IDENT(i)
    1-5:SB_RSEL
    1-8:SB_ASSIGN
    1-11:TK_IDENT(b)
    1-13:SB_PLUS
    1-15:TK_IDENT(c)
    1-17:SB_MINUS
    1-19:TK_IDENT(d)
    1-21:SB_TIMES
    1-23:TK_IDENT(e)
    1-25:SB_SLASH
    1-27:TK_IDENT(f)
    1-28:SB_SEMICOLON
    2-1:KW_IF
    2-4:TK_IDENT(x)
    2-6:SB_NEQ
    2-9:TK_IDENT(y)
    2-11:KW_THEN
    2-16:TK_IDENT(x)
    2-18:SB_ASSIGN
    2-21:TK_NUMBER(0)
    2-22:TK_EOF
    "###);
}

// ============================================================================
// Symbol Table Snapshot Tests
// ============================================================================

#[test]
fn test_symtab_snapshot_builtins() {
    let symtab = SymTab::new();
    insta::assert_snapshot!(symtab.dump_globals(), @r###"
    Function READC : Char
    Function READI : Int
    Procedure WRITEI
        Param i : Int
    Procedure WRITEC
        Param ch : Char
    Procedure WRITELN
    "###);
}

#[test]
fn test_symtab_snapshot_program() {
    let mut symtab = SymTab::new();
    let program = symtab.create_program_object("DEMO");
    let scope = symtab.object(program).and_then(Object::scope).unwrap();
    symtab.enter_block(scope);

    let max = symtab.create_constant_object("MAX");
    symtab
        .object_mut(max)
        .unwrap()
        .set_value(ConstantValue::int(10))
        .unwrap();
    symtab.declare_object(max).unwrap();

    let vec = symtab.create_type_object("VEC");
    symtab
        .object_mut(vec)
        .unwrap()
        .set_type(Type::array(10, Type::int()))
        .unwrap();
    symtab.declare_object(vec).unwrap();

    let v = symtab.create_variable_object("v");
    let vec_type = symtab.object(vec).and_then(Object::ty).unwrap().duplicate();
    symtab.object_mut(v).unwrap().set_type(vec_type).unwrap();
    symtab.declare_object(v).unwrap();

    let sum = symtab.create_function_object("SUM");
    symtab.declare_object(sum).unwrap();
    symtab.enter_block(symtab.object(sum).and_then(Object::scope).unwrap());
    let a = symtab.create_parameter_object("a", ParamMode::ByReference, sum);
    symtab
        .object_mut(a)
        .unwrap()
        .set_type(Type::array(10, Type::int()))
        .unwrap();
    symtab.declare_object(a).unwrap();
    let n = symtab.create_parameter_object("n", ParamMode::ByValue, sum);
    symtab.declare_object(n).unwrap();
    let i = symtab.create_variable_object("i");
    symtab.declare_object(i).unwrap();
    symtab.exit_block().unwrap();

    let show = symtab.create_procedure_object("SHOW");
    symtab.declare_object(show).unwrap();
    symtab.enter_block(symtab.object(show).and_then(Object::scope).unwrap());
    let c = symtab.create_parameter_object("c", ParamMode::ByValue, show);
    symtab.object_mut(c).unwrap().set_type(Type::char()).unwrap();
    symtab.declare_object(c).unwrap();
    symtab.exit_block().unwrap();

    insta::assert_snapshot!(symtab.dump_object(program), @r###"
    Program DEMO
        Const MAX = 10
        Type VEC = Arr(10,Int)
        Var v : Arr(10,Int)
        Function SUM : Int
            Param VAR a : Arr(10,Int)
            Param n : Int
            Var i : Int
        Procedure SHOW
            Param c : Char
    "###);
}

// ============================================================================
// Error Snapshot Tests
// ============================================================================

#[test]
fn test_error_snapshot_invalid_symbol() {
    let source = "x := 1 @ 2";
    let err = lexer::tokenize(source).unwrap_err();
    insta::assert_snapshot!(format_error(&err, source, Some("test.kpl")), @r###"
    error[E001]: Invalid symbol '@'
      --> test.kpl:1:8
      |
    1 | x := 1 @ 2
      |        ^
    "###);
}

#[test]
fn test_error_snapshot_ident_too_long() {
    let source = "var averyveryverylongname : integer;";
    let err = lexer::tokenize(source).unwrap_err();
    insta::assert_snapshot!(format_error(&err, source, Some("test.kpl")), @r###"
    error[E003]: Identifier 'averyveryverylongname' is too long
      --> test.kpl:1:5
      |
    1 | var averyveryverylongname : integer;
      |     ^
       = hint: identifiers may have at most 15 characters
    "###);
}
