#[cfg(test)]
/// Parser unit tests.
///
/// Each test compiles a small program and checks either the resulting symbol
/// table or the single diagnostic the front-end stops with.
mod tests {
    use super::*;

    fn err_of(source: &str) -> CompileError {
        parse(source).expect_err("compilation should fail")
    }

    #[test]
    fn test_minimal_program() {
        let table = parse("PROGRAM p; BEGIN END.").unwrap();
        let program = table.program().unwrap();
        assert_eq!(table.entity(program).name, "p");
    }

    #[test]
    fn test_declarations_land_in_program_scope() {
        let table = parse(
            "PROGRAM p;\n\
             CONST c = 10;\n\
             TYPE vec = ARRAY [10] OF INTEGER;\n\
             VAR x : INTEGER; v : vec;\n\
             BEGIN END.",
        )
        .unwrap();
        let scope = table.scope_of(table.program().unwrap()).unwrap();
        let names: Vec<&str> = table
            .scope(scope)
            .entities
            .iter()
            .map(|&id| table.entity(id).name.as_str())
            .collect();
        assert_eq!(names, ["c", "vec", "x", "v"]);
    }

    #[test]
    fn test_named_type_is_duplicated_structurally() {
        let table = parse(
            "PROGRAM p;\n\
             TYPE vec = ARRAY [3] OF CHAR;\n\
             VAR v : vec;\n\
             BEGIN END.",
        )
        .unwrap();
        let scope = table.scope_of(table.program().unwrap()).unwrap();
        let v = *table.scope(scope).entities.last().unwrap();
        match &table.entity(v).kind {
            EntityKind::Variable { ty } => assert_eq!(*ty, Type::array(3, Type::Char)),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_negative_constant() {
        let table = parse("PROGRAM p; CONST c = -5; BEGIN END.").unwrap();
        let scope = table.scope_of(table.program().unwrap()).unwrap();
        let c = table.scope(scope).entities[0];
        match &table.entity(c).kind {
            EntityKind::Constant { value } => assert_eq!(*value, ConstantValue::Int(-5)),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_negated_char_constant_is_rejected() {
        let err = err_of("PROGRAM p; CONST a = 'x'; b = -a; BEGIN END.");
        assert_eq!(err.kind, ErrorKind::UndeclaredIntConstant);
    }

    #[test]
    fn test_duplicate_in_same_scope() {
        let err = err_of("PROGRAM p; VAR x : INTEGER; x : CHAR; BEGIN END.");
        assert_eq!(err.kind, ErrorKind::DuplicateIdent);
    }

    #[test]
    fn test_shadowing_in_nested_routine() {
        parse(
            "PROGRAM p;\n\
             VAR x : INTEGER;\n\
             PROCEDURE q;\n\
             VAR x : CHAR;\n\
             BEGIN x := 'a' END;\n\
             BEGIN x := 1 END.",
        )
        .unwrap();
    }

    #[test]
    fn test_assignment_type_mismatch_position() {
        let err = err_of(
            "PROGRAM p;\n\
             VAR x : INTEGER;\n\
             BEGIN\n  x := 'a'\nEND.",
        );
        assert_eq!(err.kind, ErrorKind::TypeInconsistency);
        assert_eq!((err.pos.line, err.pos.col), (4, 8));
    }

    #[test]
    fn test_undeclared_in_expression() {
        let err = err_of("PROGRAM p; VAR x : INTEGER; BEGIN x := y END.");
        assert_eq!(err.kind, ErrorKind::UndeclaredIdent);
    }

    #[test]
    fn test_assign_to_constant_is_invalid() {
        let err = err_of("PROGRAM p; CONST c = 1; BEGIN c := 2 END.");
        assert_eq!(err.kind, ErrorKind::InvalidIdent);
    }

    #[test]
    fn test_indexing_narrows_array_type() {
        parse(
            "PROGRAM p;\n\
             VAR m : ARRAY [2] OF ARRAY [3] OF INTEGER;\n\
             BEGIN m[1][2] := 7 END.",
        )
        .unwrap();
    }

    #[test]
    fn test_indexing_a_non_array() {
        let err = err_of("PROGRAM p; VAR x : INTEGER; BEGIN x[1] := 2 END.");
        assert_eq!(err.kind, ErrorKind::InvalidType);
    }

    #[test]
    fn test_index_must_be_int() {
        let err = err_of(
            "PROGRAM p; VAR v : ARRAY [5] OF INTEGER; BEGIN v['a'] := 1 END.",
        );
        assert_eq!(err.kind, ErrorKind::InvalidBasicType);
    }

    #[test]
    fn test_partial_indexing_keeps_array_type() {
        // m[1] has type ARRAY [3] OF INTEGER; assigning an Int to it is a
        // type inconsistency, not an index error.
        let err = err_of(
            "PROGRAM p;\n\
             VAR m : ARRAY [2] OF ARRAY [3] OF INTEGER;\n\
             BEGIN m[1] := 7 END.",
        );
        assert_eq!(err.kind, ErrorKind::TypeInconsistency);
    }

    #[test]
    fn test_function_call_and_return_assignment() {
        parse(
            "PROGRAM p;\n\
             VAR x : INTEGER;\n\
             FUNCTION f(n : INTEGER) : INTEGER;\n\
             BEGIN f := n + 1 END;\n\
             BEGIN x := f(3) END.",
        )
        .unwrap();
    }

    #[test]
    fn test_function_return_assignment_outside_body() {
        let err = err_of(
            "PROGRAM p;\n\
             FUNCTION f : INTEGER;\n\
             BEGIN f := 1 END;\n\
             BEGIN f := 2 END.",
        );
        assert_eq!(err.kind, ErrorKind::InvalidIdent);
        assert_eq!((err.pos.line, err.pos.col), (4, 7));
    }

    #[test]
    fn test_argument_type_mismatch() {
        let err = err_of(
            "PROGRAM p;\n\
             VAR x : INTEGER;\n\
             FUNCTION f(n : INTEGER) : INTEGER;\n\
             BEGIN f := n END;\n\
             BEGIN x := f('a') END.",
        );
        assert_eq!(err.kind, ErrorKind::TypeInconsistency);
    }

    #[test]
    fn test_surplus_argument_strands_the_parse() {
        // Pairing walks both lists in lockstep; once the parameters run out
        // the surplus expression is never consumed, so the closing paren
        // check trips on it.
        let err = err_of(
            "PROGRAM p;\n\
             VAR x : INTEGER;\n\
             FUNCTION f(n : INTEGER) : INTEGER;\n\
             BEGIN f := n END;\n\
             BEGIN x := f(1, 2) END.",
        );
        assert_eq!(err.kind, ErrorKind::MissingToken("RPAR"));
        assert_eq!((err.pos.line, err.pos.col), (5, 17));
    }

    #[test]
    fn test_missing_arguments_are_tolerated() {
        // The converse is silent: leftover parameters simply go unpaired.
        parse(
            "PROGRAM p;\n\
             VAR x : INTEGER;\n\
             FUNCTION f(n : INTEGER; m : INTEGER) : INTEGER;\n\
             BEGIN f := n END;\n\
             BEGIN x := f(1) END.",
        )
        .unwrap();
    }

    #[test]
    fn test_call_statement_with_reference_param() {
        parse(
            "PROGRAM p;\n\
             VAR x : INTEGER;\n\
             PROCEDURE q(VAR n : INTEGER);\n\
             BEGIN n := 0 END;\n\
             BEGIN CALL q(x) END.",
        )
        .unwrap();
    }

    #[test]
    fn test_call_of_a_function_is_invalid() {
        let err = err_of(
            "PROGRAM p;\n\
             FUNCTION f : INTEGER;\n\
             BEGIN f := 1 END;\n\
             BEGIN CALL f END.",
        );
        assert_eq!(err.kind, ErrorKind::InvalidProcedure);
    }

    #[test]
    fn test_call_undeclared_procedure() {
        let err = err_of("PROGRAM p; BEGIN CALL q END.");
        assert_eq!(err.kind, ErrorKind::UndeclaredProcedure);
    }

    #[test]
    fn test_builtin_io_routines() {
        parse(
            "PROGRAM p;\n\
             VAR x : INTEGER; ch : CHAR;\n\
             BEGIN\n\
               x := READI;\n\
               ch := READC;\n\
               CALL WRITEI(x);\n\
               CALL WRITEC(ch);\n\
               CALL WRITELN\n\
             END.",
        )
        .unwrap();
    }

    #[test]
    fn test_duplicate_parameter() {
        let err = err_of(
            "PROGRAM p;\n\
             PROCEDURE q(n : INTEGER; n : CHAR);\n\
             BEGIN END;\n\
             BEGIN END.",
        );
        assert_eq!(err.kind, ErrorKind::DuplicateIdent);
    }

    #[test]
    fn test_function_return_type_must_be_basic() {
        let err = err_of(
            "PROGRAM p;\n\
             TYPE vec = ARRAY [2] OF INTEGER;\n\
             FUNCTION f : vec;\n\
             BEGIN END;\n\
             BEGIN END.",
        );
        assert_eq!(err.kind, ErrorKind::InvalidBasicType);
    }

    #[test]
    fn test_for_loop() {
        parse(
            "PROGRAM p;\n\
             VAR i : INTEGER; s : INTEGER;\n\
             BEGIN FOR i := 1 TO 10 DO s := s + i END.",
        )
        .unwrap();
    }

    #[test]
    fn test_for_variable_must_be_int() {
        let err = err_of(
            "PROGRAM p; VAR ch : CHAR; BEGIN FOR ch := 1 TO 3 DO ch := ch END.",
        );
        assert_eq!(err.kind, ErrorKind::InvalidBasicType);
    }

    #[test]
    fn test_for_variable_must_be_a_variable() {
        let err = err_of(
            "PROGRAM p;\n\
             PROCEDURE q(n : INTEGER);\n\
             BEGIN FOR n := 1 TO 3 DO n := n END;\n\
             BEGIN END.",
        );
        assert_eq!(err.kind, ErrorKind::InvalidVariable);
    }

    #[test]
    fn test_if_while_and_conditions() {
        parse(
            "PROGRAM p;\n\
             VAR x : INTEGER; ch : CHAR;\n\
             BEGIN\n\
               IF x < 10 THEN x := x + 1 ELSE x := 0;\n\
               WHILE ch <> 'z' DO ch := 'z'\n\
             END.",
        )
        .unwrap();
    }

    #[test]
    fn test_condition_operands_must_agree() {
        let err = err_of("PROGRAM p; VAR x : INTEGER; BEGIN IF x = 'a' THEN x := 0 END.");
        assert_eq!(err.kind, ErrorKind::TypeInconsistency);
    }

    #[test]
    fn test_missing_comparator() {
        let err = err_of("PROGRAM p; VAR x : INTEGER; BEGIN IF x THEN x := 0 END.");
        assert_eq!(err.kind, ErrorKind::InvalidComparator);
    }

    #[test]
    fn test_unary_minus_forces_int() {
        let err = err_of("PROGRAM p; VAR ch : CHAR; BEGIN ch := -ch END.");
        assert_eq!(err.kind, ErrorKind::InvalidBasicType);
    }

    #[test]
    fn test_mixed_operand_types_in_sum() {
        let err = err_of("PROGRAM p; VAR x : INTEGER; BEGIN x := 1 + 'a' END.");
        assert_eq!(err.kind, ErrorKind::InvalidBasicType);
    }

    #[test]
    fn test_adjacent_operands_are_a_malformed_term() {
        // `2` follows a complete term without an operator; FOLLOW(term)
        // rejects it at the lookahead position.
        let err = err_of("PROGRAM p; VAR x : INTEGER; BEGIN x := 1 2 END.");
        assert_eq!(err.kind, ErrorKind::InvalidTerm);
        assert_eq!((err.pos.line, err.pos.col), (1, 42));
    }

    #[test]
    fn test_missing_semicolon() {
        let err = err_of("PROGRAM p BEGIN END.");
        assert_eq!(err.kind, ErrorKind::MissingToken("SEMICOLON"));
        assert_eq!((err.pos.line, err.pos.col), (1, 11));
    }

    #[test]
    fn test_empty_statements_are_fine() {
        parse("PROGRAM p; BEGIN ;; END.").unwrap();
    }

    #[test]
    fn test_statement_starting_with_stray_token() {
        let err = err_of("PROGRAM p; BEGIN . END.");
        assert_eq!(err.kind, ErrorKind::InvalidStatement);
    }

    #[test]
    fn test_parenthesized_expression() {
        parse("PROGRAM p; VAR x : INTEGER; BEGIN x := (1 + 2) * 3 END.").unwrap();
    }

    #[test]
    fn test_parse_is_reentrant() {
        let source = "PROGRAM p; BEGIN END.";
        parse(source).unwrap();
        parse(source).unwrap();
    }
}
