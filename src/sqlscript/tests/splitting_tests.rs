// sqlscript/tests/splitting_tests.rs

use sqlscript::error::Result;
use sqlscript::{split_script, split_sql_script, ParseFailure, ScriptConfig, ScriptError};

fn split(script: &str) -> Result<Vec<String>> {
    split_script(script, &ScriptConfig::default().with_resource("ignored"))
}

fn assert_split(script: &str, expected: &[&str]) -> Result<()> {
    let statements = split(script)?;
    assert_eq!(statements, expected);
    Ok(())
}

#[test]
fn string_demarcation() -> Result<()> {
    let script = "SELECT 'foo `bar`'; SELECT 'foo -- `bar`'; SELECT 'foo /* `bar`';";
    assert_split(
        script,
        &[
            "SELECT 'foo `bar`'",
            "SELECT 'foo -- `bar`'",
            "SELECT 'foo /* `bar`'",
        ],
    )
}

#[test]
fn end_as_column_name() -> Result<()> {
    let script = "create database if not exists ttt;\n\
        \n\
        use ttt;\n\
        \n\
        create table aaa\n\
        (\n\
        \x20   id                  bigint auto_increment   primary key,\n\
        \x20   end_time            datetime     null       COMMENT 'end_time',\n\
        \x20   data_status         varchar(16)  not null\n\
        ) comment 'aaa';\n\
        \n\
        create table bbb\n\
        (\n\
        \x20   id                  bigint auto_increment   primary key\n\
        ) comment 'bbb';";
    assert_split(
        script,
        &[
            "create database if not exists ttt",
            "use ttt",
            "create table aaa ( id bigint auto_increment primary key, end_time datetime null COMMENT 'end_time', data_status varchar(16) not null ) comment 'aaa'",
            "create table bbb ( id bigint auto_increment primary key ) comment 'bbb'",
        ],
    )
}

#[test]
fn end_prefixed_column_in_consecutive_tables() -> Result<()> {
    let script = "CREATE TABLE bar (\n  end_time VARCHAR(255)\n);\nCREATE TABLE bar (\n  end_time VARCHAR(255)\n);";
    assert_split(
        script,
        &[
            "CREATE TABLE bar ( end_time VARCHAR(255) )",
            "CREATE TABLE bar ( end_time VARCHAR(255) )",
        ],
    )
}

#[test]
fn unusual_semicolon_placement() -> Result<()> {
    let script = "SELECT 1;;;;;SELECT 2;\n;SELECT 3\n; SELECT 4;\n SELECT 5";
    assert_split(
        script,
        &["SELECT 1", "SELECT 2", "SELECT 3", "SELECT 4", "SELECT 5"],
    )
}

#[test]
fn commented_semicolon() -> Result<()> {
    let script = "CREATE TABLE bar (\n  foo VARCHAR(255)\n); \nDROP PROCEDURE IF EXISTS -- ;\n    count_foo";
    assert_split(
        script,
        &[
            "CREATE TABLE bar ( foo VARCHAR(255) )",
            "DROP PROCEDURE IF EXISTS count_foo",
        ],
    )
}

#[test]
fn string_escaping() -> Result<()> {
    let script = "SELECT \"a /* string literal containing comment characters like -- here\";\n\
        SELECT \"a 'quoting' \\\"scenario ` involving BEGIN keyword\\\" here\";\n\
        SELECT * from `bar`;";
    assert_split(
        script,
        &[
            "SELECT \"a /* string literal containing comment characters like -- here\"",
            "SELECT \"a 'quoting' \\\"scenario ` involving BEGIN keyword\\\" here\"",
            "SELECT * from `bar`",
        ],
    )
}

#[test]
fn doubled_quote_escape() -> Result<()> {
    assert_split(
        "INSERT INTO t VALUES ('it''s; fine');SELECT 1;",
        &["INSERT INTO t VALUES ('it''s; fine')", "SELECT 1"],
    )
}

#[test]
fn separator_inside_double_and_backtick_literals() -> Result<()> {
    assert_split(
        "SELECT \"a;b\"; SELECT `c;d`;",
        &["SELECT \"a;b\"", "SELECT `c;d`"],
    )
}

#[test]
fn block_comment_exclusion() -> Result<()> {
    assert_split(
        "INSERT INTO bar (foo) /* ; */ VALUES ('hello world');",
        &["INSERT INTO bar (foo) VALUES ('hello world')"],
    )
}

#[test]
fn begin_end_keyword_detection() -> Result<()> {
    let script = "INSERT INTO something_end (begin_with_the_token, another_field) /*end*/ VALUES /* end */ (' begin ', `end`)-- begin\n;";
    assert_split(
        script,
        &["INSERT INTO something_end (begin_with_the_token, another_field) VALUES (' begin ', `end`)"],
    )
}

#[test]
fn comment_markers_in_strings() -> Result<()> {
    let script = "CREATE TABLE bar (foo VARCHAR(255));\n\
        \n\
        /* Insert Values */\n\
        INSERT INTO bar (foo) values ('--1');\n\
        INSERT INTO bar (foo) values ('--2');\n\
        INSERT INTO bar (foo) values ('/* something */');\n\
        /* INSERT INTO bar (foo) values (' */'); -- '*/;\n\
        INSERT INTO bar (foo) values ('foo');";
    // The broken comment on the second to last line is lexed exactly as
    // written: the block comment closes inside the literal.
    assert_split(
        script,
        &[
            "CREATE TABLE bar (foo VARCHAR(255))",
            "INSERT INTO bar (foo) values ('--1')",
            "INSERT INTO bar (foo) values ('--2')",
            "INSERT INTO bar (foo) values ('/* something */')",
            "'); -- '*/",
            "INSERT INTO bar (foo) values ('foo')",
        ],
    )
}

#[test]
fn multiple_begin_end_detection() -> Result<()> {
    let script = "CREATE TABLE bar (foo VARCHAR(255));\n\
        \n\
        CREATE TABLE gender (gender VARCHAR(255));\n\
        CREATE TABLE ending (ending VARCHAR(255));\n\
        CREATE TABLE end2 (end2 VARCHAR(255));\n\
        CREATE TABLE end_2 (end2 VARCHAR(255));\n\
        \n\
        BEGIN\n\
        \x20 INSERT INTO ending values ('ending');\n\
        END;\n\
        \n\
        BEGIN\n\
        \x20 INSERT INTO ending values ('ending');\n\
        END/*hello*/;\n\
        \n\
        BEGIN--Hello\n\
        \x20 INSERT INTO ending values ('ending');\n\
        END;\n\
        \n\
        /*Hello*/BEGIN\n\
        \x20 INSERT INTO ending values ('ending');\n\
        END;\n\
        \n\
        CREATE TABLE foo (bar VARCHAR(255));";
    assert_split(
        script,
        &[
            "CREATE TABLE bar (foo VARCHAR(255))",
            "CREATE TABLE gender (gender VARCHAR(255))",
            "CREATE TABLE ending (ending VARCHAR(255))",
            "CREATE TABLE end2 (end2 VARCHAR(255))",
            "CREATE TABLE end_2 (end2 VARCHAR(255))",
            "BEGIN\n  INSERT INTO ending values ('ending');\nEND",
            "BEGIN\n  INSERT INTO ending values ('ending');\nEND",
            "BEGIN--Hello\n  INSERT INTO ending values ('ending');\nEND",
            "BEGIN\n  INSERT INTO ending values ('ending');\nEND",
            "CREATE TABLE foo (bar VARCHAR(255))",
        ],
    )
}

#[test]
fn procedure_block() -> Result<()> {
    let body = "BEGIN\n\
        \n\
        \x20   BEGIN\n\
        \x20     SELECT *\n\
        \x20     FROM bar;\n\
        \x20     SELECT 1\n\
        \x20     FROM dual;\n\
        \x20   END;\n\
        \n\
        \x20   BEGIN\n\
        \x20     select * from bar;\n\
        \x20   END;\n\
        \n\
        \x20   -- we can do comments\n\
        \n\
        \x20   /* including block\n\
        \x20      comments\n\
        \x20    */\n\
        \n\
        \x20   /* what if BEGIN appears inside a comment? */\n\
        \n\
        \x20   select \"or what if BEGIN appears inside a literal?\";\n\
        \n\
        \x20 END";
    let script = format!("CREATE PROCEDURE count_foo()\n  {} /*; */;", body);
    let expected = format!("CREATE PROCEDURE count_foo() {}", body);

    let statements = split(&script)?;
    assert_eq!(statements, vec![expected]);
    Ok(())
}

#[test]
fn trailing_comment_before_separator_by_nesting_depth() -> Result<()> {
    let script = "CREATE PROCEDURE p() BEGIN\n\
        \x20 BEGIN\n\
        \x20   SELECT 1;\n\
        \x20 END /* inner */;\n\
        END -- outer\n\
        ;\n\
        SELECT 2;";
    assert_split(
        script,
        &[
            "CREATE PROCEDURE p() BEGIN\n  BEGIN\n    SELECT 1;\n  END /* inner */;\nEND",
            "SELECT 2",
        ],
    )
}

#[test]
fn custom_separator_with_semicolon_end() -> Result<()> {
    let script = "BEGIN END; \n@\nCALL something();\n@\n";
    let statements = split_sql_script("proc.sql", script, "@", "--", "/*", "*/")?;
    assert_eq!(statements, vec!["BEGIN END;", "CALL something();"]);
    Ok(())
}

#[test]
fn custom_multi_character_separator() -> Result<()> {
    let script = "CREATE TABLE a (x INT);\nGO\nINSERT INTO a VALUES (1);\nGO\n";
    let statements = split_sql_script("mssql.sql", script, "GO", "--", "/*", "*/")?;
    assert_eq!(
        statements,
        vec!["CREATE TABLE a (x INT);", "INSERT INTO a VALUES (1);"]
    );
    Ok(())
}

#[test]
fn dollar_quoted_function_body() -> Result<()> {
    let script = "CREATE FUNCTION f() RETURNS int AS $body$\n  SELECT 1; -- inner\n$body$ LANGUAGE sql;\nSELECT f();";
    assert_split(
        script,
        &[
            "CREATE FUNCTION f() RETURNS int AS $body$\n  SELECT 1; -- inner\n$body$ LANGUAGE sql",
            "SELECT f()",
        ],
    )
}

#[test]
fn positional_parameters_are_not_dollar_quotes() -> Result<()> {
    assert_split(
        "SELECT $1 + $2; SELECT 3;",
        &["SELECT $1 + $2", "SELECT 3"],
    )
}

#[test]
fn issue_1452_case() -> Result<()> {
    let script = "create table test (text VARCHAR(255));\n\
        \n\
        /* some comment */\n\
        insert into `test` (`text`) values ('a     b');";
    assert_split(
        script,
        &[
            "create table test (text VARCHAR(255))",
            "insert into `test` (`text`) values ('a     b')",
        ],
    )
}

#[test]
fn unclosed_block_comment() {
    let result = split("SELECT 'foo `bar`'; /*");
    match result {
        Err(ScriptError::Parse { resource, cause }) => {
            assert_eq!(resource, "ignored");
            assert!(matches!(
                cause,
                ParseFailure::UnterminatedBlockComment { ref delimiter, line: 1, column: 21 } if delimiter == "*/"
            ));
        }
        other => panic!("Should have failed with a parse error, got {:?}", other),
    }
}

#[test]
fn unclosed_dollar_quote() {
    let result = split("DO $$ BEGIN NULL; END");
    assert!(matches!(
        result,
        Err(ScriptError::Parse {
            cause: ParseFailure::UnterminatedDollarQuote { .. },
            ..
        })
    ));
}

#[test]
fn unterminated_begin_is_lenient() -> Result<()> {
    assert_split(
        "SELECT 1;\nCREATE TRIGGER t BEGIN\n  UPDATE x SET y = 1;",
        &["SELECT 1", "CREATE TRIGGER t BEGIN\n  UPDATE x SET y = 1;"],
    )
}

#[test]
fn nested_block_at_end_of_input_during_end_lookahead() -> Result<()> {
    assert_split("BEGIN BEGIN END", &["BEGIN BEGIN END"])?;
    assert_split(
        "SELECT 1; BEGIN BEGIN END -- c",
        &["SELECT 1", "BEGIN BEGIN END"],
    )
}

#[test]
fn split_is_deterministic_across_threads() -> Result<()> {
    let script = "CREATE PROCEDURE p() BEGIN SELECT 1; END; SELECT 'a;b'; -- c;\nSELECT 2";
    let expected = split(script)?;

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || split(script)))
        .collect();
    for handle in handles {
        let statements = handle.join().expect("thread panicked")?;
        assert_eq!(statements, expected);
    }
    Ok(())
}
