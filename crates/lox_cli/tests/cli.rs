use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// 把源码写入临时脚本
fn script(name: &str, source: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("lox_cli_{}_{}.lox", name, std::process::id()));
    std::fs::write(&path, source).expect("write temp script");
    path
}

fn lox() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("lox")?;
    cmd.args(["--color", "never"]);
    Ok(cmd)
}

#[test]
fn test_file_prints_value() -> Result<(), Box<dyn std::error::Error>> {
    let path = script("value", "1 + 2 * 3\n");

    lox()?
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("7.000000\n"));

    std::fs::remove_file(path).ok();
    Ok(())
}

#[test]
fn test_syntax_error_exits_65() -> Result<(), Box<dyn std::error::Error>> {
    let path = script("syntax", "(1 +");

    lox()?
        .arg(&path)
        .assert()
        .code(65)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "[line 1] Error at end: Expect expression.",
        ));

    std::fs::remove_file(path).ok();
    Ok(())
}

#[test]
fn test_lexical_error_exits_65() -> Result<(), Box<dyn std::error::Error>> {
    let path = script("lexical", "1 @ 2");

    lox()?
        .arg(&path)
        .assert()
        .code(65)
        .stderr(predicate::str::contains("[line 1] Error: Unexpected character."));

    std::fs::remove_file(path).ok();
    Ok(())
}

#[test]
fn test_runtime_error_exits_70() -> Result<(), Box<dyn std::error::Error>> {
    let path = script("runtime", "\"a\" + 1");

    lox()?
        .arg(&path)
        .assert()
        .code(70)
        .stderr(predicate::str::contains("Operand must be a string.\n[line 1]"));

    std::fs::remove_file(path).ok();
    Ok(())
}

#[test]
fn test_missing_file_exits_74() -> Result<(), Box<dyn std::error::Error>> {
    lox()?
        .arg("/definitely/not/here.lox")
        .assert()
        .code(74)
        .stderr(predicate::str::contains("could not read"));
    Ok(())
}

#[test]
fn test_usage_error_exits_64() -> Result<(), Box<dyn std::error::Error>> {
    lox()?.args(["a.lox", "b.lox"]).assert().code(64);
    lox()?.arg("--no-such-flag").assert().code(64);
    Ok(())
}

#[test]
fn test_help_exits_0() -> Result<(), Box<dyn std::error::Error>> {
    lox()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--print-ast"));
    Ok(())
}

#[test]
fn test_print_ast_and_tokens() -> Result<(), Box<dyn std::error::Error>> {
    let path = script("debug", "1 + 2");

    lox()?
        .args(["--print-ast", "--tokens"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Plus + nil"))
        .stdout(predicate::str::contains("Eof  nil"))
        .stdout(predicate::str::contains("(+ 1 2)"))
        .stdout(predicate::str::ends_with("3.000000\n"));

    std::fs::remove_file(path).ok();
    Ok(())
}

#[test]
fn test_pretty_diagnostic() -> Result<(), Box<dyn std::error::Error>> {
    let path = script("pretty", "1 +");

    lox()?
        .arg("--pretty")
        .arg(&path)
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Expect expression."));

    std::fs::remove_file(path).ok();
    Ok(())
}

#[test]
fn test_repl_continues_after_errors() -> Result<(), Box<dyn std::error::Error>> {
    lox()?
        .write_stdin("1 + 1\n\"a\" + 1\n(2 *\n2 * 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("> 2.000000"))
        .stdout(predicate::str::contains("> 4.000000"))
        .stderr(predicate::str::contains("Operand must be a string."))
        .stderr(predicate::str::contains("[line 1] Error at end: Expect expression."));
    Ok(())
}

#[test]
fn test_deep_nesting_exits_65() -> Result<(), Box<dyn std::error::Error>> {
    let path = script("deep", &format!("{}1", "-".repeat(100_000)));

    lox()?
        .arg(&path)
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Too much nesting."));

    std::fs::remove_file(path).ok();
    Ok(())
}
