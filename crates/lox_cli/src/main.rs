use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lox_diagnostics::{DiagnosticSink, Emitter};
use lox_driver::{exit, run, run_file, RunError, RunOutput};
use lox_syntax::ast::render;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "lox")]
#[command(about = "Lox 表达式解释器", version)]
struct Cli {
    /// 脚本文件，省略时进入交互模式
    script: Option<PathBuf>,

    /// 求值前打印前缀形式的语法树
    #[arg(long)]
    print_ast: bool,

    /// 打印扫描得到的 token
    #[arg(long)]
    tokens: bool,

    /// 诊断附带源码片段
    #[arg(long)]
    pretty: bool,

    /// 何时为诊断着色
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help 和 --version 正常退出
            let code = if err.use_stderr() { exit::USAGE } else { 0 };
            err.print().context("failed to print usage")?;
            process::exit(code);
        }
    };

    let use_colors = cli.color.enabled();
    colored::control::set_override(use_colors);
    let emitter = Emitter::with_colors(use_colors);

    match &cli.script {
        Some(path) => cmd_file(&cli, path, &emitter),
        None => cmd_prompt(&cli, &emitter),
    }
}

/// 运行脚本文件
fn cmd_file(cli: &Cli, path: &Path, emitter: &Emitter) -> Result<()> {
    let mut sink = DiagnosticSink::new();
    let (source, output) = match run_file(path, &mut sink) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(err.exit_code());
        }
    };

    present(cli, emitter, &mut sink, &output, &source, &path.display().to_string())?;

    if let Err(err) = RunError::check(&sink) {
        process::exit(err.exit_code());
    }
    Ok(())
}

/// 交互模式
fn cmd_prompt(cli: &Cli, emitter: &Emitter) -> Result<()> {
    let mut input = io::stdin().lock();
    let mut buf = Vec::new();

    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush prompt")?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).context("failed to read from stdin")? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        // 每行使用新的 sink，上一行的错误不影响这一行
        let mut sink = DiagnosticSink::new();
        let output = run(line, &mut sink);
        present(cli, emitter, &mut sink, &output, line, "<stdin>")?;
    }

    println!();
    Ok(())
}

/// 输出一次运行的结果：调试信息和值到 stdout，诊断到 stderr
fn present(
    cli: &Cli,
    emitter: &Emitter,
    sink: &mut DiagnosticSink,
    output: &RunOutput,
    source: &str,
    file_name: &str,
) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if cli.tokens {
        for token in &output.tokens {
            writeln!(stdout, "{}", token)?;
        }
    }
    if cli.print_ast {
        if let Some(expr) = &output.expr {
            writeln!(stdout, "{}", render(expr))?;
        }
    }

    for diagnostic in sink.take_diagnostics() {
        if cli.pretty {
            emitter.emit_with_source(&diagnostic, source, file_name);
        } else {
            emitter.emit(&diagnostic);
        }
    }

    if let Some(value) = &output.value {
        writeln!(stdout, "{}", value)?;
    }
    stdout.flush()?;
    Ok(())
}
