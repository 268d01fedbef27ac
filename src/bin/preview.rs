// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Terminal preview of a highlighted listing.
//!
//! Renders a file through the full pipeline and prints it with ANSI
//! truecolor escapes, which makes theme and lexer behavior easy to
//! eyeball without a scene renderer.

use std::env;
use std::process::ExitCode;

use listing::{Code, Slant, Weight};

const USAGE: &str = "usage: preview <path> [--style NAME] [--language NAME]";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("preview: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let mut path = None;
    let mut style = None;
    let mut language = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--style" => style = Some(iter.next().ok_or(USAGE)?.clone()),
            "--language" => language = Some(iter.next().ok_or(USAGE)?.clone()),
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if path.is_none() => path = Some(arg.clone()),
            _ => return Err(USAGE.to_string()),
        }
    }
    let path = path.ok_or(USAGE)?;

    let mut builder = Code::builder().path(path);
    if let Some(style) = style {
        builder = builder.style(style);
    }
    if let Some(language) = language {
        builder = builder.language(language);
    }
    let code = builder.build().map_err(|e| e.to_string())?;

    eprintln!(
        "[{} / {}]",
        code.language().display_name(),
        code.style_name()
    );
    for segment in code.styled_text().segments() {
        let mut escape = String::new();
        if let Some(color) = segment.color {
            escape.push_str(&format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b));
        }
        if segment.weight == Some(Weight::Bold) {
            escape.push_str("\x1b[1m");
        }
        if segment.slant == Some(Slant::Italic) {
            escape.push_str("\x1b[3m");
        }
        if escape.is_empty() {
            print!("{}", segment.text);
        } else {
            print!("{escape}{}\x1b[0m", segment.text);
        }
    }
    Ok(())
}
