//! Interactive translation form.
//!
//! Each submitted (text, language) pair is one explicit call to the
//! translator; nothing is re-run between submissions.

use std::io::{self, BufRead, Write};

use colored::*;
use eyre::Result;
use log::info;

use translatr::TranslatrError;
use translatr::llm::ChatModel;
use translatr::translate::{Language, TranslationRequest, Translator};

/// Input that ends the form loop
const QUIT: &str = ":q";

/// Line that opens and closes a multi-line text block
const BLOCK: &str = "\"\"\"";

/// Print the outcome of one submission
///
/// User input problems become warnings, other errors are printed as errors.
/// The result is returned either way so the caller can count successes.
pub fn submit<M: ChatModel, W: Write>(
    translator: &Translator<M>,
    request: &TranslationRequest,
    out: &mut W,
) -> std::result::Result<String, TranslatrError> {
    match translator.translate(request) {
        Ok(translation) => {
            print_translation(&translation, out)?;
            Ok(translation)
        }
        Err(e) if e.is_user_input() => {
            writeln!(out, "{} {}", "Warning:".yellow().bold(), e)?;
            Err(e)
        }
        Err(e) => {
            writeln!(out, "{} {}", "Error:".red().bold(), e)?;
            Err(e)
        }
    }
}

/// Print a translation under the output heading
pub fn print_translation<W: Write>(translation: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "Translated Output".green().bold())?;
    writeln!(out, "{}", translation)
}

/// Print the supported languages, one per line
pub fn print_languages<W: Write>(default_language: &str, out: &mut W) -> Result<()> {
    for language in Language::ALL {
        if language.name().eq_ignore_ascii_case(default_language) {
            writeln!(out, "{} {}", language, "(default)".dimmed())?;
        } else {
            writeln!(out, "{}", language)?;
        }
    }
    Ok(())
}

fn prompt_line<R: BufRead, W: Write>(label: &str, input: &mut R, out: &mut W) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Read the text field: one line, or a `"""` block spanning several
///
/// An unterminated block keeps whatever was entered before end of input.
fn read_text<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<String>> {
    let Some(first) = prompt_line("\nText: ", input, out)? else {
        return Ok(None);
    };
    if first.trim() != BLOCK {
        return Ok(Some(first));
    }

    let mut lines = Vec::new();
    while let Some(line) = prompt_line("", input, out)? {
        if line.trim() == BLOCK {
            break;
        }
        lines.push(line);
    }
    Ok(Some(lines.join("\n")))
}

/// Run the form until `:q` or end of input
///
/// Returns the number of successful translations.
pub fn run_form<M: ChatModel, R: BufRead, W: Write>(
    translator: &Translator<M>,
    default_language: &str,
    mut input: R,
    mut out: W,
) -> Result<usize> {
    writeln!(out, "{}", "AI Language Translator".cyan().bold())?;
    writeln!(out, "Enter text to translate, {} to quit.", QUIT)?;
    writeln!(out, "Wrap multi-line text in {} lines.", BLOCK)?;

    let mut translated = 0;
    loop {
        let Some(text) = read_text(&mut input, &mut out)? else {
            break;
        };
        if text.trim() == QUIT {
            break;
        }

        let label = format!("Translate to [{}]: ", default_language);
        let Some(language) = prompt_line(&label, &mut input, &mut out)? else {
            break;
        };
        let language = if language.trim().is_empty() {
            default_language.to_string()
        } else {
            language.trim().to_string()
        };

        info!("Form submitted for {}", language);
        if submit(translator, &TranslationRequest::new(text, language), &mut out).is_ok() {
            translated += 1;
        }
    }

    writeln!(out)?;
    Ok(translated)
}
