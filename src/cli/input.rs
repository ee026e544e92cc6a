//! Input resolution and result delivery shared by the transform commands.

use std::io::Read;

use crate::cli::args::InputArgs;
use crate::clipboard;
use crate::error::Result;
use crate::ui::UserInterface;

/// Where the text to transform is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given on the command line.
    Text(String),
    /// The system clipboard.
    Clipboard,
    /// Standard input.
    Stdin,
}

impl InputSource {
    /// Read the full input text.
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::Clipboard => clipboard::read_clipboard(),
            InputSource::Stdin => read_stdin(std::io::stdin().lock()),
        }
    }
}

impl InputArgs {
    /// The input source selected by these flags.
    pub fn source(&self) -> InputSource {
        if let Some(text) = &self.input {
            InputSource::Text(text.clone())
        } else if self.clipboard {
            InputSource::Clipboard
        } else {
            InputSource::Stdin
        }
    }

    /// Read the input text.
    pub fn read(&self) -> Result<String> {
        let source = self.source();
        tracing::debug!("Reading input from {:?}", source);
        source.read()
    }

    /// Print `result` and copy it to the clipboard when `--copy` was given.
    pub fn deliver(&self, result: &str, ui: &mut dyn UserInterface) -> Result<()> {
        ui.output(result);
        if self.copy {
            clipboard::write_clipboard(result)?;
            ui.success("Copied to clipboard");
        }
        Ok(())
    }
}

/// Read all of `reader`, dropping the single trailing line break that
/// terminates piped text. Output re-adds it.
fn read_stdin(mut reader: impl Read) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
