use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// Chooses external files for export and import. `None` means the user
/// cancelled the choice.
pub trait LocationPicker {
    fn pick_destination(&self, suggested_name: &str) -> Option<PathBuf>;
    fn pick_source(&self) -> Option<PathBuf>;
}

/// A location decided up front, e.g. from a command-line argument.
#[derive(Debug, Clone)]
pub struct FixedLocation(pub Option<PathBuf>);

impl LocationPicker for FixedLocation {
    fn pick_destination(&self, _suggested_name: &str) -> Option<PathBuf> {
        self.0.clone()
    }

    fn pick_source(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}

/// Asks on stdin. An empty answer (or EOF) cancels; for destinations the
/// answer `y` accepts the suggested file name.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    fn ask(question: &str) -> Option<String> {
        eprint!("{}", question);
        io::stderr().flush().ok()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = line.trim().to_string();
                debug!("Prompt answer: {:?}", answer);
                (!answer.is_empty()).then_some(answer)
            }
        }
    }
}

impl LocationPicker for StdinPrompt {
    fn pick_destination(&self, suggested_name: &str) -> Option<PathBuf> {
        let answer = Self::ask(&format!(
            "Export to (y = {}, empty to cancel): ",
            suggested_name
        ))?;
        if answer.eq_ignore_ascii_case("y") {
            Some(PathBuf::from(suggested_name))
        } else {
            Some(PathBuf::from(answer))
        }
    }

    fn pick_source(&self) -> Option<PathBuf> {
        Self::ask("Import from (empty to cancel): ").map(PathBuf::from)
    }
}
