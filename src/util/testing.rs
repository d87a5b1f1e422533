//! Test support: logging setup and a scripted prompter

use std::collections::VecDeque;
use std::env;
use std::io;
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::traits::Prompter;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Prompter answering from a fixed script and recording everything shown.
///
/// Once the script runs out, prompts fail with `UnexpectedEof`, the same way
/// a closed stdin does.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    responses: VecDeque<String>,
    /// Prompt messages, in order
    pub prompts: Vec<String>,
    /// Emitted lines, warnings and errors prefixed as by the default trait methods
    pub output: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Responses not consumed yet.
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }

    /// True if any emitted line contains `needle`.
    pub fn emitted(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_line(&mut self, message: &str) -> io::Result<String> {
        self.prompts.push(message.to_string());
        self.responses.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }

    fn emit(&mut self, message: &str) {
        self.output.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Answer;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
    }

    #[test]
    fn given_invalid_responses_when_asking_yes_no_then_reprompts_until_valid() {
        let mut prompter = ScriptedPrompter::new(["maybe", "YES", " N "]);

        let answer = prompter.prompt_yes_no("Warm?").unwrap();

        assert_eq!(answer, Answer::No);
        assert_eq!(prompter.prompts.len(), 3);
        assert_eq!(prompter.prompts[0], "Warm? (y/n)");
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn given_exhausted_script_when_prompting_then_eof() {
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        let err = prompter.prompt_line("anything").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn given_blank_responses_when_asking_non_empty_then_skips_them() {
        let mut prompter = ScriptedPrompter::new(["", "   ", " Lisbon "]);
        assert_eq!(prompter.prompt_non_empty("Where?").unwrap(), "Lisbon");
    }
}
