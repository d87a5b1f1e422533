//! Numbered interactive menu
//!
//! Every choice is independent: errors are reported and the loop goes on
//! until the user quits or input ends.

use std::io;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::cli::commands::{recommend_once, report_warnings};
use crate::cli::CliResult;
use crate::domain::PLACEHOLDER_LABEL;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::Prompter;
use crate::infrastructure::InfraError;

const MENU: [&str; 6] = [
    "--- Travel Expert System ---",
    "1. Build Expert System (20+ destinations)",
    "2. Find a Destination",
    "3. Save Tree to Text File",
    "4. Load Tree from Text File",
    "5. Quit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Build,
    Find,
    Save,
    Load,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Build),
            "2" => Some(Self::Find),
            "3" => Some(Self::Save),
            "4" => Some(Self::Load),
            "5" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the menu until "5" or end of input.
#[instrument(skip_all)]
pub fn run_menu(container: &mut ServiceContainer, prompter: &mut dyn Prompter) -> CliResult<()> {
    loop {
        prompter.emit("");
        for line in MENU {
            prompter.emit(line);
        }

        let input = match prompter.prompt_line("Enter your choice:") {
            Ok(input) => input,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("input closed");
                return Ok(());
            }
            Err(e) => return Err(InfraError::io("read menu choice", e).into()),
        };

        let Some(choice) = MenuChoice::parse(&input) else {
            prompter.emit("Invalid choice. Try again.");
            continue;
        };
        if choice == MenuChoice::Quit {
            prompter.emit("Goodbye!");
            return Ok(());
        }

        match dispatch(choice, container, prompter) {
            Ok(()) => {}
            Err(ApplicationError::InputClosed) => {
                debug!("input closed during {:?}", choice);
                return Ok(());
            }
            Err(e) => prompter.emit_error(&e.to_string()),
        }
    }
}

fn dispatch(
    choice: MenuChoice,
    container: &mut ServiceContainer,
    prompter: &mut dyn Prompter,
) -> ApplicationResult<()> {
    match choice {
        MenuChoice::Build => {
            container.advisor.build_default_tree();
            let count = container
                .advisor
                .tree()
                .root()
                .map_or(0, |root| root.leaf_count());
            prompter.emit(&format!(
                "Expert system initialized with {count} destinations."
            ));
        }
        MenuChoice::Find => {
            recommend_once(container, prompter)?;
        }
        MenuChoice::Save => {
            let input = prompter
                .prompt_line("Enter filename to save tree as text (blank for default):")
                .map_err(ApplicationError::prompt)?;
            let path = container.tree_path(&input);
            let report = container.advisor.save_as_text(&path)?;
            if report.repaired > 0 {
                prompter.emit_warning(&format!(
                    "filled {} missing branch(es) with {}",
                    report.repaired, PLACEHOLDER_LABEL
                ));
            }
            prompter.emit(&format!(
                "Tree saved in pre-order format to {}",
                path.display()
            ));
        }
        MenuChoice::Load => {
            let input = prompter
                .prompt_line("Enter filename to load tree from text (blank for default):")
                .map_err(ApplicationError::prompt)?;
            let path = container.tree_path(&input);
            let report = container.advisor.load_from_text(&path)?;
            report_warnings(&report, prompter);
            prompter.emit(&format!("Tree loaded from text file: {}", path.display()));
        }
        MenuChoice::Quit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_menu_input_when_parsing_then_digits_map_to_choices() {
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Find));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("find"), None);
    }
}
