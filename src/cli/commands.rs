//! Command dispatch: maps parsed arguments onto the advisor service

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::services::{LoadReport, Recommendation};
use crate::application::{ApplicationError, ApplicationResult};
use crate::cli::args::{Cli, Commands};
use crate::cli::console::ConsolePrompter;
use crate::cli::menu::run_menu;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::Prompter;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(Commands::Completion { shell }) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load()?;
    debug!("settings: {:?}", settings);
    let mut container = ServiceContainer::new(settings);
    let mut prompter = ConsolePrompter;

    match &cli.command {
        None | Some(Commands::Menu) => run_menu(&mut container, &mut prompter),
        Some(Commands::Recommend { file }) => _recommend(&mut container, file.as_deref()),
        Some(Commands::Preset { output }) => _preset(&mut container, output),
        Some(Commands::Show { file }) => _show(&mut container, file.as_deref()),
        Some(Commands::Check { file }) => _check(&mut container, file),
        Some(Commands::Config) => _config(&container),
        Some(Commands::Completion { .. }) => Ok(()),
    }
}

/// Run one session and persist a learned destination when autosave is on.
///
/// The tree goes back to the file it came from; the configured tree file is
/// only used for a tree that has no backing file yet.
pub fn recommend_once(
    container: &mut ServiceContainer,
    prompter: &mut dyn Prompter,
) -> ApplicationResult<Recommendation> {
    let outcome = container.advisor.run_recommendation(prompter)?;
    if let Recommendation::Learned { .. } = outcome {
        if container.settings.autosave {
            let path = container
                .advisor
                .source()
                .map_or_else(|| container.settings.tree_file.clone(), Path::to_path_buf);
            container.advisor.save_as_text(&path)?;
            prompter.emit(&format!("Tree saved to {}", path.display()));
        }
    }
    Ok(outcome)
}

/// Surface load warnings to the user.
pub fn report_warnings(report: &LoadReport, prompter: &mut dyn Prompter) {
    for warning in &report.warnings {
        prompter.emit_warning(&warning.to_string());
    }
}

/// Load `file` if given, else the configured tree file if present, else the built-in tree.
fn load_or_preset(
    container: &mut ServiceContainer,
    file: Option<&Path>,
    prompter: &mut dyn Prompter,
) -> ApplicationResult<()> {
    let path = match file {
        Some(path) => path.to_path_buf(),
        None if container.fs.exists(&container.settings.tree_file) => {
            container.settings.tree_file.clone()
        }
        None => {
            debug!("no tree file, using built-in tree");
            container.advisor.build_default_tree();
            return Ok(());
        }
    };
    let report = container.advisor.load_from_text(&path)?;
    report_warnings(&report, prompter);
    Ok(())
}

#[instrument(skip(container))]
fn _recommend(container: &mut ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let mut prompter = ConsolePrompter;
    load_or_preset(container, file, &mut prompter)?;
    match recommend_once(container, &mut prompter) {
        Err(ApplicationError::InputClosed) => Ok(()),
        other => other.map(|_| ()).map_err(CliError::from),
    }
}

#[instrument(skip(container))]
fn _preset(container: &mut ServiceContainer, output: &Path) -> CliResult<()> {
    container.advisor.build_default_tree();
    let report = container.advisor.save_as_text(output)?;
    output::success(&format!(
        "wrote {} nodes to {}",
        report.nodes,
        output.display()
    ));
    Ok(())
}

#[instrument(skip(container))]
fn _show(container: &mut ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let mut prompter = ConsolePrompter;
    match file {
        Some(path) => {
            let report = container.advisor.load_from_text(path)?;
            report_warnings(&report, &mut prompter);
        }
        None => container.advisor.build_default_tree(),
    }

    let tree = container.advisor.render().ok_or(ApplicationError::NoTree)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", tree).map_err(|e| InfraError::io("write tree view", e))?;
    Ok(())
}

#[instrument(skip(container))]
fn _check(container: &mut ServiceContainer, file: &Path) -> CliResult<()> {
    if !container.fs.exists(file) {
        return Err(CliError::Usage(format!(
            "file not found: {}",
            file.display()
        )));
    }

    let mut prompter = ConsolePrompter;
    let report = container.advisor.load_from_text(file)?;
    report_warnings(&report, &mut prompter);

    let depth = container.advisor.tree().root().map_or(0, |root| root.depth());
    output::header(&file.display());
    output::action("nodes", &report.nodes);
    output::action("destinations", &report.destinations);
    output::action("questions", &(report.nodes - report.destinations));
    output::action("depth", &depth);
    if report.warnings.is_empty() {
        output::success("well-formed");
    }
    Ok(())
}

fn _config(container: &ServiceContainer) -> CliResult<()> {
    let path = global_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<none>".into());
    output::header(&format!("# config file: {}", path));
    output::info(&container.settings.to_toml()?);
    Ok(())
}
