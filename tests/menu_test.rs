//! Tests for the interactive menu and the autosave wiring

use std::sync::Arc;

use tempfile::TempDir;

use tripwise::application::services::Recommendation;
use tripwise::cli::commands::recommend_once;
use tripwise::cli::menu::run_menu;
use tripwise::config::Settings;
use tripwise::infrastructure::di::ServiceContainer;
use tripwise::infrastructure::traits::RealFileSystem;
use tripwise::util::testing::{init_test_setup, ScriptedPrompter};

fn container(temp: &TempDir, autosave: bool) -> ServiceContainer {
    init_test_setup();
    let settings = Settings {
        tree_file: temp.path().join("default-tree.txt"),
        autosave,
    };
    ServiceContainer::with_deps(settings, Arc::new(RealFileSystem))
}

#[test]
fn given_build_then_save_when_running_menu_then_file_written() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("saved.txt");
    let mut container = container(&temp, false);
    let mut prompter = ScriptedPrompter::new(["1", "3", path.to_str().unwrap(), "5"]);

    run_menu(&mut container, &mut prompter).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Q:Do you like warm weather?\n"));
    assert!(prompter.emitted("Expert system initialized with 22 destinations."));
    assert!(prompter.emitted("Goodbye!"));
}

#[test]
fn given_blank_filename_when_saving_then_configured_tree_file_used() {
    let temp = TempDir::new().unwrap();
    let mut container = container(&temp, false);
    let mut prompter = ScriptedPrompter::new(["1", "3", "", "5"]);

    run_menu(&mut container, &mut prompter).unwrap();

    assert!(temp.path().join("default-tree.txt").exists());
}

#[test]
fn given_saved_tree_when_loading_and_finding_then_recommends_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tree.txt");
    std::fs::write(&path, "Q:Warm?\nA:Oslo\nA:Dubai\n").unwrap();
    let mut container = container(&temp, false);
    let mut prompter =
        ScriptedPrompter::new(["4", path.to_str().unwrap(), "2", "y", "y", "5"]);

    run_menu(&mut container, &mut prompter).unwrap();

    assert!(prompter.emitted("Tree loaded from text file"));
    assert!(prompter.emitted("I recommend the following destination: Dubai"));
}

#[test]
fn given_failing_operation_when_running_menu_then_error_reported_and_loop_continues() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.txt");
    let mut container = container(&temp, false);
    let mut prompter = ScriptedPrompter::new(["4", missing.to_str().unwrap(), "9", "5"]);

    run_menu(&mut container, &mut prompter).unwrap();

    assert!(prompter.emitted("Error: operation failed: read tree"));
    assert!(prompter.emitted("No such file or directory"));
    assert!(prompter.emitted("Invalid choice. Try again."));
    assert!(prompter.emitted("Goodbye!"));
    assert!(container.advisor.tree().is_empty());
}

#[test]
fn given_lone_question_file_when_loading_then_warning_emitted() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tree.txt");
    std::fs::write(&path, "Q:Warm?\n").unwrap();
    let mut container = container(&temp, false);
    let mut prompter = ScriptedPrompter::new(["4", path.to_str().unwrap(), "5"]);

    run_menu(&mut container, &mut prompter).unwrap();

    assert!(prompter.emitted("Warning: question node \"Warm?\" is missing a child"));
}

#[test]
fn given_end_of_input_when_running_menu_then_returns_cleanly() {
    let temp = TempDir::new().unwrap();
    let mut container = container(&temp, false);
    let mut prompter = ScriptedPrompter::new(["1", "2", "y"]);

    run_menu(&mut container, &mut prompter).unwrap();

    assert_eq!(prompter.remaining(), 0);
}

#[test]
fn given_autosave_when_learning_then_tree_file_updated() {
    let temp = TempDir::new().unwrap();
    let mut container = container(&temp, true);
    container.advisor.build_default_tree();
    let mut prompter = ScriptedPrompter::new([
        "y",
        "n",
        "y",
        "n",
        "Abu Dhabi",
        "Do you want to visit the Louvre?",
        "y",
    ]);

    recommend_once(&mut container, &mut prompter).unwrap();

    let saved = std::fs::read_to_string(temp.path().join("default-tree.txt")).unwrap();
    assert!(saved.contains("Q:Do you want to visit the Louvre?\nA:Dubai\nA:Abu Dhabi\n"));
}

#[test]
fn given_autosave_off_when_learning_then_nothing_written() {
    let temp = TempDir::new().unwrap();
    let mut container = container(&temp, false);
    container.advisor.build_default_tree();
    let mut prompter = ScriptedPrompter::new([
        "n",
        "n",
        "n",
        "n",
        "n",
        "Glasgow",
        "Do you want a big city?",
        "y",
    ]);

    let outcome = recommend_once(&mut container, &mut prompter).unwrap();

    assert!(matches!(outcome, Recommendation::Learned { .. }));
    assert!(!temp.path().join("default-tree.txt").exists());
}

#[test]
fn given_autosave_after_loading_file_when_learning_then_loaded_file_updated() {
    let temp = TempDir::new().unwrap();
    let default_file = temp.path().join("default-tree.txt");
    let trip = temp.path().join("trip.txt");
    std::fs::write(&default_file, "A:Precious\n").unwrap();
    std::fs::write(&trip, "Q:Warm?\nA:Oslo\nA:Dubai\n").unwrap();
    let mut container = container(&temp, true);
    let mut prompter = ScriptedPrompter::new([
        "4",
        trip.to_str().unwrap(),
        "2",
        "y",
        "n",
        "Cairo",
        "Pyramids?",
        "y",
        "5",
    ]);

    run_menu(&mut container, &mut prompter).unwrap();

    assert_eq!(
        std::fs::read_to_string(&trip).unwrap(),
        "Q:Warm?\nA:Oslo\nQ:Pyramids?\nA:Dubai\nA:Cairo\n"
    );
    assert_eq!(std::fs::read_to_string(&default_file).unwrap(), "A:Precious\n");
    assert!(prompter.emitted(&format!("Tree saved to {}", trip.display())));
}

#[test]
fn given_no_tree_and_blank_filename_when_finding_then_configured_tree_file_loaded() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("default-tree.txt"),
        "Q:Warm?\nA:Oslo\nA:Dubai\n",
    )
    .unwrap();
    let mut container = container(&temp, false);
    let mut prompter = ScriptedPrompter::new(["2", "", "y", "y", "5"]);

    run_menu(&mut container, &mut prompter).unwrap();

    assert!(prompter.emitted("I recommend the following destination: Dubai"));
    assert!(!prompter.emitted("Error"));
}
