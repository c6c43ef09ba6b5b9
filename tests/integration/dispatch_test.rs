//! End-to-end dispatch tests: fragment in, title and invocation out.

use pretty_assertions::assert_eq;
use sketchbook::config::Config;
use sketchbook::dispatcher::Dispatcher;
use sketchbook::module::{builtin_module, FailingModule, ModuleExports, StaticModule};
use sketchbook::page::HeadlessPage;
use sketchbook::registry::{Sketch, SketchRegistry};
use std::sync::{Arc, Mutex};

/// Builds a dispatcher whose single entry point records the command strings
/// it is invoked with, plus handles for observing titles and invocations.
fn recording_dispatcher(
    registry: SketchRegistry,
    name: &str,
) -> (Dispatcher, HeadlessPage, Arc<Mutex<Vec<String>>>) {
    let commands: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = commands.clone();
    let module = StaticModule::new(ModuleExports::new().register(name, move |command: &str| {
        recorded.lock().unwrap().push(command.to_string());
    }));
    let page = HeadlessPage::new();
    let view = page.clone();
    let dispatcher = Dispatcher::new(registry, Box::new(module), Box::new(page));
    (dispatcher, view, commands)
}

#[tokio::test]
async fn test_initial_sketch_end_to_end() {
    let (mut dispatcher, page, commands) =
        recording_dispatcher(SketchRegistry::with_defaults(), "initial");

    dispatcher.run("#initial").await.unwrap();

    assert_eq!(page.titles(), vec!["Initial.rs @ ".to_string()]);
    assert_eq!(*commands.lock().unwrap(), vec!["initial".to_string()]);
}

#[tokio::test]
async fn test_encoded_arguments_reach_the_entry_point_decoded() {
    let (mut dispatcher, page, commands) =
        recording_dispatcher(SketchRegistry::with_defaults(), "initial");

    dispatcher
        .run("initial%20-seed%3D%2242%22%20%27two%20words%27")
        .await
        .unwrap();

    assert_eq!(page.last_title(), Some("Initial.rs @ ".to_string()));
    assert_eq!(
        *commands.lock().unwrap(),
        vec![r#"initial -seed="42" 'two words'"#.to_string()]
    );
}

#[tokio::test]
async fn test_unknown_sketch_has_no_side_effects() {
    let (mut dispatcher, page, commands) =
        recording_dispatcher(SketchRegistry::with_defaults(), "initial");

    let err = dispatcher.run("#nope").await.unwrap_err();

    assert_eq!(err.category(), "Unknown Sketch");
    assert_eq!(page.titles(), Vec::<String>::new());
    assert!(commands.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_registered_sketch_missing_from_module_exports() {
    let mut registry = SketchRegistry::with_defaults();
    registry.insert(
        "wave",
        Sketch {
            title: "Wave".to_string(),
            created_at: 0,
            text: String::new(),
        },
    );
    // The module only exports `initial`, so `wave` resolves in the registry
    // but not in the exports.
    let (mut dispatcher, page, commands) = recording_dispatcher(registry, "initial");

    let err = dispatcher.run("wave").await.unwrap_err();

    assert_eq!(err.category(), "Unknown Entry Point");
    assert_eq!(page.titles(), Vec::<String>::new());
    assert!(commands.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_module_initialization_failure_blocks_dispatch() {
    let page = HeadlessPage::new();
    let view = page.clone();
    let mut dispatcher = Dispatcher::new(
        SketchRegistry::with_defaults(),
        Box::new(FailingModule::new("fetch aborted")),
        Box::new(page),
    );

    let err = dispatcher.run("#initial").await.unwrap_err();

    assert_eq!(err.category(), "Module Error");
    assert_eq!(view.titles(), Vec::<String>::new());
}

#[tokio::test]
async fn test_builtin_module_runs_the_initial_sketch() {
    let page = HeadlessPage::new();
    let view = page.clone();
    let mut dispatcher = Dispatcher::new(
        Config::default().registry(),
        Box::new(builtin_module()),
        Box::new(page),
    );

    dispatcher.run("#initial%20-fast").await.unwrap();

    assert_eq!(view.last_title(), Some("Initial.rs @ ".to_string()));
}

#[tokio::test]
async fn test_config_defined_sketch_is_dispatchable() {
    let toml = r#"
[sketches.wave]
title = "Wave"
created_at = 1600000000000
"#;
    let config: Config = toml::from_str(toml).unwrap();
    let (mut dispatcher, page, commands) = recording_dispatcher(config.registry(), "wave");

    dispatcher.run("wave%20-amp%3D%220.5%22").await.unwrap();

    assert_eq!(page.last_title(), Some("Wave.rs @ ".to_string()));
    assert_eq!(
        *commands.lock().unwrap(),
        vec![r#"wave -amp="0.5""#.to_string()]
    );
}

#[tokio::test]
async fn test_whitespace_only_fragment_is_invalid() {
    let (mut dispatcher, page, commands) =
        recording_dispatcher(SketchRegistry::with_defaults(), "initial");

    let err = dispatcher.run("%20%20").await.unwrap_err();

    assert_eq!(err.category(), "Invalid Command");
    assert_eq!(page.titles(), Vec::<String>::new());
    assert!(commands.lock().unwrap().is_empty());
}
