//! Integration tests for strategy persistence and authorization

use rust_decimal_macros::dec;
use std::sync::Arc;
use stratgraph::auth::{AuthService, NewUser, Session, SessionStore};
use stratgraph::catalog::{Category, ComponentCatalog};
use stratgraph::editor::{ConnectionPolicy, StrategyEditor};
use stratgraph::graph::Position;
use stratgraph::storage::{AccessError, MemoryStore, StrategyService, StrategyStore};
use stratgraph::strategy::{StrategyPatch, StrategySettings, StrategyStatus, ValidationError};

async fn login(auth: &AuthService<MemoryStore>, username: &str) -> Session {
    auth.register(NewUser {
        username: username.to_string(),
        password: "hunter2".to_string(),
        wallet_address: None,
        display_name: None,
    })
    .await
    .unwrap();
    auth.login(username, "hunter2").await.unwrap()
}

fn setup() -> (Arc<MemoryStore>, AuthService<MemoryStore>, StrategyService<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let auth = AuthService::new(store.clone(), SessionStore::new(chrono::Duration::hours(1)));
    let strategies = StrategyService::new(store.clone());
    (store, auth, strategies)
}

fn settings(name: &str) -> StrategySettings {
    StrategySettings {
        name: name.to_string(),
        initial_investment: dec!(500),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_empty_graph_save_creates_nothing() {
    let (store, auth, strategies) = setup();
    let session = login(&auth, "alice").await;
    let editor = StrategyEditor::new(
        Arc::new(ComponentCatalog::builtin()),
        ConnectionPolicy::Advisory,
    );

    assert_eq!(
        editor.save(&settings("Nothing")).unwrap_err(),
        ValidationError::EmptyGraph
    );
    assert!(strategies.list(&session).await.unwrap().is_empty());
    assert!(store.get(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_load_round_trip_through_store() {
    let (_, auth, strategies) = setup();
    let session = login(&auth, "alice").await;

    let mut editor = StrategyEditor::new(
        Arc::new(ComponentCatalog::builtin()),
        ConnectionPolicy::Enforced,
    );
    let macd = editor
        .place(Category::Indicator, "MACD Indicator", Position::new(20.0, 40.0))
        .unwrap();
    let sell = editor
        .place(Category::SellSignal, "Sell Signal", Position::new(220.0, 40.0))
        .unwrap();
    editor.connect(macd.id, sell.id).unwrap();

    let record = strategies
        .create(&session, editor.save(&settings("MACD exit")).unwrap())
        .await
        .unwrap();
    assert_eq!(record.status, StrategyStatus::Draft);

    let mut reopened = StrategyEditor::new(
        Arc::new(ComponentCatalog::builtin()),
        ConnectionPolicy::Enforced,
    );
    let loaded = reopened.load(record.configuration.clone()).unwrap();
    assert_eq!(loaded.name, "MACD exit");
    assert_eq!(reopened.graph(), editor.graph());
}

#[tokio::test]
async fn test_other_users_cannot_touch_records() {
    let (_, auth, strategies) = setup();
    let alice = login(&auth, "alice").await;
    let bob = login(&auth, "bob").await;

    let mut editor = StrategyEditor::new(
        Arc::new(ComponentCatalog::builtin()),
        ConnectionPolicy::Advisory,
    );
    editor
        .place(Category::Indicator, "RSI Indicator", Position::new(0.0, 0.0))
        .unwrap();
    let record = strategies
        .create(&alice, editor.deploy(&settings("Alice only")).unwrap())
        .await
        .unwrap();

    assert!(matches!(
        strategies.get(&bob, record.id).await,
        Err(AccessError::Forbidden(_))
    ));
    assert!(matches!(
        strategies.delete(&bob, record.id).await,
        Err(AccessError::Forbidden(_))
    ));
    assert!(strategies.list(&bob).await.unwrap().is_empty());

    let patch = StrategyPatch {
        status: Some(StrategyStatus::Paused),
        ..Default::default()
    };
    let updated = strategies.update(&alice, record.id, patch).await.unwrap();
    assert_eq!(updated.status, StrategyStatus::Paused);

    strategies.delete(&alice, record.id).await.unwrap();
    assert!(matches!(
        strategies.get(&alice, record.id).await,
        Err(AccessError::NotFound(_))
    ));
}
