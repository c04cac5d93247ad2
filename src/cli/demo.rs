//! Demo command implementation

use crate::auth::{AuthService, NewUser, SessionStore, MAX_TTL_SECS};
use crate::catalog::{Category, ComponentCatalog, ParamValue};
use crate::config::Config;
use crate::editor::{EditorError, StrategyEditor};
use crate::graph::Position;
use crate::storage::{LearningStore, MemoryStore, StrategyService};
use crate::strategy::{StrategyPatch, StrategySettings, StrategyStatus};
use clap::Args;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Name of the strategy to design
    #[arg(long, default_value = "RSI Volume Breakout")]
    pub name: String,

    /// Activate the strategy after saving
    #[arg(long)]
    pub deploy: bool,
}

/// What a demo run produced
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSummary {
    pub username: String,
    pub strategies: usize,
    pub status: StrategyStatus,
    pub rejected_connection: bool,
    pub resource_progress: Option<u8>,
}

impl DemoArgs {
    /// Run the whole flow against a fresh in-memory backend
    pub async fn run(&self, config: &Config) -> anyhow::Result<DemoSummary> {
        let store = Arc::new(MemoryStore::seeded().await);
        let sessions = SessionStore::from_secs(config.session.ttl_secs);
        let pruner = sessions.spawn_pruner(Duration::from_secs(
            config.session.prune_interval_secs.clamp(1, MAX_TTL_SECS),
        ));
        let auth = AuthService::new(store.clone(), sessions);

        let session = if config.storage.seed_demo_user {
            auth.seed_demo_user().await?;
            auth.login("test", "password123").await?
        } else {
            let password = Uuid::new_v4().to_string();
            let user = auth
                .register(NewUser {
                    username: format!("demo-{}", Uuid::new_v4().simple()),
                    password: password.clone(),
                    wallet_address: None,
                    display_name: None,
                })
                .await?;
            auth.login(&user.username, &password).await?
        };
        tracing::info!(user = %session.username, "Demo session started");

        let mut editor = StrategyEditor::new(
            Arc::new(ComponentCatalog::builtin()),
            config.editor.connection_policy,
        );
        let rsi = editor.place(Category::Indicator, "RSI Indicator", Position::new(50.0, 50.0))?;
        let volume = editor.place(Category::Filter, "Volume Filter", Position::new(250.0, 50.0))?;
        let buy = editor.place(Category::BuySignal, "Buy Signal", Position::new(450.0, 50.0))?;
        let sell = editor.place(Category::SellSignal, "Sell Signal", Position::new(450.0, 200.0))?;

        editor.set_parameter(rsi.id, "oversold", ParamValue::Number(25.0))?;
        editor.connect(rsi.id, volume.id)?;
        editor.connect(volume.id, buy.id)?;
        editor.connect(rsi.id, sell.id)?;

        // terminal signals cannot feed anything
        let rejected_connection = match editor.connect(buy.id, rsi.id) {
            Ok(outcome) => {
                editor.disconnect(outcome.edge.id);
                outcome.warning.is_some()
            }
            Err(EditorError::Incompatible(_)) => true,
            Err(e) => return Err(e.into()),
        };

        let settings = StrategySettings {
            name: self.name.clone(),
            initial_investment: dec!(2500),
            risk_level: 4,
            ..Default::default()
        };
        let draft = editor.save(&settings)?;

        let strategies = StrategyService::new(store.clone());
        let record = strategies.create(&session, draft).await?;
        let record = if self.deploy {
            let patch = StrategyPatch {
                status: Some(StrategyStatus::Active),
                ..Default::default()
            };
            strategies.update(&session, record.id, patch).await?
        } else {
            record
        };
        let saved = strategies.list(&session).await?;

        let resource_progress = match store.list_resources().await?.into_iter().next() {
            Some(resource) => store
                .update_progress(resource.id, 60)
                .await?
                .map(|r| r.progress),
            None => None,
        };

        auth.logout(session.token).await;
        pruner.abort();

        Ok(DemoSummary {
            username: session.username,
            strategies: saved.len(),
            status: record.status,
            rejected_connection,
            resource_progress,
        })
    }

    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let summary = self.run(config).await?;
        println!("Demo complete");
        println!("  User: {}", summary.username);
        println!("  Strategies saved: {}", summary.strategies);
        println!("  Status: {:?}", summary.status);
        println!(
            "  Incompatible connection flagged: {}",
            summary.rejected_connection
        );
        if let Some(progress) = summary.resource_progress {
            println!("  Learning progress: {progress}%");
        }
        Ok(())
    }
}
