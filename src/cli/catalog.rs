//! Catalog command implementation

use crate::catalog::{Category, ComponentCatalog, ComponentDefinition};
use clap::Args;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Only show one category (indicator, buy-signal, sell-signal, filter, logic)
    #[arg(long)]
    pub category: Option<Category>,

    /// Print definitions as JSON
    #[arg(long)]
    pub json: bool,
}

impl CatalogArgs {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let catalog = ComponentCatalog::builtin();
        let definitions: Vec<&ComponentDefinition> = match self.category {
            Some(category) => catalog.list_by_category(category),
            None => catalog.all().iter().collect(),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&definitions)?);
            return Ok(());
        }

        for definition in definitions {
            println!(
                "{} {} [{}]",
                definition.icon, definition.name, definition.category
            );
            println!("    {}", definition.description);
            for param in &definition.parameters {
                println!(
                    "    - {} = {} ({})",
                    param.key,
                    param.kind.default_value(),
                    param.label
                );
            }
        }
        Ok(())
    }
}
