//! Quick build command implementation

use crate::catalog::ComponentCatalog;
use crate::strategy::{MovingAverageKind, QuickIndicator, QuickStrategy};
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;

/// Entry indicator selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IndicatorArg {
    Rsi,
    Macd,
    Sma,
    Ema,
}

#[derive(Args, Debug)]
pub struct QuickArgs {
    /// Strategy name
    #[arg(long)]
    pub name: String,

    /// Entry indicator
    #[arg(long, value_enum, default_value = "rsi")]
    pub indicator: IndicatorArg,

    /// Indicator period (RSI and moving averages)
    #[arg(long, default_value = "14")]
    pub period: u32,

    /// MACD fast period
    #[arg(long, default_value = "12")]
    pub fast: u32,

    /// MACD slow period
    #[arg(long, default_value = "26")]
    pub slow: u32,

    /// MACD signal period
    #[arg(long, default_value = "9")]
    pub signal: u32,

    #[arg(long, default_value = "btc-usdt")]
    pub pair: String,

    #[arg(long, default_value = "1h")]
    pub timeframe: String,

    /// Take profit percent
    #[arg(long, default_value = "5")]
    pub take_profit: Decimal,

    /// Stop loss percent
    #[arg(long, default_value = "3")]
    pub stop_loss: Decimal,

    /// Write the configuration here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl QuickArgs {
    fn quick_strategy(&self) -> QuickStrategy {
        let indicator = match self.indicator {
            IndicatorArg::Rsi => QuickIndicator::Rsi {
                period: self.period,
            },
            IndicatorArg::Macd => QuickIndicator::Macd {
                fast: self.fast,
                slow: self.slow,
                signal: self.signal,
            },
            IndicatorArg::Sma => QuickIndicator::MovingAverage {
                period: self.period,
                kind: MovingAverageKind::Sma,
            },
            IndicatorArg::Ema => QuickIndicator::MovingAverage {
                period: self.period,
                kind: MovingAverageKind::Ema,
            },
        };

        QuickStrategy {
            name: self.name.clone(),
            trading_pair: self.pair.clone(),
            timeframe: self.timeframe.clone(),
            indicator,
            take_profit: self.take_profit,
            stop_loss: self.stop_loss,
        }
    }

    /// Build the template and return its serialized configuration
    pub fn render(&self) -> anyhow::Result<String> {
        let (editor, settings) = self
            .quick_strategy()
            .build(Arc::new(ComponentCatalog::builtin()))?;
        let draft = editor.save(&settings)?;
        Ok(serde_json::to_string_pretty(&draft.configuration)?)
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        let rendered = self.render()?;
        match &self.output {
            Some(path) => {
                std::fs::write(path, rendered)?;
                tracing::info!(path = %path.display(), "Strategy configuration written");
            }
            None => println!("{rendered}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> QuickArgs {
        let cli = Cli::parse_from(args);
        match cli.command {
            Commands::Quick(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse(&["stratgraph", "quick", "--name", "Dip buyer"]);
        assert_eq!(args.indicator, IndicatorArg::Rsi);
        assert_eq!(args.period, 14);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_render_macd() {
        let args = parse(&[
            "stratgraph",
            "quick",
            "--name",
            "Crossover",
            "--indicator",
            "macd",
        ]);
        let value: serde_json::Value = serde_json::from_str(&args.render().unwrap()).unwrap();
        assert_eq!(value["components"].as_array().unwrap().len(), 3);
        assert_eq!(value["connections"].as_array().unwrap().len(), 2);
        assert_eq!(value["components"][0]["name"], "MACD Indicator");
    }

    #[test]
    fn test_render_rejects_blank_name() {
        let args = parse(&["stratgraph", "quick", "--name", " "]);
        assert!(args.render().is_err());
    }

    #[tokio::test]
    async fn test_execute_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quick.json");
        let mut args = parse(&["stratgraph", "quick", "--name", "Trend", "--indicator", "ema"]);
        args.output = Some(path.clone());

        args.execute().await.unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("Moving Average"));
    }
}
