//! Quick builder: a guided template that lays out a complete strategy

use super::{StrategySettings, ValidationError};
use crate::catalog::{Category, ComponentCatalog, ParamValue};
use crate::editor::{ConnectionPolicy, EditorError, StrategyEditor};
use crate::graph::Position;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Moving average flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovingAverageKind {
    #[default]
    Sma,
    Ema,
}

impl MovingAverageKind {
    fn as_str(&self) -> &'static str {
        match self {
            MovingAverageKind::Sma => "sma",
            MovingAverageKind::Ema => "ema",
        }
    }
}

/// Entry indicator choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "indicator", rename_all = "kebab-case")]
pub enum QuickIndicator {
    Rsi {
        period: u32,
    },
    Macd {
        fast: u32,
        slow: u32,
        signal: u32,
    },
    MovingAverage {
        period: u32,
        kind: MovingAverageKind,
    },
}

impl QuickIndicator {
    fn component_name(&self) -> &'static str {
        match self {
            QuickIndicator::Rsi { .. } => "RSI Indicator",
            QuickIndicator::Macd { .. } => "MACD Indicator",
            QuickIndicator::MovingAverage { .. } => "Moving Average",
        }
    }

    fn parameters(&self) -> Vec<(&'static str, ParamValue)> {
        match self {
            QuickIndicator::Rsi { period } => vec![("period", number(*period))],
            QuickIndicator::Macd { fast, slow, signal } => vec![
                ("fastPeriod", number(*fast)),
                ("slowPeriod", number(*slow)),
                ("signalPeriod", number(*signal)),
            ],
            QuickIndicator::MovingAverage { period, kind } => vec![
                ("period", number(*period)),
                ("type", ParamValue::Text(kind.as_str().to_string())),
            ],
        }
    }
}

fn number(n: u32) -> ParamValue {
    ParamValue::Number(f64::from(n))
}

fn percent(value: Decimal) -> ParamValue {
    ParamValue::Number(value.to_f64().unwrap_or(f64::NAN))
}

/// Quick builder failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuickBuildError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// Answers collected by the quick builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStrategy {
    pub name: String,
    pub trading_pair: String,
    pub timeframe: String,
    #[serde(flatten)]
    pub indicator: QuickIndicator,
    pub take_profit: Decimal,
    pub stop_loss: Decimal,
}

impl QuickStrategy {
    /// Lay out indicator → buy signal and indicator → sell signal.
    ///
    /// Returns the populated editor and the matching form settings.
    pub fn build(
        &self,
        catalog: Arc<ComponentCatalog>,
    ) -> Result<(StrategyEditor, StrategySettings), QuickBuildError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let mut editor = StrategyEditor::new(catalog, ConnectionPolicy::Enforced);

        let indicator = editor.place(
            Category::Indicator,
            self.indicator.component_name(),
            Position::new(50.0, 50.0),
        )?;
        for (key, value) in self.indicator.parameters() {
            editor.set_parameter(indicator.id, key, value)?;
        }

        let buy = editor.place(Category::BuySignal, "Buy Signal", Position::new(300.0, 50.0))?;
        editor.set_parameter(buy.id, "takeProfit", percent(self.take_profit))?;

        let sell = editor.place(
            Category::SellSignal,
            "Sell Signal",
            Position::new(300.0, 200.0),
        )?;
        editor.set_parameter(sell.id, "stopLoss", percent(self.stop_loss))?;

        editor.connect(indicator.id, buy.id)?;
        editor.connect(indicator.id, sell.id)?;

        let settings = StrategySettings {
            name: self.name.clone(),
            trading_pair: self.trading_pair.clone(),
            timeframe: self.timeframe.clone(),
            take_profit: self.take_profit,
            stop_loss: self.stop_loss,
            ..Default::default()
        };

        tracing::info!(name = %self.name, indicator = self.indicator.component_name(), "Quick strategy built");
        Ok((editor, settings))
    }
}
