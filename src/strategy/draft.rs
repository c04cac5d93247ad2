//! Save-time validation and record assembly

use super::{
    NewStrategy, StrategyConfiguration, StrategyPatch, StrategySettings, StrategyStatus,
    ValidationError,
};
use crate::graph::StrategyGraph;
use rust_decimal::Decimal;

const RISK_LEVELS: std::ops::RangeInclusive<u8> = 1..=10;

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

fn check_investment(amount: Decimal) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveInvestment(amount));
    }
    Ok(())
}

fn check_risk_level(level: u8) -> Result<(), ValidationError> {
    if !RISK_LEVELS.contains(&level) {
        return Err(ValidationError::RiskLevelOutOfRange(level));
    }
    Ok(())
}

/// Validate form settings on their own
pub fn validate_settings(settings: &StrategySettings) -> Result<(), ValidationError> {
    check_name(&settings.name)?;
    check_investment(settings.initial_investment)?;
    check_risk_level(settings.risk_level)
}

/// Validate every field present in a partial update
pub fn validate_patch(patch: &StrategyPatch) -> Result<(), ValidationError> {
    if let Some(name) = &patch.name {
        check_name(name)?;
    }
    if let Some(amount) = patch.initial_investment {
        check_investment(amount)?;
    }
    if let Some(level) = patch.risk_level {
        check_risk_level(level)?;
    }
    Ok(())
}

/// Validate a record arriving at storage without passing through an editor.
/// The configuration stays opaque.
pub fn validate_new_strategy(strategy: &NewStrategy) -> Result<(), ValidationError> {
    check_name(&strategy.name)?;
    check_investment(strategy.initial_investment)?;
    check_risk_level(strategy.risk_level)
}

/// Validate a design and package it as a storage insert.
///
/// Fails before anything is built, so a rejected save leaves no record.
pub fn build_strategy(
    graph: &StrategyGraph,
    settings: &StrategySettings,
    status: StrategyStatus,
) -> Result<NewStrategy, ValidationError> {
    validate_settings(settings)?;
    if graph.is_empty() {
        return Err(ValidationError::EmptyGraph);
    }

    let configuration = StrategyConfiguration::new(graph, settings)
        .to_value()
        .map_err(|e| ValidationError::Serialization(e.to_string()))?;

    Ok(NewStrategy {
        name: settings.name.trim().to_string(),
        kind: settings.kind,
        trading_pair: settings.trading_pair.clone(),
        initial_investment: settings.initial_investment,
        risk_level: settings.risk_level,
        status,
        configuration,
    })
}
