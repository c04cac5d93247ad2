//! Built-in component definitions

use super::{Category, ComponentDefinition, ParamKind, ParameterSpec, SelectOption};

fn number(
    key: &str,
    label: &str,
    description: &str,
    (default, min, max, step): (f64, f64, f64, f64),
    required: bool,
) -> ParameterSpec {
    ParameterSpec {
        key: key.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        kind: ParamKind::Number {
            default,
            min,
            max,
            step,
        },
        required,
    }
}

fn component(
    category: Category,
    name: &str,
    icon: &str,
    description: &str,
    inputs: &[&str],
    outputs: &[&str],
    parameters: Vec<ParameterSpec>,
) -> ComponentDefinition {
    ComponentDefinition {
        category,
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        inputs: inputs.iter().map(|s| s.to_string()).collect(),
        outputs: outputs.iter().map(|s| s.to_string()).collect(),
        parameters,
    }
}

/// Definitions shipped with the builder, in palette order
pub fn builtin_definitions() -> Vec<ComponentDefinition> {
    vec![
        component(
            Category::Indicator,
            "RSI Indicator",
            "chart-line",
            "Relative Strength Index measures the speed and magnitude of price movements",
            &[],
            &["signal"],
            vec![
                number(
                    "period",
                    "Period",
                    "Number of periods to calculate RSI",
                    (14.0, 2.0, 50.0, 1.0),
                    true,
                ),
                number(
                    "overbought",
                    "Overbought Level",
                    "Level above which an asset is considered overbought",
                    (70.0, 50.0, 100.0, 1.0),
                    true,
                ),
                number(
                    "oversold",
                    "Oversold Level",
                    "Level below which an asset is considered oversold",
                    (30.0, 0.0, 50.0, 1.0),
                    true,
                ),
            ],
        ),
        component(
            Category::Indicator,
            "MACD Indicator",
            "chart-bar",
            "Moving Average Convergence Divergence tracks the relationship between two moving averages",
            &[],
            &["signal"],
            vec![
                number(
                    "fastPeriod",
                    "Fast Period",
                    "Number of periods for fast EMA",
                    (12.0, 2.0, 50.0, 1.0),
                    true,
                ),
                number(
                    "slowPeriod",
                    "Slow Period",
                    "Number of periods for slow EMA",
                    (26.0, 2.0, 100.0, 1.0),
                    true,
                ),
                number(
                    "signalPeriod",
                    "Signal Period",
                    "Number of periods for signal line",
                    (9.0, 2.0, 50.0, 1.0),
                    true,
                ),
            ],
        ),
        component(
            Category::Indicator,
            "Moving Average",
            "wave-square",
            "Simple or exponential moving average",
            &[],
            &["value"],
            vec![
                number(
                    "period",
                    "Period",
                    "Number of periods to calculate the moving average",
                    (20.0, 2.0, 200.0, 1.0),
                    true,
                ),
                ParameterSpec {
                    key: "type".to_string(),
                    label: "Type".to_string(),
                    description: "Type of moving average".to_string(),
                    kind: ParamKind::Select {
                        default: "sma".to_string(),
                        options: vec![
                            SelectOption {
                                label: "Simple (SMA)".to_string(),
                                value: "sma".to_string(),
                            },
                            SelectOption {
                                label: "Exponential (EMA)".to_string(),
                                value: "ema".to_string(),
                            },
                        ],
                    },
                    required: true,
                },
            ],
        ),
        component(
            Category::BuySignal,
            "Buy Signal",
            "shopping-cart",
            "Generates a buy signal when input conditions are met",
            &["condition"],
            &["action"],
            vec![
                number(
                    "amount",
                    "Purchase Amount",
                    "Amount to buy, as a percentage of available funds",
                    (100.0, 1.0, 100.0, 1.0),
                    true,
                ),
                number(
                    "takeProfit",
                    "Take Profit (%)",
                    "Percentage gain at which to take profit",
                    (5.0, 0.1, 100.0, 0.1),
                    false,
                ),
            ],
        ),
        component(
            Category::SellSignal,
            "Sell Signal",
            "sign-out",
            "Generates a sell signal when input conditions are met",
            &["condition"],
            &["action"],
            vec![
                number(
                    "amount",
                    "Sell Amount",
                    "Amount to sell, as a percentage of held assets",
                    (100.0, 1.0, 100.0, 1.0),
                    true,
                ),
                number(
                    "stopLoss",
                    "Stop Loss (%)",
                    "Percentage loss at which to cut losses",
                    (3.0, 0.1, 100.0, 0.1),
                    false,
                ),
            ],
        ),
        component(
            Category::Filter,
            "Volume Filter",
            "filter",
            "Filters signals based on trading volume thresholds",
            &["signal"],
            &["filtered"],
            vec![
                number(
                    "minVolume",
                    "Minimum Volume",
                    "Minimum volume required to pass the filter",
                    (100_000.0, 0.0, 10_000_000.0, 10_000.0),
                    true,
                ),
                number(
                    "volumeMultiplier",
                    "Volume Multiplier",
                    "Volume must be this multiple of the average",
                    (1.5, 1.0, 10.0, 0.1),
                    false,
                ),
            ],
        ),
        component(
            Category::Logic,
            "AND Logic",
            "robot",
            "Returns true only if all inputs are true",
            &["input1", "input2"],
            &["result"],
            vec![],
        ),
        component(
            Category::Logic,
            "OR Logic",
            "code-branch",
            "Returns true if any input is true",
            &["input1", "input2"],
            &["result"],
            vec![],
        ),
    ]
}
