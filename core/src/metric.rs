// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// A key performance indicator with a goal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Metric {
    /// What is measured.
    pub label: String,

    /// Current value.
    pub current: u32,

    /// Goal for the campaign.
    pub target: u32,

    /// Unit of the values, e.g. "members".
    pub unit: String,
}

impl Metric {
    /// Progress towards the target in percent, capped at 100.
    ///
    /// A zero target is already reached.
    pub fn progress(&self) -> f64 {
        if self.target == 0 {
            return 100.0;
        }
        (f64::from(self.current) / f64::from(self.target) * 100.0).min(100.0)
    }
}

/// The share of one metric in the sum of all current values.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Share {
    /// Label of the metric.
    pub label: String,

    /// Current value of the metric.
    pub value: u32,

    /// Percentage of the total, 0 when the total is 0.
    pub percent: f64,
}

/// Split the sum of the metrics' current values into per-metric shares.
pub fn distribution(metrics: &[Metric]) -> Vec<Share> {
    let total: u64 = metrics.iter().map(|m| u64::from(m.current)).sum();
    metrics
        .iter()
        .map(|m| Share {
            label: m.label.clone(),
            value: m.current,
            percent: match total {
                0 => 0.0,
                total => f64::from(m.current) / total as f64 * 100.0,
            },
        })
        .collect()
}
