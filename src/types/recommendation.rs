//! Prioritized maintenance recommendations

use serde::{Deserialize, Serialize};

/// Urgency of a recommendation. Ordering follows urgency, most urgent
/// first, so a stable sort by priority yields the rendering order
/// (immediate → high → medium → low).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Immediate,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Immediate => "immediate",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        write!(f, "{s}")
    }
}

/// Which machine subsystem (or process) an action card targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    Safety,
    CoolingSystem,
    MechanicalSystem,
    ControlSystem,
    Monitoring,
    TrendAnalysis,
    PreventiveMaintenance,
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Safety => "Safety",
            Self::CoolingSystem => "Cooling System",
            Self::MechanicalSystem => "Mechanical System",
            Self::ControlSystem => "Control System",
            Self::Monitoring => "Monitoring",
            Self::TrendAnalysis => "Trend Analysis",
            Self::PreventiveMaintenance => "Preventive Maintenance",
        };
        write!(f, "{s}")
    }
}

/// A hand-authored action card expanded from one risk factor.
///
/// Steps are stored unnumbered; the response composer numbers them at
/// render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub action: String,
    pub reason: String,
    pub category: ActionCategory,
    pub steps: Vec<String>,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_orders_by_urgency() {
        assert!(Priority::Immediate < Priority::High);
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);

        let mut priorities = vec![Priority::Low, Priority::Immediate, Priority::Medium];
        priorities.sort();
        assert_eq!(
            priorities,
            vec![Priority::Immediate, Priority::Medium, Priority::Low]
        );
    }
}
