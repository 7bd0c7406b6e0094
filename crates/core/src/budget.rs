//! Budget health analysis for a project and its activities.
//!
//! Everything here is pure arithmetic over `rust_decimal::Decimal` so the
//! dashboard figures round-trip exactly through the NUMERIC columns and
//! never accumulate floating-point drift.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::status::ActivityStatus;

// ---------------------------------------------------------------------------
// Risk thresholds
// ---------------------------------------------------------------------------

/// Utilization percentage above which spend is considered running hot.
pub const RISK_UTILIZATION_PCT: i64 = 80;
/// Completion percentage below which hot spend is flagged as a risk.
pub const RISK_COMPLETION_PCT: i64 = 80;

// ---------------------------------------------------------------------------
// Precision
// ---------------------------------------------------------------------------

/// Decimal places for USD amounts and percentages in the snapshot.
pub const USD_DP: u32 = 2;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Per-activity figures fed into [`analyze`]. Order is irrelevant.
#[derive(Debug, Clone)]
pub struct ActivityFigures {
    pub planned_budget_usd: Decimal,
    /// Actual cost in CRC, if any has been recorded.
    pub actual_cost_crc: Option<Decimal>,
    pub status: ActivityStatus,
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Computed budget-health snapshot for one project.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetAnalysis {
    pub total_budget_usd: Decimal,
    pub total_planned_budget_usd: Decimal,
    pub total_actual_cost_usd: Decimal,
    /// May be negative once spend exceeds the budget.
    pub remaining_budget_usd: Decimal,
    pub budget_utilization_percentage: Decimal,
    pub completed_activities_count: u32,
    pub total_activities_count: u32,
    pub project_completion_percentage: Decimal,
    pub projected_total_cost_usd: Decimal,
    pub projected_over_budget_usd: Decimal,
    pub is_over_budget_risk: bool,
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Compute the budget-health snapshot for a project.
///
/// `current_exchange_rate` is CRC per 1 USD and is applied uniformly to
/// every recorded cost, regardless of the rate in effect when the cost was
/// incurred. Each CRC→USD conversion is rounded to cents before summation
/// so the total matches the sum of the per-activity figures a client would
/// display. Divisions guard their denominators to 0 rather than erroring,
/// matching the zero-budget rule.
///
/// Projected cost extrapolates linearly from completion percentage: it
/// assumes cost accrues proportionally to the *count* of completed
/// activities, not their cost weight. When nothing is completed or nothing
/// has been spent, the planned total serves as the projection.
pub fn analyze(
    total_budget_usd: Decimal,
    current_exchange_rate: Decimal,
    activities: &[ActivityFigures],
) -> BudgetAnalysis {
    let total_planned_budget_usd: Decimal =
        activities.iter().map(|a| a.planned_budget_usd).sum();

    let total_actual_cost_usd: Decimal = if current_exchange_rate > Decimal::ZERO {
        activities
            .iter()
            .filter_map(|a| a.actual_cost_crc)
            .map(|crc| (crc / current_exchange_rate).round_dp(USD_DP))
            .sum()
    } else {
        Decimal::ZERO
    };

    let remaining_budget_usd = total_budget_usd - total_actual_cost_usd;

    let budget_utilization_percentage = if total_budget_usd > Decimal::ZERO {
        (total_actual_cost_usd / total_budget_usd * Decimal::ONE_HUNDRED).round_dp(USD_DP)
    } else {
        Decimal::ZERO
    };

    let completed_activities_count = activities
        .iter()
        .filter(|a| a.status == ActivityStatus::Completed)
        .count() as u32;
    let total_activities_count = activities.len() as u32;

    let project_completion_percentage = if total_activities_count > 0 {
        (Decimal::from(completed_activities_count) / Decimal::from(total_activities_count)
            * Decimal::ONE_HUNDRED)
            .round_dp(USD_DP)
    } else {
        Decimal::ZERO
    };

    let projected_total_cost_usd = if project_completion_percentage > Decimal::ZERO
        && total_actual_cost_usd > Decimal::ZERO
    {
        (total_actual_cost_usd / project_completion_percentage * Decimal::ONE_HUNDRED)
            .round_dp(USD_DP)
    } else if total_planned_budget_usd > Decimal::ZERO {
        total_planned_budget_usd
    } else {
        Decimal::ZERO
    };

    let projected_over_budget_usd =
        (projected_total_cost_usd - total_budget_usd).max(Decimal::ZERO);

    let is_over_budget_risk = projected_over_budget_usd > Decimal::ZERO
        || (budget_utilization_percentage > Decimal::from(RISK_UTILIZATION_PCT)
            && project_completion_percentage < Decimal::from(RISK_COMPLETION_PCT));

    BudgetAnalysis {
        total_budget_usd,
        total_planned_budget_usd,
        total_actual_cost_usd,
        remaining_budget_usd,
        budget_utilization_percentage,
        completed_activities_count,
        total_activities_count,
        project_completion_percentage,
        projected_total_cost_usd,
        projected_over_budget_usd,
        is_over_budget_risk,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn activity(
        planned: Decimal,
        actual_crc: Option<Decimal>,
        status: ActivityStatus,
    ) -> ActivityFigures {
        ActivityFigures {
            planned_budget_usd: planned,
            actual_cost_crc: actual_crc,
            status,
        }
    }

    // -- Scenario A: no activities --

    #[test]
    fn empty_project_has_zero_percentages_and_no_risk() {
        let analysis = analyze(dec!(100000), dec!(600), &[]);

        assert_eq!(analysis.total_budget_usd, dec!(100000));
        assert_eq!(analysis.total_planned_budget_usd, Decimal::ZERO);
        assert_eq!(analysis.total_actual_cost_usd, Decimal::ZERO);
        assert_eq!(analysis.remaining_budget_usd, dec!(100000));
        assert_eq!(analysis.budget_utilization_percentage, Decimal::ZERO);
        assert_eq!(analysis.completed_activities_count, 0);
        assert_eq!(analysis.total_activities_count, 0);
        assert_eq!(analysis.project_completion_percentage, Decimal::ZERO);
        assert_eq!(analysis.projected_total_cost_usd, Decimal::ZERO);
        assert_eq!(analysis.projected_over_budget_usd, Decimal::ZERO);
        assert!(!analysis.is_over_budget_risk);
    }

    // -- Scenario B: planned activities only, projection falls back --

    #[test]
    fn planned_only_projects_planned_total() {
        let activities = vec![
            activity(dec!(10000), None, ActivityStatus::Planned),
            activity(dec!(15000), None, ActivityStatus::Planned),
        ];
        let analysis = analyze(dec!(50000), dec!(600), &activities);

        assert_eq!(analysis.total_planned_budget_usd, dec!(25000));
        assert_eq!(analysis.total_actual_cost_usd, Decimal::ZERO);
        assert_eq!(analysis.project_completion_percentage, Decimal::ZERO);
        // No spend and no completion: fall back to the planned total.
        assert_eq!(analysis.projected_total_cost_usd, dec!(25000));
        assert_eq!(analysis.projected_over_budget_usd, Decimal::ZERO);
        assert!(!analysis.is_over_budget_risk);
    }

    // -- Scenario C: mixed statuses, linear extrapolation flags risk --

    #[test]
    fn mixed_progress_extrapolates_and_flags_risk() {
        let activities = vec![
            activity(
                dec!(20000),
                Some(dec!(12000000)),
                ActivityStatus::Completed,
            ),
            activity(dec!(15000), Some(dec!(7000000)), ActivityStatus::Completed),
            activity(dec!(25000), Some(dec!(5000000)), ActivityStatus::InProgress),
            activity(dec!(20000), None, ActivityStatus::Planned),
        ];
        let analysis = analyze(dec!(80000), dec!(500), &activities);

        assert_eq!(analysis.total_actual_cost_usd, dec!(48000));
        assert_eq!(analysis.remaining_budget_usd, dec!(32000));
        assert_eq!(analysis.budget_utilization_percentage, dec!(60));
        assert_eq!(analysis.completed_activities_count, 2);
        assert_eq!(analysis.total_activities_count, 4);
        assert_eq!(analysis.project_completion_percentage, dec!(50));
        // 48,000 spent at 50% complete extrapolates to 96,000 total.
        assert_eq!(analysis.projected_total_cost_usd, dec!(96000));
        assert_eq!(analysis.projected_over_budget_usd, dec!(16000));
        assert!(analysis.is_over_budget_risk);
    }

    // -- Planned total is status-independent --

    #[test]
    fn planned_total_counts_every_status() {
        let activities = vec![
            activity(dec!(1000), None, ActivityStatus::Planned),
            activity(dec!(2000), None, ActivityStatus::InProgress),
            activity(dec!(3000), None, ActivityStatus::Completed),
            activity(dec!(4000), None, ActivityStatus::Cancelled),
        ];
        let analysis = analyze(dec!(100000), dec!(600), &activities);
        assert_eq!(analysis.total_planned_budget_usd, dec!(10000));
    }

    // -- Cancelled activities: sunk costs count, completion does not --

    #[test]
    fn cancelled_activity_contributes_sunk_cost_but_not_completion() {
        let activities = vec![
            activity(dec!(10000), Some(dec!(600000)), ActivityStatus::Cancelled),
            activity(dec!(10000), None, ActivityStatus::Completed),
        ];
        let analysis = analyze(dec!(50000), dec!(600), &activities);

        // 600,000 CRC / 600 = 1,000 USD of sunk cost.
        assert_eq!(analysis.total_actual_cost_usd, dec!(1000));
        assert_eq!(analysis.completed_activities_count, 1);
        assert_eq!(analysis.project_completion_percentage, dec!(50));
    }

    // -- Zero-budget guard --

    #[test]
    fn zero_budget_yields_zero_utilization() {
        let activities = vec![activity(
            dec!(1000),
            Some(dec!(600000)),
            ActivityStatus::InProgress,
        )];
        let analysis = analyze(Decimal::ZERO, dec!(600), &activities);
        assert_eq!(analysis.budget_utilization_percentage, Decimal::ZERO);
    }

    // -- Overrun is clamped at zero --

    #[test]
    fn projected_over_budget_never_negative() {
        let activities = vec![activity(dec!(10000), None, ActivityStatus::Planned)];
        let analysis = analyze(dec!(50000), dec!(600), &activities);
        // Projection (10,000) is well under budget (50,000).
        assert_eq!(analysis.projected_over_budget_usd, Decimal::ZERO);
    }

    // -- Risk whenever projection exceeds budget --

    #[test]
    fn risk_set_when_projection_exceeds_budget() {
        let activities = vec![
            activity(dec!(5000), Some(dec!(30000000)), ActivityStatus::Completed),
            activity(dec!(5000), None, ActivityStatus::Planned),
        ];
        // 30,000,000 / 600 = 50,000 spent at 50% complete -> projects 100,000.
        let analysis = analyze(dec!(60000), dec!(600), &activities);
        assert!(analysis.projected_total_cost_usd > analysis.total_budget_usd);
        assert!(analysis.is_over_budget_risk);
    }

    // -- Risk from the utilization/completion imbalance alone --

    #[test]
    fn risk_set_when_spend_outpaces_completion() {
        // 85% of the budget spent with nothing completed yet. The planned
        // total keeps the projection under budget, so only the
        // utilization/completion imbalance flags the risk.
        let activities = vec![activity(
            dec!(900),
            Some(dec!(510000)),
            ActivityStatus::InProgress,
        )];
        let analysis = analyze(dec!(1000), dec!(600), &activities);

        assert_eq!(analysis.budget_utilization_percentage, dec!(85));
        assert_eq!(analysis.project_completion_percentage, Decimal::ZERO);
        assert_eq!(analysis.projected_total_cost_usd, dec!(900));
        assert_eq!(analysis.projected_over_budget_usd, Decimal::ZERO);
        assert!(analysis.is_over_budget_risk);
    }

    #[test]
    fn no_risk_when_projection_fits_and_completion_at_threshold() {
        // 4 of 5 activities completed: 80% complete (not *under* the
        // threshold), utilization 77.27%, projection 10,625 within the
        // 11,000 budget. Neither risk branch fires.
        let activities = vec![
            activity(dec!(2000), Some(dec!(1275000)), ActivityStatus::Completed),
            activity(dec!(2000), Some(dec!(1275000)), ActivityStatus::Completed),
            activity(dec!(2000), Some(dec!(1275000)), ActivityStatus::Completed),
            activity(dec!(2000), Some(dec!(1275000)), ActivityStatus::Completed),
            activity(dec!(2000), None, ActivityStatus::Planned),
        ];
        let analysis = analyze(dec!(11000), dec!(600), &activities);

        assert_eq!(analysis.total_actual_cost_usd, dec!(8500));
        assert_eq!(analysis.budget_utilization_percentage, dec!(77.27));
        assert_eq!(analysis.project_completion_percentage, dec!(80));
        assert_eq!(analysis.projected_total_cost_usd, dec!(10625));
        assert!(!analysis.is_over_budget_risk);
    }

    // -- Completion at 100% projects the actual spend --

    #[test]
    fn fully_complete_projects_actual_spend() {
        let activities = vec![
            activity(dec!(10000), Some(dec!(4800000)), ActivityStatus::Completed),
            activity(dec!(10000), Some(dec!(4800000)), ActivityStatus::Completed),
        ];
        let analysis = analyze(dec!(50000), dec!(600), &activities);

        assert_eq!(analysis.project_completion_percentage, dec!(100));
        // 16,000 spent at 100% completion projects exactly 16,000.
        assert_eq!(analysis.projected_total_cost_usd, dec!(16000));
        assert!(!analysis.is_over_budget_risk);
    }

    // -- Conversions round to cents --

    #[test]
    fn crc_conversion_rounds_to_cents() {
        let activities = vec![activity(
            dec!(1000),
            Some(dec!(1000)),
            ActivityStatus::InProgress,
        )];
        // 1,000 / 600 = 1.666... -> 1.67 USD.
        let analysis = analyze(dec!(50000), dec!(600), &activities);
        assert_eq!(analysis.total_actual_cost_usd, dec!(1.67));
    }

    // -- Spend with zero completed activities falls back to planned --

    #[test]
    fn spend_without_completion_projects_planned_total() {
        let activities = vec![
            activity(dec!(10000), Some(dec!(3000000)), ActivityStatus::InProgress),
            activity(dec!(5000), None, ActivityStatus::Planned),
        ];
        let analysis = analyze(dec!(50000), dec!(600), &activities);

        assert!(analysis.total_actual_cost_usd > Decimal::ZERO);
        assert_eq!(analysis.project_completion_percentage, Decimal::ZERO);
        assert_eq!(analysis.projected_total_cost_usd, dec!(15000));
    }
}
