//! Gauge sink consumed by the exporter.

use teambynumbers_core::StatRecord;

/// Per-team values republished from the latest report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamGauge {
    MemberCount,
    CycleTime,
    LeadTime,
    BugsReported,
    BugsSquashed,
    DeployCount,
}

impl TeamGauge {
    pub const ALL: [TeamGauge; 6] = [
        TeamGauge::MemberCount,
        TeamGauge::CycleTime,
        TeamGauge::LeadTime,
        TeamGauge::BugsReported,
        TeamGauge::BugsSquashed,
        TeamGauge::DeployCount,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TeamGauge::MemberCount => "teambynumbers_member_count",
            TeamGauge::CycleTime => "teambynumbers_cycle_time",
            TeamGauge::LeadTime => "teambynumbers_lead_time",
            TeamGauge::BugsReported => "teambynumbers_bugs_reported",
            TeamGauge::BugsSquashed => "teambynumbers_bugs_squashed",
            TeamGauge::DeployCount => "teambynumbers_deploy_count",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            TeamGauge::MemberCount => "Team member count",
            TeamGauge::CycleTime => "Time in days for a task to be done",
            TeamGauge::LeadTime => "Time in days from request to delivery",
            TeamGauge::BugsReported => "Number of bugs reported",
            TeamGauge::BugsSquashed => "Number of bugs solved",
            TeamGauge::DeployCount => "Number of deploys within a week",
        }
    }

    pub fn read(self, r: &StatRecord) -> f64 {
        let v = match self {
            TeamGauge::MemberCount => r.member_count,
            TeamGauge::CycleTime => r.cycle_time,
            TeamGauge::LeadTime => r.lead_time,
            TeamGauge::BugsReported => r.bugs_reported,
            TeamGauge::BugsSquashed => r.bugs_squashed,
            TeamGauge::DeployCount => r.deploy_count,
        };
        v as f64
    }
}

/// Destination for exported team gauges. Updates cannot fail.
pub trait MetricsSink: Send + Sync {
    fn set_team_gauge(&self, gauge: TeamGauge, team: &str, value: f64);

    /// Called once after every export pass.
    fn pass_completed(&self, _teams: usize) {}
}
