use super::{FieldReader, LineRecord};
use crate::record::StatRecord;

impl LineRecord for StatRecord {
    const KIND: &'static str = "report";

    fn decode(fields: &[&str], reader: &mut FieldReader) -> Option<Self> {
        // 11 columns is the current layout; 10 is the older one without version.
        let (version, cols) = match *fields {
            [version, date, team, members, cycle, lead, reported, squashed, deploys, value, url] => (
                reader.int("version", version),
                [date, team, members, cycle, lead, reported, squashed, deploys, value, url],
            ),
            [date, team, members, cycle, lead, reported, squashed, deploys, value, url] => (
                0,
                [date, team, members, cycle, lead, reported, squashed, deploys, value, url],
            ),
            _ => return None,
        };
        let [date, team, members, cycle, lead, reported, squashed, deploys, value, url] = cols;

        Some(StatRecord {
            version,
            date: date.to_string(),
            team: team.to_string(),
            member_count: reader.int("member count", members),
            cycle_time: reader.int("cycle time", cycle),
            lead_time: reader.int("lead time", lead),
            bugs_reported: reader.int("bugs reported", reported),
            bugs_squashed: reader.int("bugs squashed", squashed),
            deploy_count: reader.int("deploy count", deploys),
            value_score: reader.float("value score", value),
            report_url: url.to_string(),
        })
    }

    fn encode(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{:.2},{}",
            self.version,
            self.date,
            self.team,
            self.member_count,
            self.cycle_time,
            self.lead_time,
            self.bugs_reported,
            self.bugs_squashed,
            self.deploy_count,
            self.value_score,
            self.report_url,
        )
    }
}
