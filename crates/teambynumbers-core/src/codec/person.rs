use super::{FieldReader, LineRecord};
use crate::person::PersonRecord;

impl LineRecord for PersonRecord {
    const KIND: &'static str = "person";

    fn decode(fields: &[&str], reader: &mut FieldReader) -> Option<Self> {
        let [version, name, team] = *fields else {
            return None;
        };
        Some(PersonRecord {
            version: reader.int("version", version),
            name: name.to_string(),
            team: team.to_string(),
        })
    }

    fn encode(&self) -> String {
        format!("{},{},{}", self.version, self.name, self.team)
    }
}
