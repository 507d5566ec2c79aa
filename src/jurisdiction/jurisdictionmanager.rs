use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::manager::manager::{IManager, ManagerBuilder};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::manager::namedobject::NamedJsonObject;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::lunarholiday::LunarAnchor;

use super::jurisdiction::Jurisdiction;
use super::ruleset::RuleSet;

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32,
    #[serde(default)]
    name: String
}

#[derive(Deserialize)]
struct JurisdictionJsonProp {
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    fixed_holidays: Vec<FixedDateHolidayJsonProp>,
    #[serde(default)]
    lunar_anchors: Vec<LunarAnchor>
}

fn fixed_holidays_from_json(json_props: Vec<FixedDateHolidayJsonProp>) -> Result<Vec<FixedDateHoliday>, ManagerError> {
    let mut fixed_holidays = Vec::with_capacity(json_props.len());
    for prop in json_props {
        fixed_holidays.push(FixedDateHoliday::new(prop.month, prop.day, prop.name)?);
    }
    Ok(fixed_holidays)
}

/// Loads jurisdiction definitions of the form
///
/// ```json
/// { "name": "Cyprus", "base": "TRNC",
///   "fixed_holidays": [ { "month": 4, "day": 1, "name": "..." } ],
///   "lunar_anchors": [ { "name": "...", "date": "2024-09-15", "span_days": 1 } ] }
/// ```
///
/// A definition with a `base` is the union of the base rule set and its own
/// entries, so the base must be registered first. Arrays are loaded in
/// rounds: anything whose base is still missing is retried in the next
/// round, until all succeed or a round makes no progress.
pub struct JurisdictionLoader;

impl JurisdictionLoader {
    /// A builder with every built-in [`Jurisdiction`] registered by name.
    pub fn builder_with_builtins() -> ManagerBuilder<RuleSet> {
        let mut builder = ManagerBuilder::new();
        for jurisdiction in Jurisdiction::ALL {
            builder.insert(jurisdiction.name().to_owned(), jurisdiction.rule_set());
        }
        builder
    }
}

impl IManager<RuleSet, ()> for JurisdictionLoader {
    fn insert_obj_from_json(
        &self,
        builder: &mut ManagerBuilder<RuleSet>,
        json_value: serde_json::Value,
        _supports: &(),
    ) -> Result<(), ManagerError> {
        let named_obj: NamedJsonObject = parse_json_value(json_value.clone())?;
        let name = named_obj.name().to_owned();
        let json_prop: JurisdictionJsonProp = parse_json_value(json_value)?;
        let fixed_holidays = fixed_holidays_from_json(json_prop.fixed_holidays)?;

        let rule_set = match json_prop.base.as_deref() {
            Some(base_name) => {
                let base = builder.get(base_name)?;
                base.extend(name.clone(), fixed_holidays, json_prop.lunar_anchors)
            },
            None => RuleSet::new(name.clone(), fixed_holidays, json_prop.lunar_anchors)
        };

        debug!(
            jurisdiction = %name,
            base = json_prop.base.as_deref().unwrap_or("-"),
            fixed = rule_set.fixed_holidays().len(),
            lunar = rule_set.lunar_anchors().len(),
            "jurisdiction registered"
        );
        builder.insert(name, Arc::new(rule_set));
        Ok(())
    }

    /// Retries definitions whose base is not yet loaded. Stops when every
    /// definition is in, or when a round leaves the same set pending, in
    /// which case the last error (a missing base, a cycle, or a malformed
    /// definition) is returned.
    fn insert_obj_from_json_vec(
        &self,
        builder: &mut ManagerBuilder<RuleSet>,
        json_vec: &[serde_json::Value],
        supports: &(),
    ) -> Result<(), ManagerError> {
        let mut remain_indices: Vec<usize> = (0..json_vec.len()).collect();
        let mut result: Result<(), ManagerError> = Ok(());

        loop {
            let mut new_remain_indices: Vec<usize> = Vec::new();

            for &index in remain_indices.iter() {
                if let Err(err) = self.insert_obj_from_json(builder, json_vec[index].clone(), supports) {
                    result = Err(err);
                    new_remain_indices.push(index);
                }
            }

            if new_remain_indices.is_empty() {
                return Ok(());
            }
            if remain_indices == new_remain_indices {
                return result;
            }

            debug!(pending = new_remain_indices.len(), "retrying jurisdictions with unresolved base");
            remain_indices = new_remain_indices;
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::time::calendardate::{CalendarDate, InvalidDateError};

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::try_new(y, m, d).unwrap()
    }

    #[test]
    fn builtins_are_preregistered() {
        let builder = JurisdictionLoader::builder_with_builtins();
        assert!(builder.contains("Turkey"));
        assert!(builder.contains("TRNC"));
    }

    #[test]
    fn definitions_load_out_of_order() {
        let mut builder = JurisdictionLoader::builder_with_builtins();
        let defs = vec![
            json!({ "name": "Child", "base": "Parent",
                    "fixed_holidays": [ { "month": 3, "day": 8 } ] }),
            json!({ "name": "Parent", "base": "TRNC",
                    "lunar_anchors": [ { "name": "x", "date": "2024-02-06", "span_days": 2 } ] }),
        ];
        JurisdictionLoader.insert_obj_from_json_vec(&mut builder, &defs, &()).unwrap();

        let child = builder.get("Child").unwrap();
        assert_eq!(child.fixed_holidays().len(), 7 + 2 + 1);
        assert_eq!(child.lunar_anchors().len(), 2 + 1 + 1);
        assert!(child.is_fixed_holiday(&ymd(2024, 11, 15)));
        assert!(child.is_lunar_holiday(&ymd(2024, 2, 7)));
    }

    #[test]
    fn missing_base_is_reported() {
        let mut builder = JurisdictionLoader::builder_with_builtins();
        let defs = vec![json!({ "name": "Orphan", "base": "Nowhere" })];
        let result = JurisdictionLoader.insert_obj_from_json_vec(&mut builder, &defs, &());
        assert!(matches!(result, Err(ManagerError::NameNotFoundError(name)) if name == "Nowhere"));
        assert!(!builder.contains("Orphan"));
    }

    #[test]
    fn invalid_month_day_is_rejected() {
        let mut builder = JurisdictionLoader::builder_with_builtins();
        let def = json!({ "name": "Bad", "fixed_holidays": [ { "month": 2, "day": 30 } ] });
        let result = JurisdictionLoader.insert_obj_from_json(&mut builder, def, &());
        assert!(matches!(
            result,
            Err(ManagerError::InvalidDate(InvalidDateError::InvalidMonthDay { month: 2, day: 30 }))
        ));
        assert!(!builder.contains("Bad"));

        let def = json!({ "name": "Worse", "fixed_holidays": [ { "month": 13, "day": 1 } ] });
        let result = JurisdictionLoader.insert_obj_from_json(&mut builder, def, &());
        assert_eq!(result.unwrap_err().to_string(), "invalid month: 13 (must be 1..=12)");
    }
}
