use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::jurisdiction::jurisdictionmanager::JurisdictionLoader;
use crate::jurisdiction::ruleset::RuleSet;
use crate::manager::manager::{FrozenManager, IManager};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::validator::customholiday::CustomHoliday;
use crate::validator::holidayvalidator::HolidayValidator;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    include_saturday_as_weekend: bool,
    #[serde(default)]
    jurisdictions: Vec<serde_json::Value>,
    #[serde(default)]
    custom_holidays: Vec<CustomHoliday>
}

/// Loaded settings: the weekend policy, every known jurisdiction and the
/// custom holidays to register on each validator it builds.
pub struct Configuration {
    include_saturday_as_weekend: bool,
    jurisdiction_manager: FrozenManager<RuleSet>,
    custom_holidays: Vec<CustomHoliday>
}


impl Configuration {
    /// Built-in jurisdictions only, Sunday-only weekend, no custom holidays.
    pub fn new() -> Configuration {
        Configuration {
            include_saturday_as_weekend: false,
            jurisdiction_manager: JurisdictionLoader::builder_with_builtins().build(),
            custom_holidays: Vec::new()
        }
    }

    pub fn include_saturday_as_weekend(&self) -> bool {
        self.include_saturday_as_weekend
    }

    pub fn jurisdiction_manager(&self) -> &FrozenManager<RuleSet> {
        &self.jurisdiction_manager
    }

    pub fn custom_holidays(&self) -> &[CustomHoliday] {
        &self.custom_holidays
    }

    #[tracing::instrument(skip_all, fields(path = %file_path.as_ref().display()))]
    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        Configuration::from_json_value(json_value)
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = parse_json_value(json_value)?;
        let mut builder = JurisdictionLoader::builder_with_builtins();
        JurisdictionLoader.insert_obj_from_json_vec(&mut builder, &json_prop.jurisdictions, &())?;
        let jurisdiction_manager = builder.build();

        info!(
            jurisdictions = jurisdiction_manager.len(),
            custom_holidays = json_prop.custom_holidays.len(),
            include_saturday_as_weekend = json_prop.include_saturday_as_weekend,
            "configuration loaded"
        );

        Ok(Configuration {
            include_saturday_as_weekend: json_prop.include_saturday_as_weekend,
            jurisdiction_manager,
            custom_holidays: json_prop.custom_holidays
        })
    }

    /// Validator for the named jurisdiction with every configured custom
    /// holiday registered.
    pub fn validator(&self, name: &str) -> Result<HolidayValidator, ManagerError> {
        let rules = self.jurisdiction_manager.get(name)?;
        let mut validator = HolidayValidator::with_rules(rules, self.include_saturday_as_weekend);
        for holiday in self.custom_holidays.iter() {
            validator.add_custom_holiday(holiday.date, holiday.recurring, holiday.lunar_linked);
        }
        Ok(validator)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
