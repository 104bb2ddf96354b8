//! Demographic survey: field catalogue, answer record, age-group mapping.
//!
//! Answers are voluntary and stored locally only (see [`crate::store`]);
//! nothing here leaves the machine.

use serde::{Deserialize, Serialize};

/// One survey question with its enumerated options (wire value + label).
pub struct SurveyField {
    pub key: &'static str,
    pub label: &'static str,
    pub options: &'static [(&'static str, &'static str)],
}

/// Answers keyed like the original portal stored them. Empty string means
/// unanswered; `age_group` is derived from `birthyear`, never asked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicData {
    pub birthyear: String,
    pub age_group: String,
    pub gender: String,
    pub marital_status: String,
    pub education: String,
    pub current_activity: String,
    pub household_size: String,
    pub income: String,
    pub political_affiliation: String,
}

impl DemographicData {
    /// True when every answer is still empty.
    pub fn is_empty(&self) -> bool {
        self.values().iter().all(|v| v.is_empty())
    }

    /// True when every question has an answer.
    pub fn is_complete(&self) -> bool {
        self.values().iter().all(|v| !v.is_empty())
    }

    fn values(&self) -> [&String; 9] {
        [
            &self.birthyear,
            &self.age_group,
            &self.gender,
            &self.marital_status,
            &self.education,
            &self.current_activity,
            &self.household_size,
            &self.income,
            &self.political_affiliation,
        ]
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        match key {
            "birthyear" => Some(&self.birthyear),
            "age_group" => Some(&self.age_group),
            "gender" => Some(&self.gender),
            "marital_status" => Some(&self.marital_status),
            "education" => Some(&self.education),
            "current_activity" => Some(&self.current_activity),
            "household_size" => Some(&self.household_size),
            "income" => Some(&self.income),
            "political_affiliation" => Some(&self.political_affiliation),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match key {
            "birthyear" => self.birthyear = value,
            "age_group" => self.age_group = value,
            "gender" => self.gender = value,
            "marital_status" => self.marital_status = value,
            "education" => self.education = value,
            "current_activity" => self.current_activity = value,
            "household_size" => self.household_size = value,
            "income" => self.income = value,
            "political_affiliation" => self.political_affiliation = value,
            _ => {}
        }
    }

    /// Merges non-empty answers from `other` into `self`, then rederives
    /// the age group when a birthyear is known.
    pub fn merge(&mut self, other: &DemographicData, current_year: i32) {
        for field in [
            "birthyear",
            "gender",
            "marital_status",
            "education",
            "current_activity",
            "household_size",
            "income",
            "political_affiliation",
        ] {
            if let Some(value) = other.get(field)
                && !value.is_empty()
            {
                self.set(field, value.clone());
            }
        }
        if let Ok(year) = self.birthyear.parse::<i32>() {
            self.age_group = age_group_for_year(year, current_year).to_string();
        }
    }
}

/// Maps a birth year to the portal's age-group buckets.
pub fn age_group_for_year(birthyear: i32, current_year: i32) -> &'static str {
    let age = current_year - birthyear;
    if age < 18 {
        "17_and_under"
    } else if age < 25 {
        "18_to_24"
    } else if age < 35 {
        "25_to_34"
    } else if age < 45 {
        "35_to_44"
    } else if age < 55 {
        "45_to_54"
    } else if age < 65 {
        "55_to_64"
    } else {
        "65_plus"
    }
}

/// Birth-year options: ten years below `current_year` back 90 years, the
/// range the portal offers.
pub fn year_options(current_year: i32) -> Vec<String> {
    (0..91).map(|i| (current_year - 10 - i).to_string()).collect()
}

/// The visible survey questions, in asking order. `birthyear` options are
/// year-dependent and come from [`year_options`].
pub fn survey_fields() -> &'static [SurveyField] {
    &[
        SurveyField {
            key: "birthyear",
            label: "Geburtsjahr",
            options: &[],
        },
        SurveyField {
            key: "gender",
            label: "Geschlecht",
            options: &[
                ("male", "Männlich"),
                ("female", "Weiblich"),
                ("other", "Divers"),
                ("prefer_not_to_say", "Keine Angabe"),
            ],
        },
        SurveyField {
            key: "marital_status",
            label: "Familienstand",
            options: &[
                ("single", "Ledig"),
                ("married_or_civil_union", "Verheiratet oder in Lebenspartnerschaft"),
                ("separated", "In Trennung lebend"),
                ("divorced", "Geschieden"),
                ("widowed", "Verwitwet"),
                ("prefer_not_to_say", "Keine Angabe"),
            ],
        },
        SurveyField {
            key: "education",
            label: "Ausbildungsstand",
            options: &[
                ("no_degree", "Kein Schulabschluss"),
                ("primary", "Hauptschulabschluss"),
                ("secondary", "Realschulabschluss / Mittlere Reife"),
                ("vocational", "Fachhochschulreife"),
                ("abitur", "Abitur / Allgemeine Hochschulreife"),
                ("bachelor", "Bachelor-Abschluss"),
                ("master", "Master-Abschluss"),
                ("doctorate", "Promotion / Doktortitel"),
                ("prefer_not_to_say", "Keine Angabe"),
            ],
        },
        SurveyField {
            key: "current_activity",
            label: "Aktuelle Tätigkeit",
            options: &[
                ("attending_school", "Schulbesuch"),
                ("studying", "Studium"),
                ("vocational_training", "Berufliche Ausbildung"),
                ("retraining", "Umschulung"),
                ("voluntary_military_service", "Freiwilliger Wehrdienst"),
                ("bfd_fsj_fej", "Freiwilligendienst (BFD/FSJ/FÖJ)"),
                ("career_break", "Erwerbsunterbrechung"),
                ("employed", "Erwerbstätig"),
                ("retired", "Rentner*in / Pensionär*in"),
                ("unemployed", "Arbeitslos"),
                ("permanently_unfit", "Dauerhaft erwerbsunfähig"),
                ("household_management", "Hausfrau/Hausmann"),
                ("other", "Sonstige"),
                ("prefer_not_to_say", "Keine Angabe"),
            ],
        },
        SurveyField {
            key: "household_size",
            label: "Haushaltsgröße",
            options: &[
                ("1", "1 Person"),
                ("2", "2 Personen"),
                ("3", "3 Personen"),
                ("4", "4 Personen"),
                ("5", "5 Personen"),
                ("6", "6 Personen"),
                ("7", "7 Personen"),
                ("8", "8 Personen"),
                ("9", "9 Personen"),
                ("10_or_more", "10 oder mehr Personen"),
                ("prefer_not_to_say", "Keine Angabe"),
            ],
        },
        SurveyField {
            key: "income",
            label: "Nettoeinkommen",
            options: &[
                ("under_1000", "Unter 1000 €"),
                ("1000_1999", "1.000 bis 1.999 €"),
                ("2000_2999", "2.000 bis 2.999 €"),
                ("3000_3999", "3.000 bis 3.999 €"),
                ("4000_4999", "4.000 bis 4.999 €"),
                ("5000_5999", "5.000 bis 5.999 €"),
                ("6000_6999", "6.000 bis 6.999 €"),
                ("7000_7999", "7.000 bis 7.999 €"),
                ("8000_8999", "8.000 bis 8.999 €"),
                ("9000_9999", "9.000 bis 9.999 €"),
                ("10000_plus", "10.000 € oder mehr"),
                ("prefer_not_to_say", "Keine Angabe"),
            ],
        },
        SurveyField {
            key: "political_affiliation",
            label: "Politische Einstellung",
            options: &[
                ("very_conservative", "Sehr konservativ"),
                ("conservative", "Konservativ"),
                ("middle", "Mitte"),
                ("liberal", "Liberal"),
                ("very_liberal", "Sehr liberal"),
                ("no_opinion", "Keine Meinung"),
                ("prefer_not_to_say", "Keine Angabe"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_groups_bucket_at_the_documented_boundaries() {
        let year = 2026;
        assert_eq!(age_group_for_year(2010, year), "17_and_under");
        assert_eq!(age_group_for_year(2008, year), "18_to_24");
        assert_eq!(age_group_for_year(2001, year), "25_to_34");
        assert_eq!(age_group_for_year(1991, year), "35_to_44");
        assert_eq!(age_group_for_year(1981, year), "45_to_54");
        assert_eq!(age_group_for_year(1971, year), "55_to_64");
        assert_eq!(age_group_for_year(1961, year), "65_plus");
    }

    #[test]
    fn merge_keeps_existing_answers_and_derives_age_group() {
        let mut stored = DemographicData {
            gender: "female".to_string(),
            ..DemographicData::default()
        };
        let update = DemographicData {
            birthyear: "1990".to_string(),
            income: "2000_2999".to_string(),
            ..DemographicData::default()
        };
        stored.merge(&update, 2026);
        assert_eq!(stored.gender, "female");
        assert_eq!(stored.birthyear, "1990");
        assert_eq!(stored.age_group, "35_to_44");
        assert_eq!(stored.income, "2000_2999");
    }

    #[test]
    fn empty_update_does_not_erase_answers() {
        let mut stored = DemographicData {
            birthyear: "1980".to_string(),
            ..DemographicData::default()
        };
        stored.merge(&DemographicData::default(), 2026);
        assert_eq!(stored.birthyear, "1980");
        assert_eq!(stored.age_group, "45_to_54");
    }

    #[test]
    fn completeness_checks() {
        let mut data = DemographicData::default();
        assert!(data.is_empty());
        assert!(!data.is_complete());
        data.set("gender", "other");
        assert!(!data.is_empty());
        assert!(!data.is_complete());
    }

    #[test]
    fn year_options_span_the_offered_range() {
        let years = year_options(2026);
        assert_eq!(years.len(), 91);
        assert_eq!(years.first().map(String::as_str), Some("2016"));
        assert_eq!(years.last().map(String::as_str), Some("1926"));
    }
}
