// Raw JSON -> typed records.
//
// Normalization is total: it never fails, whatever shape the input has.
// Missing or wrongly typed fields fall back to absent/empty, malformed
// language entries are dropped, and the exact "none" literal means absent.

use super::{Job, LanguageSkill, Stated, Talent};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::str::FromStr;

const NONE_LITERAL: &str = "none";

pub fn normalize_talent(raw: &Value) -> Talent {
    let Some(obj) = raw.as_object() else {
        return Talent::default();
    };

    Talent {
        // Candidates never "must have" their own languages.
        languages: parse_languages(obj, false),
        job_roles: parse_roles(obj),
        seniority: parse_stated(obj.get("seniority")),
        salary_expectation: parse_salary(obj.get("salary_expectation")),
        degree: parse_level(obj.get("degree")),
    }
}

pub fn normalize_job(raw: &Value) -> Job {
    let Some(obj) = raw.as_object() else {
        return Job::default();
    };

    let seniorities = obj
        .get("seniorities")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(|v| parse_level(Some(v))).collect())
        .unwrap_or_default();

    Job {
        languages: parse_languages(obj, true),
        job_roles: parse_roles(obj),
        seniorities,
        max_salary: parse_salary(obj.get("max_salary")),
        min_degree: parse_level(obj.get("min_degree")),
    }
}

fn parse_languages(obj: &Map<String, Value>, read_must_have: bool) -> BTreeMap<String, LanguageSkill> {
    let mut languages = BTreeMap::new();
    let Some(entries) = obj.get("languages").and_then(Value::as_array) else {
        return languages;
    };

    for entry in entries {
        let Some(title) = entry.get("title").and_then(Value::as_str) else {
            continue;
        };
        let rating = match entry.get("rating") {
            None | Some(Value::Null) => continue,
            Some(v) => v.as_str().and_then(|s| s.trim().parse().ok()),
        };
        let must_have = read_must_have
            && entry
                .get("must_have")
                .and_then(Value::as_bool)
                .unwrap_or(false);

        // Duplicate titles: last entry wins.
        languages.insert(
            title.to_string(),
            LanguageSkill {
                title: title.to_string(),
                rating,
                must_have,
            },
        );
    }
    languages
}

fn parse_roles(obj: &Map<String, Value>) -> Vec<String> {
    obj.get("job_roles")
        .and_then(Value::as_array)
        .map(|roles| {
            roles
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_level<T: FromStr>(value: Option<&Value>) -> Option<T> {
    let s = value?.as_str()?;
    if s == NONE_LITERAL {
        return None;
    }
    s.parse().ok()
}

fn parse_stated<T: FromStr>(value: Option<&Value>) -> Stated<T> {
    match value {
        None | Some(Value::Null) => Stated::Absent,
        Some(Value::String(s)) if s == NONE_LITERAL => Stated::Absent,
        Some(Value::String(s)) => s
            .parse()
            .map_or_else(|_| Stated::Other(s.clone()), Stated::Known),
        Some(other) => Stated::Other(other.to_string()),
    }
}

fn parse_salary(value: Option<&Value>) -> Option<i64> {
    let v = value?;
    v.as_i64().or_else(|| {
        v.as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Degree, LanguageRating, Seniority};
    use serde_json::json;

    #[test]
    fn talent_none_literals_collapse_to_absent() {
        let talent = normalize_talent(&json!({
            "seniority": "none",
            "degree": "none",
            "salary_expectation": 48000,
        }));
        assert_eq!(talent.seniority, Stated::Absent);
        assert_eq!(talent.degree, None);
        assert_eq!(talent.salary_expectation, Some(48000));
    }

    #[test]
    fn off_scale_talent_seniority_is_kept() {
        let talent = normalize_talent(&json!({"seniority": "principal"}));
        assert_eq!(talent.seniority, Stated::Other("principal".to_string()));

        // Only the exact lowercase literal means absent.
        let talent = normalize_talent(&json!({"seniority": "None"}));
        assert_eq!(talent.seniority, Stated::Other("None".to_string()));

        let talent = normalize_talent(&json!({"seniority": null}));
        assert_eq!(talent.seniority, Stated::Absent);

        let talent = normalize_talent(&json!({"seniority": "midlevel"}));
        assert_eq!(talent.seniority, Stated::Known(Seniority::Midlevel));
    }

    #[test]
    fn job_seniorities_keep_none_entries() {
        let job = normalize_job(&json!({
            "seniorities": ["junior", "none", "senior"],
            "min_degree": "bachelor",
        }));
        assert_eq!(
            job.seniorities,
            vec![Some(Seniority::Junior), None, Some(Seniority::Senior)]
        );
        assert_eq!(job.min_degree, Some(Degree::Bachelor));
    }

    #[test]
    fn unrated_language_is_dropped_unknown_rating_is_kept() {
        let job = normalize_job(&json!({
            "languages": [
                {"title": "German", "rating": "C1", "must_have": true},
                {"title": "English"},
                {"rating": "B2"},
                {"title": "Klingon", "rating": "native"},
            ]
        }));
        assert_eq!(job.languages.len(), 2);
        let german = &job.languages["German"];
        assert_eq!(german.rating, Some(LanguageRating::C1));
        assert!(german.must_have);
        assert_eq!(job.languages["Klingon"].rating, None);
    }

    #[test]
    fn talent_languages_are_never_must_have() {
        let talent = normalize_talent(&json!({
            "languages": [{"title": "German", "rating": "C2", "must_have": true}]
        }));
        assert!(!talent.languages["German"].must_have);
    }

    #[test]
    fn duplicate_language_last_write_wins() {
        let talent = normalize_talent(&json!({
            "languages": [
                {"title": "English", "rating": "A2"},
                {"title": "English", "rating": "C1"},
            ]
        }));
        assert_eq!(talent.languages["English"].rating, Some(LanguageRating::C1));
    }

    #[test]
    fn garbage_input_yields_defaults() {
        assert_eq!(normalize_talent(&json!("nope")), Talent::default());
        assert_eq!(normalize_job(&Value::Null), Job::default());

        let job = normalize_job(&json!({
            "job_roles": ["backend", 3, null],
            "languages": "German",
            "max_salary": "a lot",
        }));
        assert_eq!(job.job_roles, vec!["backend".to_string()]);
        assert!(job.languages.is_empty());
        assert_eq!(job.max_salary, None);
    }

    #[test]
    fn float_salary_is_truncated() {
        let job = normalize_job(&json!({"max_salary": 61999.9}));
        assert_eq!(job.max_salary, Some(61999));
    }
}
