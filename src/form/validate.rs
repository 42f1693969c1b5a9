//! Draft validation: a pure function from the draft to a submittable record
//! or a set of field-scoped error messages.

use super::state::{ApplicationDraft, ApplicationRecord};

/// The six form fields, used to scope error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Degree,
    Year,
    Skills,
    Sector,
    Stream,
}

/// One violated constraint, surfaced inline next to its field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const DEGREE_MISSING: &str = "Please select a degree";
pub const YEAR_MISSING: &str = "Please select a year";
pub const SKILLS_MISSING: &str = "Please select at least one skill";
pub const SECTOR_MISSING: &str = "Please select a sector";
pub const STREAM_MISSING: &str = "Please select a stream";

/// Check every constraint at once. Returns the finished record only when all
/// six fields hold simultaneously; otherwise every violated field gets its
/// message. Does not mutate the draft.
pub fn validate(draft: &ApplicationDraft) -> Result<ApplicationRecord, Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.name.trim().chars().count() < 2 {
        errors.push(FieldError {
            field: Field::Name,
            message: NAME_TOO_SHORT,
        });
    }
    if draft.degree.is_none() {
        errors.push(FieldError {
            field: Field::Degree,
            message: DEGREE_MISSING,
        });
    }
    if draft.year.is_none() {
        errors.push(FieldError {
            field: Field::Year,
            message: YEAR_MISSING,
        });
    }
    if draft.skills.is_empty() {
        errors.push(FieldError {
            field: Field::Skills,
            message: SKILLS_MISSING,
        });
    }
    if draft.sector.is_none() {
        errors.push(FieldError {
            field: Field::Sector,
            message: SECTOR_MISSING,
        });
    }
    if draft.stream.is_none() {
        errors.push(FieldError {
            field: Field::Stream,
            message: STREAM_MISSING,
        });
    }

    // The guard holds exactly when `errors` is empty: every `None` above
    // pushed an error, so the selects are all `Some` here.
    match (draft.degree, draft.year, draft.sector, draft.stream) {
        (Some(degree), Some(year), Some(sector), Some(stream)) if errors.is_empty() => {
            Ok(ApplicationRecord {
                name: draft.name.trim().to_string(),
                degree,
                year,
                skills: draft.skills.clone(),
                sector,
                stream,
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::options::{Degree, Sector, Skill, Stream};

    fn valid_draft() -> ApplicationDraft {
        ApplicationDraft {
            name: "Asha Verma".to_string(),
            degree: Some(Degree::BTech),
            year: Some(2025),
            skills: vec![Skill::Python, Skill::Sql],
            sector: Some(Sector::It),
            stream: Some(Stream::ComputerScience),
        }
    }

    #[test]
    fn valid_draft_produces_record() {
        let draft = valid_draft();
        let record = validate(&draft).unwrap();

        assert_eq!(record.name, "Asha Verma");
        assert_eq!(record.degree, Degree::BTech);
        assert_eq!(record.year, 2025);
        assert_eq!(record.skills, vec![Skill::Python, Skill::Sql]);
        assert_eq!(record.sector, Sector::It);
        assert_eq!(record.stream, Stream::ComputerScience);
    }

    #[test]
    fn name_is_trimmed_into_record() {
        let mut draft = valid_draft();
        draft.name = "  Asha  ".to_string();
        let record = validate(&draft).unwrap();
        assert_eq!(record.name, "Asha");
    }

    #[test]
    fn short_name_rejected() {
        let mut draft = valid_draft();
        draft.name = "A".to_string();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Name);
        assert_eq!(errors[0].message, NAME_TOO_SHORT);
    }

    #[test]
    fn whitespace_only_name_rejected() {
        let mut draft = valid_draft();
        draft.name = "  a   ".to_string();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors[0].field, Field::Name);
    }

    #[test]
    fn two_char_name_accepted() {
        let mut draft = valid_draft();
        draft.name = "Al".to_string();
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn missing_degree_is_the_only_error() {
        // Everything present except degree.
        let draft = ApplicationDraft {
            name: "Al".to_string(),
            degree: None,
            year: Some(2025),
            skills: vec![Skill::Python],
            sector: Some(Sector::It),
            stream: Some(Stream::ComputerScience),
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Degree);
        assert_eq!(errors[0].message, DEGREE_MISSING);
    }

    #[test]
    fn empty_skills_rejected() {
        let mut draft = valid_draft();
        draft.skills.clear();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Skills);
        assert_eq!(errors[0].message, SKILLS_MISSING);
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = validate(&ApplicationDraft::default()).unwrap_err();
        assert_eq!(errors.len(), 6);
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Degree,
                Field::Year,
                Field::Skills,
                Field::Sector,
                Field::Stream
            ]
        );
    }

    #[test]
    fn validation_does_not_mutate_draft() {
        let draft = valid_draft();
        let before = draft.clone();
        let _ = validate(&draft);
        assert_eq!(draft, before);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_error_count_matches_violations(
                name in "[ a-zA-Z]{0,8}",
                has_degree in any::<bool>(),
                has_year in any::<bool>(),
                skill_count in 0usize..3,
                has_sector in any::<bool>(),
                has_stream in any::<bool>(),
            ) {
                let draft = ApplicationDraft {
                    name: name.clone(),
                    degree: has_degree.then_some(Degree::BSc),
                    year: has_year.then_some(2020),
                    skills: Skill::all()[..skill_count].to_vec(),
                    sector: has_sector.then_some(Sector::Energy),
                    stream: has_stream.then_some(Stream::Science),
                };

                let expected = usize::from(name.trim().chars().count() < 2)
                    + usize::from(!has_degree)
                    + usize::from(!has_year)
                    + usize::from(skill_count == 0)
                    + usize::from(!has_sector)
                    + usize::from(!has_stream);

                match validate(&draft) {
                    Ok(record) => {
                        prop_assert_eq!(expected, 0);
                        prop_assert_eq!(record.name, draft.name.trim());
                    }
                    Err(errors) => prop_assert_eq!(errors.len(), expected),
                }
            }
        }
    }
}
