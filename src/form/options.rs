//! Fixed option catalogs and the generated year range.
//!
//! Every select on the form draws from one of these lists. The catalogs are
//! static and order-significant for display; the year list is derived from
//! the host clock on every call so a page left open across New Year's Eve
//! offers the new range.

use serde::{Serialize, Serializer};

/// Highest qualification offered by the degree select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degree {
    BTech,
    BSc,
    BCom,
    BA,
    Bba,
    Bca,
    MTech,
    MSc,
    Mba,
    Diploma,
}

impl Degree {
    /// All degrees in display order.
    pub fn all() -> &'static [Degree] {
        &[
            Degree::BTech,
            Degree::BSc,
            Degree::BCom,
            Degree::BA,
            Degree::Bba,
            Degree::Bca,
            Degree::MTech,
            Degree::MSc,
            Degree::Mba,
            Degree::Diploma,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Degree::BTech => "B.Tech",
            Degree::BSc => "B.Sc",
            Degree::BCom => "B.Com",
            Degree::BA => "B.A",
            Degree::Bba => "BBA",
            Degree::Bca => "BCA",
            Degree::MTech => "M.Tech",
            Degree::MSc => "M.Sc",
            Degree::Mba => "MBA",
            Degree::Diploma => "Diploma",
        }
    }
}

/// A skill the applicant can tick; any number may be selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skill {
    Python,
    Java,
    JavaScript,
    Cpp,
    Sql,
    DataAnalysis,
    WebDevelopment,
    MachineLearning,
    CloudComputing,
    Communication,
}

impl Skill {
    /// All skills in display order.
    pub fn all() -> &'static [Skill] {
        &[
            Skill::Python,
            Skill::Java,
            Skill::JavaScript,
            Skill::Cpp,
            Skill::Sql,
            Skill::DataAnalysis,
            Skill::WebDevelopment,
            Skill::MachineLearning,
            Skill::CloudComputing,
            Skill::Communication,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Skill::Python => "Python",
            Skill::Java => "Java",
            Skill::JavaScript => "JavaScript",
            Skill::Cpp => "C++",
            Skill::Sql => "SQL",
            Skill::DataAnalysis => "Data Analysis",
            Skill::WebDevelopment => "Web Development",
            Skill::MachineLearning => "Machine Learning",
            Skill::CloudComputing => "Cloud Computing",
            Skill::Communication => "Communication",
        }
    }
}

/// Industry sector the applicant wants to intern in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sector {
    It,
    Banking,
    Healthcare,
    Manufacturing,
    Agriculture,
    Education,
    Energy,
    Automotive,
    Telecom,
    Media,
}

impl Sector {
    /// All sectors in display order.
    pub fn all() -> &'static [Sector] {
        &[
            Sector::It,
            Sector::Banking,
            Sector::Healthcare,
            Sector::Manufacturing,
            Sector::Agriculture,
            Sector::Education,
            Sector::Energy,
            Sector::Automotive,
            Sector::Telecom,
            Sector::Media,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Sector::It => "IT",
            Sector::Banking => "Banking & Finance",
            Sector::Healthcare => "Healthcare",
            Sector::Manufacturing => "Manufacturing",
            Sector::Agriculture => "Agriculture",
            Sector::Education => "Education",
            Sector::Energy => "Energy",
            Sector::Automotive => "Automotive",
            Sector::Telecom => "Telecom",
            Sector::Media => "Media",
        }
    }
}

/// Academic stream / discipline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    ComputerScience,
    Electronics,
    Mechanical,
    Civil,
    Electrical,
    Commerce,
    Science,
    Arts,
    Management,
    Law,
}

impl Stream {
    /// All streams in display order.
    pub fn all() -> &'static [Stream] {
        &[
            Stream::ComputerScience,
            Stream::Electronics,
            Stream::Mechanical,
            Stream::Civil,
            Stream::Electrical,
            Stream::Commerce,
            Stream::Science,
            Stream::Arts,
            Stream::Management,
            Stream::Law,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Stream::ComputerScience => "Computer Science",
            Stream::Electronics => "Electronics",
            Stream::Mechanical => "Mechanical",
            Stream::Civil => "Civil",
            Stream::Electrical => "Electrical",
            Stream::Commerce => "Commerce",
            Stream::Science => "Science",
            Stream::Arts => "Arts",
            Stream::Management => "Management",
            Stream::Law => "Law",
        }
    }
}

// The wire payload carries display names, not variant identifiers.
macro_rules! serialize_as_name {
    ($($ty:ty),*) => {
        $(impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        })*
    };
}

serialize_as_name!(Degree, Skill, Sector, Stream);

// ── Year range ─────────────────────────────────────────────────

/// How far back the graduation-year select reaches.
pub const YEARS_BACK: i32 = 50;
/// How far ahead (students applying before they graduate).
pub const YEARS_AHEAD: i32 = 5;
/// Number of entries `year_options` produces.
pub const YEAR_COUNT: usize = (YEARS_BACK + YEARS_AHEAD + 1) as usize;

/// The contiguous ascending year range offered by the year select.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (current_year - YEARS_BACK..=current_year + YEARS_AHEAD).collect()
}

/// Calendar year (UTC, proleptic Gregorian) of a Unix epoch timestamp in
/// milliseconds. Days-to-civil conversion; negative timestamps (pre-1970)
/// are handled.
pub fn year_of_epoch_ms(ms: f64) -> i32 {
    let days = (ms / 86_400_000.0).floor() as i64;
    let z = days + 719_468;
    let shifted = if z >= 0 { z } else { z - 146_096 };
    let era = shifted / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (if month <= 2 { y + 1 } else { y }) as i32
}

/// Current calendar year from the host clock. Never cached: callers invoke
/// this per frame so the year range tracks a rollover.
#[cfg(target_arch = "wasm32")]
pub fn current_year() -> i32 {
    year_of_epoch_ms(js_sys::Date::now())
}

/// Native fallback (tests, tooling builds) via the system clock.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> i32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0);
    year_of_epoch_ms(ms)
}
