use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;

// JSON keys follow the published API: camelCase, with `ID` and `CSV`
// suffixes kept upper-case. Field names match the procedure result columns.

// --- Main body (Chapters 1 - 14) ---

/// Preamble
///
/// Single row returned by `main_schema.sp_get_preamble`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Preamble {
    pub title: String,
    pub preamble_contents: String,
}

/// Chapter
///
/// A chapter's number and title, as returned by `sp_get_chapters`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Chapter {
    #[serde(rename = "chapterID")]
    pub chapter_id: i32,
    pub chapter_title: String,
}

/// Section
///
/// A section of the main body. `section_text` is only present when the
/// section has no subsections.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Section {
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    #[serde(rename = "chapterID")]
    pub chapter_id: i32,
    pub section_title: String,
    pub section_text: Option<String>,
}

/// SectionByChapter
///
/// Row shape of `sp_get_sections_by_chapter_id`; the chapter is implied by the query.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SectionByChapter {
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    pub section_title: String,
    pub section_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Subsection {
    #[serde(rename = "subsectionID")]
    pub subsection_id: String,
    pub subsection_text: String,
}

/// Clause
///
/// A lettered clause hanging off a numbered subsection of a section.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Clause {
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    #[serde(rename = "subsectionID")]
    pub subsection_id: String,
    #[serde(rename = "clauseID")]
    pub clause_id: String,
    pub clause_text: String,
}

/// NonDerogableRight
///
/// One row of the table of non-derogable rights in the Bill of Rights.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NonDerogableRight {
    pub section_number: i32,
    pub section_title: String,
    pub protection_extent: String,
}

/// FullSection
///
/// A section with all of its contents. Exactly one of the two shapes is filled:
/// - `section_text` set, `sub_sections` and `clauses` null, or
/// - `section_text` null, `sub_sections` set and `clauses` set when any exist.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FullSection {
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    pub section_title: String,
    pub section_text: Option<String>,
    pub sub_sections: Option<Vec<Subsection>>,
    pub clauses: Option<Vec<Clause>>,
}

/// FullChapter
///
/// A chapter together with every one of its sections in full.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FullChapter {
    #[serde(rename = "chapterID")]
    pub chapter_id: i32,
    pub chapter_title: String,
    pub full_sections: Vec<FullSection>,
}

// --- Amendments ---

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Amendment {
    pub amendment_title: String,
    #[ts(type = "string")]
    pub date_of_effect: NaiveDate,
    pub reference: String,
}

// --- Annexures ---

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Annexure {
    #[serde(rename = "annexureID")]
    pub annexure_id: String,
    pub annexure_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnnexureSection {
    #[serde(rename = "annexureID")]
    pub annexure_id: String,
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    pub section_title: String,
    pub section_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnnexureSubsection {
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    #[serde(rename = "subsectionID")]
    pub subsection_id: String,
    pub section_text: String,
}

/// FullAnnexure
///
/// An annexure with its sections. Subsections are grouped per section; groups
/// for sections without subsections are omitted, and the whole field is null
/// when no section has any.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FullAnnexure {
    #[serde(rename = "annexureID")]
    pub annexure_id: String,
    pub annexure_title: String,
    pub annexure_sections: Vec<AnnexureSection>,
    pub annexure_subsections: Option<Vec<Vec<AnnexureSubsection>>>,
}

// --- Schedules ---

/// Schedule 1: the national flag.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleOneNationalFlag {
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    pub section_text: String,
}

/// Schedule 1A: geographical areas of the provinces.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleOneAGeoAreasProvince {
    pub province: String,
    #[serde(rename = "mapCSV")]
    pub map_csv: String,
}

/// Schedule 2: oaths and solemn affirmations.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleTwoOathsAffirmation {
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    pub section_title: String,
    pub section_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleTwoSubsection {
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    #[serde(rename = "subsectionID")]
    pub subsection_id: String,
    pub subsection_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleTwoFull {
    pub oaths_affirmations: Vec<ScheduleTwoOathsAffirmation>,
    pub subsections: Option<Vec<Vec<ScheduleTwoSubsection>>>,
}

/// Schedule 3: election procedures, split into lettered parts.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleThreePart {
    #[serde(rename = "partID")]
    pub part_id: String,
    pub part_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleThreeElectionProcedure {
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    pub section_three_part: String,
    pub section_title: String,
    pub section_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleThreeSubsection {
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    pub section_three_part: String,
    #[serde(rename = "subsectionID")]
    pub subsection_id: String,
    pub section_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleThreeFull {
    pub parts: Vec<ScheduleThreePart>,
    pub election_procedures: Vec<ScheduleThreeElectionProcedure>,
    pub subsections: Option<Vec<ScheduleThreeSubsection>>,
}

/// Competency
///
/// Schedules 4 (concurrent) and 5 (exclusive provincial) share this shape:
/// a part letter and the functional areas of that part as CSV.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Competency {
    #[serde(rename = "partID")]
    pub part_id: String,
    #[serde(rename = "partCSV")]
    pub part_csv: String,
}

/// Schedule 6: transitional arrangements.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleSixTransitionalArrangement {
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    pub section_title: String,
    pub section_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleSixSubsection {
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    #[serde(rename = "subsectionID")]
    pub subsection_id: String,
    pub subsection_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleSixClause {
    #[serde(rename = "sectionID")]
    pub section_id: i32,
    #[serde(rename = "subsectionID")]
    pub subsection_id: String,
    #[serde(rename = "clauseID")]
    pub clause_id: String,
    pub clause_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleSixFull {
    pub transitional_arrangements: Vec<ScheduleSixTransitionalArrangement>,
    pub clauses: Vec<ScheduleSixClause>,
    pub subsections: Option<Vec<ScheduleSixSubsection>>,
}
