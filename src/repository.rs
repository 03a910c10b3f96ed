use crate::models::{
    Amendment, Annexure, AnnexureSection, AnnexureSubsection, Chapter, Clause, Competency,
    NonDerogableRight, Preamble, ScheduleOneAGeoAreasProvince, ScheduleOneNationalFlag,
    ScheduleSixClause, ScheduleSixSubsection, ScheduleSixTransitionalArrangement,
    ScheduleThreeElectionProcedure, ScheduleThreePart, ScheduleThreeSubsection,
    ScheduleTwoOathsAffirmation, ScheduleTwoSubsection, Section, SectionByChapter, Subsection,
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

/// MainRepository
///
/// One method per stored procedure in `main_schema` (Preamble, Chapters 1 - 14,
/// the Bill of Rights' non-derogable rights table).
///
/// Methods never fail: database errors are logged and surface as an empty
/// result, which the routing layer turns into a 404.
#[async_trait]
pub trait MainRepository: Send + Sync {
    async fn get_preamble(&self) -> Option<Preamble>;
    async fn get_chapters(&self) -> Vec<Chapter>;
    // Every section's id, chapter id, title and text where present.
    async fn get_sections(&self) -> Vec<Section>;
    async fn get_section(&self, section_id: i32) -> Option<Section>;
    async fn get_non_derogable_rights(&self) -> Vec<NonDerogableRight>;
    // Ordered by section id.
    async fn get_sections_by_chapter_id(&self, chapter_id: i32) -> Vec<SectionByChapter>;
    async fn get_subsections_by_section_id(&self, section_id: i32) -> Vec<Subsection>;
    // All clauses under any subsection of the section.
    async fn get_clauses_of_subsection(&self, section_id: i32) -> Vec<Clause>;
}

/// ScheduleRepository
///
/// Stored procedures in `schedule_schema`: Schedules 1 - 6 and the annexures.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn get_schedule_one_national_flag(&self) -> Vec<ScheduleOneNationalFlag>;
    async fn get_schedule_one_a_geo_areas_provinces(&self) -> Vec<ScheduleOneAGeoAreasProvince>;
    async fn get_schedule_two_oaths_affirmations(&self) -> Vec<ScheduleTwoOathsAffirmation>;
    async fn get_schedule_two_subsections(&self, section_id: i32) -> Vec<ScheduleTwoSubsection>;
    async fn get_schedule_three_parts(&self) -> Vec<ScheduleThreePart>;
    async fn get_schedule_three_election_procedures(&self) -> Vec<ScheduleThreeElectionProcedure>;
    async fn get_schedule_three_subsections(&self) -> Vec<ScheduleThreeSubsection>;
    async fn get_schedule_four_concurrent_competencies(&self) -> Vec<Competency>;
    async fn get_schedule_five_exclusive_provincial_competencies(&self) -> Vec<Competency>;
    async fn get_schedule_six_transitional_arrangements(
        &self,
    ) -> Vec<ScheduleSixTransitionalArrangement>;
    async fn get_schedule_six_subsections(&self) -> Vec<ScheduleSixSubsection>;
    async fn get_schedule_six_clauses(&self) -> Vec<ScheduleSixClause>;

    // --- Annexures ---
    async fn get_annexures(&self) -> Vec<Annexure>;
    // Sections of every annexure; callers filter by annexure id.
    async fn get_annexure_sections(&self) -> Vec<AnnexureSection>;
    async fn get_annexure_subsections(
        &self,
        annexure_id: &str,
        section_id: i32,
    ) -> Vec<AnnexureSubsection>;
}

/// AmendmentRepository
///
/// Stored procedures in `amendment_schema`.
#[async_trait]
pub trait AmendmentRepository: Send + Sync {
    // Every amendment to date, oldest first.
    async fn get_amendments(&self) -> Vec<Amendment>;
}

pub type MainRepositoryState = Arc<dyn MainRepository>;
pub type ScheduleRepositoryState = Arc<dyn ScheduleRepository>;
pub type AmendmentRepositoryState = Arc<dyn AmendmentRepository>;

/// PostgresRepository
///
/// Implements all three repository traits against the Postgres functions
/// created by `migrations/`. Text columns that the API declares as
/// non-optional are defaulted to `'N/A'` here, at the query boundary.
#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Logs a failed procedure call and degrades it to an empty result set.
fn rows_or_empty<T>(procedure: &str, result: Result<Vec<T>, sqlx::Error>) -> Vec<T> {
    match result {
        Ok(rows) => {
            tracing::debug!(procedure, rows = rows.len(), "procedure returned");
            rows
        }
        Err(e) => {
            tracing::error!(procedure, "procedure call failed: {:?}", e);
            vec![]
        }
    }
}

fn row_or_none<T>(procedure: &str, result: Result<Option<T>, sqlx::Error>) -> Option<T> {
    result.unwrap_or_else(|e| {
        tracing::error!(procedure, "procedure call failed: {:?}", e);
        None
    })
}

#[async_trait]
impl MainRepository for PostgresRepository {
    async fn get_preamble(&self) -> Option<Preamble> {
        let result = sqlx::query_as::<_, Preamble>(
            r#"SELECT COALESCE(title, 'Preamble') AS title,
                      COALESCE(preamble_contents, 'N/A') AS preamble_contents
               FROM main_schema.sp_get_preamble()"#,
        )
        .fetch_optional(&self.pool)
        .await;
        row_or_none("sp_get_preamble", result)
    }

    async fn get_chapters(&self) -> Vec<Chapter> {
        let result = sqlx::query_as::<_, Chapter>(
            r#"SELECT chapter_id, COALESCE(chapter_title, 'N/A') AS chapter_title
               FROM main_schema.sp_get_chapters()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_chapters", result)
    }

    async fn get_sections(&self) -> Vec<Section> {
        let result = sqlx::query_as::<_, Section>(
            r#"SELECT section_id, chapter_id, COALESCE(section_title, 'N/A') AS section_title, section_text
               FROM main_schema.sp_get_sections()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_sections", result)
    }

    async fn get_section(&self, section_id: i32) -> Option<Section> {
        let result = sqlx::query_as::<_, Section>(
            r#"SELECT section_id, chapter_id, COALESCE(section_title, 'N/A') AS section_title, section_text
               FROM main_schema.sp_get_section_by_id($1)"#,
        )
        .bind(section_id)
        .fetch_optional(&self.pool)
        .await;
        row_or_none("sp_get_section_by_id", result)
    }

    async fn get_non_derogable_rights(&self) -> Vec<NonDerogableRight> {
        let result = sqlx::query_as::<_, NonDerogableRight>(
            r#"SELECT section_number,
                      COALESCE(section_title, 'N/A') AS section_title,
                      COALESCE(protection_extent, 'N/A') AS protection_extent
               FROM main_schema.sp_get_non_derogable_rights()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_non_derogable_rights", result)
    }

    async fn get_sections_by_chapter_id(&self, chapter_id: i32) -> Vec<SectionByChapter> {
        let result = sqlx::query_as::<_, SectionByChapter>(
            r#"SELECT section_id, COALESCE(section_title, 'N/A') AS section_title, section_text
               FROM main_schema.sp_get_sections_by_chapter_id($1)"#,
        )
        .bind(chapter_id)
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_sections_by_chapter_id", result)
    }

    async fn get_subsections_by_section_id(&self, section_id: i32) -> Vec<Subsection> {
        let result = sqlx::query_as::<_, Subsection>(
            r#"SELECT subsection_id, COALESCE(subsection_text, 'N/A') AS subsection_text
               FROM main_schema.sp_get_subsections_by_section_id($1)"#,
        )
        .bind(section_id)
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_subsections_by_section_id", result)
    }

    async fn get_clauses_of_subsection(&self, section_id: i32) -> Vec<Clause> {
        let result = sqlx::query_as::<_, Clause>(
            r#"SELECT section_id, subsection_id, clause_id, COALESCE(clause_text, 'N/A') AS clause_text
               FROM main_schema.sp_get_clauses_of_subsection($1)"#,
        )
        .bind(section_id)
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_clauses_of_subsection", result)
    }
}

#[async_trait]
impl ScheduleRepository for PostgresRepository {
    async fn get_schedule_one_national_flag(&self) -> Vec<ScheduleOneNationalFlag> {
        let result = sqlx::query_as::<_, ScheduleOneNationalFlag>(
            r#"SELECT section_id, COALESCE(section_text, '') AS section_text
               FROM schedule_schema.sp_get_schedule_one_national_flag()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_schedule_one_national_flag", result)
    }

    async fn get_schedule_one_a_geo_areas_provinces(&self) -> Vec<ScheduleOneAGeoAreasProvince> {
        let result = sqlx::query_as::<_, ScheduleOneAGeoAreasProvince>(
            r#"SELECT province, COALESCE(map_csv, '') AS map_csv
               FROM schedule_schema.sp_get_schedule_one_a_geo_areas_provinces()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_schedule_one_a_geo_areas_provinces", result)
    }

    async fn get_schedule_two_oaths_affirmations(&self) -> Vec<ScheduleTwoOathsAffirmation> {
        let result = sqlx::query_as::<_, ScheduleTwoOathsAffirmation>(
            r#"SELECT section_id, COALESCE(section_title, 'N/A') AS section_title, section_text
               FROM schedule_schema.sp_get_schedule_two_oaths_affirmations()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_schedule_two_oaths_affirmations", result)
    }

    async fn get_schedule_two_subsections(&self, section_id: i32) -> Vec<ScheduleTwoSubsection> {
        let result = sqlx::query_as::<_, ScheduleTwoSubsection>(
            r#"SELECT section_id, subsection_id, COALESCE(subsection_text, 'N/A') AS subsection_text
               FROM schedule_schema.sp_get_schedule_two_subsections($1)"#,
        )
        .bind(section_id)
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_schedule_two_subsections", result)
    }

    async fn get_schedule_three_parts(&self) -> Vec<ScheduleThreePart> {
        let result = sqlx::query_as::<_, ScheduleThreePart>(
            r#"SELECT part_id, COALESCE(part_name, '') AS part_name
               FROM schedule_schema.sp_get_schedule_three_parts()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_schedule_three_parts", result)
    }

    async fn get_schedule_three_election_procedures(&self) -> Vec<ScheduleThreeElectionProcedure> {
        let result = sqlx::query_as::<_, ScheduleThreeElectionProcedure>(
            r#"SELECT section_id, section_three_part, COALESCE(section_title, '') AS section_title, section_text
               FROM schedule_schema.sp_get_schedule_three_election_procedures()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_schedule_three_election_procedures", result)
    }

    async fn get_schedule_three_subsections(&self) -> Vec<ScheduleThreeSubsection> {
        let result = sqlx::query_as::<_, ScheduleThreeSubsection>(
            r#"SELECT section_id, section_three_part, subsection_id, COALESCE(section_text, '') AS section_text
               FROM schedule_schema.sp_get_schedule_three_subsections()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_schedule_three_subsections", result)
    }

    async fn get_schedule_four_concurrent_competencies(&self) -> Vec<Competency> {
        let result = sqlx::query_as::<_, Competency>(
            r#"SELECT part_id, COALESCE(part_csv, 'N/A') AS part_csv
               FROM schedule_schema.sp_get_schedule_four_concurrent_competencies()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_schedule_four_concurrent_competencies", result)
    }

    async fn get_schedule_five_exclusive_provincial_competencies(&self) -> Vec<Competency> {
        let result = sqlx::query_as::<_, Competency>(
            r#"SELECT part_id, COALESCE(part_csv, 'N/A') AS part_csv
               FROM schedule_schema.sp_get_schedule_five_exclusive_provincial_competencies()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_schedule_five_exclusive_provincial_competencies", result)
    }

    async fn get_schedule_six_transitional_arrangements(
        &self,
    ) -> Vec<ScheduleSixTransitionalArrangement> {
        let result = sqlx::query_as::<_, ScheduleSixTransitionalArrangement>(
            r#"SELECT section_id, COALESCE(section_title, '') AS section_title, section_text
               FROM schedule_schema.sp_get_schedule_six_transitional_arrangements()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_schedule_six_transitional_arrangements", result)
    }

    async fn get_schedule_six_subsections(&self) -> Vec<ScheduleSixSubsection> {
        let result = sqlx::query_as::<_, ScheduleSixSubsection>(
            r#"SELECT section_id, subsection_id, COALESCE(subsection_text, '') AS subsection_text
               FROM schedule_schema.sp_get_schedule_six_subsections()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_schedule_six_subsections", result)
    }

    async fn get_schedule_six_clauses(&self) -> Vec<ScheduleSixClause> {
        let result = sqlx::query_as::<_, ScheduleSixClause>(
            r#"SELECT section_id, subsection_id, clause_id, COALESCE(clause_text, '') AS clause_text
               FROM schedule_schema.sp_get_schedule_six_clauses()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_schedule_six_clauses", result)
    }

    async fn get_annexures(&self) -> Vec<Annexure> {
        let result = sqlx::query_as::<_, Annexure>(
            r#"SELECT annexure_id::text AS annexure_id, COALESCE(annexure_title, 'N/A') AS annexure_title
               FROM schedule_schema.sp_get_annexures()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_annexures", result)
    }

    async fn get_annexure_sections(&self) -> Vec<AnnexureSection> {
        let result = sqlx::query_as::<_, AnnexureSection>(
            r#"SELECT annexure_id::text AS annexure_id, section_id,
                      COALESCE(section_title, 'N/A') AS section_title, section_text
               FROM schedule_schema.sp_get_annexure_sections()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_annexure_sections", result)
    }

    async fn get_annexure_subsections(
        &self,
        annexure_id: &str,
        section_id: i32,
    ) -> Vec<AnnexureSubsection> {
        let result = sqlx::query_as::<_, AnnexureSubsection>(
            r#"SELECT section_id, COALESCE(subsection_id, 'N/A') AS subsection_id,
                      COALESCE(section_text, 'N/A') AS section_text
               FROM schedule_schema.sp_get_annexure_subsections($1::text, $2)"#,
        )
        .bind(annexure_id)
        .bind(section_id)
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_annexure_subsections", result)
    }
}

#[async_trait]
impl AmendmentRepository for PostgresRepository {
    async fn get_amendments(&self) -> Vec<Amendment> {
        let result = sqlx::query_as::<_, Amendment>(
            r#"SELECT COALESCE(amendment_title, 'N/A') AS amendment_title,
                      date_of_effect,
                      COALESCE(reference, 'N/A') AS reference
               FROM amendment_schema.sp_get_amendments()"#,
        )
        .fetch_all(&self.pool)
        .await;
        rows_or_empty("sp_get_amendments", result)
    }
}
