use crate::{
    aggregation,
    error::{ApiError, require_rows},
    models::{
        Amendment, Annexure, Chapter, Clause, Competency, FullAnnexure, FullChapter,
        FullSection, NonDerogableRight, Preamble, ScheduleOneAGeoAreasProvince,
        ScheduleOneNationalFlag, ScheduleSixFull, ScheduleThreeFull, ScheduleTwoFull, Section,
        SectionByChapter, Subsection,
    },
    repository::{AmendmentRepositoryState, MainRepositoryState, ScheduleRepositoryState},
    validation,
};
use axum::{
    Json,
    extract::{Path, State},
};

pub type ApiResult<T> = Result<Json<T>, ApiError>;

// --- Main body: /api/v1/main ---

/// get_preamble
///
/// Returns the Preamble to the Constitution.
#[utoipa::path(
    get,
    path = "/api/v1/main/preamble",
    responses(
        (status = 200, description = "Preamble", body = Preamble),
        (status = 404, description = "Preamble missing")
    )
)]
pub async fn get_preamble(State(repo): State<MainRepositoryState>) -> ApiResult<Preamble> {
    repo.get_preamble()
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Error: Preamble could not be found"))
}

/// get_chapters
///
/// Every chapter's number and title.
#[utoipa::path(
    get,
    path = "/api/v1/main/chapters/all",
    responses((status = 200, description = "Every chapter's id and title", body = [Chapter]))
)]
pub async fn get_chapters(State(repo): State<MainRepositoryState>) -> ApiResult<Vec<Chapter>> {
    let chapters = repo.get_chapters().await;
    Ok(Json(require_rows(chapters, "Error: Chapters could not be found")?))
}

/// get_chapter
///
/// Looks a single chapter up in the chapter list. Valid IDs are 1 - 14.
#[utoipa::path(
    get,
    path = "/api/v1/main/chapters/{chapter_id}",
    params(("chapter_id" = i32, Path, description = "Chapter number, 1 - 14")),
    responses(
        (status = 200, description = "Chapter", body = Chapter),
        (status = 404, description = "Invalid or unknown chapter")
    )
)]
pub async fn get_chapter(
    State(repo): State<MainRepositoryState>,
    Path(chapter_id): Path<i32>,
) -> ApiResult<Chapter> {
    let chapter_id = validation::chapter_id(chapter_id)?;
    repo.get_chapters()
        .await
        .into_iter()
        .find(|chapter| chapter.chapter_id == chapter_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Error: Chapter {chapter_id} not found")))
}

/// get_sections_by_chapter
///
/// The sections of one chapter, ordered by section number.
#[utoipa::path(
    get,
    path = "/api/v1/main/chapters/{chapter_id}/sections",
    params(("chapter_id" = i32, Path, description = "Chapter number, 1 - 14")),
    responses(
        (status = 200, description = "Sections of the chapter", body = [SectionByChapter]),
        (status = 404, description = "Invalid chapter or no sections")
    )
)]
pub async fn get_sections_by_chapter(
    State(repo): State<MainRepositoryState>,
    Path(chapter_id): Path<i32>,
) -> ApiResult<Vec<SectionByChapter>> {
    let chapter_id = validation::chapter_id(chapter_id)?;
    let mut sections = repo.get_sections_by_chapter_id(chapter_id).await;
    sections.sort_by_key(|section| section.section_id);
    Ok(Json(require_rows(
        sections,
        &format!("Error: Sections for Chapter {chapter_id} not found"),
    )?))
}

/// get_full_chapter
///
/// A chapter with all of its sections, subsections and clauses.
#[utoipa::path(
    get,
    path = "/api/v1/main/chapters/{chapter_id}/full",
    params(("chapter_id" = i32, Path, description = "Chapter number, 1 - 14")),
    responses(
        (status = 200, description = "Full chapter", body = FullChapter),
        (status = 404, description = "Invalid or unknown chapter")
    )
)]
pub async fn get_full_chapter(
    State(repo): State<MainRepositoryState>,
    Path(chapter_id): Path<i32>,
) -> ApiResult<FullChapter> {
    let chapter_id = validation::chapter_id(chapter_id)?;
    Ok(Json(aggregation::full_chapter(repo.as_ref(), chapter_id).await?))
}

/// get_sections
///
/// Every section of the main body, across all chapters.
#[utoipa::path(
    get,
    path = "/api/v1/main/sections/all",
    responses((status = 200, description = "Every section", body = [Section]))
)]
pub async fn get_sections(State(repo): State<MainRepositoryState>) -> ApiResult<Vec<Section>> {
    let sections = repo.get_sections().await;
    Ok(Json(require_rows(sections, "Error: Sections could not be found")?))
}

/// get_section
///
/// A single section row. Valid IDs are 1 - 243, plus 23065 for section 230A.
#[utoipa::path(
    get,
    path = "/api/v1/main/section/{section_id}",
    params(("section_id" = i32, Path, description = "Section number; 23065 is 230A")),
    responses(
        (status = 200, description = "Section", body = Section),
        (status = 404, description = "Invalid or unknown section")
    )
)]
pub async fn get_section(
    State(repo): State<MainRepositoryState>,
    Path(section_id): Path<i32>,
) -> ApiResult<Section> {
    let section_id = validation::section_id(section_id)?;
    repo.get_section(section_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Error: Section {section_id} not found")))
}

/// get_subsections
///
/// The numbered subsections of a section.
#[utoipa::path(
    get,
    path = "/api/v1/main/section/{section_id}/subsections",
    params(("section_id" = i32, Path, description = "Section number; 23065 is 230A")),
    responses(
        (status = 200, description = "Subsections of the section", body = [Subsection]),
        (status = 404, description = "Invalid section or no subsections")
    )
)]
pub async fn get_subsections(
    State(repo): State<MainRepositoryState>,
    Path(section_id): Path<i32>,
) -> ApiResult<Vec<Subsection>> {
    let section_id = validation::section_id(section_id)?;
    let subsections = repo.get_subsections_by_section_id(section_id).await;
    Ok(Json(require_rows(
        subsections,
        &format!("Error: Subsections for Section {section_id} not found"),
    )?))
}

/// get_clauses
///
/// The lettered clauses under a section's subsections.
#[utoipa::path(
    get,
    path = "/api/v1/main/section/{section_id}/clauses",
    params(("section_id" = i32, Path, description = "Section number; 23065 is 230A")),
    responses(
        (status = 200, description = "Clauses of the section's subsections", body = [Clause]),
        (status = 404, description = "Invalid section or no clauses")
    )
)]
pub async fn get_clauses(
    State(repo): State<MainRepositoryState>,
    Path(section_id): Path<i32>,
) -> ApiResult<Vec<Clause>> {
    let section_id = validation::section_id(section_id)?;
    let clauses = repo.get_clauses_of_subsection(section_id).await;
    Ok(Json(require_rows(
        clauses,
        &format!("Error: Clauses for Section {section_id} not found"),
    )?))
}

/// get_full_section
///
/// A section with its text, or with its subsections and clauses when it has no text.
#[utoipa::path(
    get,
    path = "/api/v1/main/section/{section_id}/full",
    params(("section_id" = i32, Path, description = "Section number; 23065 is 230A")),
    responses(
        (status = 200, description = "Full section", body = FullSection),
        (status = 404, description = "Invalid, unknown or empty section")
    )
)]
pub async fn get_full_section(
    State(repo): State<MainRepositoryState>,
    Path(section_id): Path<i32>,
) -> ApiResult<FullSection> {
    let section_id = validation::section_id(section_id)?;
    Ok(Json(aggregation::full_section(repo.as_ref(), section_id).await?))
}

/// get_non_derogable_rights
///
/// The Table of Non-Derogable Rights from the Bill of Rights (Chapter 2).
#[utoipa::path(
    get,
    path = "/api/v1/main/ndr/all",
    responses((status = 200, description = "Non-derogable rights", body = [NonDerogableRight]))
)]
pub async fn get_non_derogable_rights(
    State(repo): State<MainRepositoryState>,
) -> ApiResult<Vec<NonDerogableRight>> {
    let rights = repo.get_non_derogable_rights().await;
    Ok(Json(require_rows(
        rights,
        "Error: Non-derogable rights could not be found",
    )?))
}

// --- Schedules: /api/v1/schedules ---

/// get_schedule_one
///
/// Schedule 1: the national flag.
#[utoipa::path(
    get,
    path = "/api/v1/schedules/one",
    responses((status = 200, description = "Schedule 1: National Flag", body = [ScheduleOneNationalFlag]))
)]
pub async fn get_schedule_one(
    State(repo): State<ScheduleRepositoryState>,
) -> ApiResult<Vec<ScheduleOneNationalFlag>> {
    let rows = repo.get_schedule_one_national_flag().await;
    Ok(Json(require_rows(rows, "Error: Schedule 1 could not be found")?))
}

/// get_schedule_one_a
#[utoipa::path(
    get,
    path = "/api/v1/schedules/one-a",
    responses((status = 200, description = "Schedule 1A: Geographical areas of provinces", body = [ScheduleOneAGeoAreasProvince]))
)]
pub async fn get_schedule_one_a(
    State(repo): State<ScheduleRepositoryState>,
) -> ApiResult<Vec<ScheduleOneAGeoAreasProvince>> {
    let rows = repo.get_schedule_one_a_geo_areas_provinces().await;
    Ok(Json(require_rows(rows, "Error: Schedule 1A could not be found")?))
}

/// get_schedule_two_full
///
/// Schedule 2 with subsections nested for oaths that have no text of their own.
#[utoipa::path(
    get,
    path = "/api/v1/schedules/two/full",
    responses((status = 200, description = "Schedule 2: Oaths and Solemn Affirmations", body = ScheduleTwoFull))
)]
pub async fn get_schedule_two_full(
    State(repo): State<ScheduleRepositoryState>,
) -> ApiResult<ScheduleTwoFull> {
    Ok(Json(aggregation::schedule_two_full(repo.as_ref()).await?))
}

/// get_schedule_three_full
///
/// Schedule 3, both parts, with procedures and subsections.
#[utoipa::path(
    get,
    path = "/api/v1/schedules/three/full",
    responses((status = 200, description = "Schedule 3: Election Procedures", body = ScheduleThreeFull))
)]
pub async fn get_schedule_three_full(
    State(repo): State<ScheduleRepositoryState>,
) -> ApiResult<ScheduleThreeFull> {
    Ok(Json(aggregation::schedule_three_full(repo.as_ref()).await?))
}

/// get_schedule_four
///
/// Schedule 4: functional areas of concurrent competence.
#[utoipa::path(
    get,
    path = "/api/v1/schedules/four",
    responses((status = 200, description = "Schedule 4: Concurrent competencies", body = [Competency]))
)]
pub async fn get_schedule_four(
    State(repo): State<ScheduleRepositoryState>,
) -> ApiResult<Vec<Competency>> {
    let rows = repo.get_schedule_four_concurrent_competencies().await;
    Ok(Json(require_rows(rows, "Error: Schedule 4 could not be found")?))
}

/// get_schedule_five
///
/// Schedule 5: functional areas of exclusive provincial competence.
#[utoipa::path(
    get,
    path = "/api/v1/schedules/five",
    responses((status = 200, description = "Schedule 5: Exclusive provincial competencies", body = [Competency]))
)]
pub async fn get_schedule_five(
    State(repo): State<ScheduleRepositoryState>,
) -> ApiResult<Vec<Competency>> {
    let rows = repo.get_schedule_five_exclusive_provincial_competencies().await;
    Ok(Json(require_rows(rows, "Error: Schedule 5 could not be found")?))
}

/// get_schedule_six_full
///
/// Schedule 6 with its clauses and subsections.
#[utoipa::path(
    get,
    path = "/api/v1/schedules/six/full",
    responses((status = 200, description = "Schedule 6: Transitional Arrangements", body = ScheduleSixFull))
)]
pub async fn get_schedule_six_full(
    State(repo): State<ScheduleRepositoryState>,
) -> ApiResult<ScheduleSixFull> {
    Ok(Json(aggregation::schedule_six_full(repo.as_ref()).await?))
}

// --- Annexures: /api/v1/annexures ---

/// get_annexures
///
/// Every annexure's id and title.
#[utoipa::path(
    get,
    path = "/api/v1/annexures/all",
    responses(
        (status = 200, description = "Annexures", body = [Annexure]),
        (status = 404, description = "No annexures")
    )
)]
pub async fn get_annexures(
    State(repo): State<ScheduleRepositoryState>,
) -> ApiResult<Vec<Annexure>> {
    let annexures = repo.get_annexures().await;
    Ok(Json(require_rows(
        annexures,
        "Error: annexures could not be found",
    )?))
}

/// get_full_annexure
///
/// The full content of one annexure. The ID is a single letter, case-insensitive.
#[utoipa::path(
    get,
    path = "/api/v1/annexures/{annexure_id}/full",
    params(("annexure_id" = String, Path, description = "Annexure letter")),
    responses(
        (status = 200, description = "Full annexure", body = FullAnnexure),
        (status = 404, description = "Invalid or unknown annexure")
    )
)]
pub async fn get_full_annexure(
    State(repo): State<ScheduleRepositoryState>,
    Path(annexure_id): Path<String>,
) -> ApiResult<FullAnnexure> {
    let annexure_id = validation::annexure_id(&annexure_id)?;
    Ok(Json(
        aggregation::full_annexure(repo.as_ref(), &annexure_id).await?,
    ))
}

// --- Amendments: /api/v1/amendments ---

/// get_amendments
///
/// All amendments to the Constitution to date.
#[utoipa::path(
    get,
    path = "/api/v1/amendments/all",
    responses(
        (status = 200, description = "Amendments", body = [Amendment]),
        (status = 404, description = "No amendments")
    )
)]
pub async fn get_amendments(
    State(repo): State<AmendmentRepositoryState>,
) -> ApiResult<Vec<Amendment>> {
    let amendments = repo.get_amendments().await;
    Ok(Json(require_rows(
        amendments,
        "Error: amendments could not be found",
    )?))
}
