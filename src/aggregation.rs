//! Assembles nested response objects from several flat procedure calls.
//!
//! Every function here fetches the parent rows first and then walks the
//! children one at a time. IDs are assumed to be range-checked already.

use crate::{
    error::{ApiError, require_rows},
    models::{
        FullAnnexure, FullChapter, FullSection, ScheduleSixFull, ScheduleThreeFull,
        ScheduleTwoFull,
    },
    repository::{MainRepository, ScheduleRepository},
};

/// `None` for an empty collection, so it serializes as `null`.
fn non_empty<T>(rows: Vec<T>) -> Option<Vec<T>> {
    if rows.is_empty() { None } else { Some(rows) }
}

/// Builds a section from its row: the text when it has one, otherwise its
/// subsections and clauses.
async fn assemble_section(
    repo: &dyn MainRepository,
    section_id: i32,
    section_title: String,
    section_text: Option<String>,
) -> FullSection {
    if section_text.is_some() {
        return FullSection {
            section_id,
            section_title,
            section_text,
            sub_sections: None,
            clauses: None,
        };
    }

    let sub_sections = non_empty(repo.get_subsections_by_section_id(section_id).await);
    // Clauses only ever hang off subsections.
    let clauses = match sub_sections {
        Some(_) => non_empty(repo.get_clauses_of_subsection(section_id).await),
        None => None,
    };

    FullSection {
        section_id,
        section_title,
        section_text: None,
        sub_sections,
        clauses,
    }
}

/// full_section
///
/// A section with all of its contents. 404 when the section does not exist,
/// or when it has neither text nor subsections.
pub async fn full_section(
    repo: &dyn MainRepository,
    section_id: i32,
) -> Result<FullSection, ApiError> {
    let section = repo
        .get_section(section_id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Error: Section {section_id} not found")))?;

    let full = assemble_section(
        repo,
        section.section_id,
        section.section_title,
        section.section_text,
    )
    .await;

    if full.section_text.is_none() && full.sub_sections.is_none() {
        return Err(ApiError::not_found(format!(
            "Error: Section {section_id} has no content"
        )));
    }
    Ok(full)
}

/// full_chapter
///
/// A chapter with every one of its sections in full, in section order.
pub async fn full_chapter(
    repo: &dyn MainRepository,
    chapter_id: i32,
) -> Result<FullChapter, ApiError> {
    let chapter = repo
        .get_chapters()
        .await
        .into_iter()
        .find(|chapter| chapter.chapter_id == chapter_id)
        .ok_or_else(|| ApiError::not_found(format!("Error: Chapter {chapter_id} not found")))?;

    let mut sections = require_rows(
        repo.get_sections_by_chapter_id(chapter_id).await,
        &format!("Error: Sections for Chapter {chapter_id} not found"),
    )?;
    sections.sort_by_key(|section| section.section_id);

    let mut full_sections = Vec::with_capacity(sections.len());
    for section in sections {
        full_sections.push(
            assemble_section(
                repo,
                section.section_id,
                section.section_title,
                section.section_text,
            )
            .await,
        );
    }

    Ok(FullChapter {
        chapter_id: chapter.chapter_id,
        chapter_title: chapter.chapter_title,
        full_sections,
    })
}

/// full_annexure
///
/// An annexure, its sections, and the subsections of each section grouped per
/// section. 404 only when the annexure itself is unknown. `annexure_id` must
/// already be normalised to upper case.
pub async fn full_annexure(
    repo: &dyn ScheduleRepository,
    annexure_id: &str,
) -> Result<FullAnnexure, ApiError> {
    let annexure = repo
        .get_annexures()
        .await
        .into_iter()
        .find(|annexure| annexure.annexure_id == annexure_id)
        .ok_or_else(|| ApiError::not_found("Error: Annexure not found"))?;

    // An annexure without sections is still returned, with an empty list.
    let sections: Vec<_> = repo
        .get_annexure_sections()
        .await
        .into_iter()
        .filter(|section| section.annexure_id == annexure_id)
        .collect();

    let mut groups = Vec::new();
    for section in &sections {
        let subsections = repo
            .get_annexure_subsections(annexure_id, section.section_id)
            .await;
        if !subsections.is_empty() {
            groups.push(subsections);
        }
    }

    Ok(FullAnnexure {
        annexure_id: annexure.annexure_id,
        annexure_title: annexure.annexure_title,
        annexure_sections: sections,
        annexure_subsections: non_empty(groups),
    })
}

/// Schedule 2 in full: each oath, plus the subsections of the oaths that have no text.
pub async fn schedule_two_full(repo: &dyn ScheduleRepository) -> Result<ScheduleTwoFull, ApiError> {
    let oaths = require_rows(
        repo.get_schedule_two_oaths_affirmations().await,
        "Error: Schedule 2 could not be found",
    )?;

    let mut groups = Vec::new();
    for oath in oaths.iter().filter(|oath| oath.section_text.is_none()) {
        let subsections = repo.get_schedule_two_subsections(oath.section_id).await;
        if !subsections.is_empty() {
            groups.push(subsections);
        }
    }

    Ok(ScheduleTwoFull {
        oaths_affirmations: oaths,
        subsections: non_empty(groups),
    })
}

pub async fn schedule_three_full(
    repo: &dyn ScheduleRepository,
) -> Result<ScheduleThreeFull, ApiError> {
    let parts = require_rows(
        repo.get_schedule_three_parts().await,
        "Error: Schedule 3 parts could not be found",
    )?;
    let election_procedures = require_rows(
        repo.get_schedule_three_election_procedures().await,
        "Error: Schedule 3 could not be found",
    )?;
    let subsections = non_empty(repo.get_schedule_three_subsections().await);

    Ok(ScheduleThreeFull {
        parts,
        election_procedures,
        subsections,
    })
}

pub async fn schedule_six_full(repo: &dyn ScheduleRepository) -> Result<ScheduleSixFull, ApiError> {
    let transitional_arrangements = require_rows(
        repo.get_schedule_six_transitional_arrangements().await,
        "Error: Schedule 6 could not be found",
    )?;
    let clauses = repo.get_schedule_six_clauses().await;
    let subsections = non_empty(repo.get_schedule_six_subsections().await);

    Ok(ScheduleSixFull {
        transitional_arrangements,
        clauses,
        subsections,
    })
}
