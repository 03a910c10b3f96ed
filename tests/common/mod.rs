#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use constitution_api::{
    AppConfig, AppState, limiter_for,
    models::{
        Amendment, Annexure, AnnexureSection, AnnexureSubsection, Chapter, Clause, Competency,
        NonDerogableRight, Preamble, ScheduleOneAGeoAreasProvince, ScheduleOneNationalFlag,
        ScheduleSixClause, ScheduleSixSubsection, ScheduleSixTransitionalArrangement,
        ScheduleThreeElectionProcedure, ScheduleThreePart, ScheduleThreeSubsection,
        ScheduleTwoOathsAffirmation, ScheduleTwoSubsection, Section, SectionByChapter, Subsection,
    },
    repository::{AmendmentRepository, MainRepository, ScheduleRepository},
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

// --- MOCK REPOSITORY IMPLEMENTATION ---

// In-memory stand-in for the three stored-procedure repositories.
// Every call is recorded so tests can assert which procedures ran.
#[derive(Default)]
pub struct MockConstitution {
    pub preamble: Option<Preamble>,
    pub chapters: Vec<Chapter>,
    pub sections: Vec<Section>,
    pub subsections: HashMap<i32, Vec<Subsection>>,
    pub clauses: HashMap<i32, Vec<Clause>>,
    pub rights: Vec<NonDerogableRight>,

    pub flag: Vec<ScheduleOneNationalFlag>,
    pub provinces: Vec<ScheduleOneAGeoAreasProvince>,
    pub oaths: Vec<ScheduleTwoOathsAffirmation>,
    pub oath_subsections: HashMap<i32, Vec<ScheduleTwoSubsection>>,
    pub three_parts: Vec<ScheduleThreePart>,
    pub three_procedures: Vec<ScheduleThreeElectionProcedure>,
    pub three_subsections: Vec<ScheduleThreeSubsection>,
    pub concurrent: Vec<Competency>,
    pub exclusive: Vec<Competency>,
    pub six_arrangements: Vec<ScheduleSixTransitionalArrangement>,
    pub six_subsections: Vec<ScheduleSixSubsection>,
    pub six_clauses: Vec<ScheduleSixClause>,

    pub annexures: Vec<Annexure>,
    pub annexure_sections: Vec<AnnexureSection>,
    pub annexure_subsections: HashMap<(String, i32), Vec<AnnexureSubsection>>,

    pub amendments: Vec<Amendment>,

    pub calls: Mutex<Vec<String>>,
}

impl MockConstitution {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// A small but structurally complete constitution:
    /// - chapters 1 - 14, with sections only in chapters 1, 2 and 13;
    /// - section 1 and 230A carry text, section 7 has subsections and clauses,
    ///   section 9 has neither text nor subsections;
    /// - annexure A has a section with subsections, annexure B does not.
    pub fn sample() -> Self {
        let chapters = (1..=14)
            .map(|n| Chapter {
                chapter_id: n,
                chapter_title: format!("Chapter {n}"),
            })
            .collect();

        let sections = vec![
            section(2, 1, "Supremacy of Constitution", Some("This Constitution is supreme law.")),
            section(1, 1, "Republic of South Africa", Some("The Republic is one, sovereign, democratic state.")),
            section(7, 2, "Rights", None),
            section(9, 2, "Equality", None),
            section(23065, 13, "Provincial loans", Some("A province may raise loans.")),
        ];

        let mut subsections = HashMap::new();
        subsections.insert(
            7,
            vec![
                subsection("1", "This Bill of Rights is a cornerstone of democracy."),
                subsection("2", "The state must respect the rights in the Bill of Rights."),
            ],
        );
        let mut clauses = HashMap::new();
        clauses.insert(
            7,
            vec![
                clause(7, "2", "a", "respect"),
                clause(7, "2", "b", "protect"),
            ],
        );

        let mut oath_subsections = HashMap::new();
        oath_subsections.insert(
            2,
            vec![ScheduleTwoSubsection {
                section_id: 2,
                subsection_id: "1".to_string(),
                subsection_text: "The Deputy President must swear.".to_string(),
            }],
        );

        let mut annexure_subsections = HashMap::new();
        annexure_subsections.insert(
            ("A".to_string(), 2),
            vec![
                annexure_subsection(2, "1", "Members of the Assembly."),
                annexure_subsection(2, "2", "Seats are allocated."),
            ],
        );

        Self {
            preamble: Some(Preamble {
                title: "Preamble".to_string(),
                preamble_contents: "We, the people of South Africa".to_string(),
            }),
            chapters,
            sections,
            subsections,
            clauses,
            rights: vec![NonDerogableRight {
                section_number: 9,
                section_title: "Equality".to_string(),
                protection_extent: "With respect to unfair discrimination".to_string(),
            }],
            flag: vec![ScheduleOneNationalFlag {
                section_id: 1,
                section_text: "The national flag is rectangular.".to_string(),
            }],
            provinces: vec![ScheduleOneAGeoAreasProvince {
                province: "Gauteng".to_string(),
                map_csv: "TOWN,JHB".to_string(),
            }],
            oaths: vec![
                ScheduleTwoOathsAffirmation {
                    section_id: 1,
                    section_title: "Oath of President".to_string(),
                    section_text: Some("I, A.B., swear.".to_string()),
                },
                ScheduleTwoOathsAffirmation {
                    section_id: 2,
                    section_title: "Oath of Deputy President".to_string(),
                    section_text: None,
                },
            ],
            oath_subsections,
            three_parts: vec![ScheduleThreePart {
                part_id: "A".to_string(),
                part_name: "Election procedures for constitutional office-bearers".to_string(),
            }],
            three_procedures: vec![ScheduleThreeElectionProcedure {
                section_id: 1,
                section_three_part: "A".to_string(),
                section_title: "Application".to_string(),
                section_text: Some("The procedure applies.".to_string()),
            }],
            three_subsections: vec![],
            concurrent: vec![Competency {
                part_id: "A".to_string(),
                part_csv: "Administration of indigenous forests,Agriculture".to_string(),
            }],
            exclusive: vec![Competency {
                part_id: "A".to_string(),
                part_csv: "Abattoirs,Ambulance services".to_string(),
            }],
            six_arrangements: vec![ScheduleSixTransitionalArrangement {
                section_id: 1,
                section_title: "Definitions".to_string(),
                section_text: None,
            }],
            six_subsections: vec![],
            six_clauses: vec![ScheduleSixClause {
                section_id: 1,
                subsection_id: "1".to_string(),
                clause_id: "a".to_string(),
                clause_text: "\"previous Constitution\" means".to_string(),
            }],
            annexures: vec![
                Annexure {
                    annexure_id: "A".to_string(),
                    annexure_title: "Schedule 2 of the previous Constitution".to_string(),
                },
                Annexure {
                    annexure_id: "B".to_string(),
                    annexure_title: "Government of National Unity".to_string(),
                },
            ],
            annexure_sections: vec![
                annexure_section("A", 1, Some("Parties registered.")),
                annexure_section("A", 2, None),
                annexure_section("B", 1, Some("Executive Deputy Presidents.")),
            ],
            annexure_subsections,
            amendments: vec![
                Amendment {
                    amendment_title: "Constitution First Amendment Act of 1997".to_string(),
                    date_of_effect: NaiveDate::from_ymd_opt(1997, 10, 1).unwrap(),
                    reference: "Act 35 of 1997".to_string(),
                },
                Amendment {
                    amendment_title: "Constitution Second Amendment Act of 1998".to_string(),
                    date_of_effect: NaiveDate::from_ymd_opt(1998, 10, 2).unwrap(),
                    reference: "Act 65 of 1998".to_string(),
                },
            ],
            calls: Mutex::new(vec![]),
        }
    }
}

pub fn section(id: i32, chapter: i32, title: &str, text: Option<&str>) -> Section {
    Section {
        section_id: id,
        chapter_id: chapter,
        section_title: title.to_string(),
        section_text: text.map(str::to_string),
    }
}

pub fn subsection(id: &str, text: &str) -> Subsection {
    Subsection {
        subsection_id: id.to_string(),
        subsection_text: text.to_string(),
    }
}

pub fn clause(section_id: i32, subsection_id: &str, clause_id: &str, text: &str) -> Clause {
    Clause {
        section_id,
        subsection_id: subsection_id.to_string(),
        clause_id: clause_id.to_string(),
        clause_text: text.to_string(),
    }
}

pub fn annexure_section(annexure: &str, id: i32, text: Option<&str>) -> AnnexureSection {
    AnnexureSection {
        annexure_id: annexure.to_string(),
        section_id: id,
        section_title: format!("Section {id}"),
        section_text: text.map(str::to_string),
    }
}

pub fn annexure_subsection(section_id: i32, id: &str, text: &str) -> AnnexureSubsection {
    AnnexureSubsection {
        section_id,
        subsection_id: id.to_string(),
        section_text: text.to_string(),
    }
}

#[async_trait]
impl MainRepository for MockConstitution {
    async fn get_preamble(&self) -> Option<Preamble> {
        self.record("sp_get_preamble");
        self.preamble.clone()
    }
    async fn get_chapters(&self) -> Vec<Chapter> {
        self.record("sp_get_chapters");
        self.chapters.clone()
    }
    async fn get_sections(&self) -> Vec<Section> {
        self.record("sp_get_sections");
        self.sections.clone()
    }
    async fn get_section(&self, section_id: i32) -> Option<Section> {
        self.record(format!("sp_get_section_by_id({section_id})"));
        self.sections
            .iter()
            .find(|s| s.section_id == section_id)
            .cloned()
    }
    async fn get_non_derogable_rights(&self) -> Vec<NonDerogableRight> {
        self.record("sp_get_non_derogable_rights");
        self.rights.clone()
    }
    // Deliberately unordered, like a procedure without ORDER BY.
    async fn get_sections_by_chapter_id(&self, chapter_id: i32) -> Vec<SectionByChapter> {
        self.record(format!("sp_get_sections_by_chapter_id({chapter_id})"));
        self.sections
            .iter()
            .filter(|s| s.chapter_id == chapter_id)
            .map(|s| SectionByChapter {
                section_id: s.section_id,
                section_title: s.section_title.clone(),
                section_text: s.section_text.clone(),
            })
            .collect()
    }
    async fn get_subsections_by_section_id(&self, section_id: i32) -> Vec<Subsection> {
        self.record(format!("sp_get_subsections_by_section_id({section_id})"));
        self.subsections.get(&section_id).cloned().unwrap_or_default()
    }
    async fn get_clauses_of_subsection(&self, section_id: i32) -> Vec<Clause> {
        self.record(format!("sp_get_clauses_of_subsection({section_id})"));
        self.clauses.get(&section_id).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl ScheduleRepository for MockConstitution {
    async fn get_schedule_one_national_flag(&self) -> Vec<ScheduleOneNationalFlag> {
        self.flag.clone()
    }
    async fn get_schedule_one_a_geo_areas_provinces(&self) -> Vec<ScheduleOneAGeoAreasProvince> {
        self.provinces.clone()
    }
    async fn get_schedule_two_oaths_affirmations(&self) -> Vec<ScheduleTwoOathsAffirmation> {
        self.oaths.clone()
    }
    async fn get_schedule_two_subsections(&self, section_id: i32) -> Vec<ScheduleTwoSubsection> {
        self.record(format!("sp_get_schedule_two_subsections({section_id})"));
        self.oath_subsections
            .get(&section_id)
            .cloned()
            .unwrap_or_default()
    }
    async fn get_schedule_three_parts(&self) -> Vec<ScheduleThreePart> {
        self.three_parts.clone()
    }
    async fn get_schedule_three_election_procedures(&self) -> Vec<ScheduleThreeElectionProcedure> {
        self.three_procedures.clone()
    }
    async fn get_schedule_three_subsections(&self) -> Vec<ScheduleThreeSubsection> {
        self.three_subsections.clone()
    }
    async fn get_schedule_four_concurrent_competencies(&self) -> Vec<Competency> {
        self.concurrent.clone()
    }
    async fn get_schedule_five_exclusive_provincial_competencies(&self) -> Vec<Competency> {
        self.exclusive.clone()
    }
    async fn get_schedule_six_transitional_arrangements(
        &self,
    ) -> Vec<ScheduleSixTransitionalArrangement> {
        self.six_arrangements.clone()
    }
    async fn get_schedule_six_subsections(&self) -> Vec<ScheduleSixSubsection> {
        self.six_subsections.clone()
    }
    async fn get_schedule_six_clauses(&self) -> Vec<ScheduleSixClause> {
        self.six_clauses.clone()
    }
    async fn get_annexures(&self) -> Vec<Annexure> {
        self.record("sp_get_annexures");
        self.annexures.clone()
    }
    async fn get_annexure_sections(&self) -> Vec<AnnexureSection> {
        self.record("sp_get_annexure_sections");
        self.annexure_sections.clone()
    }
    async fn get_annexure_subsections(
        &self,
        annexure_id: &str,
        section_id: i32,
    ) -> Vec<AnnexureSubsection> {
        self.record(format!("sp_get_annexure_subsections({annexure_id},{section_id})"));
        self.annexure_subsections
            .get(&(annexure_id.to_string(), section_id))
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl AmendmentRepository for MockConstitution {
    async fn get_amendments(&self) -> Vec<Amendment> {
        self.amendments.clone()
    }
}

// --- TEST UTILITIES ---

/// AppState backed by `repo` for all three repository roles.
pub fn test_state(repo: MockConstitution, config: AppConfig) -> AppState {
    let repo = Arc::new(repo);
    AppState {
        main_repo: repo.clone(),
        schedule_repo: repo.clone(),
        amendment_repo: repo,
        limiter: limiter_for(&config),
        config,
    }
}
