//! Kanban view of all applications: one column per stage.

use crate::application::JobApplication;
use crate::stage::Stage;
use crate::storage::ResumeStore;

/// One application as drawn on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub application: JobApplication,
    /// False in the terminal column.
    pub can_advance: bool,
    /// A resume is attached and its file is still on disk.
    pub resume_available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub stage: Stage,
    pub cards: Vec<Card>,
}

/// All four columns in pipeline order. Cards keep storage order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn build(applications: Vec<JobApplication>, resumes: &ResumeStore) -> Self {
        let mut columns: Vec<Column> = Stage::ALL
            .into_iter()
            .map(|stage| Column {
                stage,
                cards: Vec::new(),
            })
            .collect();

        for application in applications {
            let resume_available = match application.resume_path.as_deref() {
                Some(name) if resumes.exists(name) => true,
                Some(name) => {
                    log::warn!(
                        "Resume {} for job {} is missing from {}",
                        name,
                        application.id,
                        resumes.root().display()
                    );
                    false
                }
                None => false,
            };

            let card = Card {
                can_advance: !application.status.is_terminal(),
                resume_available,
                application,
            };

            if let Some(column) = columns.iter_mut().find(|c| c.stage == card.application.status) {
                column.cards.push(card);
            }
        }

        Self { columns }
    }

    pub fn column(&self, stage: Stage) -> &[Card] {
        self.columns
            .iter()
            .find(|c| c.stage == stage)
            .map(|c| c.cards.as_slice())
            .unwrap_or_default()
    }

    /// Total number of cards across columns.
    pub fn len(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
