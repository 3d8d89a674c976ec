//! Category to package selection.
//!
//! Picking a category clears the chosen package and hands out a
//! [`FetchTicket`]. A package list is accepted only together with the ticket
//! of the latest selection, so a slow response for an earlier category can
//! never overwrite the current one.

use domain_packages::{Category, Package};
use uuid::Uuid;

use crate::client::{ClientResult, EventApi};

/// Identifies one package fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    category: Category,
}

impl FetchTicket {
    pub fn category(&self) -> Category {
        self.category
    }
}

#[derive(Debug, Clone, Default)]
pub enum PickerState {
    #[default]
    NoCategory,
    Fetching(FetchTicket),
    Loaded {
        category: Category,
        packages: Vec<Package>,
    },
    Failed {
        category: Category,
        error: String,
    },
}

#[derive(Debug, Default)]
pub struct PackagePicker {
    state: PickerState,
    selected: Option<Uuid>,
    issued: u64,
}

impl PackagePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn category(&self) -> Option<Category> {
        match &self.state {
            PickerState::NoCategory => None,
            PickerState::Fetching(ticket) => Some(ticket.category),
            PickerState::Loaded { category, .. } | PickerState::Failed { category, .. } => {
                Some(*category)
            }
        }
    }

    /// Packages of the current category, empty until they arrive
    pub fn packages(&self) -> &[Package] {
        match &self.state {
            PickerState::Loaded { packages, .. } => packages,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    /// Start over for `category`. The previous package choice is dropped.
    pub fn select_category(&mut self, category: Category) -> FetchTicket {
        self.issued += 1;
        let ticket = FetchTicket {
            seq: self.issued,
            category,
        };
        self.selected = None;
        self.state = PickerState::Fetching(ticket);
        ticket
    }

    pub fn clear(&mut self) {
        self.state = PickerState::NoCategory;
        self.selected = None;
    }

    /// Apply a fetch result. Returns `false` and changes nothing when the
    /// ticket is stale.
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<Vec<Package>, String>) -> bool {
        match &self.state {
            PickerState::Fetching(current) if *current == ticket => {}
            _ => return false,
        }

        self.state = match result {
            Ok(packages) => PickerState::Loaded {
                category: ticket.category,
                packages: packages
                    .into_iter()
                    .filter(|p| p.category == ticket.category)
                    .collect(),
            },
            Err(error) => PickerState::Failed {
                category: ticket.category,
                error,
            },
        };
        true
    }

    /// Select a category and fetch its packages in one step
    pub async fn load(&mut self, api: &dyn EventApi, category: Category) -> ClientResult<&[Package]> {
        let ticket = self.select_category(category);
        match api.list_packages(Some(category)).await {
            Ok(packages) => {
                self.apply(ticket, Ok(packages));
                Ok(self.packages())
            }
            Err(e) => {
                self.apply(ticket, Err(e.to_string()));
                Err(e)
            }
        }
    }

    /// Choose one of the loaded packages by id or by name (ignoring case).
    pub fn select_package(&mut self, id_or_name: &str) -> Option<&Package> {
        let wanted = id_or_name.trim();
        let id = Uuid::parse_str(wanted).ok();
        let package = match &self.state {
            PickerState::Loaded { packages, .. } => packages
                .iter()
                .find(|p| Some(p.id) == id || p.name.eq_ignore_ascii_case(wanted)),
            _ => None,
        }?;

        self.selected = Some(package.id);
        Some(package)
    }
}
