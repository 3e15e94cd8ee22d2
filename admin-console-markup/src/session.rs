//! A controller wired to an [`HtmlDocument`].

use std::sync::Arc;

use admin_console_core::types::{PaginationRequest, RecordId, Screen, Slot, Surface, UiEvent};
use admin_console_core::{ConsoleResult, ControllerConfig, DataGateway, Intent, ScreenController};

use crate::document::HtmlDocument;
use crate::i18n::Language;

/// What to show once the console has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Screen {
        screen: Screen,
        pagination: Option<PaginationRequest>,
    },
    View(RecordId),
    Content(RecordId),
}

impl Target {
    pub fn intent(self) -> Intent {
        match self {
            Self::Screen { screen, pagination } => Intent::Navigate { screen, pagination },
            Self::View(id) => Intent::SelectView(id),
            Self::Content(id) => Intent::SelectContent(id),
        }
    }
}

pub struct Session {
    controller: ScreenController,
    document: HtmlDocument,
}

impl Session {
    /// Build the controller, show the home screen and wait for it to load.
    pub async fn open(
        gateway: Arc<dyn DataGateway>,
        language: Language,
        config: ControllerConfig,
    ) -> ConsoleResult<Self> {
        let document = HtmlDocument::new(language);
        let mut controller = ScreenController::new(gateway, Box::new(document.clone()), config)?;
        controller.start();
        controller.settle().await;
        Ok(Self {
            controller,
            document,
        })
    }

    pub async fn show(&mut self, target: Target) {
        self.dispatch(target.intent()).await;
    }

    pub async fn dispatch(&mut self, intent: Intent) {
        self.controller.dispatch(intent);
        self.controller.settle().await;
    }

    /// Fire a surface and wait for everything it started.
    pub async fn trigger(&mut self, slot: Slot, surface: Surface, event: UiEvent) -> usize {
        let fired = self.document.trigger(slot, surface, event);
        self.controller.settle().await;
        fired
    }

    pub fn fill(&self, slot: Slot, name: &str, value: &str) -> bool {
        self.document.fill(slot, name, value)
    }

    pub fn check(&self, slot: Slot, content_id: RecordId, checked: bool) -> bool {
        self.document.check(slot, content_id, checked)
    }

    pub fn controller(&self) -> &ScreenController {
        &self.controller
    }

    pub fn document(&self) -> &HtmlDocument {
        &self.document
    }

    pub fn html(&self) -> String {
        self.document.html()
    }
}
